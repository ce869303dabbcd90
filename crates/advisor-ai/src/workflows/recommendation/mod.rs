//! Recommendation engine: weighted tool scoring and the derived shortlist
//! cache persisted per user.

pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Recommendation, RecommendationStatus};
pub use repository::RecommendationRepository;
pub use router::recommendation_router;
pub use scoring::{ScoreComponent, ScoreFactor, ScoringEngine, ScoringWeights, ToolScore};
pub use service::{RecommendationService, RecommendationServiceError};
