use std::sync::Arc;

use chrono::Utc;

use super::domain::{Recommendation, RecommendationStatus};
use super::repository::RecommendationRepository;
use super::scoring::{ScoringEngine, ScoringWeights};
use crate::workflows::assessment::{
    AssessmentContext, AssessmentRepository, ProfileSnapshot, UserId,
};
use crate::workflows::catalog::CatalogRepository;
use crate::workflows::store::StoreError;

/// Service composing the catalog, the assessment log, the scoring engine,
/// and the recommendation cache.
pub struct RecommendationService<C, A, R> {
    catalog: Arc<C>,
    assessments: Arc<A>,
    recommendations: Arc<R>,
    engine: Arc<ScoringEngine>,
}

impl<C, A, R> RecommendationService<C, A, R>
where
    C: CatalogRepository + 'static,
    A: AssessmentRepository + 'static,
    R: RecommendationRepository + 'static,
{
    pub fn new(
        catalog: Arc<C>,
        assessments: Arc<A>,
        recommendations: Arc<R>,
        weights: ScoringWeights,
    ) -> Self {
        Self {
            catalog,
            assessments,
            recommendations,
            engine: Arc::new(ScoringEngine::new(weights)),
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Recompute the user's shortlist from their most recent assessment.
    pub fn generate(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Recommendation>, RecommendationServiceError> {
        let record = self
            .assessments
            .latest_for_user(user_id)?
            .ok_or(RecommendationServiceError::MissingProfile)?;

        self.generate_for_profile(user_id, &record.profile, Some(&record.context))
    }

    /// Score the active catalog for an explicit profile and replace the
    /// user's cached shortlist with the top results.
    pub fn generate_for_profile(
        &self,
        user_id: &UserId,
        profile: &ProfileSnapshot,
        context: Option<&AssessmentContext>,
    ) -> Result<Vec<Recommendation>, RecommendationServiceError> {
        let tools = self.catalog.list_active()?;
        let ranked = self.engine.rank(profile, &tools, context);
        let generated_at = Utc::now().naive_utc();

        let shortlist: Vec<Recommendation> = ranked
            .into_iter()
            .take(self.engine.weights().shortlist_size)
            .map(|scored| Recommendation {
                user_id: user_id.clone(),
                reason: scored.reason(),
                tool_id: scored.tool_id,
                tool_name: scored.tool_name,
                category: scored.category,
                score: scored.score,
                status: RecommendationStatus::Active,
                generated_at,
            })
            .collect();

        self.recommendations
            .replace_for_user(user_id, shortlist.clone())?;

        Ok(shortlist)
    }

    /// Read the current cached shortlist without recomputing.
    pub fn current(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Recommendation>, RecommendationServiceError> {
        Ok(self.recommendations.current_for_user(user_id)?)
    }
}

/// Error raised by the recommendation service.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationServiceError {
    #[error("no completed assessment for this user")]
    MissingProfile,
    #[error(transparent)]
    Store(#[from] StoreError),
}
