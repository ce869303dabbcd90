use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::workflows::assessment::UserId;
use crate::workflows::catalog::ToolId;

/// Lifecycle flag for persisted recommendations. The cache is fully
/// replaced on every scoring run, so `Active` is the only state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationStatus {
    Active,
}

impl RecommendationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "active",
        }
    }
}

/// A scored (user, tool) pairing persisted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub user_id: UserId,
    pub tool_id: ToolId,
    pub tool_name: String,
    pub category: String,
    /// Relevance in [0,100]; the scoring engine clamps before persisting.
    pub score: u8,
    pub reason: String,
    pub status: RecommendationStatus,
    pub generated_at: NaiveDateTime,
}
