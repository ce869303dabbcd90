mod adjust;
mod base;
mod weights;

pub use weights::ScoringWeights;

use serde::{Deserialize, Serialize};

use crate::workflows::assessment::{AssessmentContext, ProfileSnapshot};
use crate::workflows::catalog::{CatalogItem, ToolId};

/// Stateless engine applying the rubric weights to profile/tool pairs.
///
/// Scoring is two composable pure passes: the base weighted sum and an
/// assessment-specific adjustment. Both sides of the pipeline clamp to
/// [0,100].
pub struct ScoringEngine {
    weights: ScoringWeights,
}

impl ScoringEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Profile-versus-tool relevance before assessment adjustments.
    pub fn base_score(&self, profile: &ProfileSnapshot, tool: &CatalogItem) -> ToolScore {
        let (components, total) = base::score_tool(profile, tool, &self.weights);
        ToolScore::from_parts(tool, components, total)
    }

    /// Base score plus the assessment adjustment pass, re-clamped.
    pub fn adjusted_score(
        &self,
        profile: &ProfileSnapshot,
        tool: &CatalogItem,
        context: Option<&AssessmentContext>,
    ) -> ToolScore {
        let base = self.base_score(profile, tool);
        let Some(context) = context else {
            return base;
        };

        let mut components = base.components;
        let mut total = base.score as i16;
        for component in adjust::adjust_for_context(tool, context, &self.weights) {
            total += component.points;
            components.push(component);
        }

        ToolScore::from_parts(tool, components, total)
    }

    /// Score every tool and order the result descending, with the tool name
    /// as a tiebreak so ranking stays deterministic.
    pub fn rank(
        &self,
        profile: &ProfileSnapshot,
        tools: &[CatalogItem],
        context: Option<&AssessmentContext>,
    ) -> Vec<ToolScore> {
        let mut scored: Vec<ToolScore> = tools
            .iter()
            .map(|tool| self.adjusted_score(profile, tool, context))
            .collect();

        scored.sort_by(|left, right| {
            right
                .score
                .cmp(&left.score)
                .then_with(|| left.tool_name.cmp(&right.tool_name))
        });
        scored
    }
}

/// Discrete contribution to a relevance score, kept for transparent audits
/// and for assembling the human-readable reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: i16,
    pub notes: String,
}

/// Factors permitted in the scoring rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    RoleMatch,
    IndustryMatch,
    CompanySizeFit,
    ExperienceFit,
    GoalAlignment,
    Urgency,
    BeginnerPenalty,
    AssessmentFocus,
    PainPointMatch,
    ExistingTool,
    ReadinessGap,
}

/// Scoring output for a single tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolScore {
    pub tool_id: ToolId,
    pub tool_name: String,
    pub category: String,
    pub score: u8,
    pub components: Vec<ScoreComponent>,
}

impl ToolScore {
    fn from_parts(tool: &CatalogItem, components: Vec<ScoreComponent>, total: i16) -> Self {
        Self {
            tool_id: tool.id.clone(),
            tool_name: tool.name.clone(),
            category: tool.category.clone(),
            score: total.clamp(0, 100) as u8,
            components,
        }
    }

    /// Human-readable justification built from the strongest contributions.
    pub fn reason(&self) -> String {
        let mut positive: Vec<&ScoreComponent> = self
            .components
            .iter()
            .filter(|component| component.points > 0)
            .collect();
        positive.sort_by(|left, right| right.points.cmp(&left.points));

        if positive.is_empty() {
            return "general fit for your profile".to_string();
        }

        positive
            .iter()
            .take(3)
            .map(|component| component.notes.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}
