use super::base::normalize;
use super::weights::ScoringWeights;
use super::{ScoreComponent, ScoreFactor};
use crate::workflows::assessment::{AssessmentContext, AssessmentKind};
use crate::workflows::catalog::{CatalogItem, SetupDifficulty};

const LOW_READINESS_THRESHOLD: u8 = 3;

/// Second pass: assessment-specific adjustments applied on top of the
/// clamped base score. Pure; the engine re-clamps the combined total.
pub(crate) fn adjust_for_context(
    tool: &CatalogItem,
    context: &AssessmentContext,
    weights: &ScoringWeights,
) -> Vec<ScoreComponent> {
    let mut components = Vec::new();
    let category = normalize(&tool.category);

    match context.kind {
        AssessmentKind::Cfo => {
            if category.contains("finance") || category.contains("analytics") {
                components.push(ScoreComponent {
                    factor: ScoreFactor::AssessmentFocus,
                    points: weights.focus_category_boost,
                    notes: "finance and analytics tooling fits a CFO agenda".to_string(),
                });
            }
        }
        AssessmentKind::Business | AssessmentKind::Personal => {
            if category.contains("automation") || category.contains("productivity") {
                components.push(ScoreComponent {
                    factor: ScoreFactor::AssessmentFocus,
                    points: weights.general_category_boost,
                    notes: "automation and productivity gains come first".to_string(),
                });
            }
        }
    }

    if let Some(pain_point) = matching_pain_point(tool, context) {
        components.push(ScoreComponent {
            factor: ScoreFactor::PainPointMatch,
            points: weights.pain_point_boost,
            notes: format!("addresses reported pain point: {pain_point}"),
        });
    }

    if let Some(existing) = matching_existing_tool(tool, context) {
        components.push(ScoreComponent {
            factor: ScoreFactor::ExistingTool,
            points: -weights.existing_tool_penalty,
            notes: format!("already in use as '{existing}'"),
        });
    }

    if context.readiness < LOW_READINESS_THRESHOLD
        && tool.setup_difficulty == SetupDifficulty::Hard
    {
        components.push(ScoreComponent {
            factor: ScoreFactor::ReadinessGap,
            points: -weights.readiness_gap_penalty,
            notes: "hard setup against low organizational readiness".to_string(),
        });
    }

    components
}

/// Textual match = case-insensitive overlap on words of 4+ characters
/// between the pain point and the tool description.
fn matching_pain_point<'a>(
    tool: &CatalogItem,
    context: &'a AssessmentContext,
) -> Option<&'a str> {
    let description = normalize(&tool.description);
    context.pain_points.iter().map(String::as_str).find(|pain| {
        normalize(pain)
            .split(|ch: char| !ch.is_ascii_alphanumeric())
            .filter(|word| word.len() >= 4)
            .any(|word| description.contains(word))
    })
}

fn matching_existing_tool<'a>(
    tool: &CatalogItem,
    context: &'a AssessmentContext,
) -> Option<&'a str> {
    let name = normalize(&tool.name);
    context
        .current_tools
        .iter()
        .map(String::as_str)
        .find(|existing| {
            let existing = normalize(existing);
            !existing.is_empty() && (name.contains(&existing) || existing.contains(&name))
        })
}
