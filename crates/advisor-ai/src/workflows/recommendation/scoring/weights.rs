use serde::{Deserialize, Serialize};

use crate::workflows::assessment::ExperienceLevel;
use crate::workflows::catalog::SetupDifficulty;

/// Rubric configuration for the weighted relevance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub role_match: i16,
    pub role_open: i16,
    pub industry_match: i16,
    pub industry_open: i16,
    pub company_size_match: i16,
    pub company_size_open: i16,
    pub goal_alignment_max: f32,
    pub urgency_minutes: i16,
    pub urgency_hours: i16,
    pub beginner_penalty: i16,
    pub focus_category_boost: i16,
    pub general_category_boost: i16,
    pub pain_point_boost: i16,
    pub existing_tool_penalty: i16,
    pub readiness_gap_penalty: i16,
    pub shortlist_size: usize,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            role_match: 40,
            role_open: 20,
            industry_match: 25,
            industry_open: 12,
            company_size_match: 15,
            company_size_open: 7,
            goal_alignment_max: 10.0,
            urgency_minutes: 5,
            urgency_hours: 3,
            beginner_penalty: 10,
            focus_category_boost: 15,
            general_category_boost: 10,
            pain_point_boost: 10,
            existing_tool_penalty: 20,
            readiness_gap_penalty: 15,
            shortlist_size: 8,
        }
    }
}

/// Experience-to-difficulty fit, 0..=10. Rewards matching tool complexity
/// to user sophistication; (never, easy) is the anchor at the maximum.
pub(crate) fn experience_fit(level: ExperienceLevel, difficulty: SetupDifficulty) -> i16 {
    use ExperienceLevel::*;
    use SetupDifficulty::*;

    match (level, difficulty) {
        (Never, Easy) => 10,
        (Never, Medium) => 4,
        (Never, Hard) => 0,
        (Basic, Easy) => 9,
        (Basic, Medium) => 6,
        (Basic, Hard) => 2,
        (Intermediate, Easy) => 7,
        (Intermediate, Medium) => 9,
        (Intermediate, Hard) => 5,
        (Advanced, Easy) => 5,
        (Advanced, Medium) => 8,
        (Advanced, Hard) => 9,
        (Expert, Easy) => 4,
        (Expert, Medium) => 7,
        (Expert, Hard) => 10,
    }
}

/// Keyword table backing goal alignment.
///
/// The table is deliberately non-authoritative: goals outside it fall back to
/// their own significant words so that new wizard goal options still score.
pub(crate) fn goal_keywords(goal: &str) -> Vec<String> {
    let normalized = goal.trim().to_ascii_lowercase();

    let table: &[(&str, &[&str])] = &[
        (
            "reduce operational costs",
            &["cost", "costs", "efficiency", "savings", "automation"],
        ),
        (
            "save time",
            &["time", "automation", "workflow", "productivity"],
        ),
        (
            "automate repetitive work",
            &["automation", "workflow", "repetitive", "productivity"],
        ),
        (
            "improve decision making",
            &["analytics", "insight", "data", "forecast", "reporting"],
        ),
        (
            "grow revenue",
            &["sales", "revenue", "marketing", "growth", "pipeline"],
        ),
        (
            "improve reporting",
            &["report", "reporting", "dashboard", "analytics"],
        ),
        (
            "improve forecasting",
            &["forecast", "planning", "model", "scenario"],
        ),
        (
            "reduce manual errors",
            &["accuracy", "validation", "automation", "audit"],
        ),
    ];

    for (known, keywords) in table {
        if normalized == *known {
            return keywords.iter().map(|word| word.to_string()).collect();
        }
    }

    normalized
        .split(|ch: char| !ch.is_ascii_alphanumeric())
        .filter(|word| word.len() >= 4)
        .map(str::to_string)
        .collect()
}
