use super::weights::{experience_fit, goal_keywords, ScoringWeights};
use super::{ScoreComponent, ScoreFactor};
use crate::workflows::assessment::{ExperienceLevel, ProfileSnapshot};
use crate::workflows::catalog::{CatalogItem, SetupDifficulty, TimeToValue};

/// First pass: the profile-versus-tool weighted sum, before any
/// assessment-specific adjustment. Returns the raw (unclamped) total.
pub(crate) fn score_tool(
    profile: &ProfileSnapshot,
    tool: &CatalogItem,
    weights: &ScoringWeights,
) -> (Vec<ScoreComponent>, i16) {
    let mut components = Vec::new();
    let mut total: i16 = 0;

    let role = normalize(&profile.role);
    if targets_everyone(&tool.target_roles) {
        components.push(ScoreComponent {
            factor: ScoreFactor::RoleMatch,
            points: weights.role_open,
            notes: "suitable for every role".to_string(),
        });
        total += weights.role_open;
    } else if tool
        .target_roles
        .iter()
        .any(|target| normalize(target) == role)
    {
        components.push(ScoreComponent {
            factor: ScoreFactor::RoleMatch,
            points: weights.role_match,
            notes: format!("built for the {role} role"),
        });
        total += weights.role_match;
    }

    let industry = normalize(&profile.industry);
    if targets_everyone(&tool.target_industries) {
        components.push(ScoreComponent {
            factor: ScoreFactor::IndustryMatch,
            points: weights.industry_open,
            notes: "industry agnostic".to_string(),
        });
        total += weights.industry_open;
    } else if !industry.is_empty()
        && tool.target_industries.iter().any(|target| {
            let target = normalize(target);
            target.contains(&industry) || industry.contains(&target)
        })
    {
        components.push(ScoreComponent {
            factor: ScoreFactor::IndustryMatch,
            points: weights.industry_match,
            notes: format!("targets the {industry} industry"),
        });
        total += weights.industry_match;
    }

    let company_size = normalize(&profile.company_size);
    if tool.target_company_sizes.is_empty() {
        components.push(ScoreComponent {
            factor: ScoreFactor::CompanySizeFit,
            points: weights.company_size_open,
            notes: "works at any company size".to_string(),
        });
        total += weights.company_size_open;
    } else if !company_size.is_empty()
        && tool
            .target_company_sizes
            .iter()
            .any(|target| normalize(target) == company_size)
    {
        components.push(ScoreComponent {
            factor: ScoreFactor::CompanySizeFit,
            points: weights.company_size_match,
            notes: format!("sized for {company_size} companies"),
        });
        total += weights.company_size_match;
    }

    let fit = experience_fit(profile.ai_experience, tool.setup_difficulty);
    if fit > 0 {
        components.push(ScoreComponent {
            factor: ScoreFactor::ExperienceFit,
            points: fit,
            notes: format!(
                "{} setup matches {} experience",
                tool.setup_difficulty.label(),
                profile.ai_experience.label()
            ),
        });
        total += fit;
    }

    let goal_points = goal_alignment(profile, tool, weights);
    if goal_points > 0 {
        components.push(ScoreComponent {
            factor: ScoreFactor::GoalAlignment,
            points: goal_points,
            notes: "features overlap with your stated goals".to_string(),
        });
        total += goal_points;
    }

    if normalize(&profile.implementation_timeline) == "this week" {
        let urgency = match tool.time_to_value {
            TimeToValue::Minutes => weights.urgency_minutes,
            TimeToValue::Hours => weights.urgency_hours,
            TimeToValue::Days | TimeToValue::Weeks => 0,
        };
        if urgency > 0 {
            components.push(ScoreComponent {
                factor: ScoreFactor::Urgency,
                points: urgency,
                notes: "delivers value within your one-week timeline".to_string(),
            });
            total += urgency;
        }
    }

    if profile.ai_experience == ExperienceLevel::Never
        && tool.setup_difficulty == SetupDifficulty::Hard
    {
        components.push(ScoreComponent {
            factor: ScoreFactor::BeginnerPenalty,
            points: -weights.beginner_penalty,
            notes: "hard setup is a poor first AI project".to_string(),
        });
        total -= weights.beginner_penalty;
    }

    (components, total)
}

/// Keyword-overlap heuristic: contribution per goal is
/// (matched keywords / keyword-set size) x (budget / goal count).
fn goal_alignment(profile: &ProfileSnapshot, tool: &CatalogItem, weights: &ScoringWeights) -> i16 {
    if profile.goals.is_empty() {
        return 0;
    }

    let haystack = tool_haystack(tool);
    let per_goal_budget = weights.goal_alignment_max / profile.goals.len() as f32;
    let mut aligned = 0.0f32;

    for goal in &profile.goals {
        let keywords = goal_keywords(goal);
        if keywords.is_empty() {
            continue;
        }
        let matched = keywords
            .iter()
            .filter(|keyword| haystack.contains(keyword.as_str()))
            .count() as f32;
        aligned += (matched / keywords.len() as f32) * per_goal_budget;
    }

    aligned.round() as i16
}

fn tool_haystack(tool: &CatalogItem) -> String {
    let mut haystack = String::new();
    haystack.push_str(&normalize(&tool.name));
    haystack.push(' ');
    haystack.push_str(&normalize(&tool.description));
    haystack.push(' ');
    haystack.push_str(&normalize(&tool.category));
    for feature in &tool.features {
        haystack.push(' ');
        haystack.push_str(&normalize(feature));
    }
    haystack
}

fn targets_everyone(targets: &[String]) -> bool {
    targets.is_empty() || targets.iter().any(|target| normalize(target) == "all")
}

pub(crate) fn normalize(value: &str) -> String {
    value.trim().to_ascii_lowercase()
}
