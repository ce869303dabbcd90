use super::common::*;
use crate::workflows::assessment::ExperienceLevel;
use crate::workflows::catalog::{SetupDifficulty, TimeToValue};
use crate::workflows::recommendation::{ScoreFactor, ScoringEngine};

#[test]
fn base_score_stays_within_bounds() {
    let engine = ScoringEngine::new(weights());
    let profile = cfo_profile();

    for tool in [finance_tool(), generic_tool("Flow Desk")] {
        let scored = engine.base_score(&profile, &tool);
        assert!(scored.score <= 100);
    }
}

#[test]
fn cfo_example_scores_at_least_95() {
    let engine = ScoringEngine::new(weights());
    let scored = engine.base_score(&cfo_profile(), &finance_tool());

    // 40 role + 25 industry + 15 size + 10 (never/easy) + 5 urgency,
    // plus whatever goal alignment contributes.
    assert!(scored.score >= 95, "got {}", scored.score);
}

#[test]
fn role_match_contributes_exactly_the_role_weight() {
    let engine = ScoringEngine::new(weights());
    let profile = cfo_profile();

    let matching = finance_tool();
    let mut disjoint = finance_tool();
    disjoint.target_roles = vec!["engineer".to_string()];

    let matched = engine.base_score(&profile, &matching);
    let missed = engine.base_score(&profile, &disjoint);

    let role_points = |scored: &crate::workflows::recommendation::ToolScore| {
        scored
            .components
            .iter()
            .filter(|component| component.factor == ScoreFactor::RoleMatch)
            .map(|component| component.points)
            .sum::<i16>()
    };

    assert_eq!(role_points(&matched), 40);
    assert_eq!(role_points(&missed), 0);
    assert_eq!(matched.score as i16 - missed.score as i16, 40);
}

#[test]
fn open_role_targeting_earns_half_credit() {
    let engine = ScoringEngine::new(weights());
    let mut open = finance_tool();
    open.target_roles = vec!["all".to_string()];

    let scored = engine.base_score(&cfo_profile(), &open);
    let role = scored
        .components
        .iter()
        .find(|component| component.factor == ScoreFactor::RoleMatch)
        .expect("role component present");
    assert_eq!(role.points, 20);
}

#[test]
fn beginner_penalty_is_exactly_ten() {
    let engine = ScoringEngine::new(weights());
    let mut profile = cfo_profile();
    profile.ai_experience = ExperienceLevel::Never;

    let mut hard = finance_tool();
    hard.setup_difficulty = SetupDifficulty::Hard;

    let scored = engine.base_score(&profile, &hard);
    let penalty = scored
        .components
        .iter()
        .find(|component| component.factor == ScoreFactor::BeginnerPenalty)
        .expect("penalty applied");
    assert_eq!(penalty.points, -10);

    let without_penalty: i16 = scored
        .components
        .iter()
        .filter(|component| component.factor != ScoreFactor::BeginnerPenalty)
        .map(|component| component.points)
        .sum();
    assert_eq!(scored.score as i16, (without_penalty - 10).clamp(0, 100));
}

#[test]
fn urgency_bonus_tracks_time_to_value() {
    let engine = ScoringEngine::new(weights());
    let profile = cfo_profile();

    let mut by_hours = finance_tool();
    by_hours.time_to_value = TimeToValue::Hours;
    let mut by_weeks = finance_tool();
    by_weeks.time_to_value = TimeToValue::Weeks;

    let urgency = |tool| {
        engine
            .base_score(&profile, &tool)
            .components
            .iter()
            .find(|component| component.factor == ScoreFactor::Urgency)
            .map(|component| component.points)
    };

    assert_eq!(urgency(finance_tool()), Some(5));
    assert_eq!(urgency(by_hours), Some(3));
    assert_eq!(urgency(by_weeks), None);
}

#[test]
fn no_urgency_bonus_without_a_one_week_timeline() {
    let engine = ScoringEngine::new(weights());
    let mut profile = cfo_profile();
    profile.implementation_timeline = "next quarter".to_string();

    let scored = engine.base_score(&profile, &finance_tool());
    assert!(scored
        .components
        .iter()
        .all(|component| component.factor != ScoreFactor::Urgency));
}

#[test]
fn goal_alignment_splits_budget_across_goals() {
    let engine = ScoringEngine::new(weights());
    let mut profile = cfo_profile();
    profile.implementation_timeline = "next quarter".to_string();

    // One fully matched goal out of two caps its share at 5 points.
    profile.goals = vec![
        "Reduce operational costs".to_string(),
        "Grow revenue".to_string(),
    ];

    let scored = engine.base_score(&profile, &finance_tool());
    let alignment = scored
        .components
        .iter()
        .find(|component| component.factor == ScoreFactor::GoalAlignment)
        .expect("alignment present");
    assert!(alignment.points <= 5, "got {}", alignment.points);
    assert!(alignment.points > 0);
}

#[test]
fn reason_mentions_the_strongest_factor() {
    let engine = ScoringEngine::new(weights());
    let scored = engine.base_score(&cfo_profile(), &finance_tool());

    assert!(scored.reason().contains("built for the cfo role"));
}
