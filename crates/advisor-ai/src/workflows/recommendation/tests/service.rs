use std::sync::Arc;

use chrono::Utc;

use super::common::*;
use crate::workflows::recommendation::{
    Recommendation, RecommendationRepository, RecommendationService, RecommendationServiceError,
    RecommendationStatus,
};
use crate::workflows::catalog::ToolId;

#[test]
fn generate_replaces_the_cached_shortlist() {
    let user = user();
    let (service, cache) = build_service(
        vec![finance_tool()],
        vec![assessment_record(&user, cfo_profile(), cfo_context())],
    );

    let stale = Recommendation {
        user_id: user.clone(),
        tool_id: ToolId("retired-tool".to_string()),
        tool_name: "Retired Tool".to_string(),
        category: "legacy".to_string(),
        score: 88,
        reason: "old run".to_string(),
        status: RecommendationStatus::Active,
        generated_at: Utc::now().naive_utc(),
    };
    cache
        .replace_for_user(&user, vec![stale])
        .expect("seed cache");

    let fresh = service.generate(&user).expect("generate shortlist");
    let cached = cache.current_for_user(&user).expect("read cache");

    assert_eq!(fresh, cached);
    assert!(cached
        .iter()
        .all(|recommendation| recommendation.tool_name != "Retired Tool"));
}

#[test]
fn shortlist_is_capped_at_the_configured_size() {
    let user = user();
    let tools = (0..12)
        .map(|index| generic_tool(&format!("Helper {index:02}")))
        .collect();
    let (service, _cache) = build_service(
        tools,
        vec![assessment_record(&user, cfo_profile(), cfo_context())],
    );

    let shortlist = service.generate(&user).expect("generate shortlist");
    assert_eq!(shortlist.len(), weights().shortlist_size);
}

#[test]
fn generate_requires_a_completed_assessment() {
    let (service, _cache) = build_service(vec![finance_tool()], Vec::new());

    let error = service.generate(&user()).expect_err("no profile yet");
    assert!(matches!(error, RecommendationServiceError::MissingProfile));
}

#[test]
fn generate_is_deterministic_across_runs() {
    let user = user();
    let mut tools = vec![finance_tool()];
    for index in 0..6 {
        tools.push(generic_tool(&format!("Helper {index:02}")));
    }
    let (service, _cache) = build_service(
        tools,
        vec![assessment_record(&user, cfo_profile(), cfo_context())],
    );

    let first = service.generate(&user).expect("first run");
    let second = service.generate(&user).expect("second run");

    let first_order: Vec<_> = first.iter().map(|r| (&r.tool_id, r.score)).collect();
    let second_order: Vec<_> = second.iter().map(|r| (&r.tool_id, r.score)).collect();
    assert_eq!(first_order, second_order);
}

#[test]
fn store_failures_surface_as_errors() {
    let user = user();
    let catalog = Arc::new(MemoryCatalog::with_items(vec![finance_tool()]));
    let assessments = Arc::new(MemoryAssessments::with_records(vec![assessment_record(
        &user,
        cfo_profile(),
        cfo_context(),
    )]));
    let service = RecommendationService::new(
        catalog,
        assessments,
        Arc::new(UnavailableRecommendations),
        weights(),
    );

    let error = service.generate(&user).expect_err("cache offline");
    assert!(matches!(error, RecommendationServiceError::Store(_)));

    let error = service.current(&user).expect_err("cache offline");
    assert!(matches!(error, RecommendationServiceError::Store(_)));
}

#[test]
fn current_reads_without_recomputing() {
    let user = user();
    let (service, cache) = build_service(
        vec![finance_tool()],
        vec![assessment_record(&user, cfo_profile(), cfo_context())],
    );

    assert!(service.current(&user).expect("empty cache").is_empty());

    service.generate(&user).expect("generate shortlist");
    let current = service.current(&user).expect("read cache");
    assert_eq!(current, cache.current_for_user(&user).expect("read cache"));
    assert_eq!(current[0].tool_name, "Ledger Sense");
}
