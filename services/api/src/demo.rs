use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use serde_json::json;

use advisor_ai::error::AppError;
use advisor_ai::workflows::assessment::{
    AssessmentKind, AssessmentService, ExperienceLevel, ProfileSnapshot, UserId, WizardBlueprint,
    WizardError, WizardInstance,
};
use advisor_ai::workflows::catalog::{
    CatalogCsvImporter, CatalogItem, CatalogRepository, PricingModel, SetupDifficulty,
    TimeToValue, ToolId,
};
use advisor_ai::workflows::dashboard::DashboardService;
use advisor_ai::workflows::narrative::TemplateNarrator;
use advisor_ai::workflows::recommendation::{
    Recommendation, RecommendationService, ScoringEngine, ScoringWeights,
};

use crate::infra::{
    InMemoryAssessmentRepository, InMemoryCatalogRepository, InMemoryRecommendationRepository,
};

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Catalog CSV export to score against
    #[arg(long)]
    pub(crate) catalog: PathBuf,
    /// Role of the profile being scored
    #[arg(long, default_value = "cfo")]
    pub(crate) role: String,
    /// Industry of the profile being scored
    #[arg(long, default_value = "Finance")]
    pub(crate) industry: String,
    /// Company size bucket, e.g. 201-1000
    #[arg(long, default_value = "201-1000")]
    pub(crate) company_size: String,
    /// AI experience: never, basic, intermediate, advanced, or expert
    #[arg(long, default_value = "never", value_parser = parse_experience)]
    pub(crate) experience: ExperienceLevel,
    /// Goal to align against (repeatable)
    #[arg(long = "goal")]
    pub(crate) goals: Vec<String>,
    /// Implementation timeline, e.g. "This week"
    #[arg(long, default_value = "This quarter")]
    pub(crate) timeline: String,
    /// Number of rows to print
    #[arg(long, default_value_t = 8)]
    pub(crate) top: usize,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional catalog CSV export; a built-in sample is used otherwise
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// User identifier for the demo session
    #[arg(long, default_value = "demo-cfo")]
    pub(crate) user: String,
}

fn parse_experience(raw: &str) -> Result<ExperienceLevel, String> {
    ExperienceLevel::parse(raw)
        .ok_or_else(|| format!("unknown experience level '{raw}' (never|basic|intermediate|advanced|expert)"))
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        catalog,
        role,
        industry,
        company_size,
        experience,
        goals,
        timeline,
        top,
    } = args;

    let tools = CatalogCsvImporter::from_path(&catalog)?;
    if tools.is_empty() {
        return Err(AppError::Input(format!(
            "catalog export '{}' contains no tools",
            catalog.display()
        )));
    }

    let profile = ProfileSnapshot {
        role,
        industry,
        company_size,
        ai_experience: experience,
        goals: if goals.is_empty() {
            vec!["Save time on repetitive tasks".to_string()]
        } else {
            goals
        },
        time_availability: "1-2 hours per week".to_string(),
        implementation_timeline: timeline,
    };

    let engine = ScoringEngine::new(ScoringWeights::default());
    let ranked = engine.rank(&profile, &tools, None);

    println!(
        "Scored {} tool(s) for a {} in {}",
        ranked.len(),
        profile.role,
        profile.industry
    );
    println!("{:<4} {:<28} {:<16} {:>5}  reason", "#", "tool", "category", "score");
    for (position, scored) in ranked.iter().take(top).enumerate() {
        println!(
            "{:<4} {:<28} {:<16} {:>5}  {}",
            position + 1,
            scored.tool_name,
            scored.category,
            scored.score,
            scored.reason()
        );
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { catalog, user } = args;
    let user = UserId(user);

    println!("AI advisor demo");

    let catalog_repo = Arc::new(InMemoryCatalogRepository::default());
    let tools = match catalog {
        Some(path) => CatalogCsvImporter::from_path(&path)?,
        None => sample_catalog(),
    };
    let tool_count = tools.len();
    for tool in tools {
        if let Err(error) = catalog_repo.insert(tool) {
            return Err(AppError::Input(format!("catalog load failed: {error}")));
        }
    }
    println!("Loaded {tool_count} tool(s) into the catalog");

    let assessment_log = Arc::new(InMemoryAssessmentRepository::default());
    let recommendation_cache = Arc::new(InMemoryRecommendationRepository::default());
    let assessments = AssessmentService::new(assessment_log.clone());
    let recommendations = RecommendationService::new(
        catalog_repo,
        assessment_log.clone(),
        recommendation_cache.clone(),
        ScoringWeights::default(),
    );

    println!("\nWalking the CFO wizard");
    let submission = demo_wizard()
        .map_err(|error| AppError::Input(error.to_string()))?
        .finish(user.clone())
        .map_err(|error| AppError::Input(error.to_string()))?;
    let record = assessments
        .submit(submission)
        .map_err(|error| AppError::Input(error.to_string()))?;
    println!(
        "Assessment {} recorded for {} ({} wizard)",
        record.id.0,
        record.user_id.0,
        record.kind.label()
    );

    let shortlist = recommendations
        .generate(&user)
        .map_err(|error| AppError::Input(error.to_string()))?;
    render_shortlist(&shortlist);

    let dashboard = DashboardService::new(
        assessment_log,
        recommendation_cache,
        Arc::new(TemplateNarrator),
    );
    let overview = dashboard
        .overview(&user)
        .map_err(|error| AppError::Input(error.to_string()))?;

    println!("\nDashboard overview");
    println!("  completion: {:.0}%", overview.completion_pct);
    for entry in &overview.assessments {
        let state = if entry.completed { "done" } else { "pending" };
        println!("  {:<10} {}", entry.kind_label, state);
    }
    println!(
        "  adoption:   {} ({})",
        overview.insights.adoption_score,
        overview.insights.adoption_level.label()
    );
    for area in &overview.insights.focus_areas {
        println!("  focus:      {area}");
    }
    println!("\n{}", overview.executive_summary);

    Ok(())
}

fn render_shortlist(shortlist: &[Recommendation]) {
    println!("\nGenerated shortlist ({} entries)", shortlist.len());
    for (position, recommendation) in shortlist.iter().enumerate() {
        println!(
            "  {}. {:<28} {:<14} score {:>3}  {}",
            position + 1,
            recommendation.tool_name,
            recommendation.category,
            recommendation.score,
            recommendation.reason
        );
    }
}

fn demo_wizard() -> Result<WizardInstance, WizardError> {
    let blueprint = WizardBlueprint::for_kind(AssessmentKind::Cfo);
    let mut wizard = WizardInstance::new(&blueprint);

    wizard.record("role", json!("cfo"));
    wizard.record("industry", json!("Finance"));
    wizard.record("company_size", json!("201-1000"));
    wizard.advance()?;

    wizard.record("goals", json!(["Reduce operational costs", "Improve data-driven decisions"]));
    wizard.record("pain_points", json!(["manual reconciliation", "slow monthly close"]));
    wizard.advance()?;

    wizard.record("ai_experience", json!("basic"));
    wizard.record("readiness", json!(4));
    wizard.record("implementation_timeline", json!("This week"));
    wizard.record("current_tools", json!(["Excel"]));
    wizard.advance()?;

    Ok(wizard)
}

fn sample_catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem {
            id: ToolId("ledger-sense".to_string()),
            name: "Ledger Sense".to_string(),
            description: "Automated close with continuous reconciliation and variance alerts"
                .to_string(),
            category: "finance".to_string(),
            pricing_model: PricingModel::Subscription,
            setup_difficulty: SetupDifficulty::Easy,
            time_to_value: TimeToValue::Minutes,
            target_roles: vec!["cfo".to_string(), "controller".to_string()],
            target_industries: vec!["finance".to_string()],
            target_company_sizes: vec!["201-1000".to_string()],
            features: vec!["reconciliation".to_string(), "close automation".to_string()],
            rating: Some(4.6),
            active: true,
        },
        CatalogItem {
            id: ToolId("margin-scope".to_string()),
            name: "Margin Scope".to_string(),
            description: "Scenario planning and cost analytics for finance teams".to_string(),
            category: "analytics".to_string(),
            pricing_model: PricingModel::Subscription,
            setup_difficulty: SetupDifficulty::Medium,
            time_to_value: TimeToValue::Hours,
            target_roles: vec!["cfo".to_string()],
            target_industries: vec!["finance".to_string()],
            target_company_sizes: Vec::new(),
            features: vec!["forecasting".to_string(), "cost analytics".to_string()],
            rating: Some(4.3),
            active: true,
        },
        CatalogItem {
            id: ToolId("flow-desk".to_string()),
            name: "Flow Desk".to_string(),
            description: "Workflow automation for recurring back-office tasks".to_string(),
            category: "automation".to_string(),
            pricing_model: PricingModel::Freemium,
            setup_difficulty: SetupDifficulty::Easy,
            time_to_value: TimeToValue::Hours,
            target_roles: Vec::new(),
            target_industries: Vec::new(),
            target_company_sizes: Vec::new(),
            features: vec!["templates".to_string(), "approvals".to_string()],
            rating: Some(4.1),
            active: true,
        },
        CatalogItem {
            id: ToolId("inbox-zero".to_string()),
            name: "Inbox Zero".to_string(),
            description: "Email triage assistant with drafting support".to_string(),
            category: "productivity".to_string(),
            pricing_model: PricingModel::Free,
            setup_difficulty: SetupDifficulty::Easy,
            time_to_value: TimeToValue::Minutes,
            target_roles: Vec::new(),
            target_industries: Vec::new(),
            target_company_sizes: Vec::new(),
            features: vec!["summaries".to_string(), "drafts".to_string()],
            rating: None,
            active: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_wizard_completes_every_step() {
        let wizard = demo_wizard().expect("demo answers satisfy every step");
        assert!(wizard.is_complete());
    }

    #[test]
    fn sample_catalog_has_unique_identifiers() {
        let tools = sample_catalog();
        let mut ids: Vec<_> = tools.iter().map(|tool| tool.id.clone()).collect();
        ids.sort_by(|a, b| a.0.cmp(&b.0));
        ids.dedup();
        assert_eq!(ids.len(), tools.len());
    }

    #[test]
    fn demo_runs_end_to_end_with_the_sample_catalog() {
        let args = DemoArgs {
            catalog: None,
            user: "demo-cfo".to_string(),
        };
        run_demo(args).expect("demo succeeds");
    }
}
