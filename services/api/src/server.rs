use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use tracing::info;

use advisor_ai::config::AppConfig;
use advisor_ai::error::AppError;
use advisor_ai::telemetry;
use advisor_ai::workflows::assessment::AssessmentService;
use advisor_ai::workflows::catalog::{CatalogCsvImporter, CatalogRepository};
use advisor_ai::workflows::dashboard::DashboardService;
use advisor_ai::workflows::narrative::TemplateNarrator;
use advisor_ai::workflows::recommendation::{RecommendationService, ScoringWeights};
use advisor_ai::workflows::store::StoreError;

use crate::cli::ServeArgs;
use crate::infra::{
    AppState, InMemoryAssessmentRepository, InMemoryCatalogRepository,
    InMemoryRecommendationRepository,
};
use crate::routes::with_advisor_routes;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = Arc::new(InMemoryCatalogRepository::default());
    if let Some(seed) = &config.advisor.catalog_seed {
        let seeded = seed_catalog(catalog.as_ref(), seed)?;
        info!(path = %seed.display(), count = seeded, "catalog seeded from CSV export");
    }

    let assessment_log = Arc::new(InMemoryAssessmentRepository::default());
    let recommendation_cache = Arc::new(InMemoryRecommendationRepository::default());

    let weights = ScoringWeights {
        shortlist_size: config.advisor.shortlist_size,
        ..ScoringWeights::default()
    };
    let assessments = Arc::new(AssessmentService::new(assessment_log.clone()));
    let recommendations = Arc::new(RecommendationService::new(
        catalog.clone(),
        assessment_log.clone(),
        recommendation_cache.clone(),
        weights,
    ));
    let dashboard = Arc::new(DashboardService::new(
        assessment_log,
        recommendation_cache,
        Arc::new(TemplateNarrator),
    ));

    let app = with_advisor_routes(catalog, assessments, recommendations, dashboard)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "ai advisor platform ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn seed_catalog<C>(catalog: &C, seed: &std::path::Path) -> Result<usize, AppError>
where
    C: CatalogRepository,
{
    let items = CatalogCsvImporter::from_path(seed)?;
    let mut inserted = 0usize;
    for item in items {
        match catalog.insert(item) {
            Ok(_) => inserted += 1,
            Err(StoreError::Conflict) => {}
            Err(error) => {
                return Err(AppError::Input(format!("catalog seed failed: {error}")));
            }
        }
    }
    Ok(inserted)
}
