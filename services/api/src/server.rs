use crate::cli::ServeArgs;
use crate::infra::{
    load_catalog, load_config, AppState, InMemoryNoticePublisher, InMemorySeekerRepository,
};
use crate::routes::with_board_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use job_board::board::seeker::JobSeekerService;
use job_board::error::AppError;
use job_board::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = load_config(args.catalog.take())?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let catalog = load_catalog(config.catalog.path.clone())?;
    info!(
        postings = catalog.len(),
        source = ?config.catalog.path,
        "job catalog seeded"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemorySeekerRepository::default());
    let notices = Arc::new(InMemoryNoticePublisher::default());
    let seeker_service = Arc::new(JobSeekerService::new(catalog, repository, notices));

    let app = with_board_routes(seeker_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "job board ready");

    axum::serve(listener, app).await?;
    Ok(())
}
