use crate::cli::ServeArgs;
use crate::infra::{AppState, DirectoryRecordSource};
use crate::routes::with_table_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use talent_ops::config::AppConfig;
use talent_ops::error::AppError;
use talent_ops::telemetry;
use talent_ops::workforce::ModuleService;
use tracing::info;

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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let source = DirectoryRecordSource::new(config.data.data_dir.clone());
    let module_service = Arc::new(ModuleService::new(Arc::new(source)));

    let app = with_table_routes(module_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        environment = config.environment.label(),
        %addr,
        data_dir = ?config.data.data_dir,
        "talent ops table service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
