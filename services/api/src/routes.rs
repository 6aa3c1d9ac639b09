use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use talent_ops::table::{ColumnSpec, Row, TableEngine, TableView, ViewIntent, ViewState};
use talent_ops::workforce::{module_router, ModuleService, RecordSource};
use tracing::debug;

/// Caller-supplied columns and rows for a one-off table view.
#[derive(Debug, Deserialize)]
pub(crate) struct TableViewRequest {
    #[serde(default)]
    pub(crate) title: String,
    pub(crate) columns: Vec<ColumnSpec>,
    #[serde(default)]
    pub(crate) data: Vec<Row>,
    #[serde(default)]
    pub(crate) state: ViewState,
    #[serde(default)]
    pub(crate) intents: Vec<ViewIntent>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TableViewResponse {
    pub(crate) state: ViewState,
    pub(crate) view: TableView,
}

pub(crate) fn with_table_routes<S>(service: Arc<ModuleService<S>>) -> axum::Router
where
    S: RecordSource + 'static,
{
    module_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/table/view", axum::routing::post(table_view_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn table_view_endpoint(
    Json(payload): Json<TableViewRequest>,
) -> Json<TableViewResponse> {
    let TableViewRequest {
        title,
        columns,
        data,
        mut state,
        intents,
    } = payload;

    let columns = columns.into_iter().map(ColumnSpec::into_column).collect();
    let engine = TableEngine::new(title, columns, data);
    engine.dispatch_all(&mut state, &intents);
    debug!(
        rows = engine.rows().len(),
        intents = intents.len(),
        page = state.current_page,
        "ad hoc table view resolved"
    );

    let view = engine.view(&state);
    Json(TableViewResponse { state, view })
}
