use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ModuleKind, TeamScope};
use super::leaves::{LeaveApplication, LeaveDecision};
use super::service::{ModuleService, ModuleServiceError};
use super::source::RecordSource;
use crate::table::{SortDirection, SortState, ViewIntent, ViewState};

/// Router builder exposing module listings and table views.
pub fn module_router<S>(service: Arc<ModuleService<S>>) -> Router
where
    S: RecordSource + 'static,
{
    Router::new()
        .route("/api/v1/modules", get(list_handler::<S>))
        .route(
            "/api/v1/modules/:module/table",
            get(view_handler::<S>).post(interact_handler::<S>),
        )
        .route(
            "/api/v1/modules/:module/records/:id",
            get(record_handler::<S>),
        )
        .route("/api/v1/leaves", post(apply_leave_handler::<S>))
        .route(
            "/api/v1/leaves/:id/:decision",
            post(decide_leave_handler::<S>),
        )
        .with_state(service)
}

/// Query string form of a view state, for stateless GET requests.
#[derive(Debug, Default, Deserialize)]
pub struct TableQuery {
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub direction: Option<SortDirection>,
    #[serde(default)]
    pub page: Option<usize>,
}

impl TableQuery {
    pub fn view_state(&self) -> ViewState {
        let search_term = self.search.clone().unwrap_or_default();
        ViewState {
            search_visible: !search_term.is_empty(),
            search_term,
            sort: SortState {
                key: self.sort.clone().filter(|key| !key.is_empty()),
                direction: self.direction.unwrap_or_default(),
            },
            current_page: self.page.unwrap_or(1).max(1),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct InteractionRequest {
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub state: ViewState,
    #[serde(default)]
    pub intents: Vec<ViewIntent>,
}

pub(crate) async fn list_handler<S>(State(service): State<Arc<ModuleService<S>>>) -> Response
where
    S: RecordSource + 'static,
{
    (StatusCode::OK, Json(json!({ "modules": service.modules() }))).into_response()
}

pub(crate) async fn view_handler<S>(
    State(service): State<Arc<ModuleService<S>>>,
    Path(module): Path<String>,
    Query(query): Query<TableQuery>,
) -> Response
where
    S: RecordSource + 'static,
{
    let module = match module.parse::<ModuleKind>() {
        Ok(module) => module,
        Err(error) => return not_found(error),
    };
    let team = TeamScope::from_param(query.team.as_deref());

    match service.view(module, &team, &query.view_state()) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(error) => service_error(error),
    }
}

pub(crate) async fn interact_handler<S>(
    State(service): State<Arc<ModuleService<S>>>,
    Path(module): Path<String>,
    Json(request): Json<InteractionRequest>,
) -> Response
where
    S: RecordSource + 'static,
{
    let module = match module.parse::<ModuleKind>() {
        Ok(module) => module,
        Err(error) => return not_found(error),
    };
    let team = TeamScope::from_param(request.team.as_deref());

    match service.interact(module, &team, request.state, &request.intents) {
        Ok(interaction) => (StatusCode::OK, Json(interaction)).into_response(),
        Err(error) => service_error(error),
    }
}

pub(crate) async fn record_handler<S>(
    State(service): State<Arc<ModuleService<S>>>,
    Path((module, id)): Path<(String, String)>,
) -> Response
where
    S: RecordSource + 'static,
{
    let module = match module.parse::<ModuleKind>() {
        Ok(module) => module,
        Err(error) => return not_found(error),
    };

    match service.record(module, &id) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => service_error(error),
    }
}

pub(crate) async fn apply_leave_handler<S>(
    State(service): State<Arc<ModuleService<S>>>,
    Json(application): Json<LeaveApplication>,
) -> Response
where
    S: RecordSource + 'static,
{
    match service.apply_leave(application) {
        Ok(request) => (StatusCode::CREATED, Json(request)).into_response(),
        Err(error) => service_error(error),
    }
}

pub(crate) async fn decide_leave_handler<S>(
    State(service): State<Arc<ModuleService<S>>>,
    Path((id, decision)): Path<(u32, LeaveDecision)>,
) -> Response
where
    S: RecordSource + 'static,
{
    match service.decide_leave(id, decision) {
        Ok(request) => (StatusCode::OK, Json(request)).into_response(),
        Err(error) => service_error(error),
    }
}

fn not_found(error: impl std::fmt::Display) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::NOT_FOUND, Json(payload)).into_response()
}

fn service_error(error: ModuleServiceError) -> Response {
    let status = error.status_code();
    if status.is_server_error() {
        tracing::error!(%error, "module request failed");
    } else {
        tracing::warn!(%error, %status, "module request rejected");
    }
    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}
