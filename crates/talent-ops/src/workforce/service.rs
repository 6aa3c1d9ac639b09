use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use super::catalog::module_columns;
use super::domain::{ModuleKind, TeamScope};
use super::leaves::{LeaveApplication, LeaveDecision, LeaveRequest};
use super::source::{scope_rows, RecordSource, SourceError};
use crate::table::{Row, TableEngine, TableView, ViewIntent, ViewState};

/// Service resolving module pages into table views.
pub struct ModuleService<S> {
    source: Arc<S>,
}

/// Public description of a module page.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleSummary {
    pub module: ModuleKind,
    pub label: &'static str,
    pub title: String,
    pub team_scoped: bool,
}

/// State after replaying intents, plus the view it produces.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleInteraction {
    pub state: ViewState,
    pub view: TableView,
}

impl<S> ModuleService<S>
where
    S: RecordSource + 'static,
{
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    pub fn modules(&self) -> Vec<ModuleSummary> {
        ModuleKind::ordered()
            .into_iter()
            .map(|module| ModuleSummary {
                module,
                label: module.label(),
                title: module.table_title(),
                team_scoped: module.team_scoped(),
            })
            .collect()
    }

    /// Builds the engine for a module, applying the team scope where the module supports it.
    pub fn engine(
        &self,
        module: ModuleKind,
        team: &TeamScope,
    ) -> Result<TableEngine, ModuleServiceError> {
        let rows = self.source.records(module)?;
        let fetched = rows.len();
        let rows = if module.team_scoped() {
            scope_rows(rows, team)
        } else {
            rows
        };

        debug!(%module, ?team, fetched, visible = rows.len(), "module rows resolved");
        Ok(TableEngine::new(
            module.table_title(),
            module_columns(module),
            rows,
        ))
    }

    pub fn view(
        &self,
        module: ModuleKind,
        team: &TeamScope,
        state: &ViewState,
    ) -> Result<TableView, ModuleServiceError> {
        Ok(self.engine(module, team)?.view(state))
    }

    /// Replays `intents` on top of `state` and renders the result.
    pub fn interact(
        &self,
        module: ModuleKind,
        team: &TeamScope,
        mut state: ViewState,
        intents: &[ViewIntent],
    ) -> Result<ModuleInteraction, ModuleServiceError> {
        let engine = self.engine(module, team)?;
        engine.dispatch_all(&mut state, intents);
        let view = engine.view(&state);
        Ok(ModuleInteraction { state, view })
    }

    /// Full record behind a table row, matched on its `id` field.
    pub fn record(&self, module: ModuleKind, id: &str) -> Result<Row, ModuleServiceError> {
        self.source
            .records(module)?
            .into_iter()
            .find(|row| row.text("id").as_deref() == Some(id))
            .ok_or_else(|| ModuleServiceError::RecordNotFound {
                module,
                id: id.to_string(),
            })
    }

    pub fn apply_leave(
        &self,
        application: LeaveApplication,
    ) -> Result<LeaveRequest, ModuleServiceError> {
        let request = self.source.apply_leave(application)?;
        info!(id = request.id, employee = %request.name, "leave request submitted");
        Ok(request)
    }

    pub fn decide_leave(
        &self,
        id: u32,
        decision: LeaveDecision,
    ) -> Result<LeaveRequest, ModuleServiceError> {
        let request = self.source.decide_leave(id, decision)?;
        info!(id, status = %request.status, "leave request decided");
        Ok(request)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ModuleServiceError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("{module} record {id} does not exist")]
    RecordNotFound { module: ModuleKind, id: String },
}

impl ModuleServiceError {
    /// HTTP status for the error.
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;

        match self {
            Self::RecordNotFound { .. } | Self::Source(SourceError::UnknownLeave(_)) => {
                StatusCode::NOT_FOUND
            }
            Self::Source(SourceError::ReadOnly(_)) => StatusCode::CONFLICT,
            Self::Source(SourceError::InvalidLeave(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Source(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
