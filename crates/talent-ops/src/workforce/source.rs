use super::domain::{ModuleKind, TeamScope};
use super::leaves::{project_leaves, LeaveApplication, LeaveDecision, LeaveRecord, LeaveRequest};
use super::seed;
use crate::table::{ImportError, Row};
use serde::Serialize;
use std::sync::{Mutex, MutexGuard};

/// Supplies already-fetched records for a module page.
///
/// Leave mutations are optional; read-only sources keep the default methods.
pub trait RecordSource: Send + Sync {
    fn records(&self, module: ModuleKind) -> Result<Vec<Row>, SourceError>;

    fn apply_leave(&self, _application: LeaveApplication) -> Result<LeaveRequest, SourceError> {
        Err(SourceError::ReadOnly(ModuleKind::Leaves))
    }

    fn decide_leave(&self, _id: u32, _decision: LeaveDecision) -> Result<LeaveRequest, SourceError> {
        Err(SourceError::ReadOnly(ModuleKind::Leaves))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to import {module} records: {source}")]
    Import {
        module: ModuleKind,
        #[source]
        source: ImportError,
    },
    #[error("failed to encode {module} records: {source}")]
    Encode {
        module: ModuleKind,
        #[source]
        source: serde_json::Error,
    },
    #[error("record source unavailable: {0}")]
    Unavailable(String),
    #[error("{0} records are read-only")]
    ReadOnly(ModuleKind),
    #[error("leave request {0} does not exist")]
    UnknownLeave(u32),
    #[error("invalid leave application: {0}")]
    InvalidLeave(String),
}

/// Built-in sample records for every module.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleRecordSource;

impl RecordSource for SampleRecordSource {
    fn records(&self, module: ModuleKind) -> Result<Vec<Row>, SourceError> {
        match module {
            ModuleKind::Workforce => encode(module, &seed::team_members()),
            ModuleKind::Status => encode(module, &seed::availability()),
            ModuleKind::Recruitment => encode(module, &seed::candidates()),
            ModuleKind::Leaves => encode(module, &project_leaves(&seed::leave_records())),
            ModuleKind::Payroll => encode(module, &seed::payroll()),
            ModuleKind::Policies => encode(module, &seed::policies()),
        }
    }
}

/// Sample records with a mutable leave ledger, for running without a backend.
#[derive(Debug)]
pub struct MemoryRecordSource {
    leaves: Mutex<Vec<LeaveRecord>>,
}

impl MemoryRecordSource {
    pub fn new(leaves: Vec<LeaveRecord>) -> Self {
        Self {
            leaves: Mutex::new(leaves),
        }
    }

    fn ledger(&self) -> Result<MutexGuard<'_, Vec<LeaveRecord>>, SourceError> {
        self.leaves
            .lock()
            .map_err(|_| SourceError::Unavailable("leave ledger lock poisoned".to_string()))
    }
}

impl Default for MemoryRecordSource {
    fn default() -> Self {
        Self::new(seed::leave_records())
    }
}

impl RecordSource for MemoryRecordSource {
    fn records(&self, module: ModuleKind) -> Result<Vec<Row>, SourceError> {
        match module {
            ModuleKind::Leaves => {
                let requests = project_leaves(&self.ledger()?);
                encode(module, &requests)
            }
            other => SampleRecordSource.records(other),
        }
    }

    fn apply_leave(&self, application: LeaveApplication) -> Result<LeaveRequest, SourceError> {
        if application.leave_type.trim().is_empty() {
            return Err(SourceError::InvalidLeave("leave type is required".to_string()));
        }
        if application.employee_name.trim().is_empty() {
            return Err(SourceError::InvalidLeave("employee name is required".to_string()));
        }

        let mut ledger = self.ledger()?;
        let id = ledger.iter().map(|record| record.id).max().unwrap_or(0) + 1;
        let record = application.into_record(id);
        let request = record.to_request();
        ledger.push(record);
        Ok(request)
    }

    fn decide_leave(&self, id: u32, decision: LeaveDecision) -> Result<LeaveRequest, SourceError> {
        let mut ledger = self.ledger()?;
        let record = ledger
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(SourceError::UnknownLeave(id))?;
        record.status = Some(decision.status().to_string());
        Ok(record.to_request())
    }
}

fn encode<T: Serialize>(module: ModuleKind, records: &[T]) -> Result<Vec<Row>, SourceError> {
    records
        .iter()
        .map(|record| {
            Row::from_serialize(record).map_err(|source| SourceError::Encode { module, source })
        })
        .collect()
}

/// Keeps rows whose `dept` or `department` equals the team.
pub fn scope_rows(rows: Vec<Row>, scope: &TeamScope) -> Vec<Row> {
    match scope {
        TeamScope::All => rows,
        TeamScope::Team(team) => rows
            .into_iter()
            .filter(|row| {
                ["dept", "department"]
                    .iter()
                    .any(|field| row.text(field).as_deref() == Some(team.as_str()))
            })
            .collect(),
    }
}
