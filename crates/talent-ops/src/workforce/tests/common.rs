use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::table::Row;
use crate::workforce::domain::ModuleKind;
use crate::workforce::service::ModuleService;
use crate::workforce::source::{RecordSource, SampleRecordSource, SourceError};

/// Workforce rows for `count` generated members plus the sample records for other modules.
#[derive(Default, Clone)]
pub(super) struct MemoryRecords {
    pub(super) workforce: Arc<Mutex<Vec<Row>>>,
}

impl MemoryRecords {
    pub(super) fn with_members(count: usize) -> Self {
        let departments = ["Engineering", "Design", "Sales"];
        let rows = (1..=count)
            .map(|index| {
                Row::new()
                    .with("id", index)
                    .with("name", format!("Member {index:02}"))
                    .with("email", format!("member{index}@company.com"))
                    .with("role", "Engineer")
                    .with("dept", departments[index % departments.len()])
                    .with("status", "Active")
                    .with("joinDate", "Jan 12, 2023")
            })
            .collect();
        Self {
            workforce: Arc::new(Mutex::new(rows)),
        }
    }
}

impl RecordSource for MemoryRecords {
    fn records(&self, module: ModuleKind) -> Result<Vec<Row>, SourceError> {
        match module {
            ModuleKind::Workforce => Ok(self
                .workforce
                .lock()
                .expect("records mutex poisoned")
                .clone()),
            other => SampleRecordSource.records(other),
        }
    }
}

pub(super) struct OfflineRecords;

impl RecordSource for OfflineRecords {
    fn records(&self, _module: ModuleKind) -> Result<Vec<Row>, SourceError> {
        Err(SourceError::Unavailable("backend offline".to_string()))
    }
}

pub(super) fn build_service(count: usize) -> (ModuleService<MemoryRecords>, MemoryRecords) {
    let records = MemoryRecords::with_members(count);
    let service = ModuleService::new(Arc::new(records.clone()));
    (service, records)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
