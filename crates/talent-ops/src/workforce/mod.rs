//! HR module pages (workforce, team status, recruitment, leaves, payroll,
//! policies) rendered through the table engine.

pub mod catalog;
pub mod domain;
pub mod leaves;
pub mod records;
pub mod router;
pub mod seed;
pub mod service;
pub mod source;

#[cfg(test)]
mod tests;

pub use catalog::module_columns;
pub use domain::{CatalogError, ModuleKind, TeamScope};
pub use leaves::{project_leaves, LeaveApplication, LeaveDecision, LeaveRecord, LeaveRequest};
pub use router::{module_router, InteractionRequest, TableQuery};
pub use service::{ModuleInteraction, ModuleService, ModuleServiceError, ModuleSummary};
pub use source::{
    scope_rows, MemoryRecordSource, RecordSource, SampleRecordSource, SourceError,
};
