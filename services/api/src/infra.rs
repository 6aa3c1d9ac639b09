use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use talent_ops::table::rows_from_csv_path;
use talent_ops::table::Row;
use talent_ops::workforce::{
    LeaveApplication, LeaveDecision, LeaveRequest, MemoryRecordSource, ModuleKind, RecordSource,
    SourceError,
};
use tracing::debug;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Reads `<module>.csv` from the data directory, falling back to the in-memory
/// sample records when the directory is unset or the file is absent.
///
/// Leave changes go to the in-memory ledger unless `leaves.csv` is present, in
/// which case the leave page is read-only.
#[derive(Debug, Default)]
pub(crate) struct DirectoryRecordSource {
    data_dir: Option<PathBuf>,
    fallback: MemoryRecordSource,
}

impl DirectoryRecordSource {
    pub(crate) fn new(data_dir: Option<PathBuf>) -> Self {
        Self {
            data_dir,
            fallback: MemoryRecordSource::default(),
        }
    }

    fn csv_path(&self, module: ModuleKind) -> Option<PathBuf> {
        self.data_dir
            .as_ref()
            .map(|dir| dir.join(format!("{}.csv", module.slug())))
            .filter(|path| path.is_file())
    }

    fn leave_ledger(&self) -> Result<&MemoryRecordSource, SourceError> {
        match self.csv_path(ModuleKind::Leaves) {
            Some(_) => Err(SourceError::ReadOnly(ModuleKind::Leaves)),
            None => Ok(&self.fallback),
        }
    }
}

impl RecordSource for DirectoryRecordSource {
    fn records(&self, module: ModuleKind) -> Result<Vec<Row>, SourceError> {
        match self.csv_path(module) {
            Some(path) => {
                debug!(%module, path = %path.display(), "loading module records from csv");
                rows_from_csv_path(&path).map_err(|source| SourceError::Import { module, source })
            }
            None => self.fallback.records(module),
        }
    }

    fn apply_leave(&self, application: LeaveApplication) -> Result<LeaveRequest, SourceError> {
        self.leave_ledger()?.apply_leave(application)
    }

    fn decide_leave(&self, id: u32, decision: LeaveDecision) -> Result<LeaveRequest, SourceError> {
        self.leave_ledger()?.decide_leave(id, decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use talent_ops::workforce::SampleRecordSource;
    use tempfile::TempDir;

    fn data_dir() -> TempDir {
        TempDir::new().expect("create data dir")
    }

    #[test]
    fn reads_module_csv_when_present() {
        let dir = data_dir();
        fs::write(
            dir.path().join("payroll.csv"),
            "name,month,salary,status\nGrace Hopper,December 2025,\"$6,100\",Paid\n",
        )
        .expect("write payroll csv");

        let source = DirectoryRecordSource::new(Some(dir.path().to_path_buf()));
        let rows = source.records(ModuleKind::Payroll).expect("payroll rows");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text("salary").as_deref(), Some("$6,100"));
    }

    #[test]
    fn falls_back_to_samples_for_missing_files() {
        let dir = data_dir();
        let source = DirectoryRecordSource::new(Some(dir.path().to_path_buf()));
        let rows = source.records(ModuleKind::Policies).expect("policy rows");
        assert_eq!(
            rows.len(),
            SampleRecordSource
                .records(ModuleKind::Policies)
                .expect("sample policies")
                .len()
        );
    }

    #[test]
    fn malformed_csv_surfaces_import_error() {
        let dir = data_dir();
        fs::write(dir.path().join("workforce.csv"), "name,name\nAlice,Alice\n")
            .expect("write workforce csv");

        let source = DirectoryRecordSource::new(Some(dir.path().to_path_buf()));
        match source.records(ModuleKind::Workforce) {
            Err(SourceError::Import { module, .. }) => assert_eq!(module, ModuleKind::Workforce),
            other => panic!("expected import error, got {other:?}"),
        }
    }

    #[test]
    fn leave_decisions_use_the_in_memory_ledger() {
        let source = DirectoryRecordSource::default();
        let request = source
            .decide_leave(2, LeaveDecision::Approve)
            .expect("sample request exists");
        assert_eq!(request.status, "Approved");

        let rows = source.records(ModuleKind::Leaves).expect("leave rows");
        let decided = rows
            .iter()
            .find(|row| row.text("id").as_deref() == Some("2"))
            .expect("decided row");
        assert_eq!(decided.text("status").as_deref(), Some("Approved"));
    }

    #[test]
    fn leaves_from_csv_are_read_only() {
        let dir = data_dir();
        fs::write(
            dir.path().join("leaves.csv"),
            "id,name,type,duration,dates,status\n7,Grace Hopper,Vacation,2 Days,Jan 05 - Jan 06,Pending\n",
        )
        .expect("write leaves csv");

        let source = DirectoryRecordSource::new(Some(dir.path().to_path_buf()));
        assert!(matches!(
            source.decide_leave(7, LeaveDecision::Approve),
            Err(SourceError::ReadOnly(ModuleKind::Leaves))
        ));
        assert_eq!(source.records(ModuleKind::Leaves).expect("csv rows").len(), 1);
    }
}
