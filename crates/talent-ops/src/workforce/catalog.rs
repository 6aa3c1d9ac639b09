use super::domain::ModuleKind;
use crate::table::{
    action_renderer, avatar_renderer, badge_renderer, progress_renderer, Column, Tone,
};
use std::collections::BTreeMap;

const CANDIDATE_SCORE_THRESHOLD: f64 = 80.0;

fn tones(pairs: &[(&str, Tone)]) -> BTreeMap<String, Tone> {
    pairs
        .iter()
        .map(|(value, tone)| (value.to_string(), *tone))
        .collect()
}

fn badge(header: &str, accessor: &str, pairs: &[(&str, Tone)], fallback: Tone) -> Column {
    Column::custom(
        header,
        Some(accessor),
        badge_renderer(accessor, tones(pairs), fallback),
    )
}

/// Column layout for a module page.
pub fn module_columns(module: ModuleKind) -> Vec<Column> {
    match module {
        ModuleKind::Workforce => vec![
            Column::custom(
                "Team Member Name",
                Some("name"),
                avatar_renderer("name", Some("email")),
            ),
            Column::plain("Role", "role"),
            Column::plain("Department", "dept"),
            badge(
                "Status",
                "status",
                &[("Active", Tone::Success)],
                Tone::Danger,
            ),
            Column::plain("Join Date", "joinDate"),
            Column::custom("Actions", None, action_renderer("View")),
        ],
        ModuleKind::Status => vec![
            Column::plain("Team Member", "name"),
            Column::plain("Department", "dept"),
            badge(
                "Availability",
                "availability",
                &[("Online", Tone::Success), ("Away", Tone::Warning)],
                Tone::Neutral,
            ),
            Column::plain("Current Task", "task"),
            Column::plain("Last Active", "lastActive"),
        ],
        ModuleKind::Recruitment => vec![
            Column::plain("Candidate", "name"),
            Column::plain("Applied For", "role"),
            badge("Stage", "stage", &[], Tone::Info),
            Column::custom(
                "Score",
                Some("score"),
                progress_renderer("score", CANDIDATE_SCORE_THRESHOLD),
            ),
            Column::plain("Source", "source"),
            Column::custom("Actions", None, action_renderer("View")),
        ],
        ModuleKind::Leaves => vec![
            Column::plain("Team Member", "name"),
            Column::plain("Type", "type"),
            Column::plain("Duration", "duration"),
            Column::plain("Dates", "dates"),
            badge(
                "Status",
                "status",
                &[("Approved", Tone::Success), ("Pending", Tone::Warning)],
                Tone::Danger,
            ),
        ],
        ModuleKind::Payroll => vec![
            Column::plain("Team Member", "name"),
            Column::plain("Month", "month"),
            Column::plain("Net Salary", "salary"),
            badge("Status", "status", &[], Tone::Success),
            Column::custom("Payslip", None, action_renderer("Download")),
        ],
        ModuleKind::Policies => vec![
            Column::plain("Policy Name", "name"),
            Column::plain("Category", "category"),
            Column::plain("Effective Date", "effectiveDate"),
            badge(
                "Status",
                "status",
                &[("Active", Tone::Success)],
                Tone::Neutral,
            ),
            Column::custom("Document", None, action_renderer("Download")),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_module_has_a_sortable_column() {
        for module in ModuleKind::ordered() {
            let columns = module_columns(module);
            assert!(!columns.is_empty(), "{module} has no columns");
            assert!(columns.iter().any(Column::is_sortable), "{module}");
        }
    }

    #[test]
    fn action_columns_carry_no_accessor() {
        let columns = module_columns(ModuleKind::Payroll);
        let payslip = columns
            .iter()
            .find(|column| column.header() == "Payslip")
            .expect("payslip column present");
        assert!(payslip.accessor().is_none());
    }

    #[test]
    fn team_scoped_modules_expose_department() {
        for module in ModuleKind::ordered()
            .into_iter()
            .filter(|module| module.team_scoped())
        {
            assert!(module_columns(module)
                .iter()
                .any(|column| column.accessor() == Some("dept")));
        }
    }
}
