use serde_json::json;

use crate::table::{
    action_renderer, badge_renderer, Column, Row, SortDirection, SortState, TableEngine, Tone,
    ViewState,
};
use std::collections::BTreeMap;

const DEPARTMENTS: [&str; 5] = ["Engineering", "Product", "Design", "Marketing", "Sales"];

pub(super) fn roster_columns() -> Vec<Column> {
    let tones = BTreeMap::from([
        ("Active".to_string(), Tone::Success),
        ("On Leave".to_string(), Tone::Danger),
    ]);
    vec![
        Column::plain("Name", "name"),
        Column::plain("Department", "dept"),
        Column::custom("Status", Some("status"), badge_renderer("status", tones, Tone::Neutral)),
        Column::plain("Tasks Completed", "tasksCompleted"),
        Column::custom("Actions", None, action_renderer("View")),
    ]
}

/// `count` members named "Member 01".."Member NN", listed in reverse name order.
pub(super) fn roster(count: usize) -> Vec<Row> {
    (1..=count)
        .rev()
        .map(|index| {
            Row::new()
                .with("id", index)
                .with("name", format!("Member {index:02}"))
                .with("email", format!("member{index}@company.com"))
                .with("dept", DEPARTMENTS[index % DEPARTMENTS.len()])
                .with(
                    "status",
                    if index % 4 == 0 { "On Leave" } else { "Active" },
                )
                .with("tasksCompleted", json!(index * 7 % 50))
        })
        .collect()
}

pub(super) fn engine(count: usize) -> TableEngine {
    TableEngine::new("Workforce List", roster_columns(), roster(count))
}

pub(super) fn sorted_by(key: &str, direction: SortDirection) -> ViewState {
    ViewState {
        sort: SortState::by(key, direction),
        ..ViewState::default()
    }
}

pub(super) fn searching(term: &str) -> ViewState {
    ViewState {
        search_visible: true,
        search_term: term.to_string(),
        ..ViewState::default()
    }
}

pub(super) fn names(rows: &[&Row]) -> Vec<String> {
    rows.iter()
        .map(|row| row.text("name").unwrap_or_default())
        .collect()
}
