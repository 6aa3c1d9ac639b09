use super::common::*;
use crate::table::{Column, Row, TableEngine};
use serde_json::{json, Value};

#[test]
fn empty_term_keeps_every_row_in_order() {
    let engine = engine(12);
    let rows = engine.filter("");
    assert_eq!(rows.len(), 12);
    assert_eq!(names(&rows)[0], "Member 12");
}

#[test]
fn search_is_case_insensitive_substring_over_accessor_columns() {
    let engine = engine(25);
    let rows = engine.filter("ENGINEER");
    assert!(!rows.is_empty());
    for row in &rows {
        assert_eq!(row.text("dept").as_deref(), Some("Engineering"));
    }

    let excluded = engine
        .rows()
        .iter()
        .filter(|row| row.text("dept").as_deref() != Some("Engineering"))
        .count();
    assert_eq!(rows.len() + excluded, 25);
}

#[test]
fn fields_without_a_column_are_not_searched() {
    let engine = engine(5);
    assert!(engine.filter("@company.com").is_empty());
}

#[test]
fn numbers_are_matched_by_their_text() {
    let engine = engine(25);
    let rows = engine.filter("49");
    assert!(rows
        .iter()
        .all(|row| row.text("tasksCompleted").as_deref() == Some("49")
            || row.text("name").unwrap_or_default().contains("49")));
    assert!(!rows.is_empty());
}

#[test]
fn missing_and_null_fields_only_skip_their_own_column() {
    let columns = vec![Column::plain("Name", "name"), Column::plain("Manager", "manager")];
    let rows = vec![
        Row::new().with("name", "Alice").with("manager", Value::Null),
        Row::new().with("name", "Bob"),
        Row::new().with("name", "Carol").with("manager", "Alicia"),
    ];
    let engine = TableEngine::new("People", columns, rows);

    let found = engine.filter("ali");
    assert_eq!(names(&found), vec!["Alice", "Carol"]);
    assert!(engine.filter("null").is_empty());
}

#[test]
fn zero_and_false_values_are_searchable() {
    let columns = vec![Column::plain("Count", "count"), Column::plain("Flag", "flag")];
    let rows = vec![Row::new().with("count", json!(0)).with("flag", false)];
    let engine = TableEngine::new("Edge", columns, rows);
    assert_eq!(engine.filter("0").len(), 1);
    assert_eq!(engine.filter("fals").len(), 1);
}
