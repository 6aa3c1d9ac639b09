use super::common::*;
use crate::table::{render_text, CellContent, SortDirection, TableEngine, Tone, ViewState};

#[test]
fn custom_columns_receive_the_full_row() {
    let engine = engine(4);
    let view = engine.view(&ViewState::default());
    let first = &view.body.rows()[0];

    assert_eq!(first[0], CellContent::text("Member 04"));
    assert_eq!(
        first[2],
        CellContent::Badge {
            label: "On Leave".to_string(),
            tone: Tone::Danger
        }
    );
    assert_eq!(
        first[4],
        CellContent::Action {
            label: "View".to_string()
        }
    );
}

#[test]
fn headers_expose_sort_keys_only_for_accessor_columns() {
    let engine = engine(3);
    let view = engine.view(&sorted_by("dept", SortDirection::Descending));

    let sortable: Vec<bool> = view.headers.iter().map(|header| header.sortable()).collect();
    assert_eq!(sortable, vec![true, true, true, true, false]);
    assert_eq!(view.headers[1].sorted, Some(SortDirection::Descending));
    assert!(view.headers[0].sorted.is_none());
}

#[test]
fn text_rendering_lays_out_rows_and_footer() {
    let engine = engine(2);
    let view = engine.view(&sorted_by("name", SortDirection::Ascending));
    let text = render_text(&view);

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Workforce List");
    assert!(lines[2].starts_with("| Name ^"));
    assert!(lines[4].contains("Member 01"));
    assert!(lines[4].contains("[Active]"));
    assert!(lines[4].contains("<View>"));
    assert!(text.contains("Showing 1-2 of 2 results"));
    assert!(text.contains("(Previous) | Page 1 of 1 | (Next)"));

    let widths: Vec<usize> = lines[1..lines.len() - 1]
        .iter()
        .map(|line| line.chars().count())
        .collect();
    assert!(widths.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn text_rendering_shows_placeholder_and_search_term() {
    let engine = TableEngine::new("Leave Requests List", roster_columns(), Vec::new());
    let text = render_text(&engine.view(&searching("vacation")));

    assert!(text.contains("Search: vacation"));
    assert!(text.contains("No results found"));
    assert!(text.contains("Page 1 of 1"));
}

#[test]
fn views_serialize_with_tagged_bodies_and_cells() {
    let engine = engine(1);
    let json = serde_json::to_value(engine.view(&ViewState::default())).expect("view serializes");

    assert_eq!(json["body"]["kind"], "rows");
    assert_eq!(json["body"]["rows"][0][2]["kind"], "badge");
    assert_eq!(json["body"]["rows"][0][2]["tone"], "success");
    assert_eq!(json["footer"]["page_label"], "Page 1 of 1");
    assert!(json["headers"][4].get("sort_key").is_none());
}
