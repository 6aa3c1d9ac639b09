use super::cell::CellContent;
use super::page::PageWindow;
use super::state::SortDirection;
use serde::Serialize;

pub const EMPTY_MESSAGE: &str = "No results found";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub title: String,
    pub search: SearchBox,
    pub headers: Vec<HeaderCell>,
    pub body: TableBody,
    pub footer: TableFooter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchBox {
    pub visible: bool,
    pub term: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorted: Option<SortDirection>,
}

impl HeaderCell {
    pub fn sortable(&self) -> bool {
        self.sort_key.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableBody {
    Rows { rows: Vec<Vec<CellContent>> },
    Empty { message: &'static str, colspan: usize },
}

impl TableBody {
    pub fn rows(&self) -> &[Vec<CellContent>] {
        match self {
            Self::Rows { rows } => rows,
            Self::Empty { .. } => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableFooter {
    pub showing_from: usize,
    pub showing_to: usize,
    pub total_results: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub page_label: String,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl TableFooter {
    pub(crate) fn from_window(window: &PageWindow) -> Self {
        Self {
            showing_from: window.showing_from(),
            showing_to: window.showing_to(),
            total_results: window.total_rows,
            current_page: window.current_page,
            total_pages: window.total_pages,
            page_label: window.page_label(),
            previous_enabled: window.previous_enabled(),
            next_enabled: window.next_enabled(),
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Showing {}-{} of {} results",
            self.showing_from, self.showing_to, self.total_results
        )
    }
}
