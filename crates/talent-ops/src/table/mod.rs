//! Tabular view engine: client-side search, sort and pagination over
//! caller-supplied records.
//!
//! Callers hand over columns and rows that were already fetched; the engine owns
//! no I/O and never fails. View state changes go through [`TableEngine::dispatch`]
//! so that page resets happen in one place.

pub mod cell;
pub mod column;
pub mod compare;
pub mod engine;
pub mod import;
pub mod page;
pub mod state;
pub mod text;
pub mod value;
pub mod view;

#[cfg(test)]
mod tests;

pub use cell::{CellContent, Tone};
pub use column::{
    action_renderer, avatar_renderer, badge_renderer, progress_renderer, CellRenderer, Column,
    ColumnSpec, RenderSpec,
};
pub use compare::{CompareMode, SortKey};
pub use engine::{QueryResult, TableEngine};
pub use import::{rows_from_csv, rows_from_csv_path, ImportError};
pub use page::{PageWindow, ITEMS_PER_PAGE};
pub use state::{SortDirection, SortState, ViewIntent, ViewState};
pub use text::render_text;
pub use value::{display_text, Row};
pub use view::{HeaderCell, SearchBox, TableBody, TableFooter, TableView, EMPTY_MESSAGE};
