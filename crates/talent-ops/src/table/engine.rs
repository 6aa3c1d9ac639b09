use super::column::Column;
use super::compare::CompareMode;
use super::page::PageWindow;
use super::state::{SortDirection, SortState, ViewIntent, ViewState};
use super::value::{display_text, Row};
use super::view::{HeaderCell, SearchBox, TableBody, TableFooter, TableView, EMPTY_MESSAGE};
use tracing::debug;

/// Searchable, sortable, paginated view over an in-memory row set.
///
/// Every view is recomputed from scratch as filter, then sort, then paginate.
#[derive(Debug, Clone)]
pub struct TableEngine {
    title: String,
    columns: Vec<Column>,
    rows: Vec<Row>,
}

/// Filtered and sorted rows together with the page window over them.
#[derive(Debug)]
pub struct QueryResult<'a> {
    pub rows: Vec<&'a Row>,
    pub window: PageWindow,
}

impl QueryResult<'_> {
    pub fn page_rows(&self) -> &[&Row] {
        &self.rows[self.window.range()]
    }
}

impl TableEngine {
    pub fn new(title: impl Into<String>, columns: Vec<Column>, rows: Vec<Row>) -> Self {
        Self {
            title: title.into(),
            columns,
            rows,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_sortable(&self, key: &str) -> bool {
        self.columns
            .iter()
            .any(|column| column.accessor() == Some(key))
    }

    /// Rows with at least one accessor column containing `term`, case-insensitively.
    pub fn filter(&self, term: &str) -> Vec<&Row> {
        if term.is_empty() {
            return self.rows.iter().collect();
        }

        let needle = term.to_lowercase();
        self.rows
            .iter()
            .filter(|row| self.matches(row, &needle))
            .collect()
    }

    fn matches(&self, row: &Row, needle: &str) -> bool {
        self.columns
            .iter()
            .filter_map(Column::accessor)
            .filter_map(|accessor| row.get(accessor))
            .filter(|value| !value.is_null())
            .any(|value| display_text(value).to_lowercase().contains(needle))
    }

    /// Stable sort of `rows` by the sort key; no key keeps the incoming order.
    pub fn sort<'a>(&self, rows: Vec<&'a Row>, sort: &SortState) -> Vec<&'a Row> {
        let Some(key) = sort.key.as_deref() else {
            return rows;
        };

        let mode = CompareMode::detect(rows.iter().copied(), key);
        let mut keyed: Vec<_> = rows
            .into_iter()
            .map(|row| (mode.key_for(row.get(key)), row))
            .collect();

        keyed.sort_by(|(a, _), (b, _)| match sort.direction {
            SortDirection::Ascending => a.compare(b),
            SortDirection::Descending => b.compare(a),
        });

        keyed.into_iter().map(|(_, row)| row).collect()
    }

    pub fn query(&self, state: &ViewState) -> QueryResult<'_> {
        let filtered = self.filter(&state.search_term);
        let rows = self.sort(filtered, &state.sort);
        let window = PageWindow::new(rows.len(), state.current_page);
        QueryResult { rows, window }
    }

    pub fn total_pages(&self, state: &ViewState) -> usize {
        PageWindow::total_pages_for(self.filter(&state.search_term).len())
    }

    pub fn view(&self, state: &ViewState) -> TableView {
        let result = self.query(state);

        let headers = self
            .columns
            .iter()
            .map(|column| {
                let sort_key = column.accessor().map(str::to_string);
                let sorted = match (&sort_key, &state.sort.key) {
                    (Some(key), Some(active)) if key == active => Some(state.sort.direction),
                    _ => None,
                };
                HeaderCell {
                    label: column.header().to_string(),
                    sort_key,
                    sorted,
                }
            })
            .collect();

        let body = if result.window.is_empty() {
            TableBody::Empty {
                message: EMPTY_MESSAGE,
                colspan: self.columns.len(),
            }
        } else {
            TableBody::Rows {
                rows: result
                    .page_rows()
                    .iter()
                    .map(|row| self.columns.iter().map(|column| column.render(row)).collect())
                    .collect(),
            }
        };

        TableView {
            title: self.title.clone(),
            search: SearchBox {
                visible: state.search_visible,
                term: state.search_term.clone(),
            },
            headers,
            body,
            footer: TableFooter::from_window(&result.window),
        }
    }

    /// Applies one user intent to `state`. Returns whether the state changed.
    ///
    /// Sort requests for keys that no column exposes are dropped.
    pub fn dispatch(&self, state: &mut ViewState, intent: &ViewIntent) -> bool {
        if let ViewIntent::SortRequested { key } = intent {
            if !self.is_sortable(key) {
                debug!(table = %self.title, %key, "ignoring sort on non-sortable key");
                return false;
            }
        }

        let next = state.apply(intent, self.total_pages(state));
        if next == *state {
            debug!(table = %self.title, ?intent, "intent left view state unchanged");
            return false;
        }

        debug!(
            table = %self.title,
            ?intent,
            page = next.current_page,
            "view state updated"
        );
        *state = next;
        true
    }

    /// Replays `intents` in order starting from `state`.
    pub fn dispatch_all<'i, I>(&self, state: &mut ViewState, intents: I)
    where
        I: IntoIterator<Item = &'i ViewIntent>,
    {
        for intent in intents {
            self.dispatch(state, intent);
        }
    }
}
