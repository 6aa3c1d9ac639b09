use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

impl SortDirection {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortState {
    pub fn by(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: Some(key.into()),
            direction,
        }
    }

    /// Header click: the active key flips direction, any other key starts ascending.
    pub fn requested(&self, key: &str) -> Self {
        let direction = if self.key.as_deref() == Some(key) {
            self.direction.toggled()
        } else {
            SortDirection::Ascending
        };
        Self::by(key, direction)
    }
}

/// Everything the user can change about a table view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
    pub search_visible: bool,
    pub search_term: String,
    pub sort: SortState,
    pub current_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_visible: false,
            search_term: String::new(),
            sort: SortState::default(),
            current_page: 1,
        }
    }
}

/// User intent fed to the view reducer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewIntent {
    ToggleSearch,
    SearchChanged { term: String },
    SortRequested { key: String },
    PageRequested { page: usize },
    NextPage,
    PreviousPage,
}

impl ViewState {
    /// Computes the next state for `intent`.
    ///
    /// `total_pages` is the page count of the view the intent was raised from.
    /// Search and sort changes always land on page 1; page targets outside
    /// `1..=total_pages` leave the state untouched. A page below 1 is read as
    /// page 1 before the intent applies. Sort keys are not validated here, the
    /// engine filters them against its columns first.
    pub fn apply(&self, intent: &ViewIntent, total_pages: usize) -> ViewState {
        let mut next = self.clone();
        next.current_page = self.current_page.max(1);
        let current = next.current_page;
        match intent {
            ViewIntent::ToggleSearch => {
                next.search_visible = !self.search_visible;
                next.current_page = 1;
            }
            ViewIntent::SearchChanged { term } => {
                next.search_term = term.clone();
                next.current_page = 1;
            }
            ViewIntent::SortRequested { key } => {
                next.sort = self.sort.requested(key);
                next.current_page = 1;
            }
            ViewIntent::PageRequested { page } => {
                if page_accepted(*page, total_pages) {
                    next.current_page = *page;
                }
            }
            ViewIntent::NextPage => {
                let target = current.saturating_add(1);
                if page_accepted(target, total_pages) {
                    next.current_page = target;
                }
            }
            ViewIntent::PreviousPage => {
                let target = current.saturating_sub(1);
                if page_accepted(target, total_pages) {
                    next.current_page = target;
                }
            }
        }
        next
    }
}

pub(crate) fn page_accepted(target: usize, total_pages: usize) -> bool {
    (1..=total_pages).contains(&target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_page(page: usize) -> ViewState {
        ViewState {
            current_page: page,
            ..ViewState::default()
        }
    }

    #[test]
    fn defaults_match_a_freshly_mounted_table() {
        let state = ViewState::default();
        assert_eq!(state.current_page, 1);
        assert!(state.search_term.is_empty());
        assert!(!state.search_visible);
        assert_eq!(state.sort.key, None);
        assert_eq!(state.sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn sort_requests_toggle_then_reset_on_new_key() {
        let state = ViewState::default();
        let first = state.apply(
            &ViewIntent::SortRequested {
                key: "name".to_string(),
            },
            3,
        );
        assert_eq!(first.sort, SortState::by("name", SortDirection::Ascending));

        let second = first.apply(
            &ViewIntent::SortRequested {
                key: "name".to_string(),
            },
            3,
        );
        assert_eq!(second.sort.direction, SortDirection::Descending);

        let third = second.apply(
            &ViewIntent::SortRequested {
                key: "name".to_string(),
            },
            3,
        );
        assert_eq!(third.sort.direction, SortDirection::Ascending);

        let other = second.apply(
            &ViewIntent::SortRequested {
                key: "dept".to_string(),
            },
            3,
        );
        assert_eq!(other.sort, SortState::by("dept", SortDirection::Ascending));
    }

    #[test]
    fn search_sort_and_visibility_changes_reset_page() {
        let state = on_page(3);
        let intents = [
            ViewIntent::ToggleSearch,
            ViewIntent::SearchChanged {
                term: "ali".to_string(),
            },
            ViewIntent::SortRequested {
                key: "name".to_string(),
            },
        ];
        for intent in &intents {
            assert_eq!(state.apply(intent, 5).current_page, 1, "{intent:?}");
        }
    }

    #[test]
    fn out_of_range_page_requests_are_ignored() {
        let state = on_page(2);
        assert_eq!(state.apply(&ViewIntent::PageRequested { page: 0 }, 3), state);
        assert_eq!(state.apply(&ViewIntent::PageRequested { page: 4 }, 3), state);
        assert_eq!(
            state
                .apply(&ViewIntent::PageRequested { page: 3 }, 3)
                .current_page,
            3
        );
    }

    #[test]
    fn next_and_previous_stop_at_bounds() {
        assert_eq!(on_page(3).apply(&ViewIntent::NextPage, 3).current_page, 3);
        assert_eq!(on_page(1).apply(&ViewIntent::PreviousPage, 3).current_page, 1);
        assert_eq!(on_page(2).apply(&ViewIntent::NextPage, 3).current_page, 3);
        assert_eq!(on_page(2).apply(&ViewIntent::PreviousPage, 3).current_page, 1);
        assert_eq!(on_page(1).apply(&ViewIntent::NextPage, 0).current_page, 1);
    }

    #[test]
    fn page_zero_is_read_as_first_page() {
        let state: ViewState =
            serde_json::from_str(r#"{"current_page":0}"#).expect("state parses");
        assert_eq!(state.apply(&ViewIntent::NextPage, 3).current_page, 2);
        assert_eq!(state.apply(&ViewIntent::PreviousPage, 3).current_page, 1);
        assert_eq!(
            state
                .apply(&ViewIntent::PageRequested { page: 9 }, 3)
                .current_page,
            1
        );
    }

    #[test]
    fn intents_deserialize_from_tagged_json() {
        let intents: Vec<ViewIntent> = serde_json::from_str(
            r#"[{"type":"toggle_search"},{"type":"search_changed","term":"eng"},{"type":"page_requested","page":2}]"#,
        )
        .expect("intents parse");
        assert_eq!(intents.len(), 3);
        assert_eq!(intents[2], ViewIntent::PageRequested { page: 2 });
    }

    #[test]
    fn direction_accepts_short_aliases() {
        let direction: SortDirection = serde_json::from_str("\"desc\"").expect("alias parses");
        assert_eq!(direction, SortDirection::Descending);
    }
}
