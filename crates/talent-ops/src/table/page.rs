use super::state::page_accepted;
use serde::Serialize;
use std::ops::Range;

/// Fixed page size of every table view.
pub const ITEMS_PER_PAGE: usize = 10;

/// Slice of the filtered and sorted rows visible on the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_rows: usize,
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    /// The page is not clamped to the row count; a page past the end yields an
    /// empty window.
    pub fn new(total_rows: usize, current_page: usize) -> Self {
        let current_page = current_page.max(1);
        let start = (current_page - 1)
            .saturating_mul(ITEMS_PER_PAGE)
            .min(total_rows);
        let end = start.saturating_add(ITEMS_PER_PAGE).min(total_rows);

        Self {
            current_page,
            total_pages: Self::total_pages_for(total_rows),
            total_rows,
            start,
            end,
        }
    }

    pub fn total_pages_for(total_rows: usize) -> usize {
        total_rows.div_ceil(ITEMS_PER_PAGE)
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn previous_enabled(&self) -> bool {
        page_accepted(self.current_page.saturating_sub(1), self.total_pages)
    }

    pub fn next_enabled(&self) -> bool {
        page_accepted(self.current_page.saturating_add(1), self.total_pages)
    }

    /// One-based index of the first visible row, or 0 when nothing is shown.
    pub fn showing_from(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.start + 1
        }
    }

    pub fn showing_to(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.end
        }
    }

    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(PageWindow::total_pages_for(0), 0);
        assert_eq!(PageWindow::total_pages_for(1), 1);
        assert_eq!(PageWindow::total_pages_for(10), 1);
        assert_eq!(PageWindow::total_pages_for(11), 2);
        assert_eq!(PageWindow::total_pages_for(25), 3);
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let window = PageWindow::new(25, 3);
        assert_eq!(window.range(), 20..25);
        assert_eq!(window.len(), 5);
        assert!(window.previous_enabled());
        assert!(!window.next_enabled());
        assert_eq!(window.page_label(), "Page 3 of 3");
    }

    #[test]
    fn empty_data_reports_a_single_page() {
        let window = PageWindow::new(0, 1);
        assert!(window.is_empty());
        assert_eq!(window.page_label(), "Page 1 of 1");
        assert!(!window.previous_enabled());
        assert!(!window.next_enabled());
        assert_eq!((window.showing_from(), window.showing_to()), (0, 0));
    }

    #[test]
    fn page_past_the_end_is_kept_but_empty() {
        let window = PageWindow::new(12, 4);
        assert_eq!(window.current_page, 4);
        assert!(window.is_empty());
        assert_eq!(window.page_label(), "Page 4 of 2");
        assert!(!window.next_enabled());
        assert!(!window.previous_enabled());
    }

    #[test]
    fn page_zero_is_read_as_first_page() {
        let window = PageWindow::new(5, 0);
        assert_eq!(window.current_page, 1);
        assert_eq!(window.range(), 0..5);
    }
}
