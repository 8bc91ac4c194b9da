use serde::Serialize;

/// Derived pagination bookkeeping for one result set.
///
/// Always rebuilt as a whole from `(page, per_page, total)`; the navigation
/// flags and the page count are never adjusted independently, so they cannot
/// drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PaginationState {
    /// Derives the full state. An empty result set still has one page, with
    /// both navigation flags off; a zero `page` is treated as page 1.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let page = page.max(1);
        let total_pages = if total == 0 {
            1
        } else {
            total.div_ceil(per_page)
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_previous: page > 1,
            has_next: page < total_pages,
        }
    }

    /// Windowed page-number strip for pagination controls.
    ///
    /// Keeps the first and last `EDGE` pages plus a window around the
    /// current page, inserting a `None` (rendered as an ellipsis) wherever
    /// a run of page numbers is skipped.
    pub fn page_links(&self) -> Vec<Option<usize>> {
        const EDGE: usize = 2;
        const BEFORE_CURRENT: usize = 2;
        const AFTER_CURRENT: usize = 4;

        let last = self.total_pages;
        let window_start = self.page.saturating_sub(BEFORE_CURRENT);
        let window_end = self.page + AFTER_CURRENT;

        let mut links = Vec::new();
        let mut previous = 0;

        for number in 1..=last {
            let in_head = number <= EDGE;
            let in_tail = number + EDGE > last;
            let in_window = window_start <= number && number <= window_end;

            if in_head || in_tail || in_window {
                if number != previous + 1 {
                    links.push(None);
                }
                links.push(Some(number));
                previous = number;
            }
        }

        links
    }
}
