use serde::Serialize;

/// Maximum number of page indicators shown at once.
pub const PAGE_WINDOW: usize = 4;

/// Pager metadata derived from `total`, `limit` and `offset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pager {
    pub page_count: usize,
    pub offset: usize,
    /// Page numbers to show, ascending, within `[1, page_count]`.
    pub pages: Vec<usize>,
    pub has_previous: bool,
    pub has_next: bool,
}

impl Pager {
    pub fn new(total: usize, limit: usize, offset: usize) -> Self {
        let page_count = if limit == 0 { 0 } else { total.div_ceil(limit) };

        Self {
            page_count,
            offset,
            pages: window(page_count, offset),
            has_previous: offset > 1,
            has_next: total > 0 && offset < page_count,
        }
    }

    pub fn previous(&self) -> Option<usize> {
        self.has_previous.then(|| self.offset - 1)
    }

    pub fn next(&self) -> Option<usize> {
        self.has_next.then(|| self.offset + 1)
    }
}

/// Starts at 1 while the offset is below the window size, otherwise one
/// page before the offset; shifted back so it never runs past `page_count`.
fn window(page_count: usize, offset: usize) -> Vec<usize> {
    if page_count == 0 {
        return Vec::new();
    }

    let start = if offset < PAGE_WINDOW { 1 } else { offset - 1 };
    let end = start.saturating_add(PAGE_WINDOW - 1).min(page_count);
    let width = PAGE_WINDOW.min(page_count);
    let start = (end + 1).saturating_sub(width).max(1);

    (start..=end).collect()
}
