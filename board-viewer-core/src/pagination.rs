//! Sliding pagination window

use serde::{Deserialize, Serialize};

/// Pages shown before the current page when there is room.
pub const SPAN_BEFORE: u32 = 2;
/// Distance between the first and last page of a full window (a full window has
/// `MAX_SPAN + 1` entries).
pub const MAX_SPAN: u32 = 5;

/// Page numbers to show as buttons, using the default spans.
///
/// See [`window_with`].
pub fn window(current_page: u32, total_pages: u32) -> Vec<u32> {
    window_with(current_page, total_pages, SPAN_BEFORE, MAX_SPAN)
}

/// Page numbers to show as buttons.
///
/// The window starts `span_before` pages before the current page and extends up to
/// `max_span` pages past its start. Near the last page it slides left so it stays
/// full width. The result is a contiguous ascending range inside
/// `[1, total_pages]`.
///
/// `total_pages` of 0 counts as 1 and `current_page` is clamped into range, so the
/// result is never empty.
pub fn window_with(current_page: u32, total_pages: u32, span_before: u32, max_span: u32) -> Vec<u32> {
    let total = total_pages.max(1);
    let current = current_page.clamp(1, total);

    let mut start = current.saturating_sub(span_before).max(1);
    let end = start.saturating_add(max_span).min(total);
    if end - start < max_span && start > 1 {
        start = end.saturating_sub(max_span).max(1);
    }

    (start..=end).collect()
}

/// Current page and page count of the active board.
///
/// `current_page` stays within `[1, total_pages]` once a fetch has completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    pub current_page: u32,
    pub total_pages: u32,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
        }
    }
}

impl PaginationState {
    /// "이전" is disabled on the first page.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// "다음" is disabled on the last page.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Page the "이전" button leads to; stays put on the first page.
    pub fn previous_page(&self) -> u32 {
        self.current_page.saturating_sub(1).max(1)
    }

    /// Page the "다음" button leads to; stays put on the last page.
    pub fn next_page(&self) -> u32 {
        self.current_page.saturating_add(1).min(self.total_pages.max(1))
    }

    pub fn window(&self) -> Vec<u32> {
        window(self.current_page, self.total_pages)
    }
}
