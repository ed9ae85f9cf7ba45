//! Page slicing, page-number compression and the page controller shared by
//! the table and grid views.
//!
//! Pages are 1-based everywhere. A controller either owns its page cursor
//! ([`PaginationMode::Internal`]) or only forwards requests to whoever owns
//! the remote query ([`PaginationMode::External`]).

use crate::error::{Result, SharedError};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Page lists longer than this are compressed with ellipses.
pub const MAX_UNCOMPRESSED_PAGES: u32 = 5;

/// One entry of the rendered page-number list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageItem::Page(n) => write!(f, "{}", n),
            PageItem::Ellipsis => write!(f, "…"),
        }
    }
}

/// Upward notification produced by a page control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageEvent {
    PageChange(u32),
    /// A page-size change always lands on page 1.
    PageSizeChange { page_size: u32, page: u32 },
}

/// Rows per page when the caller gives no usable size.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// `ceil(total / page_size)`; zero when either side is zero.
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 || total == 0 {
        return 0;
    }
    let pages = (total + u64::from(page_size) - 1) / u64::from(page_size);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Rows `[(page-1)*page_size, page*page_size)` clamped to the slice bounds.
pub fn paginate<T>(rows: &[T], page: u32, page_size: u32) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let size = page_size as usize;
    let start = (page as usize - 1).saturating_mul(size);
    if start >= rows.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(rows.len());
    &rows[start..end]
}

/// Page numbers to render for `page` out of `total_pages`.
pub fn page_numbers(page: u32, total_pages: u32) -> Vec<PageItem> {
    if total_pages <= MAX_UNCOMPRESSED_PAGES {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let last = total_pages;
    if page <= 3 {
        vec![
            PageItem::Page(1),
            PageItem::Page(2),
            PageItem::Page(3),
            PageItem::Page(4),
            PageItem::Ellipsis,
            PageItem::Page(last),
        ]
    } else if page >= last - 2 {
        vec![
            PageItem::Page(1),
            PageItem::Ellipsis,
            PageItem::Page(last - 3),
            PageItem::Page(last - 2),
            PageItem::Page(last - 1),
            PageItem::Page(last),
        ]
    } else {
        vec![
            PageItem::Page(1),
            PageItem::Ellipsis,
            PageItem::Page(page - 1),
            PageItem::Page(page),
            PageItem::Page(page + 1),
            PageItem::Ellipsis,
            PageItem::Page(last),
        ]
    }
}

/// Snapshot of where a paged listing currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl PaginationState {
    /// Builds a state whose `total_pages` is derived from `total`.
    pub fn from_total(page: u32, page_size: u32, total: u64) -> Result<Self> {
        if page_size == 0 {
            return Err(SharedError::InvalidPageSize(page_size));
        }
        Ok(Self {
            page: page.max(1),
            page_size,
            total,
            total_pages: total_pages(total, page_size),
        })
    }

    /// 1-based index of the first row on this page, 0 when there are none.
    pub fn range_start(&self) -> u64 {
        if self.total == 0 {
            return 0;
        }
        (u64::from(self.page) - 1) * u64::from(self.page_size) + 1
    }

    /// 1-based index of the last row on this page.
    pub fn range_end(&self) -> u64 {
        (u64::from(self.page) * u64::from(self.page_size)).min(self.total)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Page buttons are only worth showing past a single page.
    pub fn has_multiple_pages(&self) -> bool {
        self.total_pages > 1
    }

    pub fn accepts(&self, requested: u32) -> bool {
        requested >= 1 && requested <= self.total_pages
    }

    pub fn page_numbers(&self) -> Vec<PageItem> {
        page_numbers(self.page, self.total_pages)
    }

    /// Request for another page; out-of-range and same-page requests are no-ops.
    pub fn request_page(&self, requested: u32) -> Option<PageEvent> {
        if !self.accepts(requested) || requested == self.page {
            debug!(
                "Ignoring page request {} (page {}, {} pages)",
                requested, self.page, self.total_pages
            );
            return None;
        }
        Some(PageEvent::PageChange(requested))
    }

    /// Request for a different page size. The event always targets page 1.
    pub fn request_page_size(&self, page_size: u32) -> Result<PageEvent> {
        if page_size == 0 {
            return Err(SharedError::InvalidPageSize(page_size));
        }
        Ok(PageEvent::PageSizeChange { page_size, page: 1 })
    }
}

/// Page cursor for a listing that slices its own rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page: u32,
    page_size: u32,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self { page: 1, page_size: DEFAULT_PAGE_SIZE }
    }
}

impl PageCursor {
    pub fn new(page_size: u32) -> Result<Self> {
        if page_size == 0 {
            return Err(SharedError::InvalidPageSize(page_size));
        }
        Ok(Self { page: 1, page_size })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn state(&self, total: u64) -> PaginationState {
        PaginationState {
            page: self.page,
            page_size: self.page_size,
            total,
            total_pages: total_pages(total, self.page_size),
        }
    }

    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        paginate(rows, self.page, self.page_size)
    }

    /// Moves to `requested` when it lies in `[1, total_pages]`.
    pub fn go_to(&mut self, requested: u32, total: u64) -> Option<PageEvent> {
        let event = self.state(total).request_page(requested)?;
        self.page = requested;
        debug!("Moved to page {}", requested);
        Some(event)
    }

    pub fn set_page_size(&mut self, page_size: u32) -> Result<PageEvent> {
        let event = self.state(0).request_page_size(page_size)?;
        self.page_size = page_size;
        self.page = 1;
        debug!("Page size set to {}, back to page 1", page_size);
        Ok(event)
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Pulls the cursor back inside `[1, total_pages]` after the row set shrank.
    pub fn clamp(&mut self, total: u64) {
        let last = total_pages(total, self.page_size).max(1);
        if self.page > last {
            self.page = last;
        }
    }
}

/// How a view pages its rows. Starts internal unless the caller already owns state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationMode {
    /// The view slices an in-memory list.
    Internal(PageCursor),
    /// Rows arrive already paged; state is owned by the caller.
    External(PaginationState),
}

impl PaginationMode {
    pub fn internal(page_size: u32) -> Result<Self> {
        Ok(Self::Internal(PageCursor::new(page_size)?))
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Self::External(_))
    }

    /// Current state; `local_total` is only consulted in internal mode.
    pub fn state(&self, local_total: u64) -> PaginationState {
        match self {
            Self::Internal(cursor) => cursor.state(local_total),
            Self::External(state) => *state,
        }
    }

    pub fn go_to(&mut self, requested: u32, local_total: u64) -> Option<PageEvent> {
        match self {
            Self::Internal(cursor) => cursor.go_to(requested, local_total),
            Self::External(state) => state.request_page(requested),
        }
    }

    pub fn set_page_size(&mut self, page_size: u32) -> Result<PageEvent> {
        match self {
            Self::Internal(cursor) => cursor.set_page_size(page_size),
            Self::External(state) => state.request_page_size(page_size),
        }
    }

    /// Back to page 1; external state is the caller's to change.
    pub fn reset(&mut self) {
        if let Self::Internal(cursor) = self {
            cursor.reset();
        }
    }

    /// Replaces caller-owned state. A view built before the caller had any
    /// state switches to external mode here.
    pub fn sync_external(&mut self, next: PaginationState) {
        match self {
            Self::External(state) => *state = next,
            Self::Internal(_) => {
                debug!("Caller supplied pagination, switching to external mode");
                *self = Self::External(next);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;
    use PageItem::{Ellipsis, Page};

    #[rstest]
    #[case(0, 10, 0)]
    #[case(23, 10, 3)]
    #[case(20, 10, 2)]
    #[case(1, 10, 1)]
    #[case(5, 0, 0)]
    fn test_total_pages(#[case] total: u64, #[case] size: u32, #[case] expected: u32) {
        assert_eq!(total_pages(total, size), expected);
    }

    #[test]
    fn test_twenty_three_rows_in_pages_of_ten() {
        let rows: Vec<u32> = (1..=23).collect();
        assert_eq!(paginate(&rows, 1, 10).len(), 10);
        assert_eq!(paginate(&rows, 2, 10).len(), 10);
        assert_eq!(paginate(&rows, 3, 10), &[21, 22, 23]);
        assert!(paginate(&rows, 4, 10).is_empty());
        assert_eq!(total_pages(rows.len() as u64, 10), 3);
    }

    #[test]
    fn test_page_zero_is_empty() {
        let rows = vec![1, 2, 3];
        assert!(paginate(&rows, 0, 2).is_empty());
    }

    #[rstest]
    #[case(1, 10, vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)])]
    #[case(3, 10, vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)])]
    #[case(5, 10, vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)])]
    #[case(8, 10, vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)])]
    #[case(10, 10, vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)])]
    #[case(4, 6, vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6)])]
    fn test_page_numbers_compressed(
        #[case] page: u32,
        #[case] total: u32,
        #[case] expected: Vec<PageItem>,
    ) {
        assert_eq!(page_numbers(page, total), expected);
    }

    #[test]
    fn test_page_item_display() {
        assert_eq!(Page(12).to_string(), "12");
        assert_eq!(Ellipsis.to_string(), "…");
    }

    #[test]
    fn test_range_summary() {
        let state = PaginationState::from_total(3, 10, 23).unwrap();
        assert_eq!(state.range_start(), 21);
        assert_eq!(state.range_end(), 23);
        assert!(state.has_previous());
        assert!(!state.has_next());

        let empty = PaginationState::from_total(1, 10, 0).unwrap();
        assert_eq!(empty.range_start(), 0);
        assert_eq!(empty.range_end(), 0);
        assert_eq!(empty.total_pages, 0);
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        assert_eq!(PageCursor::new(0), Err(SharedError::InvalidPageSize(0)));
        assert!(PaginationState::from_total(1, 0, 10).is_err());
    }

    #[test]
    fn test_cursor_ignores_out_of_range_requests() {
        let mut cursor = PageCursor::new(10).unwrap();
        assert_eq!(cursor.go_to(0, 23), None);
        assert_eq!(cursor.go_to(4, 23), None);
        assert_eq!(cursor.page(), 1);
        assert_eq!(cursor.go_to(3, 23), Some(PageEvent::PageChange(3)));
        assert_eq!(cursor.page(), 3);
        assert_eq!(cursor.go_to(3, 23), None);
    }

    #[test]
    fn test_cursor_page_size_change_resets_page() {
        let mut cursor = PageCursor::new(10).unwrap();
        cursor.go_to(2, 23);
        let event = cursor.set_page_size(20).unwrap();
        assert_eq!(event, PageEvent::PageSizeChange { page_size: 20, page: 1 });
        assert_eq!(cursor.page(), 1);
        assert_eq!(cursor.page_size(), 20);
        assert!(cursor.set_page_size(0).is_err());
        assert_eq!(cursor.page_size(), 20);
    }

    #[test]
    fn test_cursor_clamp_after_shrink() {
        let mut cursor = PageCursor::new(10).unwrap();
        cursor.go_to(3, 23);
        cursor.clamp(12);
        assert_eq!(cursor.page(), 2);
        cursor.clamp(0);
        assert_eq!(cursor.page(), 1);
    }

    #[test]
    fn test_external_mode_forwards_without_moving() {
        let state = PaginationState { page: 2, page_size: 25, total: 240, total_pages: 10 };
        let mut mode = PaginationMode::External(state);
        assert_eq!(mode.go_to(5, 0), Some(PageEvent::PageChange(5)));
        assert_eq!(mode.state(0).page, 2);
        assert_eq!(mode.go_to(11, 0), None);
        assert_eq!(
            mode.set_page_size(50).unwrap(),
            PageEvent::PageSizeChange { page_size: 50, page: 1 }
        );
        assert_eq!(mode.state(0).page_size, 25);

        mode.sync_external(PaginationState { page: 5, ..state });
        assert_eq!(mode.state(0).page, 5);
    }

    #[test]
    fn test_sync_turns_internal_mode_external() {
        let mut mode = PaginationMode::internal(10).unwrap();
        let server = PaginationState { page: 1, page_size: 10, total: 240, total_pages: 24 };
        mode.sync_external(server);
        assert!(mode.is_external());
        assert_eq!(mode.state(10), server);
        assert_eq!(mode.go_to(2, 10), Some(PageEvent::PageChange(2)));
    }

    #[rstest]
    #[case(0, false)]
    #[case(10, false)]
    #[case(11, true)]
    fn test_has_multiple_pages(#[case] total: u64, #[case] expected: bool) {
        let state = PaginationState::from_total(1, 10, total).unwrap();
        assert_eq!(state.has_multiple_pages(), expected);
    }

    #[test]
    fn test_external_state_ignores_local_total() {
        let state = PaginationState { page: 1, page_size: 10, total: 95, total_pages: 10 };
        let mode = PaginationMode::External(state);
        assert_eq!(mode.state(3), state);
    }

    proptest! {
        #[test]
        fn prop_pages_reconstruct_rows(rows in proptest::collection::vec(any::<u16>(), 0..200), size in 1u32..40) {
            let pages = total_pages(rows.len() as u64, size);
            let mut rebuilt = Vec::new();
            for page in 1..=pages {
                rebuilt.extend_from_slice(paginate(&rows, page, size));
            }
            prop_assert_eq!(rebuilt, rows);
        }

        #[test]
        fn prop_short_lists_are_uncompressed(total in 0u32..=5, page in 1u32..=5) {
            let expected: Vec<PageItem> = (1..=total).map(Page).collect();
            prop_assert_eq!(page_numbers(page, total), expected);
        }

        #[test]
        fn prop_near_start(total in 6u32..500, page in 1u32..=3) {
            prop_assert_eq!(
                page_numbers(page, total),
                vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(total)]
            );
        }

        #[test]
        fn prop_near_end(total in 6u32..500, back in 0u32..=2) {
            let page = total - back;
            prop_assert_eq!(
                page_numbers(page, total),
                vec![Page(1), Ellipsis, Page(total - 3), Page(total - 2), Page(total - 1), Page(total)]
            );
        }
    }
}
