//! Column descriptors, status badges and the state behind the generic table.

use crate::error::Result;
use crate::filter::search_rows;
use crate::pagination::{
    PageCursor, PageEvent, PaginationMode, PaginationState, DEFAULT_PAGE_SIZE,
};
use crate::row::Row;
use crate::view::{ListingView, ViewStatus};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Visual style of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
    Outline,
}

impl BadgeVariant {
    pub fn for_status(status: &str) -> Self {
        match status.trim().to_lowercase().as_str() {
            "active" | "completed" | "approved" | "verified" => BadgeVariant::Default,
            "inactive" | "pending" | "draft" => BadgeVariant::Secondary,
            "injured" | "rejected" | "cancelled" | "banned" => BadgeVariant::Destructive,
            "warning" | "attention" => BadgeVariant::Outline,
            _ => BadgeVariant::Outline,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "default",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Outline => "outline",
        }
    }
}

/// Where a column's displayed value comes from. Exactly one source per
/// column; `badge` only exists for accessor columns.
pub enum ColumnSource<R, O> {
    Accessor { key: String, badge: bool },
    Cell(Rc<dyn Fn(&R) -> O>),
}

/// How to label and render one table column. `O` is whatever the UI layer
/// renders custom cells into.
pub struct ColumnDescriptor<R, O> {
    pub header: String,
    pub source: ColumnSource<R, O>,
}

/// Resolved content of one cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellView<O> {
    Custom(O),
    Text(String),
    Badge { label: String, variant: BadgeVariant },
    Blank,
}

impl<R, O> ColumnDescriptor<R, O> {
    pub fn accessor(header: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            source: ColumnSource::Accessor { key: key.into(), badge: false },
        }
    }

    pub fn badge(header: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            source: ColumnSource::Accessor { key: key.into(), badge: true },
        }
    }

    pub fn cell(header: impl Into<String>, render: impl Fn(&R) -> O + 'static) -> Self {
        Self {
            header: header.into(),
            source: ColumnSource::Cell(Rc::new(render)),
        }
    }

    pub fn accessor_key(&self) -> Option<&str> {
        match &self.source {
            ColumnSource::Accessor { key, .. } => Some(key.as_str()),
            ColumnSource::Cell(_) => None,
        }
    }
}

impl<R: Row, O> ColumnDescriptor<R, O> {
    pub fn resolve(&self, row: &R) -> CellView<O> {
        match &self.source {
            ColumnSource::Cell(render) => CellView::Custom(render(row)),
            ColumnSource::Accessor { key, badge } => match row.field(key) {
                Some(value) if *badge => CellView::Badge {
                    variant: BadgeVariant::for_status(&value),
                    label: value,
                },
                Some(value) => CellView::Text(value),
                None => CellView::Blank,
            },
        }
    }
}

impl<R, O> Clone for ColumnDescriptor<R, O> {
    fn clone(&self) -> Self {
        let source = match &self.source {
            ColumnSource::Accessor { key, badge } => ColumnSource::Accessor {
                key: key.clone(),
                badge: *badge,
            },
            ColumnSource::Cell(render) => ColumnSource::Cell(Rc::clone(render)),
        };
        Self { header: self.header.clone(), source }
    }
}

impl<R, O> PartialEq for ColumnDescriptor<R, O> {
    fn eq(&self, other: &Self) -> bool {
        self.header == other.header
            && match (&self.source, &other.source) {
                (
                    ColumnSource::Accessor { key: a, badge: x },
                    ColumnSource::Accessor { key: b, badge: y },
                ) => a == b && x == y,
                (ColumnSource::Cell(a), ColumnSource::Cell(b)) => Rc::ptr_eq(a, b),
                _ => false,
            }
    }
}

impl<R, O> fmt::Debug for ColumnDescriptor<R, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("ColumnDescriptor");
        out.field("header", &self.header);
        match &self.source {
            ColumnSource::Accessor { key, badge } => {
                out.field("accessor", key).field("badge", badge)
            }
            ColumnSource::Cell(_) => out.field("cell", &"<fn>"),
        };
        out.finish()
    }
}

/// Keys of the accessor columns; these are what search looks at.
pub fn search_keys<R, O>(columns: &[ColumnDescriptor<R, O>]) -> Vec<&str> {
    columns.iter().filter_map(|c| c.accessor_key()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableMsg {
    Search(String),
    ClearSearch,
    GoToPage(u32),
    SetPageSize(u32),
    /// The host changed its filters; start again from page 1.
    ResetPage,
}

/// Local state of one table instance. Rows, columns and the loading flag
/// belong to the hosting page and are passed in when rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    search_term: String,
    mode: PaginationMode,
}

impl TableState {
    pub fn internal(page_size: u32) -> Result<Self> {
        Ok(Self {
            search_term: String::new(),
            mode: PaginationMode::internal(page_size)?,
        })
    }

    /// External when the caller supplies pagination state, internal
    /// otherwise. A zero page size falls back to the default.
    pub fn new(external: Option<PaginationState>, page_size: u32) -> Self {
        if let Some(state) = external {
            return Self::external(state);
        }
        Self::internal(page_size).unwrap_or_else(|e| {
            warn!("{}; using {}", e, DEFAULT_PAGE_SIZE);
            Self {
                search_term: String::new(),
                mode: PaginationMode::Internal(PageCursor::default()),
            }
        })
    }

    pub fn external(state: PaginationState) -> Self {
        Self {
            search_term: String::new(),
            mode: PaginationMode::External(state),
        }
    }

    pub fn mode(&self) -> &PaginationMode {
        &self.mode
    }

    pub fn is_external(&self) -> bool {
        self.mode.is_external()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Local search only runs when the table slices its own rows.
    pub fn search_active(&self) -> bool {
        !self.is_external() && !self.search_term.trim().is_empty()
    }

    /// Takes the caller's latest pagination. A table first built without it
    /// turns external from here on.
    pub fn sync_external(&mut self, state: PaginationState) {
        self.mode.sync_external(state);
    }

    pub fn filtered<'a, R: Row, O>(
        &self,
        rows: &'a [R],
        columns: &[ColumnDescriptor<R, O>],
    ) -> Vec<&'a R> {
        if self.search_active() {
            search_rows(rows, &self.search_term, search_keys(columns).as_slice())
        } else {
            rows.iter().collect()
        }
    }

    /// `rows` is `None` until the page has data for the first time.
    pub fn view<'a, R: Row, O>(
        &self,
        rows: Option<&'a [R]>,
        columns: &[ColumnDescriptor<R, O>],
        is_loading: bool,
    ) -> ListingView<'a, R> {
        let loaded = rows.is_some();
        let filtered = self.filtered(rows.unwrap_or(&[]), columns);
        let total = filtered.len() as u64;

        let (page_rows, pagination) = match &self.mode {
            PaginationMode::Internal(cursor) => {
                let mut cursor = *cursor;
                cursor.clamp(total);
                (cursor.slice(&filtered).to_vec(), cursor.state(total))
            }
            PaginationMode::External(state) => (filtered, *state),
        };

        ListingView {
            status: ViewStatus::derive(loaded, is_loading, page_rows.len(), self.search_active()),
            rows: page_rows,
            pagination,
            search_term: self.search_term.clone(),
        }
    }

    /// Applies a user action. Returns the notification for the page, if any.
    /// `filtered_total` is the row count after search (internal mode).
    pub fn update(&mut self, msg: TableMsg, filtered_total: u64) -> Option<PageEvent> {
        match msg {
            TableMsg::Search(term) => {
                if term != self.search_term {
                    self.search_term = term;
                    self.mode.reset();
                    debug!("Table search set to {:?}", self.search_term);
                }
                None
            }
            TableMsg::ClearSearch => {
                self.search_term.clear();
                self.mode.reset();
                None
            }
            TableMsg::ResetPage => {
                self.mode.reset();
                None
            }
            TableMsg::GoToPage(page) => self.mode.go_to(page, filtered_total),
            TableMsg::SetPageSize(size) => match self.mode.set_page_size(size) {
                Ok(event) => Some(event),
                Err(e) => {
                    warn!("{}", e);
                    None
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::PageItem;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::{json, Value};

    type Column = ColumnDescriptor<Value, String>;

    fn columns() -> Vec<Column> {
        vec![
            Column::accessor("Name", "name"),
            Column::badge("Status", "status"),
            Column::cell("Label", |row: &Value| format!("#{}", row["id"])),
        ]
    }

    fn players(n: usize) -> Vec<Value> {
        (1..=n)
            .map(|i| json!({ "id": i, "name": format!("Player {:02}", i), "status": "active" }))
            .collect()
    }

    #[rstest]
    #[case("Active", BadgeVariant::Default)]
    #[case("completed", BadgeVariant::Default)]
    #[case("APPROVED", BadgeVariant::Default)]
    #[case("verified", BadgeVariant::Default)]
    #[case("inactive", BadgeVariant::Secondary)]
    #[case("Pending", BadgeVariant::Secondary)]
    #[case("draft", BadgeVariant::Secondary)]
    #[case("injured", BadgeVariant::Destructive)]
    #[case("rejected", BadgeVariant::Destructive)]
    #[case("Cancelled", BadgeVariant::Destructive)]
    #[case("banned", BadgeVariant::Destructive)]
    #[case("warning", BadgeVariant::Outline)]
    #[case("attention", BadgeVariant::Outline)]
    #[case("on loan", BadgeVariant::Outline)]
    fn test_badge_mapping(#[case] status: &str, #[case] expected: BadgeVariant) {
        assert_eq!(BadgeVariant::for_status(status), expected);
    }

    #[test]
    fn test_cell_resolution() {
        let cols = columns();
        let row = json!({ "id": 9, "name": "Ødegaard", "status": "injured" });
        assert_eq!(cols[0].resolve(&row), CellView::Text("Ødegaard".to_string()));
        assert_eq!(
            cols[1].resolve(&row),
            CellView::Badge { label: "injured".to_string(), variant: BadgeVariant::Destructive }
        );
        assert_eq!(cols[2].resolve(&row), CellView::Custom("#9".to_string()));

        let bare = json!({ "id": 1 });
        assert_eq!(cols[0].resolve(&bare), CellView::Blank);
    }

    #[test]
    fn test_search_keys_skip_custom_cells() {
        assert_eq!(search_keys(&columns()), vec!["name", "status"]);
    }

    #[test]
    fn test_column_equality() {
        let cols = columns();
        assert_eq!(cols.clone(), cols);
        assert_ne!(cols[2], Column::cell("Label", |_: &Value| String::new()));
    }

    #[test]
    fn test_internal_paging_scenario() {
        let rows = players(23);
        let cols = columns();
        let mut table = TableState::internal(10).unwrap();

        let view = table.view(Some(&rows), &cols, false);
        assert_eq!(view.status, ViewStatus::Populated);
        assert_eq!(view.rows.len(), 10);
        assert_eq!(view.pagination.total_pages, 3);
        assert!(view.show_pagination());

        assert_eq!(table.update(TableMsg::GoToPage(3), 23), Some(PageEvent::PageChange(3)));
        let view = table.view(Some(&rows), &cols, false);
        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.rows[0]["name"], "Player 21");

        assert_eq!(table.update(TableMsg::GoToPage(4), 23), None);
        assert_eq!(table.update(TableMsg::GoToPage(0), 23), None);
    }

    #[test]
    fn test_search_resets_to_first_page() {
        let rows = players(23);
        let cols = columns();
        let mut table = TableState::internal(10).unwrap();
        table.update(TableMsg::GoToPage(2), 23);

        table.update(TableMsg::Search("player 2".to_string()), 23);
        let view = table.view(Some(&rows), &cols, false);
        assert_eq!(view.pagination.page, 1);
        // "Player 20" through "Player 23"
        assert_eq!(view.pagination.total, 4);
        assert!(!view.show_pagination());
    }

    #[test]
    fn test_loading_wins_over_rows() {
        let rows = players(4);
        let table = TableState::internal(10).unwrap();
        let view = table.view(Some(&rows), &columns(), true);
        assert_eq!(view.status, ViewStatus::Loading);
    }

    #[test]
    fn test_idle_before_first_load() {
        let table = TableState::internal(10).unwrap();
        let rows: Option<&[Value]> = None;
        let view = table.view(rows, &columns(), false);
        assert_eq!(view.status, ViewStatus::Idle);
    }

    #[test]
    fn test_empty_vs_no_results_with_clear() {
        let rows: Vec<Value> = Vec::new();
        let cols = columns();
        let mut table = TableState::internal(10).unwrap();
        assert_eq!(table.view(Some(&rows), &cols, false).status, ViewStatus::Empty);

        table.update(TableMsg::Search("xyz".to_string()), 0);
        assert_eq!(
            table.view(Some(&rows), &cols, false).status,
            ViewStatus::EmptySearchResult
        );

        table.update(TableMsg::ClearSearch, 0);
        assert_eq!(table.view(Some(&rows), &cols, false).status, ViewStatus::Empty);
        assert_eq!(table.search_term(), "");
    }

    #[test]
    fn test_no_results_over_existing_rows() {
        let rows = players(3);
        let cols = columns();
        let mut table = TableState::internal(10).unwrap();
        table.update(TableMsg::Search("xyz".to_string()), 3);
        let view = table.view(Some(&rows), &cols, false);
        assert_eq!(view.status, ViewStatus::EmptySearchResult);
        assert!(view.rows.is_empty());
    }

    #[test]
    fn test_external_mode_does_not_slice_or_search() {
        let rows = players(25);
        let cols = columns();
        let state = PaginationState { page: 5, page_size: 25, total: 260, total_pages: 11 };
        let mut table = TableState::external(state);

        table.update(TableMsg::Search("nobody".to_string()), 0);
        let view = table.view(Some(&rows), &cols, false);
        assert_eq!(view.rows.len(), 25);
        assert_eq!(view.status, ViewStatus::Populated);
        assert_eq!(
            view.page_items(),
            vec![
                PageItem::Page(1),
                PageItem::Ellipsis,
                PageItem::Page(4),
                PageItem::Page(5),
                PageItem::Page(6),
                PageItem::Ellipsis,
                PageItem::Page(11),
            ]
        );

        assert_eq!(table.update(TableMsg::GoToPage(4), 0), Some(PageEvent::PageChange(4)));
        assert_eq!(table.update(TableMsg::GoToPage(5), 0), None);
        assert_eq!(
            table.update(TableMsg::SetPageSize(50), 0),
            Some(PageEvent::PageSizeChange { page_size: 50, page: 1 })
        );
        assert_eq!(table.update(TableMsg::SetPageSize(0), 0), None);
    }

    #[test]
    fn test_external_empty_page_is_plain_empty() {
        let rows: Vec<Value> = Vec::new();
        let state = PaginationState { page: 1, page_size: 25, total: 0, total_pages: 0 };
        let mut table = TableState::external(state);
        table.update(TableMsg::Search("xyz".to_string()), 0);
        assert_eq!(table.view(Some(&rows), &columns(), false).status, ViewStatus::Empty);
    }

    #[test]
    fn test_view_clamps_page_after_rows_shrink() {
        let cols = columns();
        let mut table = TableState::internal(10).unwrap();
        table.update(TableMsg::GoToPage(3), 23);
        let fewer = players(12);
        let view = table.view(Some(&fewer), &cols, false);
        assert_eq!(view.pagination.page, 2);
        assert_eq!(view.rows.len(), 2);
    }

    #[test]
    fn test_server_state_arriving_after_first_render() {
        let cols = columns();
        let mut table = TableState::new(None, 10);
        let loading: Option<&[Value]> = None;
        assert_eq!(table.view(loading, &cols, true).status, ViewStatus::Loading);

        let server = PaginationState { page: 1, page_size: 10, total: 240, total_pages: 24 };
        table.sync_external(server);
        let rows = players(10);
        let view = table.view(Some(&rows), &cols, false);
        assert!(table.is_external());
        assert_eq!(view.pagination.total_pages, 24);
        assert!(view.show_pagination());
        assert_eq!(table.update(TableMsg::GoToPage(2), 10), Some(PageEvent::PageChange(2)));
    }

    #[test]
    fn test_reset_page_after_host_filter_change() {
        let cols = columns();
        let mut table = TableState::internal(10).unwrap();
        assert_eq!(table.update(TableMsg::GoToPage(3), 50), Some(PageEvent::PageChange(3)));

        assert_eq!(table.update(TableMsg::ResetPage, 40), None);
        let filtered = players(40);
        let view = table.view(Some(&filtered), &cols, false);
        assert_eq!(view.pagination.page, 1);
        assert_eq!(view.rows[0]["name"], "Player 01");
    }

    #[test]
    fn test_reset_page_leaves_external_state_alone() {
        let state = PaginationState { page: 3, page_size: 10, total: 50, total_pages: 5 };
        let mut table = TableState::external(state);
        assert_eq!(table.update(TableMsg::ResetPage, 0), None);
        assert_eq!(table.mode().state(0), state);
    }

    #[test]
    fn test_new_picks_mode_and_falls_back() {
        let state = PaginationState { page: 2, page_size: 25, total: 60, total_pages: 3 };
        assert!(TableState::new(Some(state), 10).is_external());
        let table = TableState::new(None, 0);
        assert!(!table.is_external());
        assert_eq!(table.mode().state(30).page_size, DEFAULT_PAGE_SIZE);
    }
}
