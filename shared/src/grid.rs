//! State behind the generic grid: client-side paging over tiles.

use crate::config::GridColumns;
use crate::error::Result;
use crate::filter::search_rows;
use crate::pagination::{PageCursor, PageEvent, DEFAULT_PAGE_SIZE};
use crate::row::Row;
use crate::view::{ListingView, ViewStatus};
use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridMsg {
    Search(String),
    ClearSearch,
    GoToPage(u32),
    SetPageSize(u32),
    /// The host changed its filters; start again from page 1.
    ResetPage,
}

/// Sent upward on every page change so the page can react (analytics etc).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPageChanged {
    pub page: u32,
    pub page_size: u32,
}

/// Local state of one grid instance. Grids always page in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    search_term: String,
    search_keys: Vec<String>,
    cursor: PageCursor,
    columns: GridColumns,
}

impl GridState {
    pub fn new(page_size: u32) -> Result<Self> {
        Ok(Self {
            search_term: String::new(),
            search_keys: Vec::new(),
            cursor: PageCursor::new(page_size)?,
            columns: GridColumns::default(),
        })
    }

    /// Like [`GridState::new`], falling back to the default page size.
    pub fn with_page_size(page_size: u32) -> Self {
        Self::new(page_size).unwrap_or_else(|e| {
            warn!("{}; using {}", e, DEFAULT_PAGE_SIZE);
            Self {
                search_term: String::new(),
                search_keys: Vec::new(),
                cursor: PageCursor::default(),
                columns: GridColumns::default(),
            }
        })
    }

    /// Row fields the grid's search box looks at. Without any, search is off.
    pub fn with_search_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_columns(mut self, columns: GridColumns) -> Self {
        self.columns = columns;
        self
    }

    pub fn columns(&self) -> &GridColumns {
        &self.columns
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn page(&self) -> u32 {
        self.cursor.page()
    }

    pub fn search_active(&self) -> bool {
        !self.search_keys.is_empty() && !self.search_term.trim().is_empty()
    }

    pub fn filtered<'a, R: Row>(&self, rows: &'a [R]) -> Vec<&'a R> {
        if self.search_active() {
            search_rows(rows, &self.search_term, self.search_keys.as_slice())
        } else {
            rows.iter().collect()
        }
    }

    pub fn view<'a, R: Row>(&self, rows: Option<&'a [R]>, is_loading: bool) -> ListingView<'a, R> {
        let loaded = rows.is_some();
        let filtered = self.filtered(rows.unwrap_or(&[]));
        let total = filtered.len() as u64;
        let mut cursor = self.cursor;
        cursor.clamp(total);
        let tiles = cursor.slice(filtered.as_slice()).to_vec();
        ListingView {
            status: ViewStatus::derive(loaded, is_loading, tiles.len(), self.search_active()),
            rows: tiles,
            pagination: cursor.state(total),
            search_term: self.search_term.clone(),
        }
    }

    /// `filtered_total` is the tile count after search.
    pub fn update(&mut self, msg: GridMsg, filtered_total: u64) -> Option<GridPageChanged> {
        let event = match msg {
            GridMsg::Search(term) => {
                if term == self.search_term {
                    return None;
                }
                self.search_term = term;
                self.reset_page()
            }
            GridMsg::ClearSearch => {
                self.search_term.clear();
                self.reset_page()
            }
            GridMsg::ResetPage => self.reset_page(),
            GridMsg::GoToPage(page) => self.cursor.go_to(page, filtered_total),
            GridMsg::SetPageSize(size) => match self.cursor.set_page_size(size) {
                Ok(event) => Some(event),
                Err(e) => {
                    warn!("{}", e);
                    None
                }
            },
        }?;
        let page = match event {
            PageEvent::PageChange(page) => page,
            PageEvent::PageSizeChange { page, .. } => page,
        };
        Some(GridPageChanged { page, page_size: self.cursor.page_size() })
    }

    fn reset_page(&mut self) -> Option<PageEvent> {
        if self.cursor.page() == 1 {
            return None;
        }
        self.cursor.reset();
        Some(PageEvent::PageChange(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn teams(n: usize) -> Vec<Value> {
        (1..=n)
            .map(|i| {
                let country = if i % 2 == 0 { "England" } else { "Spain" };
                json!({ "name": format!("Team {}", i), "country": country })
            })
            .collect()
    }

    #[test]
    fn test_grid_pages_in_memory() {
        let rows = teams(23);
        let mut grid = GridState::new(10).unwrap();
        let view = grid.view(Some(&rows), false);
        assert_eq!(view.rows.len(), 10);
        assert_eq!(view.pagination.total_pages, 3);

        assert_eq!(
            grid.update(GridMsg::GoToPage(3), 23),
            Some(GridPageChanged { page: 3, page_size: 10 })
        );
        assert_eq!(grid.view(Some(&rows), false).rows.len(), 3);
        assert_eq!(grid.update(GridMsg::GoToPage(9), 23), None);
    }

    #[test]
    fn test_every_page_change_is_reported() {
        let rows = teams(30);
        let mut grid = GridState::new(10).unwrap().with_search_keys(["name", "country"]);
        grid.update(GridMsg::GoToPage(2), 30);
        assert_eq!(
            grid.update(GridMsg::Search("spain".to_string()), 30),
            Some(GridPageChanged { page: 1, page_size: 10 })
        );
        assert_eq!(grid.view(Some(&rows), false).pagination.total, 15);
        assert_eq!(
            grid.update(GridMsg::SetPageSize(20), 15),
            Some(GridPageChanged { page: 1, page_size: 20 })
        );
    }

    #[test]
    fn test_reset_page_reports_move_to_first_page() {
        let rows = teams(40);
        let mut grid = GridState::new(10).unwrap();
        grid.update(GridMsg::GoToPage(3), 50);
        assert_eq!(
            grid.update(GridMsg::ResetPage, 40),
            Some(GridPageChanged { page: 1, page_size: 10 })
        );
        assert_eq!(grid.view(Some(&rows), false).pagination.page, 1);
        assert_eq!(grid.update(GridMsg::ResetPage, 40), None);
    }

    #[test]
    fn test_search_without_keys_is_disabled() {
        let rows = teams(5);
        let mut grid = GridState::new(10).unwrap();
        grid.update(GridMsg::Search("zzz".to_string()), 5);
        let view = grid.view(Some(&rows), false);
        assert_eq!(view.rows.len(), 5);
        assert_eq!(view.status, ViewStatus::Populated);
    }

    #[test]
    fn test_grid_empty_states() {
        let rows: Vec<Value> = Vec::new();
        let mut grid = GridState::new(12).unwrap().with_search_keys(["name"]);
        assert_eq!(grid.view(Some(&rows), false).status, ViewStatus::Empty);
        grid.update(GridMsg::Search("xyz".to_string()), 0);
        assert_eq!(grid.view(Some(&rows), false).status, ViewStatus::EmptySearchResult);
        grid.update(GridMsg::ClearSearch, 0);
        assert_eq!(grid.view(Some(&rows), false).status, ViewStatus::Empty);
        assert_eq!(grid.view(Some(&rows), true).status, ViewStatus::Loading);
    }

    #[test]
    fn test_zero_page_size_falls_back() {
        let rows = teams(15);
        let grid = GridState::with_page_size(0);
        assert_eq!(grid.view(Some(&rows), false).pagination.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_default_columns() {
        let grid = GridState::new(12).unwrap();
        assert_eq!(grid.columns(), &GridColumns::default());
    }
}
