//! What a paged listing (table or grid) should show for the current render.

use crate::pagination::{PageItem, PaginationState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewStatus {
    /// Nothing requested yet.
    Idle,
    Loading,
    /// No rows and no active search.
    Empty,
    /// Search is active and filtered everything out.
    EmptySearchResult,
    Populated,
}

impl ViewStatus {
    /// Loading wins over everything, even rows that are already present.
    pub fn derive(loaded: bool, is_loading: bool, matching: usize, search_active: bool) -> Self {
        if is_loading {
            ViewStatus::Loading
        } else if !loaded {
            ViewStatus::Idle
        } else if matching == 0 && search_active {
            ViewStatus::EmptySearchResult
        } else if matching == 0 {
            ViewStatus::Empty
        } else {
            ViewStatus::Populated
        }
    }
}

/// Copy for the empty-state panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyState {
    pub title: String,
    pub description: String,
    /// Label of the optional "Add" affordance.
    pub action_label: Option<String>,
}

impl Default for EmptyState {
    fn default() -> Self {
        Self {
            title: "No data yet".to_string(),
            description: "Nothing has been added here so far.".to_string(),
            action_label: None,
        }
    }
}

impl EmptyState {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            action_label: None,
        }
    }

    pub fn with_action(mut self, label: impl Into<String>) -> Self {
        self.action_label = Some(label.into());
        self
    }

    pub fn no_results_title() -> &'static str {
        "No results found"
    }

    pub fn no_results_description(term: &str) -> String {
        format!("Nothing matches \"{}\". Try a different search.", term.trim())
    }
}

/// Derived render data for one listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingView<'a, R> {
    pub status: ViewStatus,
    /// Rows on the current page.
    pub rows: Vec<&'a R>,
    pub pagination: PaginationState,
    pub search_term: String,
}

impl<'a, R> ListingView<'a, R> {
    pub fn show_pagination(&self) -> bool {
        self.pagination.has_multiple_pages()
    }

    /// Whether the footer renders at all. A page-size selector keeps it on a
    /// single page, where the footer carries only the summary and selector.
    pub fn show_footer(&self, page_size_selector: bool) -> bool {
        self.status == ViewStatus::Populated && (self.show_pagination() || page_size_selector)
    }

    pub fn page_items(&self) -> Vec<PageItem> {
        self.pagination.page_numbers()
    }
}
