use crate::error::Result;
use crate::filter::FilterState;
use crate::pagination::{total_pages, PaginationState};
use serde::{Deserialize, Serialize};

/// One page of rows as returned by a server-paginated endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    /// Some backends omit this; it is then derived from `total`.
    #[serde(rename = "totalPages", default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
}

impl<T> PageResponse<T> {
    pub fn pagination_state(&self) -> Result<PaginationState> {
        let mut state = PaginationState::from_total(self.page, self.page_size, self.total)?;
        if let Some(pages) = self.total_pages {
            state.total_pages = pages;
        }
        Ok(state)
    }

    pub fn derived_total_pages(&self) -> u32 {
        self.total_pages
            .unwrap_or_else(|| total_pages(self.total, self.page_size))
    }
}

/// Query sent for one page: paging, free-text search and predicate filters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: u32,
    pub page_size: u32,
    pub search: Option<String>,
    /// `(field, comma-joined values)`.
    pub filters: Vec<(String, String)>,
}

impl PageQuery {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size, ..Default::default() }
    }

    /// Copies the non-empty search term and predicate sets from `filter`.
    pub fn with_filter(mut self, filter: &FilterState) -> Self {
        let term = filter.search_term.trim();
        self.search = (!term.is_empty()).then(|| term.to_string());
        self.filters = filter
            .predicates()
            .map(|(field, values)| {
                let joined = values.iter().map(String::as_str).collect::<Vec<_>>().join(",");
                (field.to_string(), joined)
            })
            .collect();
        self
    }

    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("page_size".to_string(), self.page_size.to_string()),
        ];
        if let Some(q) = &self.search {
            pairs.push(("q".to_string(), q.clone()));
        }
        pairs.extend(self.filters.iter().cloned());
        pairs
    }

    /// URL-encoded query string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        self.to_pairs()
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
