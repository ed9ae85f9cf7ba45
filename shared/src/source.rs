//! Where a listing's rows come from.

use crate::dto::page::{PageQuery, PageResponse};
use crate::error::{Result, SharedError};
use crate::filter::FilterState;
use crate::pagination::paginate;
use crate::row::Row;
use async_trait::async_trait;
use log::debug;

/// A paged row provider. The browser client implements it over HTTP; tests
/// and fixtures use [`InMemorySource`].
#[async_trait(?Send)]
pub trait RowSource<R> {
    async fn fetch_page(&self, query: &PageQuery) -> Result<PageResponse<R>>;
}

/// Serves pages from a vector, applying search and predicate filters the way
/// a backend would.
#[derive(Debug, Clone)]
pub struct InMemorySource<R> {
    rows: Vec<R>,
    search_keys: Vec<String>,
}

impl<R: Row + Clone> InMemorySource<R> {
    pub fn new(rows: Vec<R>) -> Self {
        Self { rows, search_keys: Vec::new() }
    }

    pub fn with_search_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    fn filter_for(query: &PageQuery) -> FilterState {
        let mut filter = FilterState::new();
        if let Some(term) = &query.search {
            filter.set_search_term(term.clone());
        }
        for (field, joined) in &query.filters {
            filter.set_predicate(field, joined.split(',').filter(|v| !v.is_empty()));
        }
        filter
    }
}

#[async_trait(?Send)]
impl<R: Row + Clone> RowSource<R> for InMemorySource<R> {
    async fn fetch_page(&self, query: &PageQuery) -> Result<PageResponse<R>> {
        if query.page_size == 0 {
            return Err(SharedError::InvalidPageSize(query.page_size));
        }
        let filter = Self::filter_for(query);
        let matching = filter.apply(&self.rows, self.search_keys.as_slice());
        let total = matching.len() as u64;
        let items: Vec<R> = paginate(&matching, query.page, query.page_size)
            .iter()
            .map(|r| (*r).clone())
            .collect();
        debug!(
            "In-memory page {} of size {}: {} of {} rows",
            query.page,
            query.page_size,
            items.len(),
            total
        );
        Ok(PageResponse {
            items,
            total,
            page: query.page,
            page_size: query.page_size,
            total_pages: None,
        })
    }
}
