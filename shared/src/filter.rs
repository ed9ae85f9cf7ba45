//! Free-text search and multi-select predicate filters.

use crate::row::Row;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// True when any of `keys` holds a value containing `term`, ignoring case.
/// An empty (or whitespace-only) term matches every row.
pub fn matches_search<R: Row + ?Sized, K: AsRef<str>>(
    row: &R,
    term: &str,
    keys: &[K],
) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    keys.iter().any(|key| {
        row.field(key.as_ref())
            .map(|value| value.to_lowercase().contains(&needle))
            .unwrap_or(false)
    })
}

/// Rows matching `term` on any of `keys`, in their original order.
pub fn search_rows<'a, R: Row, K: AsRef<str>>(
    rows: &'a [R],
    term: &str,
    keys: &[K],
) -> Vec<&'a R> {
    rows.iter().filter(|row| matches_search(*row, term, keys)).collect()
}

/// Search term plus named predicate sets, all owned by the hosting page.
///
/// Each predicate set is keyed by the row field it tests. Values inside one
/// set are OR-ed, different sets are AND-ed, and an empty set matches all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search_term: String,
    predicates: BTreeMap<String, BTreeSet<String>>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the term actually changed, meaning the caller
    /// should go back to page 1.
    pub fn set_search_term(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if term == self.search_term {
            return false;
        }
        debug!("Search term changed to {:?}", term);
        self.search_term = term;
        true
    }

    pub fn has_search(&self) -> bool {
        !self.search_term.trim().is_empty()
    }

    pub fn set_predicate<I, S>(&mut self, field: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        if set.is_empty() {
            self.predicates.remove(field);
        } else {
            self.predicates.insert(field.to_string(), set);
        }
    }

    pub fn predicate(&self, field: &str) -> Option<&BTreeSet<String>> {
        self.predicates.get(field)
    }

    /// Active predicate sets, ordered by field name.
    pub fn predicates(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.predicates.iter().map(|(field, values)| (field.as_str(), values))
    }

    pub fn clear_predicate(&mut self, field: &str) {
        self.predicates.remove(field);
    }

    pub fn clear(&mut self) {
        self.search_term.clear();
        self.predicates.clear();
    }

    /// Number of active filters, search included, for the "n filters" chip.
    pub fn active_count(&self) -> usize {
        self.predicates.len() + usize::from(self.has_search())
    }

    pub fn is_active(&self) -> bool {
        self.active_count() > 0
    }

    /// Predicate sets only; search is applied separately.
    pub fn matches_predicates<R: Row + ?Sized>(&self, row: &R) -> bool {
        self.predicates.iter().all(|(field, allowed)| {
            allowed.is_empty()
                || row
                    .field(field)
                    .map(|value| allowed.contains(&value))
                    .unwrap_or(false)
        })
    }

    pub fn matches<R: Row + ?Sized, K: AsRef<str>>(&self, row: &R, search_keys: &[K]) -> bool {
        self.matches_predicates(row) && matches_search(row, &self.search_term, search_keys)
    }

    pub fn apply<'a, R: Row, K: AsRef<str>>(
        &self,
        rows: &'a [R],
        search_keys: &[K],
    ) -> Vec<&'a R> {
        rows.iter().filter(|row| self.matches(*row, search_keys)).collect()
    }
}
