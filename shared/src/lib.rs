pub mod models {
    pub mod file;
    pub mod matches;
    pub mod player;
    pub mod team;
    pub mod user;
}

pub mod dto {
    pub mod common;
    pub mod page;
}

pub mod config;
pub mod date;
pub mod error;
pub mod filter;
pub mod forms;
pub mod grid;
pub mod multi_select;
pub mod pagination;
pub mod row;
pub mod source;
pub mod table;
pub mod view;

// Re-export commonly used items
pub use error::{Result, SharedError};
pub use row::Row;

pub use config::{GridColumns, ViewConfig};
pub use filter::{matches_search, search_rows, FilterState};
pub use forms::{validate_all, FieldKind, FieldSpec};
pub use grid::{GridMsg, GridPageChanged, GridState};
pub use multi_select::{DropdownPosition, MultiSelectState, PositioningStrategy, Rect, SelectOption};
pub use pagination::{
    page_numbers, paginate, total_pages, PageCursor, PageEvent, PageItem, PaginationMode,
    PaginationState, DEFAULT_PAGE_SIZE,
};
pub use source::{InMemorySource, RowSource};
pub use table::{BadgeVariant, CellView, ColumnDescriptor, ColumnSource, TableMsg, TableState};
pub use view::{EmptyState, ListingView, ViewStatus};

// Re-export models
pub use models::{
    file::{format_size, FileEntry},
    matches::{Match, MatchForm},
    player::{Player, PlayerForm},
    team::{Team, TeamForm},
    user::{User, UserForm},
};

// Re-export DTOs
pub use dto::{
    common::{DeleteResponse, ErrorResponse},
    page::{PageQuery, PageResponse},
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_filter_then_table_pages() {
        let rows: Vec<serde_json::Value> = (1..=12)
            .map(|i| {
                let status = if i % 4 == 0 { "injured" } else { "active" };
                json!({ "name": format!("Player {}", i), "status": status })
            })
            .collect();
        let mut filter = FilterState::new();
        filter.set_predicate("status", ["active"]);
        let owned: Vec<serde_json::Value> = filter
            .apply(&rows, &["name"])
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(owned.len(), 9);

        let columns: Vec<ColumnDescriptor<serde_json::Value, String>> = vec![
            ColumnDescriptor::accessor("Name", "name"),
            ColumnDescriptor::badge("Status", "status"),
        ];
        let table = TableState::internal(5).unwrap();
        let view = table.view(Some(&owned), &columns, false);
        assert_eq!(view.rows.len(), 5);
        assert_eq!(view.pagination.total_pages, 2);
        assert_eq!(view.status, ViewStatus::Populated);
    }
}
