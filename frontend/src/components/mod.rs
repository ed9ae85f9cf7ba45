pub mod badge;
pub mod data_table;
pub mod date_picker;
pub mod empty_state;
pub mod footer;
pub mod form_dialog;
pub mod form_fields;
pub mod grid_view;
pub mod multi_select;
pub mod nav;
pub mod page_shell;
pub mod pagination_bar;
