//! Date parsing, calendar grids and the date-picker field state.

pub mod calendar;
pub mod input;
pub mod parser;

pub use calendar::{CalendarCell, MonthView, GRID_CELLS, WEEKDAY_LABELS};
pub use input::{DateChange, DateInputState, AUTO_PARSE_AFTER};
pub use parser::{
    format_dashed, format_iso, format_long, format_slashed, month_from_name, parse, parse_date,
    MONTH_NAMES,
};
