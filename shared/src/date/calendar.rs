use super::parser::MONTH_NAMES;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Six full weeks, so the grid never changes height between months.
pub const GRID_CELLS: usize = 42;

pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// A displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthView {
    pub year: i32,
    /// 1-12
    pub month: u32,
}

impl MonthView {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn days_in_month(&self) -> u32 {
        let next = self.next().first_day();
        (next - self.first_day()).num_days() as u32
    }

    /// "March 2024"
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }

    /// The 42 dates shown for this month: tail of the previous month up to
    /// the first Sunday, every day of the month, then the head of the next.
    pub fn grid_dates(&self) -> Vec<NaiveDate> {
        let first = self.first_day();
        let leading = first.weekday().num_days_from_sunday() as i64;
        let start = first - Duration::days(leading);
        (0..GRID_CELLS as i64)
            .map(|offset| start + Duration::days(offset))
            .collect()
    }

    pub fn cells(&self, selected: Option<NaiveDate>, today: NaiveDate) -> Vec<CalendarCell> {
        self.grid_dates()
            .into_iter()
            .map(|date| CalendarCell {
                date,
                in_month: date.year() == self.year && date.month() == self.month,
                is_today: date == today,
                is_selected: selected == Some(date),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// False for padding days borrowed from the neighbouring months.
    pub in_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
}

impl CalendarCell {
    pub fn day(&self) -> u32 {
        self.date.day()
    }
}
