use super::calendar::{CalendarCell, MonthView};
use super::parser::{format_iso, format_slashed, parse_date};
use chrono::NaiveDate;
use log::debug;

/// Default minimum length before typed text is parsed on the fly.
pub const AUTO_PARSE_AFTER: usize = 6;

/// Value change reported to the owner of a date field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateChange {
    /// Canonical `YYYY-MM-DD`.
    Selected(String),
    Cleared,
}

/// State behind a date picker: the visible text, the last valid value and
/// the month the calendar popover shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateInputState {
    text: String,
    value: Option<NaiveDate>,
    view: MonthView,
    open: bool,
    auto_parse_after: usize,
}

impl DateInputState {
    /// `initial` is parsed leniently; an unparsable value starts empty.
    pub fn new(initial: Option<&str>, today: NaiveDate) -> Self {
        let value = initial.and_then(parse_date);
        Self {
            text: value.map(format_slashed).unwrap_or_default(),
            value,
            view: MonthView::containing(value.unwrap_or(today)),
            open: false,
            auto_parse_after: AUTO_PARSE_AFTER,
        }
    }

    pub fn with_auto_parse_after(mut self, chars: usize) -> Self {
        self.auto_parse_after = chars;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> Option<NaiveDate> {
        self.value
    }

    /// Canonical form of the current value.
    pub fn iso_value(&self) -> Option<String> {
        self.value.map(format_iso)
    }

    pub fn view(&self) -> MonthView {
        self.view
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    /// Keystroke in the text box. Once the text is long enough it is parsed
    /// on every change and a valid date is committed straight away.
    pub fn input(&mut self, text: &str) -> Option<DateChange> {
        self.text = text.to_string();
        if self.text.chars().count() <= self.auto_parse_after {
            return None;
        }
        let date = parse_date(&self.text)?;
        self.view = MonthView::containing(date);
        if self.value == Some(date) {
            return None;
        }
        self.value = Some(date);
        Some(DateChange::Selected(format_iso(date)))
    }

    /// Enter pressed. Unparsable text falls back to the last valid value.
    pub fn submit(&mut self) -> Option<DateChange> {
        match parse_date(&self.text) {
            Some(date) => {
                let changed = self.value != Some(date);
                self.commit(date);
                changed.then(|| DateChange::Selected(format_iso(date)))
            }
            None => {
                debug!("Reverting unparsable date input {:?}", self.text);
                self.text = self.value.map(format_slashed).unwrap_or_default();
                None
            }
        }
    }

    /// Click on a calendar cell; padding days move the view to their month.
    pub fn select(&mut self, date: NaiveDate) -> DateChange {
        self.commit(date);
        self.open = false;
        DateChange::Selected(format_iso(date))
    }

    pub fn clear(&mut self) -> DateChange {
        self.text.clear();
        self.value = None;
        self.open = false;
        DateChange::Cleared
    }

    /// Takes a new value from the owner without emitting a change.
    pub fn sync(&mut self, value: Option<&str>) {
        let parsed = value.and_then(parse_date);
        if parsed == self.value {
            return;
        }
        self.value = parsed;
        self.text = parsed.map(format_slashed).unwrap_or_default();
        if let Some(date) = parsed {
            self.view = MonthView::containing(date);
        }
    }

    pub fn previous_month(&mut self) {
        self.view = self.view.previous();
    }

    pub fn next_month(&mut self) {
        self.view = self.view.next();
    }

    pub fn cells(&self, today: NaiveDate) -> Vec<CalendarCell> {
        self.view.cells(self.value, today)
    }

    fn commit(&mut self, date: NaiveDate) {
        self.value = Some(date);
        self.text = format_slashed(date);
        self.view = MonthView::containing(date);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    #[test]
    fn test_new_with_initial_value() {
        let state = DateInputState::new(Some("2023-11-02"), today());
        assert_eq!(state.text(), "11/02/2023");
        assert_eq!(state.view(), MonthView { year: 2023, month: 11 });

        let empty = DateInputState::new(Some("garbage"), today());
        assert_eq!(empty.value(), None);
        assert_eq!(empty.view(), MonthView { year: 2024, month: 5 });
    }

    #[test]
    fn test_short_input_is_not_parsed() {
        let mut state = DateInputState::new(None, today());
        assert_eq!(state.input("1/2/24"), None);
        assert_eq!(state.value(), None);
        assert_eq!(state.text(), "1/2/24");
    }

    #[test]
    fn test_auto_parse_syncs_calendar() {
        let mut state = DateInputState::new(None, today());
        assert_eq!(state.input("8/15/202"), None);
        assert_eq!(
            state.input("8/15/2021"),
            Some(DateChange::Selected("2021-08-15".to_string()))
        );
        assert_eq!(state.view(), MonthView { year: 2021, month: 8 });
        // typed text is left alone while the user is still typing
        assert_eq!(state.text(), "8/15/2021");
        assert_eq!(state.input("8/15/2021 "), None);
    }

    #[test]
    fn test_submit_reverts_invalid_text() {
        let mut state = DateInputState::new(Some("2024-01-10"), today());
        state.input("02/30/2023");
        assert_eq!(state.submit(), None);
        assert_eq!(state.text(), "01/10/2024");
        assert_eq!(state.iso_value(), Some("2024-01-10".to_string()));
    }

    #[test]
    fn test_submit_without_previous_value_empties() {
        let mut state = DateInputState::new(None, today());
        state.input("not a date");
        assert_eq!(state.submit(), None);
        assert_eq!(state.text(), "");
    }

    #[test]
    fn test_submit_normalizes_text() {
        let mut state = DateInputState::new(None, today());
        state.input("Dec 5, 2022");
        assert_eq!(state.submit(), None);
        assert_eq!(state.text(), "12/05/2022");

        let mut fresh = DateInputState::new(None, today());
        fresh.text = "2022-12-05".to_string();
        assert_eq!(fresh.submit(), Some(DateChange::Selected("2022-12-05".to_string())));
    }

    #[test]
    fn test_select_and_clear() {
        let mut state = DateInputState::new(None, today());
        state.open();
        let padding_day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(state.select(padding_day), DateChange::Selected("2024-06-01".to_string()));
        assert!(!state.is_open());
        assert_eq!(state.view(), MonthView { year: 2024, month: 6 });

        assert_eq!(state.clear(), DateChange::Cleared);
        assert_eq!(state.value(), None);
        assert_eq!(state.text(), "");
    }

    #[test]
    fn test_sync_from_owner() {
        let mut state = DateInputState::new(None, today());
        state.sync(Some("2020-02-29"));
        assert_eq!(state.text(), "02/29/2020");
        state.sync(None);
        assert_eq!(state.text(), "");
    }

    #[test]
    fn test_month_navigation() {
        let mut state = DateInputState::new(Some("2024-12-31"), today());
        state.next_month();
        assert_eq!(state.view(), MonthView { year: 2025, month: 1 });
        state.previous_month();
        state.previous_month();
        assert_eq!(state.view().label(), "November 2024");
        assert_eq!(state.cells(today()).len(), 42);
    }
}
