//! Checkbox dropdown producing a set of selected filter values.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Gap between the trigger and the dropdown, in CSS pixels.
pub const DROPDOWN_OFFSET: f64 = 4.0;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }
}

/// A bounding box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Where the portal-rendered dropdown is placed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DropdownPosition {
    pub top: f64,
    pub left: f64,
    pub min_width: f64,
}

impl DropdownPosition {
    /// Directly under the trigger, left-aligned and at least as wide.
    pub fn below(trigger: Rect) -> Self {
        Self {
            top: trigger.y + trigger.height + DROPDOWN_OFFSET,
            left: trigger.x,
            min_width: trigger.width,
        }
    }

    pub fn to_style(&self) -> String {
        format!(
            "position: fixed; top: {}px; left: {}px; min-width: {}px;",
            self.top, self.left, self.min_width
        )
    }
}

/// Measures the trigger when the dropdown opens. The browser implementation
/// reads the element's bounding box; tests use fixed rectangles.
pub trait PositioningStrategy {
    fn trigger_bounds(&self) -> Option<Rect>;
}

impl PositioningStrategy for Rect {
    fn trigger_bounds(&self) -> Option<Rect> {
        Some(*self)
    }
}

/// Dropdown state plus the selected values, in the order they were picked.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiSelectState {
    options: Vec<SelectOption>,
    selected: Vec<String>,
    open: bool,
    position: Option<DropdownPosition>,
    query: String,
    max_chips: usize,
}

impl MultiSelectState {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            selected: Vec::new(),
            open: false,
            position: None,
            query: String::new(),
            max_chips: usize::MAX,
        }
    }

    pub fn with_selected<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sync_selected(values);
        self
    }

    pub fn with_max_chips(mut self, max: usize) -> Self {
        self.max_chips = max;
        self
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
    }

    pub fn selected_values(&self) -> &[String] {
        &self.selected
    }

    pub fn selected_set(&self) -> BTreeSet<String> {
        self.selected.iter().cloned().collect()
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.iter().any(|v| v == value)
    }

    /// Replaces the selection from the owner, dropping duplicates.
    pub fn sync_selected<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected.clear();
        for value in values {
            let value = value.into();
            if !self.is_selected(&value) {
                self.selected.push(value);
            }
        }
    }

    /// Adds an unselected value, removes a selected one.
    pub fn toggle_option(&mut self, value: &str) -> &[String] {
        if let Some(idx) = self.selected.iter().position(|v| v == value) {
            self.selected.remove(idx);
        } else {
            self.selected.push(value.to_string());
        }
        debug!("Multi-select now {:?}", self.selected);
        &self.selected
    }

    /// Chip "x" button. Returns false when the value was not selected.
    pub fn remove(&mut self, value: &str) -> bool {
        let before = self.selected.len();
        self.selected.retain(|v| v != value);
        before != self.selected.len()
    }

    pub fn clear_all(&mut self) {
        self.selected.clear();
    }

    pub fn label_for<'a>(&'a self, value: &'a str) -> &'a str {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
            .unwrap_or(value)
    }

    /// Chips to render and how many were collapsed into "+n".
    pub fn chips(&self) -> (Vec<(&str, &str)>, usize) {
        let shown: Vec<(&str, &str)> = self
            .selected
            .iter()
            .take(self.max_chips)
            .map(|v| (v.as_str(), self.label_for(v)))
            .collect();
        let hidden = self.selected.len() - shown.len();
        (shown, hidden)
    }

    /// "n selected" once the chips overflow, `None` while every chip fits.
    pub fn summary(&self) -> Option<String> {
        (self.selected.len() > self.max_chips).then(|| format!("{} selected", self.selected.len()))
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn position(&self) -> Option<DropdownPosition> {
        self.position
    }

    /// Opens the dropdown, measuring the trigger once. The position is not
    /// updated while the dropdown stays open.
    pub fn open(&mut self, strategy: &dyn PositioningStrategy) {
        self.position = strategy.trigger_bounds().map(DropdownPosition::below);
        self.open = true;
        self.query.clear();
    }

    pub fn close(&mut self) {
        self.open = false;
        self.position = None;
    }

    pub fn toggle_open(&mut self, strategy: &dyn PositioningStrategy) {
        if self.open {
            self.close();
        } else {
            self.open(strategy);
        }
    }

    /// Click landed outside both trigger and dropdown.
    pub fn outside_click(&mut self) {
        if self.open {
            self.close();
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Options whose label contains the dropdown's search text.
    pub fn visible_options(&self) -> Vec<&SelectOption> {
        let needle = self.query.trim().to_lowercase();
        self.options
            .iter()
            .filter(|o| needle.is_empty() || o.label.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn positions() -> MultiSelectState {
        MultiSelectState::new(vec![
            SelectOption::new("GK", "Goalkeeper"),
            SelectOption::new("DEF", "Defender"),
            SelectOption::new("MID", "Midfielder"),
            SelectOption::new("FWD", "Forward"),
        ])
    }

    struct Unmounted;

    impl PositioningStrategy for Unmounted {
        fn trigger_bounds(&self) -> Option<Rect> {
            None
        }
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut state = positions();
        assert_eq!(state.toggle_option("MID"), &["MID".to_string()]);
        assert!(state.is_selected("MID"));
        assert!(state.toggle_option("MID").is_empty());
        assert!(!state.is_selected("MID"));
    }

    #[test]
    fn test_remove_chip_and_clear_all() {
        let mut state = positions().with_selected(["GK", "FWD", "GK"]);
        assert_eq!(state.selected_values(), &["GK".to_string(), "FWD".to_string()]);
        assert!(state.remove("GK"));
        assert!(!state.remove("GK"));
        state.clear_all();
        assert!(state.selected_set().is_empty());
    }

    #[test]
    fn test_chips_collapse_after_max() {
        let state = positions().with_selected(["GK", "DEF", "MID"]).with_max_chips(2);
        let (chips, hidden) = state.chips();
        assert_eq!(chips, vec![("GK", "Goalkeeper"), ("DEF", "Defender")]);
        assert_eq!(hidden, 1);
        assert_eq!(state.summary().as_deref(), Some("3 selected"));
        assert_eq!(state.with_max_chips(3).summary(), None);
    }

    #[test]
    fn test_unknown_value_label_falls_back() {
        let state = positions();
        assert_eq!(state.label_for("WB"), "WB");
    }

    #[test]
    fn test_open_measures_trigger_once() {
        let mut state = positions();
        let trigger = Rect { x: 120.0, y: 40.0, width: 200.0, height: 36.0 };
        state.open(&trigger);
        assert!(state.is_open());
        assert_eq!(
            state.position(),
            Some(DropdownPosition { top: 80.0, left: 120.0, min_width: 200.0 })
        );
        state.outside_click();
        assert!(!state.is_open());
        assert_eq!(state.position(), None);
    }

    #[test]
    fn test_open_without_trigger_still_opens() {
        let mut state = positions();
        state.toggle_open(&Unmounted);
        assert!(state.is_open());
        assert_eq!(state.position(), None);
        state.toggle_open(&Unmounted);
        assert!(!state.is_open());
    }

    #[test]
    fn test_option_search() {
        let mut state = positions();
        state.set_query("FIELD");
        let labels: Vec<&str> = state.visible_options().iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Midfielder"]);
    }

    #[test]
    fn test_position_style() {
        let pos = DropdownPosition { top: 10.0, left: 5.5, min_width: 100.0 };
        assert_eq!(pos.to_style(), "position: fixed; top: 10px; left: 5.5px; min-width: 100px;");
    }
}
