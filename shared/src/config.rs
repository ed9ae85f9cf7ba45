use crate::date::AUTO_PARSE_AFTER;
use crate::error::{Result, SharedError};
use crate::pagination::DEFAULT_PAGE_SIZE;
use anyhow::Context;
use log::info;
use serde::{Deserialize, Serialize};

/// Tiles per row at each responsive breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridColumns {
    pub sm: u8,
    pub md: u8,
    pub lg: u8,
    pub xl: u8,
    #[serde(rename = "2xl")]
    pub xxl: u8,
}

impl Default for GridColumns {
    fn default() -> Self {
        Self { sm: 1, md: 2, lg: 3, xl: 4, xxl: 4 }
    }
}

impl GridColumns {
    /// `(breakpoint, columns)` pairs, smallest first.
    pub fn breakpoints(&self) -> [(&'static str, u8); 5] {
        [
            ("sm", self.sm),
            ("md", self.md),
            ("lg", self.lg),
            ("xl", self.xl),
            ("2xl", self.xxl),
        ]
    }
}

/// Defaults shared by every list page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Rows per page for tables.
    pub default_page_size: u32,
    /// Tiles per page for grids.
    pub grid_page_size: u32,
    pub page_size_options: Vec<u32>,
    /// Date inputs parse typed text once it is longer than this.
    pub date_auto_parse_after: usize,
    pub grid_columns: GridColumns,
    /// Chips shown in a multi-select trigger before collapsing to "+n".
    pub max_visible_chips: usize,
    /// Debounce for search boxes, milliseconds.
    pub search_debounce_ms: u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            grid_page_size: 12,
            page_size_options: vec![10, 20, 50, 100],
            date_auto_parse_after: AUTO_PARSE_AFTER,
            grid_columns: GridColumns::default(),
            max_visible_chips: 2,
            search_debounce_ms: 300,
        }
    }
}

impl ViewConfig {
    pub fn validate(&self) -> Result<()> {
        if self.default_page_size == 0 {
            return Err(SharedError::InvalidPageSize(self.default_page_size));
        }
        if self.grid_page_size == 0 {
            return Err(SharedError::InvalidPageSize(self.grid_page_size));
        }
        if self.page_size_options.is_empty() || self.page_size_options.contains(&0) {
            return Err(SharedError::Configuration(
                "page_size_options must be non-empty and positive".to_string(),
            ));
        }
        let cols = self.grid_columns.breakpoints();
        if cols.iter().any(|(_, n)| *n == 0) {
            return Err(SharedError::Configuration(
                "grid_columns must be at least 1 at every breakpoint".to_string(),
            ));
        }
        Ok(())
    }

    /// Reads a config document; missing keys fall back to defaults.
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let config: ViewConfig =
            serde_json::from_str(raw).context("Failed to parse view configuration")?;
        config.validate().context("Invalid view configuration")?;
        info!(
            "View config loaded: page size {}, grid page size {}",
            config.default_page_size, config.grid_page_size
        );
        Ok(config)
    }

    /// Page-size choices with the default always present, sorted.
    pub fn page_size_choices(&self) -> Vec<u32> {
        let mut choices = self.page_size_options.clone();
        if !choices.contains(&self.default_page_size) {
            choices.push(self.default_page_size);
        }
        choices.sort_unstable();
        choices.dedup();
        choices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_are_valid() {
        let config = ViewConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid_columns.breakpoints()[4], ("2xl", 4));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ViewConfig::from_json(r#"{ "default_page_size": 25, "grid_columns": { "sm": 1, "md": 1, "lg": 2, "xl": 3, "2xl": 6 } }"#).unwrap();
        assert_eq!(config.default_page_size, 25);
        assert_eq!(config.grid_columns.xxl, 6);
        assert_eq!(config.page_size_options, vec![10, 20, 50, 100]);
        assert_eq!(config.page_size_choices(), vec![10, 20, 25, 50, 100]);
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let err = ViewConfig::from_json(r#"{ "default_page_size": 0 }"#).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid page size"));
    }

    #[test]
    fn test_bad_json_is_reported() {
        let err = ViewConfig::from_json("not json").unwrap_err();
        assert!(err.to_string().contains("Failed to parse view configuration"));
    }
}
