//! Field descriptors behind the labelled input, select, date and textarea
//! primitives used by the edit dialogs.

use crate::date::{format_iso, parse_date};
use crate::error::{Result, SharedError};
use crate::multi_select::SelectOption;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    TextArea { rows: u32 },
    Select(Vec<SelectOption>),
    Date,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub max_length: Option<usize>,
    pub placeholder: Option<String>,
}

impl FieldSpec {
    fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required: false,
            max_length: None,
            placeholder: None,
        }
    }

    pub fn text(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn textarea(name: &str, label: &str, rows: u32) -> Self {
        Self::new(name, label, FieldKind::TextArea { rows })
    }

    pub fn select(name: &str, label: &str, options: Vec<SelectOption>) -> Self {
        Self::new(name, label, FieldKind::Select(options))
    }

    pub fn date(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn placeholder(mut self, text: &str) -> Self {
        self.placeholder = Some(text.to_string());
        self
    }

    /// Label text with the required marker.
    pub fn display_label(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.clone()
        }
    }

    /// Checks one submitted value. Blank optional fields give `Ok(None)`;
    /// dates come back in ISO form.
    pub fn validate(&self, value: &str) -> Result<Option<String>> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return if self.required {
                Err(SharedError::MissingField(self.name.clone()))
            } else {
                Ok(None)
            };
        }

        if let Some(max) = self.max_length {
            if trimmed.chars().count() > max {
                return Err(SharedError::TooLong { field: self.name.clone(), max });
            }
        }

        match &self.kind {
            FieldKind::Text | FieldKind::TextArea { .. } => Ok(Some(trimmed.to_string())),
            FieldKind::Select(options) => {
                if options.iter().any(|o| o.value == trimmed) {
                    Ok(Some(trimmed.to_string()))
                } else {
                    Err(SharedError::UnknownOption {
                        field: self.name.clone(),
                        value: trimmed.to_string(),
                    })
                }
            }
            FieldKind::Date => parse_date(trimmed)
                .map(|d| Some(format_iso(d)))
                .ok_or_else(|| SharedError::InvalidDate {
                    field: self.name.clone(),
                    value: trimmed.to_string(),
                }),
        }
    }
}

/// Validates every field; the map holds only the failures, keyed by field name.
pub fn validate_all(
    fields: &[FieldSpec],
    values: &BTreeMap<String, String>,
) -> std::result::Result<BTreeMap<String, String>, BTreeMap<String, SharedError>> {
    let mut cleaned = BTreeMap::new();
    let mut errors = BTreeMap::new();
    for field in fields {
        let raw = values.get(&field.name).map(String::as_str).unwrap_or("");
        match field.validate(raw) {
            Ok(Some(value)) => {
                cleaned.insert(field.name.clone(), value);
            }
            Ok(None) => {}
            Err(e) => {
                errors.insert(field.name.clone(), e);
            }
        }
    }
    if errors.is_empty() {
        Ok(cleaned)
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn foot() -> FieldSpec {
        FieldSpec::select(
            "foot",
            "Preferred foot",
            vec![SelectOption::new("L", "Left"), SelectOption::new("R", "Right")],
        )
    }

    #[test_case("  Ada  ", Ok(Some("Ada".to_string())) ; "trims")]
    #[test_case("", Err(SharedError::MissingField("name".to_string())) ; "required")]
    #[test_case("abcdefghijk", Err(SharedError::TooLong { field: "name".to_string(), max: 10 }) ; "too long")]
    fn test_required_text(input: &str, expected: Result<Option<String>>) {
        let field = FieldSpec::text("name", "Name").required().max_length(10);
        assert_eq!(field.validate(input), expected);
    }

    #[test]
    fn test_optional_blank_is_none() {
        assert_eq!(FieldSpec::textarea("notes", "Notes", 4).validate("   "), Ok(None));
    }

    #[test]
    fn test_select_checks_options() {
        assert_eq!(foot().validate("R"), Ok(Some("R".to_string())));
        assert_eq!(
            foot().validate("X"),
            Err(SharedError::UnknownOption { field: "foot".to_string(), value: "X".to_string() })
        );
    }

    #[test]
    fn test_date_normalizes_to_iso() {
        let field = FieldSpec::date("dob", "Date of birth");
        assert_eq!(field.validate("March 5, 2001"), Ok(Some("2001-03-05".to_string())));
        assert!(matches!(field.validate("02/30/2023"), Err(SharedError::InvalidDate { .. })));
    }

    #[test]
    fn test_validate_all_collects_failures() {
        let fields = vec![FieldSpec::text("name", "Name").required(), foot(), FieldSpec::date("dob", "DOB")];
        let mut values = BTreeMap::new();
        values.insert("foot".to_string(), "L".to_string());
        values.insert("dob".to_string(), "1999-12-31".to_string());

        let errors = validate_all(&fields, &values).unwrap_err();
        assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["name"]);

        values.insert("name".to_string(), "Ada".to_string());
        let cleaned = validate_all(&fields, &values).unwrap();
        assert_eq!(cleaned.get("dob").map(String::as_str), Some("1999-12-31"));
    }

    #[test]
    fn test_display_label_marks_required() {
        assert_eq!(FieldSpec::text("name", "Name").required().display_label(), "Name *");
        assert_eq!(foot().display_label(), "Preferred foot");
    }
}
