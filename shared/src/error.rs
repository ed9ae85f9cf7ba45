use thiserror::Error;
use validator::ValidationErrors;
use serde_json::Error as JsonError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
pub enum SharedError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Invalid page size: {0} (must be greater than zero)")]
    InvalidPageSize(u32),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Row source error: {0}")]
    RowSource(String),

    #[error("Required field missing: {0}")]
    MissingField(String),

    #[error("Field {field} exceeds {max} characters")]
    TooLong { field: String, max: usize },

    #[error("Field {field} has no option {value:?}")]
    UnknownOption { field: String, value: String },

    #[error("Field {field} is not a valid date: {value:?}")]
    InvalidDate { field: String, value: String },
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_error_becomes_conversion() {
        let err: SharedError = serde_json::from_str::<serde_json::Value>("{ nope")
            .unwrap_err()
            .into();
        assert!(matches!(err, SharedError::Conversion(_)));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            SharedError::InvalidPageSize(0).to_string(),
            "Invalid page size: 0 (must be greater than zero)"
        );
        assert_eq!(
            SharedError::TooLong { field: "notes".to_string(), max: 10 }.to_string(),
            "Field notes exceeds 10 characters"
        );
    }
}
