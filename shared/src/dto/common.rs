use serde::{Deserialize, Serialize};

/// Error body returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    /// Per-field messages from server-side validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<std::collections::BTreeMap<String, String>>,
}

impl ErrorResponse {
    /// Message for the page's error banner.
    pub fn banner_message(&self) -> String {
        match &self.fields {
            Some(fields) if !fields.is_empty() => {
                let details: Vec<String> =
                    fields.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
                format!("{} ({})", self.error, details.join(", "))
            }
            _ => self.error.clone(),
        }
    }
}

/// Response of the delete endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub id: String,
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_banner_message_lists_fields() {
        let body: ErrorResponse = serde_json::from_str(
            r#"{"error":"Validation failed","fields":{"email":"invalid","name":"required"}}"#,
        )
        .unwrap();
        assert_eq!(body.banner_message(), "Validation failed (email: invalid, name: required)");

        let plain: ErrorResponse = serde_json::from_str(r#"{"error":"Not found"}"#).unwrap();
        assert_eq!(plain.banner_message(), "Not found");
    }
}
