use crate::row::Row;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored document awaiting or past verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    pub id: Uuid,
    pub name: String,
    /// MIME type as reported by the upload.
    pub kind: String,
    pub size: u64,
    #[serde(rename = "verificationStatus")]
    pub verification_status: String,
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: DateTime<Utc>,
    #[serde(rename = "uploadedBy", default)]
    pub uploaded_by: Option<String>,
}

impl FileEntry {
    /// Lowercase extension without the dot.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .filter(|ext| !ext.is_empty())
    }
}

/// Human-readable byte count with one decimal above 1 KB.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

impl Row for FileEntry {
    fn field(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.to_string()),
            "name" => Some(self.name.clone()),
            "kind" => Some(self.kind.clone()),
            "size" => Some(format_size(self.size)),
            "verificationStatus" => Some(self.verification_status.clone()),
            "uploadedAt" => Some(self.uploaded_at.format("%Y-%m-%d").to_string()),
            "uploadedBy" => self.uploaded_by.clone(),
            _ => None,
        }
    }
}
