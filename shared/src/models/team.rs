use crate::error::Result;
use crate::row::Row;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A club or national side, shown as a grid tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub country: String,
    pub league: Option<String>,
    pub coach: Option<String>,
    #[serde(rename = "playerCount", default)]
    pub player_count: u32,
    #[serde(rename = "logoUrl", default)]
    pub logo_url: Option<String>,
}

impl Team {
    /// Two-letter monogram for tiles without a logo.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

impl Row for Team {
    fn field(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.clone()),
            "name" => Some(self.name.clone()),
            "country" => Some(self.country.clone()),
            "league" => self.league.clone(),
            "coach" => self.coach.clone(),
            "playerCount" => Some(self.player_count.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct TeamForm {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(length(min = 2, max = 60))]
    pub country: String,

    #[validate(length(max = 100))]
    pub league: Option<String>,

    #[validate(length(max = 100))]
    pub coach: Option<String>,

    #[serde(rename = "logoUrl")]
    #[validate(url)]
    pub logo_url: Option<String>,
}

impl TeamForm {
    pub fn validate_fields(&self) -> Result<()> {
        Ok(self.validate()?)
    }
}
