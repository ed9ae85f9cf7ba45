use crate::error::{Result, SharedError};
use crate::multi_select::SelectOption;
use crate::row::Row;
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    static ref POSITION_REGEX: Regex = Regex::new(r"^(GK|DEF|MID|FWD)$").unwrap();
}

/// Position codes and their display labels.
pub const POSITIONS: [(&str, &str); 4] = [
    ("GK", "Goalkeeper"),
    ("DEF", "Defender"),
    ("MID", "Midfielder"),
    ("FWD", "Forward"),
];

pub const PLAYER_STATUSES: [&str; 3] = ["active", "injured", "inactive"];

/// A squad player as listed on the players page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    /// One of the `POSITIONS` codes.
    pub position: String,
    pub team: Option<String>,
    pub nationality: Option<String>,
    pub status: String,
    #[serde(rename = "dateOfBirth", default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(rename = "jerseyNumber", default)]
    pub jersey_number: Option<u8>,
}

impl Player {
    pub fn position_label(&self) -> &str {
        POSITIONS
            .iter()
            .find(|(code, _)| *code == self.position)
            .map(|(_, label)| *label)
            .unwrap_or(&self.position)
    }

    /// Age in whole years on `today`.
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        self.date_of_birth.and_then(|dob| today.years_since(dob))
    }
}

impl Row for Player {
    fn field(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.clone()),
            "name" => Some(self.name.clone()),
            "position" => Some(self.position.clone()),
            "positionLabel" => Some(self.position_label().to_string()),
            "team" => self.team.clone(),
            "nationality" => self.nationality.clone(),
            "status" => Some(self.status.clone()),
            "dateOfBirth" => self.date_of_birth.map(|d| d.format("%Y-%m-%d").to_string()),
            "jerseyNumber" => self.jersey_number.map(|n| n.to_string()),
            _ => None,
        }
    }
}

pub fn position_options() -> Vec<SelectOption> {
    POSITIONS
        .iter()
        .map(|(code, label)| SelectOption::new(*code, *label))
        .collect()
}

pub fn status_options() -> Vec<SelectOption> {
    PLAYER_STATUSES
        .iter()
        .map(|s| SelectOption::new(*s, capitalize(s)))
        .collect()
}

pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Body of the create/edit player dialog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct PlayerForm {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(regex = "POSITION_REGEX")]
    pub position: String,

    #[validate(length(max = 100))]
    pub team: Option<String>,

    #[validate(length(max = 60))]
    pub nationality: Option<String>,

    /// ISO date, as produced by the date picker.
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: Option<String>,

    #[serde(rename = "jerseyNumber")]
    #[validate(range(min = 1, max = 99))]
    pub jersey_number: Option<u8>,
}

impl PlayerForm {
    pub fn validate_fields(&self) -> Result<()> {
        self.validate()?;
        if let Some(dob) = &self.date_of_birth {
            if NaiveDate::parse_from_str(dob, "%Y-%m-%d").is_err() {
                return Err(SharedError::InvalidDate {
                    field: "dateOfBirth".to_string(),
                    value: dob.clone(),
                });
            }
        }
        Ok(())
    }
}

impl From<&Player> for PlayerForm {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            position: player.position.clone(),
            team: player.team.clone(),
            nationality: player.nationality.clone(),
            date_of_birth: player.date_of_birth.map(|d| d.format("%Y-%m-%d").to_string()),
            jersey_number: player.jersey_number,
        }
    }
}
