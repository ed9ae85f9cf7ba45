use crate::error::{Result, SharedError};
use crate::models::player::capitalize;
use crate::multi_select::SelectOption;
use crate::row::Row;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const MATCH_STATUSES: [&str; 4] = ["scheduled", "completed", "cancelled", "postponed"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub tournament: String,
    #[serde(rename = "homeTeam")]
    pub home_team: String,
    #[serde(rename = "awayTeam")]
    pub away_team: String,
    #[serde(rename = "kickoffDate")]
    pub kickoff_date: NaiveDate,
    pub venue: Option<String>,
    pub status: String,
    #[serde(rename = "homeScore", default)]
    pub home_score: Option<u8>,
    #[serde(rename = "awayScore", default)]
    pub away_score: Option<u8>,
}

impl Match {
    pub fn fixture(&self) -> String {
        format!("{} vs {}", self.home_team, self.away_team)
    }

    /// "2 - 1" once both scores are known.
    pub fn score(&self) -> Option<String> {
        match (self.home_score, self.away_score) {
            (Some(h), Some(a)) => Some(format!("{} - {}", h, a)),
            _ => None,
        }
    }

    /// Inclusive range check; an open bound accepts everything on that side.
    pub fn kicks_off_within(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
        from.map_or(true, |f| self.kickoff_date >= f) && to.map_or(true, |t| self.kickoff_date <= t)
    }
}

impl Row for Match {
    fn field(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.clone()),
            "tournament" => Some(self.tournament.clone()),
            "homeTeam" => Some(self.home_team.clone()),
            "awayTeam" => Some(self.away_team.clone()),
            "fixture" => Some(self.fixture()),
            "kickoffDate" => Some(self.kickoff_date.format("%Y-%m-%d").to_string()),
            "venue" => self.venue.clone(),
            "status" => Some(self.status.clone()),
            "score" => self.score(),
            _ => None,
        }
    }
}

pub fn status_options() -> Vec<SelectOption> {
    MATCH_STATUSES
        .iter()
        .map(|s| SelectOption::new(*s, capitalize(s)))
        .collect()
}

/// Distinct tournaments in first-seen order.
pub fn tournament_options(matches: &[Match]) -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = Vec::new();
    for m in matches {
        if !options.iter().any(|o| o.value == m.tournament) {
            options.push(SelectOption::new(m.tournament.clone(), m.tournament.clone()));
        }
    }
    options
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct MatchForm {
    #[validate(length(min = 1, max = 100))]
    pub tournament: String,

    #[serde(rename = "homeTeam")]
    #[validate(length(min = 1))]
    pub home_team: String,

    #[serde(rename = "awayTeam")]
    #[validate(length(min = 1))]
    pub away_team: String,

    /// ISO date.
    #[serde(rename = "kickoffDate")]
    #[validate(length(equal = 10))]
    pub kickoff_date: String,

    #[validate(length(max = 100))]
    pub venue: Option<String>,
}

impl MatchForm {
    pub fn validate_fields(&self) -> Result<()> {
        self.validate()?;
        if self.home_team == self.away_team {
            return Err(SharedError::Validation(
                "home and away team must differ".to_string(),
            ));
        }
        NaiveDate::parse_from_str(&self.kickoff_date, "%Y-%m-%d").map_err(|_| {
            SharedError::InvalidDate {
                field: "kickoffDate".to_string(),
                value: self.kickoff_date.clone(),
            }
        })?;
        Ok(())
    }
}
