use crate::error::Result;
use crate::models::player::capitalize;
use crate::multi_select::SelectOption;
use crate::row::Row;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const ROLES: [&str; 3] = ["admin", "analyst", "viewer"];

/// A dashboard account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    #[serde(rename = "lastLogin", default)]
    pub last_login: Option<DateTime<Utc>>,
}

impl Row for User {
    fn field(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.clone()),
            "name" => Some(self.name.clone()),
            "email" => Some(self.email.clone()),
            "role" => Some(self.role.clone()),
            "status" => Some(self.status.clone()),
            "lastLogin" => self.last_login.map(|t| t.format("%Y-%m-%d %H:%M").to_string()),
            _ => None,
        }
    }
}

pub fn role_options() -> Vec<SelectOption> {
    ROLES.iter().map(|r| SelectOption::new(*r, capitalize(r))).collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserForm {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub role: String,
}

impl UserForm {
    pub fn validate_fields(&self) -> Result<()> {
        Ok(self.validate()?)
    }
}
