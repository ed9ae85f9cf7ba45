use crate::api::api_url;
use crate::api::utils::get_json;
use log::debug;
use shared::User;

pub async fn list_users() -> Result<Vec<User>, String> {
    let users: Vec<User> = get_json(&api_url("/api/users"), "users").await?;
    debug!("Loaded {} users", users.len());
    Ok(users)
}
