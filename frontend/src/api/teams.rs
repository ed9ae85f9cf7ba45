use crate::api::api_url;
use crate::api::utils::get_json;
use log::debug;
use shared::Team;

pub async fn list_teams() -> Result<Vec<Team>, String> {
    let teams: Vec<Team> = get_json(&api_url("/api/teams"), "teams").await?;
    debug!("Loaded {} teams", teams.len());
    Ok(teams)
}
