use crate::api::api_url;
use crate::api::utils::get_json;
use log::debug;
use shared::Match;

pub async fn list_matches() -> Result<Vec<Match>, String> {
    let matches: Vec<Match> = get_json(&api_url("/api/matches"), "matches").await?;
    debug!("Loaded {} matches", matches.len());
    Ok(matches)
}
