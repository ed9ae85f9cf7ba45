use crate::api::api_url;
use crate::api::utils::{authenticated_post, authenticated_put, error_message, get_json};
use async_trait::async_trait;
use log::{debug, info};
use shared::dto::page::{PageQuery, PageResponse};
use shared::{Player, PlayerForm, RowSource, SharedError};

/// Server-paginated player listing.
pub async fn fetch_players_page(query: &PageQuery) -> Result<PageResponse<Player>, String> {
    let url = format!("{}?{}", api_url("/api/players"), query.to_query_string());
    let page: PageResponse<Player> = get_json(&url, "players").await?;
    debug!(
        "Loaded players page {} ({} of {})",
        page.page,
        page.items.len(),
        page.total
    );
    Ok(page)
}

pub async fn create_player(form: &PlayerForm) -> Result<Player, String> {
    form.validate_fields().map_err(|e| e.to_string())?;
    let response = authenticated_post(&api_url("/api/players"))
        .json(form)
        .map_err(|e| format!("Failed to encode player: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to create player: {}", e))?;
    if !response.ok() {
        return Err(error_message(response).await);
    }
    let player = response
        .json::<Player>()
        .await
        .map_err(|e| format!("Failed to parse player response: {}", e))?;
    info!("Created player {}", player.id);
    Ok(player)
}

pub async fn update_player(id: &str, form: &PlayerForm) -> Result<Player, String> {
    form.validate_fields().map_err(|e| e.to_string())?;
    let url = api_url(&format!("/api/players/{}", urlencoding::encode(id)));
    let response = authenticated_put(&url)
        .json(form)
        .map_err(|e| format!("Failed to encode player: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to update player: {}", e))?;
    if !response.ok() {
        return Err(error_message(response).await);
    }
    response
        .json::<Player>()
        .await
        .map_err(|e| format!("Failed to parse player response: {}", e))
}

/// `RowSource` over `/api/players`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerSource;

#[async_trait(?Send)]
impl RowSource<Player> for PlayerSource {
    async fn fetch_page(&self, query: &PageQuery) -> shared::Result<PageResponse<Player>> {
        fetch_players_page(query).await.map_err(SharedError::RowSource)
    }
}
