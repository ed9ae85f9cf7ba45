use crate::api::api_url;
use crate::api::utils::{delete, get_json};
use log::{debug, info};
use shared::FileEntry;
use uuid::Uuid;

pub async fn list_files() -> Result<Vec<FileEntry>, String> {
    let files: Vec<FileEntry> = get_json(&api_url("/api/files"), "files").await?;
    debug!("Loaded {} files", files.len());
    Ok(files)
}

pub async fn delete_file(id: Uuid) -> Result<(), String> {
    delete(&api_url(&format!("/api/files/{}", id)), "file").await?;
    info!("Deleted file {}", id);
    Ok(())
}
