pub mod files;
pub mod matches;
pub mod players;
pub mod teams;
pub mod users;
pub mod utils;

use crate::config::Config;

/// Resolves an `/api/...` path against the configured base; an empty base
/// keeps it relative.
pub fn api_url(path: &str) -> String {
    let base = Config::api_base_url();
    format!("{}{}", base.trim_end_matches('/'), path)
}
