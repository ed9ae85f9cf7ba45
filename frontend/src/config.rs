use anyhow::anyhow;
use log::warn;
use shared::ViewConfig;

pub struct Config;

impl Config {
    pub fn api_base_url() -> String {
        // Relative URLs: Trunk proxies /api/ in development, nginx in production.
        "".to_string()
    }

    /// Listing defaults, overridable via `window.PITCHSIDE_VIEW_CONFIG`
    /// (a JSON string or plain object set by the hosting HTML).
    pub fn view() -> ViewConfig {
        match view_override() {
            Ok(Some(config)) => config,
            Ok(None) => ViewConfig::default(),
            Err(e) => {
                warn!("Ignoring view config override: {:#}", e);
                ViewConfig::default()
            }
        }
    }
}

fn view_override() -> anyhow::Result<Option<ViewConfig>> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let value = js_sys::Reflect::get(&window, &"PITCHSIDE_VIEW_CONFIG".into())
        .map_err(|e| anyhow!("Failed to read PITCHSIDE_VIEW_CONFIG: {:?}", e))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    let raw = match value.as_string() {
        Some(raw) => raw,
        None => js_sys::JSON::stringify(&value)
            .map_err(|e| anyhow!("PITCHSIDE_VIEW_CONFIG is not serializable: {:?}", e))?
            .into(),
    };
    ViewConfig::from_json(&raw).map(Some)
}
