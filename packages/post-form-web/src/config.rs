//! API location for the running app

use post_form::ApiConfig;
use std::sync::OnceLock;

static API_CONFIG: OnceLock<ApiConfig> = OnceLock::new();

/// Set the API config. Call this at startup.
pub fn init_api_config(config: ApiConfig) {
    API_CONFIG.set(config).ok();
}

/// Get the configured API location, or the default when unset.
pub fn api_config() -> ApiConfig {
    API_CONFIG.get().cloned().unwrap_or_default()
}

/// Resolve the API location for this build.
///
/// Browsers have no process environment, so web builds bake the URL in at
/// compile time.
pub fn load_api_config() -> ApiConfig {
    #[cfg(target_arch = "wasm32")]
    let loaded = match option_env!("POST_FORM_API_URL") {
        Some(url) => ApiConfig::new(url),
        None => Ok(ApiConfig::default()),
    };
    #[cfg(not(target_arch = "wasm32"))]
    let loaded = ApiConfig::from_env();

    match loaded {
        Ok(config) => {
            tracing::info!(base_url = %config.base_url(), "Using API");
            config
        }
        Err(e) => {
            tracing::error!(error = %e, "Invalid API URL, falling back to default");
            ApiConfig::default()
        }
    }
}
