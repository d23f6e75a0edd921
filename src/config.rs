use dioxus::prelude::*;
use serde::Deserialize;

pub const DEFAULT_SUBMIT_DELAY_MS: u32 = 1500;
pub const DEFAULT_DETAILS_MIN_LEN: usize = 30;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RuntimeConfig {
    pub order_api_url: Option<String>,
    pub contact_api_url: Option<String>,
    pub simulated_delay_ms: u32,
    pub details_min_len: usize,
    pub require_terms: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            order_api_url: None,
            contact_api_url: None,
            simulated_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            details_min_len: DEFAULT_DETAILS_MIN_LEN,
            require_terms: false,
        }
    }
}

/// Base path the site is served under. This is the `--base-path` given to
/// `dx`, the same value the router strips from incoming URLs.
pub fn base_path() -> String {
    normalize_base_path(dioxus::cli_config::base_path().as_deref().unwrap_or("/"))
}

/// Locations tried, in order, for the runtime config.
fn config_urls(base: &str) -> [String; 2] {
    [format!("{base}config.json"), format!("{base}assets/config.json")]
}

fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}

pub fn use_runtime_config() -> Resource<RuntimeConfig> {
    use_resource(|| async move {
        match fetch_runtime_config().await {
            Ok(config) => config,
            Err(message) => {
                tracing::warn!("runtime config unavailable, using defaults: {message}");
                RuntimeConfig::default()
            }
        }
    })
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Result<RuntimeConfig, String> {
    let [primary, fallback] = config_urls(&base_path());
    match fetch_config_from(&primary).await {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::debug!("config: {err}, trying {fallback}");
            fetch_config_from(&fallback).await
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_config_from(path: &str) -> Result<RuntimeConfig, String> {
    let response = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|err| format!("config fetch failed: {err}"))?;
    if !response.ok() {
        return Err(format!("config fetch failed: status {}", response.status()));
    }
    response
        .json::<RuntimeConfig>()
        .await
        .map_err(|err| format!("config decode failed: {err}"))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Result<RuntimeConfig, String> {
    Ok(config_from_env(|key| std::env::var(key).ok()))
}

#[cfg(not(target_arch = "wasm32"))]
fn config_from_env(lookup: impl Fn(&str) -> Option<String>) -> RuntimeConfig {
    let defaults = RuntimeConfig::default();
    let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
    RuntimeConfig {
        order_api_url: non_empty("ORDER_API_URL"),
        contact_api_url: non_empty("CONTACT_API_URL"),
        simulated_delay_ms: non_empty("SUBMIT_DELAY_MS")
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(defaults.simulated_delay_ms),
        details_min_len: non_empty("DETAILS_MIN_LEN")
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(defaults.details_min_len),
        require_terms: non_empty("REQUIRE_TERMS")
            .map(|value| matches!(value.trim(), "1" | "true" | "yes"))
            .unwrap_or(defaults.require_terms),
    }
}
