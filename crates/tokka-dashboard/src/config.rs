//! Dashboard configuration
//!
//! The gateway serving the dashboard can inject settings through `<meta>`
//! tags, so the same build works behind any path prefix:
//!
//! ```html
//! <meta name="tokka:config-url" content="/admin/config">
//! <meta name="tokka:log-level" content="debug">
//! <meta name="tokka:version" content="0.4.1">
//! ```

use wasm_bindgen::JsCast;

/// Relative endpoint used when nothing is injected
pub const DEFAULT_CONFIG_URL: &str = "config";

/// Dashboard configuration
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Endpoint returning the gateway configuration document
    pub config_url: String,
    /// Console log verbosity
    pub log_level: log::Level,
    /// Dashboard build version (injected by server)
    pub version: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            config_url: DEFAULT_CONFIG_URL.to_string(),
            log_level: log::Level::Info,
            version: None,
        }
    }
}

impl DashboardConfig {
    /// Load configuration from various sources (priority order):
    /// 1. `<meta name="tokka:...">` tags (server-injected)
    /// 2. `window.__TOKKA_DASHBOARD__` object (JavaScript injection)
    /// 3. Defaults
    pub fn load() -> Self {
        let document = web_sys::window().and_then(|w| w.document());
        let meta = |name: &str| {
            document
                .as_ref()
                .and_then(|d| get_meta_content(d, name))
                .filter(|v| !v.trim().is_empty())
        };

        Self::from_sources(
            meta("tokka:config-url").or_else(|| get_js_config("config_url")),
            meta("tokka:log-level").or_else(|| get_js_config("log_level")),
            meta("tokka:version"),
        )
    }

    /// Build from already-resolved values, falling back to defaults
    pub fn from_sources(
        config_url: Option<String>,
        log_level: Option<String>,
        version: Option<String>,
    ) -> Self {
        let mut config = Self::default();
        if let Some(url) = config_url.filter(|u| !u.trim().is_empty()) {
            config.config_url = url.trim().to_string();
        }
        if let Some(level) = log_level {
            match level.trim().parse::<log::Level>() {
                Ok(level) => config.log_level = level,
                Err(_) => log::warn!("ignoring unknown log level {:?}", level),
            }
        }
        config.version = version.filter(|v| !v.trim().is_empty());
        config
    }

    /// Get the config endpoint URL
    pub fn config_url(&self) -> &str {
        &self.config_url
    }
}

/// Get content from a <meta name="..."> tag
fn get_meta_content(document: &web_sys::Document, name: &str) -> Option<String> {
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
        .map(|meta| meta.content())
}

/// Get a value from window.__TOKKA_DASHBOARD__
fn get_js_config(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let config = js_sys::Reflect::get(&window, &"__TOKKA_DASHBOARD__".into()).ok()?;

    if config.is_undefined() || config.is_null() {
        return None;
    }

    let value = js_sys::Reflect::get(&config, &key.into()).ok()?;
    value.as_string()
}
