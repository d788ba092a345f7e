//! Gateway configuration document
//!
//! Mirrors the JSON the gateway serves on its config endpoint. The document
//! is read-only for the dashboard: it is replaced wholesale on every
//! successful fetch and never patched in place.
//!
//! The gateway serializes empty lists and maps as `null`, and most string
//! fields may be empty, so every field here is lenient: missing or `null`
//! values fall back to their defaults instead of failing the whole parse.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Arbitrary plugin/middleware settings, in document order
pub type Settings = Map<String, Value>;

/// Method assumed for backends that do not declare one
pub const DEFAULT_BACKEND_METHOD: &str = "GET";

// ============================================================================
// Root document
// ============================================================================

/// Root configuration document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(
        default,
        alias = "schemaVersion",
        alias = "schema_version",
        skip_serializing_if = "Option::is_none"
    )]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub server: ServerConfig,
    #[serde(default, alias = "adminPanel", skip_serializing_if = "Option::is_none")]
    pub admin_panel: Option<AdminConfig>,
    /// Name the gateway itself serializes the admin panel under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<AdminConfig>,
    /// Global plugins
    #[serde(default, deserialize_with = "null_as_default")]
    pub plugins: Vec<PluginConfig>,
    /// Routes in display order
    #[serde(default, deserialize_with = "null_as_default")]
    pub routes: Vec<RouteConfig>,
    /// Keys this dashboard does not model, kept so the editor shows the
    /// document as served
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GatewayConfig {
    /// Parse a document from its JSON text
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Pretty-printed JSON (two-space indentation)
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Minimal document used when nothing could be fetched
    pub fn placeholder() -> Self {
        Self::default()
    }

    pub fn name(&self) -> Option<&str> {
        non_empty(self.name.as_deref())
    }

    pub fn version(&self) -> Option<&str> {
        non_empty(self.version.as_deref())
    }

    pub fn schema(&self) -> Option<&str> {
        non_empty(self.schema.as_deref())
    }

    /// Admin panel settings; `admin_panel` wins over `dashboard` when a
    /// document carries both
    pub fn admin_settings(&self) -> Option<&AdminConfig> {
        self.admin_panel.as_ref().or(self.dashboard.as_ref())
    }

    /// Admin panel settings, only when the panel is enabled
    pub fn enabled_admin_panel(&self) -> Option<&AdminConfig> {
        self.admin_settings().filter(|admin| admin.enable)
    }
}

/// Listener settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: i64,
    /// Milliseconds
    pub timeout: i64,
}

/// Admin panel / dashboard listener settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    #[serde(alias = "enabled")]
    pub enable: bool,
    pub port: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
}

// ============================================================================
// Plugins & middlewares
// ============================================================================

/// Named plugin with free-form settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PluginConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub config: Settings,
}

/// Route middleware
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub config: Settings,
    #[serde(default)]
    pub can_fail_on_load: bool,
}

// ============================================================================
// Routes & backends
// ============================================================================

/// Upstream target of a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default = "default_backend_method", deserialize_with = "null_as_default")]
    pub method: String,
    /// Milliseconds; zero or negative means unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub headers: BTreeMap<String, String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub forward_headers: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub forward_query_strings: Vec<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            method: default_backend_method(),
            timeout: None,
            headers: BTreeMap::new(),
            forward_headers: Vec::new(),
            forward_query_strings: Vec::new(),
        }
    }
}

impl BackendConfig {
    /// Declared method, `GET` when blank
    pub fn method(&self) -> &str {
        non_empty(Some(self.method.as_str())).unwrap_or(DEFAULT_BACKEND_METHOD)
    }

    /// Timeout in milliseconds when one is actually set
    pub fn timeout_ms(&self) -> Option<i64> {
        self.timeout.filter(|ms| *ms > 0)
    }
}

/// A path + method mapped to one or more backends
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub method: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub backends: Vec<BackendConfig>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub plugins: Vec<PluginConfig>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub middlewares: Vec<MiddlewareConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
    #[serde(default)]
    pub allow_partial_results: bool,
}

impl RouteConfig {
    pub fn aggregate(&self) -> Option<&str> {
        non_empty(self.aggregate.as_deref())
    }

    pub fn transform(&self) -> Option<&str> {
        non_empty(self.transform.as_deref())
    }

    /// Stable identity used for per-card UI state
    pub fn key(&self) -> RouteKey {
        RouteKey::new(&self.method, &self.path)
    }
}

/// Identity of a route card: uppercased method plus path
///
/// Whitespace runs are collapsed to one space, so paths that only differ
/// in spacing share a card state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteKey {
    pub method: String,
    pub path: String,
}

impl RouteKey {
    pub fn new(method: &str, path: &str) -> Self {
        Self {
            method: collapse_whitespace(method).to_uppercase(),
            path: collapse_whitespace(path),
        }
    }
}

impl std::fmt::Display for RouteKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn default_backend_method() -> String {
    DEFAULT_BACKEND_METHOD.to_string()
}

/// Treat an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `None` for absent, empty or whitespace-only strings
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// Replace every run of whitespace with a single space
pub fn collapse_whitespace(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_space = false;
    for c in value.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const GATEWAY_JSON: &str = r#"{
        "schema": "v1",
        "name": "tokka",
        "version": "1.2.0",
        "server": {"port": 8080, "timeout": 5000},
        "dashboard": {"enable": true, "port": 9000, "timeout": 10},
        "plugins": null,
        "routes": [
            {
                "path": "/users",
                "method": "get",
                "plugins": null,
                "middlewares": null,
                "backends": [
                    {"url": "http://users", "method": "", "timeout": 0, "headers": null},
                    {"url": "http://profiles", "timeout": 250}
                ],
                "aggregate": "merge",
                "transform": "",
                "allow_partial_results": true
            }
        ],
        "debug": {"level": 3}
    }"#;

    #[test]
    fn test_parse_gateway_document() {
        let cfg = GatewayConfig::from_json(GATEWAY_JSON).unwrap();
        assert_eq!(cfg.schema(), Some("v1"));
        assert_eq!(cfg.name(), Some("tokka"));
        assert_eq!(cfg.server.port, 8080);
        assert!(cfg.plugins.is_empty());
        assert_eq!(cfg.enabled_admin_panel().map(|a| a.port), Some(9000));

        let route = &cfg.routes[0];
        assert!(route.plugins.is_empty());
        assert_eq!(route.aggregate(), Some("merge"));
        assert_eq!(route.transform(), None);
        assert!(route.allow_partial_results);
        assert_eq!(route.backends[0].method(), "GET");
        assert_eq!(route.backends[0].timeout_ms(), None);
        assert_eq!(route.backends[1].method, "GET");
        assert_eq!(route.backends[1].timeout_ms(), Some(250));

        assert_eq!(cfg.extra.get("debug"), Some(&serde_json::json!({"level": 3})));
    }

    #[test]
    fn test_camel_case_aliases() {
        let cfg = GatewayConfig::from_json(
            r#"{"schemaVersion": "2", "adminPanel": {"enabled": false, "port": 1}}"#,
        )
        .unwrap();
        assert_eq!(cfg.schema(), Some("2"));
        assert!(cfg.admin_panel.is_some());
        assert!(cfg.dashboard.is_none());
        assert!(cfg.enabled_admin_panel().is_none());
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        assert!(GatewayConfig::from_json(r#"{"routes": "nope"}"#).is_err());
        assert!(GatewayConfig::from_json("<html>").is_err());
    }

    #[test]
    fn test_placeholder_serialization() {
        let json = serde_json::to_string(&GatewayConfig::placeholder()).unwrap();
        assert_eq!(json, r#"{"server":{"port":0,"timeout":0},"plugins":[],"routes":[]}"#);
    }

    #[test]
    fn test_plugin_settings_keep_document_order() {
        let plugin: PluginConfig =
            serde_json::from_str(r#"{"name": "p", "config": {"z": 1, "a": 2, "m": 3}}"#).unwrap();
        let keys: Vec<&str> = plugin.config.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn test_negative_integers_are_accepted() {
        let cfg = GatewayConfig::from_json(
            r#"{
                "server": {"port": 8080, "timeout": -1},
                "dashboard": {"enable": true, "port": -9000, "timeout": -3},
                "routes": [
                    {"path": "/a", "method": "GET", "backends": [{"url": "http://a", "timeout": -5}]}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.server.timeout, -1);
        assert_eq!(cfg.enabled_admin_panel().map(|a| (a.port, a.timeout)), Some((-9000, Some(-3))));

        let backend = &cfg.routes[0].backends[0];
        assert_eq!(backend.timeout, Some(-5));
        assert_eq!(backend.timeout_ms(), None);
    }

    #[test]
    fn test_large_integers_are_accepted() {
        let cfg = GatewayConfig::from_json(&format!(
            r#"{{"server": {{"port": {max}, "timeout": {max}}},
                "routes": [{{"path": "/a", "backends": [{{"url": "u", "timeout": {max}}}]}}]}}"#,
            max = i64::MAX
        ))
        .unwrap();
        assert_eq!(cfg.server.port, i64::MAX);
        assert_eq!(cfg.routes[0].backends[0].timeout_ms(), Some(i64::MAX));

        let min = GatewayConfig::from_json(&format!(
            r#"{{"server": {{"port": 0, "timeout": {}}}}}"#,
            i64::MIN
        ))
        .unwrap();
        assert_eq!(min.server.timeout, i64::MIN);
    }

    #[test]
    fn test_integers_beyond_i64_are_rejected() {
        let err = GatewayConfig::from_json(r#"{"server": {"port": 1, "timeout": 18446744073709551615}}"#);
        assert!(err.is_err());
        assert!(GatewayConfig::from_json(r#"{"server": {"port": 1.5}}"#).is_err());
    }

    #[test]
    fn test_admin_panel_under_both_names() {
        let cfg = GatewayConfig::from_json(
            r#"{"dashboard": {"enable": true, "port": 1}, "admin_panel": {"enable": false, "port": 2}}"#,
        )
        .unwrap();
        assert_eq!(cfg.admin_settings().map(|a| a.port), Some(2));
        assert!(cfg.enabled_admin_panel().is_none());

        let cfg = GatewayConfig::from_json(
            r#"{"dashboard": {"enable": true, "port": 1}, "adminPanel": {"enabled": true, "port": 2}}"#,
        )
        .unwrap();
        assert_eq!(cfg.enabled_admin_panel().map(|a| a.port), Some(2));

        let text = cfg.to_pretty_json().unwrap();
        assert!(text.contains("\"dashboard\""));
        assert!(text.contains("\"admin_panel\""));
    }

    #[test]
    fn test_null_numbers_fall_back_to_defaults() {
        let cfg = GatewayConfig::from_json(
            r#"{"server": null, "routes": [{"path": "/a", "backends": [{"url": "u", "timeout": null}]}]}"#,
        )
        .unwrap();
        assert_eq!(cfg.server, ServerConfig::default());
        assert_eq!(cfg.routes[0].backends[0].timeout_ms(), None);
    }

    #[test]
    fn test_route_key_normalization() {
        let route = RouteConfig {
            path: "/a\n\t b".to_string(),
            method: "post".to_string(),
            ..Default::default()
        };
        assert_eq!(route.key(), RouteKey::new("POST", "/a b"));
        assert_eq!(route.key().to_string(), "POST /a b");
    }
}
