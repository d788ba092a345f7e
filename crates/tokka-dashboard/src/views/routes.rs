//! Route list with filtering and expandable cards
//!
//! Cards are rebuilt from the document on every change. They carry the
//! document revision and their index in the document, which together
//! identify a card across filter changes. Expand state lives in
//! [`CardStates`](super::card::CardStates) and is reset on every re-render.

use super::{compact_settings, or_placeholder, InfoItem, NOT_AVAILABLE};
use crate::filter::{method_class, RouteFilter};
use crate::model::{BackendConfig, MiddlewareConfig, PluginConfig, RouteConfig, RouteKey};

pub const EMPTY_MESSAGE: &str = "No routes found matching filter.";
pub const NO_PLUGINS_MESSAGE: &str = "No plugins attached";

/// Everything one route card shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteCard {
    /// Document revision the card was built from
    pub revision: u64,
    /// Position of the route in the document
    pub index: usize,
    pub key: RouteKey,
    pub method: String,
    pub method_class: &'static str,
    pub path: String,
    pub plugin_count: usize,
    pub backend_count: usize,
    /// Aggregate, transform and partial-results rows
    pub details: Vec<InfoItem>,
    pub backends: Vec<BackendRow>,
    pub plugins: Vec<SettingsLine>,
    pub middlewares: Vec<SettingsLine>,
}

/// One row of the backends grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendRow {
    pub method: String,
    pub url: String,
    pub timeout: String,
}

/// Plugin or middleware with its compact settings summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsLine {
    pub name: String,
    pub summary: String,
    /// Middleware that may fail to load without failing the route
    pub optional: bool,
}

impl RouteCard {
    pub fn new(revision: u64, index: usize, route: &RouteConfig) -> Self {
        Self {
            revision,
            index,
            key: route.key(),
            method: or_placeholder(Some(route.method.as_str())),
            method_class: method_class(&route.method),
            path: or_placeholder(Some(route.path.as_str())),
            plugin_count: route.plugins.len(),
            backend_count: route.backends.len(),
            details: vec![
                InfoItem::new("Aggregate:", or_placeholder(route.aggregate())),
                InfoItem::new("Transform:", or_placeholder(route.transform())),
                InfoItem::new(
                    "Partial results:",
                    if route.allow_partial_results { "yes" } else { "no" },
                ),
            ],
            backends: route.backends.iter().map(BackendRow::new).collect(),
            plugins: route.plugins.iter().map(SettingsLine::plugin).collect(),
            middlewares: route.middlewares.iter().map(SettingsLine::middleware).collect(),
        }
    }
}

impl BackendRow {
    pub fn new(backend: &BackendConfig) -> Self {
        Self {
            method: backend.method().to_string(),
            url: or_placeholder(Some(backend.url.as_str())),
            timeout: backend
                .timeout_ms()
                .map(|ms| format!("{}ms", ms))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        }
    }
}

impl SettingsLine {
    pub fn plugin(plugin: &PluginConfig) -> Self {
        Self {
            name: or_placeholder(Some(plugin.name.as_str())),
            summary: compact_settings(&plugin.config),
            optional: false,
        }
    }

    pub fn middleware(middleware: &MiddlewareConfig) -> Self {
        Self {
            name: or_placeholder(Some(middleware.name.as_str())),
            summary: compact_settings(&middleware.config),
            optional: middleware.can_fail_on_load,
        }
    }
}

/// Cards for the routes passing `filter`, in document order
pub fn visible_cards(routes: &[RouteConfig], filter: &RouteFilter, revision: u64) -> Vec<RouteCard> {
    filter
        .positions(routes)
        .into_iter()
        .filter_map(|index| routes.get(index).map(|route| RouteCard::new(revision, index, route)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::MethodFilter;
    use serde_json::json;

    fn route(value: serde_json::Value) -> RouteConfig {
        serde_json::from_value(value).unwrap()
    }

    fn users() -> RouteConfig {
        route(json!({
            "method": "GET",
            "path": "/users",
            "backends": [{"url": "http://a", "method": "GET"}],
            "plugins": []
        }))
    }

    fn all(routes: &[RouteConfig]) -> Vec<RouteCard> {
        visible_cards(routes, &RouteFilter::default(), 1)
    }

    #[test]
    fn test_no_routes() {
        assert!(all(&[]).is_empty());
        let filter = RouteFilter::new(MethodFilter::parse("POST"), "anything");
        assert!(visible_cards(&[], &filter, 1).is_empty());
    }

    #[test]
    fn test_filtered_out() {
        let filter = RouteFilter::new(MethodFilter::parse("POST"), "");
        assert!(visible_cards(&[users()], &filter, 1).is_empty());
    }

    #[test]
    fn test_card_summary() {
        let card = &all(&[users()])[0];
        assert_eq!(card.key, RouteKey::new("GET", "/users"));
        assert_eq!(card.method, "GET");
        assert_eq!(card.method_class, "GET");
        assert_eq!(card.path, "/users");
        assert_eq!((card.plugin_count, card.backend_count), (0, 1));
        assert!(card.plugins.is_empty());
        assert_eq!(card.details[2], InfoItem::new("Partial results:", "no"));
    }

    #[test]
    fn test_details_placeholders() {
        let card = &all(&[route(json!({
            "method": "purge",
            "path": "/cache",
            "backends": [
                {"url": "", "timeout": 0},
                {"url": "http://b", "method": "POST", "timeout": 750},
                {"url": "http://c", "timeout": -1}
            ],
            "plugins": null
        }))])[0];
        assert_eq!(card.method, "purge");
        assert_eq!(card.method_class, "OTHER");
        assert_eq!(card.details[0], InfoItem::new("Aggregate:", "-"));
        assert_eq!(card.details[1], InfoItem::new("Transform:", "-"));
        assert_eq!(
            card.backends,
            [
                BackendRow { method: "GET".into(), url: "-".into(), timeout: "N/A".into() },
                BackendRow { method: "POST".into(), url: "http://b".into(), timeout: "750ms".into() },
                BackendRow { method: "GET".into(), url: "http://c".into(), timeout: "N/A".into() },
            ]
        );
    }

    #[test]
    fn test_blank_method_uses_placeholder() {
        let card = &all(&[route(json!({"method": " ", "path": "/x"}))])[0];
        assert_eq!(card.method, "-");
        assert_eq!(card.method_class, "OTHER");
    }

    #[test]
    fn test_compact_plugin_summary() {
        let card = &all(&[route(json!({
            "method": "GET",
            "path": "/p",
            "plugins": [{"name": "cors", "config": {"a": 1, "b": 2, "c": 3, "d": 4}}]
        }))])[0];
        assert_eq!(
            card.plugins,
            [SettingsLine { name: "cors".into(), summary: "a: 1, b: 2, c: 3, ...".into(), optional: false }]
        );
    }

    #[test]
    fn test_middlewares_listed() {
        let card = &all(&[route(json!({
            "method": "GET",
            "path": "/m",
            "middlewares": [{"name": "auth", "config": {"realm": "x"}, "can_fail_on_load": true}]
        }))])[0];
        assert_eq!(card.middlewares.len(), 1);
        assert!(card.middlewares[0].optional);
        assert_eq!(card.middlewares[0].summary, "realm: x");
    }

    #[test]
    fn test_hostile_values_stay_plain_text() {
        let card = &all(&[route(json!({
            "method": "GET\"><script>",
            "path": "/<script>alert('x')</script>",
            "aggregate": "<b>merge</b>"
        }))])[0];
        assert_eq!(card.path, "/<script>alert('x')</script>");
        assert_eq!(card.details[0].value, "<b>merge</b>");
    }

    #[test]
    fn test_order_and_indices() {
        let routes = vec![
            route(json!({"method": "GET", "path": "/b"})),
            route(json!({"method": "POST", "path": "/x"})),
            route(json!({"method": "GET", "path": "/a"})),
        ];
        let filter = RouteFilter::new(MethodFilter::parse("GET"), "");
        let cards = visible_cards(&routes, &filter, 7);
        let got: Vec<(u64, usize, &str)> = cards
            .iter()
            .map(|c| (c.revision, c.index, c.path.as_str()))
            .collect();
        assert_eq!(got, [(7, 0, "/b"), (7, 2, "/a")]);
    }
}
