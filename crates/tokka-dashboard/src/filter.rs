//! Route list filtering
//!
//! A pure function of the route list, a method filter and a free-text
//! query. The result is always a subsequence of the input in its original
//! order.

use crate::model::RouteConfig;

/// Sentinel accepted from the method filter buttons
pub const ALL_METHODS: &str = "ALL";

/// Methods with dedicated badge styling
pub const KNOWN_METHODS: [&str; 5] = ["GET", "POST", "PUT", "DELETE", "PATCH"];

/// Method predicate of the route filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MethodFilter {
    #[default]
    All,
    /// Exact method, stored uppercased. Any verb is accepted.
    Only(String),
}

impl MethodFilter {
    /// Parse a button value: blank or `ALL` (any case) means no restriction
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ALL_METHODS) {
            MethodFilter::All
        } else {
            MethodFilter::Only(value.to_uppercase())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MethodFilter::All => ALL_METHODS,
            MethodFilter::Only(method) => method,
        }
    }

    pub fn matches(&self, method: &str) -> bool {
        match self {
            MethodFilter::All => true,
            MethodFilter::Only(wanted) => method.to_uppercase() == *wanted,
        }
    }
}

/// Combined method and text filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteFilter {
    pub method: MethodFilter,
    /// Raw query as typed; trimmed and lowercased when matching
    pub query: String,
}

impl RouteFilter {
    pub fn new(method: MethodFilter, query: impl Into<String>) -> Self {
        Self {
            method,
            query: query.into(),
        }
    }

    /// True when the filter lets every route through
    pub fn is_identity(&self) -> bool {
        self.method == MethodFilter::All && self.query.trim().is_empty()
    }

    /// Indices of the routes passing the filter, ascending
    pub fn positions(&self, routes: &[RouteConfig]) -> Vec<usize> {
        if self.is_identity() {
            return (0..routes.len()).collect();
        }
        let query = normalize_query(&self.query);
        routes
            .iter()
            .enumerate()
            .filter(|(_, route)| self.method.matches(&route.method) && text_matches(route, &query))
            .map(|(index, _)| index)
            .collect()
    }
}

/// Badge class for a route method; unrecognized verbs share one style
pub fn method_class(method: &str) -> &'static str {
    let upper = method.to_uppercase();
    KNOWN_METHODS
        .iter()
        .find(|known| **known == upper)
        .copied()
        .unwrap_or("OTHER")
}

fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

fn text_matches(route: &RouteConfig, query: &str) -> bool {
    query.is_empty()
        || route.path.to_lowercase().contains(query)
        || route.method.to_lowercase().contains(query)
}
