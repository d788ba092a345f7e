//! Global plugin list

use super::or_placeholder;
use crate::model::PluginConfig;

pub const EMPTY_MESSAGE: &str = "No global plugins configured.";

/// One global plugin with its settings pretty-printed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PluginEntry {
    pub name: String,
    pub config: String,
}

impl PluginEntry {
    pub fn new(plugin: &PluginConfig) -> Self {
        Self {
            name: or_placeholder(Some(plugin.name.as_str())),
            config: serde_json::to_string_pretty(&plugin.config)
                .unwrap_or_else(|_| "{}".to_string()),
        }
    }
}

/// Entries in document order; empty when nothing is configured
pub fn entries(plugins: &[PluginConfig]) -> Vec<PluginEntry> {
    plugins.iter().map(PluginEntry::new).collect()
}
