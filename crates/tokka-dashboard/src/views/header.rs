//! Version tags and gateway info line

use super::PLACEHOLDER;
use crate::model::GatewayConfig;

/// `v<version>`, or `v?` when unknown
pub fn version_label(cfg: Option<&GatewayConfig>) -> String {
    match cfg.and_then(GatewayConfig::version) {
        Some(version) => format!("v{}", version),
        None => "v?".to_string(),
    }
}

/// `<name> v<version> • Schema: <schema> • Port: <port>`
pub fn gateway_info(cfg: &GatewayConfig) -> String {
    format!(
        "{} {} • Schema: {} • Port: {}",
        cfg.name().unwrap_or(PLACEHOLDER),
        version_label(Some(cfg)),
        cfg.schema().unwrap_or(PLACEHOLDER),
        cfg.server.port
    )
}
