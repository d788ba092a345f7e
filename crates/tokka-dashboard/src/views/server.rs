//! Server info panel and status badge

use super::InfoItem;
use crate::model::GatewayConfig;

/// Gateway status shown in the page header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServerStatus {
    #[default]
    Connecting,
    Running,
    Stopped,
}

impl ServerStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ServerStatus::Connecting => "● Connecting",
            ServerStatus::Running => "● Running",
            ServerStatus::Stopped => "● Stopped",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            ServerStatus::Connecting => "status-badge status-pending",
            ServerStatus::Running => "status-badge status-ok",
            ServerStatus::Stopped => "status-badge status-error",
        }
    }
}

/// Listener port, timeout and, when enabled, the admin panel port
pub fn info_rows(cfg: &GatewayConfig) -> Vec<InfoItem> {
    let mut rows = vec![
        InfoItem::new("Listen Port", cfg.server.port.to_string()),
        InfoItem::new("Timeout", format!("{} ms", cfg.server.timeout)),
    ];
    if let Some(admin) = cfg.enabled_admin_panel() {
        rows.push(InfoItem::new("Admin Port", admin.port.to_string()));
    }
    rows
}
