//! Configuration editor sync
//!
//! Mirrors the whole configuration document into a structured-text editor
//! as pretty-printed JSON. The editing widget caches its layout when it is
//! created, possibly inside a hidden section, so every load and every
//! "became visible" event is followed by an explicit resize and refresh.

use thiserror::Error;

use crate::dom::RenderError;
use crate::events::{Tab, UiEvent, UiListener};
use crate::model::GatewayConfig;

pub const EDITOR_WIDTH: &str = "100%";
pub const EDITOR_HEIGHT: &str = "70vh";

/// Capabilities the dashboard needs from an editing widget
pub trait EditorSurface {
    fn set_value(&mut self, text: &str) -> Result<(), RenderError>;
    fn value(&self) -> Result<String, RenderError>;
    fn set_size(&mut self, width: &str, height: &str) -> Result<(), RenderError>;
    /// Recompute cached layout metrics
    fn refresh(&mut self) -> Result<(), RenderError>;
}

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(#[source] serde_json::Error),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Editor bound to the current configuration document
pub struct ConfigEditor<E> {
    surface: E,
    loaded: Option<String>,
}

impl<E: EditorSurface> ConfigEditor<E> {
    pub fn new(surface: E) -> Self {
        Self {
            surface,
            loaded: None,
        }
    }

    /// Replace the editor content with `cfg`
    pub fn load(&mut self, cfg: &GatewayConfig) -> Result<(), EditorError> {
        let text = cfg.to_pretty_json().map_err(EditorError::Serialize)?;
        self.surface.set_value(&text)?;
        self.loaded = Some(text);
        self.relayout()?;
        Ok(())
    }

    /// Current editor content
    pub fn text(&self) -> Result<String, RenderError> {
        self.surface.value()
    }

    /// True when the content differs from what was last loaded
    pub fn is_modified(&self) -> bool {
        match (&self.loaded, self.surface.value()) {
            (Some(loaded), Ok(current)) => *loaded != current,
            _ => false,
        }
    }

    /// Parse the current content as a gateway configuration
    pub fn validate(&self) -> Result<GatewayConfig, EditorError> {
        let text = self.text()?;
        GatewayConfig::from_json(&text).map_err(EditorError::Invalid)
    }

    pub fn relayout(&mut self) -> Result<(), RenderError> {
        self.surface.set_size(EDITOR_WIDTH, EDITOR_HEIGHT)?;
        self.surface.refresh()
    }

    #[cfg(test)]
    pub(crate) fn surface(&self) -> &E {
        &self.surface
    }

    #[cfg(test)]
    pub(crate) fn surface_mut(&mut self) -> &mut E {
        &mut self.surface
    }
}

impl<E: EditorSurface> UiListener for ConfigEditor<E> {
    fn on_event(&mut self, event: &UiEvent) {
        match event {
            UiEvent::TabShown(Tab::Config) => {
                if let Err(e) = self.relayout() {
                    log::warn!("config editor refresh skipped: {}", e);
                }
            }
            UiEvent::TabShown(_) => {}
        }
    }
}
