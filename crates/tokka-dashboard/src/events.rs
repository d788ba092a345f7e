//! Tabs and UI events
//!
//! Becoming visible is an explicit event: components that cache layout
//! while hidden subscribe to it instead of the controller special-casing
//! them.

/// Dashboard sections, one per sidebar tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Overview,
    Routes,
    Plugins,
    Config,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Routes, Tab::Plugins, Tab::Config];

    /// Id of the `<section>` element
    pub fn section_id(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Routes => "routes",
            Tab::Plugins => "plugins",
            Tab::Config => "config",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Routes => "Routes",
            Tab::Plugins => "Plugins",
            Tab::Config => "Configuration",
        }
    }
}

/// Something the controller tells its components about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// A section just became visible
    TabShown(Tab),
}

/// Receives [`UiEvent`]s from the controller
pub trait UiListener {
    fn on_event(&mut self, event: &UiEvent);
}
