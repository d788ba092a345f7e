//! Dashboard UI components
//!
//! Leptos components rendering the [`DashboardStore`](crate::controller::DashboardStore)
//! signals. Text always goes through Leptos text nodes; the page error is
//! the only raw markup.
//!
//! 1. **Primitives** (`primitives.rs`) - `Section`, `Card`, `MetaRow`,
//!    `EmptyState`, `SearchInput`, `ToggleButton`, icons
//! 2. **Layout** (`header.rs`, `sidebar.rs`) - including the page error
//! 3. **Sections** (`overview.rs`, `routes.rs`, `plugins.rs`,
//!    `config_editor.rs`) - one per sidebar tab

pub mod config_editor;
pub mod header;
pub mod overview;
pub mod plugins;
pub mod primitives;
pub mod routes;
pub mod sidebar;

pub use config_editor::ConfigSection;
pub use header::{Header, PageError};
pub use overview::OverviewSection;
pub use plugins::PluginsSection;
pub use routes::RoutesSection;
pub use sidebar::Sidebar;
