//! Tokka Dashboard - Leptos-based WebAssembly UI
//!
//! A read-only dashboard for inspecting the configuration a Tokka gateway
//! is running with: listener settings, global plugins, routes with their
//! backends and plugins, and the raw document in a JSON editor.
//!
//! ## Features
//!
//! - **Single source of truth**: one fetched [`GatewayConfig`], replaced
//!   wholesale on refresh; a failed refresh never discards the last good one
//! - **Live route filtering**: method buttons and a text query, answered
//!   locally without re-fetching
//! - **Expandable route cards**: per-card state keyed by method + path
//! - **Config editor**: CodeMirror mirror of the whole document with
//!   validate/revert
//!
//! ## Configuration
//!
//! The gateway can point the dashboard at its config endpoint:
//!
//! ```html
//! <meta name="tokka:config-url" content="/config">
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                         Browser                          │
//! │  ┌────────────┐   actions   ┌──────────────────────────┐ │
//! │  │ Leptos     │ ──────────► │ DashboardController      │ │
//! │  │ components │             │  ├─ DashboardStore       │ │
//! │  │            │ ◄────────── │  │   (signals)           │ │
//! │  │            │   signals   │  └─ ConfigEditor ──► CM  │ │
//! │  └────────────┘             └───────────┬──────────────┘ │
//! │                                         │ gloo-net       │
//! └─────────────────────────────────────────┼────────────────┘
//!                                           │ GET config
//!                                  ┌────────▼────────┐
//!                                  │  Tokka gateway  │
//!                                  └─────────────────┘
//! ```

pub mod api;
pub mod codemirror;
pub mod components;
pub mod config;
pub mod controller;
pub mod dom;
pub mod editor;
pub mod events;
pub mod filter;
pub mod model;
pub mod sanitize;
pub mod state;
pub mod views;

use leptos::*;

use components::{
    ConfigSection, Header, OverviewSection, PageError, PluginsSection, RoutesSection, Sidebar,
};
use config::DashboardConfig;
pub use model::GatewayConfig;
use state::DashboardState;

/// Main dashboard application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app">
            <Sidebar/>
            <main class="main">
                <Header/>
                <div class="content">
                    <PageError/>
                    <OverviewSection/>
                    <RoutesSection/>
                    <PluginsSection/>
                    <ConfigSection/>
                </div>
            </main>
        </div>
    }
}

/// Mount the application to the DOM and load the configuration
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = DashboardConfig::load();
    if console_log::init_with_level(config.log_level).is_err() {
        web_sys::console::warn_1(&"console logger already initialized".into());
    }

    mount_to_body(move || {
        let state = DashboardState::new(config);
        provide_context(state.clone());
        state.refresh();
        view! { <App/> }
    });
}
