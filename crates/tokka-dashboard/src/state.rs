//! Global dashboard state
//!
//! Shared through Leptos context. Components read the
//! [`DashboardStore`] signals directly and route every user action through
//! the [`DashboardController`]. Everything runs on the browser's single
//! event loop.

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;

use crate::api::ApiClient;
use crate::codemirror::CodeMirrorEditor;
use crate::config::DashboardConfig;
use crate::controller::{self, DashboardController, DashboardStore};
use crate::events::Tab;
use crate::model::RouteKey;

/// Controller bound to CodeMirror
pub type WebController = DashboardController<CodeMirrorEditor>;

/// Global dashboard state
#[derive(Clone)]
pub struct DashboardState {
    controller: Rc<WebController>,
    client: Rc<ApiClient>,
    /// Injected dashboard settings
    pub config: Rc<DashboardConfig>,
    /// Signals the components render from
    pub store: DashboardStore,
}

impl DashboardState {
    pub fn new(config: DashboardConfig) -> Self {
        let store = DashboardStore::new();
        let client = ApiClient::from_config(&config);
        Self {
            controller: Rc::new(DashboardController::new(store, CodeMirrorEditor::new())),
            client: Rc::new(client),
            config: Rc::new(config),
            store,
        }
    }

    /// Fetch the configuration again; ignored while a fetch is in flight
    pub fn refresh(&self) {
        let state = self.clone();
        spawn_local(async move {
            controller::refresh(state.controller.as_ref(), state.client.as_ref()).await;
        });
    }

    pub fn select_tab(&self, tab: Tab) {
        self.controller.show_tab(tab);
    }

    pub fn set_query(&self, query: String) {
        self.controller.set_query(query);
    }

    pub fn set_method(&self, method: &str) {
        self.controller.set_method(method);
    }

    /// Toggle the cards of `key`; `details` is the clicked card's details
    /// section
    pub fn toggle_route(&self, key: &RouteKey, details: &web_sys::HtmlElement) {
        if let Err(e) = self.controller.toggle_route(key, details) {
            log::warn!("route card {} not toggled: {}", key, e);
        }
    }

    pub fn validate_config(&self) {
        if let Err(e) = self.controller.validate_editor() {
            log::debug!("editor content rejected: {}", e);
        }
    }

    pub fn revert_config(&self) {
        self.controller.revert_editor();
    }
}
