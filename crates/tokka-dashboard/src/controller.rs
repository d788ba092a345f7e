//! Dashboard controller
//!
//! Owns the reactive [`DashboardStore`] the components render from and the
//! configuration editor. The controller never touches the DOM directly:
//! views react to the store, the editor is reached through
//! [`EditorSurface`] and route cards through [`CardElement`].
//!
//! Lifecycle of a refresh:
//!
//! ```text
//! begin_refresh ──► (fetch in flight, further triggers ignored) ──► finish_refresh
//!                                                                    │
//!                         Ok(doc): replace document, re-render all ◄─┤
//!                 Err(e): error surface, status stopped, keep doc  ◄─┘
//! ```

use std::cell::RefCell;

use leptos::*;

use crate::api::{ApiError, ConfigSource};
use crate::dom::{CardElement, RenderError};
use crate::editor::{ConfigEditor, EditorError, EditorSurface};
use crate::events::{Tab, UiEvent, UiListener};
use crate::filter::{MethodFilter, RouteFilter};
use crate::model::{GatewayConfig, RouteKey};
use crate::views::card::{CardStates, Transition};
use crate::views::plugins::PluginEntry;
use crate::views::routes::{visible_cards, RouteCard};
use crate::views::server::{self, ServerStatus};
use crate::views::{header, plugins, InfoItem};

pub const VALID_MESSAGE: &str = "Configuration is valid.";
pub const REVERTED_MESSAGE: &str = "Reverted.";
pub const UNCHANGED_MESSAGE: &str = "No changes to revert.";

// ============================================================================
// Store
// ============================================================================

/// Reactive dashboard state
///
/// Every field is a signal, so the store is `Copy` and can be captured by
/// any number of view closures.
#[derive(Clone, Copy)]
pub struct DashboardStore {
    /// Last good configuration; `None` until the first successful fetch
    pub document: RwSignal<Option<GatewayConfig>>,
    /// Bumped whenever `document` is replaced
    pub revision: RwSignal<u64>,
    pub status: RwSignal<ServerStatus>,
    /// Message of the last failed fetch, cleared by the next success
    pub load_error: RwSignal<Option<String>>,
    pub active_tab: RwSignal<Tab>,
    /// A fetch is in flight
    pub is_refreshing: RwSignal<bool>,
    pub method_filter: RwSignal<MethodFilter>,
    pub route_query: RwSignal<String>,
    pub cards: RwSignal<CardStates>,
    /// Outcome of the last editor action
    pub editor_status: RwSignal<String>,
}

impl DashboardStore {
    pub fn new() -> Self {
        Self {
            document: create_rw_signal(None),
            revision: create_rw_signal(0),
            status: create_rw_signal(ServerStatus::default()),
            load_error: create_rw_signal(None),
            active_tab: create_rw_signal(Tab::default()),
            is_refreshing: create_rw_signal(false),
            method_filter: create_rw_signal(MethodFilter::All),
            route_query: create_rw_signal(String::new()),
            cards: create_rw_signal(CardStates::default()),
            editor_status: create_rw_signal(String::new()),
        }
    }

    /// Run `f` on the document the views show: the last good one, or the
    /// empty placeholder before anything was loaded
    pub fn with_shown<R>(&self, f: impl FnOnce(&GatewayConfig) -> R) -> R {
        self.document.with(|doc| match doc {
            Some(cfg) => f(cfg),
            None => f(&GatewayConfig::placeholder()),
        })
    }

    pub fn filter(&self) -> RouteFilter {
        RouteFilter::new(self.method_filter.get(), self.route_query.get())
    }

    pub fn route_cards(&self) -> Vec<RouteCard> {
        let filter = self.filter();
        let revision = self.revision.get();
        self.with_shown(|cfg| visible_cards(&cfg.routes, &filter, revision))
    }

    pub fn plugin_entries(&self) -> Vec<PluginEntry> {
        self.with_shown(|cfg| plugins::entries(&cfg.plugins))
    }

    pub fn server_rows(&self) -> Vec<InfoItem> {
        self.with_shown(server::info_rows)
    }

    pub fn version_label(&self) -> String {
        self.document.with(|doc| header::version_label(doc.as_ref()))
    }

    /// Empty until a document was loaded
    pub fn gateway_info(&self) -> String {
        self.document
            .with(|doc| doc.as_ref().map(header::gateway_info).unwrap_or_default())
    }
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Orchestrates fetch results, the store and the editor
pub struct DashboardController<E> {
    store: DashboardStore,
    editor: RefCell<ConfigEditor<E>>,
}

impl<E: EditorSurface> DashboardController<E> {
    pub fn new(store: DashboardStore, editor: E) -> Self {
        Self {
            store,
            editor: RefCell::new(ConfigEditor::new(editor)),
        }
    }

    pub fn store(&self) -> DashboardStore {
        self.store
    }

    // ========================================================================
    // Refresh
    // ========================================================================

    /// Claim the fetch slot; false while another fetch is in flight
    pub fn begin_refresh(&self) -> bool {
        if self.store.is_refreshing.get_untracked() {
            log::debug!("refresh ignored: fetch already in flight");
            return false;
        }
        self.store.is_refreshing.set(true);
        true
    }

    /// Apply the outcome of the fetch started by [`begin_refresh`](Self::begin_refresh)
    pub fn finish_refresh(&self, result: Result<GatewayConfig, ApiError>) {
        match result {
            Ok(cfg) => self.apply_document(cfg),
            Err(e) => self.apply_failure(&e),
        }
        self.store.is_refreshing.set(false);
    }

    /// Replace the document; every view re-renders from it
    pub fn apply_document(&self, cfg: GatewayConfig) {
        log::info!(
            "configuration loaded: {} routes, {} global plugins",
            cfg.routes.len(),
            cfg.plugins.len()
        );

        self.load_editor(&cfg);
        self.store.editor_status.set(String::new());
        self.store.load_error.set(None);
        self.store.status.set(ServerStatus::Running);
        self.store.cards.update(CardStates::reset);
        self.store.revision.update(|n| *n += 1);
        self.store.document.set(Some(cfg));
    }

    /// Surface a failed fetch; the last good document stays in place
    pub fn apply_failure(&self, err: &ApiError) {
        log::error!("dashboard init failed: {}", err);

        if self.store.document.with_untracked(Option::is_none) {
            self.load_editor(&GatewayConfig::placeholder());
        }
        self.store.status.set(ServerStatus::Stopped);
        self.store.load_error.set(Some(err.to_string()));
    }

    fn load_editor(&self, cfg: &GatewayConfig) {
        let result = self.editor.borrow_mut().load(cfg);
        if let Err(e) = result {
            log::warn!("config editor not loaded: {}", e);
        }
    }

    // ========================================================================
    // Interaction
    // ========================================================================

    /// Text query typed into the route filter
    pub fn set_query(&self, query: String) {
        self.store.cards.update(CardStates::reset);
        self.store.route_query.set(query);
    }

    /// Value of a method filter button (`ALL` or a verb)
    pub fn set_method(&self, method: &str) {
        self.store.cards.update(CardStates::reset);
        self.store.method_filter.set(MethodFilter::parse(method));
    }

    /// Expand or collapse the cards of `key`, measuring `card`
    ///
    /// The state only changes once the element accepted the transition.
    pub fn toggle_route<C: CardElement + ?Sized>(
        &self,
        key: &RouteKey,
        card: &C,
    ) -> Result<Transition, RenderError> {
        let height = card.content_height()?;
        let transition = self.store.cards.with_untracked(|cards| cards.preview(key, height));
        if let Some(px) = transition.pin_height_px {
            card.pin_height(px)?;
        }
        self.store.cards.update(|cards| cards.commit(key, &transition));
        Ok(transition)
    }

    /// Switch sections and tell listeners the new one became visible
    pub fn show_tab(&self, tab: Tab) {
        self.store.active_tab.set(tab);
        self.emit(UiEvent::TabShown(tab));
    }

    fn emit(&self, event: UiEvent) {
        self.editor.borrow_mut().on_event(&event);
    }

    /// Check the editor content parses as a configuration
    pub fn validate_editor(&self) -> Result<(), EditorError> {
        let result = self.editor.borrow().validate().map(|_| ());
        let message = match &result {
            Ok(()) => VALID_MESSAGE.to_string(),
            Err(e) => e.to_string(),
        };
        self.store.editor_status.set(message);
        result
    }

    /// Discard editor changes by reloading the current document
    pub fn revert_editor(&self) {
        if !self.editor.borrow().is_modified() {
            self.store.editor_status.set(UNCHANGED_MESSAGE.to_string());
            return;
        }
        let cfg = self
            .store
            .document
            .get_untracked()
            .unwrap_or_else(GatewayConfig::placeholder);
        let result = self.editor.borrow_mut().load(&cfg);
        match result {
            Ok(()) => self.store.editor_status.set(REVERTED_MESSAGE.to_string()),
            Err(e) => {
                log::warn!("config editor not reverted: {}", e);
                self.store.editor_status.set(e.to_string());
            }
        }
    }
}

/// Run one refresh cycle
///
/// Returns false when the trigger was ignored because a fetch was already
/// in flight.
pub async fn refresh<E, S>(controller: &DashboardController<E>, source: &S) -> bool
where
    E: EditorSurface,
    S: ConfigSource,
{
    if !controller.begin_refresh() {
        return false;
    }
    let result = source.fetch_config().await;
    controller.finish_refresh(result);
    true
}
