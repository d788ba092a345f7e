//! Header component
//!
//! The top bar showing:
//! - Current section title
//! - Gateway info line and version tag
//! - Gateway status badge
//! - Manual refresh button, disabled while a fetch is in flight

use leptos::*;

use super::primitives::RefreshIcon;
use crate::dom::ids;
use crate::state::DashboardState;
use crate::views::error;

/// Page header with status and refresh button
#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let store = state.store;
    let active_tab = store.active_tab;
    let status = store.status;
    let is_refreshing = store.is_refreshing;

    let refresh = move |_| state.refresh();

    view! {
        <header class="header" role="banner">
            <div class="header-left">
                <h1 class="header-title" aria-live="polite">
                    {move || active_tab.get().title()}
                </h1>
                <span id=ids::GATEWAY_INFO class="gateway-info">
                    {move || store.gateway_info()}
                </span>
            </div>
            <div class="header-right">
                <span id=ids::VERSION_TAG class="version-tag">
                    {move || store.version_label()}
                </span>
                <span
                    id=ids::SERVER_STATUS
                    class=move || status.get().class()
                    role="status"
                    aria-live="polite"
                >
                    {move || status.get().label()}
                </span>
                <button
                    id=ids::REFRESH
                    class="refresh-btn"
                    class:loading=move || is_refreshing.get()
                    on:click=refresh
                    title="Reload configuration"
                    aria-label="Reload configuration"
                    disabled=move || is_refreshing.get()
                >
                    <RefreshIcon/>
                </button>
            </div>
        </header>
    }
}

/// Full-page error surface, visible while the last fetch failed
#[component]
pub fn PageError() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let load_error = state.store.load_error;

    view! {
        <div
            id=ids::PAGE_ERROR
            class="page-error"
            class:visible=move || load_error.with(Option::is_some)
            role="alert"
            inner_html=move || load_error.get().map(|e| error::markup(&e)).unwrap_or_default()
        ></div>
    }
}
