//! Sidebar navigation component
//!
//! One button per section. Switching sections goes through
//! [`DashboardState::select_tab`] so components hidden until now get their
//! "became visible" event.

use leptos::*;

use crate::events::Tab;
use crate::state::DashboardState;

/// Sidebar navigation with branding and build version
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let active_tab = state.store.active_tab;
    let build_version = state
        .config
        .version
        .clone()
        .map(|v| format!("v{}", v))
        .unwrap_or_default();

    view! {
        <aside class="sidebar" role="navigation" aria-label="Main navigation">
            <div class="logo" aria-label="Tokka Dashboard">
                <div class="logo-icon" aria-hidden="true">"T"</div>
                <span class="logo-text">"Tokka"</span>
                <span class="logo-version">{build_version}</span>
            </div>

            <nav class="nav" aria-label="Primary">
                {Tab::ALL
                    .into_iter()
                    .map(|tab| {
                        let state = state.clone();
                        view! {
                            <button
                                type="button"
                                class="nav-link"
                                class:active=move || active_tab.get() == tab
                                data-section=tab.section_id()
                                on:click=move |_| state.select_tab(tab)
                            >
                                {tab.title()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
