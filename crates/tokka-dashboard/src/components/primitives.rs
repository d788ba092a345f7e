//! Reusable UI primitive components
//!
//! Building blocks for the dashboard shell:
//! - Sections bound to a sidebar tab
//! - Cards, meta rows and empty states
//! - Search input and toggle buttons

use leptos::*;

use crate::events::Tab;
use crate::state::DashboardState;

// ============================================================================
// Layout
// ============================================================================

/// `<section>` shown only while its tab is active
#[component]
pub fn Section(tab: Tab, children: Children) -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let active_tab = state.store.active_tab;

    view! {
        <section
            id=tab.section_id()
            class="section"
            class:visible=move || active_tab.get() == tab
            aria-label=tab.title()
        >
            {children()}
        </section>
    }
}

/// Card container with a title bar
#[component]
pub fn Card(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="glass-card">
            <div class="card-header">
                <div class="card-title">{title}</div>
            </div>
            {children()}
        </div>
    }
}

/// Label/value pair
#[component]
pub fn MetaRow(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <p class="meta">
            <span class="label">{label}</span>
            <span class="value">{children()}</span>
        </p>
    }
}

/// Card shown in place of an empty list
#[component]
pub fn EmptyState(message: &'static str) -> impl IntoView {
    view! {
        <div class="glass-card empty" role="status">{message}</div>
    }
}

// ============================================================================
// Inputs
// ============================================================================

/// Search input reporting every keystroke
#[component]
pub fn SearchInput(
    id: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, default = "Search...")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="search-bar">
            <div class="search-icon" aria-hidden="true">
                <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor">
                    <path stroke-linecap="round" stroke-linejoin="round" d="m21 21-5.197-5.197m0 0A7.5 7.5 0 1 0 5.196 5.196a7.5 7.5 0 0 0 10.607 10.607Z"/>
                </svg>
            </div>
            <input
                type="search"
                id=id
                placeholder=placeholder
                class="search-input"
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
                aria-label=placeholder
            />
        </div>
    }
}

/// Button that renders as pressed while `active` holds
#[component]
pub fn ToggleButton(
    label: &'static str,
    #[prop(into)] active: Signal<bool>,
    #[prop(into)] on_click: Callback<()>,
    #[prop(optional)] data_method: Option<&'static str>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="toggle-btn"
            class:active=move || active.get()
            aria-pressed=move || active.get().to_string()
            data-method=data_method
            on:click=move |_| on_click.call(())
        >
            {label}
        </button>
    }
}

// ============================================================================
// Icons
// ============================================================================

#[component]
pub fn RefreshIcon() -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" d="M16.023 9.348h4.992v-.001M2.985 19.644v-4.992m0 0h4.992m-4.993 0 3.181 3.183a8.25 8.25 0 0 0 13.803-3.7M4.031 9.865a8.25 8.25 0 0 1 13.803-3.7l3.181 3.182m0-4.991v4.99"/>
        </svg>
    }
}
