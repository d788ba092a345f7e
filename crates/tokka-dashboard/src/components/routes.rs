//! Routes section
//!
//! Search input, method filter buttons and the filtered route cards.
//! Cards are keyed by document revision and route index, so filter changes
//! reuse them and a refresh rebuilds them.

use leptos::*;

use super::primitives::{EmptyState, MetaRow, SearchInput, Section, ToggleButton};
use crate::dom::ids;
use crate::events::Tab;
use crate::filter::{ALL_METHODS, KNOWN_METHODS};
use crate::state::DashboardState;
use crate::views::routes::{RouteCard, SettingsLine, EMPTY_MESSAGE, NO_PLUGINS_MESSAGE};

#[component]
pub fn RoutesSection() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let store = state.store;
    let method_filter = store.method_filter;
    let visible = create_memo(move |_| store.route_cards());

    let on_query = {
        let state = state.clone();
        move |query: String| state.set_query(query)
    };

    let buttons = std::iter::once(ALL_METHODS)
        .chain(KNOWN_METHODS)
        .map(|method| {
            let state = state.clone();
            view! {
                <ToggleButton
                    label=method
                    data_method=method
                    active=Signal::derive(move || method_filter.with(|m| m.as_str() == method))
                    on_click=move |_| state.set_method(method)
                />
            }
        })
        .collect_view();

    view! {
        <Section tab=Tab::Routes>
            <div class="routes-toolbar">
                <SearchInput
                    id=ids::ROUTE_FILTER
                    value=store.route_query
                    on_input=on_query
                    placeholder="Filter by path or method..."
                />
                <div id=ids::METHOD_FILTER class="method-filter" role="group" aria-label="Method filter">
                    {buttons}
                </div>
            </div>
            <div id=ids::ROUTES_LIST class="routes-list">
                <Show
                    when=move || visible.with(|cards| !cards.is_empty())
                    fallback=|| view! { <EmptyState message=EMPTY_MESSAGE/> }
                >
                    <For
                        each=move || visible.get()
                        key=|card| (card.revision, card.index)
                        children=|card| view! { <RouteCardView card=card/> }
                    />
                </Show>
            </div>
        </Section>
    }
}

/// Collapsible card for one route
#[component]
fn RouteCardView(card: RouteCard) -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let cards = state.store.cards;
    let details_ref = create_node_ref::<html::Div>();

    let RouteCard {
        key,
        method,
        method_class,
        path,
        plugin_count,
        backend_count,
        details,
        backends,
        plugins,
        middlewares,
        ..
    } = card;

    let is_open = {
        let key = key.clone();
        move || cards.with(|c| c.get(&key).is_open())
    };
    let glyph = {
        let key = key.clone();
        move || cards.with(|c| c.get(&key).glyph())
    };
    let style = {
        let key = key.clone();
        move || cards.with(|c| c.style(&key).inline())
    };
    let on_toggle = move |_| {
        if let Some(element) = details_ref.get_untracked() {
            state.toggle_route(&key, &element);
        }
    };

    let plugin_lines = if plugins.is_empty() {
        view! {
            <div class="route-plugin-item bare">
                <span class="plugin-config-compact">{NO_PLUGINS_MESSAGE}</span>
            </div>
        }
        .into_view()
    } else {
        plugins
            .into_iter()
            .map(|line| view! { <SettingsItem line=line/> })
            .collect_view()
    };

    let middleware_block = (!middlewares.is_empty()).then(|| {
        view! {
            <>
                <div class="meta section"><span class="label">"Middlewares:"</span></div>
                <div class="route-plugins-list">
                    {middlewares
                        .into_iter()
                        .map(|line| view! { <SettingsItem line=line/> })
                        .collect_view()}
                </div>
            </>
        }
    });

    view! {
        <div class="route-card" class:open=is_open>
            <div class="route-header" on:click=on_toggle>
                <div class="left">
                    <div class=format!("method {}", method_class)>{method}</div>
                    <div class="path">{path}</div>
                    <span class="meta-badge plugins-count" title=format!("{} plugins", plugin_count)>
                        <span class="label">"🔌"</span>" "{plugin_count}
                    </span>
                    <span class="meta-badge backends-count" title=format!("{} backends", backend_count)>
                        <span class="label">"🔗"</span>" "{backend_count}
                    </span>
                </div>
                <div class="right"><span class="toggle">{glyph}</span></div>
            </div>
            <div class="route-details" node_ref=details_ref style=style>
                {details
                    .into_iter()
                    .map(|item| view! { <MetaRow label=item.label>{item.value}</MetaRow> })
                    .collect_view()}
                <div class="meta section"><span class="label">"Backends:"</span></div>
                <div class="backends-grid">
                    <div class="header">"METHOD"</div>
                    <div class="header">"URL"</div>
                    <div class="header">"TIMEOUT"</div>
                    {backends
                        .into_iter()
                        .map(|row| view! {
                            <>
                                <div class="backend-method">{row.method}</div>
                                <div class="backend-url">{row.url}</div>
                                <div class="backend-timeout">{row.timeout}</div>
                            </>
                        })
                        .collect_view()}
                </div>
                <div class="meta section"><span class="label">"Plugins:"</span></div>
                <div class="route-plugins-list">{plugin_lines}</div>
                {middleware_block}
            </div>
        </div>
    }
}

/// Plugin or middleware name with its compact settings
#[component]
fn SettingsItem(line: SettingsLine) -> impl IntoView {
    view! {
        <div class="route-plugin-item">
            <span class="plugin-name-badge">{line.name}</span>
            {line.optional.then(|| view! { <span class="meta-badge">"optional"</span> })}
            <span class="plugin-config-compact">{line.summary}</span>
        </div>
    }
}
