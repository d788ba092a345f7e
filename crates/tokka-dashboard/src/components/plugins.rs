//! Plugins section: global plugin list

use leptos::*;

use super::primitives::{EmptyState, Section};
use crate::dom::ids;
use crate::events::Tab;
use crate::state::DashboardState;
use crate::views::plugins::EMPTY_MESSAGE;

#[component]
pub fn PluginsSection() -> impl IntoView {
    let store = expect_context::<DashboardState>().store;
    let entries = create_memo(move |_| store.plugin_entries());

    view! {
        <Section tab=Tab::Plugins>
            <div id=ids::PLUGINS_LIST class="plugins-list" role="list">
                <Show
                    when=move || entries.with(|e| !e.is_empty())
                    fallback=|| view! { <EmptyState message=EMPTY_MESSAGE/> }
                >
                    <For
                        each=move || entries.get().into_iter().enumerate()
                        key=|(index, entry)| (*index, entry.clone())
                        children=|(_, entry)| view! {
                            <div class="plugin-item glass-card" role="listitem">
                                <div class="plugin-name">{entry.name}</div>
                                <div class="plugin-config"><pre>{entry.config}</pre></div>
                            </div>
                        }
                    />
                </Show>
            </div>
        </Section>
    }
}
