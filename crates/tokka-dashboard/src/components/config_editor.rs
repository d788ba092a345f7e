//! Configuration section
//!
//! Hosts the `#config-editor` textarea that CodeMirror replaces on first
//! load, plus read-only validate/revert actions. Nothing here writes the
//! configuration back to the gateway.

use leptos::*;

use super::primitives::Section;
use crate::dom::ids;
use crate::events::Tab;
use crate::state::DashboardState;

#[component]
pub fn ConfigSection() -> impl IntoView {
    let state = expect_context::<DashboardState>();
    let store = state.store;
    let validate_state = state.clone();

    view! {
        <Section tab=Tab::Config>
            <div class="glass-card editor-card">
                <div class="card-header">
                    <div class="card-title">
                        "Configuration "
                        <span id=ids::CONFIG_VERSION class="version-tag">
                            {move || store.version_label()}
                        </span>
                    </div>
                    <div class="editor-actions">
                        <button
                            id=ids::VALIDATE_CONFIG
                            type="button"
                            class="btn btn-secondary"
                            on:click=move |_| validate_state.validate_config()
                        >
                            "Validate"
                        </button>
                        <button
                            id=ids::REVERT_CONFIG
                            type="button"
                            class="btn btn-secondary"
                            on:click=move |_| state.revert_config()
                        >
                            "Revert"
                        </button>
                    </div>
                </div>
                <textarea id=ids::CONFIG_EDITOR spellcheck="false"></textarea>
                <p id=ids::CONFIG_STATUS class="config-status" aria-live="polite">
                    {move || store.editor_status.get()}
                </p>
            </div>
        </Section>
    }
}
