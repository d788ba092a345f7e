//! Overview section: gateway listener settings

use leptos::*;

use super::primitives::{Card, MetaRow, Section};
use crate::dom::ids;
use crate::events::Tab;
use crate::state::DashboardState;

#[component]
pub fn OverviewSection() -> impl IntoView {
    let store = expect_context::<DashboardState>().store;

    view! {
        <Section tab=Tab::Overview>
            <Card title="Server">
                <div id=ids::SERVER_INFO class="server-info">
                    {move || {
                        store
                            .server_rows()
                            .into_iter()
                            .map(|row| view! { <MetaRow label=row.label>{row.value}</MetaRow> })
                            .collect_view()
                    }}
                </div>
            </Card>
        </Section>
    }
}
