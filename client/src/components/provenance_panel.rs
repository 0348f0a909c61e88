//! Provenance panel: the audit trail of events recorded for a theory.

use leptos::prelude::*;

use crate::components::theory_select::{TheorySelect, picker_signals, use_theory_scoped_list};
use crate::net::api;
use crate::net::types::ProvenanceEvent;
use crate::state::panel::ChildPanelState;
use crate::util::format::{event_data_json, event_icon, event_label, event_opacity, format_timestamp};

#[component]
pub fn ProvenancePanel() -> impl IntoView {
    let state = RwSignal::new(ChildPanelState::<ProvenanceEvent>::default());
    use_theory_scoped_list(state, "provenance", api::list_provenance);
    let (theories, selected, on_select) = picker_signals(state);

    view! {
        <div class="panel panel--provenance">
            <TheorySelect theories=theories selected=selected on_select=on_select/>
            <Show
                when=move || !state.with(ChildPanelState::is_loading)
                fallback=|| view! { <div class="panel__loading">"LOADING PROVENANCE DATA..."</div> }
            >
                <div class="panel__header">
                    <p>"Complete audit trail of all events for this theory."</p>
                    <p>"Total Events: " {move || state.with(|s| s.items.len())}</p>
                </div>
                <Show
                    when=move || state.with(|s| !s.items.is_empty())
                    fallback=|| view! { <div class="panel__empty">"NO PROVENANCE DATA AVAILABLE."</div> }
                >
                    <ul class="record-list record-list--timeline">
                        {move || {
                            let events = state.with(|s| s.items.clone());
                            let len = events.len();
                            events
                                .into_iter()
                                .enumerate()
                                .map(|(idx, event)| view! { <EventItem event=event opacity=event_opacity(idx, len)/> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn EventItem(event: ProvenanceEvent, opacity: f64) -> impl IntoView {
    let user = event.user.filter(|u| !u.is_empty()).map(|u| format!(" | User: {u}"));
    let data = event_data_json(event.event_data.as_ref());

    view! {
        <li class="record record--event" style=format!("opacity: {opacity};")>
            <div class="record__event-head">
                <span class="record__icon">{event_icon(&event.event_type)}</span>
                <span class="record__title">{event_label(&event.event_type)}</span>
            </div>
            <p class="record__meta">{format_timestamp(&event.timestamp)} {user}</p>
            {data.map(|json| view! { <pre class="record__data">{json}</pre> })}
        </li>
    }
}
