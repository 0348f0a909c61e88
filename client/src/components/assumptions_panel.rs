//! Assumptions panel: assumptions detected for the selected theory.

use leptos::prelude::*;

use crate::components::theory_select::{TheorySelect, picker_signals, use_theory_scoped_list};
use crate::net::api;
use crate::net::types::Assumption;
use crate::state::panel::ChildPanelState;
use crate::util::format::{format_timestamp, percent, shown_score};

#[component]
pub fn AssumptionsPanel() -> impl IntoView {
    let state = RwSignal::new(ChildPanelState::<Assumption>::default());
    use_theory_scoped_list(state, "assumptions", api::list_assumptions);
    let (theories, selected, on_select) = picker_signals(state);

    view! {
        <div class="panel panel--assumptions">
            <TheorySelect theories=theories selected=selected on_select=on_select/>
            <Show
                when=move || !state.with(ChildPanelState::is_loading)
                fallback=|| view! { <div class="panel__loading">"ANALYZING ASSUMPTIONS..."</div> }
            >
                <div class="panel__header">
                    <p>"Monitor and track assumptions underlying the selected theory."</p>
                    <p>"Total Assumptions Detected: " {move || state.with(|s| s.items.len())}</p>
                </div>
                <Show
                    when=move || state.with(|s| !s.items.is_empty())
                    fallback=|| view! { <div class="panel__empty">"NO ASSUMPTIONS DETECTED FOR THIS THEORY."</div> }
                >
                    <ul class="record-list">
                        {move || {
                            state
                                .with(|s| s.items.clone())
                                .into_iter()
                                .map(|assumption| {
                                    let confidence = shown_score(assumption.confidence_level)
                                        .map(|c| view! { <p class="record__meta">"Confidence: " {percent(c)} "%"</p> });
                                    view! {
                                        <li class="record">
                                            <p class="record__text">{assumption.assumption_text}</p>
                                            {confidence}
                                            <p class="record__meta">"Detected: " {format_timestamp(&assumption.created_at)}</p>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </Show>
        </div>
    }
}
