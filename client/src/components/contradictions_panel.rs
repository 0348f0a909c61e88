//! Contradictions panel: a severity heat map over the detected contradictions.

use leptos::prelude::*;

use crate::components::theory_select::{TheorySelect, picker_signals, use_theory_scoped_list};
use crate::net::api;
use crate::net::types::Contradiction;
use crate::state::panel::ChildPanelState;
use crate::util::format::{SeverityTone, format_timestamp, heat_cells, severity_percent};

#[component]
pub fn ContradictionsPanel() -> impl IntoView {
    let state = RwSignal::new(ChildPanelState::<Contradiction>::default());
    use_theory_scoped_list(state, "contradictions", api::list_contradictions);
    let (theories, selected, on_select) = picker_signals(state);

    view! {
        <div class="panel panel--contradictions">
            <TheorySelect theories=theories selected=selected on_select=on_select/>
            <Show
                when=move || !state.with(ChildPanelState::is_loading)
                fallback=|| view! { <div class="panel__loading">"ANALYZING CONTRADICTIONS..."</div> }
            >
                <div class="heat-map">
                    <h4 class="heat-map__title">"CONTRADICTION HEAT MAP"</h4>
                    <div class="heat-map__grid">
                        {move || {
                            state
                                .with(|s| heat_cells(&s.items))
                                .into_iter()
                                .map(|cell| {
                                    let style = format!("background: {}; border-color: {};", cell.background, cell.border);
                                    view! {
                                        <div class="heat-map__cell" style=style title=cell.title>
                                            {cell.label}
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </div>
                <Show
                    when=move || state.with(|s| !s.items.is_empty())
                    fallback=|| {
                        view! { <div class="panel__empty">"NO CONTRADICTIONS DETECTED. THEORY APPEARS CONSISTENT."</div> }
                    }
                >
                    <ul class="record-list">
                        {move || {
                            state
                                .with(|s| s.items.clone())
                                .into_iter()
                                .map(|contradiction| {
                                    let color = format!("color: {};", SeverityTone::of(contradiction.severity).css_color());
                                    view! {
                                        <li class="record">
                                            <p class="record__severity" style=color>
                                                "⚠ SEVERITY: " {severity_percent(contradiction.severity)} "%"
                                            </p>
                                            <p class="record__text">{contradiction.contradiction_text}</p>
                                            <p class="record__meta">
                                                "Detected: " {format_timestamp(&contradiction.created_at)}
                                            </p>
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
