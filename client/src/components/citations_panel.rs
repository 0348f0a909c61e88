//! Citations panel: per-theory citations with add and validate actions.

use leptos::prelude::*;

use crate::components::theory_select::{TheorySelect, picker_signals, use_theory_scoped_list};
use crate::net::api;
use crate::net::types::{Citation, CitationId};
use crate::state::citations::CitationsState;
use crate::util::format::{citation_status_class, citation_status_label};

#[component]
pub fn CitationsPanel() -> impl IntoView {
    let state = RwSignal::new(CitationsState::default());
    let reload = use_theory_scoped_list(state, "citations", api::list_citations);
    let (theories, selected, on_select) = picker_signals(state);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(theory_id) = state.with_untracked(|s| s.panel.selected()) else {
            return;
        };
        let body = match state.with_untracked(|s| s.draft.to_create()) {
            Ok(body) => body,
            Err(e) => {
                leptos::logging::warn!("citation not submitted: {e}");
                return;
            }
        };
        leptos::task::spawn_local(async move {
            match api::add_citation(theory_id, &body).await {
                Ok(_) => state.update(CitationsState::citation_added),
                Err(e) => leptos::logging::error!("Failed to add citation: {e}"),
            }
            reload.run(());
        });
    };

    let on_validate = Callback::new(move |citation_id: CitationId| {
        if !state.try_update(|s| s.begin_validate(citation_id)).unwrap_or(false) {
            return;
        }
        leptos::task::spawn_local(async move {
            if let Err(e) = api::validate_citation(citation_id).await {
                leptos::logging::error!("Failed to validate citation: {e}");
            }
            reload.run(());
            state.update(|s| s.end_validate(citation_id));
        });
    });

    let form_open = move || state.with(|s| s.show_form);

    view! {
        <div class="panel panel--citations">
            <TheorySelect theories=theories selected=selected on_select=on_select/>
            <div class="panel__toolbar">
                <button class="terminal-button" on:click=move |_| state.update(CitationsState::toggle_form)>
                    {move || if form_open() { "[ CANCEL ]" } else { "[ + ADD CITATION ]" }}
                </button>
            </div>
            <Show when=form_open>
                <form class="panel__form" on:submit=on_submit>
                    <label class="panel__field">
                        "Citation Text:"
                        <textarea
                            required=true
                            rows="3"
                            placeholder="Enter citation text..."
                            prop:value=move || state.with(|s| s.draft.citation_text.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                state.update(|s| s.draft.citation_text = value);
                            }
                        ></textarea>
                    </label>
                    <label class="panel__field">
                        "Source:"
                        <input
                            type="text"
                            placeholder="Enter source (optional)..."
                            prop:value=move || state.with(|s| s.draft.source.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                state.update(|s| s.draft.source = value);
                            }
                        />
                    </label>
                    <button class="terminal-button" type="submit">"[ SUBMIT ]"</button>
                </form>
            </Show>
            <Show
                when=move || !state.with(|s| s.panel.is_loading())
                fallback=|| view! { <div class="panel__loading">"LOADING CITATIONS..."</div> }
            >
                <ul class="record-list">
                    {move || {
                        state
                            .with(|s| s.panel.items.clone())
                            .into_iter()
                            .map(|citation| view! { <CitationItem citation=citation state=state on_validate=on_validate/> })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
            <Show when=move || state.with(CitationsState::show_empty_state)>
                <div class="panel__empty">"NO CITATIONS FOUND. ADD ONE TO GET STARTED."</div>
            </Show>
        </div>
    }
}

#[component]
fn CitationItem(
    citation: Citation,
    state: RwSignal<CitationsState>,
    on_validate: Callback<CitationId>,
) -> impl IntoView {
    let id = citation.id;
    let status = citation_status_label(&citation.validation_status, citation.confidence_score);
    let status_class = citation_status_class(&citation.validation_status);
    let source = citation.source.filter(|s| !s.is_empty());
    let validating = move || state.with(|s| s.is_validating(id));

    let analysis = citation.validation_result.map(|result| {
        let suggestions = (!result.suggestions.is_empty()).then(|| result.suggestions.join(", "));
        view! {
            <div class="record__analysis">
                <p>"Analysis: " {result.analysis}</p>
                {suggestions.map(|s| view! { <p>"Suggestions: " {s}</p> })}
            </div>
        }
    });

    view! {
        <li class="record">
            <div class=status_class>{status}</div>
            <p class="record__text">{citation.citation_text}</p>
            {source.map(|s| view! { <p class="record__meta">"Source: " {s}</p> })}
            {analysis}
            <div class="record__actions">
                <button class="terminal-button" disabled=validating on:click=move |_| on_validate.run(id)>
                    {move || if validating() { "[ VALIDATING... ]" } else { "[ VALIDATE ]" }}
                </button>
            </div>
        </li>
    }
}
