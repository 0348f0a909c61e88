//! Theory picker shared by the dependent panels.
//!
//! ARCHITECTURE
//! ============
//! `use_theory_scoped_list` wires the load lifecycle every dependent panel
//! shares: fetch the theory list once on mount, then refetch the child list
//! whenever the selected theory changes. Child fetches go through the panel's
//! fetch gate so only the latest request may commit. Only the mount-time
//! fetch is gated on `hydrate`; effects and handlers never run on the server.

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::{Theory, TheoryId};
use crate::state::panel::{ChildPanel, parse_selection};

/// `<select>` listing every theory by title.
#[component]
pub fn TheorySelect(
    theories: Signal<Vec<Theory>>,
    selected: Signal<Option<TheoryId>>,
    on_select: Callback<TheoryId>,
) -> impl IntoView {
    view! {
        <label class="theory-select">
            <span class="theory-select__label">"Select Theory:"</span>
            <select
                class="theory-select__input"
                prop:value=move || selected.get().map(|id| id.to_string()).unwrap_or_default()
                on:change=move |ev| {
                    if let Some(id) = parse_selection(&event_target_value(&ev)) {
                        on_select.run(id);
                    }
                }
            >
                {move || {
                    theories
                        .get()
                        .into_iter()
                        .map(|theory| {
                            let id = theory.id;
                            view! {
                                <option value=id.to_string() selected=move || selected.get() == Some(id)>
                                    {theory.title}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
        </label>
    }
}

/// Drive a dependent panel's theory list and child fetches.
///
/// Returns a callback that refetches the child list for the current
/// selection, for use after writes.
pub fn use_theory_scoped_list<S, F, Fut>(state: RwSignal<S>, what: &'static str, load: F) -> Callback<()>
where
    S: ChildPanel + Send + Sync + 'static,
    S::Item: Send + Sync + 'static,
    F: Fn(TheoryId) -> Fut + Copy + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<S::Item>, ApiError>> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match api::list_theories().await {
            Ok(theories) => state.update(|s| s.panel_mut().picker.receive(theories)),
            Err(e) => leptos::logging::error!("Failed to load theories: {e}"),
        }
    });

    let fetch = move |theory_id: TheoryId| {
        let Some(ticket) = state.try_update(|s| s.panel_mut().begin_load(theory_id)) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = load(ticket.parent).await;
            if let Err(e) = &result {
                leptos::logging::error!("Failed to load {what}: {e}");
            }
            state.update(|s| {
                if !s.panel_mut().finish_load(ticket, result) {
                    leptos::logging::log!("discarded stale {what} response for theory {}", ticket.parent);
                }
            });
        });
    };

    let selected = Memo::new(move |_| state.with(|s| s.panel().selected()));
    Effect::new(move || {
        if let Some(theory_id) = selected.get() {
            fetch(theory_id);
        }
    });

    Callback::new(move |()| {
        if let Some(theory_id) = state.try_with_untracked(|s| s.panel().selected()).flatten() {
            fetch(theory_id);
        }
    })
}

/// Picker props derived from a dependent panel's state.
pub fn picker_signals<S>(state: RwSignal<S>) -> (Signal<Vec<Theory>>, Signal<Option<TheoryId>>, Callback<TheoryId>)
where
    S: ChildPanel + Send + Sync + 'static,
{
    let theories = Signal::derive(move || state.with(|s| s.panel().picker.theories.clone()));
    let selected = Signal::derive(move || state.with(|s| s.panel().selected()));
    let on_select = Callback::new(move |id| {
        state.update(|s| {
            s.panel_mut().picker.select(id);
        });
    });
    (theories, selected, on_select)
}
