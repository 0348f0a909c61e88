//! Theories panel: list, create, edit and delete research theories.
//!
//! Every write is followed by a list refetch whatever its outcome, so the
//! panel always reflects the backend after a write settles.

use leptos::prelude::*;

use crate::net::api::{self, ApiError};
use crate::net::types::{Theory, TheoryId};
use crate::state::theories::{FormMode, TheoriesState, TheoryWrite};
use crate::util::format::{author_label, format_timestamp};

#[component]
pub fn TheoriesPanel() -> impl IntoView {
    let state = RwSignal::new(TheoriesState::default());

    let reload = move || {
        let Some(ticket) = state.try_update(TheoriesState::begin_load) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = api::list_theories().await;
            if let Err(e) = &result {
                leptos::logging::error!("Failed to load theories: {e}");
            }
            state.update(|s| {
                if !s.finish_load(ticket, result) {
                    leptos::logging::log!("discarded stale theories response");
                }
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = ticket;
    };
    reload();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (form, draft) = state.with_untracked(|s| (s.form, s.draft.clone()));
        match form {
            FormMode::Hidden => {}
            FormMode::Create => match draft.to_create() {
                Err(e) => state.update(|s| s.draft_rejected(&e)),
                Ok(body) => leptos::task::spawn_local(async move {
                    let result = api::create_theory(&body).await;
                    settle_write(state, TheoryWrite::Create, result.map(|_| ()));
                    reload();
                }),
            },
            FormMode::Edit(id) => {
                let Some(original) = state.with_untracked(|s| s.theory(id).cloned()) else {
                    state.update(TheoriesState::edit_target_lost);
                    return;
                };
                match draft.to_update(&original) {
                    Err(e) => state.update(|s| s.draft_rejected(&e)),
                    Ok(body) if body.is_empty() => state.update(TheoriesState::write_succeeded),
                    Ok(body) => leptos::task::spawn_local(async move {
                        let result = api::update_theory(id, &body).await;
                        settle_write(state, TheoryWrite::Update, result.map(|_| ()));
                        reload();
                    }),
                }
            }
        }
    };

    let on_delete = Callback::new(move |id: TheoryId| {
        leptos::task::spawn_local(async move {
            match api::delete_theory(id).await {
                Ok(()) => state.update(|s| s.deleted(id)),
                Err(e) => settle_write(state, TheoryWrite::Delete, Err(e)),
            }
            reload();
        });
    });
    let on_edit = Callback::new(move |theory: Theory| state.update(|s| s.start_edit(&theory)));

    let form_open = move || state.with(|s| s.form != FormMode::Hidden);
    let notice = move || state.with(|s| s.notice.as_ref().map(|n| n.message().to_owned()));

    view! {
        <div class="panel panel--theories">
            <Show
                when=move || !state.with(TheoriesState::is_loading)
                fallback=|| view! { <div class="panel__loading">"LOADING THEORIES..."</div> }
            >
                <div class="panel__toolbar">
                    <button class="terminal-button" on:click=move |_| state.update(TheoriesState::toggle_form)>
                        {move || if form_open() { "[ CANCEL ]" } else { "[ + NEW THEORY ]" }}
                    </button>
                </div>
                {move || notice().map(|message| view! { <div class="panel__error">{message}</div> })}
                <Show when=form_open>
                    <TheoryForm state=state on_submit=on_submit/>
                </Show>
                <ul class="record-list">
                    {move || {
                        state
                            .with(|s| s.theories.clone())
                            .into_iter()
                            .map(|theory| view! { <TheoryItem theory=theory on_edit=on_edit on_delete=on_delete/> })
                            .collect::<Vec<_>>()
                    }}
                </ul>
                <Show when=move || state.with(TheoriesState::show_empty_state)>
                    <div class="panel__empty">"NO THEORIES FOUND. CREATE ONE TO GET STARTED."</div>
                </Show>
            </Show>
        </div>
    }
}

fn settle_write(state: RwSignal<TheoriesState>, write: TheoryWrite, result: Result<(), ApiError>) {
    match result {
        Ok(()) => state.update(TheoriesState::write_succeeded),
        Err(e) => {
            leptos::logging::error!("theory {write:?} failed: {e}");
            state.update(|s| s.write_failed(write, &e));
        }
    }
}

#[component]
fn TheoryForm<F>(state: RwSignal<TheoriesState>, on_submit: F) -> impl IntoView
where
    F: Fn(leptos::ev::SubmitEvent) + Copy + 'static,
{
    view! {
        <form class="panel__form" on:submit=on_submit>
            <label class="panel__field">
                "Title:"
                <input
                    type="text"
                    required=true
                    placeholder="Enter theory title..."
                    prop:value=move || state.with(|s| s.draft.title.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.draft.title = value);
                    }
                />
            </label>
            <label class="panel__field">
                "Author:"
                <input
                    type="text"
                    placeholder="Enter author name..."
                    prop:value=move || state.with(|s| s.draft.author.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.draft.author = value);
                    }
                />
            </label>
            <label class="panel__field">
                "Content:"
                <textarea
                    required=true
                    rows="5"
                    placeholder="Enter theory content..."
                    prop:value=move || state.with(|s| s.draft.content.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.draft.content = value);
                    }
                ></textarea>
            </label>
            <button class="terminal-button" type="submit">"[ SUBMIT ]"</button>
        </form>
    }
}

#[component]
fn TheoryItem(theory: Theory, on_edit: Callback<Theory>, on_delete: Callback<TheoryId>) -> impl IntoView {
    let id = theory.id;
    let author = author_label(theory.author.as_deref()).to_owned();
    let created = format_timestamp(&theory.created_at);
    let counts = format!(
        "Citations: {} | Provenance Events: {}",
        theory.citations.len(),
        theory.provenances.len()
    );
    let title = theory.title.clone();

    view! {
        <li class="record">
            <h3 class="record__title">{title}</h3>
            <p class="record__meta">"by " {author}</p>
            <p class="record__meta">"Created: " {created}</p>
            <p class="record__meta">{counts}</p>
            <div class="record__actions">
                <button class="terminal-button" on:click=move |_| on_edit.run(theory.clone())>"[ EDIT ]"</button>
                <button class="terminal-button terminal-button--danger" on:click=move |_| on_delete.run(id)>
                    "[ DELETE ]"
                </button>
            </div>
        </li>
    }
}
