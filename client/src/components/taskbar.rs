//! Bottom taskbar with one launcher per catalog module.

use leptos::prelude::*;

use crate::state::catalog::CATALOG;
use crate::state::desk::{DeskState, taskbar_action};

#[component]
pub fn Taskbar() -> impl IntoView {
    let desk = expect_context::<RwSignal<DeskState>>();

    view! {
        <nav class="taskbar">
            {CATALOG
                .iter()
                .map(|module| {
                    let id = module.id;
                    view! {
                        <button
                            class=format!("taskbar__button taskbar__button--{}", id.as_str())
                            class:taskbar__button--open=move || desk.with(|d| d.is_open(id))
                            class:taskbar__button--active=move || desk.with(|d| d.is_active(id))
                            title=module.name
                            on:click=move |_| {
                                desk.update(|d| {
                                    let action = taskbar_action(d, id);
                                    d.apply(action);
                                });
                            }
                        >
                            <span class="taskbar__icon">{module.icon}</span>
                            <span class="taskbar__label">{module.name}</span>
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
