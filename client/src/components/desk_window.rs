//! Draggable window chrome hosting one content panel.
//!
//! Dragging is window-local: the position lives in a signal owned by this
//! component and is never written back to the desk registry.

use leptos::prelude::*;

use crate::state::catalog::ModuleId;
use crate::state::desk::{DeskState, Position};
use crate::util::drag::{DragSession, Size, WINDOW_SIZE};

#[component]
pub fn DeskWindow(id: ModuleId, title: String, position: Position, children: Children) -> impl IntoView {
    let desk = expect_context::<RwSignal<DeskState>>();
    let window_ref = NodeRef::<leptos::html::Div>::new();
    let position = RwSignal::new(position);
    let drag = RwSignal::new(None::<DragSession>);

    let active = move || desk.with(|d| d.is_active(id));
    let style = move || {
        let Position { x, y } = position.get();
        let z = desk.with(|d| d.z_index(id));
        format!(
            "left: {x}px; top: {y}px; width: {}px; height: {}px; z-index: {z};",
            WINDOW_SIZE.width, WINDOW_SIZE.height
        )
    };

    let on_header_pointer_down = move |ev: leptos::ev::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        let session = DragSession::start(
            f64::from(ev.client_x()),
            f64::from(ev.client_y()),
            position.get_untracked(),
        );
        drag.set(Some(session));
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;
            if let Some(target) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            {
                let _ = target.set_pointer_capture(ev.pointer_id());
            }
        }
    };

    let on_header_pointer_move = move |ev: leptos::ev::PointerEvent| {
        let Some(session) = drag.get_untracked() else {
            return;
        };
        let next = session.position_at(
            f64::from(ev.client_x()),
            f64::from(ev.client_y()),
            WINDOW_SIZE,
            desk_bounds(window_ref),
        );
        position.set(next);
    };

    let on_header_pointer_up = move |_ev: leptos::ev::PointerEvent| {
        drag.set(None);
    };

    view! {
        <div
            class=format!("window window--{}", id.as_str())
            class:window--active=active
            class:window--dragging=move || drag.with(Option::is_some)
            style=style
            node_ref=window_ref
            on:click=move |_| desk.update(|d| d.focus(id))
        >
            <div
                class="window__header"
                on:pointerdown=on_header_pointer_down
                on:pointermove=on_header_pointer_move
                on:pointerup=on_header_pointer_up
                on:pointercancel=on_header_pointer_up
            >
                <span class="window__title">{title}</span>
                <button
                    class="window__close"
                    title="Close"
                    on:pointerdown=move |ev| ev.stop_propagation()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        desk.update(|d| d.close(id));
                    }
                >
                    "×"
                </button>
            </div>
            <div class="window__body">{children()}</div>
        </div>
    }
}

/// Size of the desktop surface the window is positioned in.
#[cfg(feature = "hydrate")]
fn desk_bounds(window_ref: NodeRef<leptos::html::Div>) -> Option<Size> {
    let parent = window_ref.get_untracked()?.parent_element()?;
    Some(Size {
        width: f64::from(parent.client_width()),
        height: f64::from(parent.client_height()),
    })
}

#[cfg(not(feature = "hydrate"))]
fn desk_bounds(_window_ref: NodeRef<leptos::html::Div>) -> Option<Size> {
    None
}
