//! Desktop page: the window surface and the taskbar.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route. Windows are rendered from the desk registry in its
//! open order; stacking comes from each window's z-index, not DOM order.

#[cfg(test)]
#[path = "desktop_test.rs"]
mod desktop_test;

use leptos::prelude::*;

use crate::components::assumptions_panel::AssumptionsPanel;
use crate::components::citations_panel::CitationsPanel;
use crate::components::contradictions_panel::ContradictionsPanel;
use crate::components::desk_window::DeskWindow;
use crate::components::provenance_panel::ProvenancePanel;
use crate::components::taskbar::Taskbar;
use crate::components::theories_panel::TheoriesPanel;
use crate::state::catalog::ModuleId;
use crate::state::desk::DeskState;

pub const VERSION_LINE: &str = "RESEARCH PLATFORM v1.0.0 | THEORY VALIDATION SYSTEM";

/// Block-letter "UNBIAS.AI" shown in the desktop banner.
pub const LOGO: &str = " ██╗   ██╗███╗   ██╗██████╗ ██╗ █████╗ ███████╗   █████╗ ██╗
 ██║   ██║████╗  ██║██╔══██╗██║██╔══██╗██╔════╝  ██╔══██╗██║
 ██║   ██║██╔██╗ ██║██████╔╝██║███████║███████╗  ███████║██║
 ██║   ██║██║╚██╗██║██╔══██╗██║██╔══██║╚════██║  ██╔══██║██║
 ╚██████╔╝██║ ╚████║██████╔╝██║██║  ██║███████║██╗██║  ██║██║
  ╚═════╝ ╚═╝  ╚═══╝╚═════╝ ╚═╝╚═╝  ╚═╝╚══════╝╚═╝╚═╝  ╚═╝╚═╝";

/// Logo block with the version line set under it.
pub fn banner_text() -> String {
    format!("{LOGO}\n\n        {VERSION_LINE}")
}

#[component]
pub fn DesktopPage() -> impl IntoView {
    let desk = expect_context::<RwSignal<DeskState>>();

    view! {
        <div class="desktop">
            <header class="desktop__banner">
                <pre class="desktop__logo">{banner_text()}</pre>
            </header>
            <main class="desktop__surface">
                <For
                    each=move || desk.with(|d| d.windows.clone())
                    key=|window| window.id
                    children=move |window| {
                        view! {
                            <DeskWindow id=window.id title=window.title position=window.position>
                                {module_panel(window.module)}
                            </DeskWindow>
                        }
                    }
                />
                <Show when=move || desk.with(DeskState::is_empty)>
                    <div class="desktop__welcome">
                        <h1>"WELCOME TO UNBIAS.AI"</h1>
                        <p>"SELECT A MODULE FROM THE TASKBAR TO BEGIN"</p>
                    </div>
                </Show>
            </main>
            <Taskbar/>
        </div>
    }
}

fn module_panel(module: ModuleId) -> AnyView {
    match module {
        ModuleId::Theories => view! { <TheoriesPanel/> }.into_any(),
        ModuleId::Citations => view! { <CitationsPanel/> }.into_any(),
        ModuleId::Assumptions => view! { <AssumptionsPanel/> }.into_any(),
        ModuleId::Contradictions => view! { <ContradictionsPanel/> }.into_any(),
        ModuleId::Provenance => view! { <ProvenancePanel/> }.into_any(),
    }
}
