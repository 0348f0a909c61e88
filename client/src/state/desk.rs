//! Desktop window registry: which modules are open, where, and which is focused.
//!
//! DESIGN
//! ======
//! The registry is plain data owned by the root component and shared through
//! an `RwSignal<DeskState>` context. Every mutation is a method on the state
//! (or a [`DeskAction`] fed to [`DeskState::reduce`]) so window bookkeeping
//! is testable without a renderer.
//!
//! INVARIANTS
//! ==========
//! - At most one window per [`ModuleId`]; reopening only refocuses.
//! - `active`, when set by `open`/`close`, names a window in `windows`.
//! - Windows keep insertion order; visual stacking comes from [`DeskState::z_index`].

#[cfg(test)]
#[path = "desk_test.rs"]
mod desk_test;

use super::catalog::ModuleId;

/// Offset of the first window from the desktop's top-left corner.
pub const CASCADE_ORIGIN: f64 = 100.0;
/// Per-window diagonal step for newly opened windows.
pub const CASCADE_STEP: f64 = 30.0;
/// Base z-index for windows; keeps them above the desktop banner.
pub const WINDOW_BASE_Z: i32 = 10;

/// Screen position of a window's top-left corner, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Cascading placement for the `n`th window (0-indexed).
    #[must_use]
    pub fn cascade(n: usize) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let offset = CASCADE_ORIGIN + CASCADE_STEP * n as f64;
        Self { x: offset, y: offset }
    }
}

/// One open window on the desk.
#[derive(Clone, Debug, PartialEq)]
pub struct OpenWindow {
    pub id: ModuleId,
    pub title: String,
    pub module: ModuleId,
    pub position: Position,
}

/// A registry mutation, as dispatched by the taskbar and window chrome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeskAction {
    Open(ModuleId),
    Close(ModuleId),
    Focus(ModuleId),
}

/// Session-scoped window registry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeskState {
    pub windows: Vec<OpenWindow>,
    pub active: Option<ModuleId>,
}

impl DeskState {
    /// Open `module`, or focus it when it already has a window.
    pub fn open(&mut self, module: ModuleId) {
        if self.is_open(module) {
            self.active = Some(module);
            return;
        }
        let position = Position::cascade(self.windows.len());
        self.windows.push(OpenWindow {
            id: module,
            title: module.info().name.to_owned(),
            module,
            position,
        });
        self.active = Some(module);
    }

    /// Close the window for `id`. Closing the active window hands focus to
    /// the last remaining window.
    pub fn close(&mut self, id: ModuleId) {
        self.windows.retain(|w| w.id != id);
        if self.active == Some(id) {
            self.active = self.windows.last().map(|w| w.id);
        }
    }

    /// Mark `id` as the focused window.
    pub fn focus(&mut self, id: ModuleId) {
        self.active = Some(id);
    }

    /// Apply an action in place.
    pub fn apply(&mut self, action: DeskAction) {
        match action {
            DeskAction::Open(id) => self.open(id),
            DeskAction::Close(id) => self.close(id),
            DeskAction::Focus(id) => self.focus(id),
        }
    }

    /// Pure reducer: the state after `action`, leaving `self` untouched.
    #[must_use]
    pub fn reduce(&self, action: DeskAction) -> Self {
        let mut next = self.clone();
        next.apply(action);
        next
    }

    #[must_use]
    pub fn is_open(&self, id: ModuleId) -> bool {
        self.windows.iter().any(|w| w.id == id)
    }

    #[must_use]
    pub fn is_active(&self, id: ModuleId) -> bool {
        self.active == Some(id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Stacking order for `id`: insertion order, with the active window
    /// raised above every other window.
    #[must_use]
    pub fn z_index(&self, id: ModuleId) -> i32 {
        let count = i32::try_from(self.windows.len()).unwrap_or(i32::MAX - WINDOW_BASE_Z);
        if self.is_active(id) {
            return WINDOW_BASE_Z + count;
        }
        self.windows
            .iter()
            .position(|w| w.id == id)
            .and_then(|idx| i32::try_from(idx).ok())
            .map_or(WINDOW_BASE_Z, |idx| WINDOW_BASE_Z + idx)
    }
}

/// What a taskbar click on `module` should do: focus an open window,
/// otherwise open a new one.
#[must_use]
pub fn taskbar_action(desk: &DeskState, module: ModuleId) -> DeskAction {
    if desk.is_open(module) {
        DeskAction::Focus(module)
    } else {
        DeskAction::Open(module)
    }
}
