use super::*;

fn positions(desk: &DeskState) -> Vec<(ModuleId, f64, f64)> {
    desk.windows
        .iter()
        .map(|w| (w.id, w.position.x, w.position.y))
        .collect()
}

fn window(desk: &DeskState, id: ModuleId) -> Option<&OpenWindow> {
    desk.windows.iter().find(|w| w.id == id)
}

// =============================================================
// open
// =============================================================

#[test]
fn open_appends_window_and_focuses_it() {
    let mut desk = DeskState::default();
    desk.open(ModuleId::Theories);

    assert_eq!(desk.windows.len(), 1);
    let win = window(&desk, ModuleId::Theories).unwrap();
    assert_eq!(win.title, "Theories");
    assert_eq!(win.module, ModuleId::Theories);
    assert_eq!(win.position, Position { x: 100.0, y: 100.0 });
    assert_eq!(desk.active, Some(ModuleId::Theories));
}

#[test]
fn reopening_module_only_changes_focus() {
    let mut desk = DeskState::default();
    desk.open(ModuleId::Theories);
    desk.open(ModuleId::Citations);
    let before = positions(&desk);

    desk.open(ModuleId::Theories);

    assert_eq!(desk.windows.len(), 2);
    assert_eq!(positions(&desk), before);
    assert_eq!(desk.active, Some(ModuleId::Theories));
}

#[test]
fn cascade_offsets_by_window_count() {
    let mut desk = DeskState::default();
    for entry in &crate::state::catalog::CATALOG {
        desk.open(entry.id);
    }
    for (n, win) in desk.windows.iter().enumerate() {
        let expected = Position::cascade(n);
        assert_eq!(win.position, expected);
    }
    assert_eq!(Position::cascade(0), Position { x: 100.0, y: 100.0 });
    assert_eq!(Position::cascade(4), Position { x: 220.0, y: 220.0 });
}

#[test]
fn cascade_uses_current_count_after_close() {
    let mut desk = DeskState::default();
    desk.open(ModuleId::Theories);
    desk.open(ModuleId::Citations);
    desk.close(ModuleId::Theories);
    desk.open(ModuleId::Provenance);

    // One window remained open, so the new one lands in the second slot.
    assert_eq!(
        window(&desk, ModuleId::Provenance).unwrap().position,
        Position { x: 130.0, y: 130.0 }
    );
}

// =============================================================
// close
// =============================================================

#[test]
fn closing_active_window_focuses_last_remaining() {
    let mut desk = DeskState::default();
    desk.open(ModuleId::Theories);
    desk.open(ModuleId::Citations);
    desk.open(ModuleId::Assumptions);
    desk.focus(ModuleId::Citations);

    desk.close(ModuleId::Citations);

    assert_eq!(desk.active, Some(ModuleId::Assumptions));
    assert!(!desk.is_open(ModuleId::Citations));
}

#[test]
fn closing_last_window_clears_focus() {
    let mut desk = DeskState::default();
    desk.open(ModuleId::Provenance);
    desk.close(ModuleId::Provenance);

    assert!(desk.is_empty());
    assert_eq!(desk.active, None);
}

#[test]
fn closing_inactive_window_keeps_focus() {
    let mut desk = DeskState::default();
    desk.open(ModuleId::Theories);
    desk.open(ModuleId::Citations);
    desk.open(ModuleId::Assumptions);
    desk.focus(ModuleId::Theories);

    desk.close(ModuleId::Assumptions);

    assert_eq!(desk.active, Some(ModuleId::Theories));
    assert_eq!(desk.windows.len(), 2);
}

#[test]
fn closing_unknown_window_is_noop() {
    let mut desk = DeskState::default();
    desk.open(ModuleId::Theories);
    let before = desk.clone();

    desk.close(ModuleId::Contradictions);

    assert_eq!(desk, before);
}

#[test]
fn open_then_close_scenario() {
    let mut desk = DeskState::default();

    desk.open(ModuleId::Theories);
    assert_eq!(positions(&desk), vec![(ModuleId::Theories, 100.0, 100.0)]);
    assert_eq!(desk.active, Some(ModuleId::Theories));

    desk.open(ModuleId::Citations);
    assert_eq!(
        positions(&desk),
        vec![(ModuleId::Theories, 100.0, 100.0), (ModuleId::Citations, 130.0, 130.0)]
    );
    assert_eq!(desk.active, Some(ModuleId::Citations));

    desk.close(ModuleId::Theories);
    assert_eq!(positions(&desk), vec![(ModuleId::Citations, 130.0, 130.0)]);
    assert_eq!(desk.active, Some(ModuleId::Citations));

    desk.close(ModuleId::Citations);
    assert!(positions(&desk).is_empty());
    assert_eq!(desk.active, None);
}

// =============================================================
// focus / reduce
// =============================================================

#[test]
fn focus_sets_active_unconditionally() {
    let mut desk = DeskState::default();
    desk.focus(ModuleId::Assumptions);
    assert_eq!(desk.active, Some(ModuleId::Assumptions));
    assert!(desk.is_empty());
}

#[test]
fn reduce_leaves_original_untouched() {
    let desk = DeskState::default();
    let next = desk.reduce(DeskAction::Open(ModuleId::Citations));

    assert!(desk.is_empty());
    assert_eq!(next.windows.len(), 1);
    assert!(next.is_active(ModuleId::Citations));

    let closed = next.reduce(DeskAction::Close(ModuleId::Citations));
    assert!(closed.is_empty());
    assert!(next.is_open(ModuleId::Citations));
}

#[test]
fn apply_dispatches_each_action() {
    let mut desk = DeskState::default();
    desk.apply(DeskAction::Open(ModuleId::Theories));
    desk.apply(DeskAction::Open(ModuleId::Provenance));
    desk.apply(DeskAction::Focus(ModuleId::Theories));
    assert!(desk.is_active(ModuleId::Theories));

    desk.apply(DeskAction::Close(ModuleId::Theories));
    assert!(desk.is_active(ModuleId::Provenance));
}

// =============================================================
// taskbar / stacking
// =============================================================

#[test]
fn taskbar_opens_closed_module_and_focuses_open_one() {
    let mut desk = DeskState::default();
    assert_eq!(taskbar_action(&desk, ModuleId::Citations), DeskAction::Open(ModuleId::Citations));

    desk.open(ModuleId::Citations);
    assert_eq!(taskbar_action(&desk, ModuleId::Citations), DeskAction::Focus(ModuleId::Citations));
}

#[test]
fn active_window_is_raised_above_others() {
    let mut desk = DeskState::default();
    desk.open(ModuleId::Theories);
    desk.open(ModuleId::Citations);
    desk.open(ModuleId::Assumptions);
    desk.focus(ModuleId::Theories);

    let theories = desk.z_index(ModuleId::Theories);
    let citations = desk.z_index(ModuleId::Citations);
    let assumptions = desk.z_index(ModuleId::Assumptions);

    assert!(theories > citations);
    assert!(theories > assumptions);
    assert!(assumptions > citations);
    assert!(citations >= WINDOW_BASE_Z);
}
