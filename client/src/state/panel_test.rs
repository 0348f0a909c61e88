use super::*;

fn theory(id: TheoryId, title: &str) -> Theory {
    Theory {
        id,
        title: title.to_owned(),
        content: String::new(),
        author: None,
        created_at: "2024-01-01T00:00:00".to_owned(),
        updated_at: None,
        citations: Vec::new(),
        provenances: Vec::new(),
    }
}

// =============================================================
// Form helpers
// =============================================================

#[test]
fn non_blank_trims_and_rejects_whitespace() {
    assert_eq!(non_blank("  Ada  "), Some("Ada".to_owned()));
    assert_eq!(non_blank(" \t\n"), None);
    assert_eq!(non_blank(""), None);
}

#[test]
fn required_reports_field_name() {
    assert_eq!(required(" x ", "Title"), Ok("x".to_owned()));
    let err = required("   ", "Title").unwrap_err();
    assert_eq!(err, DraftError::MissingField("Title"));
    assert_eq!(err.to_string(), "Title is required");
}

// =============================================================
// TheoryPicker
// =============================================================

#[test]
fn picker_auto_selects_first_theory() {
    let mut picker = TheoryPicker::default();
    picker.receive(vec![theory(4, "A"), theory(9, "B")]);
    assert_eq!(picker.selected, Some(4));
    assert_eq!(picker.theories.len(), 2);
}

#[test]
fn picker_keeps_existing_selection() {
    let mut picker = TheoryPicker::default();
    picker.receive(vec![theory(4, "A"), theory(9, "B")]);
    assert!(picker.select(9));

    picker.receive(vec![theory(4, "A"), theory(9, "B"), theory(12, "C")]);
    assert_eq!(picker.selected, Some(9));
}

#[test]
fn picker_leaves_selection_empty_for_empty_list() {
    let mut picker = TheoryPicker::default();
    picker.receive(Vec::new());
    assert_eq!(picker.selected, None);
}

#[test]
fn picker_select_reports_change() {
    let mut picker = TheoryPicker::default();
    assert!(picker.select(3));
    assert!(!picker.select(3));
    assert!(picker.select(5));
}

#[test]
fn parse_selection_reads_option_values() {
    assert_eq!(parse_selection("17"), Some(17));
    assert_eq!(parse_selection(" 2 "), Some(2));
    assert_eq!(parse_selection(""), None);
    assert_eq!(parse_selection("abc"), None);
}

// =============================================================
// FetchGate / ChildPanelState
// =============================================================

#[test]
fn gate_only_latest_ticket_is_current() {
    let mut gate = FetchGate::default();
    let first = gate.issue(1);
    let second = gate.issue(2);
    assert!(!gate.is_current(first));
    assert!(gate.is_current(second));
    assert_eq!(second.parent, 2);
}

#[test]
fn child_panel_applies_current_result() {
    let mut panel = ChildPanelState::<u32>::default();
    assert_eq!(panel.phase, LoadPhase::Idle);

    let ticket = panel.begin_load(1);
    assert!(panel.is_loading());

    assert!(panel.finish_load(ticket, Ok(vec![10, 20])));
    assert_eq!(panel.items, vec![10, 20]);
    assert_eq!(panel.phase, LoadPhase::Loaded);
}

#[test]
fn child_panel_discards_superseded_result() {
    let mut panel = ChildPanelState::<u32>::default();
    let stale = panel.begin_load(1);
    let fresh = panel.begin_load(2);

    assert!(panel.finish_load(fresh, Ok(vec![2])));
    // The slower response for theory 1 arrives last.
    assert!(!panel.finish_load(stale, Ok(vec![1, 1, 1])));

    assert_eq!(panel.items, vec![2]);
    assert_eq!(panel.phase, LoadPhase::Loaded);
}

#[test]
fn child_panel_stale_result_does_not_end_loading() {
    let mut panel = ChildPanelState::<u32>::default();
    let stale = panel.begin_load(1);
    let _fresh = panel.begin_load(2);

    assert!(!panel.finish_load(stale, Ok(vec![1])));
    assert!(panel.is_loading());
    assert!(panel.items.is_empty());
}

#[test]
fn child_panel_failure_keeps_previous_items() {
    let mut panel = ChildPanelState::<u32>::default();
    let ticket = panel.begin_load(1);
    panel.finish_load(ticket, Ok(vec![7]));

    let retry = panel.begin_load(1);
    assert!(panel.finish_load(retry, Err(ApiError::Network("offline".to_owned()))));

    assert_eq!(panel.items, vec![7]);
    assert_eq!(panel.phase, LoadPhase::Failed);
    assert!(!panel.is_loading());
}
