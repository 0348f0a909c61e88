use super::*;
use crate::state::panel::LoadPhase;

#[test]
fn draft_requires_citation_text() {
    let draft = CitationDraft {
        citation_text: "  ".to_owned(),
        source: "Nature".to_owned(),
    };
    assert_eq!(draft.to_create(), Err(DraftError::MissingField("Citation text")));
}

#[test]
fn draft_sends_null_for_blank_source() {
    let draft = CitationDraft {
        citation_text: "Darwin 1859".to_owned(),
        source: " ".to_owned(),
    };
    assert_eq!(
        draft.to_create().unwrap(),
        CitationCreate {
            citation_text: "Darwin 1859".to_owned(),
            source: None,
        }
    );
}

#[test]
fn citation_added_resets_form() {
    let mut state = CitationsState::default();
    state.toggle_form();
    state.draft.citation_text = "x".to_owned();

    state.citation_added();

    assert!(!state.show_form);
    assert_eq!(state.draft, CitationDraft::default());
}

#[test]
fn validations_are_tracked_per_citation() {
    let mut state = CitationsState::default();
    assert!(state.begin_validate(4));
    assert!(!state.begin_validate(4));
    assert!(state.is_validating(4));

    // Starting a second validation keeps the first one locked.
    assert!(state.begin_validate(5));
    assert!(state.is_validating(4));
    assert!(!state.begin_validate(4));

    state.end_validate(4);
    assert!(!state.is_validating(4));
    assert!(state.is_validating(5));

    state.end_validate(5);
    assert!(state.validating.is_empty());
}

#[test]
fn empty_state_hidden_while_loading_or_form_open() {
    let mut state = CitationsState::default();
    assert!(state.show_empty_state());

    let ticket = state.panel.begin_load(1);
    assert!(!state.show_empty_state());

    state.panel.finish_load(ticket, Ok(Vec::new()));
    assert_eq!(state.panel.phase, LoadPhase::Loaded);
    assert!(state.show_empty_state());

    state.toggle_form();
    assert!(!state.show_empty_state());
}

#[test]
fn child_panel_access_reaches_embedded_list() {
    let mut state = CitationsState::default();
    let ticket = state.panel_mut().begin_load(4);
    assert!(state.panel().is_loading());

    assert!(state.panel_mut().finish_load(ticket, Ok(Vec::new())));
    assert_eq!(state.panel.phase, LoadPhase::Loaded);
}
