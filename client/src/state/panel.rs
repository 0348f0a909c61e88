//! Shared panel state: load phases, the theory picker, and superseding fetches.
//!
//! DESIGN
//! ======
//! Every dependent panel (citations, assumptions, contradictions, provenance)
//! follows one shape: load the theory list on mount, auto-select the first
//! theory, then load the child list for the current selection. Child fetches
//! are issued through a [`FetchGate`]; only the most recently issued ticket
//! may commit, so a slow response for an old selection never overwrites the
//! list for the new one.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use crate::net::api::ApiError;
use crate::net::types::{Theory, TheoryId};

/// Lifecycle of one fetch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// A form that cannot be submitted yet.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Trimmed text, or `None` when blank.
pub fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Trimmed text of a required form field.
///
/// # Errors
///
/// Returns [`DraftError::MissingField`] when the field is blank.
pub fn required(raw: &str, field: &'static str) -> Result<String, DraftError> {
    non_blank(raw).ok_or(DraftError::MissingField(field))
}

/// Identifies one issued child fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub parent: TheoryId,
}

/// Issues fetch tickets; only the latest one is current.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchGate {
    latest: u64,
}

impl FetchGate {
    /// Issue a ticket for `parent`, superseding every earlier ticket.
    pub fn issue(&mut self, parent: TheoryId) -> FetchTicket {
        self.latest += 1;
        FetchTicket { seq: self.latest, parent }
    }

    #[must_use]
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.seq == self.latest
    }
}

/// Theory list plus the selection that drives a panel's child fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TheoryPicker {
    pub theories: Vec<Theory>,
    pub selected: Option<TheoryId>,
}

impl TheoryPicker {
    /// Replace the theory list, selecting the first theory if none is selected.
    pub fn receive(&mut self, theories: Vec<Theory>) {
        if self.selected.is_none() {
            self.selected = theories.first().map(|t| t.id);
        }
        self.theories = theories;
    }

    /// Select `id`; returns whether the selection changed.
    pub fn select(&mut self, id: TheoryId) -> bool {
        if self.selected == Some(id) {
            return false;
        }
        self.selected = Some(id);
        true
    }
}

/// Parse the value of a theory `<select>` option.
pub fn parse_selection(raw: &str) -> Option<TheoryId> {
    raw.trim().parse().ok()
}

/// Access to the child-list state embedded in a panel's state.
pub trait ChildPanel {
    type Item;

    fn panel(&self) -> &ChildPanelState<Self::Item>;
    fn panel_mut(&mut self) -> &mut ChildPanelState<Self::Item>;
}

impl<T> ChildPanel for ChildPanelState<T> {
    type Item = T;

    fn panel(&self) -> &ChildPanelState<T> {
        self
    }

    fn panel_mut(&mut self) -> &mut ChildPanelState<T> {
        self
    }
}

/// State of a panel that lists one kind of child record for a selected theory.
#[derive(Clone, Debug, PartialEq)]
pub struct ChildPanelState<T> {
    pub picker: TheoryPicker,
    pub items: Vec<T>,
    pub phase: LoadPhase,
    gate: FetchGate,
}

impl<T> Default for ChildPanelState<T> {
    fn default() -> Self {
        Self {
            picker: TheoryPicker::default(),
            items: Vec::new(),
            phase: LoadPhase::Idle,
            gate: FetchGate::default(),
        }
    }
}

impl<T> ChildPanelState<T> {
    /// Start a child fetch for `parent`.
    pub fn begin_load(&mut self, parent: TheoryId) -> FetchTicket {
        self.phase = LoadPhase::Loading;
        self.gate.issue(parent)
    }

    /// Commit a child fetch result. Superseded tickets are discarded and
    /// leave the state untouched; returns whether the result was applied.
    /// Failures keep the previous items.
    pub fn finish_load(&mut self, ticket: FetchTicket, result: Result<Vec<T>, ApiError>) -> bool {
        if !self.gate.is_current(ticket) {
            return false;
        }
        match result {
            Ok(items) => {
                self.items = items;
                self.phase = LoadPhase::Loaded;
            }
            Err(_) => self.phase = LoadPhase::Failed,
        }
        true
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    #[must_use]
    pub fn selected(&self) -> Option<TheoryId> {
        self.picker.selected
    }
}
