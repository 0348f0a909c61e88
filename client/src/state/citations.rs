//! Citations panel state: the shared child-list shape plus the add-citation
//! form and per-citation validation tracking.

#[cfg(test)]
#[path = "citations_test.rs"]
mod citations_test;

use std::collections::HashSet;

use super::panel::{ChildPanel, ChildPanelState, DraftError, non_blank, required};
use crate::net::types::{Citation, CitationCreate, CitationId};

/// Editable fields of the add-citation form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CitationDraft {
    pub citation_text: String,
    pub source: String,
}

impl CitationDraft {
    /// Body for `POST /theories/{id}/citations`.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError`] when the citation text is blank.
    pub fn to_create(&self) -> Result<CitationCreate, DraftError> {
        Ok(CitationCreate {
            citation_text: required(&self.citation_text, "Citation text")?,
            source: non_blank(&self.source),
        })
    }
}

/// Citations panel state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CitationsState {
    pub panel: ChildPanelState<Citation>,
    pub show_form: bool,
    pub draft: CitationDraft,
    /// Citations whose validation request is in flight.
    pub validating: HashSet<CitationId>,
}

impl ChildPanel for CitationsState {
    type Item = Citation;

    fn panel(&self) -> &ChildPanelState<Citation> {
        &self.panel
    }

    fn panel_mut(&mut self) -> &mut ChildPanelState<Citation> {
        &mut self.panel
    }
}

impl CitationsState {
    /// `[ + ADD CITATION ]` / `[ CANCEL ]`.
    pub fn toggle_form(&mut self) {
        self.show_form = !self.show_form;
    }

    pub fn citation_added(&mut self) {
        self.draft = CitationDraft::default();
        self.show_form = false;
    }

    /// Mark `id` as validating; returns `false` if it already is.
    pub fn begin_validate(&mut self, id: CitationId) -> bool {
        self.validating.insert(id)
    }

    pub fn end_validate(&mut self, id: CitationId) {
        self.validating.remove(&id);
    }

    #[must_use]
    pub fn is_validating(&self, id: CitationId) -> bool {
        self.validating.contains(&id)
    }

    /// The "NO CITATIONS FOUND" placeholder.
    #[must_use]
    pub fn show_empty_state(&self) -> bool {
        self.panel.items.is_empty() && !self.panel.is_loading() && !self.show_form
    }
}
