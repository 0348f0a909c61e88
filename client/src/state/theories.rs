//! Theories panel state: the theory list, the create/edit form, and the
//! user-visible error banner.
//!
//! DESIGN
//! ======
//! Unlike the dependent panels, failures here are shown to the user. A load
//! failure is cleared by the next successful load; a write failure stays
//! until the next successful write so the follow-up reload cannot hide it.

#[cfg(test)]
#[path = "theories_test.rs"]
mod theories_test;

use super::panel::{DraftError, LoadPhase, non_blank, required};
use crate::net::api::ApiError;
use crate::net::types::{Theory, TheoryCreate, TheoryId, TheoryUpdate};

/// Editable fields of the theory form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TheoryDraft {
    pub title: String,
    pub author: String,
    pub content: String,
}

impl TheoryDraft {
    #[must_use]
    pub fn from_theory(theory: &Theory) -> Self {
        Self {
            title: theory.title.clone(),
            author: theory.author.clone().unwrap_or_default(),
            content: theory.content.clone(),
        }
    }

    /// Body for `POST /theories`.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError`] when title or content is blank.
    pub fn to_create(&self) -> Result<TheoryCreate, DraftError> {
        Ok(TheoryCreate {
            title: required(&self.title, "Title")?,
            content: required(&self.content, "Content")?,
            author: non_blank(&self.author),
        })
    }

    /// Body for `PUT /theories/{id}` carrying only fields that differ from `original`.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError`] when title or content is blank.
    pub fn to_update(&self, original: &Theory) -> Result<TheoryUpdate, DraftError> {
        let title = required(&self.title, "Title")?;
        let content = required(&self.content, "Content")?;
        let author = non_blank(&self.author);
        Ok(TheoryUpdate {
            title: (title != original.title).then_some(title),
            content: (content != original.content).then_some(content),
            author: if author == original.author { None } else { author },
        })
    }
}

/// Which form, if any, is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Hidden,
    Create,
    Edit(TheoryId),
}

/// Writes the theories panel can issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TheoryWrite {
    Create,
    Update,
    Delete,
}

impl TheoryWrite {
    fn verb(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// Error banner contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TheoryNotice {
    LoadFailed(String),
    WriteFailed(String),
}

impl TheoryNotice {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::LoadFailed(m) | Self::WriteFailed(m) => m,
        }
    }
}

/// Identifies one theory-list fetch; only the latest may commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListTicket(u64);

/// Theories panel state.
#[derive(Clone, Debug, PartialEq)]
pub struct TheoriesState {
    pub theories: Vec<Theory>,
    pub phase: LoadPhase,
    pub notice: Option<TheoryNotice>,
    pub form: FormMode,
    pub draft: TheoryDraft,
    latest_load: u64,
}

impl Default for TheoriesState {
    /// The list is fetched on mount, so the panel starts out loading.
    fn default() -> Self {
        Self {
            theories: Vec::new(),
            phase: LoadPhase::Loading,
            notice: None,
            form: FormMode::Hidden,
            draft: TheoryDraft::default(),
            latest_load: 0,
        }
    }
}

impl TheoriesState {
    /// Start a list fetch, superseding any still in flight.
    pub fn begin_load(&mut self) -> ListTicket {
        self.latest_load += 1;
        self.phase = LoadPhase::Loading;
        ListTicket(self.latest_load)
    }

    /// Commit a list fetch. Returns `false` (and changes nothing) when a
    /// newer fetch has been started since `ticket` was issued.
    pub fn finish_load(&mut self, ticket: ListTicket, result: Result<Vec<Theory>, ApiError>) -> bool {
        if ticket.0 != self.latest_load {
            return false;
        }
        match result {
            Ok(theories) => {
                self.theories = theories;
                self.phase = LoadPhase::Loaded;
                if matches!(self.notice, Some(TheoryNotice::LoadFailed(_))) {
                    self.notice = None;
                }
            }
            Err(e) => {
                self.phase = LoadPhase::Failed;
                self.notice = Some(TheoryNotice::LoadFailed(format!("Failed to load theories: {e}")));
            }
        }
        true
    }

    /// `[ + NEW THEORY ]` / `[ CANCEL ]`. Cancelling an edit discards its draft.
    pub fn toggle_form(&mut self) {
        self.form = match self.form {
            FormMode::Hidden => FormMode::Create,
            FormMode::Create => FormMode::Hidden,
            FormMode::Edit(_) => {
                self.draft = TheoryDraft::default();
                FormMode::Hidden
            }
        };
    }

    /// Open the form pre-filled with `theory`.
    pub fn start_edit(&mut self, theory: &Theory) {
        self.draft = TheoryDraft::from_theory(theory);
        self.form = FormMode::Edit(theory.id);
    }

    pub fn write_succeeded(&mut self) {
        self.draft = TheoryDraft::default();
        self.form = FormMode::Hidden;
        self.notice = None;
    }

    /// A theory was deleted; an edit of that theory is abandoned.
    pub fn deleted(&mut self, id: TheoryId) {
        if self.form == FormMode::Edit(id) {
            self.form = FormMode::Hidden;
            self.draft = TheoryDraft::default();
        }
        self.notice = None;
    }

    pub fn write_failed(&mut self, write: TheoryWrite, error: &ApiError) {
        self.notice = Some(TheoryNotice::WriteFailed(format!(
            "Failed to {} theory: {error}",
            write.verb()
        )));
    }

    /// The theory being edited is gone from the list; drop the edit and say so.
    pub fn edit_target_lost(&mut self) {
        self.form = FormMode::Hidden;
        self.draft = TheoryDraft::default();
        self.notice = Some(TheoryNotice::WriteFailed(
            "Failed to update theory: it no longer exists".to_owned(),
        ));
    }

    /// Surface a form validation problem without issuing a request.
    pub fn draft_rejected(&mut self, error: &DraftError) {
        self.notice = Some(TheoryNotice::WriteFailed(error.to_string()));
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    #[must_use]
    pub fn theory(&self, id: TheoryId) -> Option<&Theory> {
        self.theories.iter().find(|t| t.id == id)
    }

    /// The "NO THEORIES FOUND" placeholder shows only while the form is hidden.
    #[must_use]
    pub fn show_empty_state(&self) -> bool {
        self.theories.is_empty() && self.form == FormMode::Hidden
    }
}
