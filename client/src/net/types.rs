//! Wire DTOs for the research backend's REST API.
//!
//! DESIGN
//! ======
//! Only the fields the desktop panels read are modelled as required; every
//! value the backend may omit or null out is an `Option`, and nested lists
//! default to empty so partially populated payloads still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub type TheoryId = i64;
pub type CitationId = i64;

/// A research theory, as returned by `GET /theories` and `GET /theories/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theory {
    pub id: TheoryId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub author: Option<String>,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub citations: Vec<Citation>,
    #[serde(default)]
    pub provenances: Vec<ProvenanceEvent>,
}

/// A citation attached to a theory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    pub id: CitationId,
    #[serde(default)]
    pub theory_id: Option<TheoryId>,
    pub citation_text: String,
    pub source: Option<String>,
    /// `pending`, `validated`, `needs_review`, `invalid` or `error`.
    pub validation_status: String,
    #[serde(default)]
    pub validation_result: Option<ValidationResult>,
    #[serde(default)]
    pub confidence_score: Option<f64>,
    #[serde(default)]
    pub validated_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Analysis attached to a citation once validated.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    #[serde(default)]
    pub analysis: String,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// An assumption detected in a theory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Assumption {
    pub id: i64,
    pub assumption_text: String,
    pub confidence_level: Option<f64>,
    pub created_at: String,
}

/// A contradiction detected in a theory. `severity` ranges 0.0–1.0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contradiction {
    pub id: i64,
    pub contradiction_text: String,
    pub severity: Option<f64>,
    pub created_at: String,
}

/// An audit entry recorded by the backend for a change to a theory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceEvent {
    pub id: i64,
    pub event_type: String,
    pub timestamp: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub event_data: Option<serde_json::Value>,
}

/// Body of `POST /theories`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TheoryCreate {
    pub title: String,
    pub content: String,
    pub author: Option<String>,
}

/// Body of `PUT /theories/{id}`. Absent fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TheoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl TheoryUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none()
    }
}

/// Body of `POST /theories/{id}/citations`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CitationCreate {
    pub citation_text: String,
    pub source: Option<String>,
}

/// Body of `POST /citations/validate`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationValidationRequest {
    pub citation_id: CitationId,
}

/// Response of `POST /citations/validate`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CitationValidation {
    pub citation_id: CitationId,
    pub validation_status: String,
    #[serde(default)]
    pub validation_result: Option<ValidationResult>,
    pub confidence_score: Option<f64>,
}
