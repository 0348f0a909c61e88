//! REST client for the research backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call resolves to [`ApiError::Unavailable`]
//! since panels only fetch once mounted in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses and undecodable bodies all surface
//! as an [`ApiError`]; panels decide whether to show or only log it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    Assumption, Citation, CitationCreate, CitationId, CitationValidation, CitationValidationRequest, Contradiction,
    ProvenanceEvent, Theory, TheoryCreate, TheoryId, TheoryUpdate,
};

/// Backend base URL used when `API_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// A failed backend request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network Error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("Request failed with status code {status}{}", detail_suffix(.detail.as_deref()))]
    Status { status: u16, detail: Option<String> },
    /// The request body could not be encoded.
    #[error("request encoding failed: {0}")]
    Encode(String),
    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// HTTP is not available in this rendering context.
    #[error("not available on server")]
    Unavailable,
}

fn detail_suffix(detail: Option<&str>) -> String {
    detail.map(|d| format!(": {d}")).unwrap_or_default()
}

/// Build a status error, lifting FastAPI's `{"detail": "..."}` message when present.
pub fn status_error(status: u16, body: &str) -> ApiError {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_owned))
        .filter(|d| !d.is_empty());
    ApiError::Status { status, detail }
}

/// Normalize a configured base URL (no trailing slash, default when blank).
pub fn normalize_base_url(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Backend base URL, taken from `API_URL` at build time.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("API_URL"))
}

fn theories_endpoint(base: &str) -> String {
    format!("{base}/theories")
}

fn theory_endpoint(base: &str, id: TheoryId) -> String {
    format!("{base}/theories/{id}")
}

fn theory_citations_endpoint(base: &str, id: TheoryId) -> String {
    format!("{base}/theories/{id}/citations")
}

fn validate_citation_endpoint(base: &str) -> String {
    format!("{base}/citations/validate")
}

fn assumptions_endpoint(base: &str, id: TheoryId) -> String {
    format!("{base}/theories/{id}/assumptions")
}

fn contradictions_endpoint(base: &str, id: TheoryId) -> String {
    format!("{base}/theories/{id}/contradictions")
}

fn provenance_endpoint(base: &str, id: TheoryId) -> String {
    format!("{base}/theories/{id}/provenance")
}

/// `GET /theories`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not decode.
pub async fn list_theories() -> Result<Vec<Theory>, ApiError> {
    get_json(&theories_endpoint(&api_base_url())).await
}

/// `GET /theories/{id}`, including the theory's citations.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not decode.
pub async fn get_theory(id: TheoryId) -> Result<Theory, ApiError> {
    get_json(&theory_endpoint(&api_base_url(), id)).await
}

/// Citations of one theory, read from `GET /theories/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the theory cannot be fetched.
pub async fn list_citations(theory_id: TheoryId) -> Result<Vec<Citation>, ApiError> {
    get_theory(theory_id).await.map(|t| t.citations)
}

/// `POST /theories`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the backend rejects the theory.
pub async fn create_theory(body: &TheoryCreate) -> Result<Theory, ApiError> {
    send_json(Method::Post, &theories_endpoint(&api_base_url()), body).await
}

/// `PUT /theories/{id}` with only the changed fields.
///
/// # Errors
///
/// Returns an [`ApiError`] if the backend rejects the update.
pub async fn update_theory(id: TheoryId, body: &TheoryUpdate) -> Result<Theory, ApiError> {
    send_json(Method::Put, &theory_endpoint(&api_base_url(), id), body).await
}

/// `DELETE /theories/{id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the theory could not be deleted.
pub async fn delete_theory(id: TheoryId) -> Result<(), ApiError> {
    delete(&theory_endpoint(&api_base_url(), id)).await
}

/// `POST /theories/{id}/citations`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the citation could not be added.
pub async fn add_citation(theory_id: TheoryId, body: &CitationCreate) -> Result<Citation, ApiError> {
    send_json(Method::Post, &theory_citations_endpoint(&api_base_url(), theory_id), body).await
}

/// `POST /citations/validate`.
///
/// # Errors
///
/// Returns an [`ApiError`] if validation could not be requested.
pub async fn validate_citation(citation_id: CitationId) -> Result<CitationValidation, ApiError> {
    let body = CitationValidationRequest { citation_id };
    send_json(Method::Post, &validate_citation_endpoint(&api_base_url()), &body).await
}

/// `GET /theories/{id}/assumptions`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not decode.
pub async fn list_assumptions(theory_id: TheoryId) -> Result<Vec<Assumption>, ApiError> {
    get_json(&assumptions_endpoint(&api_base_url(), theory_id)).await
}

/// `GET /theories/{id}/contradictions`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not decode.
pub async fn list_contradictions(theory_id: TheoryId) -> Result<Vec<Contradiction>, ApiError> {
    get_json(&contradictions_endpoint(&api_base_url(), theory_id)).await
}

/// `GET /theories/{id}/provenance`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body does not decode.
pub async fn list_provenance(theory_id: TheoryId) -> Result<Vec<ProvenanceEvent>, ApiError> {
    get_json(&provenance_endpoint(&api_base_url(), theory_id)).await
}

#[derive(Clone, Copy, Debug)]
enum Method {
    Post,
    Put,
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(status_error(status, &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(resp).await
}

#[cfg(feature = "hydrate")]
async fn send_json<B: Serialize, T: DeserializeOwned>(method: Method, url: &str, body: &B) -> Result<T, ApiError> {
    let builder = match method {
        Method::Post => gloo_net::http::Request::post(url),
        Method::Put => gloo_net::http::Request::put(url),
    };
    let resp = builder
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(resp).await
}

#[cfg(feature = "hydrate")]
async fn delete(url: &str) -> Result<(), ApiError> {
    let resp = gloo_net::http::Request::delete(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(status_error(status, &body));
    }
    Ok(())
}

#[cfg(not(feature = "hydrate"))]
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let _ = url;
    Err(ApiError::Unavailable)
}

#[cfg(not(feature = "hydrate"))]
async fn send_json<B: Serialize, T: DeserializeOwned>(method: Method, url: &str, body: &B) -> Result<T, ApiError> {
    let _ = (method, url, body);
    Err(ApiError::Unavailable)
}

#[cfg(not(feature = "hydrate"))]
async fn delete(url: &str) -> Result<(), ApiError> {
    let _ = url;
    Err(ApiError::Unavailable)
}
