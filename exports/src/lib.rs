//! Export payloads and the upload contract for saved boards.
//!
//! This crate owns the one external artifact the editor produces: a
//! structured entity list serialized as JSON, tagged with the identifying
//! token of the owning record (exercise, formation). The [`Uploader`] trait
//! is the collaborating storage service's contract from the editor's point
//! of view; [`HttpUploader`] is the production implementation. Uploads are
//! never retried automatically — a failure is surfaced to the caller, local
//! state stays intact, and the user decides whether to try again.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use board::doc::Entity;
use board::history::Snapshot;

/// Error returned by [`Uploader::upload`].
///
/// The only user-visible failure surface of the editor: the caller keeps its
/// unsaved state and may retry.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// The request could not be sent or the response body could not be read.
    #[error("upload request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The storage service answered with a non-success status.
    #[error("storage service rejected upload: HTTP {status}: {message}")]
    Rejected { status: u16, message: String },
    /// The response parsed but carries neither an id nor a url.
    #[error("upload response carries neither an id nor a url")]
    MissingReference,
}

/// The serialized form of a saved board, as posted to the storage service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportPayload {
    /// Identifying token of the owning record (exercise, formation, note).
    pub record: Uuid,
    /// The board's entities in z-order.
    pub entities: Vec<Entity>,
}

/// Reference to the stored export, as returned by the storage service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadReceipt {
    /// Server-assigned identifier, when the service returns one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Public URL of the stored export, when the service returns one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Build the export payload for a board snapshot.
#[must_use]
pub fn payload_from_snapshot(record: Uuid, snapshot: &Snapshot) -> ExportPayload {
    ExportPayload { record, entities: snapshot.entities().to_vec() }
}

/// Parse a storage-service response body into a receipt.
///
/// # Errors
///
/// Returns [`UploadError::MissingReference`] when the body has neither a
/// usable `id` nor a `url`.
pub fn parse_receipt(body: &serde_json::Value) -> Result<UploadReceipt, UploadError> {
    let id = body
        .get("id")
        .and_then(|v| v.as_str())
        .and_then(|s| Uuid::parse_str(s).ok());
    let url = body
        .get("url")
        .and_then(|v| v.as_str())
        .map(std::borrow::ToOwned::to_owned);
    if id.is_none() && url.is_none() {
        return Err(UploadError::MissingReference);
    }
    Ok(UploadReceipt { id, url })
}

/// The collaborating storage service's contract.
#[async_trait]
pub trait Uploader {
    /// Hand the payload to the storage service and return a reference to
    /// the stored export.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError`] on transport failure, a non-success status,
    /// or a malformed response. Implementations do not retry.
    async fn upload(&self, payload: &ExportPayload) -> Result<UploadReceipt, UploadError>;
}

/// HTTP implementation of [`Uploader`]: one JSON POST per save.
pub struct HttpUploader {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpUploader {
    /// Create an uploader posting to `endpoint`.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { client: reqwest::Client::new(), endpoint: endpoint.into() }
    }
}

#[async_trait]
impl Uploader for HttpUploader {
    async fn upload(&self, payload: &ExportPayload) -> Result<UploadReceipt, UploadError> {
        tracing::debug!(
            record = %payload.record,
            entities = payload.entities.len(),
            "uploading board export"
        );
        let response = self.client.post(&self.endpoint).json(payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "storage service rejected upload");
            return Err(UploadError::Rejected { status: status.as_u16(), message });
        }
        let body: serde_json::Value = response.json().await?;
        let receipt = parse_receipt(&body)?;
        tracing::debug!(id = ?receipt.id, url = ?receipt.url, "upload stored");
        Ok(receipt)
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
