//! External collaborator seams: persistence and identity.
//!
//! The engine treats persistence as an opaque remote procedure that
//! accepts or returns whole field lists keyed by form id. Transport
//! details never cross this boundary, and every failure is reportable
//! rather than fatal.

use async_trait::async_trait;
use thiserror::Error;

use crate::field::FieldRecord;
use crate::response::FormResponse;

/// Errors surfaced by the remote boundary.
///
/// Callers report the message, keep local state unchanged, and let the
/// user retry. Nothing here aborts the editing session.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("the server rejected the request: {reason}")]
    Rejected { reason: String },
    #[error("the server is unreachable: {0}")]
    Unavailable(String),
    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// The current actor as reported by the identity collaborator.
///
/// The engine only ever reads `id` (for the create-event call); `role` is
/// carried through for the host UI and never branched on internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: String,
    pub role: String,
}

/// Remote persistence surface for whole field lists.
///
/// Field order on the wire is array order.
#[async_trait]
pub trait FormStore: Send + Sync {
    /// Replace the stored field list of an existing form.
    async fn update_form(&self, form_id: &str, fields: &[FieldRecord]) -> Result<(), StoreError>;

    /// Create a new event owned by `actor_id` with its metadata blob and
    /// initial field list.
    async fn create_event(
        &self,
        actor_id: &str,
        metadata: serde_json::Value,
        fields: &[FieldRecord],
    ) -> Result<(), StoreError>;

    /// Hand a completed response payload to the backend.
    async fn submit_response(
        &self,
        form_id: &str,
        response: &FormResponse,
    ) -> Result<(), StoreError>;
}

/// Session/identity lookup consumed at the create-event boundary.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn current_actor(&self) -> Result<Actor, StoreError>;
}
