//! The editor session: working-copy lifecycle and the save/submit
//! boundary.
//!
//! The session owns two copies of the schema. The last-saved copy is what
//! viewers and respondents see; the working copy exists only while an
//! edit is open and is fully discardable. Saving is the only way the
//! working copy becomes durable, and a failed save keeps it untouched so
//! the user can retry.

use std::sync::Arc;

use formloom_api::{FormResponse, FormStore, IdentityProvider, StoreError};
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::schema::FormSchema;
use crate::validate::{is_response_complete, is_schema_valid};

/// Failure classes at the save/submit boundary.
///
/// Every variant carries a user-facing message via `Display`. None of
/// them disturb the in-memory schema, which stays in its last consistent
/// state.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The schema failed completeness checks; nothing was sent.
    #[error("the form cannot be saved yet: every field needs a header, sections a description, and choice fields at least one non-empty choice")]
    InvalidSchema,
    /// The response failed completeness checks; nothing was sent.
    #[error("please answer every required question before submitting")]
    IncompleteResponse,
    /// A save was requested with no edit in progress.
    #[error("no edit in progress")]
    NotEditing,
    /// The remote call failed; the working copy is kept for retry.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One editor's exclusive session over one form.
///
/// Collaborators are injected explicitly; the schema model and the
/// validators underneath take no ambient context at all.
pub struct EditorSession {
    form_id: String,
    saved: FormSchema,
    working: Option<FormSchema>,
    store: Arc<dyn FormStore>,
    identity: Arc<dyn IdentityProvider>,
}

impl EditorSession {
    pub fn new(
        form_id: impl Into<String>,
        saved: FormSchema,
        store: Arc<dyn FormStore>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            form_id: form_id.into(),
            saved,
            working: None,
            store,
            identity,
        }
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    pub fn is_editing(&self) -> bool {
        self.working.is_some()
    }

    /// The schema a renderer should show right now: the working copy while
    /// an edit is open, the last-saved copy otherwise.
    pub fn schema(&self) -> &FormSchema {
        self.working.as_ref().unwrap_or(&self.saved)
    }

    /// Open a working copy. Idempotent: an edit already in progress is
    /// kept as is.
    pub fn begin_edit(&mut self) -> &mut FormSchema {
        if self.working.is_none() {
            self.working = Some(self.saved.clone());
        }
        self.working.as_mut().expect("just ensured")
    }

    /// Mutable access to the working copy, if an edit is open.
    pub fn working_mut(&mut self) -> Option<&mut FormSchema> {
        self.working.as_mut()
    }

    /// Discard the working copy and revert to the last-saved schema.
    pub fn cancel(&mut self) {
        if self.working.take().is_some() {
            info!(form_id = %self.form_id, "edit cancelled, working copy discarded");
        }
    }

    /// Validate the working copy and persist it remotely.
    ///
    /// On success the working copy becomes the saved copy and the session
    /// returns to read-only viewing. On failure nothing changes locally:
    /// a validation failure sends nothing, a store failure leaves the
    /// working copy in place for retry.
    #[instrument(skip(self), fields(form_id = %self.form_id))]
    pub async fn save(&mut self) -> Result<(), SessionError> {
        let working = self.working.as_ref().ok_or(SessionError::NotEditing)?;
        if !is_schema_valid(working) {
            warn!("save refused: schema incomplete");
            return Err(SessionError::InvalidSchema);
        }
        let records = working.to_records();
        self.store.update_form(&self.form_id, &records).await?;
        if let Some(working) = self.working.take() {
            self.saved = working;
        }
        info!(fields = self.saved.len(), "form saved");
        Ok(())
    }

    /// Create a new event carrying the current schema, attributed to the
    /// current actor. Commits the working copy on success, like `save`.
    #[instrument(skip(self, metadata), fields(form_id = %self.form_id))]
    pub async fn publish_event(&mut self, metadata: serde_json::Value) -> Result<(), SessionError> {
        if !is_schema_valid(self.schema()) {
            warn!("publish refused: schema incomplete");
            return Err(SessionError::InvalidSchema);
        }
        let actor = self.identity.current_actor().await?;
        let records = self.schema().to_records();
        self.store
            .create_event(&actor.id, metadata, &records)
            .await?;
        if let Some(working) = self.working.take() {
            self.saved = working;
        }
        info!(actor = %actor.id, "event created");
        Ok(())
    }

    /// Validate a respondent's answers against the published schema and
    /// hand them to the backend.
    #[instrument(skip(self, response), fields(form_id = %self.form_id))]
    pub async fn submit_response(&self, response: &FormResponse) -> Result<(), SessionError> {
        if !is_response_complete(&self.saved, response) {
            warn!("submit refused: required answers missing");
            return Err(SessionError::IncompleteResponse);
        }
        self.store.submit_response(&self.form_id, response).await?;
        info!(answers = response.len(), "response submitted");
        Ok(())
    }
}
