//! In-memory collaborator fakes for engine tests.
//!
//! These record every call and can be scripted to fail the next request,
//! which is all the session tests need to exercise the retry contract.

use std::sync::Mutex;

use async_trait::async_trait;
use formloom_api::{
    Actor, FieldRecord, FormResponse, FormStore, IdentityProvider, StoreError,
};

/// A `FormStore` that keeps everything in memory.
#[derive(Default)]
pub struct InMemoryFormStore {
    pub updated_forms: Mutex<Vec<(String, Vec<FieldRecord>)>>,
    pub created_events: Mutex<Vec<(String, serde_json::Value, Vec<FieldRecord>)>>,
    pub submitted_responses: Mutex<Vec<(String, FormResponse)>>,
    fail_next: Mutex<Option<StoreError>>,
}

impl InMemoryFormStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next store call fail with the given error.
    pub fn fail_next_with(&self, error: StoreError) {
        *self.fail_next.lock().unwrap() = Some(error);
    }

    fn take_failure(&self) -> Result<(), StoreError> {
        match self.fail_next.lock().unwrap().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl FormStore for InMemoryFormStore {
    async fn update_form(&self, form_id: &str, fields: &[FieldRecord]) -> Result<(), StoreError> {
        self.take_failure()?;
        self.updated_forms
            .lock()
            .unwrap()
            .push((form_id.to_string(), fields.to_vec()));
        Ok(())
    }

    async fn create_event(
        &self,
        actor_id: &str,
        metadata: serde_json::Value,
        fields: &[FieldRecord],
    ) -> Result<(), StoreError> {
        self.take_failure()?;
        self.created_events
            .lock()
            .unwrap()
            .push((actor_id.to_string(), metadata, fields.to_vec()));
        Ok(())
    }

    async fn submit_response(
        &self,
        form_id: &str,
        response: &FormResponse,
    ) -> Result<(), StoreError> {
        self.take_failure()?;
        self.submitted_responses
            .lock()
            .unwrap()
            .push((form_id.to_string(), response.clone()));
        Ok(())
    }
}

/// An `IdentityProvider` that always reports the same actor.
pub struct StaticIdentity {
    actor: Actor,
}

impl StaticIdentity {
    pub fn new(actor: Actor) -> Self {
        Self { actor }
    }

    /// Convenience for the common organizer case.
    pub fn organizer(id: impl Into<String>) -> Self {
        Self::new(Actor {
            id: id.into(),
            role: "organizer".to_string(),
        })
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentity {
    async fn current_actor(&self) -> Result<Actor, StoreError> {
        Ok(self.actor.clone())
    }
}
