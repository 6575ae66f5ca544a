//! Session-level tests: working-copy lifecycle against in-memory fakes.

use std::sync::Arc;

use formloom_api::{FieldType, FormResponse, StoreError};
use formloom_core::testing::{InMemoryFormStore, StaticIdentity};
use formloom_core::{EditorSession, FormSchema, SessionError};

fn valid_schema() -> FormSchema {
    let mut schema = FormSchema::new();
    let id = schema.append(FieldType::ShortText).id.clone();
    schema.edit_header(&id, "Name");
    schema.edit_required(&id, true);
    schema
}

fn session_with(schema: FormSchema) -> (EditorSession, Arc<InMemoryFormStore>) {
    let store = Arc::new(InMemoryFormStore::new());
    let session = EditorSession::new(
        "form-1",
        schema,
        store.clone(),
        Arc::new(StaticIdentity::organizer("user-7")),
    );
    (session, store)
}

#[tokio::test]
async fn save_persists_and_commits_the_working_copy() {
    let (mut session, store) = session_with(valid_schema());

    let working = session.begin_edit();
    let id = working.append(FieldType::Date).id.clone();
    working.edit_header(&id, "When?");

    session.save().await.expect("save should succeed");

    assert!(!session.is_editing());
    assert_eq!(session.schema().len(), 2);

    let updates = store.updated_forms.lock().unwrap();
    assert_eq!(updates.len(), 1);
    let (form_id, records) = &updates[0];
    assert_eq!(form_id, "form-1");
    assert_eq!(records.len(), 2);
    // The wire order hint is rewritten from sequence position.
    assert_eq!(records[0].field_order, 1);
    assert_eq!(records[1].field_order, 2);
}

#[tokio::test]
async fn save_without_an_open_edit_is_refused() {
    let (mut session, store) = session_with(valid_schema());
    let result = session.save().await;
    assert!(matches!(result, Err(SessionError::NotEditing)));
    assert!(store.updated_forms.lock().unwrap().is_empty());
}

#[tokio::test]
async fn invalid_working_copy_blocks_the_save() {
    let (mut session, store) = session_with(valid_schema());

    // A choice field with only a blank choice row is not submittable.
    let working = session.begin_edit();
    let id = working.append(FieldType::Choice).id.clone();
    working.edit_header(&id, "Color");

    let result = session.save().await;
    assert!(matches!(result, Err(SessionError::InvalidSchema)));
    assert!(store.updated_forms.lock().unwrap().is_empty());
    // The working copy survives so the user can fix it.
    assert!(session.is_editing());
    assert_eq!(session.schema().len(), 2);
}

#[tokio::test]
async fn store_failure_keeps_the_working_copy_for_retry() {
    let (mut session, store) = session_with(valid_schema());

    let working = session.begin_edit();
    let id = working.append(FieldType::File).id.clone();
    working.edit_header(&id, "Resume");

    store.fail_next_with(StoreError::Unavailable("connection reset".into()));
    let result = session.save().await;
    assert!(matches!(result, Err(SessionError::Store(_))));
    assert!(session.is_editing());
    assert_eq!(session.schema().len(), 2);

    // Nothing else changed; a plain retry goes through.
    session.save().await.expect("retry should succeed");
    assert!(!session.is_editing());
    assert_eq!(store.updated_forms.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn cancel_discards_every_pending_change() {
    let (mut session, _store) = session_with(valid_schema());
    let original = session.schema().clone();

    let working = session.begin_edit();
    working.append(FieldType::Checkbox);
    let first = working.fields()[0].id.clone();
    working.edit_header(&first, "Renamed");

    session.cancel();
    assert!(!session.is_editing());
    assert_eq!(session.schema(), &original);
}

#[tokio::test]
async fn begin_edit_is_idempotent() {
    let (mut session, _store) = session_with(valid_schema());
    session.begin_edit().append(FieldType::Date);
    // A second begin_edit must not clobber the pending change.
    assert_eq!(session.begin_edit().len(), 2);
}

#[tokio::test]
async fn publish_event_attributes_the_current_actor() {
    let (mut session, store) = session_with(valid_schema());

    session
        .publish_event(serde_json::json!({ "name": "Spring Retreat" }))
        .await
        .expect("publish should succeed");

    let events = store.created_events.lock().unwrap();
    assert_eq!(events.len(), 1);
    let (actor_id, metadata, records) = &events[0];
    assert_eq!(actor_id, "user-7");
    assert_eq!(metadata["name"], "Spring Retreat");
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn publish_event_refuses_an_invalid_schema() {
    let (mut session, store) = session_with(FormSchema::new());
    let result = session.publish_event(serde_json::json!({})).await;
    assert!(matches!(result, Err(SessionError::InvalidSchema)));
    assert!(store.created_events.lock().unwrap().is_empty());
}

#[tokio::test]
async fn submit_is_gated_on_completeness() {
    let schema = valid_schema();
    let required_id = schema.fields()[0].id.clone();
    let (session, store) = session_with(schema);

    let mut response = FormResponse::new();
    let result = session.submit_response(&response).await;
    assert!(matches!(result, Err(SessionError::IncompleteResponse)));
    assert!(store.submitted_responses.lock().unwrap().is_empty());

    response.set_text(required_id, "Ada");
    session
        .submit_response(&response)
        .await
        .expect("complete response should submit");
    assert_eq!(store.submitted_responses.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn respondents_answer_the_saved_schema_not_the_working_copy() {
    let schema = valid_schema();
    let required_id = schema.fields()[0].id.clone();
    let (mut session, _store) = session_with(schema);

    // An open edit adds another required field, but it is not saved yet.
    let working = session.begin_edit();
    let draft_id = working.append(FieldType::ShortText).id.clone();
    working.edit_header(&draft_id, "Draft question");
    working.edit_required(&draft_id, true);

    let mut response = FormResponse::new();
    response.set_text(required_id, "Ada");
    session
        .submit_response(&response)
        .await
        .expect("the unsaved draft field must not gate submission");
}
