//! The form-schema editing engine.
//!
//! This crate holds the true core of the builder:
//! - `schema`: the ordered field sequence and its mutation operations
//! - `validate`: pure completeness checks for fields, schemas, responses
//! - `drag`: the gesture-to-mutation translator for the three drag domains
//! - `session`: working-copy lifecycle and the save/submit boundary
//!
//! Everything mutates synchronously inside the triggering event handler;
//! the only asynchronous boundary is the external persistence call behind
//! `session`.

pub mod drag;
pub mod schema;
pub mod session;
pub mod testing;
pub mod validate;

pub use drag::{DragCoordinator, DragEffect, DragSource, DragTarget};
pub use schema::FormSchema;
pub use session::{EditorSession, SessionError};
pub use validate::{is_field_valid, is_response_complete, is_schema_valid};
