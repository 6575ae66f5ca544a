//! Shared data model for the formloom form builder.
//!
//! This crate defines the types every other crate agrees on:
//! - `FieldDefinition`: one entry in a form schema (tagged union per type)
//! - `FieldRecord`: the flat wire/storage shape of a field
//! - The field catalog: the fixed set of insertable types with palette metadata
//! - `FormResponse`: answers collected for one form
//! - `FormStore` / `IdentityProvider`: the external collaborator seams

pub mod catalog;
pub mod field;
pub mod response;
pub mod store;

pub use catalog::{catalog, CatalogEntry};
pub use field::{FieldDefinition, FieldId, FieldPayload, FieldRecord, FieldType};
pub use response::{FormResponse, ResponseValue};
pub use store::{Actor, FormStore, IdentityProvider, StoreError};
