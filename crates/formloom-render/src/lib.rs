//! Render projection for form schemas.
//!
//! Pure mapping from `(schema, mode)` to a toolkit-agnostic visual tree.
//! The same field data renders identically in builder and preview mode;
//! builder adds drag/delete affordances and the drop-area sentinel,
//! response mode adds live inputs and the gated submit trigger. A host
//! toolkit interprets the resulting `UiElement` tree however it likes.

pub mod element;
pub mod projector;

pub use element::UiElement;
pub use projector::{
    project_builder, project_field, project_preview, project_response, RenderMode,
};
