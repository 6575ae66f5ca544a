//! Mode projection: schema and field data in, visual tree out.
//!
//! The field body is produced by one shared function for every mode, so
//! builder and preview cannot drift apart in how they interpret the same
//! field data. Modes differ only in their overlays.

use formloom_api::{FieldDefinition, FieldPayload, FieldType, FormResponse, ResponseValue};
use formloom_core::{is_response_complete, FormSchema};
use tracing::trace;

use crate::element::UiElement;

/// The three projections of one schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Editable canvas: field bodies plus drag and delete affordances.
    Builder,
    /// Read-only display, exactly the field bodies.
    Preview,
    /// Fillable form: live inputs plus the gated submit trigger.
    Response,
}

/// Project a single field in the given mode, with no answers filled in.
pub fn project_field(field: &FieldDefinition, mode: RenderMode) -> UiElement {
    match mode {
        RenderMode::Builder => UiElement::Row {
            children: vec![
                UiElement::DragHandle {
                    field: field.id.clone(),
                },
                field_body(field, None, false),
                UiElement::DeleteButton {
                    field: field.id.clone(),
                },
            ],
        },
        RenderMode::Preview => field_body(field, None, false),
        RenderMode::Response => field_body(field, None, true),
    }
}

/// Project the whole schema as the editable builder canvas. The caller
/// supplies the drop-area indicator state from its drag coordinator.
pub fn project_builder(schema: &FormSchema, indicator_armed: bool) -> UiElement {
    let mut children: Vec<UiElement> = schema
        .fields()
        .iter()
        .map(|field| project_field(field, RenderMode::Builder))
        .collect();
    children.push(UiElement::InsertMarker {
        armed: indicator_armed,
    });
    trace!(fields = schema.len(), indicator_armed, "projected builder canvas");
    UiElement::Column { children }
}

/// Project the whole schema as the read-only preview.
pub fn project_preview(schema: &FormSchema) -> UiElement {
    UiElement::Column {
        children: schema
            .fields()
            .iter()
            .map(|field| project_field(field, RenderMode::Preview))
            .collect(),
    }
}

/// Project the whole schema as the fillable response form, carrying the
/// respondent's current answers into the inputs. The submit trigger is
/// enabled only when the response is complete.
pub fn project_response(schema: &FormSchema, response: &FormResponse) -> UiElement {
    let mut children: Vec<UiElement> = schema
        .fields()
        .iter()
        .map(|field| field_body(field, response.get(&field.id), true))
        .collect();
    children.push(UiElement::SubmitButton {
        enabled: is_response_complete(schema, response),
    });
    UiElement::Column { children }
}

/// The mode-independent body of one field.
///
/// Exhaustive over the closed payload set, so an unknown tag cannot reach
/// rendering at all.
fn field_body(field: &FieldDefinition, answer: Option<&ResponseValue>, live: bool) -> UiElement {
    let heading = UiElement::Heading {
        text: field.header.clone(),
        required_marker: field.required && field.field_type() != FieldType::Section,
    };
    let body = match &field.payload {
        FieldPayload::Section { description } => UiElement::Paragraph {
            text: description.clone(),
        },
        FieldPayload::ShortText { placeholder } => UiElement::TextInput {
            placeholder: placeholder.clone(),
            value: text_answer(answer),
            live,
        },
        FieldPayload::LongText { placeholder } => UiElement::TextArea {
            placeholder: placeholder.clone(),
            value: text_answer(answer),
            live,
        },
        FieldPayload::Choice { choices } => UiElement::RadioGroup {
            options: choices.clone(),
            selected: match answer {
                Some(ResponseValue::Selection { index }) => *index,
                _ => None,
            },
            live,
        },
        FieldPayload::Checkbox { choices } => UiElement::CheckboxGroup {
            options: choices.clone(),
            checked: match answer {
                Some(ResponseValue::Checked { indices }) => indices.clone(),
                _ => Vec::new(),
            },
            live,
        },
        FieldPayload::Date => UiElement::DateInput {
            value: match answer {
                Some(ResponseValue::Date { date }) => *date,
                _ => None,
            },
            live,
        },
        FieldPayload::File => UiElement::FileInput {
            file_name: match answer {
                Some(ResponseValue::File { name }) => name.clone(),
                _ => None,
            },
            live,
        },
    };
    UiElement::Column {
        children: vec![heading, body],
    }
}

fn text_answer(answer: Option<&ResponseValue>) -> String {
    match answer {
        Some(ResponseValue::Text { text }) => text.clone(),
        _ => String::new(),
    }
}
