//! Pure completeness checks for fields, schemas, and responses.
//!
//! Validators never error and never mutate; they return booleans. Callers
//! at the save/submit boundary are responsible for surfacing a message
//! and refusing to proceed on `false`.

use formloom_api::{FieldDefinition, FieldPayload, FieldType, FormResponse, ResponseValue};

use crate::schema::FormSchema;

/// Whether a single field is complete enough to be saved.
///
/// Every type needs a non-empty header. Sections additionally need a
/// non-empty description; choice and checkbox fields additionally need a
/// non-empty choice list with no empty entries.
pub fn is_field_valid(field: &FieldDefinition) -> bool {
    if field.header.is_empty() {
        return false;
    }
    match &field.payload {
        FieldPayload::Section { description } => !description.is_empty(),
        FieldPayload::Choice { choices } | FieldPayload::Checkbox { choices } => {
            !choices.is_empty() && choices.iter().all(|choice| !choice.is_empty())
        }
        _ => true,
    }
}

/// Whether a whole schema is submittable: at least one field, all valid.
pub fn is_schema_valid(schema: &FormSchema) -> bool {
    !schema.is_empty() && schema.fields().iter().all(is_field_valid)
}

/// Whether a response answers every required field of the schema.
///
/// Sections are exempt regardless of their `required` flag. A required
/// field needs a matching entry carrying an answered slot of the kind its
/// type reads; a wrong-kind slot counts as unanswered. Response entries
/// with no matching field are ignored.
pub fn is_response_complete(schema: &FormSchema, response: &FormResponse) -> bool {
    schema.fields().iter().all(|field| {
        if field.field_type() == FieldType::Section || !field.required {
            return true;
        }
        match response.get(&field.id) {
            Some(value) => slot_kind_matches(field.field_type(), value) && value.is_answered(),
            None => false,
        }
    })
}

fn slot_kind_matches(field_type: FieldType, value: &ResponseValue) -> bool {
    matches!(
        (field_type, value),
        (
            FieldType::ShortText | FieldType::LongText,
            ResponseValue::Text { .. }
        ) | (FieldType::Choice, ResponseValue::Selection { .. })
            | (FieldType::Checkbox, ResponseValue::Checked { .. })
            | (FieldType::Date, ResponseValue::Date { .. })
            | (FieldType::File, ResponseValue::File { .. })
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use formloom_api::FieldId;

    fn named(field_type: FieldType, header: &str) -> FieldDefinition {
        FieldDefinition::new(field_type).with_header(header)
    }

    #[test]
    fn header_is_required_for_every_type() {
        for field_type in FieldType::ALL {
            assert!(
                !is_field_valid(&FieldDefinition::new(field_type)),
                "{field_type} without header should be invalid"
            );
        }
        assert!(is_field_valid(&named(FieldType::ShortText, "Name")));
    }

    #[test]
    fn section_needs_a_description() {
        let bare = named(FieldType::Section, "About");
        assert!(!is_field_valid(&bare));

        let mut schema = FormSchema::from_fields(vec![bare]);
        let id = schema.ids().next().cloned().unwrap();
        schema.edit_description(&id, "Who you are");
        assert!(is_field_valid(&schema.fields()[0]));
    }

    #[test]
    fn choice_list_must_be_non_empty_with_no_blank_entries() {
        let empty = named(FieldType::Choice, "Color").with_choices(vec![]);
        assert!(!is_field_valid(&empty));

        let blank = named(FieldType::Choice, "Color").with_choices(vec!["A".into(), "".into()]);
        assert!(!is_field_valid(&blank));

        let ok = named(FieldType::Choice, "Color").with_choices(vec!["A".into(), "B".into()]);
        assert!(is_field_valid(&ok));
    }

    #[test]
    fn empty_schema_is_invalid() {
        assert!(!is_schema_valid(&FormSchema::new()));
    }

    #[test]
    fn schema_validity_follows_its_fields() {
        let section = named(FieldType::Section, "About");
        assert!(!is_schema_valid(&FormSchema::from_fields(vec![
            section.clone()
        ])));

        let text = named(FieldType::ShortText, "Name");
        assert!(is_schema_valid(&FormSchema::from_fields(vec![text])));
    }

    #[test]
    fn required_text_field_gates_completeness() {
        let field = named(FieldType::ShortText, "Name").with_required(true);
        let id = field.id.clone();
        let schema = FormSchema::from_fields(vec![field]);

        let mut response = FormResponse::new();
        assert!(!is_response_complete(&schema, &response));

        response.set_text(id.clone(), "");
        assert!(!is_response_complete(&schema, &response));

        response.set_text(id, "x");
        assert!(is_response_complete(&schema, &response));
    }

    #[test]
    fn optional_fields_and_sections_are_exempt() {
        let optional = named(FieldType::Date, "When?");
        let section = named(FieldType::Section, "About").with_required(true);
        let schema = FormSchema::from_fields(vec![optional, section]);
        assert!(is_response_complete(&schema, &FormResponse::new()));
    }

    #[test]
    fn checkbox_completeness_reads_the_respondents_selection() {
        let field = named(FieldType::Checkbox, "Toppings")
            .with_required(true)
            .with_choices(vec!["Olives".into(), "Basil".into()]);
        let id = field.id.clone();
        let schema = FormSchema::from_fields(vec![field]);

        // The field has choices, but nothing is ticked yet.
        let mut response = FormResponse::new();
        assert!(!is_response_complete(&schema, &response));

        response.toggle_check(id.clone(), 1);
        assert!(is_response_complete(&schema, &response));

        response.toggle_check(id, 1);
        assert!(!is_response_complete(&schema, &response));
    }

    #[test]
    fn wrong_slot_kind_counts_as_unanswered() {
        let field = named(FieldType::Choice, "Color")
            .with_required(true)
            .with_choices(vec!["Red".into()]);
        let id = field.id.clone();
        let schema = FormSchema::from_fields(vec![field]);

        let mut response = FormResponse::new();
        response.set_text(id.clone(), "Red");
        assert!(!is_response_complete(&schema, &response));

        response.select(id, 0);
        assert!(is_response_complete(&schema, &response));
    }

    #[test]
    fn stale_entries_for_deleted_fields_are_ignored() {
        let field = named(FieldType::ShortText, "Name");
        let schema = FormSchema::from_fields(vec![field]);

        let mut response = FormResponse::new();
        response.set_text(FieldId::from("deleted-field"), "left over");
        assert!(is_response_complete(&schema, &response));
    }
}
