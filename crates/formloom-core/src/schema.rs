//! The schema model: an ordered sequence of field definitions plus the
//! operations that mutate it.

use formloom_api::{FieldDefinition, FieldId, FieldPayload, FieldRecord, FieldType};
use tracing::{debug, trace, warn};

/// Ordered sequence of field definitions making up one form.
///
/// Sequence position is the sole source of truth for rendering and
/// submission order; the persisted `field_order` hint is rewritten from it
/// on export and never read for layout. Ids are unique at all times.
///
/// Every mutating operation that references an id resolves it against the
/// current sequence; an unresolved id makes the operation a no-op, never
/// an error. Nothing in here panics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSchema {
    fields: Vec<FieldDefinition>,
    /// Field currently open in the builder's property editor, if any.
    focused: Option<FieldId>,
}

impl FormSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a schema from in-memory fields. Later duplicates of an id are
    /// dropped to uphold the uniqueness invariant.
    pub fn from_fields(fields: Vec<FieldDefinition>) -> Self {
        let mut schema = Self::new();
        for field in fields {
            if schema.position(&field.id).is_some() {
                warn!(id = %field.id, "dropping field with duplicate id");
                continue;
            }
            schema.fields.push(field);
        }
        schema
    }

    /// Rebuild a schema from its stored shape. Array order wins; the
    /// records' `field_order` hints are ignored.
    pub fn from_records(records: Vec<FieldRecord>) -> Self {
        Self::from_fields(records.into_iter().map(FieldDefinition::from).collect())
    }

    /// Export the schema in wire shape, with `field_order` rewritten from
    /// the authoritative sequence position.
    pub fn to_records(&self) -> Vec<FieldRecord> {
        self.fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let mut record = FieldRecord::from(field);
                record.field_order = index as u32 + 1;
                record
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn get(&self, id: &FieldId) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| &f.id == id)
    }

    /// Sequence index of the field with this id.
    pub fn position(&self, id: &FieldId) -> Option<usize> {
        self.fields.iter().position(|f| &f.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &FieldId> {
        self.fields.iter().map(|f| &f.id)
    }

    // =========================================================================
    // Field operations
    // =========================================================================

    /// Create a field of the given catalog type and append it to the end
    /// of the sequence. Returns the new field.
    pub fn append(&mut self, field_type: FieldType) -> &FieldDefinition {
        let mut field = FieldDefinition::new(field_type);
        field.field_order = self.fields.len() as u32 + 1;
        debug!(id = %field.id, %field_type, "field appended");
        let index = self.fields.len();
        self.fields.push(field);
        &self.fields[index]
    }

    /// Delete the field with this id. Clears focus if the focused field
    /// was removed. Returns whether anything changed.
    pub fn remove(&mut self, id: &FieldId) -> bool {
        let Some(index) = self.position(id) else {
            trace!(%id, "remove: unknown id");
            return false;
        };
        self.fields.remove(index);
        if self.focused.as_ref() == Some(id) {
            self.focused = None;
        }
        debug!(%id, "field removed");
        true
    }

    /// Move the field identified by `from` to the position currently
    /// occupied by `to`, shifting everything in between by one. A no-op
    /// when either id is unresolved or `from == to`. Returns whether the
    /// sequence changed.
    pub fn reorder(&mut self, from: &FieldId, to: &FieldId) -> bool {
        if from == to {
            return false;
        }
        let (Some(from_index), Some(to_index)) = (self.position(from), self.position(to)) else {
            trace!(%from, %to, "reorder: unresolved id");
            return false;
        };
        let field = self.fields.remove(from_index);
        self.fields.insert(to_index, field);
        debug!(%from, %to, from_index, to_index, "field reordered");
        true
    }

    // =========================================================================
    // Property edits
    // =========================================================================
    //
    // No type-level validation happens here; validity is checked only at
    // the save/submit boundary. Edits that do not apply to the field's
    // variant are silent no-ops.

    pub fn edit_header(&mut self, id: &FieldId, header: impl Into<String>) {
        if let Some(field) = self.get_mut(id) {
            field.header = header.into();
        }
    }

    pub fn edit_required(&mut self, id: &FieldId, required: bool) {
        if let Some(field) = self.get_mut(id) {
            field.required = required;
        }
    }

    /// Set the section body text. No-op for non-section fields.
    pub fn edit_description(&mut self, id: &FieldId, description: impl Into<String>) {
        if let Some(field) = self.get_mut(id) {
            if let FieldPayload::Section { description: slot } = &mut field.payload {
                *slot = description.into();
            }
        }
    }

    /// Set the input hint. No-op for fields without one.
    pub fn edit_placeholder(&mut self, id: &FieldId, placeholder: impl Into<String>) {
        if let Some(field) = self.get_mut(id) {
            match &mut field.payload {
                FieldPayload::ShortText { placeholder: slot }
                | FieldPayload::LongText { placeholder: slot } => *slot = placeholder.into(),
                _ => {}
            }
        }
    }

    // =========================================================================
    // Choice operations
    // =========================================================================

    /// Replace the text of one choice. Out-of-range indices are no-ops.
    pub fn edit_choice(&mut self, id: &FieldId, index: usize, text: impl Into<String>) {
        if let Some(choices) = self.get_mut(id).and_then(FieldDefinition::choices_mut) {
            if let Some(slot) = choices.get_mut(index) {
                *slot = text.into();
            }
        }
    }

    /// Append an empty choice row.
    pub fn add_choice(&mut self, id: &FieldId) {
        if let Some(choices) = self.get_mut(id).and_then(FieldDefinition::choices_mut) {
            choices.push(String::new());
        }
    }

    /// Delete the choice at `index`.
    pub fn remove_choice(&mut self, id: &FieldId, index: usize) {
        if let Some(choices) = self.get_mut(id).and_then(FieldDefinition::choices_mut) {
            if index < choices.len() {
                choices.remove(index);
            }
        }
    }

    /// Move one choice with the same move-and-shift semantics as field
    /// reorder, scoped to this field's choice list. Returns whether the
    /// list changed.
    pub fn reorder_choice(&mut self, id: &FieldId, from: usize, to: usize) -> bool {
        let Some(choices) = self.get_mut(id).and_then(FieldDefinition::choices_mut) else {
            trace!(%id, "reorder_choice: no choice list");
            return false;
        };
        if from == to || from >= choices.len() || to >= choices.len() {
            return false;
        }
        let choice = choices.remove(from);
        choices.insert(to, choice);
        debug!(%id, from, to, "choice reordered");
        true
    }

    // =========================================================================
    // Focus tracking
    // =========================================================================

    /// Open a field in the property editor. Unknown ids are ignored.
    pub fn focus(&mut self, id: &FieldId) {
        if self.position(id).is_some() {
            self.focused = Some(id.clone());
        }
    }

    pub fn clear_focus(&mut self) {
        self.focused = None;
    }

    pub fn focused(&self) -> Option<&FieldId> {
        self.focused.as_ref()
    }

    fn get_mut(&mut self, id: &FieldId) -> Option<&mut FieldDefinition> {
        let field = self.fields.iter_mut().find(|f| &f.id == id);
        if field.is_none() {
            trace!(%id, "edit: unknown id");
        }
        field
    }
}
