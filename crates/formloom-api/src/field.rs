use serde::{Deserialize, Serialize};

// =============================================================================
// FieldId
// =============================================================================

/// Opaque identifier of a field within a form schema.
///
/// Generated once at field creation, stable across reorders, never reused.
/// That makes it a safe key for drag gestures and response entries even
/// while the sequence is being rearranged under the pointer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(String);

impl FieldId {
    /// Generate a fresh random id.
    pub fn generate() -> Self {
        FieldId(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for FieldId {
    fn from(s: String) -> Self {
        FieldId(s)
    }
}

impl From<&str> for FieldId {
    fn from(s: &str) -> Self {
        FieldId(s.to_string())
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// FieldType - the closed catalog tag set
// =============================================================================

/// The closed set of insertable field types.
///
/// Wire names use the original SCREAMING_SNAKE tags (`SHORT_TEXT`, ...).
/// A field's type is immutable after creation; there is no in-place
/// conversion between types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldType {
    Section,
    ShortText,
    LongText,
    Choice,
    Checkbox,
    Date,
    File,
}

impl FieldType {
    /// All tags in catalog order.
    pub const ALL: [FieldType; 7] = [
        FieldType::Section,
        FieldType::ShortText,
        FieldType::LongText,
        FieldType::Choice,
        FieldType::Checkbox,
        FieldType::Date,
        FieldType::File,
    ];

    /// The wire tag for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Section => "SECTION",
            FieldType::ShortText => "SHORT_TEXT",
            FieldType::LongText => "LONG_TEXT",
            FieldType::Choice => "CHOICE",
            FieldType::Checkbox => "CHECKBOX",
            FieldType::Date => "DATE",
            FieldType::File => "FILE",
        }
    }

    /// Whether fields of this type carry an ordered choice list.
    pub fn has_choices(&self) -> bool {
        matches!(self, FieldType::Choice | FieldType::Checkbox)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// FieldPayload - per-type attributes
// =============================================================================

/// Per-type payload of a field.
///
/// Each variant carries only the attributes meaningful to its type, so
/// property edits pattern-match on the tag instead of probing optional
/// attributes.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldPayload {
    /// Section header; `description` is the body text under the header.
    Section { description: String },
    /// Single-line free text answer.
    ShortText { placeholder: String },
    /// Multi-line free text answer.
    LongText { placeholder: String },
    /// Pick exactly one of the listed choices.
    Choice { choices: Vec<String> },
    /// Pick any subset of the listed choices.
    Checkbox { choices: Vec<String> },
    /// Calendar date answer.
    Date,
    /// File upload answer.
    File,
}

impl FieldPayload {
    /// Default payload for a freshly inserted field of the given type.
    ///
    /// Choice lists start with a single empty entry so the builder has a
    /// row to edit immediately after the drop.
    pub fn default_for(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Section => FieldPayload::Section {
                description: String::new(),
            },
            FieldType::ShortText => FieldPayload::ShortText {
                placeholder: String::new(),
            },
            FieldType::LongText => FieldPayload::LongText {
                placeholder: String::new(),
            },
            FieldType::Choice => FieldPayload::Choice {
                choices: vec![String::new()],
            },
            FieldType::Checkbox => FieldPayload::Checkbox {
                choices: vec![String::new()],
            },
            FieldType::Date => FieldPayload::Date,
            FieldType::File => FieldPayload::File,
        }
    }

    /// The type tag of this payload.
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldPayload::Section { .. } => FieldType::Section,
            FieldPayload::ShortText { .. } => FieldType::ShortText,
            FieldPayload::LongText { .. } => FieldType::LongText,
            FieldPayload::Choice { .. } => FieldType::Choice,
            FieldPayload::Checkbox { .. } => FieldType::Checkbox,
            FieldPayload::Date => FieldType::Date,
            FieldPayload::File => FieldType::File,
        }
    }
}

// =============================================================================
// FieldDefinition
// =============================================================================

/// One entry in a form schema.
///
/// The envelope attributes (`id`, `header`, `required`, `field_order`) are
/// common to every type; everything type-specific lives in the payload.
///
/// `field_order` is an advisory position hint persisted alongside the
/// field. The container sequence index is the authoritative order; the
/// hint is rewritten from it at export time and never trusted for layout.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    pub id: FieldId,
    /// Display label / question text. For sections this is the heading
    /// and the payload's `description` carries the body.
    pub header: String,
    /// Whether an answer is mandatory. Ignored for sections.
    pub required: bool,
    pub field_order: u32,
    pub payload: FieldPayload,
}

impl FieldDefinition {
    /// Create a field of the given catalog type with a fresh id and the
    /// default empty payload for that type.
    pub fn new(field_type: FieldType) -> Self {
        Self {
            id: FieldId::generate(),
            header: String::new(),
            required: false,
            field_order: 0,
            payload: FieldPayload::default_for(field_type),
        }
    }

    /// Builder: set the header text.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Builder: mark the field required.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Builder: replace the choice list. No-op for types without choices.
    pub fn with_choices(mut self, choices: Vec<String>) -> Self {
        if let Some(existing) = self.choices_mut() {
            *existing = choices;
        }
        self
    }

    pub fn field_type(&self) -> FieldType {
        self.payload.field_type()
    }

    /// The section body text, if this is a section.
    pub fn description(&self) -> Option<&str> {
        match &self.payload {
            FieldPayload::Section { description } => Some(description),
            _ => None,
        }
    }

    /// The input hint, if this is a text field.
    pub fn placeholder(&self) -> Option<&str> {
        match &self.payload {
            FieldPayload::ShortText { placeholder } | FieldPayload::LongText { placeholder } => {
                Some(placeholder)
            }
            _ => None,
        }
    }

    /// The ordered choice list, if this type has one.
    pub fn choices(&self) -> Option<&[String]> {
        match &self.payload {
            FieldPayload::Choice { choices } | FieldPayload::Checkbox { choices } => {
                Some(choices.as_slice())
            }
            _ => None,
        }
    }

    pub fn choices_mut(&mut self) -> Option<&mut Vec<String>> {
        match &mut self.payload {
            FieldPayload::Choice { choices } | FieldPayload::Checkbox { choices } => Some(choices),
            _ => None,
        }
    }
}

// =============================================================================
// FieldRecord - flat wire/storage shape
// =============================================================================

/// Flat storage shape of a field, as handed to and received from the
/// persistence boundary.
///
/// Array order of records is the schema order. Attributes not meaningful
/// to the record's type are absent on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRecord {
    pub id: FieldId,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub field_order: u32,
    #[serde(default)]
    pub header: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
}

impl From<&FieldDefinition> for FieldRecord {
    fn from(field: &FieldDefinition) -> Self {
        FieldRecord {
            id: field.id.clone(),
            field_type: field.field_type(),
            field_order: field.field_order,
            header: field.header.clone(),
            description: field.description().map(str::to_string),
            placeholder: field.placeholder().map(str::to_string),
            required: field.required,
            choices: field.choices().map(<[String]>::to_vec),
        }
    }
}

impl From<FieldRecord> for FieldDefinition {
    /// Rebuild the in-memory field from its stored shape.
    ///
    /// Attributes that are not meaningful to the record's type are dropped;
    /// missing ones default to empty. The conversion is total.
    fn from(record: FieldRecord) -> Self {
        let payload = match record.field_type {
            FieldType::Section => FieldPayload::Section {
                description: record.description.unwrap_or_default(),
            },
            FieldType::ShortText => FieldPayload::ShortText {
                placeholder: record.placeholder.unwrap_or_default(),
            },
            FieldType::LongText => FieldPayload::LongText {
                placeholder: record.placeholder.unwrap_or_default(),
            },
            FieldType::Choice => FieldPayload::Choice {
                choices: record.choices.unwrap_or_default(),
            },
            FieldType::Checkbox => FieldPayload::Checkbox {
                choices: record.choices.unwrap_or_default(),
            },
            FieldType::Date => FieldPayload::Date,
            FieldType::File => FieldPayload::File,
        };
        FieldDefinition {
            id: record.id,
            header: record.header,
            required: record.required,
            field_order: record.field_order,
            payload,
        }
    }
}
