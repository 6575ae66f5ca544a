//! The field catalog: the fixed set of insertable question types.
//!
//! Exposed so an external palette UI can enumerate the types with their
//! display metadata. The set is closed; inserting anything else is not
//! expressible.

use crate::field::FieldType;

/// One palette entry: a type tag with its display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub field_type: FieldType,
    /// Human-readable palette label.
    pub label: &'static str,
    /// Icon name resolved by the host UI's icon set.
    pub icon: &'static str,
}

const CATALOG: [CatalogEntry; 7] = [
    CatalogEntry {
        field_type: FieldType::Section,
        label: "Section Header",
        icon: "heading",
    },
    CatalogEntry {
        field_type: FieldType::ShortText,
        label: "Short Answer",
        icon: "short-text",
    },
    CatalogEntry {
        field_type: FieldType::LongText,
        label: "Paragraph",
        icon: "paragraph",
    },
    CatalogEntry {
        field_type: FieldType::Choice,
        label: "Multiple Choice",
        icon: "radio-button",
    },
    CatalogEntry {
        field_type: FieldType::Checkbox,
        label: "Checkboxes",
        icon: "checkbox",
    },
    CatalogEntry {
        field_type: FieldType::Date,
        label: "Date",
        icon: "calendar",
    },
    CatalogEntry {
        field_type: FieldType::File,
        label: "File Upload",
        icon: "upload",
    },
];

/// The fixed 7-entry catalog, in palette order.
pub fn catalog() -> &'static [CatalogEntry] {
    &CATALOG
}

impl CatalogEntry {
    /// Look up the entry for a type tag. Total over the closed tag set.
    pub fn for_type(field_type: FieldType) -> CatalogEntry {
        match field_type {
            FieldType::Section => CATALOG[0],
            FieldType::ShortText => CATALOG[1],
            FieldType::LongText => CATALOG[2],
            FieldType::Choice => CATALOG[3],
            FieldType::Checkbox => CATALOG[4],
            FieldType::Date => CATALOG[5],
            FieldType::File => CATALOG[6],
        }
    }
}
