//! Response payload model: the answers a respondent fills into a form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::field::FieldId;

// =============================================================================
// ResponseValue - one answer slot
// =============================================================================

/// One answer slot. Each variant is the slot an answerable field type
/// reads at submission time: text for short/long text, a selected index
/// for choice, selected indices for checkbox, a date, a file handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResponseValue {
    Text { text: String },
    Selection { index: Option<usize> },
    Checked { indices: Vec<usize> },
    Date { date: Option<NaiveDate> },
    File { name: Option<String> },
}

impl ResponseValue {
    /// Whether this slot carries a usable answer.
    pub fn is_answered(&self) -> bool {
        match self {
            ResponseValue::Text { text } => !text.is_empty(),
            ResponseValue::Selection { index } => index.is_some(),
            ResponseValue::Checked { indices } => !indices.is_empty(),
            ResponseValue::Date { date } => date.is_some(),
            ResponseValue::File { name } => name.as_deref().is_some_and(|n| !n.is_empty()),
        }
    }
}

// =============================================================================
// FormResponse - answers for one form
// =============================================================================

/// Answers collected for one form, keyed by field id.
///
/// Entries whose id matches no schema field are ignored at validation
/// time, so a stale answer for a deleted field is harmless.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormResponse {
    entries: HashMap<FieldId, ResponseValue>,
}

impl FormResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &FieldId) -> Option<&ResponseValue> {
        self.entries.get(id)
    }

    pub fn set(&mut self, id: FieldId, value: ResponseValue) {
        self.entries.insert(id, value);
    }

    /// Fill the text slot for a field.
    pub fn set_text(&mut self, id: FieldId, text: impl Into<String>) {
        self.set(id, ResponseValue::Text { text: text.into() });
    }

    /// Pick the choice at `index` for a field.
    pub fn select(&mut self, id: FieldId, index: usize) {
        self.set(id, ResponseValue::Selection { index: Some(index) });
    }

    /// Toggle the checkbox at `index` for a field. Creates the slot on
    /// first use.
    pub fn toggle_check(&mut self, id: FieldId, index: usize) {
        let slot = self
            .entries
            .entry(id)
            .or_insert(ResponseValue::Checked { indices: vec![] });
        if let ResponseValue::Checked { indices } = slot {
            match indices.iter().position(|&i| i == index) {
                Some(at) => {
                    indices.remove(at);
                }
                None => indices.push(index),
            }
        }
    }

    pub fn set_date(&mut self, id: FieldId, date: NaiveDate) {
        self.set(id, ResponseValue::Date { date: Some(date) });
    }

    pub fn set_file(&mut self, id: FieldId, name: impl Into<String>) {
        self.set(
            id,
            ResponseValue::File {
                name: Some(name.into()),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldId, &ResponseValue)> {
        self.entries.iter()
    }
}
