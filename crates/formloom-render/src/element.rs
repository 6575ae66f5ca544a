//! Intermediate representation of rendered form surfaces.
//!
//! This separates the projection phase (schema -> UiElement) from the
//! toolkit phase (UiElement -> whatever the host UI draws). The same tree
//! can be interpreted by a DOM renderer, a TUI, or a test.

use chrono::NaiveDate;
use formloom_api::FieldId;

#[derive(Debug, Clone, PartialEq)]
pub enum UiElement {
    /// Prominent label text: field headers and section headings.
    Heading {
        text: String,
        /// Show the "answer required" marker next to the text.
        required_marker: bool,
    },
    /// Plain body text.
    Paragraph { text: String },
    /// Single-line text affordance. `live` means the input accepts typing
    /// (response mode); otherwise it is a static stand-in.
    TextInput {
        placeholder: String,
        value: String,
        live: bool,
    },
    /// Multi-line text affordance.
    TextArea {
        placeholder: String,
        value: String,
        live: bool,
    },
    /// Exactly-one-of selector.
    RadioGroup {
        options: Vec<String>,
        selected: Option<usize>,
        live: bool,
    },
    /// Any-subset selector.
    CheckboxGroup {
        options: Vec<String>,
        checked: Vec<usize>,
        live: bool,
    },
    DateInput { value: Option<NaiveDate>, live: bool },
    FileInput { file_name: Option<String>, live: bool },
    /// Builder affordance to grab a field card.
    DragHandle { field: FieldId },
    /// Builder affordance to delete a field card.
    DeleteButton { field: FieldId },
    /// The drop-area sentinel row; `armed` shows the will-insert-here
    /// indicator.
    InsertMarker { armed: bool },
    /// Response-mode submit trigger, enabled only when the response is
    /// complete.
    SubmitButton { enabled: bool },
    Row { children: Vec<UiElement> },
    Column { children: Vec<UiElement> },
}

impl UiElement {
    /// Child elements, empty for leaves.
    pub fn children(&self) -> &[UiElement] {
        match self {
            UiElement::Row { children } | UiElement::Column { children } => children,
            _ => &[],
        }
    }

    /// Visit this element and every descendant, depth first.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a UiElement)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }

    /// Find the submit trigger anywhere in the tree, if present.
    pub fn find_submit(&self) -> Option<&UiElement> {
        let mut found = None;
        self.walk(&mut |element| {
            if found.is_none() && matches!(element, UiElement::SubmitButton { .. }) {
                found = Some(element);
            }
        });
        found
    }

    /// Count the live input affordances in the tree.
    pub fn live_input_count(&self) -> usize {
        let mut count = 0;
        self.walk(&mut |element| {
            let live = match element {
                UiElement::TextInput { live, .. }
                | UiElement::TextArea { live, .. }
                | UiElement::RadioGroup { live, .. }
                | UiElement::CheckboxGroup { live, .. }
                | UiElement::DateInput { live, .. }
                | UiElement::FileInput { live, .. } => *live,
                _ => false,
            };
            if live {
                count += 1;
            }
        });
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_visits_depth_first() {
        let tree = UiElement::Column {
            children: vec![
                UiElement::Row {
                    children: vec![UiElement::Paragraph { text: "a".into() }],
                },
                UiElement::Paragraph { text: "b".into() },
            ],
        };
        let mut texts = Vec::new();
        tree.walk(&mut |element| {
            if let UiElement::Paragraph { text } = element {
                texts.push(text.clone());
            }
        });
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn find_submit_searches_nested_rows() {
        let tree = UiElement::Column {
            children: vec![UiElement::Row {
                children: vec![UiElement::SubmitButton { enabled: true }],
            }],
        };
        assert_eq!(
            tree.find_submit(),
            Some(&UiElement::SubmitButton { enabled: true })
        );
        assert!(UiElement::Paragraph { text: "x".into() }.find_submit().is_none());
    }
}
