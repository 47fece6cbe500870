// File: src/view.rs
// Purpose: Pure view models for the two display modes, plus the queries consumers use to inspect them

use crate::field::FieldName;
use crate::state::{FormState, SubmittedRecord};
use crate::validation::ErrorState;

pub const SUMMARY_HEADING: &str = "You Submitted:";
pub const SUBMIT_LABEL: &str = "Submit";

/// Accessible role of a rendered node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Heading,
    Textbox,
    Button,
    /// Validation error under an input
    Alert,
    Text,
}

/// One rendered element.
///
/// `text` is the visible text content. Inputs have none; their label and
/// current value are kept separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub role: Role,
    pub text: String,
    pub field: Option<FieldName>,
    pub label: Option<String>,
    pub value: Option<String>,
    pub test_id: Option<&'static str>,
}

impl Node {
    fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            field: None,
            label: None,
            value: None,
            test_id: None,
        }
    }

    fn input(field: FieldName, value: &str) -> Self {
        Self {
            field: Some(field),
            label: Some(field.label().to_string()),
            value: Some(value.to_string()),
            ..Self::new(Role::Textbox, "")
        }
    }

    fn error(field: FieldName, message: &str) -> Self {
        Self {
            field: Some(field),
            ..Self::new(Role::Alert, message)
        }
    }

    fn display(field: FieldName, value: &str) -> Self {
        Self {
            field: Some(field),
            test_id: Some(field.display_id()),
            ..Self::new(Role::Text, format!("{}: {}", field.caption(), value))
        }
    }

    pub fn has_text(&self, needle: &str) -> bool {
        contains_ignore_case(&self.text, needle)
    }
}

/// Which of the two views a [`ViewModel`] represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Editing,
    Summary,
}

/// Everything a consumer can observe about the form at one instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    kind: ViewKind,
    nodes: Vec<Node>,
}

impl ViewModel {
    /// Editable form: heading, then each input followed by its error if it has one, then the button
    pub fn editing(title: &str, state: &FormState, errors: &ErrorState) -> Self {
        let mut nodes = vec![Node::new(Role::Heading, title)];
        for field in FieldName::ALL {
            nodes.push(Node::input(field, state.get(field)));
            if let Some(message) = errors.message(field).filter(|m| !m.is_empty()) {
                nodes.push(Node::error(field, message));
            }
        }
        nodes.push(Node::new(Role::Button, SUBMIT_LABEL));
        Self {
            kind: ViewKind::Editing,
            nodes,
        }
    }

    /// Read-only summary. The message node only exists when a message was submitted.
    pub fn summary(record: &SubmittedRecord) -> Self {
        let mut nodes = vec![Node::new(Role::Heading, SUMMARY_HEADING)];
        for field in FieldName::ALL {
            if field.is_required() || !record.get(field).is_empty() {
                nodes.push(Node::display(field, record.get(field)));
            }
        }
        Self {
            kind: ViewKind::Summary,
            nodes,
        }
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Input whose label contains `needle`, ignoring case
    pub fn get_by_label_text(&self, needle: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| {
            n.role == Role::Textbox
                && n.label
                    .as_deref()
                    .is_some_and(|label| contains_ignore_case(label, needle))
        })
    }

    pub fn get_by_role(&self, role: Role) -> Option<&Node> {
        self.nodes.iter().find(|n| n.role == role)
    }

    pub fn get_all_by_role(&self, role: Role) -> Vec<&Node> {
        self.nodes.iter().filter(|n| n.role == role).collect()
    }

    /// First node whose text contains `needle`, ignoring case
    pub fn query_by_text(&self, needle: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.has_text(needle))
    }

    pub fn query_all_by_text(&self, needle: &str) -> Vec<&Node> {
        self.nodes.iter().filter(|n| n.has_text(needle)).collect()
    }

    pub fn query_by_test_id(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.test_id == Some(id))
    }

    /// Error texts currently shown, top to bottom
    pub fn error_messages(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|n| n.role == Role::Alert)
            .map(|n| n.text.as_str())
            .collect()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
