// File: src/field.rs
// Purpose: The four contact form fields and the metadata each one renders with

use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// One input of the contact form.
///
/// Declaration order is display order; `Ord` follows it, so maps keyed by
/// `FieldName` iterate top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Message,
}

impl FieldName {
    pub const ALL: [FieldName; 4] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Message,
    ];

    /// HTML name and id of the input
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::Email => "email",
            FieldName::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldName::FirstName => "First Name*",
            FieldName::LastName => "Last Name*",
            FieldName::Email => "Email*",
            FieldName::Message => "Message",
        }
    }

    /// Caption used in the submitted summary, e.g. "First Name"
    pub fn caption(self) -> &'static str {
        self.label().trim_end_matches('*')
    }

    /// Stable identifier of the summary node showing this field
    pub fn display_id(self) -> &'static str {
        match self {
            FieldName::FirstName => "firstnameDisplay",
            FieldName::LastName => "lastnameDisplay",
            FieldName::Email => "emailDisplay",
            FieldName::Message => "messageDisplay",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, FieldName::Message)
    }

    /// HTML5 attributes mirroring the validation rule of this field
    pub fn attrs(self, first_name_min_length: usize) -> FieldAttrs {
        let mut attrs = FieldAttrs::new(self.label());
        match self {
            FieldName::FirstName => {
                attrs.set("type", "text");
                attrs.set("minlength", first_name_min_length.to_string());
            }
            FieldName::LastName => attrs.set("type", "text"),
            FieldName::Email => attrs.set("type", "email"),
            FieldName::Message => {}
        }
        if self.is_required() {
            attrs.set("required", "");
        }
        attrs
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    /// Accepts `firstName`, `first_name`, `first-name` and `firstname`, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "firstname" => Ok(FieldName::FirstName),
            "lastname" => Ok(FieldName::LastName),
            "email" => Ok(FieldName::Email),
            "message" => Ok(FieldName::Message),
            _ => Err(FormError::UnknownField(s.to_string())),
        }
    }
}

/// HTML5 attributes and label of one rendered input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAttrs {
    /// HTML5 native attributes (e.g., "required", "minlength", "type")
    pub html5_attrs: BTreeMap<String, String>,
    pub label: String,
}

impl FieldAttrs {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            html5_attrs: BTreeMap::new(),
            label: label.into(),
        }
    }

    fn set(&mut self, key: &str, value: impl Into<String>) {
        self.html5_attrs.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.html5_attrs.get(key).map(String::as_str)
    }

    pub fn is_required(&self) -> bool {
        self.html5_attrs.contains_key("required")
    }

    /// Render HTML5 attributes as a string, valueless attributes bare
    pub fn render_html5_attrs(&self) -> String {
        self.html5_attrs
            .iter()
            .map(|(k, v)| {
                if v.is_empty() {
                    k.clone()
                } else {
                    format!("{}=\"{}\"", k, v)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
