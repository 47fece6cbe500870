// File: src/validation/mod.rs
// Purpose: Rule table for the contact form and the per-field error map

use crate::config::ValidationConfig;
use crate::field::FieldName;
use crate::state::FormState;
use contact_validation_core::{has_min_chars, is_present, is_valid_email};
use std::collections::BTreeMap;

pub const LAST_NAME_REQUIRED: &str = "Error: lastname is a required field.";
pub const EMAIL_INVALID: &str = "Error: email must be a valid email address.";

/// Why a field failed. One kind per rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// firstName shorter than the minimum length
    TooShort,
    /// lastName left empty
    MissingRequiredField,
    /// email not shaped like local@domain.tld
    InvalidFormat,
}

/// A failed rule with the text shown under the field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldError {
    fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Field name to error. A field without an entry has no error to show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorState {
    errors: BTreeMap<FieldName, FieldError>,
}

impl ErrorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Error text for a field, if any
    pub fn message(&self, field: FieldName) -> Option<&str> {
        self.get(field).map(|e| e.message.as_str())
    }

    pub fn has_error(&self, field: FieldName) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when any required field failed, which is what blocks a submit
    pub fn blocks_submission(&self) -> bool {
        self.errors.keys().any(|f| f.is_required())
    }

    /// Errors in display order
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldError)> {
        self.errors.iter().map(|(f, e)| (*f, e))
    }

    pub fn fields(&self) -> Vec<FieldName> {
        self.errors.keys().copied().collect()
    }

    /// Replace the entry for one field with the outcome of its rule
    pub(crate) fn record(&mut self, field: FieldName, outcome: Option<FieldError>) {
        match outcome {
            Some(error) => {
                self.errors.insert(field, error);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        self.errors.clear();
    }
}

/// The rule table. Only firstName's minimum length is tunable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    pub first_name_min_length: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self::from(&ValidationConfig::default())
    }
}

impl From<&ValidationConfig> for Rules {
    fn from(config: &ValidationConfig) -> Self {
        Self {
            first_name_min_length: config.first_name_min_length,
        }
    }
}

impl Rules {
    /// Run the rule for a single field. `None` means the value passes.
    pub fn check(&self, field: FieldName, value: &str) -> Option<FieldError> {
        match field {
            FieldName::FirstName if !has_min_chars(value, self.first_name_min_length) => {
                Some(FieldError::new(
                    ErrorKind::TooShort,
                    format!(
                        "Error: firstname must have at least {} characters.",
                        self.first_name_min_length
                    ),
                ))
            }
            FieldName::LastName if !is_present(value) => Some(FieldError::new(
                ErrorKind::MissingRequiredField,
                LAST_NAME_REQUIRED,
            )),
            FieldName::Email if !is_valid_email(value) => {
                Some(FieldError::new(ErrorKind::InvalidFormat, EMAIL_INVALID))
            }
            _ => None,
        }
    }

    /// Validate every field of `state`
    pub fn validate(&self, state: &FormState) -> ErrorState {
        let mut errors = ErrorState::new();
        for field in FieldName::ALL {
            errors.record(field, self.check(field, state.get(field)));
        }
        errors
    }
}

/// Validate `state` against the default rule table
pub fn validate(state: &FormState) -> ErrorState {
    Rules::default().validate(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn state(first: &str, last: &str, email: &str, message: &str) -> FormState {
        FormState {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[rstest]
    #[case("", true)]
    #[case("b", true)]
    #[case("bail", true)]
    #[case("baile", false)]
    #[case("bailey", false)]
    fn test_first_name_rule(#[case] value: &str, #[case] fails: bool) {
        let error = Rules::default().check(FieldName::FirstName, value);
        assert_eq!(error.is_some(), fails);
        if let Some(error) = error {
            assert_eq!(error.kind, ErrorKind::TooShort);
            assert_eq!(
                error.message,
                "Error: firstname must have at least 5 characters."
            );
        }
    }

    #[rstest]
    #[case("", true)]
    #[case("r", false)]
    #[case("random", false)]
    fn test_last_name_rule(#[case] value: &str, #[case] fails: bool) {
        let error = Rules::default().check(FieldName::LastName, value);
        assert_eq!(error.is_some(), fails);
        if let Some(error) = error {
            assert_eq!(error.kind, ErrorKind::MissingRequiredField);
            assert_eq!(error.message, LAST_NAME_REQUIRED);
        }
    }

    #[rstest]
    #[case("", true)]
    #[case("random@random", true)]
    #[case("random@random.com", false)]
    fn test_email_rule(#[case] value: &str, #[case] fails: bool) {
        let error = Rules::default().check(FieldName::Email, value);
        assert_eq!(error.is_some(), fails);
        if let Some(error) = error {
            assert_eq!(error.kind, ErrorKind::InvalidFormat);
            assert_eq!(error.message, EMAIL_INVALID);
        }
    }

    #[test]
    fn test_message_always_valid() {
        let rules = Rules::default();
        assert_eq!(rules.check(FieldName::Message, ""), None);
        assert_eq!(rules.check(FieldName::Message, "this is a message"), None);
    }

    #[test]
    fn test_blank_state_fails_three_required_fields() {
        let errors = validate(&FormState::new());
        assert_eq!(
            errors.fields(),
            vec![FieldName::FirstName, FieldName::LastName, FieldName::Email]
        );
        assert!(errors.blocks_submission());
    }

    #[test]
    fn test_validate_is_pure() {
        let input = state("bail", "", "random@random", "hi");
        let first = validate(&input);
        let second = validate(&input);
        assert_eq!(first, second);
        assert_eq!(input, state("bail", "", "random@random", "hi"));
    }

    #[test]
    fn test_valid_state_has_no_errors() {
        let errors = validate(&state("bailey", "evanger", "random@random.com", ""));
        assert!(errors.is_empty());
        assert!(!errors.blocks_submission());
    }

    #[test]
    fn test_custom_min_length_changes_text() {
        let rules = Rules {
            first_name_min_length: 3,
        };
        assert_eq!(rules.check(FieldName::FirstName, "bob"), None);
        assert_eq!(
            rules.check(FieldName::FirstName, "bo").map(|e| e.message),
            Some("Error: firstname must have at least 3 characters.".to_string())
        );
    }

    #[test]
    fn test_record_replaces_and_removes() {
        let mut errors = ErrorState::new();
        let rules = Rules::default();
        errors.record(FieldName::LastName, rules.check(FieldName::LastName, ""));
        assert!(errors.has_error(FieldName::LastName));
        errors.record(FieldName::LastName, rules.check(FieldName::LastName, "x"));
        assert!(!errors.has_error(FieldName::LastName));
        assert_eq!(errors.len(), 0);
    }
}
