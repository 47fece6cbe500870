//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

/// local@domain.tld: one `@`, a non-empty local part, and a domain with at
/// least one dot followed by a non-empty final label. No whitespace anywhere.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]*\.[^@\s.]+$").expect("email shape pattern compiles")
});

/// Validates the local@domain.tld shape of an email address
///
/// Checks for:
/// - Exactly one '@' symbol
/// - Content before the '@'
/// - At least one '.' in the domain part
/// - A non-empty label after the final '.'
///
/// Deliverability, TLD lists and quoted local parts are out of scope.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}
