//! Contact Validation Core
//!
//! Pure predicates behind the contact form rules. No messages, no state:
//! callers decide what a failed check means for their field.

pub mod email;
pub mod string;

pub use email::*;
pub use string::*;
