// Contact Form - controller, validation rules and view selection
// Explicit state object plus pure render functions, one controller per form instance

pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod field;
pub mod render;
pub mod state;
pub mod validation;
pub mod view;

// Re-export core types
pub use config::Config;
pub use controller::{DisplayMode, FormController};
pub use error::FormError;
pub use events::{parse_script, FormEvent, Outcome};
pub use field::{FieldAttrs, FieldName};
pub use render::{render_html, render_html_with};
pub use state::{FormState, SubmittedRecord};
pub use validation::{validate, ErrorKind, ErrorState, FieldError, Rules};
pub use view::{Node, Role, ViewKind, ViewModel};

// Re-export Maud markup so callers don't need a direct dependency
pub use maud::Markup;
