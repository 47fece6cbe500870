// File: src/events.rs
// Purpose: Discrete events a form reacts to, their outcomes, and the line-based event script format

use crate::error::{FormError, Result};
use crate::field::FieldName;
use crate::state::SubmittedRecord;
use crate::validation::ErrorState;

/// One externally triggered event. Events are applied one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Replace a field's value
    Change { field: FieldName, value: String },
    /// Append text one keystroke at a time
    Type { field: FieldName, text: String },
    Submit,
    Reset,
}

/// What applying an event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Updated,
    /// Submit blocked; these errors are now shown
    Rejected { errors: ErrorState },
    Submitted(SubmittedRecord),
    Reset,
}

impl Outcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, Outcome::Submitted(_))
    }
}

/// Parse an event script, one event per line:
///
/// ```text
/// set firstName bailey
/// type email random@random.com
/// submit
/// reset
/// # comments and blank lines are skipped
/// ```
///
/// The value of `set`/`type` is the rest of the line after a single space, kept verbatim.
pub fn parse_script(script: &str) -> Result<Vec<FormEvent>> {
    script
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(idx, line)| parse_line(idx + 1, line))
        .collect()
}

fn parse_line(line_no: usize, line: &str) -> Result<FormEvent> {
    let line = line.trim_start();
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

    match command.trim_end() {
        "submit" => Ok(FormEvent::Submit),
        "reset" => Ok(FormEvent::Reset),
        "set" | "type" => {
            let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
            if field.is_empty() {
                return Err(invalid(line_no, format!("`{}` needs a field name", command)));
            }
            let field: FieldName = field
                .parse()
                .map_err(|e: FormError| invalid(line_no, e.to_string()))?;
            let value = value.to_string();
            Ok(if command == "set" {
                FormEvent::Change { field, value }
            } else {
                FormEvent::Type { field, text: value }
            })
        }
        other => Err(invalid(line_no, format!("unknown command `{}`", other))),
    }
}

fn invalid(line: usize, reason: String) -> FormError {
    FormError::InvalidEvent { line, reason }
}
