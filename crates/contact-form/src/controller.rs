// File: src/controller.rs
// Purpose: Form controller - owns one form's state, applies events, selects the view

use crate::config::Config;
use crate::events::{FormEvent, Outcome};
use crate::field::FieldName;
use crate::state::{FormState, SubmittedRecord};
use crate::validation::{ErrorState, Rules};
use crate::view::ViewModel;
use tracing::{debug, info};

/// Which view the form currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Editing,
    Summary,
}

/// State of one contact form instance.
///
/// Every mutation goes through `&mut self`, so events are applied one at a
/// time and the view returned by [`FormController::view`] already reflects
/// the last event.
#[derive(Debug, Clone)]
pub struct FormController {
    config: Config,
    rules: Rules,
    state: FormState,
    errors: ErrorState,
    submitted: Option<SubmittedRecord>,
    mode: DisplayMode,
}

impl FormController {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            rules: Rules::from(&config.validation),
            config,
            state: FormState::new(),
            errors: ErrorState::new(),
            submitted: None,
            mode: DisplayMode::Editing,
        }
    }

    /// Change handler. Revalidates only `field`; invalid input is kept and flagged.
    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.state.set(field, value.into());
        self.after_change(field);
    }

    /// Type `text` into `field` one character at a time, like a user at a keyboard
    pub fn type_text(&mut self, field: FieldName, text: &str) {
        for ch in text.chars() {
            self.state.slot(field).push(ch);
            self.after_change(field);
        }
    }

    fn after_change(&mut self, field: FieldName) {
        let outcome = self.rules.check(field, self.state.get(field));
        let has_error = outcome.is_some();
        self.errors.record(field, outcome);

        if self.mode == DisplayMode::Summary && self.config.form.return_to_form_on_edit {
            self.mode = DisplayMode::Editing;
        }

        debug!(%field, has_error, "field changed");
    }

    /// Submit handler.
    ///
    /// Revalidates every field. On success the snapshot becomes the shown
    /// record and the underlying form goes back to blank.
    pub fn submit(&mut self) -> Outcome {
        let errors = self.rules.validate(&self.state);

        if errors.blocks_submission() {
            debug!(errors = errors.len(), "submission rejected");
            self.errors = errors.clone();
            return Outcome::Rejected { errors };
        }

        let record = SubmittedRecord::capture(&self.state);
        self.submitted = Some(record.clone());
        self.state = FormState::new();
        self.errors.clear();
        self.mode = DisplayMode::Summary;

        info!(has_message = record.has_message(), "contact form submitted");
        Outcome::Submitted(record)
    }

    /// Back to a freshly mounted form: blank values, no errors, no record
    pub fn reset(&mut self) {
        self.state = FormState::new();
        self.errors.clear();
        self.submitted = None;
        self.mode = DisplayMode::Editing;
        info!("contact form reset");
    }

    /// Apply one event
    pub fn dispatch(&mut self, event: FormEvent) -> Outcome {
        match event {
            FormEvent::Change { field, value } => {
                self.set_field(field, value);
                Outcome::Updated
            }
            FormEvent::Type { field, text } => {
                self.type_text(field, &text);
                Outcome::Updated
            }
            FormEvent::Submit => self.submit(),
            FormEvent::Reset => {
                self.reset();
                Outcome::Reset
            }
        }
    }

    /// Render selector: summary of the last record, or the editable form
    pub fn view(&self) -> ViewModel {
        match (self.mode, &self.submitted) {
            (DisplayMode::Summary, Some(record)) => ViewModel::summary(record),
            _ => ViewModel::editing(&self.config.form.title, &self.state, &self.errors),
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    pub fn submitted(&self) -> Option<&SubmittedRecord> {
        self.submitted.as_ref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}
