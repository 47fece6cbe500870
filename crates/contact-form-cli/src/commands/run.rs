use crate::output;
use crate::OutputFormat;
use anyhow::{Context, Result};
use contact_form::{parse_script, render_html_with, Config, FormController, Outcome};
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub fn execute(config: Config, script: Option<&Path>, format: OutputFormat) -> Result<()> {
    let source = read_script(script)?;
    let form = replay(config, &source)?;

    match format {
        OutputFormat::Text => print!("{}", output::render_text(&form.view())),
        OutputFormat::Html => {
            let html = render_html_with(&form.view(), &form.config().validation);
            println!("{}", html.into_string());
        }
        OutputFormat::Json => match form.submitted() {
            Some(record) => println!("{}", record.to_json()?),
            None => println!("null"),
        },
    }

    Ok(())
}

fn read_script(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read script: {:?}", path)),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read script from stdin")?;
            Ok(buf)
        }
    }
}

/// Apply every event of `source` to a fresh form
pub fn replay(config: Config, source: &str) -> Result<FormController> {
    let events = parse_script(source).context("Invalid event script")?;
    let mut form = FormController::with_config(config);

    for event in events {
        match form.dispatch(event) {
            Outcome::Rejected { errors } => debug!(errors = errors.len(), "submit blocked"),
            Outcome::Submitted(_) | Outcome::Updated | Outcome::Reset => {}
        }
    }

    Ok(form)
}
