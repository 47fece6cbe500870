// Plain-text rendering of a view for the terminal

use colored::Colorize;
use contact_form::{Role, ViewModel};
use std::fmt::Write;

pub fn render_text(view: &ViewModel) -> String {
    let mut out = String::new();

    for node in view.nodes() {
        // Writing to a String cannot fail
        let _ = match node.role {
            Role::Heading => writeln!(out, "{}", node.text.bold()),
            Role::Textbox => writeln!(
                out,
                "{}: {}",
                node.label.as_deref().unwrap_or_default(),
                node.value.as_deref().unwrap_or_default()
            ),
            Role::Alert => writeln!(out, "  {}", node.text.red()),
            Role::Button => writeln!(out, "[{}]", node.text),
            Role::Text => writeln!(out, "{}", node.text),
        };
    }

    out
}
