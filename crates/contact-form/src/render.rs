// File: src/render.rs
// Purpose: Server-side HTML for a view model, via Maud

use crate::config::ValidationConfig;
use crate::field::FieldName;
use crate::view::{Node, Role, ViewKind, ViewModel};
use maud::{html, Markup};

/// Render a view as HTML using the default rule table for input attributes
pub fn render_html(view: &ViewModel) -> Markup {
    render_html_with(view, &ValidationConfig::default())
}

/// Render a view as HTML. `validation` feeds the HTML5 attributes of the inputs.
pub fn render_html_with(view: &ViewModel, validation: &ValidationConfig) -> Markup {
    match view.kind() {
        ViewKind::Editing => html! {
            form class="contact-form" method="post" novalidate {
                @for node in view.nodes() {
                    (render_node(node, validation))
                }
            }
        },
        ViewKind::Summary => html! {
            section class="contact-summary" {
                @for node in view.nodes() {
                    (render_node(node, validation))
                }
            }
        },
    }
}

fn render_node(node: &Node, validation: &ValidationConfig) -> Markup {
    match (node.role, node.field) {
        (Role::Heading, _) => html! { h1 { (node.text) } },
        (Role::Textbox, Some(field)) => render_input(node, field, validation),
        (Role::Alert, field) => html! {
            p class="error" role="alert" data-field=[field.map(FieldName::as_str)] { (node.text) }
        },
        (Role::Button, _) => html! { button type="submit" { (node.text) } },
        (Role::Text, _) | (Role::Textbox, None) => html! {
            p data-testid=[node.test_id] { (node.text) }
        },
    }
}

fn render_input(node: &Node, field: FieldName, validation: &ValidationConfig) -> Markup {
    let attrs = field.attrs(validation.first_name_min_length);
    let id = field.as_str();
    let value = node.value.as_deref().unwrap_or_default();
    let label = node.label.as_deref().unwrap_or(field.label());

    html! {
        div class="field" {
            label for=(id) { (label) }
            @if field == FieldName::Message {
                textarea id=(id) name=(id) { (value) }
            } @else {
                input
                    id=(id)
                    name=(id)
                    type=[attrs.get("type")]
                    minlength=[attrs.get("minlength")]
                    required[attrs.is_required()]
                    value=(value);
            }
        }
    }
}
