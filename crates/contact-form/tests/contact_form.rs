//! Integration tests for the contact form
//!
//! Each test mounts a fresh controller, drives it the way a user would
//! (keystrokes into labeled inputs, a click on the only button) and then
//! inspects the view the render selector produces.

use contact_form::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

const FIRST_NAME_ERROR: &str = "Error: firstname must have at least 5 characters.";
const LAST_NAME_ERROR: &str = "Error: lastname is a required field.";
const EMAIL_ERROR: &str = "Error: email must be a valid email address.";

/// Type into the input whose label matches `label`, as the user would find it
fn type_into(form: &mut FormController, label: &str, text: &str) {
    let field = form
        .view()
        .get_by_label_text(label)
        .and_then(|input| input.field)
        .unwrap_or_else(|| panic!("no input labeled {label:?}"));
    form.type_text(field, text);
}

/// Click the one control with role "button"
fn click_submit(form: &mut FormController) -> Outcome {
    let view = form.view();
    assert_eq!(view.get_all_by_role(Role::Button).len(), 1);
    form.submit()
}

#[test]
fn test_renders_without_errors() {
    let form = FormController::new();
    assert!(form.view().error_messages().is_empty());
}

#[test]
fn test_renders_the_contact_form_header() {
    let view = FormController::new().view();
    let header = view.get_by_role(Role::Heading).unwrap();
    assert!(header.has_text("contact form"));
}

#[test]
fn test_one_error_for_short_first_name() {
    let mut form = FormController::new();
    type_into(&mut form, "first name", "b");

    let view = form.view();
    assert!(view.query_by_text(&FIRST_NAME_ERROR.to_lowercase()).is_some());
    assert_eq!(view.error_messages(), vec![FIRST_NAME_ERROR]);
}

#[test]
fn test_three_errors_when_submitting_empty_form() {
    let mut form = FormController::new();
    let outcome = click_submit(&mut form);

    assert!(matches!(outcome, Outcome::Rejected { .. }));
    assert_eq!(
        form.view().error_messages(),
        vec![FIRST_NAME_ERROR, LAST_NAME_ERROR, EMAIL_ERROR]
    );
    assert!(form.submitted().is_none());
}

#[test]
fn test_one_error_with_names_but_no_email() {
    let mut form = FormController::new();
    type_into(&mut form, "first name", "bailey");
    type_into(&mut form, "last name", "random");
    click_submit(&mut form);

    assert_eq!(form.view().error_messages(), vec![EMAIL_ERROR]);
    assert!(form.submitted().is_none());
}

#[test]
fn test_invalid_email_shows_error_without_submit() {
    let mut form = FormController::new();
    type_into(&mut form, "email", "random@random");

    assert_eq!(form.view().error_messages(), vec![EMAIL_ERROR]);
}

#[test]
fn test_last_name_required_on_submit() {
    let mut form = FormController::new();
    type_into(&mut form, "first name", "bailey");
    type_into(&mut form, "email", "random@random.com");
    click_submit(&mut form);

    let view = form.view();
    assert!(view.query_by_text(LAST_NAME_ERROR).is_some());
    assert_eq!(view.error_messages(), vec![LAST_NAME_ERROR]);
}

#[test]
fn test_submitted_values_without_message() {
    let mut form = FormController::new();
    type_into(&mut form, "first name", "bailey");
    type_into(&mut form, "last name", "evanger");
    type_into(&mut form, "email", "random@random.com");
    assert!(click_submit(&mut form).is_submitted());

    let view = form.view();
    assert_eq!(view.kind(), ViewKind::Summary);
    assert!(view.query_by_text("bailey").is_some());
    assert!(view.query_by_text("evanger").is_some());
    assert!(view.query_by_text("random@random.com").is_some());
    assert!(view.query_by_text("Message:").is_none());
    assert!(view.query_by_test_id("messageDisplay").is_none());
}

#[test]
fn test_submitted_values_with_message() {
    let mut form = FormController::new();
    type_into(&mut form, "first name", "bailey");
    type_into(&mut form, "last name", "evanger");
    type_into(&mut form, "email", "random@random.com");
    type_into(&mut form, "message", "this is a message");
    click_submit(&mut form);

    let view = form.view();
    assert!(view.query_by_text("bailey").is_some());
    assert!(view.query_by_text("evanger").is_some());
    assert!(view.query_by_text("random@random.com").is_some());
    let message = view.query_by_test_id("messageDisplay").unwrap();
    assert!(message.has_text("this is a message"));
}

#[test]
fn test_underlying_form_is_blank_after_submit() {
    let mut form = FormController::new();
    form.set_field(FieldName::FirstName, "bailey");
    form.set_field(FieldName::LastName, "evanger");
    form.set_field(FieldName::Email, "random@random.com");
    form.set_field(FieldName::Message, "hello");
    form.submit();

    assert_eq!(form.state(), &FormState::default());
    assert!(form.errors().is_empty());
    assert_eq!(form.submitted().map(|r| r.message()), Some("hello"));
}

#[rstest]
#[case(FieldName::FirstName, "b")]
#[case(FieldName::LastName, "")]
#[case(FieldName::Email, "random@random")]
#[case(FieldName::Message, "anything")]
fn test_typing_only_affects_that_field(#[case] field: FieldName, #[case] value: &str) {
    let mut form = FormController::new();
    form.set_field(field, value);

    assert!(form.submitted().is_none());
    assert_eq!(form.mode(), DisplayMode::Editing);
    assert!(form.errors().fields().iter().all(|f| *f == field));
}

#[test]
fn test_instances_are_independent() {
    let mut first = FormController::new();
    let second = FormController::new();
    first.set_field(FieldName::FirstName, "b");

    assert!(first.errors().has_error(FieldName::FirstName));
    assert!(second.errors().is_empty());
}

#[test]
fn test_script_drives_a_full_submission() {
    let script = "\
type firstName bailey
type lastName evanger
type email random@random.com
submit
";
    let mut form = FormController::new();
    let outcomes: Vec<_> = parse_script(script)
        .unwrap()
        .into_iter()
        .map(|event| form.dispatch(event))
        .collect();

    assert!(outcomes.last().is_some_and(Outcome::is_submitted));
    let html = render_html(&form.view()).into_string();
    assert!(html.contains("Email: random@random.com"));
}
