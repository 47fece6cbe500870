use colored::Colorize;
use contact_form::{Config, FieldName};

pub fn execute(config: &Config) {
    let min_length = config.validation.first_name_min_length;

    for field in FieldName::ALL {
        let attrs = field.attrs(min_length);
        let requirement = if field.is_required() {
            "required".yellow()
        } else {
            "optional".dimmed()
        };
        println!(
            "{:<10} {:<12} {:<9} {}",
            field.as_str().bold(),
            attrs.label,
            requirement,
            attrs.render_html5_attrs()
        );
    }
}
