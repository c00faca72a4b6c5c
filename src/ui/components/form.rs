//! Creation form status renderer.

use super::push_line;
use crate::ui::viewmodel::FormView;

/// Renders the submit state, the validation hint and the error slot.
pub fn render_form_status(out: &mut String, view: &FormView) {
    push_line(out, &format!("Price: {}", view.price));

    if !view.tag_options.is_empty() {
        push_line(out, &format!("Tags: {}", view.tag_options.join(", ")));
    }

    if let Some(validation) = &view.validation {
        push_line(out, &format!("Invalid: {validation}"));
    }

    let submit = if view.submitting {
        "Saving..."
    } else if view.submit_enabled {
        "[ Save ]"
    } else {
        "[ Save ] (disabled)"
    };
    push_line(out, submit);

    if let Some(error) = &view.error {
        push_line(out, &format!("Error: {error}"));
    }
}
