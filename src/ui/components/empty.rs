//! Message component renderer.
//!
//! Renders the single-message branches of the list view: blank, loading,
//! failure, and the two empty-result prompts.

use super::push_line;

/// Renders a message with an optional dimmed hint underneath.
pub fn render_message(out: &mut String, message: &str, hint: Option<&str>) {
    push_line(out, message);
    if let Some(hint) = hint {
        push_line(out, &format!("  {hint}"));
    }
}

/// Renders a failed fetch with its retry affordance.
pub fn render_failure(out: &mut String, message: &str) {
    render_message(out, &format!("Error: {message}"), Some("Retry with `adboard list`"));
}
