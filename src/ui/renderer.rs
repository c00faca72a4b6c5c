//! Top-level rendering coordinator.
//!
//! Computes a view model from [`AppState`] and delegates to the components.
//! Rendering produces a `String` so callers decide where the output goes.
//!
//! # Example
//!
//! ```rust
//! use adboard::app::AppState;
//! use adboard::domain::FilterCriteria;
//! use adboard::ui::render_list;
//!
//! let state = AppState::new(FilterCriteria::default());
//! assert_eq!(render_list(&state), "");
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::viewmodel::{FormView, ListView};

/// Renders the list view for the current state.
#[must_use]
pub fn render_list(state: &AppState) -> String {
    render_list_view(&state.compute_list_view())
}

/// Renders the creation form status for the current state.
#[must_use]
pub fn render_form(state: &AppState) -> String {
    render_form_view(&state.compute_form_view())
}

/// Renders a precomputed list view model.
///
/// [`ListView::Blank`] renders as the empty string.
#[must_use]
pub fn render_list_view(view: &ListView) -> String {
    let mut out = String::new();
    match view {
        ListView::Blank => {}
        ListView::Loading => components::render_message(&mut out, "Loading...", None),
        ListView::Failure { message } => components::render_failure(&mut out, message),
        ListView::RefineSearch => components::render_message(
            &mut out,
            "No adverts match these filters.",
            Some("Try different filters or `adboard list --reset`"),
        ),
        ListView::CreatePrompt { link } => components::render_message(
            &mut out,
            "No adverts yet.",
            Some(&format!("Be the first: {link}")),
        ),
        ListView::Adverts(cards) => components::render_cards(&mut out, cards),
    }
    out
}

#[must_use]
pub fn render_form_view(view: &FormView) -> String {
    let mut out = String::new();
    components::render_form_status(&mut out, view);
    out
}
