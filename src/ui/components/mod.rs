//! Composable view component renderers.
//!
//! Each component appends plain-text lines for one part of a view to an output
//! buffer. Components never read application state directly; they only see the
//! view model slice they render.
//!
//! # Components
//!
//! - [`cards`]: Advert rows with name, price, kind and tags
//! - [`empty`]: Blank, loading, failure and empty-result messages
//! - [`form`]: Creation form status lines

pub mod cards;
pub mod empty;
pub mod form;

pub use cards::render_cards;
pub use empty::{render_failure, render_message};
pub use form::render_form_status;

/// Appends `line` followed by a newline.
fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}
