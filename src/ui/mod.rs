//! Presentation layer.
//!
//! Turns application state into plain-text output through small components.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_list_view / compute_form_view → ListView / FormView → render → String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable component renderers
//! - [`helpers`]: Price formatting and parsing

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod viewmodel;

pub use helpers::{format_price, parse_price};
pub use renderer::{render_form, render_form_view, render_list, render_list_view};
pub use viewmodel::{AdvertCard, FormView, ListView};
