//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! [`AppState::compute_list_view`](crate::app::AppState::compute_list_view) and
//! [`AppState::compute_form_view`](crate::app::AppState::compute_form_view), and
//! consumed by the renderer. They contain no business logic, only display-ready
//! data.
//!
//! # Example
//!
//! ```rust
//! use adboard::domain::Route;
//! use adboard::ui::{AdvertCard, ListView};
//!
//! let view = ListView::Adverts(vec![AdvertCard {
//!     name: "Bike".to_string(),
//!     price: "€ 150".to_string(),
//!     kind: "Sell",
//!     tags: vec!["motor".to_string()],
//!     photo: None,
//!     link: Route::Detail("1".to_string()),
//! }]);
//! assert!(matches!(view, ListView::Adverts(ref cards) if cards.len() == 1));
//! ```

use crate::domain::Route;

/// What the list view shows. Exactly one branch is visible at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    /// Nothing fetched yet.
    Blank,

    /// Loading indicator.
    Loading,

    /// The latest fetch failed; offers a retry.
    Failure { message: String },

    /// No matches for non-default criteria.
    RefineSearch,

    /// No adverts at all; offers a link to the creation view.
    CreatePrompt { link: Route },

    /// One card per advert, in server order.
    Adverts(Vec<AdvertCard>),
}

/// Display information for a single advert.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvertCard {
    pub name: String,

    /// Formatted price, e.g. `€ 1.500`.
    pub price: String,

    /// `Sell` or `Buy`.
    pub kind: &'static str,

    pub tags: Vec<String>,

    /// Photo URL as reported by the API.
    pub photo: Option<String>,

    /// Detail route the card links to.
    pub link: Route,
}

/// Display information for the creation form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    /// Whether the submit affordance is enabled.
    pub submit_enabled: bool,

    /// A create request is in flight.
    pub submitting: bool,

    /// First failing field, if the draft is invalid.
    pub validation: Option<String>,

    /// Contents of the error slot after a failed submission.
    pub error: Option<String>,

    /// Formatted draft price.
    pub price: String,

    /// Tags offered for selection.
    pub tag_options: Vec<String>,
}
