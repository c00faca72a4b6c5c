//! Application state container and view model computation.
//!
//! [`AppState`] is the single source of truth for the list and creation views.
//! Its fields are only reachable from the `app` module: outside code reads them
//! through accessors and changes them by sending events to
//! [`handle_event`](crate::app::handle_event).
//!
//! # View Model Computation
//!
//! [`AppState::compute_list_view`] picks the visible branch of the list view by
//! priority: loading, then failure, then the two empty states (told apart by
//! whether the criteria equal the default), then the populated list.

use crate::app::form::CreateForm;
use crate::app::list::{ListFetchController, ListResult};
use crate::app::submit::{CreateSubmitController, SubmitStatus};
use crate::domain::{Advert, FilterCriteria, Route};
use crate::ui::helpers::format_price;
use crate::ui::viewmodel::{AdvertCard, FormView, ListView};

/// State of both views.
#[derive(Debug)]
pub struct AppState {
    /// Current criteria, replaced wholesale on each submission.
    pub(super) filters: FilterCriteria,

    /// Set once the list view has mounted; fetches only start after that.
    pub(super) mounted: bool,

    pub(super) list: ListFetchController,
    pub(super) form: CreateForm,
    pub(super) submit: CreateSubmitController,
}

impl AppState {
    /// Creates state with criteria restored from storage (or the default).
    #[must_use]
    pub fn new(filters: FilterCriteria) -> Self {
        Self {
            filters,
            mounted: false,
            list: ListFetchController::new(),
            form: CreateForm::new(),
            submit: CreateSubmitController::new(),
        }
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    #[must_use]
    pub const fn list(&self) -> &ListFetchController {
        &self.list
    }

    #[must_use]
    pub const fn form(&self) -> &CreateForm {
        &self.form
    }

    #[must_use]
    pub const fn submit(&self) -> &CreateSubmitController {
        &self.submit
    }

    /// Selects what the list view shows.
    #[must_use]
    pub fn compute_list_view(&self) -> ListView {
        match self.list.result() {
            ListResult::Idle => ListView::Blank,
            ListResult::Loading => ListView::Loading,
            ListResult::Failure(message) => ListView::Failure {
                message: message.clone(),
            },
            ListResult::Success(adverts) if adverts.is_empty() => {
                if self.filters.is_default() {
                    ListView::CreatePrompt { link: Route::New }
                } else {
                    ListView::RefineSearch
                }
            }
            ListResult::Success(adverts) => {
                ListView::Adverts(adverts.iter().map(Self::compute_card).collect())
            }
        }
    }

    /// Computes the creation form view.
    #[must_use]
    pub fn compute_form_view(&self) -> FormView {
        FormView {
            submit_enabled: self.submit.can_submit(&self.form),
            submitting: *self.submit.status() == SubmitStatus::Submitting,
            validation: self.form.validation_error().map(|e| e.to_string()),
            error: self.submit.error().map(ToString::to_string),
            price: format_price(self.form.draft().price),
            tag_options: self.form.tag_options().to_vec(),
        }
    }

    fn compute_card(advert: &Advert) -> AdvertCard {
        AdvertCard {
            name: advert.name.clone(),
            price: format_price(advert.price),
            kind: if advert.sale { "Sell" } else { "Buy" },
            tags: advert.tags.clone(),
            photo: advert.photo.clone(),
            link: Route::Detail(advert.id.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SaleFilter;

    fn advert(id: &str, sale: bool) -> Advert {
        Advert {
            id: id.to_string(),
            name: "Bike".to_string(),
            price: 1500.0,
            sale,
            tags: vec!["motor".to_string()],
            photo: None,
            created_at: None,
        }
    }

    fn state_with(filters: FilterCriteria, outcome: Option<Result<Vec<Advert>, String>>) -> AppState {
        let mut state = AppState::new(filters.clone());
        if let Some(outcome) = outcome {
            let request = state.list.start(&filters);
            state.list.complete(&request.ticket, outcome);
        }
        state
    }

    fn filtered() -> FilterCriteria {
        FilterCriteria {
            sale: SaleFilter::Buy,
            ..Default::default()
        }
    }

    #[test]
    fn test_idle_is_blank() {
        let state = state_with(FilterCriteria::default(), None);
        assert_eq!(state.compute_list_view(), ListView::Blank);
    }

    #[test]
    fn test_loading_wins_over_everything() {
        let mut state = state_with(filtered(), Some(Err("offline".to_string())));
        state.list.start(&filtered());
        assert_eq!(state.compute_list_view(), ListView::Loading);
    }

    #[test]
    fn test_failure_shows_message() {
        let state = state_with(filtered(), Some(Err("offline".to_string())));
        assert_eq!(
            state.compute_list_view(),
            ListView::Failure {
                message: "offline".to_string()
            }
        );
    }

    #[test]
    fn test_empty_with_default_criteria_prompts_create() {
        let state = state_with(FilterCriteria::default(), Some(Ok(vec![])));
        assert_eq!(
            state.compute_list_view(),
            ListView::CreatePrompt { link: Route::New }
        );
    }

    #[test]
    fn test_empty_with_filters_prompts_refine() {
        let state = state_with(filtered(), Some(Ok(vec![])));
        assert_eq!(state.compute_list_view(), ListView::RefineSearch);
    }

    #[test]
    fn test_populated_list_builds_cards() {
        let state = state_with(
            FilterCriteria::default(),
            Some(Ok(vec![advert("1", true), advert("2", false)])),
        );

        let ListView::Adverts(cards) = state.compute_list_view() else {
            panic!("expected populated list");
        };
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].link, Route::Detail("1".to_string()));
        assert_eq!(cards[0].kind, "Sell");
        assert_eq!(cards[0].price, "€ 1.500");
        assert_eq!(cards[1].kind, "Buy");
    }

    #[test]
    fn test_form_view_reflects_validity() {
        let mut state = AppState::new(FilterCriteria::default());
        let view = state.compute_form_view();
        assert!(!view.submit_enabled);
        assert_eq!(view.validation.as_deref(), Some("name must not be empty"));

        state.form.set_name("Bike");
        state.form.set_tags(vec!["motor".to_string()]);
        let view = state.compute_form_view();
        assert!(view.submit_enabled);
        assert!(view.validation.is_none());
        assert!(view.error.is_none());
    }
}
