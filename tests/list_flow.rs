//! List view flows through the dispatcher: fetch ordering, retry, empty
//! states and criteria persistence.

mod common;

use adboard::app::{Event, ListResult};
use adboard::domain::{FilterCriteria, PriceRange, SaleFilter};
use adboard::storage::{JsonStorage, MemoryStorage, Storage, FILTERS_KEY};
use adboard::ui::{render_list, ListView};
use adboard::worker::{Dispatcher, HistoryNavigator};
use common::{advert, dispatcher, server_error, FakeApi};
use serde_json::json;
use std::sync::Arc;

fn named(name: &str) -> FilterCriteria {
    FilterCriteria {
        name: name.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_late_response_of_earlier_fetch_is_ignored() {
    let api = FakeApi::new();
    let gate_a = api.gate("name=a");
    let gate_b = api.gate("name=b");

    let mut d = dispatcher(&api);
    d.dispatch(Event::ListMounted).unwrap();
    d.settle().await.unwrap();

    d.dispatch(Event::FiltersSubmitted(named("a"))).unwrap();
    d.dispatch(Event::FiltersSubmitted(named("b"))).unwrap();
    assert_eq!(d.pending(), 2);

    gate_b.send(Ok(vec![advert("b")])).unwrap();
    assert_eq!(d.pump().await.map(Result::unwrap), Some(true));
    assert_eq!(d.state().list().result(), &ListResult::Success(vec![advert("b")]));

    gate_a.send(Ok(vec![advert("a")])).unwrap();
    assert_eq!(d.pump().await.map(Result::unwrap), Some(false));
    assert_eq!(d.state().list().result(), &ListResult::Success(vec![advert("b")]));
}

#[tokio::test]
async fn test_early_response_of_earlier_fetch_does_not_end_loading() {
    let api = FakeApi::new();
    let gate_a = api.gate("name=a");
    let gate_b = api.gate("name=b");

    let mut d = dispatcher(&api);
    d.dispatch(Event::FiltersSubmitted(named("a"))).unwrap();
    d.dispatch(Event::ListMounted).unwrap();
    d.dispatch(Event::FiltersSubmitted(named("b"))).unwrap();

    gate_a.send(Err(server_error("a failed"))).unwrap();
    d.pump().await.unwrap().unwrap();
    assert_eq!(d.state().compute_list_view(), ListView::Loading);

    gate_b.send(Ok(vec![])).unwrap();
    d.settle().await.unwrap();
    assert_eq!(d.state().compute_list_view(), ListView::RefineSearch);

    let mut queries = api.queries();
    queries.sort();
    assert_eq!(queries, vec!["name=a", "name=b"]);
}

#[tokio::test]
async fn test_failure_shows_message_and_retry_recovers() {
    let api = FakeApi::with_adverts(vec![advert("1")]);
    let gate = api.gate("");

    let mut d = dispatcher(&api);
    d.dispatch(Event::ListMounted).unwrap();
    gate.send(Err(server_error("boom"))).unwrap();
    d.settle().await.unwrap();

    assert_eq!(
        d.state().compute_list_view(),
        ListView::Failure {
            message: "Request failed (500): boom".to_string()
        }
    );
    assert!(render_list(d.state()).starts_with("Error: Request failed (500): boom"));

    assert!(d.dispatch(Event::RetryFetch).unwrap());
    d.settle().await.unwrap();

    assert!(matches!(d.state().compute_list_view(), ListView::Adverts(ref cards) if cards.len() == 1));
    assert_eq!(api.queries(), vec!["", ""]);
}

#[tokio::test]
async fn test_empty_states_depend_on_criteria() {
    let api = FakeApi::new();
    let mut d = dispatcher(&api);

    d.dispatch(Event::ListMounted).unwrap();
    d.settle().await.unwrap();
    assert!(matches!(d.state().compute_list_view(), ListView::CreatePrompt { .. }));

    let criteria = FilterCriteria {
        sale: SaleFilter::Buy,
        tags: vec!["work".to_string()],
        ..Default::default()
    };
    d.dispatch(Event::FiltersSubmitted(criteria)).unwrap();
    d.settle().await.unwrap();
    assert_eq!(d.state().compute_list_view(), ListView::RefineSearch);
    assert_eq!(api.queries().last().map(String::as_str), Some("sale=false&tags=work"));
}

#[tokio::test]
async fn test_resubmitting_same_criteria_does_not_refetch() {
    let api = FakeApi::new();
    let mut d = dispatcher(&api);

    d.dispatch(Event::ListMounted).unwrap();
    d.dispatch(Event::FiltersSubmitted(named("bike"))).unwrap();
    d.settle().await.unwrap();
    d.dispatch(Event::FiltersSubmitted(named("bike"))).unwrap();

    assert_eq!(d.pending(), 0);
    assert_eq!(api.queries(), vec!["", "name=bike"]);
}

#[tokio::test]
async fn test_criteria_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("adboard.json");
    let api = FakeApi::new();
    let criteria = FilterCriteria {
        name: "bike".to_string(),
        sale: SaleFilter::Sell,
        price: Some(PriceRange::new(10.0, 250.0).unwrap()),
        tags: vec!["motor".to_string(), "lifestyle".to_string()],
    };

    {
        let storage = JsonStorage::new(path.clone()).unwrap();
        let mut d = Dispatcher::new(Arc::clone(&api), storage, HistoryNavigator::new());
        d.dispatch(Event::FiltersSubmitted(criteria.clone())).unwrap();

        let stored = d.storage().get(FILTERS_KEY).unwrap().unwrap();
        assert_eq!(
            stored,
            json!({"name": "bike", "sale": "sell", "price": [10.0, 250.0], "tags": ["motor", "lifestyle"]})
        );
    }

    let storage = JsonStorage::new(path).unwrap();
    let mut d = Dispatcher::new(Arc::clone(&api), storage, HistoryNavigator::new());
    assert_eq!(d.state().filters(), &criteria);

    d.dispatch(Event::ListMounted).unwrap();
    d.settle().await.unwrap();
    assert_eq!(
        api.queries(),
        vec!["name=bike&sale=true&price=10-250&tags=motor,lifestyle"]
    );
}

#[tokio::test]
async fn test_invalid_stored_criteria_fall_back_to_default() {
    let mut storage = MemoryStorage::new();
    storage
        .set(FILTERS_KEY, json!({"name": 7, "price": "cheap"}))
        .unwrap();

    let api = FakeApi::new();
    let mut d = Dispatcher::new(Arc::clone(&api), storage, HistoryNavigator::new());
    assert!(d.state().filters().is_default());

    d.dispatch(Event::ListMounted).unwrap();
    d.settle().await.unwrap();
    assert_eq!(api.queries(), vec![""]);
}

#[tokio::test]
async fn test_corrupt_store_file_lists_with_default_criteria() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("adboard.json");
    std::fs::write(&path, "{ truncated").unwrap();

    let api = FakeApi::with_adverts(vec![advert("1")]);
    let storage = JsonStorage::new(path.clone()).unwrap();
    let mut d = Dispatcher::new(Arc::clone(&api), storage, HistoryNavigator::new());
    assert!(d.state().filters().is_default());

    d.dispatch(Event::ListMounted).unwrap();
    d.settle().await.unwrap();
    assert_eq!(api.queries(), vec![""]);
    assert!(matches!(d.state().compute_list_view(), ListView::Adverts(ref cards) if cards.len() == 1));

    d.dispatch(Event::FiltersSubmitted(named("bike"))).unwrap();
    drop(d);

    let reopened = JsonStorage::new(path).unwrap();
    assert_eq!(
        reopened.get(FILTERS_KEY).unwrap().unwrap()["name"],
        json!("bike")
    );
}
