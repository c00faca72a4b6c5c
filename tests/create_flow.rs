//! Creation view flows through the dispatcher.

mod common;

use adboard::app::{Event, SubmitStatus};
use adboard::domain::{FieldValue, Photo, Route};
use adboard::ui::render_form;
use common::{advert, dispatcher, server_error, FakeApi, TestDispatcher};

fn fill(d: &mut TestDispatcher, tags: &[&str]) {
    d.dispatch(Event::NameChanged("Bike".to_string())).unwrap();
    d.dispatch(Event::PriceChanged(150.0)).unwrap();
    d.dispatch(Event::TagsChanged(tags.iter().map(|t| t.to_string()).collect()))
        .unwrap();
}

fn field_names(api: &FakeApi, index: usize) -> Vec<String> {
    api.created()[index]
        .fields()
        .iter()
        .map(|f| f.name.clone())
        .collect()
}

#[tokio::test]
async fn test_success_navigates_to_detail_route() {
    let api = FakeApi::new();
    api.push_create(Ok(advert("5f1a")));

    let mut d = dispatcher(&api);
    fill(&mut d, &["motor", "lifestyle"]);
    d.dispatch(Event::SubmitForm).unwrap();
    assert_eq!(d.state().submit().status(), &SubmitStatus::Submitting);

    d.settle().await.unwrap();

    assert_eq!(d.navigator().current(), Some(&Route::Detail("5f1a".to_string())));
    assert_eq!(d.navigator().current().map(Route::path).as_deref(), Some("/adverts/5f1a"));
    assert_eq!(
        field_names(&api, 0),
        vec!["name", "sale", "price", "tags[0]", "tags[1]"]
    );
    assert!(d.state().form().draft().name.is_empty());
}

#[tokio::test]
async fn test_failure_keeps_draft_and_fills_error_slot() {
    let api = FakeApi::new();
    api.push_create(Err(server_error("boom")));
    api.push_create(Ok(advert("9")));

    let mut d = dispatcher(&api);
    fill(&mut d, &["motor"]);
    d.dispatch(Event::SubmitForm).unwrap();
    d.settle().await.unwrap();

    assert_eq!(d.navigator().current(), None);
    assert_eq!(d.state().submit().error(), Some("Request failed (500): boom"));
    assert_eq!(d.state().form().draft().name, "Bike");
    assert!(render_form(d.state()).contains("Error: Request failed (500): boom"));

    d.dispatch(Event::SubmitForm).unwrap();
    assert_eq!(d.state().submit().error(), None);
    d.settle().await.unwrap();

    assert_eq!(api.created().len(), 2);
    assert_eq!(d.navigator().current(), Some(&Route::Detail("9".to_string())));
}

#[tokio::test]
async fn test_invalid_draft_sends_nothing() {
    let api = FakeApi::new();
    let mut d = dispatcher(&api);

    d.dispatch(Event::NameChanged("Bike".to_string())).unwrap();
    d.dispatch(Event::SubmitForm).unwrap();
    d.dispatch(Event::TagsChanged(vec!["motor".to_string()])).unwrap();
    d.dispatch(Event::PriceChanged(f64::NAN)).unwrap();
    d.dispatch(Event::SubmitForm).unwrap();

    assert_eq!(d.pending(), 0);
    d.settle().await.unwrap();
    assert!(api.created().is_empty());
    assert_eq!(d.state().submit().status(), &SubmitStatus::Idle);
}

#[tokio::test]
async fn test_double_submit_sends_one_request() {
    let api = FakeApi::new();
    let mut d = dispatcher(&api);
    fill(&mut d, &["motor"]);

    d.dispatch(Event::SubmitForm).unwrap();
    d.dispatch(Event::SubmitForm).unwrap();
    d.settle().await.unwrap();

    assert_eq!(api.created().len(), 1);
}

#[tokio::test]
async fn test_photo_is_sent_last_when_present() {
    let api = FakeApi::new();
    let mut d = dispatcher(&api);
    fill(&mut d, &["motor"]);
    d.dispatch(Event::SaleChanged(false)).unwrap();
    d.dispatch(Event::PhotoChanged(Some(
        Photo::new("bike.jpg", vec![0xff, 0xd8]).with_mime("image/jpeg"),
    )))
    .unwrap();

    d.dispatch(Event::SubmitForm).unwrap();
    d.settle().await.unwrap();

    let payload = &api.created()[0];
    assert_eq!(payload.text("sale"), Some("false"));
    let last = payload.fields().last().unwrap();
    assert_eq!(last.name, "photo");
    assert!(matches!(&last.value, FieldValue::Binary(photo) if photo.file_name == "bike.jpg"));
}

#[tokio::test]
async fn test_form_mount_loads_tag_options() {
    let api = FakeApi::new();
    api.set_tags(&["lifestyle", "motor", "mobile", "work"]);

    let mut d = dispatcher(&api);
    d.dispatch(Event::FormMounted).unwrap();
    d.settle().await.unwrap();

    assert_eq!(d.state().compute_form_view().tag_options.len(), 4);
}
