use super::{fetch_sorted_places, AvailablePlaces};
use crate::{
    fetch::FetchState,
    gateways::{LocationGateway, PlacesGateway},
};

/// Run a complete fetch lifecycle.
///
/// Every state transition is reported to `observe`:
/// first [`FetchState::Loading`], then either
/// [`FetchState::Success`] or [`FetchState::Failure`].
/// Fetch failures never escape, they end up as
/// [`crate::fetch::ErrorInfo`] in the final state.
pub async fn load_available_places<P, L, O>(
    places_gateway: &P,
    location_gateway: &L,
    mut observe: O,
) -> FetchState<AvailablePlaces>
where
    P: PlacesGateway + ?Sized,
    L: LocationGateway + ?Sized,
    O: FnMut(&FetchState<AvailablePlaces>),
{
    let mut state = FetchState::default();
    if state.begin() {
        observe(&state);
    }
    let result = fetch_sorted_places(places_gateway, location_gateway).await;
    if let Err(err) = &result {
        log::warn!("{err}");
    }
    if state.settle(result) {
        observe(&state);
    }
    state
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::{super::tests::prelude::*, *};

    #[tokio::test]
    async fn publish_sorted_places() {
        let places = FakePlaces::new(vec![
            new_place("a", 0.0, 0.0),
            new_place("b", 10.0, 10.0),
        ]);
        let location = FakeLocation::at(0.0, 0.0);
        let mut observed = vec![];
        let state = load_available_places(&places, &location, |s| observed.push(s.clone())).await;
        assert_eq!(2, observed.len());
        assert!(observed[0].is_loading());
        assert_eq!(observed[1], state);
        let res = state.value().unwrap();
        assert_eq!(vec!["a", "b"], ids(&res.places));
        assert!(res.is_sorted_by_distance());
        assert_eq!(None, state.error());
    }

    #[tokio::test]
    async fn publish_unsorted_places_if_geolocation_is_denied() {
        let places = FakePlaces::new(vec![
            new_place("a", 0.0, 0.0),
            new_place("b", 10.0, 10.0),
        ]);
        let location = FakeLocation::denied();
        let state = load_available_places(&places, &location, |_| {}).await;
        let res = state.value().unwrap();
        assert_eq!(vec!["a", "b"], ids(&res.places));
        assert!(!res.is_sorted_by_distance());
    }

    #[tokio::test]
    async fn publish_error_message_of_failed_fetch() {
        let places = FakePlaces::failing(Some("network down"));
        let location = FakeLocation::at(0.0, 0.0);
        let mut observed = vec![];
        let state = load_available_places(&places, &location, |s| observed.push(s.clone())).await;
        assert_eq!("network down", state.error().unwrap().message);
        assert_eq!(None, state.value());
        assert!(!state.is_loading());
        assert_eq!(2, observed.len());
        assert!(observed[0].is_loading());
        assert!(observed[1].error().is_some());
    }

    #[tokio::test]
    async fn publish_default_error_message_of_failed_fetch() {
        let places = FakePlaces::failing(None);
        let location = FakeLocation::at(0.0, 0.0);
        let state = load_available_places(&places, &location, |_| {}).await;
        assert_eq!(DEFAULT_ERROR_MESSAGE, state.error().unwrap().message);
        assert_eq!(None, state.value());
    }

    #[tokio::test]
    async fn loading_while_fetching() {
        let last_observed_loading = Rc::new(RefCell::new(None::<bool>));
        let loading_during_fetch = Rc::new(RefCell::new(None::<bool>));
        let places = {
            let last_observed_loading = Rc::clone(&last_observed_loading);
            let loading_during_fetch = Rc::clone(&loading_during_fetch);
            FakePlaces::new(vec![new_place("a", 0.0, 0.0)]).on_request(move || {
                *loading_during_fetch.borrow_mut() = *last_observed_loading.borrow();
            })
        };
        let location = FakeLocation::denied();
        let state = load_available_places(&places, &location, |s| {
            *last_observed_loading.borrow_mut() = Some(s.is_loading());
        })
        .await;
        assert_eq!(Some(true), *loading_during_fetch.borrow());
        assert_eq!(Some(false), *last_observed_loading.borrow());
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn fetch_only_once() {
        let places = FakePlaces::failing(Some("network down"));
        let location = FakeLocation::at(0.0, 0.0);
        load_available_places(&places, &location, |_| {}).await;
        assert_eq!(1, places.requests());
        assert_eq!(0, location.requests());
    }
}
