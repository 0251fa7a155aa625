use leptos::*;

use places_core::{
    entities::Place,
    usecases::{load_available_places, AvailablePlaces as Loaded},
    ErrorInfo, FetchState,
};
use places_frontend_api::PublicApi;

use crate::{components::*, config, gateways::PlacesSource, geolocation::BrowserLocation};

const TITLE: &str = "Available Places";
const ERROR_TITLE: &str = "An error occurred";
const LOADING_TEXT: &str = "Fetching places data...";
const FALLBACK_TEXT: &str = "No places available.";

/// What is visible of a fetch at a time.
#[derive(Debug, Clone, Default, PartialEq)]
struct Visible {
    is_loading: bool,
    places: Vec<Place>,
    error: Option<ErrorInfo>,
}

impl From<&FetchState<Loaded>> for Visible {
    fn from(from: &FetchState<Loaded>) -> Self {
        match from {
            // The fetch is dispatched on creation, so an
            // idle state is already considered as loading.
            FetchState::Idle | FetchState::Loading => Self {
                is_loading: true,
                ..Default::default()
            },
            FetchState::Success(loaded) => Self {
                places: loaded.places.clone(),
                ..Default::default()
            },
            FetchState::Failure(info) => Self {
                error: Some(info.clone()),
                ..Default::default()
            },
        }
    }
}

/// All places, sorted by the distance to the user if possible.
#[component]
pub fn AvailablePlaces(#[prop(into)] on_select_place: Callback<String>) -> impl IntoView {
    // -- signals -- //

    let state = RwSignal::new(FetchState::<Loaded>::default());
    let visible = create_memo(move |_| state.with(|s| Visible::from(s)));

    let is_loading = Signal::derive(move || visible.with(|v| v.is_loading));
    let places = Signal::derive(move || visible.with(|v| v.places.clone()));
    let error = create_memo(move |_| visible.with(|v| v.error.clone()));

    // -- actions -- //

    let public_api =
        use_context::<PublicApi>().unwrap_or_else(|| PublicApi::new(config::api_url()));

    let load_places = Action::new(move |()| {
        let places_source = PlacesSource::new(public_api.clone());
        async move {
            load_available_places(&places_source, &BrowserLocation, |s| {
                if state.try_set(s.clone()).is_some() {
                    log::debug!("Available places are no longer displayed");
                }
            })
            .await;
        }
    });

    // -- init -- //

    load_places.dispatch(());

    move || match error.get() {
        Some(ErrorInfo { message }) => view! {
          <ErrorPage title=ERROR_TITLE message />
        }
        .into_view(),
        None => view! {
          <Places
            title=TITLE
            places
            is_loading
            loading_text=LOADING_TEXT
            fallback_text=FALLBACK_TEXT
            on_select_place
          />
        }
        .into_view(),
    }
}
