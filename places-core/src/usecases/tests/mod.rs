pub mod prelude {
    use std::cell::Cell;

    use async_trait::async_trait;

    pub use crate::{
        fetch::*,
        gateways::*,
        usecases::Error,
    };
    pub use places_entities::{builders::*, geo::*, place::*};

    pub fn new_place(id: &str, lat: f64, lng: f64) -> Place {
        Place::build()
            .id(id)
            .name(&format!("Place {id}"))
            .lat_lng(lat, lng)
            .image(&format!("images/{id}.jpg"), id)
            .finish()
    }

    pub fn ids(places: &[Place]) -> Vec<&str> {
        places.iter().map(|p| p.id.as_str()).collect()
    }

    type Hook = Box<dyn Fn()>;

    pub struct FakePlaces {
        result: Result<Vec<Place>, FetchError>,
        requests: Cell<usize>,
        on_request: Option<Hook>,
    }

    impl FakePlaces {
        pub fn new(places: Vec<Place>) -> Self {
            Self {
                result: Ok(places),
                requests: Cell::new(0),
                on_request: None,
            }
        }
        pub fn failing(message: Option<&str>) -> Self {
            let err = match message {
                Some(msg) => FetchError::new(msg),
                None => FetchError::without_message(),
            };
            Self {
                result: Err(err),
                requests: Cell::new(0),
                on_request: None,
            }
        }
        /// Run the given hook every time the places are requested.
        pub fn on_request(mut self, hook: impl Fn() + 'static) -> Self {
            self.on_request = Some(Box::new(hook));
            self
        }
        pub fn requests(&self) -> usize {
            self.requests.get()
        }
    }

    #[async_trait(?Send)]
    impl PlacesGateway for FakePlaces {
        async fn available_places(&self) -> Result<Vec<Place>, FetchError> {
            self.requests.set(self.requests.get() + 1);
            if let Some(hook) = &self.on_request {
                hook();
            }
            self.result.clone()
        }
    }

    pub struct FakeLocation {
        result: Result<MapPoint, LocationError>,
        requests: Cell<usize>,
    }

    impl FakeLocation {
        pub fn at(lat: f64, lng: f64) -> Self {
            Self {
                result: Ok(MapPoint::new(lat, lng)),
                requests: Cell::new(0),
            }
        }
        pub fn denied() -> Self {
            Self {
                result: Err(LocationError::PermissionDenied),
                requests: Cell::new(0),
            }
        }
        pub fn requests(&self) -> usize {
            self.requests.get()
        }
    }

    #[async_trait(?Send)]
    impl LocationGateway for FakeLocation {
        async fn current_position(&self) -> Result<MapPoint, LocationError> {
            self.requests.set(self.requests.get() + 1);
            self.result.clone()
        }
    }
}
