use async_trait::async_trait;

use places_core::{entities::Place, FetchError, PlacesGateway};
use places_frontend_api::{self as api, PublicApi};

/// Places fetched from the public API.
#[derive(Debug, Clone)]
pub struct PlacesSource {
    api: PublicApi,
}

impl PlacesSource {
    #[must_use]
    pub const fn new(api: PublicApi) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl PlacesGateway for PlacesSource {
    async fn available_places(&self) -> Result<Vec<Place>, FetchError> {
        let places = self.api.places().await.map_err(fetch_error)?;
        let places = places
            .into_iter()
            .map(|place| {
                let mut place = Place::from(place);
                place.image.src = self.api.image_url(&place.image.src);
                place
            })
            .collect();
        Ok(places)
    }
}

fn fetch_error(err: api::Error) -> FetchError {
    let message = err.to_string();
    if message.trim().is_empty() {
        FetchError::without_message()
    } else {
        FetchError::new(message)
    }
}
