use gloo_net::http::Request;

use places_boundary::{Place, PlacesResponse};

use crate::{into_json, Result};

/// Public places API
#[derive(Debug, Clone)]
pub struct PublicApi {
    url: String,
}

impl PublicApi {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let url = url.trim_end_matches('/').to_string();
        Self { url }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn places(&self) -> Result<Vec<Place>> {
        let url = format!("{}/places", self.url);
        let response = Request::get(&url).send().await?;
        let PlacesResponse { places } = into_json::<PlacesResponse>(response).await?;
        Ok(places)
    }

    /// Resolve the source of a place image.
    ///
    /// Relative paths are served by the API,
    /// absolute URLs are returned as they are.
    #[must_use]
    pub fn image_url(&self, src: &str) -> String {
        if src.starts_with("http://") || src.starts_with("https://") {
            return src.to_string();
        }
        format!("{}/{}", self.url, src.trim_start_matches('/'))
    }
}
