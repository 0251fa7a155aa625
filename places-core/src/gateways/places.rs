use async_trait::async_trait;
use thiserror::Error;

use places_entities::place::Place;

/// The remote source of places failed.
///
/// The message is optional because not every
/// source reports a human readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .0.as_deref().unwrap_or("no reason given"))]
pub struct FetchError(Option<String>);

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(Some(message.into()))
    }

    pub const fn without_message() -> Self {
        Self(None)
    }

    pub fn message(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[async_trait(?Send)]
pub trait PlacesGateway {
    /// Fetch all places in the order delivered by the source.
    async fn available_places(&self) -> Result<Vec<Place>, FetchError>;
}
