use async_trait::async_trait;
use thiserror::Error;

use places_entities::geo::MapPoint;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("Geolocation is not supported")]
    Unsupported,
    #[error("Permission to access the current position was denied")]
    PermissionDenied,
    #[error("The current position is unavailable: {0}")]
    Unavailable(String),
    #[error("Invalid position: {0}")]
    InvalidPosition(String),
}

#[async_trait(?Send)]
pub trait LocationGateway {
    /// Resolve the current position of the user exactly once.
    async fn current_position(&self) -> Result<MapPoint, LocationError>;
}
