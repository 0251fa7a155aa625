use places_entities::{geo::MapPoint, place::Place};

use super::Result;
use crate::{
    gateways::{LocationGateway, PlacesGateway},
    sort::SortByDistanceTo,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaceOrder {
    /// As delivered by the source.
    Original,
    /// Ascending by distance to the given position.
    ByDistanceFrom(MapPoint),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AvailablePlaces {
    pub places: Vec<Place>,
    pub order: PlaceOrder,
}

impl AvailablePlaces {
    pub const fn is_sorted_by_distance(&self) -> bool {
        matches!(self.order, PlaceOrder::ByDistanceFrom(_))
    }
}

/// Fetch all places and sort them by the distance
/// to the current position of the user.
///
/// The position is requested only after the places
/// have been fetched successfully. If the position
/// cannot be determined the places are returned in
/// their original order.
pub async fn fetch_sorted_places<P, L>(
    places_gateway: &P,
    location_gateway: &L,
) -> Result<AvailablePlaces>
where
    P: PlacesGateway + ?Sized,
    L: LocationGateway + ?Sized,
{
    let mut places = places_gateway.available_places().await?;
    log::debug!("Fetched {} places", places.len());
    match location_gateway.current_position().await {
        Ok(pos) if pos.is_valid() => {
            log::debug!("Sort places by distance to {pos}");
            places.sort_by_distance_to(&pos);
            Ok(AvailablePlaces {
                places,
                order: PlaceOrder::ByDistanceFrom(pos),
            })
        }
        Ok(pos) => {
            log::info!("Keep original order of places: invalid position {pos}");
            Ok(AvailablePlaces {
                places,
                order: PlaceOrder::Original,
            })
        }
        Err(err) => {
            log::info!("Keep original order of places: {err}");
            Ok(AvailablePlaces {
                places,
                order: PlaceOrder::Original,
            })
        }
    }
}
