use places_entities::{geo::*, place::*};

pub trait DistanceTo {
    fn distance_to(&self, pos: &MapPoint) -> Distance;
}

impl DistanceTo for Place {
    fn distance_to(&self, pos: &MapPoint) -> Distance {
        MapPoint::distance(self.pos, *pos).unwrap_or_else(|| {
            log::warn!("Invalid position of place {}: {}", self.id, self.pos);
            Distance::infinite()
        })
    }
}

pub trait SortByDistanceTo {
    /// Sort ascending by distance to the given position.
    ///
    /// The sort is stable: places with the same distance
    /// keep their relative order. Places with invalid
    /// coordinates are moved to the end.
    fn sort_by_distance_to(&mut self, pos: &MapPoint);
}

impl SortByDistanceTo for Vec<Place> {
    fn sort_by_distance_to(&mut self, pos: &MapPoint) {
        if !pos.is_valid() {
            log::warn!("Refusing to sort by distance to invalid position {pos}");
            return;
        }
        let mut places_with_distance: Vec<_> = self
            .drain(..)
            .map(|place| (place.distance_to(pos), place))
            .collect();
        places_with_distance.sort_by(|(a, _), (b, _)| a.total_cmp(b));
        self.extend(places_with_distance.into_iter().map(|(_, place)| place));
    }
}
