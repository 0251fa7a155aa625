use super::*;
use places_entities as e;

impl From<e::place::Image> for Image {
    fn from(from: e::place::Image) -> Self {
        let e::place::Image { src, alt } = from;
        Self { src, alt }
    }
}

impl From<Image> for e::place::Image {
    fn from(from: Image) -> Self {
        let Image { src, alt } = from;
        Self { src, alt }
    }
}

impl From<e::place::Place> for Place {
    fn from(from: e::place::Place) -> Self {
        let e::place::Place {
            id,
            name,
            pos,
            image,
        } = from;
        Self {
            id,
            title: name,
            image: image.into(),
            lat: pos.lat(),
            lon: pos.lng(),
        }
    }
}

// The position is not validated here: places with
// invalid coordinates are still displayable.
impl From<Place> for e::place::Place {
    fn from(from: Place) -> Self {
        let Place {
            id,
            title,
            image,
            lat,
            lon,
        } = from;
        Self {
            id,
            name: title,
            pos: e::geo::MapPoint::new(lat, lon),
            image: image.into(),
        }
    }
}
