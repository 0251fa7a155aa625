pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::place_builder::*;

pub mod place_builder {

    use super::*;
    use crate::{geo::*, place::*};

    #[derive(Debug)]
    pub struct PlaceBuild {
        place: Place,
    }

    impl PlaceBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.place.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.place.name = name.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.place.pos = pos;
            self
        }
        pub fn lat_lng(self, lat: f64, lng: f64) -> Self {
            self.pos(MapPoint::new(lat, lng))
        }
        pub fn image(mut self, src: &str, alt: &str) -> Self {
            self.place.image = Image {
                src: src.into(),
                alt: alt.into(),
            };
            self
        }
        pub fn finish(self) -> Place {
            self.place
        }
    }

    impl Builder for Place {
        type Build = PlaceBuild;
        fn build() -> PlaceBuild {
            PlaceBuild {
                place: Place {
                    id: String::new(),
                    name: String::new(),
                    pos: MapPoint::new(0.0, 0.0),
                    image: Image::default(),
                },
            }
        }
    }
}
