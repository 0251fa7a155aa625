//! Business logic of the available places feature.

pub mod fetch;
pub mod gateways;
pub mod picked;
pub mod sort;
pub mod usecases;

pub mod entities {
    pub use places_entities::{geo::*, place::*};
}

pub use self::{fetch::*, gateways::*, picked::*};
