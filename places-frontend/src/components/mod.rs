mod available_places;
mod error;
mod places;

pub use self::{available_places::*, error::*, places::*};
