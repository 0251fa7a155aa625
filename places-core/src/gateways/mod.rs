mod location;
mod places;

pub use self::{location::*, places::*};
