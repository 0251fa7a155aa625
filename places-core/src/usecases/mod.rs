mod error;
mod fetch_sorted_places;
mod load_available_places;

#[cfg(test)]
pub mod tests;

type Result<T> = std::result::Result<T, Error>;

pub use self::{error::Error, fetch_sorted_places::*, load_available_places::*};
