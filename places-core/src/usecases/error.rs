use thiserror::Error;

use crate::{fetch::ErrorInfo, gateways::FetchError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Unable to fetch places: {0}")]
    Fetch(#[from] FetchError),
}

impl From<Error> for ErrorInfo {
    fn from(from: Error) -> Self {
        match from {
            Error::Fetch(err) => ErrorInfo::from_message(err.message()),
        }
    }
}
