//! Lifecycle of a single asynchronous fetch.
//!
//! ```text
//! Idle --begin--> Loading --settle--> Success(T)
//!                                 \-> Failure(ErrorInfo)
//! ```
//!
//! A settled state is terminal: fetching again requires a new instance.

pub const DEFAULT_ERROR_MESSAGE: &str = "Failed to fetch data.";

/// Display-only description of a failed fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub message: String,
}

impl ErrorInfo {
    /// Use the given message if it contains any
    /// visible characters, otherwise fall back to
    /// [`DEFAULT_ERROR_MESSAGE`].
    #[must_use]
    pub fn from_message(message: Option<&str>) -> Self {
        let message = message
            .map(str::trim)
            .filter(|msg| !msg.is_empty())
            .unwrap_or(DEFAULT_ERROR_MESSAGE);
        Self {
            message: message.to_string(),
        }
    }
}

impl Default for ErrorInfo {
    fn default() -> Self {
        Self::from_message(None)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Success(T),
    Failure(ErrorInfo),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> FetchState<T> {
    /// Enter the loading state.
    ///
    /// Returns `false` and leaves the state untouched
    /// if the fetch has already been started.
    pub fn begin(&mut self) -> bool {
        if !matches!(self, Self::Idle) {
            log::warn!("Unable to begin fetching: already started");
            return false;
        }
        log::debug!("Start fetching");
        *self = Self::Loading;
        true
    }

    /// Publish the outcome of the fetch.
    ///
    /// Returns `false` and drops the result if the
    /// state is not [`FetchState::Loading`].
    pub fn settle<E>(&mut self, result: Result<T, E>) -> bool
    where
        E: Into<ErrorInfo>,
    {
        if !self.is_loading() {
            log::warn!("Unable to settle fetch: not loading");
            return false;
        }
        *self = match result {
            Ok(value) => {
                log::debug!("Fetching succeeded");
                Self::Success(value)
            }
            Err(err) => {
                let info: ErrorInfo = err.into();
                log::debug!("Fetching failed: {}", info.message);
                Self::Failure(info)
            }
        };
        true
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Failure(_))
    }

    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    pub const fn error(&self) -> Option<&ErrorInfo> {
        match self {
            Self::Failure(info) => Some(info),
            _ => None,
        }
    }
}
