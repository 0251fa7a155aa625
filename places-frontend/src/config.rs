//! Build time configuration.

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Root URL of the places API.
///
/// Can be set with the `PLACES_API_URL` environment
/// variable when building the application.
#[must_use]
pub fn api_url() -> &'static str {
    api_url_or_default(option_env!("PLACES_API_URL"))
}

fn api_url_or_default(url: Option<&'static str>) -> &'static str {
    url.map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
}

#[must_use]
pub const fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
