use async_trait::async_trait;
use js_sys::{Function, Promise, Reflect};
use leptos::window;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Position, PositionError};

use places_core::{entities::MapPoint, LocationError, LocationGateway};

/// Current position provided by the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocation;

#[async_trait(?Send)]
impl LocationGateway for BrowserLocation {
    async fn current_position(&self) -> Result<MapPoint, LocationError> {
        let geolocation = window()
            .navigator()
            .geolocation()
            .map_err(|_| LocationError::Unsupported)?;

        // Turn the single-shot callbacks into a promise.
        let promise = Promise::new(&mut |resolve, reject| {
            if let Err(err) =
                geolocation.get_current_position_with_error_callback(&resolve, Some(&reject))
            {
                reject_with(&reject, &err);
            }
        });

        // The browser always resolves with a position object,
        // but the bindings are unable to check its type at runtime.
        let position = JsFuture::from(promise)
            .await
            .map_err(position_error)?
            .unchecked_into::<Position>();

        let coords = position.coords();
        let (lat, lng) = (coords.latitude(), coords.longitude());
        log::debug!("Current position: {lat},{lng}");
        MapPoint::try_from_lat_lng_deg(lat, lng)
            .ok_or_else(|| LocationError::InvalidPosition(format!("{lat},{lng}")))
    }
}

fn reject_with(reject: &Function, err: &JsValue) {
    if let Err(call_err) = reject.call1(&JsValue::NULL, err) {
        log::warn!("Unable to reject position request: {call_err:?}");
    }
}

fn position_error(err: JsValue) -> LocationError {
    let code = Reflect::get(&err, &JsValue::from_str("code"))
        .ok()
        .and_then(|code| code.as_f64());
    if code.is_none() {
        return LocationError::Unavailable(
            err.as_string()
                .unwrap_or_else(|| "unknown JS error".to_string()),
        );
    }
    let err = err.unchecked_into::<PositionError>();
    location_error(err.code(), err.message())
}

fn location_error(code: u16, message: String) -> LocationError {
    if code == PositionError::PERMISSION_DENIED {
        return LocationError::PermissionDenied;
    }
    LocationError::Unavailable(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_denied_permission() {
        assert_eq!(
            LocationError::PermissionDenied,
            location_error(PositionError::PERMISSION_DENIED, "User denied".to_string())
        );
    }

    #[test]
    fn map_other_position_errors_to_unavailable() {
        assert_eq!(
            LocationError::Unavailable("Timeout expired".to_string()),
            location_error(PositionError::TIMEOUT, "Timeout expired".to_string())
        );
        assert_eq!(
            LocationError::Unavailable("No fix".to_string()),
            location_error(PositionError::POSITION_UNAVAILABLE, "No fix".to_string())
        );
    }
}
