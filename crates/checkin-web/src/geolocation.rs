//! One-shot wrapper around the browser geolocation service.

use checkin_core::constants::{ACQUIRE_TIMEOUT_MS, ENABLE_HIGH_ACCURACY, MAX_FIX_AGE_MS};
use checkin_core::{Location, LocationError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Resolve the geolocation handle; absence means the capability is missing.
pub fn from_window() -> Result<web::Geolocation, LocationError> {
    let window = web::window().ok_or(LocationError::CapabilityUnavailable)?;
    window
        .navigator()
        .geolocation()
        .map_err(|_| LocationError::CapabilityUnavailable)
}

/// Request a single fresh position fix.
///
/// The callback-based host API is bridged to a future by handing the
/// promise's own resolve/reject functions to `getCurrentPosition`, so the
/// browser settles the promise directly with a position or a position error.
pub async fn current_position(geolocation: &web::Geolocation) -> Result<Location, LocationError> {
    let options = web::PositionOptions::new();
    options.set_enable_high_accuracy(ENABLE_HIGH_ACCURACY);
    options.set_timeout(ACQUIRE_TIMEOUT_MS);
    options.set_maximum_age(MAX_FIX_AGE_MS);

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(e) = geolocation.get_current_position_with_error_callback_and_options(
            &resolve,
            Some(&reject),
            &options,
        ) {
            log::warn!("[location] getCurrentPosition call failed: {:?}", e);
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });

    match JsFuture::from(promise).await {
        Ok(value) => {
            let position: web::Position = value.unchecked_into();
            let coords = position.coords();
            let location = Location::new(coords.latitude(), coords.longitude());
            if !location.is_valid() {
                log::warn!(
                    "[location] host reported out-of-range coordinates ({}, {})",
                    location.latitude,
                    location.longitude
                );
                return Err(LocationError::PositionUnavailable);
            }
            log::info!(
                "[location] fix ({:.7}, {:.7}) accuracy {:.0} m",
                location.latitude,
                location.longitude,
                coords.accuracy()
            );
            Ok(location)
        }
        Err(value) => Err(map_position_error(&value)),
    }
}

/// Read `code` and `message` off the rejection value without assuming its
/// class; a rejection with no code means geolocation itself was unusable.
fn map_position_error(value: &JsValue) -> LocationError {
    let code = js_sys::Reflect::get(value, &JsValue::from_str("code"))
        .ok()
        .and_then(|v| v.as_f64());
    let message = js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string());
    log::warn!("[location] host error code={:?} message={:?}", code, message);
    match code {
        Some(c) => LocationError::from_code(c as u16),
        None => LocationError::CapabilityUnavailable,
    }
}
