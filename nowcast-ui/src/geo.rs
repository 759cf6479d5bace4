//! Browser geolocation behind the [`Geolocator`] trait.

use async_trait::async_trait;
use futures::channel::oneshot;
use nowcast_api::Coordinate;
use nowcast_core::location::{
    Geolocator, GeolocationError, GEOLOCATION_MAX_AGE_MS, GEOLOCATION_TIMEOUT_MS,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// `navigator.geolocation` wrapped as a single-shot async acquisition with
/// a bounded wait: low accuracy, 5 s timeout, cached fixes up to a minute
/// old accepted.
pub struct WebGeolocator {
    geolocation: web_sys::Geolocation,
}

impl WebGeolocator {
    /// `None` when the browser exposes no geolocation capability, which the
    /// resolver treats the same as a failed acquisition.
    pub fn new() -> Option<Self> {
        let geolocation = web_sys::window()?.navigator().geolocation().ok()?;
        Some(Self { geolocation })
    }
}

#[async_trait(?Send)]
impl Geolocator for WebGeolocator {
    async fn current_position(&self) -> Result<Coordinate, GeolocationError> {
        let (sender, receiver) = oneshot::channel();
        let sender = Rc::new(RefCell::new(Some(sender)));

        let on_success = {
            let sender = sender.clone();
            Closure::<dyn FnMut(web_sys::Position)>::new(move |position: web_sys::Position| {
                let coords = position.coords();
                if let Some(sender) = sender.borrow_mut().take() {
                    let _ = sender.send(Ok(Coordinate {
                        lat: coords.latitude(),
                        lon: coords.longitude(),
                    }));
                }
            })
        };
        let on_error = {
            let sender = sender.clone();
            Closure::<dyn FnMut(web_sys::PositionError)>::new(
                move |error: web_sys::PositionError| {
                    if let Some(sender) = sender.borrow_mut().take() {
                        let _ = sender.send(Err(map_position_error(&error)));
                    }
                },
            )
        };

        let options = web_sys::PositionOptions::new();
        options.set_enable_high_accuracy(false);
        options.set_timeout(GEOLOCATION_TIMEOUT_MS);
        options.set_maximum_age(GEOLOCATION_MAX_AGE_MS);

        self.geolocation
            .get_current_position_with_error_callback_and_options(
                on_success.as_ref().unchecked_ref(),
                Some(on_error.as_ref().unchecked_ref()),
                &options,
            )
            .map_err(|_| GeolocationError::Unavailable)?;

        // The closures must outlive the browser callback; awaiting here
        // keeps them on the stack until one of them fires.
        receiver
            .await
            .map_err(|_| GeolocationError::Other("geolocation callback dropped".to_string()))?
    }
}

fn map_position_error(error: &web_sys::PositionError) -> GeolocationError {
    match error.code() {
        web_sys::PositionError::PERMISSION_DENIED => GeolocationError::PermissionDenied,
        web_sys::PositionError::TIMEOUT => GeolocationError::Timeout,
        _ => GeolocationError::Other(error.message()),
    }
}
