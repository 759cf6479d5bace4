//! Initial location resolution.
//!
//! Runs exactly once per consumer-app mount: one bounded geolocation
//! attempt, then a fixed city-center fallback. The dashboard app never
//! calls this.

use async_trait::async_trait;
use nowcast_api::Coordinate;
use thiserror::Error;

/// City-center default used when no device fix is available
/// (MacRitchie, Singapore).
pub const FALLBACK_LOCATION: Coordinate = Coordinate {
    lat: 1.3521,
    lon: 103.8198,
};

/// Bounded wait for a device fix.
pub const GEOLOCATION_TIMEOUT_MS: u32 = 5_000;
/// A cached fix up to a minute old is good enough.
pub const GEOLOCATION_MAX_AGE_MS: u32 = 60_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeolocationError {
    #[error("geolocation is not available")]
    Unavailable,
    #[error("permission denied")]
    PermissionDenied,
    #[error("position acquisition timed out")]
    Timeout,
    #[error("{0}")]
    Other(String),
}

/// Single-shot asynchronous position acquisition. The browser's
/// success/error callback pair maps onto the returned `Result`.
#[async_trait(?Send)]
pub trait Geolocator {
    async fn current_position(&self) -> Result<Coordinate, GeolocationError>;
}

/// Where the session starts: the coordinate to forecast, and whether the
/// map should fly there. A fallback start leaves the map at its default
/// view, so `fly_to` stays empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialLocation {
    pub coordinate: Coordinate,
    pub fly_to: Option<Coordinate>,
}

/// Resolve the session's starting coordinate. Pass `None` when the
/// platform has no geolocation capability at all.
pub async fn resolve_initial_location(geolocator: Option<&dyn Geolocator>) -> InitialLocation {
    let Some(geolocator) = geolocator else {
        log::info!("Geolocation unavailable, using default location");
        return InitialLocation {
            coordinate: FALLBACK_LOCATION,
            fly_to: None,
        };
    };

    match geolocator.current_position().await {
        Ok(coordinate) => {
            log::info!("Got device location: {}, {}", coordinate.lat, coordinate.lon);
            InitialLocation {
                coordinate,
                fly_to: Some(coordinate),
            }
        }
        Err(err) => {
            log::warn!("Geolocation failed ({err}), using default location");
            InitialLocation {
                coordinate: FALLBACK_LOCATION,
                fly_to: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedGeolocator(Result<Coordinate, GeolocationError>);

    #[async_trait(?Send)]
    impl Geolocator for FixedGeolocator {
        async fn current_position(&self) -> Result<Coordinate, GeolocationError> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn device_fix_flies_to_itself() {
        let here = Coordinate {
            lat: 1.29,
            lon: 103.85,
        };
        let geolocator = FixedGeolocator(Ok(here));
        let initial = resolve_initial_location(Some(&geolocator)).await;
        assert_eq!(initial.coordinate, here);
        assert_eq!(initial.fly_to, Some(here));
    }

    #[tokio::test]
    async fn denial_falls_back_without_flying() {
        let geolocator = FixedGeolocator(Err(GeolocationError::PermissionDenied));
        let initial = resolve_initial_location(Some(&geolocator)).await;
        assert_eq!(initial.coordinate, FALLBACK_LOCATION);
        assert_eq!(initial.fly_to, None);
    }

    #[tokio::test]
    async fn timeout_behaves_like_denial() {
        let geolocator = FixedGeolocator(Err(GeolocationError::Timeout));
        let initial = resolve_initial_location(Some(&geolocator)).await;
        assert_eq!(initial.coordinate, FALLBACK_LOCATION);
        assert_eq!(initial.fly_to, None);
    }

    #[tokio::test]
    async fn missing_capability_falls_back() {
        let initial = resolve_initial_location(None).await;
        assert_eq!(initial.coordinate, FALLBACK_LOCATION);
        assert_eq!(initial.fly_to, None);
    }
}
