//! Great-circle distance between two points on the Earth's surface.
//!
//! Pure math with no platform dependencies, usable from both the web
//! front-end and host-side tests. Distances are haversine on a spherical
//! Earth, which is plenty accurate at the few-mile scale the check-in gate
//! operates on.

use crate::constants::{EARTH_RADIUS_MILES, FEET_PER_MILE};

/// A point on the Earth's surface in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude within [-90, 90] and longitude within [-180, 180].
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Great-circle distance between two points in miles.
pub fn distance_miles(a: Location, b: Location) -> f64 {
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlng = (b.longitude - a.longitude).to_radians();
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (dlng / 2.0).sin().powi(2);
    // rounding can push h a hair past 1.0 for near-antipodal pairs
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_MILES * c
}

/// Great-circle distance between two points in feet.
#[inline]
pub fn distance_feet(a: Location, b: Location) -> f64 {
    distance_miles(a, b) * FEET_PER_MILE
}

/// True when `observed` lies within `radius_feet` of `target`.
/// The boundary is inclusive: a point exactly at the radius is in range.
#[inline]
pub fn is_within_proximity(observed: Location, target: Location, radius_feet: f64) -> bool {
    distance_feet(observed, target) <= radius_feet
}
