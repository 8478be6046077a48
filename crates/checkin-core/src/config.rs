use crate::constants::{
    CHECKIN_FORM_URL, PROXIMITY_RADIUS_FEET, TARGET_LATITUDE, TARGET_LONGITUDE,
};
use crate::geo::Location;

/// Immutable page configuration, built once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckinConfig {
    pub target: Location,
    pub radius_feet: f64,
    pub form_url: String,
}

impl Default for CheckinConfig {
    fn default() -> Self {
        Self {
            target: Location::new(TARGET_LATITUDE, TARGET_LONGITUDE),
            radius_feet: PROXIMITY_RADIUS_FEET,
            form_url: CHECKIN_FORM_URL.to_string(),
        }
    }
}

impl CheckinConfig {
    /// Merge optional per-deployment overrides onto the defaults.
    ///
    /// Fields are taken independently, except that the target needs both
    /// coordinates. An override that fails validation (coordinate out of
    /// range, radius not positive, empty URL) is dropped with a warning and
    /// the default for that field is kept.
    pub fn from_parts(
        latitude: Option<f64>,
        longitude: Option<f64>,
        radius_feet: Option<f64>,
        form_url: Option<String>,
    ) -> Self {
        let mut config = Self::default();

        match (latitude, longitude) {
            (Some(lat), Some(lng)) => {
                let target = Location::new(lat, lng);
                if target.is_valid() {
                    config.target = target;
                } else {
                    log::warn!("[config] ignoring invalid target override ({lat}, {lng})");
                }
            }
            (None, None) => {}
            _ => log::warn!("[config] target override needs both latitude and longitude"),
        }

        if let Some(radius) = radius_feet {
            if radius.is_finite() && radius > 0.0 {
                config.radius_feet = radius;
            } else {
                log::warn!("[config] ignoring non-positive radius override {radius}");
            }
        }

        if let Some(url) = form_url {
            if url.is_empty() {
                log::warn!("[config] ignoring empty form URL override");
            } else {
                config.form_url = url;
            }
        }

        config
    }
}
