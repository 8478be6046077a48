// Deployment defaults and tuning constants for the check-in page.

// Target site and gate radius
pub const TARGET_LATITUDE: f64 = 42.3763663; // decimal degrees
pub const TARGET_LONGITUDE: f64 = -71.1167299;
pub const PROXIMITY_RADIUS_FEET: f64 = 1000.0;

// Embedded check-in form
pub const CHECKIN_FORM_URL: &str = "https://docs.google.com/forms/d/e/1FAIpQLSePJv9QmBMprzOAfTIysRR_vk9cRzOZp1jYbtQ4gHN7YDgb1w/viewform?usp=dialog";

// Browser geolocation request
pub const ENABLE_HIGH_ACCURACY: bool = true;
pub const ACQUIRE_TIMEOUT_MS: u32 = 10_000; // longest we wait for a fix
pub const MAX_FIX_AGE_MS: u32 = 0; // never accept a cached fix

// Great-circle math
pub const EARTH_RADIUS_MILES: f64 = 3959.0; // mean radius approximation
pub const FEET_PER_MILE: f64 = 5280.0;
