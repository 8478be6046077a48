use thiserror::Error;

/// Why a location attempt produced no usable coordinate.
///
/// The `Display` strings double as the copy shown in the error box, so they
/// stay short and free of host jargon.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("Geolocation is not supported by this browser")]
    CapabilityUnavailable,
    #[error("Location permission was denied")]
    PermissionDenied,
    #[error("Your position could not be determined")]
    PositionUnavailable,
    #[error("The location request timed out")]
    Timeout,
}

impl LocationError {
    /// Map a host geolocation error code onto the taxonomy. The host uses
    /// 1, 2 and 3; anything else counts as an unavailable position.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => LocationError::PermissionDenied,
            2 => LocationError::PositionUnavailable,
            3 => LocationError::Timeout,
            _ => LocationError::PositionUnavailable,
        }
    }
}
