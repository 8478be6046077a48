use crate::config::CheckinConfig;
use crate::geo;
use crate::state::AcquisitionState;

/// The page branch a given acquisition state maps to.
///
/// Derived on demand, never stored. `Open` and `Closed` exist only for
/// resolved fixes, so a loading or failed page can never claim to be in or
/// out of range.
#[derive(Clone, Debug, PartialEq)]
pub enum CheckinGate {
    /// Still waiting for a fix.
    Pending,
    /// The attempt failed; carries the user-facing message.
    Unavailable { message: String },
    /// Within the radius: the form may be shown.
    Open { distance_feet: f64 },
    /// Resolved but out of range.
    Closed { distance_feet: f64 },
}

/// Decide which branch to render for the current acquisition state.
pub fn evaluate_gate(state: &AcquisitionState, config: &CheckinConfig) -> CheckinGate {
    match state {
        AcquisitionState::Loading => CheckinGate::Pending,
        AcquisitionState::Failed(error) => CheckinGate::Unavailable {
            message: error.to_string(),
        },
        AcquisitionState::Resolved(observed) => {
            let distance_feet = geo::distance_feet(*observed, config.target);
            if geo::is_within_proximity(*observed, config.target, config.radius_feet) {
                CheckinGate::Open { distance_feet }
            } else {
                CheckinGate::Closed { distance_feet }
            }
        }
    }
}
