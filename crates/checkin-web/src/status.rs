// User-facing copy derived from the gate decision.
//
// Pure string formatting, kept free of browser types so the exact copy can
// be asserted host-side.

use checkin_core::constants::FEET_PER_MILE;
use checkin_core::CheckinGate;

/// Icon shown next to the status line.
pub fn status_icon(gate: &CheckinGate) -> &'static str {
    match gate {
        CheckinGate::Pending | CheckinGate::Unavailable { .. } => "📍",
        CheckinGate::Open { .. } => "✅",
        CheckinGate::Closed { .. } => "⚠️",
    }
}

/// One-line summary of where the visitor stands.
pub fn status_text(gate: &CheckinGate) -> String {
    match gate {
        CheckinGate::Pending => "Getting location...".to_string(),
        CheckinGate::Unavailable { .. } => "Location not detected".to_string(),
        CheckinGate::Open { .. } => "Within range".to_string(),
        CheckinGate::Closed { distance_feet } => format!(
            "You are {} mi away from the target location",
            format_miles(*distance_feet)
        ),
    }
}

/// CSS classes giving the status line its color.
pub fn status_class(gate: &CheckinGate) -> &'static str {
    match gate {
        CheckinGate::Pending => "status status-loading",
        CheckinGate::Open { .. } => "status status-ok",
        CheckinGate::Unavailable { .. } | CheckinGate::Closed { .. } => "status status-warn",
    }
}

/// Copy for the error box; `None` outside the failed branch.
pub fn error_text(gate: &CheckinGate) -> Option<String> {
    match gate {
        CheckinGate::Unavailable { message } => Some(format!("Location error: {message}")),
        _ => None,
    }
}

/// Explains the radius requirement under the out-of-range status.
pub fn out_of_range_detail(radius_feet: f64) -> String {
    format!("You need to be within {radius_feet:.0} feet of the target location to check in.")
}

/// Miles with one decimal place, as shown to the visitor.
pub fn format_miles(distance_feet: f64) -> String {
    format!("{:.1}", distance_feet / FEET_PER_MILE)
}
