// Host-side integration tests for the acquisition state machine and the
// location error taxonomy.

use checkin_core::{AcquisitionState, Location, LocationError, LocationTracker};

fn somewhere() -> Location {
    Location::new(42.3763663, -71.1167299)
}

#[test]
fn tracker_starts_loading() {
    let tracker = LocationTracker::new();
    assert_eq!(*tracker.state(), AcquisitionState::Loading);
    assert_eq!(tracker.current_attempt(), 0);
}

#[test]
fn successful_attempt_resolves_and_sticks() {
    let mut tracker = LocationTracker::new();
    let attempt = tracker.begin_attempt();
    assert_eq!(*tracker.state(), AcquisitionState::Loading);
    assert!(tracker.resolve(attempt, somewhere()));
    assert_eq!(*tracker.state(), AcquisitionState::Resolved(somewhere()));
}

#[test]
fn failed_attempt_carries_a_message() {
    let mut tracker = LocationTracker::new();
    let attempt = tracker.begin_attempt();
    assert!(tracker.fail(attempt, LocationError::PermissionDenied));
    match tracker.state() {
        AcquisitionState::Failed(error) => {
            assert!(
                !error.to_string().is_empty(),
                "failure message must not be empty"
            );
        }
        other => panic!("expected Failed, got {:?}", other),
    }
}

#[test]
fn retry_returns_to_loading() {
    let mut tracker = LocationTracker::new();
    let attempt = tracker.begin_attempt();
    assert!(tracker.fail(attempt, LocationError::Timeout));
    tracker.begin_attempt();
    assert_eq!(*tracker.state(), AcquisitionState::Loading);
}

#[test]
fn stale_success_cannot_overwrite_newer_attempt() {
    let mut tracker = LocationTracker::new();
    let first = tracker.begin_attempt();
    let second = tracker.begin_attempt();
    assert!(
        !tracker.resolve(first, somewhere()),
        "stale resolve must be discarded"
    );
    assert_eq!(*tracker.state(), AcquisitionState::Loading);
    assert!(tracker.resolve(second, somewhere()));
    assert_eq!(*tracker.state(), AcquisitionState::Resolved(somewhere()));
}

#[test]
fn stale_failure_cannot_overwrite_newer_success() {
    let mut tracker = LocationTracker::new();
    let first = tracker.begin_attempt();
    let second = tracker.begin_attempt();
    assert!(tracker.resolve(second, somewhere()));
    assert!(
        !tracker.fail(first, LocationError::Timeout),
        "stale failure must be discarded"
    );
    assert_eq!(*tracker.state(), AcquisitionState::Resolved(somewhere()));
}

#[test]
fn attempt_ids_increase_monotonically() {
    let mut tracker = LocationTracker::new();
    let mut prev = 0;
    for _ in 0..5 {
        let id = tracker.begin_attempt();
        assert!(id > prev, "attempt id not increasing");
        prev = id;
    }
}

#[test]
fn host_error_codes_map_onto_the_taxonomy() {
    assert_eq!(LocationError::from_code(1), LocationError::PermissionDenied);
    assert_eq!(
        LocationError::from_code(2),
        LocationError::PositionUnavailable
    );
    assert_eq!(LocationError::from_code(3), LocationError::Timeout);
    // unknown codes count as an unavailable position
    assert_eq!(
        LocationError::from_code(0),
        LocationError::PositionUnavailable
    );
    assert_eq!(
        LocationError::from_code(42),
        LocationError::PositionUnavailable
    );
}

#[test]
fn every_error_renders_a_distinct_message() {
    let errors = [
        LocationError::CapabilityUnavailable,
        LocationError::PermissionDenied,
        LocationError::PositionUnavailable,
        LocationError::Timeout,
    ];
    for (i, a) in errors.iter().enumerate() {
        assert!(!a.to_string().is_empty(), "empty message for {:?}", a);
        for b in &errors[i + 1..] {
            assert_ne!(a.to_string(), b.to_string(), "{:?} and {:?} collide", a, b);
        }
    }
}
