//! Location acquisition state shared between page startup and the retry flow.
//!
//! The page takes exactly one fix per load plus manual retries, so the whole
//! model is the latest attempt's state plus a counter that lets late
//! responses from superseded attempts be recognized and dropped.

use crate::error::LocationError;
use crate::geo::Location;

/// Monotonic counter distinguishing successive location requests.
pub type AttemptId = u64;

/// Where the latest acquisition attempt currently stands.
#[derive(Clone, Debug, PartialEq)]
pub enum AcquisitionState {
    Loading,
    Resolved(Location),
    Failed(LocationError),
}

/// Owns the acquisition state and enforces last-write-wins across attempts.
///
/// `begin_attempt` hands out a fresh id and an outcome is applied only while
/// its id is still the newest, so a slow response from an earlier request can
/// never overwrite the result of a later retry.
#[derive(Debug)]
pub struct LocationTracker {
    state: AcquisitionState,
    current_attempt: AttemptId,
}

impl Default for LocationTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationTracker {
    pub fn new() -> Self {
        Self {
            state: AcquisitionState::Loading,
            current_attempt: 0,
        }
    }

    /// Start a new attempt: state returns to `Loading` and a fresh id is
    /// issued. Any outcome still in flight for an earlier id becomes stale.
    pub fn begin_attempt(&mut self) -> AttemptId {
        self.current_attempt += 1;
        self.state = AcquisitionState::Loading;
        self.current_attempt
    }

    /// Record a successful fix. Returns false, changing nothing, when the
    /// attempt has been superseded.
    pub fn resolve(&mut self, attempt: AttemptId, location: Location) -> bool {
        if !self.is_current(attempt) {
            return false;
        }
        self.state = AcquisitionState::Resolved(location);
        true
    }

    /// Record a failed attempt. Same staleness rule as `resolve`.
    pub fn fail(&mut self, attempt: AttemptId, error: LocationError) -> bool {
        if !self.is_current(attempt) {
            return false;
        }
        self.state = AcquisitionState::Failed(error);
        true
    }

    pub fn state(&self) -> &AcquisitionState {
        &self.state
    }

    pub fn current_attempt(&self) -> AttemptId {
        self.current_attempt
    }

    fn is_current(&self, attempt: AttemptId) -> bool {
        if attempt != self.current_attempt {
            log::debug!(
                "[location] dropping stale outcome for attempt {} (current {})",
                attempt,
                self.current_attempt
            );
            return false;
        }
        true
    }
}
