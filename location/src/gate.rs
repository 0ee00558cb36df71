use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use logger::Logger;

use crate::{LocationError, LocationProvider, LocationState, PermissionStatus};

/// Drives the once-per-activation location acquisition sequence for the map
/// screen.
///
/// `activate` spawns a background thread that requests foreground permission
/// and then a single fix, committing the terminal state under a mutex. Each
/// activation takes a fresh generation number; `deactivate` (or a superseding
/// `activate`) bumps the generation so a resolution that arrives afterwards is
/// discarded instead of mutating a screen that is no longer there.
pub struct LocationGate {
    state: Arc<Mutex<LocationState>>,
    activation: Arc<AtomicU64>,
    logger: Logger,
}

impl LocationGate {
    pub fn new(logger: Logger) -> Self {
        Self {
            state: Arc::new(Mutex::new(LocationState::Loading)),
            activation: Arc::new(AtomicU64::new(0)),
            logger,
        }
    }

    /// Begins a new screen activation.
    ///
    /// Resets the state to `Loading` and runs the acquisition sequence once on
    /// a named background thread. Any sequence still in flight from an earlier
    /// activation is superseded; its eventual resolution is dropped. No result
    /// from a previous activation is reused.
    pub fn activate<P>(&self, mut provider: P) -> Result<(), LocationError>
    where
        P: LocationProvider + Send + 'static,
    {
        let run = self.activation.fetch_add(1, Ordering::SeqCst) + 1;

        if let Ok(mut state) = self.state.lock() {
            *state = LocationState::Loading;
        }

        let state = Arc::clone(&self.state);
        let activation = Arc::clone(&self.activation);
        let logger = self.logger.clone();

        thread::Builder::new()
            .name("location-acquisition".to_string())
            .spawn(move || {
                let resolved = acquire(&mut provider, &logger);

                let mut state = match state.lock() {
                    Ok(lock) => lock,
                    Err(_) => return,
                };

                // The screen deactivated or re-activated while we were
                // suspended in a provider call.
                if activation.load(Ordering::SeqCst) != run {
                    return;
                }

                // Transitions happen exactly once per activation.
                if matches!(*state, LocationState::Loading) {
                    *state = resolved;
                }
            })
            .map_err(|_| {
                LocationError::TaskSpawn(
                    "failed to spawn the location acquisition thread".to_string(),
                )
            })?;

        Ok(())
    }

    /// Marks the screen as gone. A pending resolution will be discarded
    /// rather than committed.
    pub fn deactivate(&self) {
        self.activation.fetch_add(1, Ordering::SeqCst);
    }

    /// Current state of the active screen.
    pub fn state(&self) -> LocationState {
        match self.state.lock() {
            Ok(state) => state.clone(),
            Err(_) => LocationState::Unavailable,
        }
    }
}

/// Runs the two-step sequence: permission, then a single fix. Denial and a
/// failed fix both resolve to `Unavailable`; only the denial is surfaced as a
/// developer-facing warning.
fn acquire<P: LocationProvider>(provider: &mut P, logger: &Logger) -> LocationState {
    match provider.request_foreground_permission() {
        Ok(PermissionStatus::Granted) => {}
        Ok(PermissionStatus::Denied) => {
            let _ = logger.warn("Permission to access location was denied.", true);
            return LocationState::Unavailable;
        }
        Err(e) => {
            let _ = logger.warn(&format!("Permission request failed: {}", e), true);
            return LocationState::Unavailable;
        }
    }

    match provider.current_position() {
        Ok(coordinate) => LocationState::Ready(coordinate),
        Err(e) => {
            let _ = logger.error(&format!("Could not obtain a location fix: {}", e), true);
            LocationState::Unavailable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coordinate;
    use std::sync::atomic::AtomicUsize;
    use std::time::{Duration, Instant};

    struct ScriptedDevice {
        permission: PermissionStatus,
        fix: Result<Coordinate, LocationError>,
        response_delay: Duration,
        permission_calls: Arc<AtomicUsize>,
        position_calls: Arc<AtomicUsize>,
    }

    impl ScriptedDevice {
        fn new(permission: PermissionStatus, fix: Result<Coordinate, LocationError>) -> Self {
            Self {
                permission,
                fix,
                response_delay: Duration::ZERO,
                permission_calls: Arc::new(AtomicUsize::new(0)),
                position_calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn with_response_delay(mut self, delay: Duration) -> Self {
            self.response_delay = delay;
            self
        }
    }

    impl LocationProvider for ScriptedDevice {
        fn request_foreground_permission(&mut self) -> Result<PermissionStatus, LocationError> {
            self.permission_calls.fetch_add(1, Ordering::SeqCst);
            thread::sleep(self.response_delay);
            Ok(self.permission)
        }

        fn current_position(&mut self) -> Result<Coordinate, LocationError> {
            self.position_calls.fetch_add(1, Ordering::SeqCst);
            thread::sleep(self.response_delay);
            self.fix.clone()
        }
    }

    fn test_logger() -> Logger {
        let dir = std::env::temp_dir().join("trail_map_gate_tests");
        Logger::new(&dir, "gate").expect("Failed to create test logger")
    }

    fn wait_until_settled(gate: &LocationGate, deadline: Duration) -> LocationState {
        let start = Instant::now();
        loop {
            let state = gate.state();
            if state.is_settled() || start.elapsed() > deadline {
                return state;
            }
            thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn granted_permission_and_fix_end_in_ready() {
        let fix = Coordinate::new(37.78825, -122.4324);
        let device = ScriptedDevice::new(PermissionStatus::Granted, Ok(fix));

        let gate = LocationGate::new(test_logger());
        gate.activate(device).expect("activation failed");

        let state = wait_until_settled(&gate, Duration::from_secs(2));
        assert_eq!(state, LocationState::Ready(fix));
    }

    #[test]
    fn denied_permission_ends_unavailable_without_position_call() {
        let device = ScriptedDevice::new(
            PermissionStatus::Denied,
            Ok(Coordinate::new(0.0, 0.0)),
        );
        let position_calls = Arc::clone(&device.position_calls);

        let gate = LocationGate::new(test_logger());
        gate.activate(device).expect("activation failed");

        let state = wait_until_settled(&gate, Duration::from_secs(2));
        assert_eq!(state, LocationState::Unavailable);
        assert_eq!(position_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn failing_fix_ends_unavailable() {
        let device = ScriptedDevice::new(
            PermissionStatus::Granted,
            Err(LocationError::Unavailable("no satellites".to_string())),
        );

        let gate = LocationGate::new(test_logger());
        gate.activate(device).expect("activation failed");

        let state = wait_until_settled(&gate, Duration::from_secs(2));
        assert_eq!(state, LocationState::Unavailable);
    }

    #[test]
    fn deactivation_suppresses_a_late_resolution() {
        let fix = Coordinate::new(37.78825, -122.4324);
        let device = ScriptedDevice::new(PermissionStatus::Granted, Ok(fix))
            .with_response_delay(Duration::from_millis(150));

        let gate = LocationGate::new(test_logger());
        gate.activate(device).expect("activation failed");
        gate.deactivate();

        // Give the in-flight sequence ample time to resolve and be dropped.
        thread::sleep(Duration::from_millis(600));
        assert_eq!(gate.state(), LocationState::Loading);
    }

    #[test]
    fn reactivation_runs_the_sequence_again_from_scratch() {
        let denied = ScriptedDevice::new(
            PermissionStatus::Denied,
            Ok(Coordinate::new(0.0, 0.0)),
        );
        let permission_calls = Arc::clone(&denied.permission_calls);

        let gate = LocationGate::new(test_logger());
        gate.activate(denied).expect("activation failed");
        assert_eq!(
            wait_until_settled(&gate, Duration::from_secs(2)),
            LocationState::Unavailable
        );

        let fix = Coordinate::new(37.78825, -122.4324);
        let granted = ScriptedDevice::new(PermissionStatus::Granted, Ok(fix));
        gate.activate(granted).expect("re-activation failed");

        assert_eq!(
            wait_until_settled(&gate, Duration::from_secs(2)),
            LocationState::Ready(fix)
        );
        // The first device saw exactly one permission request; no prior
        // denial was cached into the second run.
        assert_eq!(permission_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn superseding_activation_discards_the_stale_fix() {
        let stale_fix = Coordinate::new(0.0, 0.0);
        let slow = ScriptedDevice::new(PermissionStatus::Granted, Ok(stale_fix))
            .with_response_delay(Duration::from_millis(150));

        let gate = LocationGate::new(test_logger());
        gate.activate(slow).expect("activation failed");

        let fresh_fix = Coordinate::new(37.78825, -122.4324);
        let fast = ScriptedDevice::new(PermissionStatus::Granted, Ok(fresh_fix));
        gate.activate(fast).expect("re-activation failed");

        assert_eq!(
            wait_until_settled(&gate, Duration::from_secs(2)),
            LocationState::Ready(fresh_fix)
        );

        // Even after the slow run resolves, the fresh fix stays.
        thread::sleep(Duration::from_millis(600));
        assert_eq!(gate.state(), LocationState::Ready(fresh_fix));
    }
}
