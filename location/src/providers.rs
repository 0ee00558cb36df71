use std::thread;
use std::time::Duration;

use rand::Rng;

use crate::{Coordinate, LocationError, LocationProvider, PermissionStatus};

const METERS_PER_DEGREE: f64 = 111_320.0;

/// Stands in for the device location service on desktop builds.
///
/// The permission outcome and the fix are scripted up front; both calls block
/// for a configurable response delay, the way the real service suspends while
/// a dialog is open or a fix is being acquired. An optional jitter scatters
/// the reported fix a few metres around the configured one.
pub struct SimulatedDevice {
    permission: PermissionStatus,
    fix: Option<Coordinate>,
    response_delay: Duration,
    jitter_meters: f64,
}

impl SimulatedDevice {
    /// A device whose user grants permission and that reports `fix`.
    pub fn granted_at(fix: Coordinate) -> Self {
        Self {
            permission: PermissionStatus::Granted,
            fix: Some(fix),
            response_delay: Duration::ZERO,
            jitter_meters: 0.0,
        }
    }

    /// A device whose user denies the permission dialog.
    pub fn denied() -> Self {
        Self {
            permission: PermissionStatus::Denied,
            fix: None,
            response_delay: Duration::ZERO,
            jitter_meters: 0.0,
        }
    }

    /// A device that grants permission but cannot produce a fix.
    pub fn without_fix() -> Self {
        Self {
            permission: PermissionStatus::Granted,
            fix: None,
            response_delay: Duration::ZERO,
            jitter_meters: 0.0,
        }
    }

    /// How long each call blocks before answering.
    pub fn with_response_delay(mut self, delay: Duration) -> Self {
        self.response_delay = delay;
        self
    }

    /// Scatter reported fixes up to `meters` from the configured one.
    pub fn with_jitter_meters(mut self, meters: f64) -> Self {
        self.jitter_meters = meters;
        self
    }
}

impl LocationProvider for SimulatedDevice {
    fn request_foreground_permission(&mut self) -> Result<PermissionStatus, LocationError> {
        thread::sleep(self.response_delay);
        Ok(self.permission)
    }

    fn current_position(&mut self) -> Result<Coordinate, LocationError> {
        thread::sleep(self.response_delay);

        // The real service refuses a position request made without the
        // permission having been granted.
        if self.permission == PermissionStatus::Denied {
            return Err(LocationError::PermissionDenied);
        }

        let base = self.fix.ok_or_else(|| {
            LocationError::Unavailable("the simulated device has no fix configured".to_string())
        })?;

        if self.jitter_meters == 0.0 {
            return Ok(base);
        }

        let mut rng = rand::thread_rng();
        let offset = self.jitter_meters / METERS_PER_DEGREE;
        Ok(Coordinate::new(
            base.latitude + rng.gen_range(-offset..=offset),
            base.longitude + rng.gen_range(-offset..=offset),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denied_device_reports_denied_status() {
        let mut device = SimulatedDevice::denied();
        assert_eq!(
            device.request_foreground_permission(),
            Ok(PermissionStatus::Denied)
        );
    }

    #[test]
    fn granted_device_reports_the_exact_fix_without_jitter() {
        let fix = Coordinate::new(37.78825, -122.4324);
        let mut device = SimulatedDevice::granted_at(fix);

        assert_eq!(
            device.request_foreground_permission(),
            Ok(PermissionStatus::Granted)
        );
        assert_eq!(device.current_position(), Ok(fix));
    }

    #[test]
    fn jitter_stays_within_the_configured_radius() {
        let fix = Coordinate::new(37.78825, -122.4324);
        let mut device = SimulatedDevice::granted_at(fix).with_jitter_meters(50.0);

        let max_offset = 50.0 / METERS_PER_DEGREE;
        for _ in 0..20 {
            let reported = device.current_position().expect("no fix");
            assert!((reported.latitude - fix.latitude).abs() <= max_offset);
            assert!((reported.longitude - fix.longitude).abs() <= max_offset);
        }
    }

    #[test]
    fn device_without_fix_fails_the_position_request() {
        let mut device = SimulatedDevice::without_fix();
        assert!(device.current_position().is_err());
    }

    #[test]
    fn denied_device_refuses_the_position_request() {
        let mut device = SimulatedDevice::denied();
        assert_eq!(
            device.current_position(),
            Err(LocationError::PermissionDenied)
        );
    }
}
