//! Shared transfer speed estimate.

use footprint_types::Measurement;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ConnectionSpeed;

/// Where the current speed estimate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedSource {
    /// No estimate yet.
    #[default]
    Unknown,
    /// Reported by the host environment; never overridden.
    Connection,
    /// Slowest transfer observed so far.
    Observed,
}

/// Bytes-per-millisecond estimate used to size resources the browser
/// reports without any byte counts.
///
/// Seeded from a host-reported connection speed when one is available.
/// Otherwise refined from observed transfers, keeping the slowest one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpeedEstimator {
    bytes_per_ms: f64,
    source: SpeedSource,
}

impl SpeedEstimator {
    /// Creates an estimator, adopting `connection` if it is usable.
    #[must_use]
    pub fn new(connection: Option<ConnectionSpeed>) -> Self {
        match connection {
            Some(speed) if speed.is_usable() => Self {
                bytes_per_ms: speed.bytes_per_ms(),
                source: SpeedSource::Connection,
            },
            _ => Self::default(),
        }
    }

    /// Returns the estimate in bytes per millisecond, or `None` if unknown.
    #[must_use]
    pub fn current(&self) -> Option<f64> {
        (self.bytes_per_ms > 0.0).then_some(self.bytes_per_ms)
    }

    /// Returns the estimate in bytes per millisecond, zero if unknown.
    #[must_use]
    pub const fn bytes_per_ms(&self) -> f64 {
        self.bytes_per_ms
    }

    /// Returns where the estimate came from.
    #[must_use]
    pub const fn source(&self) -> SpeedSource {
        self.source
    }

    /// Refines the estimate from a measurement.
    ///
    /// Only measurements with both a transfer size and a duration count. The
    /// candidate `transfer_size / duration / 1024` is adopted if there is no
    /// estimate yet or if it is lower than the current one. A connection
    /// speed is never replaced.
    ///
    /// Returns true if the estimate changed.
    pub fn observe(&mut self, measurement: &Measurement) -> bool {
        if matches!(self.source, SpeedSource::Connection) {
            return false;
        }

        let transfer = measurement.transfer_size();
        let duration = measurement.duration();
        if transfer == 0 || duration <= 0.0 {
            return false;
        }

        let candidate = transfer as f64 / duration / 1024.0;
        if self.current().is_some_and(|current| candidate >= current) {
            return false;
        }

        debug!(
            name = measurement.name(),
            previous = self.bytes_per_ms,
            candidate,
            "adopting observed speed estimate"
        );
        self.bytes_per_ms = candidate;
        self.source = SpeedSource::Observed;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn transfer(size: u64, duration: f64) -> Measurement {
        Measurement::resource("https://example.com/a.js")
            .with_transfer_size(size)
            .with_duration(duration)
    }

    #[test]
    fn test_unknown_by_default() {
        let speed = SpeedEstimator::new(None);
        assert_eq!(speed.current(), None);
        assert_eq!(speed.bytes_per_ms(), 0.0);
        assert_eq!(speed.source(), SpeedSource::Unknown);
    }

    #[test]
    fn test_connection_speed_adopted() {
        let speed = SpeedEstimator::new(Some(ConnectionSpeed::DownlinkMbps(8.0)));
        assert_relative_eq!(speed.current().unwrap(), 1000.0);
        assert_eq!(speed.source(), SpeedSource::Connection);
    }

    #[test]
    fn test_zero_connection_speed_ignored() {
        let speed = SpeedEstimator::new(Some(ConnectionSpeed::DownlinkMbps(0.0)));
        assert_eq!(speed.source(), SpeedSource::Unknown);
    }

    #[test]
    fn test_connection_speed_never_overridden() {
        let mut speed = SpeedEstimator::new(Some(ConnectionSpeed::BytesPerMs(50.0)));
        assert!(!speed.observe(&transfer(1024, 10.0)));
        assert_relative_eq!(speed.current().unwrap(), 50.0);
    }

    #[test]
    fn test_keeps_slowest_observation() {
        let mut speed = SpeedEstimator::new(None);

        assert!(speed.observe(&transfer(20_480, 10.0)));
        assert_relative_eq!(speed.current().unwrap(), 2.0);

        assert!(speed.observe(&transfer(10_240, 10.0)));
        assert_relative_eq!(speed.current().unwrap(), 1.0);

        // Faster transfer leaves the estimate alone
        assert!(!speed.observe(&transfer(102_400, 10.0)));
        assert_relative_eq!(speed.current().unwrap(), 1.0);
        assert_eq!(speed.source(), SpeedSource::Observed);
    }

    #[test]
    fn test_skips_incomplete_measurements() {
        let mut speed = SpeedEstimator::new(None);
        assert!(!speed.observe(&transfer(0, 10.0)));
        assert!(!speed.observe(&transfer(1024, 0.0)));
        assert_eq!(speed.current(), None);
    }
}
