//! Engine configuration.

use footprint_types::{FootprintError, Result};
use serde::{Deserialize, Serialize};

use crate::IgnoreList;

/// Bytes per millisecond for one megabit per second.
const BYTES_PER_MS_PER_MBPS: f64 = 1_000_000.0 / 8.0 / 1000.0;

/// Connection speed reported by the host environment.
///
/// Serializes externally tagged, e.g. `{"downlink_mbps": 10.0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionSpeed {
    /// Effective bandwidth in megabits per second, as reported by
    /// `navigator.connection.downlink`.
    DownlinkMbps(f64),
    /// Throughput in bytes per millisecond.
    BytesPerMs(f64),
}

impl ConnectionSpeed {
    /// Creates a speed from a downlink value in megabits per second.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not finite.
    pub fn downlink_mbps(mbps: f64) -> Result<Self> {
        if !mbps.is_finite() || mbps < 0.0 {
            return Err(FootprintError::InvalidSpeed(mbps));
        }
        Ok(Self::DownlinkMbps(mbps))
    }

    /// Converts the speed to bytes per millisecond.
    #[must_use]
    pub fn bytes_per_ms(&self) -> f64 {
        match *self {
            Self::DownlinkMbps(mbps) => mbps * BYTES_PER_MS_PER_MBPS,
            Self::BytesPerMs(bytes) => bytes,
        }
    }

    /// Returns true if the speed can seed an estimate (finite and positive).
    #[must_use]
    pub fn is_usable(&self) -> bool {
        let bytes = self.bytes_per_ms();
        bytes.is_finite() && bytes > 0.0
    }
}

/// Configuration for a [`FootprintEngine`](crate::FootprintEngine).
///
/// Both ambient signals are optional. Without an origin,
/// [`ResourceRecord::is_external`](crate::ResourceRecord::is_external) yields
/// `None`; without a connection speed the engine estimates one from observed
/// transfers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Origin of the analysed page, e.g. `https://example.com`.
    pub origin: Option<String>,
    /// Connection speed reported by the host environment.
    pub connection_speed: Option<ConnectionSpeed>,
    /// Regular expressions for resource names to exclude.
    pub ignore: Vec<String>,
}

impl EngineConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            origin: None,
            connection_speed: None,
            ignore: Vec::new(),
        }
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the page origin.
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Sets the connection speed.
    #[must_use]
    pub fn with_connection_speed(mut self, speed: ConnectionSpeed) -> Self {
        self.connection_speed = Some(speed);
        self
    }

    /// Adds an ignore pattern.
    #[must_use]
    pub fn with_ignore(mut self, pattern: impl Into<String>) -> Self {
        self.ignore.push(pattern.into());
        self
    }

    /// Compiles the ignore patterns.
    ///
    /// # Errors
    ///
    /// Returns an error if any pattern is not a valid regular expression.
    pub fn ignore_list(&self) -> Result<IgnoreList> {
        IgnoreList::from_patterns(self.ignore.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_downlink_conversion() {
        let speed = ConnectionSpeed::downlink_mbps(10.0).unwrap();
        assert_relative_eq!(speed.bytes_per_ms(), 1250.0);
        assert_relative_eq!(ConnectionSpeed::BytesPerMs(3.5).bytes_per_ms(), 3.5);
    }

    #[test]
    fn test_invalid_downlink() {
        assert!(matches!(
            ConnectionSpeed::downlink_mbps(-1.0),
            Err(FootprintError::InvalidSpeed(_))
        ));
        assert!(ConnectionSpeed::downlink_mbps(f64::INFINITY).is_err());
    }

    #[test]
    fn test_zero_speed_unusable() {
        assert!(!ConnectionSpeed::DownlinkMbps(0.0).is_usable());
        assert!(!ConnectionSpeed::BytesPerMs(f64::NAN).is_usable());
        assert!(ConnectionSpeed::DownlinkMbps(1.5).is_usable());
    }

    #[test]
    fn test_config_from_json() {
        let config = EngineConfig::from_json(
            r#"{
                "origin": "https://example.com",
                "connection_speed": {"downlink_mbps": 4.0},
                "ignore": ["analytics\\.js$", "^https://ads\\."]
            }"#,
        )
        .unwrap();

        assert_eq!(config.origin.as_deref(), Some("https://example.com"));
        assert_eq!(config.connection_speed, Some(ConnectionSpeed::DownlinkMbps(4.0)));
        assert_eq!(config.ignore_list().unwrap().len(), 2);
    }

    #[test]
    fn test_config_defaults() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert!(config.ignore_list().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_ignore_pattern() {
        let config = EngineConfig::new().with_ignore("(unclosed");
        assert!(matches!(
            config.ignore_list(),
            Err(FootprintError::InvalidPattern { .. })
        ));
    }
}
