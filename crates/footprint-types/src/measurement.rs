//! Browser resource-timing measurements.

use serde::{Deserialize, Serialize};

/// Performance entry type of a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// The document navigation itself.
    Navigation,
    /// A sub-resource fetched by the page.
    Resource,
    /// Any other entry type (paint, mark, measure, ...).
    #[serde(other)]
    Other,
}

impl EntryKind {
    /// Returns the entry type as reported by the browser.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Navigation => "navigation",
            Self::Resource => "resource",
            Self::Other => "other",
        }
    }

    /// Returns the entry kinds an engine ingests, in query order.
    #[must_use]
    pub const fn ingested() -> &'static [Self] {
        &[Self::Resource, Self::Navigation]
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for EntryKind {
    fn from(s: &str) -> Self {
        match s {
            "navigation" => Self::Navigation,
            "resource" => Self::Resource,
            _ => Self::Other,
        }
    }
}

/// A single timing entry for one loaded resource or the page navigation.
///
/// Field names follow the browser's `PerformanceResourceTiming` JSON
/// representation, so an export of `performance.getEntries()` deserializes
/// directly. Sizes the browser withholds (cross-origin responses without
/// `Timing-Allow-Origin`, cache hits) are zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    /// Resource URL, or the document URL for navigations.
    name: String,
    /// Entry type.
    entry_type: EntryKind,
    /// Start time relative to the navigation start, in milliseconds.
    #[serde(default)]
    start_time: f64,
    /// Load duration in milliseconds.
    #[serde(default)]
    duration: f64,
    /// Compressed payload body size in bytes.
    #[serde(default)]
    encoded_body_size: u64,
    /// Decoded payload body size in bytes.
    #[serde(default)]
    decoded_body_size: u64,
    /// Bytes on the wire including headers.
    #[serde(default)]
    transfer_size: u64,
    /// What initiated the fetch (script, link, img, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    initiator_type: Option<String>,
}

impl Measurement {
    /// Creates a measurement with zero duration and sizes.
    #[must_use]
    pub fn new(name: impl Into<String>, entry_type: EntryKind) -> Self {
        Self {
            name: name.into(),
            entry_type,
            start_time: 0.0,
            duration: 0.0,
            encoded_body_size: 0,
            decoded_body_size: 0,
            transfer_size: 0,
            initiator_type: None,
        }
    }

    /// Creates a navigation measurement.
    #[must_use]
    pub fn navigation(name: impl Into<String>) -> Self {
        Self::new(name, EntryKind::Navigation)
    }

    /// Creates a resource measurement.
    #[must_use]
    pub fn resource(name: impl Into<String>) -> Self {
        Self::new(name, EntryKind::Resource)
    }

    /// Sets the load duration in milliseconds.
    #[must_use]
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the start time in milliseconds.
    #[must_use]
    pub fn with_start_time(mut self, start_time: f64) -> Self {
        self.start_time = start_time;
        self
    }

    /// Sets the encoded, decoded and transfer sizes.
    #[must_use]
    pub fn with_sizes(mut self, encoded: u64, decoded: u64, transfer: u64) -> Self {
        self.encoded_body_size = encoded;
        self.decoded_body_size = decoded;
        self.transfer_size = transfer;
        self
    }

    /// Sets the transfer size only.
    #[must_use]
    pub fn with_transfer_size(mut self, transfer: u64) -> Self {
        self.transfer_size = transfer;
        self
    }

    /// Sets the initiator type.
    #[must_use]
    pub fn with_initiator_type(mut self, initiator: impl Into<String>) -> Self {
        self.initiator_type = Some(initiator.into());
        self
    }

    /// Returns the resource URL.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the entry type.
    #[must_use]
    pub const fn entry_type(&self) -> EntryKind {
        self.entry_type
    }

    /// Returns the start time in milliseconds.
    #[must_use]
    pub const fn start_time(&self) -> f64 {
        self.start_time
    }

    /// Returns the load duration in milliseconds.
    ///
    /// Negative and non-finite durations read as zero.
    #[must_use]
    pub fn duration(&self) -> f64 {
        if self.duration.is_finite() && self.duration > 0.0 {
            self.duration
        } else {
            0.0
        }
    }

    /// Returns the compressed body size.
    #[must_use]
    pub const fn encoded_body_size(&self) -> u64 {
        self.encoded_body_size
    }

    /// Returns the decoded body size.
    #[must_use]
    pub const fn decoded_body_size(&self) -> u64 {
        self.decoded_body_size
    }

    /// Returns the transfer size.
    #[must_use]
    pub const fn transfer_size(&self) -> u64 {
        self.transfer_size
    }

    /// Returns the initiator type, if reported.
    #[must_use]
    pub fn initiator_type(&self) -> Option<&str> {
        self.initiator_type.as_deref()
    }

    /// Returns the largest of the three reported sizes.
    #[must_use]
    pub fn largest_size(&self) -> u64 {
        self.encoded_body_size
            .max(self.decoded_body_size)
            .max(self.transfer_size)
    }

    /// Returns true if this is a navigation entry.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(self.entry_type, EntryKind::Navigation)
    }
}
