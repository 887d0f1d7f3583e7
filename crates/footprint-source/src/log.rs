//! In-memory entry log.

use std::io::Read;

use footprint_types::{EntryKind, Measurement, Result};
use serde::{Deserialize, Serialize};

use crate::MeasurementSource;

/// An ordered, in-memory list of timing entries.
///
/// Serializes as a plain JSON array, the shape produced by
/// `JSON.stringify(performance.getEntries())`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryLog {
    entries: Vec<Measurement>,
}

impl EntryLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parses a log from a JSON array of performance entries.
    ///
    /// Entry types other than `navigation` and `resource` are kept as
    /// [`EntryKind::Other`] and never returned for the ingested kinds.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a log from a JSON array of performance entries.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the JSON is invalid.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Appends an entry.
    pub fn push(&mut self, measurement: Measurement) {
        self.entries.push(measurement);
    }

    /// Returns all entries in recording order.
    #[must_use]
    pub fn entries(&self) -> &[Measurement] {
        &self.entries
    }

    /// Returns an iterator over all entries.
    pub fn iter(&self) -> impl Iterator<Item = &Measurement> {
        self.entries.iter()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MeasurementSource for EntryLog {
    fn entries_by_type(&self, kind: EntryKind) -> Vec<Measurement> {
        self.entries.entries_by_type(kind)
    }
}

impl FromIterator<Measurement> for EntryLog {
    fn from_iter<I: IntoIterator<Item = Measurement>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<Measurement> for EntryLog {
    fn extend<I: IntoIterator<Item = Measurement>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl From<Vec<Measurement>> for EntryLog {
    fn from(entries: Vec<Measurement>) -> Self {
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use footprint_types::FootprintError;

    const EXPORT: &str = r#"[
        {"name": "https://example.com/", "entryType": "navigation", "duration": 100,
         "encodedBodySize": 150, "decodedBodySize": 120, "transferSize": 200},
        {"name": "first-contentful-paint", "entryType": "paint", "startTime": 80},
        {"name": "https://example.com/app.js", "entryType": "resource", "duration": 20,
         "transferSize": 4096, "initiatorType": "script"},
        {"name": "https://cdn.example.net/hero.webp", "entryType": "resource", "duration": 35}
    ]"#;

    #[test]
    fn test_from_json() {
        let log = EntryLog::from_json(EXPORT).unwrap();
        assert_eq!(log.len(), 4);
        assert_eq!(log.entries_by_type(EntryKind::Navigation).len(), 1);
        assert_eq!(log.entries_by_type(EntryKind::Resource).len(), 2);
        assert_eq!(log.entries_by_type(EntryKind::Other).len(), 1);
    }

    #[test]
    fn test_from_reader() {
        let log = EntryLog::from_reader(EXPORT.as_bytes()).unwrap();
        let resources = log.entries_by_type(EntryKind::Resource);
        assert_eq!(resources[0].name(), "https://example.com/app.js");
        assert_eq!(resources[1].name(), "https://cdn.example.net/hero.webp");
    }

    #[test]
    fn test_invalid_json() {
        let result = EntryLog::from_json("{\"name\": 1}");
        assert!(matches!(result, Err(FootprintError::Json(_))));
    }

    #[test]
    fn test_collect_and_extend() {
        let mut log: EntryLog = vec![Measurement::navigation("https://example.com")]
            .into_iter()
            .collect();
        log.extend([Measurement::resource("https://example.com/a.css")]);
        log.push(Measurement::resource("https://example.com/b.png"));

        assert_eq!(log.len(), 3);
        assert!(!log.is_empty());
        assert_eq!(log.iter().filter(|m| m.is_navigation()).count(), 1);
    }

    #[test]
    fn test_round_trips_as_array() {
        let log = EntryLog::from(vec![Measurement::resource("https://example.com/a.js")]);
        let json = serde_json::to_string(&log).unwrap();
        assert!(json.starts_with('['));
    }
}
