//! The measurement source abstraction.

use footprint_types::{EntryKind, Measurement};

/// Provider of timing entries for one page load.
pub trait MeasurementSource {
    /// Returns all entries of the given kind, in the order they were recorded.
    fn entries_by_type(&self, kind: EntryKind) -> Vec<Measurement>;
}

impl<S: MeasurementSource + ?Sized> MeasurementSource for &S {
    fn entries_by_type(&self, kind: EntryKind) -> Vec<Measurement> {
        (**self).entries_by_type(kind)
    }
}

impl MeasurementSource for [Measurement] {
    fn entries_by_type(&self, kind: EntryKind) -> Vec<Measurement> {
        self.iter()
            .filter(|m| m.entry_type() == kind)
            .cloned()
            .collect()
    }
}

impl MeasurementSource for Vec<Measurement> {
    fn entries_by_type(&self, kind: EntryKind) -> Vec<Measurement> {
        self.as_slice().entries_by_type(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_filters_by_kind() {
        let entries = vec![
            Measurement::resource("https://example.com/a.js"),
            Measurement::navigation("https://example.com"),
            Measurement::resource("https://example.com/b.css"),
        ];

        let resources = entries.entries_by_type(EntryKind::Resource);
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].name(), "https://example.com/a.js");
        assert_eq!(resources[1].name(), "https://example.com/b.css");

        let navigations = entries.entries_by_type(EntryKind::Navigation);
        assert_eq!(navigations.len(), 1);
    }
}
