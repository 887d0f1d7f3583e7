//! Human-readable byte sizes.

const KB: u64 = 1024;
const MB: u64 = 1024 * KB;

/// A byte count that displays as `"<n> B"`, `"<n.nn> KB"` or `"<n.nn> MB"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SizeString(pub u64);

impl std::fmt::Display for SizeString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bytes = self.0;
        if bytes < KB {
            write!(f, "{bytes} B")
        } else if bytes < MB {
            write!(f, "{:.2} KB", bytes as f64 / KB as f64)
        } else {
            write!(f, "{:.2} MB", bytes as f64 / MB as f64)
        }
    }
}

/// Formats bytes in human-readable form (e.g., "200 B", "2.93 KB", "5.40 MB").
#[must_use]
pub fn format_size(bytes: u64) -> String {
    SizeString(bytes).to_string()
}
