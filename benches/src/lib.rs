//! Synthetic page loads for benchmarking the footprint engine.

use footprint_lib::{EntryLog, Measurement};

/// Shape of a generated page load.
#[derive(Debug, Clone, Copy)]
pub struct PageShape {
    /// Number of resource entries after the navigation.
    pub resources: usize,
    /// Every n-th resource is reported without byte counts. Zero disables.
    pub unsized_every: usize,
}

impl PageShape {
    /// A page with `resources` entries, a tenth of them unsized.
    pub const fn new(resources: usize) -> Self {
        Self {
            resources,
            unsized_every: 10,
        }
    }
}

const FILES: &[&str] = &[
    "app.js", "vendor.mjs", "site.css", "theme.scss", "hero.webp", "logo.svg", "clip.mp4",
    "font.woff2", "api/items", "widget.tsx",
];

/// Builds a deterministic entry log with one navigation and the requested
/// resources.
pub fn synthetic_log(shape: PageShape) -> EntryLog {
    let mut log = EntryLog::new();
    log.push(
        Measurement::navigation("https://example.com/")
            .with_duration(250.0)
            .with_sizes(14_000, 52_000, 14_300),
    );

    for i in 0..shape.resources {
        let file = FILES[i % FILES.len()];
        let host = if i % 3 == 0 { "cdn.example.net" } else { "example.com" };
        let name = format!("https://{host}/{i}/{file}");
        let duration = 5.0 + (i % 97) as f64;

        let entry = Measurement::resource(name).with_duration(duration);
        let entry = if shape.unsized_every > 0 && i % shape.unsized_every == 0 {
            entry
        } else {
            let size = 512 + (i as u64 * 7_919) % 400_000;
            entry.with_sizes(size, size * 3, size + 300)
        };
        log.push(entry);
    }

    log
}
