//! Per-resource derived values.

use std::cell::Cell;

use footprint_types::{EntryKind, Measurement, ResourceCategory, SizeString};

use crate::EstimationContext;

/// Derived, queryable view of one measurement.
///
/// Byte count and emissions depend on the shared speed estimate, so they are
/// recomputed from an [`EstimationContext`] on every call.
#[derive(Debug, Clone)]
pub struct ResourceRecord {
    measurement: Measurement,
    category: ResourceCategory,
    estimated: Cell<bool>,
}

impl ResourceRecord {
    /// Wraps a measurement.
    #[must_use]
    pub fn new(measurement: Measurement) -> Self {
        let category = ResourceCategory::classify(measurement.name(), measurement.entry_type());
        Self {
            measurement,
            category,
            estimated: Cell::new(false),
        }
    }

    /// Returns the underlying measurement.
    #[must_use]
    pub const fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    /// Returns the resource URL.
    #[must_use]
    pub fn name(&self) -> &str {
        self.measurement.name()
    }

    /// Returns the load duration in milliseconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.measurement.duration()
    }

    /// Returns the entry kind.
    #[must_use]
    pub const fn entry_kind(&self) -> EntryKind {
        self.measurement.entry_type()
    }

    /// Returns the resource category.
    #[must_use]
    pub const fn category(&self) -> ResourceCategory {
        self.category
    }

    /// Returns the transferred byte count.
    ///
    /// This is the largest of the encoded, decoded and transfer sizes. When
    /// the browser reported none of them, the size is estimated as
    /// `round(speed * duration)` and the record is marked as estimated.
    #[must_use]
    pub fn bytes(&self, ctx: &EstimationContext<'_>) -> u64 {
        let largest = self.measurement.largest_size();
        if largest > 0 {
            return largest;
        }

        let duration = self.duration();
        if ctx.speed() > 0.0 && duration > 0.0 {
            self.estimated.set(true);
            return (ctx.speed() * duration).round() as u64;
        }

        0
    }

    /// Returns true once [`bytes`](Self::bytes) has fallen back to the speed
    /// estimate for this record.
    #[must_use]
    pub fn is_estimated(&self) -> bool {
        self.estimated.get()
    }

    /// Returns the byte count in human-readable form.
    #[must_use]
    pub fn size_string(&self, ctx: &EstimationContext<'_>) -> String {
        SizeString(self.bytes(ctx)).to_string()
    }

    /// Returns whether the resource is served from another origin.
    ///
    /// `None` when the context carries no page origin.
    #[must_use]
    pub fn is_external(&self, ctx: &EstimationContext<'_>) -> Option<bool> {
        ctx.origin().map(|origin| !self.name().starts_with(origin))
    }

    /// Returns the estimated grams of CO2 for transferring this resource.
    ///
    /// Green hosting is treated as unknown.
    #[must_use]
    pub fn co2(&self, ctx: &EstimationContext<'_>) -> f64 {
        ctx.model().estimate(self.bytes(ctx), true)
    }
}
