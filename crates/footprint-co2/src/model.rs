//! The emissions model abstraction.

/// Converts a transferred byte count into an estimated mass of CO2 in grams.
///
/// Implementations must be monotonically non-decreasing in `bytes` for a
/// fixed `green_hosting_unknown` flag.
pub trait EmissionsModel {
    /// Estimates grams of CO2 for transferring `bytes`.
    ///
    /// `green_hosting_unknown` is true when nothing is known about whether
    /// the serving host runs on renewable energy.
    fn estimate(&self, bytes: u64, green_hosting_unknown: bool) -> f64;

    /// Returns a short identifier for the model.
    fn name(&self) -> &str;
}

impl<M: EmissionsModel + ?Sized> EmissionsModel for &M {
    fn estimate(&self, bytes: u64, green_hosting_unknown: bool) -> f64 {
        (**self).estimate(bytes, green_hosting_unknown)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<M: EmissionsModel + ?Sized> EmissionsModel for Box<M> {
    fn estimate(&self, bytes: u64, green_hosting_unknown: bool) -> f64 {
        (**self).estimate(bytes, green_hosting_unknown)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Emissions model with a fixed rate of grams per byte.
///
/// Ignores the hosting flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linear {
    grams_per_byte: f64,
}

impl Linear {
    /// Creates a model emitting `grams_per_byte` for every byte.
    #[must_use]
    pub const fn new(grams_per_byte: f64) -> Self {
        Self { grams_per_byte }
    }

    /// Returns the rate in grams per byte.
    #[must_use]
    pub const fn grams_per_byte(&self) -> f64 {
        self.grams_per_byte
    }
}

impl EmissionsModel for Linear {
    fn estimate(&self, bytes: u64, _green_hosting_unknown: bool) -> f64 {
        bytes as f64 * self.grams_per_byte
    }

    fn name(&self) -> &str {
        "linear"
    }
}
