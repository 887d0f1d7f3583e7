//! Inputs shared by every record evaluation.

use footprint_co2::EmissionsModel;

/// Values a [`ResourceRecord`](crate::ResourceRecord) needs to derive its
/// byte count, emissions and origin flag.
///
/// Records never store these; the engine hands out a fresh context on each
/// query so every read sees the current speed estimate.
#[derive(Clone, Copy)]
pub struct EstimationContext<'a> {
    speed: f64,
    model: &'a dyn EmissionsModel,
    origin: Option<&'a str>,
}

impl<'a> EstimationContext<'a> {
    /// Creates a context with a speed estimate in bytes per millisecond.
    #[must_use]
    pub const fn new(speed: f64, model: &'a dyn EmissionsModel) -> Self {
        Self {
            speed,
            model,
            origin: None,
        }
    }

    /// Sets the page origin used for external-origin detection.
    #[must_use]
    pub const fn with_origin(mut self, origin: Option<&'a str>) -> Self {
        self.origin = origin;
        self
    }

    /// Returns the speed estimate in bytes per millisecond (zero if unknown).
    #[must_use]
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Returns the emissions model.
    #[must_use]
    pub const fn model(&self) -> &'a dyn EmissionsModel {
        self.model
    }

    /// Returns the page origin, if known.
    #[must_use]
    pub const fn origin(&self) -> Option<&'a str> {
        self.origin
    }
}

impl std::fmt::Debug for EstimationContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EstimationContext")
            .field("speed", &self.speed)
            .field("model", &self.model.name())
            .field("origin", &self.origin)
            .finish()
    }
}
