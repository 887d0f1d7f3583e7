//! Estimate the carbon footprint of a web page load from browser timing
//! entries.
//!
//! This is a facade crate that re-exports functionality from the footprint
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use footprint_lib::prelude::*;
//!
//! let log = EntryLog::from(vec![
//!     Measurement::navigation("https://example.com/")
//!         .with_duration(120.0)
//!         .with_transfer_size(18_000),
//!     Measurement::resource("https://example.com/app.js")
//!         .with_duration(40.0)
//!         .with_transfer_size(52_000),
//! ]);
//!
//! let engine = FootprintEngine::new(&log);
//! let scripts = engine.by_category(ResourceCategory::Js);
//! assert_eq!(scripts.total_bytes(), 52_000);
//! assert!(engine.resources().total_co2() > 0.0);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use footprint_types::*;

// Re-export emission models
pub use footprint_co2::{EmissionsModel, GridIntensity, Linear, NetworkEnergy, OneByte};

// Re-export measurement sources
pub use footprint_source::{EntryLog, MeasurementSource};

// Re-export the engine
#[cfg(feature = "engine")]
pub use footprint_engine::{
    CategoryTotals, ConnectionSpeed, EngineConfig, EstimationContext, FootprintEngine,
    FootprintSummary, IgnoreList, ResourceCollection, ResourceRecord, SpeedEstimator, SpeedSource,
};

/// Prelude module for convenient imports.
///
/// ```
/// use footprint_lib::prelude::*;
/// ```
pub mod prelude {
    pub use footprint_types::{
        EntryKind, FootprintError, Measurement, ResourceCategory, Result, SizeString,
    };

    pub use footprint_co2::{EmissionsModel, OneByte};

    pub use footprint_source::{EntryLog, MeasurementSource};

    #[cfg(feature = "engine")]
    pub use footprint_engine::{
        ConnectionSpeed, EngineConfig, FootprintEngine, ResourceCollection, ResourceRecord,
    };
}
