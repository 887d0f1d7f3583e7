//! Resource estimation and aggregation for the footprint web page carbon
//! estimator.
//!
//! [`FootprintEngine`] snapshots a [`MeasurementSource`] once, wraps every
//! surviving entry in a [`ResourceRecord`] and answers aggregate queries
//! through [`ResourceCollection`] views.
//!
//! Byte counts of entries the browser reported without sizes are estimated
//! from a shared [`SpeedEstimator`]. Records read the estimate through an
//! [`EstimationContext`] on every query, so a slower transfer observed late
//! still resizes resources ingested earlier.
//!
//! [`MeasurementSource`]: footprint_source::MeasurementSource

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod collection;
mod config;
mod context;
mod engine;
mod ignore;
mod record;
mod speed;

pub use collection::{CategoryTotals, ResourceCollection};
pub use config::{ConnectionSpeed, EngineConfig};
pub use context::EstimationContext;
pub use engine::{FootprintEngine, FootprintSummary};
pub use ignore::IgnoreList;
pub use record::ResourceRecord;
pub use speed::{SpeedEstimator, SpeedSource};
