//! Measurement sources for the footprint web page carbon estimator.
//!
//! The engine consumes timing entries through the [`MeasurementSource`]
//! trait, queried once per entry kind. This crate provides the trait and
//! [`EntryLog`], an in-memory source that loads a JSON export of the
//! browser's `performance.getEntries()`.

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod log;
mod source;

pub use log::EntryLog;
pub use source::MeasurementSource;
