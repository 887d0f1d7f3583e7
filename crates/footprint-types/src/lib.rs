//! Core types for the footprint web page carbon estimator.
//!
//! This crate provides the fundamental data structures used throughout footprint:
//!
//! - [`Measurement`] - A browser-reported timing entry for one loaded resource
//! - [`EntryKind`] - The performance entry type (navigation, resource, ...)
//! - [`ResourceCategory`] - File category derived from a resource name
//! - [`SizeString`] - Human-readable byte size formatting

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod category;
mod error;
mod measurement;
mod size;

pub use category::{CategoryParseError, ResourceCategory, extension_of};
pub use error::{FootprintError, Result};
pub use measurement::{EntryKind, Measurement};
pub use size::{SizeString, format_size};
