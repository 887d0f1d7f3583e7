//! Per-byte CO2 emission models for the footprint web page carbon estimator.
//!
//! The estimation engine treats the emissions formula as a black box behind
//! the [`EmissionsModel`] trait. This crate provides that trait and two
//! implementations:
//!
//! - [`OneByte`] - The "1byte" model: data centre and network energy per byte
//!   multiplied by grid carbon intensity
//! - [`Linear`] - A fixed grams-per-byte rate

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod model;
mod onebyte;

pub use model::{EmissionsModel, Linear};
pub use onebyte::{GridIntensity, NetworkEnergy, OneByte};
