//! The footprint aggregation root.

use chrono::{DateTime, Utc};
use footprint_co2::{EmissionsModel, OneByte};
use footprint_source::MeasurementSource;
use footprint_types::{EntryKind, FootprintError, ResourceCategory, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    CategoryTotals, EngineConfig, EstimationContext, IgnoreList, ResourceCollection,
    ResourceRecord, SpeedEstimator, SpeedSource,
};

/// Footprint snapshot of one page load.
///
/// Construction reads every navigation and resource entry from the source,
/// drops those matching an ignore pattern, refines the shared speed estimate
/// and sorts the surviving records by emissions, highest first. The record
/// set is frozen afterwards except for removals through [`ignore`] and
/// [`set_ignored`].
///
/// [`ignore`]: Self::ignore
/// [`set_ignored`]: Self::set_ignored
#[derive(Debug)]
pub struct FootprintEngine<M: EmissionsModel = OneByte> {
    records: Vec<ResourceRecord>,
    ignored: IgnoreList,
    speed: SpeedEstimator,
    model: M,
    origin: Option<String>,
    captured_at: DateTime<Utc>,
}

impl FootprintEngine<OneByte> {
    /// Creates a snapshot with the default model and no ambient signals.
    #[must_use]
    pub fn new<S: MeasurementSource + ?Sized>(source: &S) -> Self {
        Self::build(source, IgnoreList::new(), SpeedEstimator::default(), OneByte::default(), None)
    }
}

impl<M: EmissionsModel> FootprintEngine<M> {
    /// Creates a snapshot with the given configuration and emissions model.
    ///
    /// # Errors
    ///
    /// Returns an error if an ignore pattern in `config` fails to compile.
    pub fn with_config<S: MeasurementSource + ?Sized>(
        source: &S,
        config: EngineConfig,
        model: M,
    ) -> Result<Self> {
        let ignored = config.ignore_list()?;
        let speed = SpeedEstimator::new(config.connection_speed);
        Ok(Self::build(source, ignored, speed, model, config.origin))
    }

    fn build<S: MeasurementSource + ?Sized>(
        source: &S,
        ignored: IgnoreList,
        mut speed: SpeedEstimator,
        model: M,
        origin: Option<String>,
    ) -> Self {
        let mut records = Vec::new();
        let mut dropped = 0usize;

        for &kind in EntryKind::ingested() {
            for measurement in source.entries_by_type(kind) {
                if ignored.matches(measurement.name()) {
                    trace!(name = measurement.name(), "skipping ignored entry");
                    dropped += 1;
                    continue;
                }
                speed.observe(&measurement);
                records.push(ResourceRecord::new(measurement));
            }
        }

        let ctx = EstimationContext::new(speed.bytes_per_ms(), &model).with_origin(origin.as_deref());
        records.sort_by(|a, b| b.co2(&ctx).total_cmp(&a.co2(&ctx)));

        debug!(
            records = records.len(),
            ignored = dropped,
            speed = speed.bytes_per_ms(),
            speed_source = ?speed.source(),
            model = model.name(),
            "captured footprint snapshot"
        );

        Self {
            records,
            ignored,
            speed,
            model,
            origin,
            captured_at: Utc::now(),
        }
    }

    /// Adds an ignore pattern and removes every held record it matches.
    pub fn ignore(&mut self, pattern: Regex) {
        let before = self.records.len();
        self.records.retain(|r| !pattern.is_match(r.name()));
        debug!(
            pattern = pattern.as_str(),
            removed = before - self.records.len(),
            "added ignore pattern"
        );
        self.ignored.push(pattern);
    }

    /// Compiles `pattern` and adds it as an ignore pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not a valid regular expression.
    pub fn ignore_str(&mut self, pattern: &str) -> Result<()> {
        let regex = Regex::new(pattern).map_err(|e| FootprintError::invalid_pattern(pattern, e))?;
        self.ignore(regex);
        Ok(())
    }

    /// Replaces all ignore patterns and removes every held record matching
    /// any of them.
    pub fn set_ignored(&mut self, patterns: impl IntoIterator<Item = Regex>) {
        self.ignored = patterns.into_iter().collect();
        let before = self.records.len();
        let ignored = &self.ignored;
        self.records.retain(|r| !ignored.matches(r.name()));
        debug!(
            patterns = self.ignored.len(),
            removed = before - self.records.len(),
            "replaced ignore patterns"
        );
    }

    /// Returns the ignore patterns in insertion order.
    #[must_use]
    pub fn ignored(&self) -> &[Regex] {
        self.ignored.patterns()
    }

    /// Returns the context records are evaluated against.
    #[must_use]
    pub fn context(&self) -> EstimationContext<'_> {
        EstimationContext::new(self.speed.bytes_per_ms(), &self.model)
            .with_origin(self.origin.as_deref())
    }

    /// Returns all surviving records, highest emitters first.
    #[must_use]
    pub fn resources(&self) -> ResourceCollection<'_> {
        ResourceCollection::new(self.records.iter().collect(), self.context())
    }

    /// Returns the surviving records of one category, highest emitters first.
    #[must_use]
    pub fn by_category(&self, category: ResourceCategory) -> ResourceCollection<'_> {
        let records = self
            .records
            .iter()
            .filter(|r| r.category() == category)
            .collect();
        ResourceCollection::new(records, self.context())
    }

    /// Returns the speed estimate in bytes per millisecond, if one exists.
    #[must_use]
    pub fn speed_estimate(&self) -> Option<f64> {
        self.speed.current()
    }

    /// Returns the speed estimator.
    #[must_use]
    pub const fn speed(&self) -> &SpeedEstimator {
        &self.speed
    }

    /// Returns the emissions model.
    #[must_use]
    pub const fn model(&self) -> &M {
        &self.model
    }

    /// Returns the page origin, if configured.
    #[must_use]
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// Returns when the snapshot was taken.
    #[must_use]
    pub const fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    /// Returns totals for every category, in [`ResourceCategory::all`] order.
    #[must_use]
    pub fn breakdown(&self) -> Vec<CategoryTotals> {
        ResourceCategory::all()
            .iter()
            .map(|&category| CategoryTotals::from_collection(category, &self.by_category(category)))
            .collect()
    }

    /// Returns a serializable summary of the snapshot.
    #[must_use]
    pub fn summary(&self) -> FootprintSummary {
        let resources = self.resources();
        FootprintSummary {
            captured_at: self.captured_at,
            model: self.model.name().to_string(),
            speed_estimate: self.speed.current(),
            speed_source: self.speed.source(),
            resources: resources.len(),
            total_bytes: resources.total_bytes(),
            total_duration: resources.total_duration(),
            total_co2: resources.total_co2(),
            categories: self.breakdown(),
        }
    }
}

/// Serializable totals of one footprint snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintSummary {
    /// When the snapshot was taken.
    pub captured_at: DateTime<Utc>,
    /// Emissions model identifier.
    pub model: String,
    /// Speed estimate in bytes per millisecond, if any.
    pub speed_estimate: Option<f64>,
    /// Where the speed estimate came from.
    pub speed_source: SpeedSource,
    /// Number of surviving records.
    pub resources: usize,
    /// Total bytes.
    pub total_bytes: u64,
    /// Total duration in milliseconds.
    pub total_duration: f64,
    /// Total grams of CO2.
    pub total_co2: f64,
    /// Per-category totals.
    pub categories: Vec<CategoryTotals>,
}
