//! Aggregate views over resource records.

use footprint_types::ResourceCategory;
use serde::{Deserialize, Serialize};

use crate::{EstimationContext, ResourceRecord};

/// Ordered, read-only view over a set of records.
///
/// Totals are plain sums evaluated against the view's context.
#[derive(Debug, Clone)]
pub struct ResourceCollection<'a> {
    records: Vec<&'a ResourceRecord>,
    ctx: EstimationContext<'a>,
}

impl<'a> ResourceCollection<'a> {
    /// Creates a view over `records`.
    #[must_use]
    pub const fn new(records: Vec<&'a ResourceRecord>, ctx: EstimationContext<'a>) -> Self {
        Self { records, ctx }
    }

    /// Returns the estimation context of this view.
    #[must_use]
    pub const fn context(&self) -> &EstimationContext<'a> {
        &self.ctx
    }

    /// Returns the records in order.
    #[must_use]
    pub fn records(&self) -> &[&'a ResourceRecord] {
        &self.records
    }

    /// Returns an iterator over the records.
    pub fn iter(&self) -> impl Iterator<Item = &'a ResourceRecord> + '_ {
        self.records.iter().copied()
    }

    /// Returns the record at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a ResourceRecord> {
        self.records.get(index).copied()
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the view is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the sum of all record byte counts, saturating at `u64::MAX`.
    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        self.iter()
            .map(|r| r.bytes(&self.ctx))
            .fold(0, u64::saturating_add)
    }

    /// Returns the sum of all record durations in milliseconds.
    #[must_use]
    pub fn total_duration(&self) -> f64 {
        self.iter().map(ResourceRecord::duration).sum()
    }

    /// Returns the sum of all record emissions in grams of CO2.
    #[must_use]
    pub fn total_co2(&self) -> f64 {
        self.iter().map(|r| r.co2(&self.ctx)).sum()
    }

    /// Returns the records of one category, keeping their order.
    #[must_use]
    pub fn by_category(&self, category: ResourceCategory) -> Self {
        let records = self
            .iter()
            .filter(|r| r.category() == category)
            .collect();
        Self::new(records, self.ctx)
    }
}

impl<'a, 'b> IntoIterator for &'b ResourceCollection<'a> {
    type Item = &'a ResourceRecord;
    type IntoIter = std::iter::Copied<std::slice::Iter<'b, &'a ResourceRecord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter().copied()
    }
}

/// Totals for one resource category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotals {
    /// The category.
    pub category: ResourceCategory,
    /// Number of records.
    pub count: usize,
    /// Total bytes.
    pub bytes: u64,
    /// Total duration in milliseconds.
    pub duration: f64,
    /// Total grams of CO2.
    pub co2: f64,
}

impl CategoryTotals {
    /// Sums a collection under the given category label.
    #[must_use]
    pub fn from_collection(category: ResourceCategory, collection: &ResourceCollection<'_>) -> Self {
        Self {
            category,
            count: collection.len(),
            bytes: collection.total_bytes(),
            duration: collection.total_duration(),
            co2: collection.total_co2(),
        }
    }
}
