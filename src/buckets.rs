//! Category grouping for cleaned string records.
//!
//! Each category becomes one sheet (or CSV file) in the emitted report. The
//! category order is configuration, injected here rather than hardcoded, so
//! report variants can reorder or extend it. Records whose category is not in
//! the configured order are returned explicitly instead of being dropped on
//! the floor; the CLI surfaces them as warnings.

use crate::strings::StringRecord;

/// The ordered category list a report is organized around.
#[derive(Debug, Clone)]
pub struct CategoryOrder {
    names: Vec<String>,
}

impl CategoryOrder {
    pub fn new(names: &[String]) -> Self {
        Self {
            names: names.to_vec(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Position of a category in the configured order, if present.
    pub fn position(&self, category: &str) -> Option<usize> {
        self.names.iter().position(|n| n == category)
    }
}

/// Result of partitioning records into category buckets.
#[derive(Debug)]
pub struct GroupedStrings {
    /// One bucket per configured category, in configured order. Buckets may
    /// be empty; empty buckets produce no sheet downstream.
    pub buckets: Vec<(String, Vec<StringRecord>)>,
    /// Records whose category is not in the configured order, in input order.
    /// These never reach the report.
    pub unrecognized: Vec<StringRecord>,
}

impl GroupedStrings {
    /// Buckets that actually hold records, in configured order.
    pub fn populated(&self) -> impl Iterator<Item = &(String, Vec<StringRecord>)> {
        self.buckets.iter().filter(|(_, records)| !records.is_empty())
    }

    pub fn total_categorized(&self) -> usize {
        self.buckets.iter().map(|(_, records)| records.len()).sum()
    }
}

/// Partition records into buckets following the configured category order.
///
/// Relative record order within each bucket matches the input order.
pub fn group_by_category(records: Vec<StringRecord>, order: &CategoryOrder) -> GroupedStrings {
    let mut buckets: Vec<(String, Vec<StringRecord>)> = order
        .names()
        .iter()
        .map(|name| (name.clone(), Vec::new()))
        .collect();
    let mut unrecognized = Vec::new();

    for record in records {
        match order.position(&record.category) {
            Some(index) => buckets[index].1.push(record),
            None => unrecognized.push(record),
        }
    }

    GroupedStrings {
        buckets,
        unrecognized,
    }
}
