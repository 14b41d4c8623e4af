//! Outcome counting per bucket
//!
//! The label vocabulary is discovered from the data: every distinct
//! non-missing label in the `Full` bucket becomes a column, and every
//! bucket's [`CountRow`] is zero-filled against that same vocabulary.
//! Unexpected labels are counted like any other.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::experiment::{Bucket, Buckets};
use crate::record::{Record, CORRECT, WRONG};

/// Distinct outcome labels of one strategy column, sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelVocabulary {
    labels: Vec<String>,
}

impl LabelVocabulary {
    /// Collect the distinct non-missing labels of `column` across `records`.
    #[must_use]
    pub fn discover(records: &[&Record], column: &str) -> Self {
        let mut labels: Vec<String> = records
            .iter()
            .filter_map(|record| record.outcome(column))
            .map(str::to_string)
            .collect();
        labels.sort_unstable();
        labels.dedup();
        Self { labels }
    }

    /// Labels in sorted order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Check if a label is part of the vocabulary.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.labels.binary_search_by(|l| l.as_str().cmp(label)).is_ok()
    }

    /// Number of distinct labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check if no label was observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Label counts for one bucket, zero-filled against the vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRow {
    counts: BTreeMap<String, u64>,
}

impl CountRow {
    /// Count the labels of `column` in `records`.
    ///
    /// Every vocabulary label gets an entry, zero if absent from `records`.
    /// Records with a missing cell are skipped.
    #[must_use]
    pub fn count(records: &[&Record], column: &str, vocabulary: &LabelVocabulary) -> Self {
        let mut counts: BTreeMap<String, u64> = vocabulary
            .labels()
            .iter()
            .map(|label| (label.clone(), 0))
            .collect();

        for label in records.iter().filter_map(|record| record.outcome(column)) {
            *counts.entry(label.to_string()).or_insert(0) += 1;
        }

        Self { counts }
    }

    /// Count for a label, zero if the label is not in the row.
    #[must_use]
    pub fn get(&self, label: &str) -> u64 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Count of `correct` outcomes.
    #[must_use]
    pub fn correct(&self) -> u64 {
        self.get(CORRECT)
    }

    /// Count of `wrong` outcomes.
    #[must_use]
    pub fn wrong(&self) -> u64 {
        self.get(WRONG)
    }

    /// Sum over every label, including unexpected ones.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Labels of this row, sorted.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// `(label, count)` pairs, sorted by label.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(label, &count)| (label.as_str(), count))
    }
}

/// Count rows for all five buckets, indexed like [`Bucket::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketCounts {
    column: String,
    vocabulary: LabelVocabulary,
    rows: [CountRow; 5],
}

impl BucketCounts {
    /// Strategy column the counts were taken from.
    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Label vocabulary shared by every row.
    #[must_use]
    pub const fn vocabulary(&self) -> &LabelVocabulary {
        &self.vocabulary
    }

    /// Count row of one bucket.
    #[must_use]
    pub fn get(&self, bucket: Bucket) -> &CountRow {
        &self.rows[bucket.index()]
    }

    /// Iterate over `(bucket, row)` in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Bucket, &CountRow)> {
        Bucket::ALL.into_iter().zip(self.rows.iter())
    }
}

/// Count the outcomes of `column` in each of the five buckets.
///
/// The vocabulary is taken from `Full` first, so all rows share the same
/// label set.
#[must_use]
pub fn count_buckets(buckets: &Buckets<'_>, column: &str) -> BucketCounts {
    let vocabulary = LabelVocabulary::discover(buckets.get(Bucket::Full), column);

    let unexpected: Vec<&str> = vocabulary
        .labels()
        .iter()
        .map(String::as_str)
        .filter(|label| *label != CORRECT && *label != WRONG)
        .collect();
    if !unexpected.is_empty() {
        warn!(column, labels = ?unexpected, "Unexpected outcome labels counted separately");
    }

    let rows = Bucket::ALL.map(|bucket| {
        let row = CountRow::count(buckets.get(bucket), column, &vocabulary);
        debug!(
            column,
            bucket = bucket.name(),
            correct = row.correct(),
            wrong = row.wrong(),
            "Bucket counted"
        );
        row
    });

    BucketCounts {
        column: column.to_string(),
        vocabulary,
        rows,
    }
}
