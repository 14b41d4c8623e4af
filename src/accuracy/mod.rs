//! Accuracy statistics
//!
//! Turns the five [`CountRow`]s of a strategy column into accuracy rows:
//!
//! - `total_instances = correct + wrong`
//! - `accuracy = correct / total_instances`, undefined when the bucket is empty
//! - macro average: unweighted mean of the four experiment accuracies
//! - micro average: pooled `correct / total_instances` over the four experiments
//!
//! Undefined values are `None`. They propagate: a macro average over any
//! undefined experiment accuracy is itself undefined, never zero.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::aggregate::{BucketCounts, CountRow};
use crate::experiment::Bucket;

/// `correct / total`, or `None` when `total == 0`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ratio(correct: u64, total: u64) -> Option<f64> {
    (total > 0).then(|| correct as f64 / total as f64)
}

/// Unweighted mean of per-bucket accuracies.
///
/// Returns `None` if `accuracies` is empty or any accuracy is undefined.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn macro_average(accuracies: &[Option<f64>]) -> Option<f64> {
    if accuracies.is_empty() {
        return None;
    }
    let sum = accuracies.iter().copied().sum::<Option<f64>>()?;
    Some(sum / accuracies.len() as f64)
}

/// Instance-weighted accuracy pooled across rows.
///
/// Returns `None` if the rows hold no `correct`/`wrong` instances at all.
#[must_use]
pub fn micro_average<'a>(rows: impl IntoIterator<Item = &'a AccuracyRow>) -> Option<f64> {
    let (correct, total) = rows
        .into_iter()
        .fold((0, 0), |(c, t), row| (c + row.correct, t + row.total_instances));
    ratio(correct, total)
}

/// Averages across the four experiment buckets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Averages {
    /// Unweighted mean of the experiment accuracies.
    pub macro_average: Option<f64>,
    /// Pooled accuracy over the experiment buckets.
    pub micro_average: Option<f64>,
}

/// Accuracy statistics of one bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyRow {
    /// Bucket the row describes.
    pub bucket: Bucket,
    /// Number of `correct` outcomes.
    pub correct: u64,
    /// Number of `wrong` outcomes.
    pub wrong: u64,
    /// `correct + wrong`.
    pub total_instances: u64,
    /// `correct / total_instances`, `None` for an empty bucket.
    pub accuracy: Option<f64>,
    /// Experiment averages, set on the `Full` row only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub averages: Option<Averages>,
}

impl AccuracyRow {
    /// Build a row from a bucket's counts.
    #[must_use]
    pub fn from_counts(bucket: Bucket, counts: &CountRow) -> Self {
        let correct = counts.correct();
        let wrong = counts.wrong();
        let total_instances = correct + wrong;
        Self {
            bucket,
            correct,
            wrong,
            total_instances,
            accuracy: ratio(correct, total_instances),
            averages: None,
        }
    }
}

/// Accuracy rows for `Full` and `exp_1` .. `exp_4` of one strategy column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyTable {
    rows: Vec<AccuracyRow>,
}

impl AccuracyTable {
    /// Compute the table from the five bucket count rows.
    #[must_use]
    pub fn from_counts(counts: &BucketCounts) -> Self {
        let mut rows: Vec<AccuracyRow> = counts
            .iter()
            .map(|(bucket, row)| AccuracyRow::from_counts(bucket, row))
            .collect();

        for row in &rows {
            if row.accuracy.is_none() {
                warn!(
                    column = counts.column(),
                    bucket = row.bucket.name(),
                    "Empty bucket, accuracy undefined"
                );
            }
        }

        let experiments = &rows[1..];
        let accuracies: Vec<Option<f64>> = experiments.iter().map(|row| row.accuracy).collect();
        let averages = Averages {
            macro_average: macro_average(&accuracies),
            micro_average: micro_average(experiments),
        };
        rows[Bucket::Full.index()].averages = Some(averages);

        Self { rows }
    }

    /// Row of one bucket.
    #[must_use]
    pub fn row(&self, bucket: Bucket) -> &AccuracyRow {
        &self.rows[bucket.index()]
    }

    /// All rows in report order.
    #[must_use]
    pub fn rows(&self) -> &[AccuracyRow] {
        &self.rows
    }

    /// Experiment averages, as attached to the `Full` row.
    #[must_use]
    pub fn averages(&self) -> Averages {
        self.row(Bucket::Full).averages.unwrap_or(Averages {
            macro_average: None,
            micro_average: None,
        })
    }

    /// Unweighted mean of the experiment accuracies.
    #[must_use]
    pub fn macro_average(&self) -> Option<f64> {
        self.averages().macro_average
    }

    /// Pooled accuracy over the experiment buckets.
    #[must_use]
    pub fn micro_average(&self) -> Option<f64> {
        self.averages().micro_average
    }
}
