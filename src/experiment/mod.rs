//! Bucket classification
//!
//! Partitions a [`RecordTable`] into the five fixed experimental conditions:
//!
//! ```text
//! Full  ── every record
//!  ├── exp_1  context diff|diff|diff, overlap true|true|true
//!  ├── exp_2  context diff|diff|diff, overlap false|false|false, related words
//!  ├── exp_3  context diff|diff|diff, overlap mixed
//!  └── exp_4  context same|same|same or diff|same|diff, overlap false|false|false
//! ```
//!
//! All experiments additionally require `POS == same|same|same`. Bucket
//! membership is computed independently per predicate, so nothing here
//! assumes the experiments are disjoint.
//!
//! ## Usage
//!
//! ```rust
//! use sense_eval::experiment::{classify, Bucket};
//! use sense_eval::record::Record;
//! use sense_eval::storage::RecordTable;
//!
//! let record = Record::builder("bank")
//!     .pos("same|same|same")
//!     .context("diff|diff|diff")
//!     .overlap("true|true|true")
//!     .build();
//! let table = RecordTable::new(vec![record], vec![]);
//!
//! let buckets = classify(&table);
//! assert_eq!(buckets.get(Bucket::Full).len(), 1);
//! assert_eq!(buckets.get(Bucket::Exp1).len(), 1);
//! assert!(buckets.get(Bucket::Exp2).is_empty());
//! ```

mod predicate;

pub use predicate::{is_exp1, is_exp2, is_exp3, is_exp4, is_related_word, EXP3_EXCLUDED_OVERLAPS};

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::record::Record;
use crate::storage::RecordTable;

/// Named view over the record table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Bucket {
    /// Every record, unfiltered.
    #[serde(rename = "Full")]
    Full,
    /// Same target word, different contexts.
    #[serde(rename = "exp_1")]
    Exp1,
    /// Related target words, different contexts.
    #[serde(rename = "exp_2")]
    Exp2,
    /// Mixed overlap, different contexts.
    #[serde(rename = "exp_3")]
    Exp3,
    /// Different target words, shared contexts.
    #[serde(rename = "exp_4")]
    Exp4,
}

impl Bucket {
    /// All buckets in report order.
    pub const ALL: [Self; 5] = [Self::Full, Self::Exp1, Self::Exp2, Self::Exp3, Self::Exp4];

    /// The four experiment buckets (everything but `Full`).
    pub const EXPERIMENTS: [Self; 4] = [Self::Exp1, Self::Exp2, Self::Exp3, Self::Exp4];

    /// Report name (`Full`, `exp_1` .. `exp_4`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Full => "Full",
            Self::Exp1 => "exp_1",
            Self::Exp2 => "exp_2",
            Self::Exp3 => "exp_3",
            Self::Exp4 => "exp_4",
        }
    }

    /// Position in [`Bucket::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Full => 0,
            Self::Exp1 => 1,
            Self::Exp2 => 2,
            Self::Exp3 => 3,
            Self::Exp4 => 4,
        }
    }

    /// Check whether a record belongs to this bucket.
    #[must_use]
    pub fn contains(self, record: &Record) -> bool {
        match self {
            Self::Full => true,
            Self::Exp1 => is_exp1(record),
            Self::Exp2 => is_exp2(record),
            Self::Exp3 => is_exp3(record),
            Self::Exp4 => is_exp4(record),
        }
    }

    /// Check if this is one of the four experiment buckets.
    #[must_use]
    pub const fn is_experiment(self) -> bool {
        !matches!(self, Self::Full)
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The five bucket views of one record table.
///
/// Each bucket borrows its records from the table, in table order.
#[derive(Debug, Clone)]
pub struct Buckets<'a> {
    members: [Vec<&'a Record>; 5],
}

impl<'a> Buckets<'a> {
    /// Records in a bucket.
    #[must_use]
    pub fn get(&self, bucket: Bucket) -> &[&'a Record] {
        &self.members[bucket.index()]
    }

    /// Iterate over `(bucket, records)` in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Bucket, &[&'a Record])> + '_ {
        Bucket::ALL
            .into_iter()
            .map(move |bucket| (bucket, self.get(bucket)))
    }

    /// Experiment buckets (excluding `Full`) a record was assigned to.
    #[must_use]
    pub fn memberships(&self, record: &Record) -> Vec<Bucket> {
        Bucket::EXPERIMENTS
            .into_iter()
            .filter(|&bucket| self.get(bucket).iter().any(|r| std::ptr::eq(*r, record)))
            .collect()
    }
}

/// Classify every record of a table into the five buckets.
#[must_use]
pub fn classify(table: &RecordTable) -> Buckets<'_> {
    classify_records(table.records())
}

/// Classify a slice of records into the five buckets.
#[must_use]
pub fn classify_records(records: &[Record]) -> Buckets<'_> {
    let members = Bucket::ALL.map(|bucket| {
        records
            .iter()
            .filter(|record| bucket.contains(record))
            .collect::<Vec<_>>()
    });

    for bucket in Bucket::ALL {
        debug!(bucket = bucket.name(), size = members[bucket.index()].len(), "Bucket classified");
    }

    Buckets { members }
}
