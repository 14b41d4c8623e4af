//! Record table storage (tab-separated input)
//!
//! **Read-Only Design**:
//! - The table is loaded once per invocation and never mutated
//! - Buckets and counts borrow from it; nothing is copied per strategy
//!
//! Loading drops every column whose cells are all empty (a trailing tab in
//! the header produces one) and then checks that all required columns are
//! present. Validation happens before any record is built, so a bad header
//! fails fast with the full list of missing names.

use crate::record::Record;
use crate::{Error, Result};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Target word column
pub const TARGET: &str = "Target";
/// POS pattern column
pub const POS: &str = "POS";
/// Context pattern column
pub const CONTEXT: &str = "Context";
/// Overlap pattern column
pub const OVERLAP: &str = "Overlap";
/// First sentence column (with `<b>` markup)
pub const SENT1: &str = "Sent1";

/// Columns every input table must carry, independent of the strategy columns
pub const REQUIRED_COLUMNS: [&str; 5] = [TARGET, POS, CONTEXT, OVERLAP, SENT1];

/// Immutable in-memory table of records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordTable {
    records: Vec<Record>,
    strategy_columns: Vec<String>,
}

impl RecordTable {
    /// Create a table from already-built records
    ///
    /// Useful for testing and benchmarking
    #[must_use]
    pub fn new(records: Vec<Record>, strategy_columns: Vec<String>) -> Self {
        Self {
            records,
            strategy_columns,
        }
    }

    /// Load a tab-separated file
    ///
    /// # Errors
    /// Returns error if the file cannot be read, has no header row, or lacks
    /// a required or requested strategy column
    pub fn load_tsv<P: AsRef<Path>, S: AsRef<str>>(
        path: P,
        strategy_columns: &[S],
    ) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        info!(path = %path.as_ref().display(), "Loading record table");
        Self::from_reader(file, strategy_columns)
    }

    /// Load tab-separated data from any reader
    ///
    /// The first row is the header. Empty cells are missing values.
    ///
    /// # Errors
    /// Returns [`Error::EmptyInput`] without a header row, and
    /// [`Error::MissingColumns`] when required columns are absent after
    /// empty columns are dropped
    pub fn from_reader<R: Read, S: AsRef<str>>(reader: R, strategy_columns: &[S]) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut rows = Vec::new();
        for row in csv_reader.records() {
            rows.push(row?);
        }

        if rows.is_empty() {
            return Err(Error::EmptyInput);
        }
        let header = rows.remove(0);

        let width = rows
            .iter()
            .map(csv::StringRecord::len)
            .chain(std::iter::once(header.len()))
            .max()
            .unwrap_or(0);

        // A column survives if any data row has a value in it. With no data
        // rows there is nothing to judge, so every named column is kept.
        let kept: Vec<usize> = (0..width)
            .filter(|&idx| {
                rows.is_empty() || rows.iter().any(|row| cell(row, idx).is_some())
            })
            .collect();

        let dropped = width - kept.len();
        if dropped > 0 {
            debug!(dropped, "Dropped empty columns");
        }

        let position = |name: &str| {
            kept.iter()
                .copied()
                .find(|&idx| header.get(idx) == Some(name))
        };

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .chain(strategy_columns.iter().map(AsRef::as_ref))
            .filter(|name| position(name).is_none())
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(Error::MissingColumns { missing });
        }

        let strategy: Vec<(String, usize)> = strategy_columns
            .iter()
            .map(|name| {
                let name = name.as_ref();
                (name.to_string(), position(name).unwrap_or_default())
            })
            .collect();
        let [target, pos, context, overlap, sent1] =
            REQUIRED_COLUMNS.map(|name| position(name).unwrap_or_default());

        let records: Vec<Record> = rows
            .iter()
            .map(|row| {
                let text = |idx| cell(row, idx).unwrap_or_default();
                let mut builder = Record::builder(text(target))
                    .pos(text(pos))
                    .context(text(context))
                    .overlap(text(overlap))
                    .sentence1(text(sent1));
                for (name, idx) in &strategy {
                    if let Some(label) = cell(row, *idx) {
                        builder = builder.outcome(name.as_str(), label);
                    }
                }
                builder.build()
            })
            .collect();

        info!(
            rows = records.len(),
            columns = kept.len(),
            dropped,
            "Record table loaded"
        );

        Ok(Self {
            records,
            strategy_columns: strategy.into_iter().map(|(name, _)| name).collect(),
        })
    }

    /// All records, in input order
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Strategy columns loaded alongside the records
    #[must_use]
    pub fn strategy_columns(&self) -> &[String] {
        &self.strategy_columns
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the table has no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn cell(row: &csv::StringRecord, idx: usize) -> Option<&str> {
    row.get(idx).filter(|value| !value.is_empty())
}
