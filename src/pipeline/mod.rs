//! Evaluation pipeline
//!
//! ```text
//! RecordTable ─► classify ─► count_buckets ─► AccuracyTable ─► StrategyReport
//! ```
//!
//! The chain runs once per strategy column. Columns share nothing but the
//! read-only record table, so each report depends only on its own column.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::accuracy::AccuracyTable;
use crate::aggregate::{count_buckets, BucketCounts};
use crate::config::{EvalConfig, OutputFormat};
use crate::experiment::{classify, Bucket};
use crate::report;
use crate::storage::RecordTable;
use crate::Result;

/// Counts and accuracy statistics for one strategy column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyReport {
    column: String,
    counts: BucketCounts,
    accuracy: AccuracyTable,
}

impl StrategyReport {
    /// Strategy column name.
    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Per-bucket label counts.
    #[must_use]
    pub const fn counts(&self) -> &BucketCounts {
        &self.counts
    }

    /// Per-bucket accuracy rows and experiment averages.
    #[must_use]
    pub const fn accuracy(&self) -> &AccuracyTable {
        &self.accuracy
    }
}

/// Run the pipeline for a single strategy column.
#[must_use]
pub fn evaluate_column(table: &RecordTable, column: &str) -> StrategyReport {
    let buckets = classify(table);
    let counts = count_buckets(&buckets, column);
    let accuracy = AccuracyTable::from_counts(&counts);

    let full = accuracy.row(Bucket::Full);
    info!(
        column,
        instances = full.total_instances,
        accuracy = ?full.accuracy,
        macro_average = ?accuracy.macro_average(),
        micro_average = ?accuracy.micro_average(),
        "Strategy evaluated"
    );

    StrategyReport {
        column: column.to_string(),
        counts,
        accuracy,
    }
}

/// Run the pipeline for every strategy column of the table, in column order.
#[must_use]
pub fn evaluate(table: &RecordTable) -> Vec<StrategyReport> {
    table
        .strategy_columns()
        .iter()
        .map(|column| evaluate_column(table, column))
        .collect()
}

/// Load the input, evaluate every strategy column and write the report.
///
/// # Errors
/// Returns error if the input cannot be loaded (missing file, missing
/// columns) or the report cannot be written
pub fn run(config: &EvalConfig) -> Result<Vec<StrategyReport>> {
    let columns = config.columns();
    info!(mode = %config.mode(), columns = ?columns, "Starting evaluation");

    let table = RecordTable::load_tsv(config.input(), &columns)?;
    let reports = evaluate(&table);

    let rendered = match config.format() {
        OutputFormat::Text => report::render_text(&reports),
        OutputFormat::Json => report::render_json(&reports)?,
    };
    std::fs::write(config.output(), rendered)?;
    info!(output = %config.output().display(), reports = reports.len(), "Report written");

    Ok(reports)
}
