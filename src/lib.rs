//! # sense-eval: Accuracy Scoring for Word-Sense Embedding Strategies
//!
//! Scores precomputed outcome labels of several embedding-composition
//! strategies against a labelled set of sentence triples. Each triple is
//! assigned to up to four experimental conditions by exact predicates over
//! its `Context`, `Overlap` and `POS` patterns; per condition the crate
//! counts outcomes and derives accuracy, plus macro and micro averages over
//! the four experiments.
//!
//! ## Pipeline
//!
//! ```text
//! RecordTable ─► experiment::classify ─► aggregate::count_buckets
//!             ─► accuracy::AccuracyTable ─► report::render_text
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use sense_eval::experiment::Bucket;
//! use sense_eval::pipeline::evaluate_column;
//! use sense_eval::storage::RecordTable;
//!
//! let tsv = "Target\tPOS\tContext\tOverlap\tSent1\tBas1\n\
//!            bank\tsame|same|same\tdiff|diff|diff\ttrue|true|true\tThe <b>bank</b>\tcorrect\n";
//! let table = RecordTable::from_reader(tsv.as_bytes(), &["Bas1"])?;
//!
//! let report = evaluate_column(&table, "Bas1");
//! assert_eq!(report.accuracy().row(Bucket::Exp1).accuracy, Some(1.0));
//! # Ok::<(), sense_eval::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod accuracy;
pub mod aggregate;
pub mod config;
pub mod error;
pub mod experiment;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod storage;

pub use config::{EvalConfig, Mode, OutputFormat};
pub use error::{Error, Result};
pub use pipeline::{evaluate, evaluate_column, run, StrategyReport};
