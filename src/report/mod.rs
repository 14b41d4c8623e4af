//! Report rendering
//!
//! Text output, per strategy column:
//!
//! ```text
//! Bas1
//! Experiments      Accuracy
//! -------------  ----------
//! exp_1            0.833333
//! exp_2                 0.5
//! ...
//!                         Full micro avg.    Exp. micro avg.    Exp. macro avg.
//! --------------------  -----------------  -----------------  -----------------
//! avg. accuracy scores           0.714286           0.666667                nan
//! ```
//!
//! followed by a blank line. Undefined values print as `nan`.

mod table;

pub use table::{format_general, Cell, TextTable};

use crate::experiment::Bucket;
use crate::pipeline::StrategyReport;
use crate::Result;

/// Header row of the experiments table.
pub const EXPERIMENT_HEADERS: [&str; 2] = ["Experiments", "Accuracy"];

/// Header row of the averages table.
pub const AVERAGE_HEADERS: [&str; 3] = ["Full micro avg.", "Exp. micro avg.", "Exp. macro avg."];

/// Row label of the averages table.
pub const AVERAGE_LABEL: &str = "avg. accuracy scores";

/// Accuracy of each experiment bucket.
#[must_use]
pub fn experiments_table(report: &StrategyReport) -> TextTable {
    let mut table = TextTable::new(EXPERIMENT_HEADERS);
    for bucket in Bucket::EXPERIMENTS {
        table.push_row(vec![
            Cell::text(bucket.name()),
            Cell::number(report.accuracy().row(bucket).accuracy),
        ]);
    }
    table
}

/// Full-set accuracy with the micro and macro experiment averages.
#[must_use]
pub fn averages_table(report: &StrategyReport) -> TextTable {
    let accuracy = report.accuracy();
    let mut table = TextTable::new(AVERAGE_HEADERS);
    table.push_row(vec![
        Cell::text(AVERAGE_LABEL),
        Cell::number(accuracy.row(Bucket::Full).accuracy),
        Cell::number(accuracy.micro_average()),
        Cell::number(accuracy.macro_average()),
    ]);
    table
}

/// Render one strategy block: column name, both tables, blank line.
#[must_use]
pub fn render_block(report: &StrategyReport) -> String {
    format!(
        "{}\n{}\n{}\n\n",
        report.column(),
        experiments_table(report).render(),
        averages_table(report).render()
    )
}

/// Render every strategy block, in order.
#[must_use]
pub fn render_text(reports: &[StrategyReport]) -> String {
    reports.iter().map(render_block).collect()
}

/// Render the reports as a pretty-printed JSON array.
///
/// # Errors
/// Returns error if serialization fails
pub fn render_json(reports: &[StrategyReport]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(reports)?;
    json.push('\n');
    Ok(json)
}
