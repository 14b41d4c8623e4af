//! Run configuration
//!
//! A run is fully described by an [`EvalConfig`]: the input table, the
//! result family ([`Mode`]) that fixes which strategy columns are scored,
//! the output path and the output format.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Strategy columns of transformer (BERT) results: Sent, Cat and Add.
pub const COLUMNS_TRANSFORMERS: [&str; 3] =
    ["ResultsSentAvg[-4]", "ResultsConcat[-4]", "ResultsSum[-4]"];

/// Strategy columns of fastText results: WV, Sent and Syn(3).
pub const COLUMNS_FASTTEXT: [&str; 3] = ["Bas1", "Bas2", "Meth1c"];

/// Family of comparison results being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Contextual embeddings from transformer models
    Transformers,
    /// Static fastText word vectors
    Fasttext,
}

impl Mode {
    /// Strategy columns scored in this mode, in report order.
    #[must_use]
    pub const fn columns(self) -> &'static [&'static str] {
        match self {
            Self::Transformers => &COLUMNS_TRANSFORMERS,
            Self::Fasttext => &COLUMNS_FASTTEXT,
        }
    }

    /// Selector name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Transformers => "transformers",
            Self::Fasttext => "fasttext",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "transformers" => Ok(Self::Transformers),
            "fasttext" => Ok(Self::Fasttext),
            other => Err(Error::UnknownMode(other.to_string())),
        }
    }
}

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text tables
    #[default]
    Text,
    /// JSON array of strategy reports
    Json,
}

/// Configuration of one evaluation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalConfig {
    input: PathBuf,
    mode: Mode,
    output: PathBuf,
    columns: Option<Vec<String>>,
    format: OutputFormat,
}

impl EvalConfig {
    /// Create a builder with the required fields.
    #[must_use]
    pub fn builder(
        input: impl Into<PathBuf>,
        mode: Mode,
        output: impl Into<PathBuf>,
    ) -> EvalConfigBuilder {
        EvalConfigBuilder::new(input, mode, output)
    }

    /// Input table path.
    #[must_use]
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Result family.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Report path.
    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Output format.
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    /// Strategy columns to score: the explicit override if set, otherwise
    /// the mode's columns.
    #[must_use]
    pub fn columns(&self) -> Vec<String> {
        self.columns.clone().unwrap_or_else(|| {
            self.mode
                .columns()
                .iter()
                .map(|column| (*column).to_string())
                .collect()
        })
    }
}

/// Builder for `EvalConfig`.
#[derive(Debug)]
pub struct EvalConfigBuilder {
    input: PathBuf,
    mode: Mode,
    output: PathBuf,
    columns: Option<Vec<String>>,
    format: OutputFormat,
}

impl EvalConfigBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(input: impl Into<PathBuf>, mode: Mode, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            mode,
            output: output.into(),
            columns: None,
            format: OutputFormat::default(),
        }
    }

    /// Score these columns instead of the mode's defaults.
    ///
    /// An empty list keeps the defaults.
    #[must_use]
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        self.columns = (!columns.is_empty()).then_some(columns);
        self
    }

    /// Set the output format.
    #[must_use]
    pub const fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Build the `EvalConfig`.
    #[must_use]
    pub fn build(self) -> EvalConfig {
        EvalConfig {
            input: self.input,
            mode: self.mode,
            output: self.output,
            columns: self.columns,
            format: self.format,
        }
    }
}
