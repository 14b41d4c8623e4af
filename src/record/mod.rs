//! Sentence-triple records
//!
//! A [`Record`] is one evaluation triple: the target word, the three
//! pattern annotations (`POS`, `Context`, `Overlap`), the first sentence
//! with its emphasized target, and one precomputed outcome label per
//! embedding strategy column.
//!
//! Records are immutable once built. The emphasized word of `Sent1`
//! (DerivedWord1) is extracted at construction time and is `None` when the
//! sentence carries no `<b>...</b>` markup.
//!
//! ## Example
//!
//! ```rust
//! use sense_eval::record::Record;
//!
//! let record = Record::builder("bat")
//!     .pos("same|same|same")
//!     .context("diff|diff|diff")
//!     .overlap("false|false|false")
//!     .sentence1("The <b>bats</b> left the cave.")
//!     .outcome("Bas1", "wrong")
//!     .build();
//!
//! assert_eq!(record.word1(), Some("bats"));
//! assert_eq!(record.outcome("Bas1"), Some("wrong"));
//! ```

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Pattern value: all three pairwise comparisons share the property.
pub const ALL_SAME: &str = "same|same|same";
/// Pattern value: no pairwise comparison shares the property.
pub const ALL_DIFF: &str = "diff|diff|diff";
/// Context pattern where only the middle comparison shares context.
pub const DIFF_SAME_DIFF: &str = "diff|same|diff";
/// Overlap pattern: the same literal target word in every sentence.
pub const ALL_TRUE: &str = "true|true|true";
/// Overlap pattern: a different target word in every sentence.
pub const ALL_FALSE: &str = "false|false|false";
/// Overlap pattern: only the first comparison shares the target word.
pub const TRUE_FALSE_FALSE: &str = "true|false|false";

/// Outcome label for a triple ranked as expected.
pub const CORRECT: &str = "correct";
/// Outcome label for a triple ranked incorrectly.
pub const WRONG: &str = "wrong";

// Greedy and unanchored: the first `<b>` through the last `</b>` on the line.
static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"<b>(.*)</b>").unwrap());

/// Extract the text enclosed in `<b>...</b>` markup.
///
/// Returns `None` if the sentence has no emphasized span. An empty span
/// (`<b></b>`) yields `Some("")`.
///
/// ```rust
/// use sense_eval::record::extract_emphasized;
///
/// assert_eq!(extract_emphasized("a <b>bank</b> loan"), Some("bank"));
/// assert_eq!(extract_emphasized("no markup here"), None);
/// ```
#[must_use]
pub fn extract_emphasized(sentence: &str) -> Option<&str> {
    EMPHASIS
        .captures(sentence)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// One sentence triple with its annotations and per-strategy outcomes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    target: String,
    pos: String,
    context: String,
    overlap: String,
    sentence1: String,
    word1: Option<String>,
    outcomes: BTreeMap<String, String>,
}

impl Record {
    /// Create a builder for a record with the given target word.
    #[must_use]
    pub fn builder(target: impl Into<String>) -> RecordBuilder {
        RecordBuilder::new(target)
    }

    /// Target word of the triple. Empty when the source cell was missing.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Part-of-speech agreement pattern.
    #[must_use]
    pub fn pos(&self) -> &str {
        &self.pos
    }

    /// Context pattern.
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Target-word overlap pattern.
    #[must_use]
    pub fn overlap(&self) -> &str {
        &self.overlap
    }

    /// First sentence, including its emphasis markup.
    #[must_use]
    pub fn sentence1(&self) -> &str {
        &self.sentence1
    }

    /// Emphasized word of the first sentence (DerivedWord1).
    #[must_use]
    pub fn word1(&self) -> Option<&str> {
        self.word1.as_deref()
    }

    /// Outcome label for a strategy column, `None` if the cell was missing.
    #[must_use]
    pub fn outcome(&self, column: &str) -> Option<&str> {
        self.outcomes.get(column).map(String::as_str)
    }
}

/// Builder for `Record`.
#[derive(Debug)]
pub struct RecordBuilder {
    target: String,
    pos: String,
    context: String,
    overlap: String,
    sentence1: String,
    outcomes: BTreeMap<String, String>,
}

impl RecordBuilder {
    /// Create a new builder with the target word.
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            pos: String::new(),
            context: String::new(),
            overlap: String::new(),
            sentence1: String::new(),
            outcomes: BTreeMap::new(),
        }
    }

    /// Set the POS pattern.
    #[must_use]
    pub fn pos(mut self, pos: impl Into<String>) -> Self {
        self.pos = pos.into();
        self
    }

    /// Set the context pattern.
    #[must_use]
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// Set the overlap pattern.
    #[must_use]
    pub fn overlap(mut self, overlap: impl Into<String>) -> Self {
        self.overlap = overlap.into();
        self
    }

    /// Set the first sentence.
    #[must_use]
    pub fn sentence1(mut self, sentence1: impl Into<String>) -> Self {
        self.sentence1 = sentence1.into();
        self
    }

    /// Record an outcome label for a strategy column.
    #[must_use]
    pub fn outcome(mut self, column: impl Into<String>, label: impl Into<String>) -> Self {
        self.outcomes.insert(column.into(), label.into());
        self
    }

    /// Build the `Record`, deriving the emphasized word from `sentence1`.
    #[must_use]
    pub fn build(self) -> Record {
        let word1 = extract_emphasized(&self.sentence1).map(str::to_string);
        Record {
            target: self.target,
            pos: self.pos,
            context: self.context,
            overlap: self.overlap,
            sentence1: self.sentence1,
            word1,
            outcomes: self.outcomes,
        }
    }
}
