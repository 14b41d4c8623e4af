//! Experiment predicates
//!
//! Each predicate is an exact, literal comparison against the pattern
//! vocabulary of the source data. All four require `POS == same|same|same`.

use crate::record::{
    Record, ALL_DIFF, ALL_FALSE, ALL_SAME, ALL_TRUE, DIFF_SAME_DIFF, TRUE_FALSE_FALSE,
};

/// Overlap patterns excluded from experiment 3.
pub const EXP3_EXCLUDED_OVERLAPS: [&str; 3] = [ALL_FALSE, TRUE_FALSE_FALSE, ALL_TRUE];

/// Experiment 1: same target word, different contexts, same POS.
#[must_use]
pub fn is_exp1(record: &Record) -> bool {
    record.context() == ALL_DIFF && record.overlap() == ALL_TRUE && record.pos() == ALL_SAME
}

/// Experiment 2: different but morphologically related target words
/// (`bat` / `bats`), different contexts, same POS.
///
/// A record without an emphasized word in `Sent1`, or with an empty
/// target, never matches.
#[must_use]
pub fn is_exp2(record: &Record) -> bool {
    is_related_word(record)
        && record.context() == ALL_DIFF
        && record.overlap() == ALL_FALSE
        && record.pos() == ALL_SAME
}

/// Experiment 3: mixed target-word overlap, different contexts, same POS.
#[must_use]
pub fn is_exp3(record: &Record) -> bool {
    record.context() == ALL_DIFF
        && !EXP3_EXCLUDED_OVERLAPS.contains(&record.overlap())
        && record.pos() == ALL_SAME
}

/// Experiment 4: different target words, fully or partially shared
/// contexts, same POS.
#[must_use]
pub fn is_exp4(record: &Record) -> bool {
    (record.context() == ALL_SAME || record.context() == DIFF_SAME_DIFF)
        && record.overlap() == ALL_FALSE
        && record.pos() == ALL_SAME
}

/// Target contained in the emphasized word of `Sent1`, or vice versa.
#[must_use]
pub fn is_related_word(record: &Record) -> bool {
    let target = record.target();
    if target.is_empty() {
        return false;
    }
    record
        .word1()
        .is_some_and(|word| word.contains(target) || target.contains(word))
}
