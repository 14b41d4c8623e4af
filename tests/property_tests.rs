//! Property-based tests for sense-eval
//!
//! - Count and accuracy invariants for arbitrary tables
//! - Macro/micro average definitions
//! - Empirical exclusivity of the experiment buckets
//! - Determinism of the rendered report

use proptest::prelude::*;
use sense_eval::experiment::{classify, Bucket};
use sense_eval::pipeline::evaluate_column;
use sense_eval::record::Record;
use sense_eval::report::render_text;
use sense_eval::storage::RecordTable;

const COLUMN: &str = "Bas1";

// ============================================================================
// Property Test Generators (Strategies)
// ============================================================================

/// Pattern values drawn from the source vocabulary plus a few others
fn arb_pattern(parts: &'static [&'static str]) -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::sample::select(parts), 3).prop_map(|p| p.join("|"))
}

/// Outcome label, possibly missing or unexpected
fn arb_label() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        4 => Just(Some("correct".to_string())),
        4 => Just(Some("wrong".to_string())),
        1 => Just(Some("tie".to_string())),
        1 => Just(None),
    ]
}

/// Generate a record over the pattern vocabulary
fn arb_record() -> impl Strategy<Value = Record> {
    (
        proptest::sample::select(vec!["bat", "bank", "run", "bats", ""]),
        proptest::sample::select(vec!["bat", "bats", "club", "banks"]),
        any::<bool>(),
        arb_pattern(&["same", "diff"]),
        arb_pattern(&["same", "diff"]),
        arb_pattern(&["true", "false"]),
        arb_label(),
    )
        .prop_map(|(target, word, marked, pos, context, overlap, label)| {
            let sentence = if marked {
                format!("A <b>{word}</b> here.")
            } else {
                format!("A {word} here.")
            };
            let builder = Record::builder(target)
                .pos(pos)
                .context(context)
                .overlap(overlap)
                .sentence1(sentence);
            let builder = match label {
                Some(label) => builder.outcome(COLUMN, label),
                None => builder,
            };
            builder.build()
        })
}

/// Generate a record table
fn arb_table(max_rows: usize) -> impl Strategy<Value = RecordTable> {
    proptest::collection::vec(arb_record(), 0..max_rows)
        .prop_map(|records| RecordTable::new(records, vec![COLUMN.to_string()]))
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: Full counts sum to the number of non-missing labels
    #[test]
    fn prop_full_counts_cover_labelled_records(table in arb_table(60)) {
        let report = evaluate_column(&table, COLUMN);
        let labelled = table
            .records()
            .iter()
            .filter(|r| r.outcome(COLUMN).is_some())
            .count() as u64;

        prop_assert_eq!(report.counts().get(Bucket::Full).total(), labelled);
    }

    /// Property: total_instances == correct + wrong for every bucket
    #[test]
    fn prop_total_is_correct_plus_wrong(table in arb_table(60)) {
        let report = evaluate_column(&table, COLUMN);
        for row in report.accuracy().rows() {
            prop_assert_eq!(row.total_instances, row.correct + row.wrong);
        }
    }

    /// Property: accuracy in [0, 1] when defined, undefined iff empty
    #[test]
    fn prop_accuracy_bounds(table in arb_table(60)) {
        let report = evaluate_column(&table, COLUMN);
        for row in report.accuracy().rows() {
            match row.accuracy {
                Some(acc) => {
                    prop_assert!(row.total_instances > 0);
                    prop_assert!((0.0..=1.0).contains(&acc));
                }
                None => prop_assert_eq!(row.total_instances, 0),
            }
        }
    }

    /// Property: every count row shares the Full vocabulary
    #[test]
    fn prop_count_rows_share_labels(table in arb_table(60)) {
        let report = evaluate_column(&table, COLUMN);
        let counts = report.counts();
        let labels: Vec<&str> = counts.get(Bucket::Full).labels().collect();
        for (_, row) in counts.iter() {
            prop_assert_eq!(row.labels().collect::<Vec<_>>(), labels.clone());
        }
    }

    /// Property: macro average is the unweighted mean of experiment accuracies
    #[test]
    fn prop_macro_average_definition(table in arb_table(80)) {
        let report = evaluate_column(&table, COLUMN);
        let accuracy = report.accuracy();
        let accs: Vec<Option<f64>> = Bucket::EXPERIMENTS
            .iter()
            .map(|&b| accuracy.row(b).accuracy)
            .collect();

        if accs.iter().all(Option::is_some) {
            let mean = accs.iter().flatten().sum::<f64>() / 4.0;
            let macro_avg = accuracy.macro_average().unwrap();
            prop_assert!((macro_avg - mean).abs() < 1e-12);
        } else {
            prop_assert_eq!(accuracy.macro_average(), None);
        }
    }

    /// Property: micro average pools instances over experiment buckets
    #[test]
    fn prop_micro_average_definition(table in arb_table(80)) {
        let report = evaluate_column(&table, COLUMN);
        let accuracy = report.accuracy();
        let (correct, total) = Bucket::EXPERIMENTS.iter().fold((0u64, 0u64), |(c, t), &b| {
            let row = accuracy.row(b);
            (c + row.correct, t + row.total_instances)
        });

        if total == 0 {
            prop_assert_eq!(accuracy.micro_average(), None);
        } else {
            let expected = correct as f64 / total as f64;
            let micro_avg = accuracy.micro_average().unwrap();
            prop_assert!((micro_avg - expected).abs() < 1e-12);
        }
    }

    /// Property: no record lands in more than one experiment bucket
    #[test]
    fn prop_experiment_buckets_exclusive(table in arb_table(60)) {
        let buckets = classify(&table);
        for record in table.records() {
            let memberships = buckets.memberships(record);
            prop_assert!(
                memberships.len() <= 1,
                "record in {:?}: {:?}",
                memberships,
                record
            );
        }
    }

    /// Property: bucket sizes never exceed Full
    #[test]
    fn prop_experiments_subset_of_full(table in arb_table(60)) {
        let buckets = classify(&table);
        let full = buckets.get(Bucket::Full).len();
        prop_assert_eq!(full, table.len());
        let experiment_total: usize = Bucket::EXPERIMENTS
            .iter()
            .map(|&b| buckets.get(b).len())
            .sum();
        prop_assert!(experiment_total <= full);
    }

    /// Property: rendering twice yields byte-identical output
    #[test]
    fn prop_report_idempotent(table in arb_table(40)) {
        let first = render_text(&[evaluate_column(&table, COLUMN)]);
        let second = render_text(&[evaluate_column(&table, COLUMN)]);
        prop_assert_eq!(first, second);
    }
}
