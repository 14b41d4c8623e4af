//! End-to-end runs: file in, report file out
//!
//! Exercises `sense_eval::run` with both modes and both output formats.

use sense_eval::experiment::Bucket;
use sense_eval::{run, EvalConfig, Error, Mode, OutputFormat};
use std::path::PathBuf;

fn temp_path(name: &str, ext: &str) -> PathBuf {
    std::env::temp_dir().join(format!("sense_eval_run_{name}_{}.{ext}", std::process::id()))
}

const TRANSFORMERS_TSV: &str = "\
Target\tPOS\tContext\tOverlap\tSent1\tResultsSentAvg[-4]\tResultsConcat[-4]\tResultsSum[-4]\t
bank\tsame|same|same\tdiff|diff|diff\ttrue|true|true\tThe <b>bank</b>.\tcorrect\tcorrect\twrong\t
bank\tsame|same|same\tdiff|diff|diff\ttrue|true|true\tA <b>bank</b>.\tcorrect\twrong\twrong\t
bat\tsame|same|same\tdiff|diff|diff\tfalse|false|false\tThe <b>bats</b>.\twrong\tcorrect\tcorrect\t
key\tsame|same|same\tdiff|diff|diff\tfalse|true|false\tA <b>key</b>.\tcorrect\tcorrect\tcorrect\t
cold\tsame|same|same\tsame|same|same\tfalse|false|false\tA <b>cold</b>.\twrong\twrong\tcorrect\t
";

#[test]
fn test_run_transformers_text() {
    let input = temp_path("transformers", "tsv");
    let output = temp_path("transformers", "txt");
    std::fs::write(&input, TRANSFORMERS_TSV).unwrap();

    let config = EvalConfig::builder(&input, Mode::Transformers, &output).build();
    let reports = run(&config).unwrap();
    let text = std::fs::read_to_string(&output).unwrap();
    std::fs::remove_file(&input).ok();
    std::fs::remove_file(&output).ok();

    assert_eq!(reports.len(), 3);
    let columns: Vec<&str> = reports.iter().map(|r| r.column()).collect();
    assert_eq!(columns, ["ResultsSentAvg[-4]", "ResultsConcat[-4]", "ResultsSum[-4]"]);

    // Sent: exp_1 2/2, exp_2 0/1, exp_3 1/1, exp_4 0/1
    let sent = reports[0].accuracy();
    assert_eq!(sent.row(Bucket::Exp1).accuracy, Some(1.0));
    assert_eq!(sent.row(Bucket::Exp2).accuracy, Some(0.0));
    assert_eq!(sent.row(Bucket::Exp3).accuracy, Some(1.0));
    assert_eq!(sent.row(Bucket::Exp4).accuracy, Some(0.0));
    assert_eq!(sent.macro_average(), Some(0.5));
    assert_eq!(sent.micro_average(), Some(0.6));

    // Blocks in column order, each ending in a blank line
    let blocks: Vec<&str> = text.split("\n\n").filter(|b| !b.is_empty()).collect();
    assert_eq!(blocks.len(), 3);
    assert!(blocks[0].starts_with("ResultsSentAvg[-4]\nExperiments"));
    assert!(blocks[1].starts_with("ResultsConcat[-4]\n"));
    assert!(blocks[2].starts_with("ResultsSum[-4]\n"));
    assert!(text.ends_with("\n\n"));
}

#[test]
fn test_run_is_idempotent() {
    let input = temp_path("idempotent", "tsv");
    let output = temp_path("idempotent", "txt");
    std::fs::write(&input, TRANSFORMERS_TSV).unwrap();
    let config = EvalConfig::builder(&input, Mode::Transformers, &output).build();

    run(&config).unwrap();
    let first = std::fs::read(&output).unwrap();
    run(&config).unwrap();
    let second = std::fs::read(&output).unwrap();
    std::fs::remove_file(&input).ok();
    std::fs::remove_file(&output).ok();

    assert_eq!(first, second);
}

#[test]
fn test_run_json_with_column_override() {
    let input = temp_path("json", "tsv");
    let output = temp_path("json", "json");
    std::fs::write(&input, TRANSFORMERS_TSV).unwrap();

    let config = EvalConfig::builder(&input, Mode::Fasttext, &output)
        .columns(["ResultsSum[-4]"])
        .format(OutputFormat::Json)
        .build();
    run(&config).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    std::fs::remove_file(&input).ok();
    std::fs::remove_file(&output).ok();

    let reports = json.as_array().unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0]["column"], "ResultsSum[-4]");

    let rows = reports[0]["accuracy"]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["bucket"], "Full");
    assert_eq!(rows[0]["total_instances"], 5);
    assert!(rows[0]["averages"].is_object());
    assert!(rows[1].get("averages").is_none());
}

#[test]
fn test_run_fasttext_mode_on_transformers_file_fails() {
    let input = temp_path("wrong_mode", "tsv");
    let output = temp_path("wrong_mode", "txt");
    std::fs::write(&input, TRANSFORMERS_TSV).unwrap();

    let config = EvalConfig::builder(&input, Mode::Fasttext, &output).build();
    let err = run(&config).unwrap_err();
    std::fs::remove_file(&input).ok();

    match err {
        Error::MissingColumns { missing } => assert_eq!(missing, vec!["Bas1", "Bas2", "Meth1c"]),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!output.exists());
}
