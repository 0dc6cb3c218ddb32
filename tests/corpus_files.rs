use std::fs;
use std::path::{Path, PathBuf};

use denorm_eval::{EvalConfig, EvalError, Evaluator, EvaluatorBuilder, ErrorType};
use tempfile::TempDir;

const CONFIG_JSON: &str = r#"{
    "en": {
        "copy_chars": "0123456789",
        "punctuation": ".,;:!?",
        "symbols": "% $ €"
    }
}"#;

fn write(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture file");
    path
}

fn evaluator(dir: &TempDir) -> Evaluator {
    let config_path = write(dir, "config.json", CONFIG_JSON.as_bytes());
    EvaluatorBuilder::new(EvalConfig {
        config_path: config_path.to_string_lossy().to_string(),
        lang: "en".to_string(),
    })
    .build()
    .expect("config loads")
}

#[test]
fn empty_files_give_all_zero_rates() {
    let dir = TempDir::new().expect("tempdir");
    let evaluator = evaluator(&dir);
    let reference = write(&dir, "ref.txt", b"");
    let hypothesis = write(&dir, "hyp.txt", b"");

    let evaluation = evaluator
        .evaluate_files(&reference, &hypothesis)
        .expect("empty corpus evaluates");

    let rates = evaluation.rates();
    assert_eq!(rates.len(), ErrorType::ALL.len());
    for rate in rates {
        assert_eq!(rate.errors, 0);
        assert_eq!(rate.total, 0);
        assert_eq!(rate.rate_percent, 0.0);
    }
    assert!(evaluator
        .alignments_from_files(&reference, &hypothesis)
        .expect("empty corpus aligns")
        .is_empty());
}

#[test]
fn corpus_rates_over_several_lines() {
    let dir = TempDir::new().expect("tempdir");
    let evaluator = evaluator(&dir);
    let reference = write(
        &dir,
        "ref.txt",
        "On 12 May , Anna paid 30 $ .\nThe meeting is at 10 .\nNo change here\n".as_bytes(),
    );
    let hypothesis = write(
        &dir,
        "hyp.txt",
        "on 12 may Anna paid 30 $ .\nThe meeting is at ten .\nNo change here\n".as_bytes(),
    );

    let evaluation = evaluator
        .evaluate_files(&reference, &hypothesis)
        .expect("corpus evaluates");
    let tally = evaluation.tally;

    assert_eq!((tally.sentence.errors, tally.sentence.total), (2, 3));
    // line 1: On/on, ",", May/may; line 2: 10/ten
    assert_eq!((tally.word.errors, tally.word.total), (4, 18));
    // ["On", "May", "Anna"] vs ["Anna"], ["The"] vs ["The"], ["No"] vs ["No"]
    assert_eq!(
        (tally.uppercase_word.errors, tally.uppercase_word.total),
        (2, 5)
    );
    assert_eq!((tally.digit.errors, tally.digit.total), (1, 3));
    assert_eq!((tally.copy_word.errors, tally.copy_word.total), (1, 3));
    assert_eq!((tally.punctuation.errors, tally.punctuation.total), (1, 3));
    assert_eq!((tally.symbol.errors, tally.symbol.total), (0, 1));

    let alignments = evaluator
        .alignments_from_files(&reference, &hypothesis)
        .expect("corpus aligns");
    let lines: Vec<u64> = alignments.iter().map(|a| a.line_number).collect();
    assert_eq!(lines, [1, 2]);
}

#[test]
fn shorter_hypothesis_file_reports_dropped_lines() {
    let dir = TempDir::new().expect("tempdir");
    let evaluator = evaluator(&dir);
    let reference = write(&dir, "ref.txt", b"a\nb\nc\nd\n");
    let hypothesis = write(&dir, "hyp.txt", b"a\nx\n");

    let evaluation = evaluator
        .evaluate_files(&reference, &hypothesis)
        .expect("corpus evaluates");

    assert_eq!(evaluation.line_pairs(), 2);
    assert_eq!(evaluation.dropped.reference, 2);
    assert_eq!(evaluation.dropped.hypothesis, 0);
    assert_eq!(
        (evaluation.tally.word.errors, evaluation.tally.word.total),
        (1, 2)
    );
}

#[test]
fn invalid_utf8_aborts_the_run() {
    let dir = TempDir::new().expect("tempdir");
    let evaluator = evaluator(&dir);
    let reference = write(&dir, "ref.txt", b"fine\n\xff\xfe broken\n");
    let hypothesis = write(&dir, "hyp.txt", b"fine\nfine\n");

    let result = evaluator.evaluate_files(&reference, &hypothesis);
    assert!(matches!(result, Err(EvalError::Io { .. })));
}

#[test]
fn undecodable_unpaired_lines_are_only_counted() {
    let dir = TempDir::new().expect("tempdir");
    let evaluator = evaluator(&dir);
    let reference = write(&dir, "ref.txt", b"fine\n");
    let hypothesis = write(&dir, "hyp.txt", b"fine\n\xff\xfe broken\n");

    let evaluation = evaluator
        .evaluate_files(&reference, &hypothesis)
        .expect("unpaired tail is never decoded");
    assert_eq!(evaluation.line_pairs(), 1);
    assert_eq!(evaluation.dropped.hypothesis, 1);
}

#[test]
fn missing_hypothesis_file_is_an_io_error() {
    let dir = TempDir::new().expect("tempdir");
    let evaluator = evaluator(&dir);
    let reference = write(&dir, "ref.txt", b"a\n");

    let result = evaluator.evaluate_files(&reference, Path::new("/nonexistent/hyp.txt"));
    assert!(matches!(result, Err(EvalError::Io { .. })));
}

#[test]
fn unknown_language_fails_before_processing() {
    let dir = TempDir::new().expect("tempdir");
    let config_path = write(&dir, "config.json", CONFIG_JSON.as_bytes());
    let result = EvaluatorBuilder::new(EvalConfig {
        config_path: config_path.to_string_lossy().to_string(),
        lang: "xx".to_string(),
    })
    .build();
    assert!(matches!(result, Err(EvalError::Config { .. })));
}
