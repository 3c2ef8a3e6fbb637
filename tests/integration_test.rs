//! Integration tests for roman-words.

#![allow(clippy::expect_used)]

use roman_words::{Config, Error, LineErrorKind, LineProcessor, run};
use std::path::Path;
use tempfile::TempDir;

/// Helper to write an input file and build a config around it.
fn setup(content: &str) -> (Config, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config::new(
        temp_dir.path().join("Input.txt"),
        temp_dir.path().join("Output.txt"),
    );
    std::fs::write(&config.input_path, content).expect("Failed to write input");
    (config, temp_dir)
}

fn read_output(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("Failed to read output")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_reference_scenarios() {
    let (config, _temp) = setup("XIV + IX\nIV - V\nMMM * III\nXX & X\nABC + X\nX\n");

    run(&config).expect("run failed");

    assert_eq!(
        read_output(&config.output_path),
        vec![
            "Twenty Three",
            "Negative One",
            "Nine Thousand",
            "Invalid operation in line: XX & X",
            "Invalid Roman numeral in line: ABC + X",
            "Invalid input format in line: X",
        ]
    );
}

#[test]
fn test_one_output_line_per_input_line() {
    let input = "I + I\n\nfoo\nM / M\n   \nC * C\n";
    let (config, _temp) = setup(input);

    let summary = run(&config).expect("run failed");

    let output = read_output(&config.output_path);
    assert_eq!(output.len(), input.lines().count());
    assert_eq!(summary.lines, output.len());
    assert_eq!(output[0], "Two");
    assert_eq!(output[1], "Invalid input format in line: ");
    assert_eq!(output[2], "Invalid input format in line: foo");
    assert_eq!(output[3], "One");
    assert_eq!(output[5], "Ten Thousand");
}

#[test]
fn test_crlf_and_control_bytes() {
    let (config, _temp) = setup("XIV + IX\r\nX + I\u{1}junk\r\nV\t*\tV\r\n");

    run(&config).expect("run failed");

    assert_eq!(
        read_output(&config.output_path),
        vec!["Twenty Three", "Eleven", "Twenty Five"]
    );
}

#[test]
fn test_non_ascii_is_cut() {
    let (config, _temp) = setup("X + V\u{e9}\nX + \u{e9}V\n");

    run(&config).expect("run failed");

    assert_eq!(
        read_output(&config.output_path),
        vec!["Fifteen", "Invalid input format in line: X + "]
    );
}

#[test]
fn test_large_products_keep_magnitude() {
    let line = format!("{} * {}\n", "M".repeat(49), "M".repeat(49));
    let (config, _temp) = setup(&line);

    run(&config).expect("run failed");

    assert_eq!(
        read_output(&config.output_path),
        vec!["Two Billion Four Hundred One Million"]
    );
}

#[test]
fn test_missing_input_is_fatal() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config::new(
        temp_dir.path().join("absent.txt"),
        temp_dir.path().join("Output.txt"),
    );

    let err = run(&config).expect_err("run should fail");
    assert!(matches!(err, Error::Io(_)));
    assert!(!config.output_path.exists());
}

#[test]
fn test_rerun_overwrites_output() {
    let (config, _temp) = setup("I + I\n");
    std::fs::write(&config.output_path, "old\nold\nold\n").expect("Failed to seed output");

    run(&config).expect("run failed");

    assert_eq!(read_output(&config.output_path), vec!["Two"]);
}

#[test]
fn test_processor_categories() {
    let processor = LineProcessor::new();
    assert_eq!(processor.process(b"IV - V").error_kind(), None);
    assert_eq!(
        processor.process(b"X / ").error_kind(),
        Some(LineErrorKind::InvalidFormat)
    );
    assert_eq!(
        processor.process(b"X / Z").error_kind(),
        Some(LineErrorKind::InvalidNumeral)
    );
    assert_eq!(
        processor.process(b"X % I").error_kind(),
        Some(LineErrorKind::InvalidOperation)
    );
}

mod property_tests {
    use proptest::prelude::*;
    use roman_words::core::{decode, encode, sanitize, to_words};

    proptest! {
        #[test]
        fn canonical_round_trip(n in 1i64..=3999) {
            let roman = encode(n).expect("encodable");
            prop_assert_eq!(decode(&roman).expect("decodable"), n);
        }

        #[test]
        fn sanitize_idempotent(s in "\\PC*") {
            let once = sanitize(s.as_bytes());
            prop_assert_eq!(sanitize(once.as_bytes()), once);
        }

        #[test]
        fn render_signs(n in -3999i64..=3999) {
            let words = to_words(n);
            if n == 0 {
                prop_assert_eq!(words, "Zero");
            } else if n < 0 {
                prop_assert!(words.starts_with("Negative "));
            } else {
                prop_assert!(!words.starts_with("Negative"));
            }
        }
    }
}

/// Binary tests.
mod cli_tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    use tempfile::TempDir;

    fn cmd() -> Command {
        let mut cmd = Command::cargo_bin("roman-words").expect("binary exists");
        cmd.env_remove("ROMAN_WORDS_INPUT")
            .env_remove("ROMAN_WORDS_OUTPUT")
            .env_remove("ROMAN_WORDS_MAX_LINE_LEN")
            .env_remove("RUST_LOG");
        cmd
    }

    #[test]
    fn test_default_paths_in_working_dir() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::write(temp_dir.path().join("Input.txt"), "XIV + IX\nXX & X\n")
            .expect("Failed to write input");

        cmd()
            .current_dir(temp_dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Processing complete. Check Output.txt for results.",
            ));

        let output = std::fs::read_to_string(temp_dir.path().join("Output.txt"))
            .expect("Failed to read output");
        assert_eq!(output, "Twenty Three\nInvalid operation in line: XX & X\n");
    }

    #[test]
    fn test_invalid_lines_still_exit_zero() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = temp_dir.path().join("exprs.txt");
        let output = temp_dir.path().join("results.txt");
        std::fs::write(&input, "nonsense\nABC + X\n").expect("Failed to write input");

        cmd()
            .arg("--input")
            .arg(&input)
            .arg("--output")
            .arg(&output)
            .assert()
            .success();

        assert!(output.exists());
    }

    #[test]
    fn test_missing_input_exits_nonzero() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        cmd()
            .current_dir(temp_dir.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to open file"));

        assert!(!temp_dir.path().join("Output.txt").exists());
    }

    #[test]
    fn test_env_configured_paths() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input = temp_dir.path().join("env-in.txt");
        let output = temp_dir.path().join("env-out.txt");
        std::fs::write(&input, "MMM * III\n").expect("Failed to write input");

        cmd()
            .env("ROMAN_WORDS_INPUT", &input)
            .env("ROMAN_WORDS_OUTPUT", &output)
            .assert()
            .success();

        let content = std::fs::read_to_string(&output).expect("Failed to read output");
        assert_eq!(content, "Nine Thousand\n");
    }

    #[test]
    fn test_json_summary() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::write(temp_dir.path().join("Input.txt"), "I + I\nX\n")
            .expect("Failed to write input");

        let assert = cmd()
            .current_dir(temp_dir.path())
            .args(["--format", "json"])
            .assert()
            .success();

        let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
        let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
        assert_eq!(value["lines"], 2);
        assert_eq!(value["invalid_format"], 1);
    }

    #[test]
    fn test_json_error_on_stdout() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        cmd()
            .current_dir(temp_dir.path())
            .args(["--format", "json"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("\"error\""));
    }
}
