//! End-to-end CLI tests for chatstat.
//!
//! These tests run the actual binary with various arguments and check its
//! stdout, stderr, exit status and written files.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Creates a temporary directory with test exports.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    let chat = "\
Messages and calls are end-to-end encrypted.
01/02/2021, 9:00 pm - Alice: I love this group
01/02/2021, 9:01 pm - Bob: this is terrible
and it gets worse
01/02/2021, 9:01 pm - +91 98765 43210: <Media omitted>
01/02/2021, 9:05 pm - Alice: plan - leave at 6
02/02/2021, 10:00 am - Bob left
";
    fs::write(dir.path().join("chat.txt"), chat).unwrap();

    let custom_media = "\
meta
01/02/2021, 9:00 pm - Alice: <attached: photo.jpg>
01/02/2021, 9:01 pm - Bob: hello
";
    fs::write(dir.path().join("custom_media.txt"), custom_media).unwrap();

    fs::write(dir.path().join("empty.txt"), "").unwrap();

    let special = "\
meta
01/02/2021, 9:00 pm - Alice: semi;colons;here
01/02/2021, 9:01 pm - Bob: Quotes \"inside\" text
01/02/2021, 9:02 pm - Иван: Привет мир 🎉
";
    fs::write(dir.path().join("special.txt"), special).unwrap();

    dir
}

fn chatstat_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chatstat"));
    Command::from_std(cmd)
}

fn output_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

// ============================================================================
// Report Output
// ============================================================================

mod report {
    use super::*;

    #[test]
    fn test_text_report() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("chat.txt");

        chatstat_cmd()
            .arg(&input)
            .assert()
            .success()
            .stdout(predicate::str::contains("chatstat v"))
            .stdout(predicate::str::contains("Chat summary"))
            .stdout(predicate::str::contains("Records:         5"))
            .stdout(predicate::str::contains("Messages per author"))
            .stdout(predicate::str::contains("Hourly activity"))
            .stdout(predicate::str::contains("Average sentiment per author"));
    }

    #[test]
    fn test_json_report() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("chat.txt");

        let output = chatstat_cmd().arg(&input).arg("--json").output().unwrap();
        assert!(output.status.success());

        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["total_records"], 5);
        assert_eq!(report["media_records"], 1);
        assert_eq!(report["system_records"], 1);
        assert_eq!(report["text_records"], 3);
        assert_eq!(report["messages_by_author"][0]["key"], "Alice");
        assert_eq!(report["sentiment"]["counts"]["negative"], 1);
    }

    #[test]
    fn test_no_sentiment() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("chat.txt");

        chatstat_cmd()
            .arg(&input)
            .arg("--no-sentiment")
            .assert()
            .success()
            .stdout(predicate::str::contains("Average sentiment").not());

        let output = chatstat_cmd()
            .args([input.to_str().unwrap(), "--json", "--no-sentiment"])
            .output()
            .unwrap();
        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert!(report["sentiment"].is_null());
    }

    #[test]
    fn test_top_times() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("chat.txt");

        let output = chatstat_cmd()
            .args([input.to_str().unwrap(), "--json", "--top-times", "1"])
            .output()
            .unwrap();
        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let times = report["busiest_times"].as_array().unwrap();
        assert_eq!(times.len(), 1);
        assert_eq!(times[0]["key"], "9:00 pm");
    }

    #[test]
    fn test_custom_media_marker() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("custom_media.txt");

        let output = chatstat_cmd()
            .args([
                input.to_str().unwrap(),
                "--json",
                "--media-marker",
                "<attached: photo.jpg>",
            ])
            .output()
            .unwrap();
        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["media_records"], 1);
        assert_eq!(report["text_records"], 1);
    }

    #[test]
    fn test_empty_file() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("empty.txt");

        chatstat_cmd()
            .arg(&input)
            .assert()
            .success()
            .stdout(predicate::str::contains("Records:         1"))
            .stdout(predicate::str::contains("(no data)"));
    }
}

// ============================================================================
// Table Export
// ============================================================================

mod export {
    use super::*;

    #[test]
    fn test_csv_output() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("chat.txt");
        let output = output_path(&fixtures, "out.csv");

        chatstat_cmd()
            .args([input.to_str().unwrap(), "-o", output.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Saved 5 records"));

        let content = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "Date;Time;Author;Message");
        assert_eq!(lines.len(), 6);
        assert!(content.contains("Bob;this is terrible and it gets worse"));
        assert!(content.contains("plan - leave at 6"));
    }

    #[test]
    fn test_csv_with_counts() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("chat.txt");
        let output = output_path(&fixtures, "out.csv");

        chatstat_cmd()
            .args([input.to_str().unwrap(), "-o", output.to_str().unwrap(), "--counts"])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("Date;Time;Author;Message;Word_Count;Letter_Count"));
        assert!(content.contains("Alice;I love this group;4;17"));
    }

    #[test]
    fn test_json_output_from_extension() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("chat.txt");
        let output = output_path(&fixtures, "out.json");

        chatstat_cmd()
            .args([input.to_str().unwrap(), "-o", output.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("(JSON)"));

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[4]["Author"], serde_json::Value::Null);
    }

    #[test]
    fn test_jsonl_explicit_format() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("chat.txt");
        let output = output_path(&fixtures, "messages.out");

        chatstat_cmd()
            .args([
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "-f",
                "jsonl",
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content.lines().count(), 5);
        for line in content.lines() {
            let _: serde_json::Value = serde_json::from_str(line).unwrap();
        }
    }

    #[test]
    fn test_json_report_with_output_keeps_stdout_clean() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("chat.txt");
        let output = output_path(&fixtures, "out.csv");

        let result = chatstat_cmd()
            .args([input.to_str().unwrap(), "--json", "-o", output.to_str().unwrap()])
            .output()
            .unwrap();
        assert!(result.status.success());
        let _: serde_json::Value = serde_json::from_slice(&result.stdout).unwrap();
        assert!(output.exists());
    }

    #[test]
    fn test_special_characters_escaped() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("special.txt");
        let output = output_path(&fixtures, "out.csv");

        chatstat_cmd()
            .args([input.to_str().unwrap(), "-o", output.to_str().unwrap()])
            .assert()
            .success();

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_path(&output)
            .unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][3], "semi;colons;here");
        assert_eq!(&rows[1][3], "Quotes \"inside\" text");
        assert_eq!(&rows[2][2], "Иван");
        assert_eq!(&rows[2][3], "Привет мир 🎉");
    }
}

// ============================================================================
// Error Handling
// ============================================================================

mod errors {
    use super::*;

    #[test]
    fn test_missing_input() {
        chatstat_cmd()
            .arg("/nonexistent/chat.txt")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Error"))
            .stderr(predicate::str::contains("chat.txt"));
    }

    #[test]
    fn test_unwritable_output() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("chat.txt");

        chatstat_cmd()
            .args([input.to_str().unwrap(), "-o", "/nonexistent/dir/out.csv"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains(
                "Cannot create output file /nonexistent/dir/out.csv",
            ))
            .stderr(predicate::str::contains("chat export").not());
    }

    #[test]
    fn test_invalid_format_flag() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("chat.txt");

        chatstat_cmd()
            .args([input.to_str().unwrap(), "-f", "xml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown format"));
    }

    #[test]
    fn test_no_arguments() {
        chatstat_cmd().assert().failure();
    }
}

// ============================================================================
// Flags
// ============================================================================

mod flags {
    use super::*;

    #[test]
    fn test_help() {
        chatstat_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--media-marker"))
            .stdout(predicate::str::contains("--no-sentiment"))
            .stdout(predicate::str::contains("EXAMPLES"));
    }

    #[test]
    fn test_version() {
        chatstat_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_verbose_logs_to_stderr() {
        let fixtures = setup_fixtures();
        let input = fixtures.path().join("chat.txt");

        let output = chatstat_cmd()
            .env_remove("RUST_LOG")
            .args([input.to_str().unwrap(), "--json", "-vv"])
            .output()
            .unwrap();
        assert!(output.status.success());
        // Logs never leak into the JSON on stdout
        let _: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert!(String::from_utf8_lossy(&output.stderr).contains("segmented chat log"));
    }
}
