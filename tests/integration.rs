//! Integration tests for parsing and analysing real export files

use chatstat::core::filter::text_messages;
use chatstat::core::stats::{count_by_author, hour_of_day};
use chatstat::parser::parse_lines;
use chatstat::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

const GROUP_CHAT: &str = "\
Messages and calls are end-to-end encrypted. No one outside of this chat, not even WhatsApp, can read or listen to them.
12/03/2021, 9:15 pm - Priya Sharma created group \"Weekend Trip\"
12/03/2021, 9:15 pm - Priya Sharma added Rahul Kumar Verma
12/03/2021, 9:16 pm - Priya Sharma: Hi all! So excited for this trip
12/03/2021, 9:17 pm - Rahul Kumar Verma: Same here!! Can't wait
Who is driving?
12/03/2021, 9:18 pm - +91 98765 43210: <Media omitted>
12/03/2021, 9:20 pm - Bob: plan - leave at 6 - breakfast on the way
12/03/2021, 9:21 pm - Priya Sharma: <Media omitted>
13/03/2021, 10:05 am - Bob: ugh, the car broke down. This is terrible
13/03/2021, 10:06 am - +91 98765 43210: no worries, we will figure it out
13/03/2021, 10:30 am - Rahul Kumar Verma left";

fn fixture(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    (dir, path)
}

fn parse_fixture(path: &Path) -> Vec<MessageRecord> {
    LogParser::new().parse(path).unwrap()
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_group_chat_file() {
    let (_dir, path) = fixture("chat.txt", GROUP_CHAT);
    let records = parse_fixture(&path);

    assert_eq!(records.len(), 10);

    assert!(records[0].is_system());
    assert_eq!(records[0].body, "Priya Sharma created group \"Weekend Trip\"");
    assert_eq!(records[0].date(), Some("12/03/2021"));
    assert_eq!(records[0].time(), Some("9:15 pm"));

    assert_eq!(records[2].author(), Some("Priya Sharma"));
    assert_eq!(records[2].body, "Hi all! So excited for this trip");

    // Three-word author with a continuation line
    assert_eq!(records[3].author(), Some("Rahul Kumar Verma"));
    assert_eq!(records[3].body, "Same here!! Can't wait Who is driving?");

    assert_eq!(records[4].author(), Some("+91 98765 43210"));
    assert_eq!(records[4].body, "<Media omitted>");

    assert_eq!(records[5].body, "plan - leave at 6 - breakfast on the way");

    assert_eq!(records[9].author(), None);
    assert_eq!(records[9].body, "Rahul Kumar Verma left");
}

#[test]
fn test_parse_str_matches_parse_file() {
    let (_dir, path) = fixture("chat.txt", GROUP_CHAT);
    assert_eq!(parse_fixture(&path), LogParser::new().parse_str(GROUP_CHAT));
}

#[test]
fn test_parse_with_small_buffer() {
    let (_dir, path) = fixture("chat.txt", GROUP_CHAT);
    let parser = LogParser::with_config(ParserConfig::new().with_buffer_size(16));
    assert_eq!(parser.parse(&path).unwrap(), parse_fixture(&path));
}

#[test]
fn test_parse_with_zero_buffer_reads_every_line() {
    let (_dir, path) = fixture(
        "chat.txt",
        "meta\n01/02/2021, 9:00 am - Bob: hi\n01/02/2021, 9:01 am - Amy: yo\n",
    );
    let parser = LogParser::with_config(ParserConfig::new().with_buffer_size(0));
    let records = parser.parse(&path).unwrap();

    assert_eq!(records, parse_fixture(&path));
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].author(), Some("Amy"));
    assert_eq!(records[1].body, "yo");
}

#[test]
fn test_parse_empty_file() {
    let (_dir, path) = fixture("empty.txt", "");
    assert_eq!(parse_fixture(&path), vec![MessageRecord::default()]);
}

#[test]
fn test_parse_metadata_only_file() {
    let (_dir, path) = fixture("meta.txt", "Messages and calls are end-to-end encrypted.\n");
    assert_eq!(parse_fixture(&path), vec![MessageRecord::default()]);
}

#[test]
fn test_parse_file_without_headers() {
    let (_dir, path) = fixture("notes.txt", "title\nfirst\nsecond\n");
    let records = parse_fixture(&path);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].body, "first second");
    assert!(records[0].date.is_none());
}

#[test]
fn test_parse_missing_file_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let err = LogParser::new().parse(&path).unwrap_err();
    assert!(err.is_io());
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn test_parse_invalid_utf8_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("latin1.txt");
    fs::write(&path, b"meta\n01/02/2021, 9:00 am - Bob: caf\xe9\n").unwrap();
    assert!(LogParser::new().parse(&path).unwrap_err().is_io());
}

// ============================================================================
// Documented behaviour
// ============================================================================

#[test]
fn test_header_detection_examples() {
    assert!(is_header_line("01/02/2021, 10:30 am - Alice: Hi"));
    assert!(!is_header_line("Hi there"));
}

#[test]
fn test_two_word_author_wins() {
    let records = parse_lines(["meta", "01/02/2021, 10:30 am - John Smith: hello there"]);
    assert_eq!(records[0].author(), Some("John Smith"));
    assert_eq!(records[0].body, "hello there");
}

#[test]
fn test_continuation_join_example() {
    let records = parse_lines([
        "meta",
        "01/02/2021, 09:00 am - Bob: first line",
        "second line no header",
        "01/02/2021, 09:05 am - Alice: next msg",
    ]);
    assert_eq!(
        records,
        vec![
            MessageRecord::new("01/02/2021", "09:00 am", Some("Bob"), "first line second line no header"),
            MessageRecord::new("01/02/2021", "09:05 am", Some("Alice"), "next msg"),
        ]
    );
}

#[test]
fn test_trailing_header_only() {
    let records = parse_lines(["meta", "01/02/2021, 09:00 am - Bob: only this"]);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].body, "only this");
}

// ============================================================================
// Analysis
// ============================================================================

#[test]
fn test_full_analysis() {
    let records = LogParser::new().parse_str(GROUP_CHAT);
    let report = analyze(&records, &AnalysisConfig::default(), &LexiconScorer::new());

    assert_eq!(report.total_records, 10);
    assert_eq!(report.system_records, 3);
    assert_eq!(report.media_records, 2);
    assert_eq!(report.text_records, 5);

    assert_eq!(
        report.messages_by_author,
        vec![
            Ranked::new("Priya Sharma", 2),
            Ranked::new("+91 98765 43210", 2),
            Ranked::new("Bob", 2),
            Ranked::new("Rahul Kumar Verma", 1),
        ]
    );
    assert_eq!(report.media_by_author.len(), 2);
    assert_eq!(report.busiest_times.len(), 5);
    assert_eq!(report.hourly_activity[21], 3);
    assert_eq!(report.hourly_activity[10], 2);

    let sentiment = report.sentiment.as_ref().unwrap();
    assert_eq!(sentiment.counts.total(), 5);
    assert!(sentiment.counts.negative >= 1);
    assert!(sentiment.counts.positive >= 1);
}

#[test]
fn test_custom_thresholds() {
    let records = LogParser::new().parse_str(GROUP_CHAT);
    let wide = AnalysisConfig::default().with_thresholds(SentimentThresholds {
        positive: 1.1,
        negative: -1.1,
    });
    let report = analyze(&records, &wide, &LexiconScorer::new());
    let counts = report.sentiment.unwrap().counts;
    assert_eq!(counts.neutral, 5);
}

#[test]
fn test_text_messages_excludes_media_and_system() {
    let records = LogParser::new().parse_str(GROUP_CHAT);
    let text = text_messages(&records, "<Media omitted>");
    assert!(text.iter().all(|r| r.author().is_some()));
    assert!(text.iter().all(|r| r.body != "<Media omitted>"));
    // Bob has no media, so he leads once media is excluded
    assert_eq!(count_by_author(text.iter().copied())[0].key, "Bob");
}

#[test]
fn test_every_header_time_has_an_hour() {
    let records = LogParser::new().parse_str(GROUP_CHAT);
    for record in &records {
        let time = record.time().unwrap();
        assert!(hour_of_day(time).is_some(), "unparsed time {time}");
    }
}

// ============================================================================
// Export
// ============================================================================

#[test]
fn test_export_csv_file() {
    let records = LogParser::new().parse_str(GROUP_CHAT);
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");

    write_csv(&records, &path, &OutputConfig::new().with_counts()).unwrap();

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_path(&path)
        .unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["Date", "Time", "Author", "Message", "Word_Count", "Letter_Count"]
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 10);
    assert_eq!(&rows[5][3], "plan - leave at 6 - breakfast on the way");
    assert_eq!(&rows[5][4], "10");
    assert_eq!(&rows[0][2], "");
}

#[test]
fn test_export_json_roundtrips_records() {
    let records = LogParser::new().parse_str(GROUP_CHAT);
    let json = to_json(&records, &OutputConfig::new()).unwrap();
    let parsed: Vec<MessageRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, records);
}

#[test]
fn test_export_jsonl_via_format_detection() {
    let records = LogParser::new().parse_str(GROUP_CHAT);
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.ndjson");

    let format = OutputFormat::from_path(&path).unwrap();
    write_to_format(&records, &path, format, &OutputConfig::new()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), records.len());
    for line in content.lines() {
        let _: MessageRecord = serde_json::from_str(line).unwrap();
    }
}

#[test]
fn test_report_json_is_valid() {
    let records = LogParser::new().parse_str(GROUP_CHAT);
    let report = analyze(&records, &AnalysisConfig::default(), &LexiconScorer::new());
    let parsed: ChatReport = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(parsed.total_records, report.total_records);
    assert_eq!(parsed.messages_by_author, report.messages_by_author);
    assert_eq!(parsed.hourly_activity, report.hourly_activity);
    assert_eq!(
        parsed.sentiment.map(|s| s.counts),
        report.sentiment.map(|s| s.counts)
    );
}
