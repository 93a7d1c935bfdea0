//! File-backed save/load tests

use record_store::{
    CodecError, LoadOutcome, MalformedRecord, RecordStore, StoreError, StudentRecord,
};
use std::fs;
use tempfile::tempdir;

fn loaded(outcome: LoadOutcome) -> record_store::LoadReport {
    match outcome {
        LoadOutcome::Loaded(report) => report,
        LoadOutcome::FileNotFound => panic!("expected file to exist"),
    }
}

#[test]
fn test_save_then_load_into_fresh_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("STUDENT.TXT");

    let mut store = RecordStore::new();
    store.add(1, "Alice", "CS", 88.5);
    store.add(2, "Bob", "Math", 72.25);
    let report = store.save_to_file(&path).unwrap();
    assert_eq!(report.written, 2);

    let mut fresh = RecordStore::new();
    let report = loaded(fresh.load_from_file(&path).unwrap());
    assert_eq!(report.loaded, 2);
    assert!(report.is_complete());
    assert_eq!(
        fresh.list().records(),
        &[
            StudentRecord::new(1, "Alice", "CS", 88.50),
            StudentRecord::new(2, "Bob", "Math", 72.25),
        ]
    );
}

#[test]
fn test_round_trip_rounds_marks_to_two_decimals() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("marks.txt");

    let mut store = RecordStore::new();
    store.add(3, "Cid", "Art", 91.333);
    store.add(4, "Dee", "Law", 64.0);
    store.save_to_file(&path).unwrap();

    let mut fresh = RecordStore::new();
    fresh.load_from_file(&path).unwrap();
    let marks: Vec<f64> = fresh.iter().map(|r| r.marks).collect();
    assert_eq!(marks, vec![91.33, 64.0]);
}

#[test]
fn test_save_overwrites_existing_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("STUDENT.TXT");
    fs::write(&path, "old\ncontent\nthat\nis\nlonger\nthan\nthe\nnew\n").unwrap();

    let mut store = RecordStore::new();
    store.add(7, "Gil", "Music", 70.0);
    store.save_to_file(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "7\nGil\nMusic\n70.00\n");
}

#[test]
fn test_save_empty_store_writes_empty_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.txt");

    let report = RecordStore::new().save_to_file(&path).unwrap();
    assert_eq!(report.written, 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let mut store = RecordStore::new();
    store.add(1, "Alice", "CS", 88.5);

    let outcome = store.load_from_file(&dir.path().join("absent.txt")).unwrap();
    assert!(matches!(outcome, LoadOutcome::FileNotFound));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("STUDENT.TXT");

    let mut store = RecordStore::new();
    store.add(1, "Alice", "CS", 88.5);

    let err = store.save_to_file(&path).unwrap_err();
    assert!(matches!(err, StoreError::FileOpen { .. }));
    assert!(!path.exists());
}

#[test]
fn test_load_stops_at_malformed_tail() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("STUDENT.TXT");
    fs::write(&path, "1\nAlice\nCS\n88.50\n2\nBob\nMath\nlots\n").unwrap();

    let mut store = RecordStore::new();
    let report = loaded(store.load_from_file(&path).unwrap());

    assert_eq!(report.loaded, 1);
    assert!(matches!(
        report.malformed,
        Some(MalformedRecord {
            record: 2,
            start_line: 5,
            reason: CodecError::InvalidMarks { line: 8, .. },
        })
    ));
    assert_eq!(store.find_by_roll_no(1).unwrap().name.as_str(), "Alice");
    assert!(store.find_by_roll_no(2).is_none());
}

#[test]
fn test_load_twice_appends_duplicates() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("STUDENT.TXT");
    fs::write(&path, "1\nAlice\nCS\n88.50\n").unwrap();

    let mut store = RecordStore::new();
    store.load_from_file(&path).unwrap();
    store.load_from_file(&path).unwrap();

    assert_eq!(store.len(), 2);
    assert!(store.iter().all(|r| r.roll_no == 1));
}

#[test]
fn test_load_reports_truncated_last_block() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("STUDENT.TXT");
    fs::write(&path, "1\nAlice\nCS\n88.50\n2\nBob\n").unwrap();

    let mut store = RecordStore::new();
    let report = loaded(store.load_from_file(&path).unwrap());

    assert_eq!(report.loaded, 1);
    let malformed = report.malformed.unwrap();
    assert_eq!((malformed.record, malformed.start_line), (2, 5));
    assert!(matches!(malformed.reason, CodecError::UnexpectedEof { record: 2 }));
}
