use std::fs;
use std::io;

use super::*;

fn temp_store() -> (tempfile::TempDir, ConversionStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = ConversionStore::new(dir.path().join("conversion.csv"));
    (dir, store)
}

#[test]
fn append_then_load() {
    let (_dir, store) = temp_store();
    store.append(["MCMXCIV", "1994"]).unwrap();

    let rows = store.load().unwrap();
    assert_eq!(rows, vec![vec!["MCMXCIV".to_string(), "1994".to_string()]]);
}

#[test]
fn append_preserves_order() {
    let (_dir, store) = temp_store();
    store.append(["I", "1"]).unwrap();
    store.append(["IV", "4"]).unwrap();
    store.append(["MMMCMXCIX", "3999"]).unwrap();

    let rows = store.load().unwrap();
    let romans: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(romans, ["I", "IV", "MMMCMXCIX"]);
}

#[test]
fn file_format_is_plain_csv() {
    let (_dir, store) = temp_store();
    store.append(["XL", "40"]).unwrap();
    store.append(["IX", "9"]).unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    assert_eq!(raw, "XL,40\nIX,9\n");
}

#[test]
fn embedded_delimiters_are_quoted() {
    let (_dir, store) = temp_store();
    store.append(["a,b", "say \"hi\"", "two\nlines"]).unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    assert!(raw.starts_with("\"a,b\",\"say \"\"hi\"\"\""), "{raw}");

    let rows = store.load().unwrap();
    assert_eq!(rows, vec![vec!["a,b", "say \"hi\"", "two\nlines"]]);
}

#[test]
fn rows_may_differ_in_length() {
    let (_dir, store) = temp_store();
    store.append(["X", "10"]).unwrap();
    store.append(["note"]).unwrap();

    let rows = store.load().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], vec!["note"]);
}

#[test]
fn append_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConversionStore::new(dir.path().join("nested/deeper/out.csv"));
    store.append(["V", "5"]).unwrap();
    assert_eq!(store.load().unwrap().len(), 1);
}

#[test]
fn load_missing_file_is_not_found() {
    let (_dir, store) = temp_store();
    match store.load() {
        Err(StoreError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn conversion_records_round_trip() {
    let (_dir, store) = temp_store();
    store
        .append_conversion(&ConversionRecord::new("MCMXCIV", 1994))
        .unwrap();
    store.append(["XL", "40"]).unwrap();

    let conversions = store.load_conversions().unwrap();
    assert_eq!(
        conversions,
        vec![
            ConversionRecord::new("MCMXCIV", 1994),
            ConversionRecord::new("XL", 40),
        ]
    );
    // Generic and typed rows share one format.
    assert_eq!(store.load().unwrap()[0], vec!["MCMXCIV", "1994"]);
}

#[test]
fn load_conversions_rejects_wrong_width() {
    let (_dir, store) = temp_store();
    store.append(["X", "10"]).unwrap();
    store.append(["X", "10", "extra"]).unwrap();

    match store.load_conversions() {
        Err(StoreError::MalformedRecord { line, reason }) => {
            assert_eq!(line, 2);
            assert!(reason.contains("expected 2 fields"), "{reason}");
        }
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
}

#[test]
fn load_conversions_rejects_non_numeric_decimal() {
    let (_dir, store) = temp_store();
    store.append(["X", "ten"]).unwrap();

    assert!(matches!(
        store.load_conversions(),
        Err(StoreError::MalformedRecord { line: 1, .. })
    ));
}

#[test]
fn load_invalid_utf8_is_csv_error() {
    let (_dir, store) = temp_store();
    fs::write(store.path(), b"XL,40\n\xff\xfe,1\n").unwrap();

    match store.load() {
        Err(StoreError::Csv(e)) => {
            assert!(matches!(e.kind(), csv::ErrorKind::Utf8 { .. }), "{e}");
        }
        other => panic!("expected Csv error, got {other:?}"),
    }
}
