mod common;

use common::{Form, MIXED, Mixed, NETWORK, PROFILE};
use pretty_assertions::assert_eq;
use profilekit_engine::{
    CollectingDiagnostics, MalformedRecord, ProfileEngine, ProfileError, ProfileRecord, RecordEntry,
};

// ── RecordEntry::parse ───────────────────────────────────────────

#[test]
fn parse_name_and_value() {
    let entry = RecordEntry::parse("name?Ann", '?', 1).unwrap();
    assert_eq!(entry, RecordEntry::new("name", "Ann"));
}

#[test]
fn parse_empty_value() {
    let entry = RecordEntry::parse("name?", '?', 1).unwrap();
    assert_eq!(entry.raw, "");
}

#[test]
fn parse_without_separator() {
    let err = RecordEntry::parse("name Ann", '?', 3).unwrap_err();
    assert_eq!(
        err,
        MalformedRecord::Separator {
            line: 3,
            separator: '?',
            found: 0,
        }
    );
}

#[test]
fn parse_with_two_separators() {
    let err = RecordEntry::parse("notes?a?b", '?', 2).unwrap_err();
    assert!(matches!(err, MalformedRecord::Separator { found: 2, .. }));
}

#[test]
fn parse_custom_separator() {
    let entry = RecordEntry::parse("a=b?c", '=', 1).unwrap();
    assert_eq!(entry.field, "a");
    assert_eq!(entry.raw, "b?c");
}

#[test]
fn entry_line_matches_write_to() {
    let entry = RecordEntry::new("port", "8443");
    let mut out = Vec::new();
    entry.write_to(&mut out, '=').unwrap();
    assert_eq!(entry.line('='), "port=8443\n");
    assert_eq!(String::from_utf8(out).unwrap(), entry.line('='));
}

#[test]
fn entry_canonical_name() {
    let entry = RecordEntry::new("proxy_var", "true");
    assert_eq!(entry.canonical_name(), "proxy");
}

// ── ProfileRecord ────────────────────────────────────────────────

#[test]
fn capture_in_declaration_order() {
    let record = ProfileRecord::capture(&Form::filled(), &NETWORK, '?').unwrap();
    let fields: Vec<_> = record.entries().iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["host", "port", "proxy_var"]);
}

#[test]
fn render_matches_file_format() {
    let record = ProfileRecord::capture(&Form::filled(), &PROFILE, '?').unwrap();
    assert_eq!(
        record.render('?'),
        "name?Ann\nactive?true\nnotes?first line only\n"
    );
}

#[test]
fn write_to_matches_render() {
    let record = ProfileRecord::capture(&Form::filled(), &NETWORK, '?').unwrap();
    let mut out = Vec::new();
    record.write_to(&mut out, '?').unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), record.render('?'));
}

#[test]
fn saved_record_matches_render() {
    let engine = ProfileEngine::with_diagnostics(CollectingDiagnostics::new());
    let mut out = Vec::new();
    engine.save_to(&Form::filled(), &NETWORK, &mut out).unwrap();

    let record = ProfileRecord::capture(&Form::filled(), &NETWORK, '?').unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), record.render('?'));
}

#[test]
fn capture_unsupported_field_fails() {
    let err = ProfileRecord::capture(&Mixed::default(), &MIXED, '?').unwrap_err();
    assert!(matches!(err, ProfileError::UnsupportedType { .. }));
}

#[test]
fn value_with_separator_is_written_verbatim() {
    let form = Form {
        name: "who?".into(),
        ..Form::default()
    };
    let record = ProfileRecord::capture(&form, &PROFILE, '?').unwrap();
    assert_eq!(record.entries()[0].raw, "who?");
    assert!(record.render('?').starts_with("name?who?\n"));
}

#[test]
fn record_from_entries() {
    let record: ProfileRecord = vec![RecordEntry::new("a", "1"), RecordEntry::new("b", "")]
        .into_iter()
        .collect();
    assert_eq!(record.len(), 2);
    assert!(!record.is_empty());
    assert_eq!(record.render('?'), "a?1\nb?\n");
}

#[test]
fn empty_record_renders_nothing() {
    let record = ProfileRecord::default();
    assert!(record.is_empty());
    assert_eq!(record.render('?'), "");
}
