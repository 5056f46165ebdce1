//! Report Tests
//!
//! Tests verify the five-line layout for the documented scenarios.

use student_record::record::StudentRecord;
use student_record::report::{render_report, write_report};

fn make_record(age: i32, first: &str, last: &str, standard: i32) -> StudentRecord {
    let mut record = StudentRecord::new();
    record.set_age(age);
    record.set_first_name(first);
    record.set_last_name(last);
    record.set_standard(standard);
    record
}

#[test]
fn test_report_layout() {
    let record = make_record(16, "John", "Doe", 10);
    assert_eq!(render_report(&record), "16\nDoe, John\n10\n\n16,John,Doe,10");
}

#[test]
fn test_report_lines() {
    let record = make_record(0, "A", "B", 1);
    let report = render_report(&record);
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines, vec!["0", "B, A", "1", "", "0,A,B,1"]);
}

#[test]
fn test_report_negative_age_verbatim() {
    let record = make_record(-5, "X", "Y", 3);
    assert_eq!(render_report(&record), "-5\nY, X\n3\n\n-5,X,Y,3");
}

#[test]
fn test_report_of_empty_record() {
    let record = StudentRecord::new();
    assert_eq!(render_report(&record), "0\n, \n0\n\n0,,,0");
}

#[test]
fn test_write_report_matches_render() {
    let record = make_record(16, "John", "Doe", 10);
    let mut out = Vec::new();
    write_report(&mut out, &record).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), render_report(&record));
}

#[test]
fn test_report_has_no_trailing_newline() {
    let record = make_record(16, "John", "Doe", 10);
    let mut out = Vec::new();
    write_report(&mut out, &record).unwrap();
    assert!(!out.ends_with(b"\n"));
}
