use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_line_from_offset_multiple_lines() {
    let table = LineOffsetTable::build("line1\nline2\nline3");
    assert_eq!(table.line_from_offset(0), 1);
    assert_eq!(table.line_from_offset(5), 1); // '\n' after line1
    assert_eq!(table.line_from_offset(6), 2);
    assert_eq!(table.line_from_offset(11), 2);
    assert_eq!(table.line_from_offset(12), 3);
    assert_eq!(table.line_count(), 3);
}

#[test]
fn test_line_number_from_span() {
    let source = "line1\nline2\nline3";
    assert_eq!(line_number(source, Span::new(0, 5)), 1);
    assert_eq!(line_number(source, Span::new(6, 11)), 2);
    assert_eq!(line_number(source, Span::new(12, 17)), 3);
}

#[test]
fn test_offset_to_line_col() {
    let source = "abc\ndefgh\nij";
    assert_eq!(offset_to_line_col(source, 0), (1, 1));
    assert_eq!(offset_to_line_col(source, 2), (1, 3));
    assert_eq!(offset_to_line_col(source, 4), (2, 1));
    assert_eq!(offset_to_line_col(source, 7), (2, 4));
    assert_eq!(offset_to_line_col(source, 10), (3, 1));
}

#[test]
fn test_offset_at_end_of_input() {
    let source = "print 1";
    assert_eq!(offset_to_line_col(source, 7), (1, 8));
}

#[test]
fn test_column_counts_characters() {
    let source = "\"héllo\" x";
    // 'x' is at byte 9 but character 8
    assert_eq!(offset_to_line_col(source, 9), (1, 9));
}

#[test]
fn test_line_range() {
    let source = "one\ntwo\n";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_range(source, 1), Some(0..3));
    assert_eq!(table.line_range(source, 2), Some(4..7));
    assert_eq!(table.line_range(source, 3), Some(8..8));
    assert_eq!(table.line_range(source, 4), None);
    assert_eq!(table.line_range(source, 0), None);
}
