use cbfont_core::{parse_line, CbFontError, CellSize, Record};
use pretty_assertions::assert_eq;

fn size4() -> CellSize {
    CellSize::new(16, 4).unwrap()
}

#[test]
fn test_example_glyph_line() {
    let record = parse_line("{0x1F8,0x10,0x8,0x1F0} // N", size4()).unwrap();
    assert_eq!(record.comment.as_deref(), Some("N"));
    assert_eq!(record.columns, Some(vec![0x1F8, 0x10, 0x8, 0x1F0]));
    assert!(record.has_character());
}

#[test]
fn test_empty_line_is_blank_record() {
    assert_eq!(parse_line("", size4()).unwrap(), Record::default());
    assert_eq!(parse_line("   ", size4()).unwrap(), Record::default());
}

#[test]
fn test_comment_line_variants() {
    let record = parse_line("// lowercase block", size4()).unwrap();
    assert_eq!(record.comment.as_deref(), Some("lowercase block"));
    assert!(!record.has_character());

    let record = parse_line("   //digits 0-9", size4()).unwrap();
    assert_eq!(record.comment.as_deref(), Some("digits 0-9"));

    let record = parse_line("//", size4()).unwrap();
    assert_eq!(record.comment.as_deref(), Some(""));
}

#[test]
fn test_leading_spaces_before_braces() {
    let record = parse_line("   {1,2,3,4},", size4()).unwrap();
    assert_eq!(record.columns, Some(vec![1, 2, 3, 4]));
}

#[test]
fn test_missing_close_brace_reaches_fail() {
    let err = parse_line("{0x1,0x2", size4()).unwrap_err();
    match err {
        CbFontError::Malformed { line, state, .. } => {
            assert_eq!(line, "{0x1,0x2");
            assert_eq!(state, "ParseCode");
        }
        other => panic!("expected Malformed, got {other:?}"),
    }
}

#[test]
fn test_single_slash_trailing_comment() {
    // The grammar opens a trailing comment on one slash.
    let record = parse_line("{1,2,3,4} / note", size4()).unwrap();
    assert_eq!(record.comment.as_deref(), Some("note"));
}

#[test]
fn test_rejects_text_outside_grammar() {
    assert!(parse_line("int font[] =", size4()).is_err());
    assert!(parse_line("};", size4()).is_err());
    assert!(parse_line("{1,2,3,4}, extra", size4()).is_err());
}

#[test]
fn test_numeric_failures_are_errors_not_zero() {
    for line in ["{}", "{1,,2}", "{0x}", "{0xZZ", "{99999999999}"] {
        let err = parse_line(line, size4()).unwrap_err();
        assert!(err.is_decode_error(), "{line}: {err:?}");
    }
}

#[test]
fn test_column_count_bound_is_enforced() {
    let err = parse_line("{1,2,3,4,5,6}", size4()).unwrap_err();
    assert!(matches!(err, CbFontError::TooManyColumns { max: 4 }));
}

#[test]
fn test_32_bit_values() {
    let size = CellSize::new(32, 2).unwrap();
    let record = parse_line("{0x12345678,0xFFFFFFFF}", size).unwrap();
    assert_eq!(record.columns, Some(vec![0x1234_5678, 0xFFFF_FFFF]));
}
