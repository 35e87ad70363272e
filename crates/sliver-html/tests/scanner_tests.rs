//! Integration tests for the scanning primitives.

use sliver_html::{Cursor, is_space};

#[test]
fn test_is_space_matches_c_whitespace() {
    for c in [' ', '\t', '\n', '\x0B', '\x0C', '\r'] {
        assert!(is_space(c), "{c:?}");
    }
    for c in ['a', '<', '\0', '\u{a0}', '\u{2003}'] {
        assert!(!is_space(c), "{c:?}");
    }
}

#[test]
fn test_skip_space() {
    let mut cursor = Cursor::new(" \t\r\n x");
    cursor.skip_space();
    assert_eq!(cursor.position(), 5);
    assert_eq!(cursor.peek(), Some('x'));

    // No-op when not at whitespace.
    cursor.skip_space();
    assert_eq!(cursor.position(), 5);
}

#[test]
fn test_skip_space_to_end() {
    let mut cursor = Cursor::new("   ");
    cursor.skip_space();
    assert!(cursor.is_at_end());
    assert_eq!(cursor.peek(), None);
    assert_eq!(cursor.rest(), "");
}

#[test]
fn test_scan_while_captures_run() {
    let mut cursor = Cursor::new("abc123-x>rest");
    let run = cursor.scan_while(|c| c.is_ascii_alphanumeric() || c == '-');
    assert_eq!(run, Some("abc123-x"));
    assert_eq!(cursor.rest(), ">rest");
}

#[test]
fn test_scan_while_empty_run_is_none_and_does_not_move() {
    let mut cursor = Cursor::new(">x");
    assert_eq!(cursor.scan_while(|c| c.is_ascii_alphabetic()), None);
    assert_eq!(cursor.position(), 0);

    let mut empty = Cursor::new("");
    assert_eq!(empty.scan_while(|_| true), None);
}

#[test]
fn test_scan_while_handles_multibyte() {
    let mut cursor = Cursor::new("héllo wörld");
    assert_eq!(cursor.scan_while(|c| !is_space(c)), Some("héllo"));
    cursor.skip_space();
    assert_eq!(cursor.scan_while(|c| !is_space(c)), Some("wörld"));
    assert!(cursor.is_at_end());
}

#[test]
fn test_eat() {
    let mut cursor = Cursor::new("=x");
    assert!(!cursor.eat('x'));
    assert!(cursor.eat('='));
    assert!(cursor.eat('x'));
    assert!(!cursor.eat('x'));
}

#[test]
fn test_starts_with_ignore_ascii_case() {
    let cursor = Cursor::new("<!DocType html>");
    assert!(cursor.starts_with_ignore_ascii_case("<!doctype"));
    assert!(!cursor.starts_with("<!doctype"));
    assert!(!Cursor::new("<!doc").starts_with_ignore_ascii_case("<!doctype"));
}

#[test]
fn test_find_ignore_ascii_case() {
    let cursor = Cursor::new("var a = 1;</SCRIPT>");
    assert_eq!(cursor.find_ignore_ascii_case("</script"), Some(10));
    assert_eq!(cursor.find("</script"), None);
    assert_eq!(Cursor::new("short").find_ignore_ascii_case("longer needle"), None);
}

#[test]
fn test_advance_is_clamped() {
    let mut cursor = Cursor::new("abc");
    cursor.advance(10);
    assert!(cursor.is_at_end());
    assert_eq!(cursor.position(), 3);
}
