//! Token recognition tests

use crate::template::engine::scan::{self, TokenKind};

#[test]
fn test_placeholder_token() {
    let token = scan::placeholder("{{ nome }} resto").unwrap();
    assert_eq!(token.kind, TokenKind::Placeholder { key: "nome" });
    assert_eq!(token.length, "{{ nome }}".len());
}

#[test]
fn test_if_open_token() {
    let token = scan::if_open("{{#if:tipo|a}}X").unwrap();
    assert_eq!(token.kind, TokenKind::IfOpen { key: "tipo", value: "a" });
    assert_eq!(token.length, 14);
}

#[test]
fn test_if_close_token() {
    let token = scan::if_close("{{ /if }}").unwrap();
    assert_eq!(token.kind, TokenKind::IfClose);
    assert_eq!(token.length, 9);
}

#[test]
fn test_check_and_radio_tokens() {
    assert_eq!(
        scan::check("{{#check:m1}}").unwrap().kind,
        TokenKind::Check { key: "m1" }
    );
    assert_eq!(
        scan::radio("{{#radio:tipo|b}}").unwrap().kind,
        TokenKind::Radio { group: "tipo", value: "b" }
    );
}

#[test]
fn test_rows_token() {
    assert_eq!(scan::rows("{{parcelas_rows}}").unwrap().kind, TokenKind::Rows);
    assert!(scan::rows("{{parcelas_rowsx}}").is_none());
}

#[test]
fn test_recognizers_decline_other_forms() {
    assert!(scan::placeholder("{{#check:a}}").is_none());
    assert!(scan::check("{{#radio:a|b}}").is_none());
    assert!(scan::if_open("{{#if:a}}").is_none());
    assert!(scan::placeholder("{{ a b }}").is_none());
    assert!(scan::placeholder("{x}}").is_none());
}

#[test]
fn test_brace_starts_reports_overlaps() {
    let starts: Vec<usize> = scan::brace_starts("a{{{b").collect();
    assert_eq!(starts, vec![1, 2]);
}

#[test]
fn test_find_if_close() {
    assert_eq!(scan::find_if_close("abc{{/if}}"), Some((3, 7)));
    assert_eq!(scan::find_if_close("{{/ if}}{{ /if }}"), Some((8, 9)));
    assert_eq!(scan::find_if_close("nada"), None);
}
