use super::*;

#[test]
fn empty_query_matches_everything() {
    assert!(matches(&["Ada Lovelace", "ada@sb-gmbh.com"], ""));
    assert!(matches(&[], "   "));
}

#[test]
fn match_is_case_insensitive() {
    assert!(matches(&["Ada Lovelace"], "ADA"));
    assert!(matches(&["ada@SB-GMBH.com"], "sb-gmbh"));
}

#[test]
fn matches_any_field() {
    assert!(matches(&["Ada Lovelace", "ada@sb-gmbh.com"], "gmbh"));
    assert!(!matches(&["Ada Lovelace", "ada@sb-gmbh.com"], "berlin"));
}

#[test]
fn substring_not_prefix_only() {
    assert!(matches(&["Ada Lovelace"], "lace"));
}
