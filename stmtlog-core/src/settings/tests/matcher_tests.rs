use crate::settings::{DEFAULT_TARGET_STATEMENTS, SettingsError, StatementMatcher};

fn default_matcher() -> StatementMatcher {
    StatementMatcher::compile(&DEFAULT_TARGET_STATEMENTS).unwrap()
}

#[test]
fn matches_keywords_case_insensitively() {
    let matcher = default_matcher();

    assert!(matcher.is_match("INSERT INTO users VALUES ($1, $2)"));
    assert!(matcher.is_match("insert into users values ($1, $2)"));
    assert!(matcher.is_match("Begin"));
    assert!(matcher.is_match("RELEASE SAVEPOINT active_record_1"));
}

#[test]
fn skips_leading_whitespace_including_newlines() {
    let matcher = default_matcher();

    assert!(matcher.is_match("   COMMIT"));
    assert!(matcher.is_match("\n\n  UPDATE users\n  SET name = $1"));
    assert!(matcher.is_match("\t\r\x0B\x0CDELETE FROM users"));
}

#[test]
fn non_ascii_whitespace_is_not_skipped() {
    let matcher = default_matcher();

    assert!(!matcher.is_match("\u{a0}INSERT INTO users VALUES (1)"));
    assert!(!matcher.is_match("\u{2003}COMMIT"));
}

#[test]
fn only_the_start_of_the_text_is_considered() {
    let matcher = default_matcher();

    assert!(!matcher.is_match("SELECT * FROM users"));
    assert!(!matcher.is_match("SELECT 1;\nDELETE FROM users"));
    assert!(!matcher.is_match("-- audit\nDELETE FROM users"));
    assert!(!matcher.is_match("WITH gone AS (DELETE FROM users) SELECT 1"));
}

#[test]
fn keywords_are_prefixes_not_words() {
    let matcher = StatementMatcher::compile(&["update"]).unwrap();

    assert!(matcher.is_match("UPDATED"));
}

#[test]
fn keywords_are_matched_literally() {
    let matcher = StatementMatcher::compile(&["a.c"]).unwrap();

    assert!(matcher.is_match("a.c"));
    assert!(!matcher.is_match("abc"));
}

#[test]
fn empty_keyword_list_matches_nothing() {
    let matcher = StatementMatcher::compile::<&str>(&[]).unwrap();

    assert!(!matcher.is_match("INSERT INTO users VALUES (1)"));
    assert!(!matcher.is_match(""));
}

#[test]
fn blank_keyword_is_rejected() {
    let err = StatementMatcher::compile(&["insert", "  "]).unwrap_err();

    assert!(matches!(err, SettingsError::BlankTargetStatement { index: 1 }));
}
