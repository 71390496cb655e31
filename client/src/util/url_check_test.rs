use super::*;

// =============================================================
// is_valid_url
// =============================================================

#[test]
fn accepts_absolute_http_urls() {
    assert!(is_valid_url("https://example.com/item"));
    assert!(is_valid_url("http://shop.test/p?id=4"));
    assert!(is_valid_url("https://img/x.png"));
}

#[test]
fn rejects_strings_without_scheme() {
    assert!(!is_valid_url("not a url"));
    assert!(!is_valid_url("example.com/item"));
    assert!(!is_valid_url("/relative/path"));
    assert!(!is_valid_url(""));
}

#[test]
fn rejects_scheme_without_host() {
    assert!(!is_valid_url("mailto:someone@example.com"));
    assert!(!is_valid_url("data:text/plain,hello"));
}

#[test]
fn trims_surrounding_whitespace() {
    assert!(is_valid_url("  https://example.com/item  "));
}

// =============================================================
// EntryParams
// =============================================================

#[test]
fn from_query_reads_code() {
    let params = EntryParams::from_query("?code=abc123&state=xyz");
    assert_eq!(params.code.as_deref(), Some("abc123"));
    assert_eq!(params.error, None);
}

#[test]
fn from_query_reads_error_without_leading_question_mark() {
    let params = EntryParams::from_query("error=access_denied");
    assert_eq!(params.error.as_deref(), Some("access_denied"));
    assert_eq!(params.code, None);
}

#[test]
fn from_query_decodes_percent_escapes() {
    let params = EntryParams::from_query("?error=user%20cancelled");
    assert_eq!(params.error.as_deref(), Some("user cancelled"));
}

#[test]
fn from_query_treats_empty_values_as_absent() {
    assert_eq!(EntryParams::from_query("?code=&error="), EntryParams::default());
}

#[test]
fn from_query_keeps_first_occurrence() {
    let params = EntryParams::from_query("?code=first&code=second");
    assert_eq!(params.code.as_deref(), Some("first"));
}

#[test]
fn from_query_empty_string_has_nothing() {
    assert_eq!(EntryParams::from_query(""), EntryParams::default());
}
