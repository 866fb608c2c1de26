use super::*;

// =============================================================
// cookie_value
// =============================================================

#[test]
fn cookie_value_finds_single_cookie() {
    assert_eq!(cookie_value("token=abc123", "token"), Some("abc123"));
}

#[test]
fn cookie_value_finds_cookie_among_others() {
    let cookies = "theme=dark; token=eyJhbGci.payload.sig; lang=en";
    assert_eq!(cookie_value(cookies, "token"), Some("eyJhbGci.payload.sig"));
}

#[test]
fn cookie_value_trims_whitespace_around_pairs() {
    assert_eq!(cookie_value("a=1;  token=abc ; b=2", "token"), Some("abc"));
}

#[test]
fn cookie_value_missing_name_is_none() {
    assert_eq!(cookie_value("theme=dark; lang=en", "token"), None);
    assert_eq!(cookie_value("", "token"), None);
}

#[test]
fn cookie_value_does_not_match_name_prefixes() {
    assert_eq!(cookie_value("tokenx=1; xtoken=2", "token"), None);
}

#[test]
fn cookie_value_keeps_equals_signs_inside_value() {
    assert_eq!(cookie_value("token=a=b=c", "token"), Some("a=b=c"));
}

#[test]
fn cookie_value_empty_value_is_some_empty() {
    // `token()` treats this as no session; the raw parse still reports it.
    assert_eq!(cookie_value("token=", "token"), Some(""));
}

// =============================================================
// cookie serialization
// =============================================================

#[test]
fn set_cookie_string_is_site_scoped() {
    assert_eq!(set_cookie_string("token", "abc"), "token=abc; path=/");
}

#[test]
fn expire_cookie_string_uses_epoch_expiry() {
    let s = expire_cookie_string("token");
    assert!(s.starts_with("token=;"));
    assert!(s.contains("expires=Thu, 01 Jan 1970 00:00:00 GMT"));
}

#[test]
fn expired_cookie_round_trips_as_empty() {
    let s = expire_cookie_string(TOKEN_COOKIE);
    let (pair, _) = s.split_once(';').unwrap();
    assert_eq!(cookie_value(pair, TOKEN_COOKIE), Some(""));
}

// =============================================================
// token (native build has no browser)
// =============================================================

#[test]
fn token_is_none_outside_the_browser() {
    assert_eq!(token(), None);
}
