//! Session cookie store.
//!
//! The backend issues an opaque bearer token at login; it lives in a single
//! `token` cookie that is read on every page mount and every gated request,
//! written only at login, and cleared only at logout. There is no client-side
//! expiry check; a stale token surfaces as a rejected API call.
//!
//! Browser access requires the `hydrate` feature. Cookie-string parsing and
//! formatting are plain functions so they can be tested natively.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Name of the cookie holding the bearer token.
pub const TOKEN_COOKIE: &str = "token";

/// Extract a cookie's value from a `document.cookie` string.
///
/// Only the first `=` in each pair separates name from value, so values
/// containing `=` survive.
pub fn cookie_value<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then(|| value.trim())
    })
}

/// Serialize a cookie scoped to the whole site.
pub fn set_cookie_string(name: &str, value: &str) -> String {
    format!("{name}={value}; path=/")
}

/// Serialize an already-expired cookie, which removes it from the browser.
pub fn expire_cookie_string(name: &str) -> String {
    format!("{name}=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT")
}

/// Read the bearer token, if a non-empty session cookie is present.
///
/// Returns `None` on the server, where the cookie is not visible.
pub fn token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        raw_cookies()
            .as_deref()
            .and_then(|cookies| cookie_value(cookies, TOKEN_COOKIE))
            .filter(|value| !value.is_empty())
            .map(str::to_owned)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Store the bearer token issued at login.
pub fn set_token(value: &str) {
    #[cfg(feature = "hydrate")]
    {
        write_cookie(&set_cookie_string(TOKEN_COOKIE, value));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = value;
    }
}

/// Drop the session cookie.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        write_cookie(&expire_cookie_string(TOKEN_COOKIE));
    }
}

#[cfg(feature = "hydrate")]
fn raw_cookies() -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let document: web_sys::HtmlDocument = document.dyn_into().ok()?;
    document.cookie().ok()
}

#[cfg(feature = "hydrate")]
fn write_cookie(serialized: &str) {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Ok(document) = document.dyn_into::<web_sys::HtmlDocument>() {
        let _ = document.set_cookie(serialized);
    }
}
