//!
//! Cookies used to keep user logged in between requests
//!

use axum::http::{header::COOKIE, HeaderMap};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use rand::{thread_rng, RngCore};

pub const SESSION_COOKIE: &str = "ticket_issuer_session";
pub const NONCE_COOKIE: &str = "ticket_issuer_nonce";
pub const RETURN_TO_COOKIE: &str = "ticket_issuer_return_to";

/// Seconds user has to finish login at the identity provider
const NONCE_MAX_AGE: u32 = 600;

pub fn generate_nonce() -> String {
    let mut nonce = [0u8; 32];
    thread_rng().fill_bytes(&mut nonce);
    URL_SAFE_NO_PAD.encode(nonce)
}

pub fn create_session_cookie(id_token: &str) -> String {
    format!("{SESSION_COOKIE}={id_token}; HttpOnly; Secure; SameSite=Lax; Path=/")
}

///
/// Identity provider posts login result from its own origin,
/// so the cookie has to be sent with cross-site requests.
///
pub fn create_nonce_cookie(nonce: &str) -> String {
    format!("{NONCE_COOKIE}={nonce}; HttpOnly; Secure; SameSite=None; Path=/; Max-Age={NONCE_MAX_AGE}")
}

///
/// Remembers path the user asked for before login.
/// Value is encoded because path and query may contain `;`.
///
pub fn create_return_to_cookie(path: &str) -> String {
    let path = URL_SAFE_NO_PAD.encode(path);
    format!("{RETURN_TO_COOKIE}={path}; HttpOnly; Secure; SameSite=None; Path=/; Max-Age={NONCE_MAX_AGE}")
}

///
/// Path remembered by [create_return_to_cookie].
/// Only local absolute paths are returned.
///
pub fn find_return_to(headers: &HeaderMap) -> Option<String> {
    let path = find_cookie(headers, RETURN_TO_COOKIE)?;
    let path = URL_SAFE_NO_PAD.decode(path).ok()?;
    let path = String::from_utf8(path).ok()?;

    let is_local = path.starts_with('/') && !path.starts_with("//") && !path.contains('\\');
    is_local.then_some(path)
}

pub fn create_expired_cookie(name: &str) -> String {
    format!("{name}=; HttpOnly; Secure; Path=/; Max-Age=0")
}

pub fn find_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|header| header.to_str().ok())
        .flat_map(|header| header.split(';'))
        .find_map(|cookie| {
            let (cookie_name, value) = cookie.trim().split_once('=')?;
            (cookie_name == name && !value.is_empty()).then_some(value)
        })
}

#[cfg(test)]
mod test {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn generate_nonce_unique() {
        let nonce_1 = generate_nonce();
        let nonce_2 = generate_nonce();

        assert_ne!(nonce_1, nonce_2);
        assert_eq!(nonce_1.len(), 43);
    }

    #[test]
    fn find_cookie_among_many() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; ticket_issuer_session=abc.def.ghi; lang=hr"),
        );

        let cookie = find_cookie(&headers, SESSION_COOKIE);

        assert_eq!(cookie, Some("abc.def.ghi"));
    }

    #[test]
    fn find_cookie_in_second_header() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(COOKIE, HeaderValue::from_static("ticket_issuer_nonce=n0nce"));

        let cookie = find_cookie(&headers, NONCE_COOKIE);

        assert_eq!(cookie, Some("n0nce"));
    }

    #[test]
    fn find_cookie_empty_value() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("ticket_issuer_session="));

        let cookie = find_cookie(&headers, SESSION_COOKIE);

        assert_eq!(cookie, None);
    }

    #[test]
    fn find_cookie_missing() {
        let headers = HeaderMap::new();

        let cookie = find_cookie(&headers, SESSION_COOKIE);

        assert_eq!(cookie, None);
    }

    fn return_to_headers(cookie: &str) -> HeaderMap {
        let value = cookie.split(';').next().unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::try_from(value).unwrap());
        headers
    }

    #[test]
    fn return_to_path_with_query() {
        let cookie = create_return_to_cookie("/ticket/42?lang=hr;x=1");

        let path = find_return_to(&return_to_headers(&cookie));

        assert_eq!(path.as_deref(), Some("/ticket/42?lang=hr;x=1"));
    }

    #[test]
    fn return_to_rejects_other_origin() {
        for path in ["//evil.example.com/", "https://evil.example.com/", "/\\evil.example.com"] {
            let cookie = create_return_to_cookie(path);

            let found = find_return_to(&return_to_headers(&cookie));

            assert_eq!(found, None, "{path}");
        }
    }

    #[test]
    fn return_to_not_encoded() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("ticket_issuer_return_to=/ticket/42"),
        );

        assert_eq!(find_return_to(&headers), None);
    }

    #[test]
    fn expired_cookie_removes_value() {
        let cookie = create_expired_cookie(SESSION_COOKIE);

        assert!(cookie.starts_with("ticket_issuer_session=;"));
        assert!(cookie.contains("Max-Age=0"));
    }
}
