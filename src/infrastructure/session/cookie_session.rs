//! Session flag carried in the request `Cookie` header.

use axum::http::{HeaderMap, header::COOKIE};

use crate::domain::session::{SESSION_KEY, SessionState, is_present_value};

/// Session presence flag read from the `user` cookie of one request.
///
/// # Cookie Format
///
/// ```text
/// Cookie: user=<any non-empty value>
/// ```
///
/// Multiple `Cookie` headers and multiple cookies per header are accepted;
/// the first `user` entry wins. A value wrapped in one pair of double
/// quotes is unquoted, so `user=""` is an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieSession {
    value: Option<String>,
}

impl CookieSession {
    /// Extracts the flag from request headers.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let value = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|header| header.to_str().ok())
            .find_map(|cookie_str| {
                cookie_str.split(';').find_map(|cookie| {
                    let mut parts = cookie.trim().splitn(2, '=');
                    match (parts.next(), parts.next()) {
                        (Some(SESSION_KEY), Some(value)) => Some(unquote(value).to_string()),
                        _ => None,
                    }
                })
            });

        Self { value }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// Strips one pair of surrounding double quotes from a cookie value.
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

impl SessionState for CookieSession {
    fn is_present(&self) -> bool {
        is_present_value(self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(cookies: &[&str]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for cookie in cookies {
            map.append(COOKIE, HeaderValue::from_str(cookie).unwrap());
        }
        map
    }

    #[test]
    fn test_missing_cookie_header() {
        let session = CookieSession::from_headers(&HeaderMap::new());
        assert!(!session.is_present());
        assert_eq!(session.value(), None);
    }

    #[test]
    fn test_user_cookie_present() {
        let session = CookieSession::from_headers(&headers(&["user=alice"]));
        assert!(session.is_present());
        assert_eq!(session.value(), Some("alice"));
    }

    #[test]
    fn test_other_cookies_only() {
        let session = CookieSession::from_headers(&headers(&["theme=dark; username=bob"]));
        assert!(!session.is_present());
    }

    #[test]
    fn test_user_among_several_cookies() {
        let session = CookieSession::from_headers(&headers(&["theme=dark; user=alice; lang=en"]));
        assert_eq!(session.value(), Some("alice"));
    }

    #[test]
    fn test_user_in_second_header() {
        let session = CookieSession::from_headers(&headers(&["theme=dark", "user=carol"]));
        assert_eq!(session.value(), Some("carol"));
    }

    #[test]
    fn test_empty_value_is_absent() {
        let session = CookieSession::from_headers(&headers(&["user="]));
        assert_eq!(session.value(), Some(""));
        assert!(!session.is_present());
    }

    #[test]
    fn test_quoted_empty_value_is_absent() {
        let session = CookieSession::from_headers(&headers(&["user=\"\""]));
        assert_eq!(session.value(), Some(""));
        assert!(!session.is_present());
    }

    #[test]
    fn test_quoted_value_is_unquoted() {
        let session = CookieSession::from_headers(&headers(&["user=\"alice\""]));
        assert_eq!(session.value(), Some("alice"));
        assert!(session.is_present());
    }

    #[test]
    fn test_lone_quote_is_kept() {
        let session = CookieSession::from_headers(&headers(&["user=\""]));
        assert_eq!(session.value(), Some("\""));
        assert!(session.is_present());
    }

    #[test]
    fn test_value_with_equals_sign() {
        let session = CookieSession::from_headers(&headers(&["user=eyJpZCI6MX0="]));
        assert_eq!(session.value(), Some("eyJpZCI6MX0="));
        assert!(session.is_present());
    }

    #[test]
    fn test_key_without_value_is_ignored() {
        let session = CookieSession::from_headers(&headers(&["user"]));
        assert!(!session.is_present());
    }
}
