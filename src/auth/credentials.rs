//! Credential extraction from incoming requests.
//!
//! # Responsibilities
//! - Read the raw `Authorization` header value
//! - Read the session cookie named by configuration
//!
//! # Design Decisions
//! - Accessors are tolerant: absent request, header, name, or cookie all
//!   yield `None` rather than an error
//! - No validation of header contents (no scheme parsing); the gate only
//!   hands candidates to downstream credential checks
//! - Cookie parsing delegated to `axum_extra`'s `CookieJar`

use axum::body::Body;
use axum::http::Request;
use axum_extra::extract::cookie::CookieJar;

/// Returns the raw `Authorization` header value, if present.
///
/// Header lookup is case-insensitive per HTTP semantics.
pub fn authorization_header(request: Option<&Request<Body>>) -> Option<String> {
    request?
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

/// Returns the value of the session cookie named `cookie_name`, if present.
///
/// With no request or no configured cookie name there is nothing to look up.
pub fn session_cookie(request: Option<&Request<Body>>, cookie_name: Option<&str>) -> Option<String> {
    let request = request?;
    let name = cookie_name?;
    let jar = CookieJar::from_headers(request.headers());
    jar.get(name).map(|c| c.value().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_header() {
        let req = Request::builder()
            .uri("/api/v1/users")
            .header("Authorization", "Bearer xyz")
            .body(Body::default())
            .unwrap();
        assert_eq!(
            authorization_header(Some(&req)),
            Some("Bearer xyz".to_string())
        );

        let bare = Request::builder().body(Body::default()).unwrap();
        assert_eq!(authorization_header(Some(&bare)), None);
        assert_eq!(authorization_header(None), None);
    }

    #[test]
    fn test_authorization_header_case_insensitive() {
        let req = Request::builder()
            .header("authorization", "Basic abc")
            .body(Body::default())
            .unwrap();
        assert_eq!(
            authorization_header(Some(&req)),
            Some("Basic abc".to_string())
        );
    }

    #[test]
    fn test_session_cookie() {
        let req = Request::builder()
            .header("Cookie", "_session=deadbeef; theme=dark")
            .body(Body::default())
            .unwrap();
        assert_eq!(
            session_cookie(Some(&req), Some("_session")),
            Some("deadbeef".to_string())
        );
        assert_eq!(session_cookie(Some(&req), Some("other")), None);
    }

    #[test]
    fn test_session_cookie_without_name_or_request() {
        let req = Request::builder()
            .header("Cookie", "_session=deadbeef")
            .body(Body::default())
            .unwrap();
        // No configured name means no lookup, even with cookies present.
        assert_eq!(session_cookie(Some(&req), None), None);
        assert_eq!(session_cookie(None, Some("_session")), None);
    }
}
