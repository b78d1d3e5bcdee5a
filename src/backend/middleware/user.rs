/**
 * Requesting Identity
 *
 * The chat room has no authentication: clients name themselves in the
 * `user` request header. This module turns that header into a
 * `RequestUser` extractor so handlers do not parse headers themselves.
 */

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;

/// Header carrying the requesting participant's name
pub const USER_HEADER: &str = "user";

/// Identity named by the `user` header
///
/// `None` when the header is absent, empty, or not valid UTF-8. The
/// extractor never rejects; handlers decide what a missing identity means.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestUser(pub Option<String>);

impl RequestUser {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let user = headers
            .get(USER_HEADER)
            .and_then(|h| h.to_str().ok())
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        Self(user)
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for RequestUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}
