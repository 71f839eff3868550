//! One-shot feedback messages carried across a redirect.
//!
//! A write handler answers with `303 See Other` plus a short-lived cookie
//! holding the message. The next handler that renders it extracts
//! [`Flash`], shows the message, and returns the same `Flash` as a response
//! part, which expires the cookie. Nothing is held in process memory.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{IntoResponse, IntoResponseParts, Redirect, Response, ResponseParts};
use kontak_core::Feedback;

/// Cookie carrying the pending message.
pub const FLASH_COOKIE: &str = "kontak_flash";

/// Lifetime of an unread message, in seconds.
const FLASH_MAX_AGE: u32 = 60;

const CLEAR_FLASH: &str = "kontak_flash=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax";

/// Redirect to `to`, leaving `feedback` for the next page.
pub fn redirect_with(to: &str, feedback: Feedback) -> Response {
    let cookie = format!(
        "{FLASH_COOKIE}={}; Path=/; Max-Age={FLASH_MAX_AGE}; HttpOnly; SameSite=Lax",
        urlencoding::encode(feedback.message())
    );
    match HeaderValue::from_str(&cookie) {
        Ok(value) => ([(header::SET_COOKIE, value)], Redirect::to(to)).into_response(),
        // Percent-encoding leaves only visible ASCII, so this arm is not expected
        Err(_) => Redirect::to(to).into_response(),
    }
}

/// The pending message, if the request carried one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flash(Option<String>);

impl Flash {
    pub fn message(&self) -> Option<&str> {
        self.0.as_deref()
    }

    fn from_headers(headers: &HeaderMap) -> Self {
        let message = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|cookies| cookies.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == FLASH_COOKIE)
            .and_then(|(_, value)| urlencoding::decode(value).ok())
            .map(|decoded| decoded.into_owned())
            .filter(|decoded| !decoded.is_empty());
        Self(message)
    }
}

impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

/// Returning the extracted `Flash` consumes it: the cookie is expired.
impl IntoResponseParts for Flash {
    type Error = Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        if self.0.is_some() {
            res.headers_mut()
                .append(header::SET_COOKIE, HeaderValue::from_static(CLEAR_FLASH));
        }
        Ok(res)
    }
}
