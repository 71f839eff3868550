//! `_method` override for HTML forms.
//!
//! Browsers only submit forms as GET or POST. A POST whose query string
//! carries `_method=PUT` (or DELETE, PATCH) is rewritten to that method.
//! This must run before routing, so it wraps the finished `Router` rather
//! than being added with `Router::layer`.

use axum::Router;
use axum::extract::Request;
use axum::http::Method;
use tower::Layer;
use tower::util::{MapRequest, MapRequestLayer};

/// Query parameter naming the intended method.
pub const METHOD_PARAM: &str = "_method";

/// A router wrapped with the method override.
pub type MethodOverride = MapRequest<Router, fn(Request) -> Request>;

/// Wrap `router` so overridden POSTs reach the PUT/DELETE routes.
pub fn with_method_override(router: Router) -> MethodOverride {
    MapRequestLayer::new(override_method as fn(Request) -> Request).layer(router)
}

/// Rewrite the method of a POST that asks for another one.
pub fn override_method(mut req: Request) -> Request {
    if req.method() != Method::POST {
        return req;
    }

    let requested = req.uri().query().and_then(|query| {
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == METHOD_PARAM)
            .map(|(_, value)| value.to_ascii_uppercase())
    });

    let method = match requested.as_deref() {
        Some("PUT") => Method::PUT,
        Some("DELETE") => Method::DELETE,
        Some("PATCH") => Method::PATCH,
        _ => return req,
    };

    tracing::debug!(path = %req.uri().path(), %method, "Method override");
    *req.method_mut() = method;
    req
}
