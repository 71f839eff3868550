//! Shared helpers for router tests.

#![allow(dead_code)]

use std::path::Path;

use axum::body::Body;
use axum::http::{Request, Response, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use kontak_axum::{AxumContext, MethodOverride, create_app};
use kontak_db::TestDb;

/// A full application over a fresh in-memory database.
pub struct TestApp {
    pub db: TestDb,
    pub app: MethodOverride,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_static_dir(None).await
    }

    pub async fn with_static_dir(static_dir: Option<&Path>) -> Self {
        let db = TestDb::new().await.expect("test database");
        let app = create_app(AxumContext::new(db.contact_service()), static_dir);
        Self { db, app }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.app.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    /// GET with the given `Cookie` header.
    pub async fn get_with_cookie(&self, uri: &str, cookie: &str) -> Response<Body> {
        self.send(
            Request::builder()
                .uri(uri)
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Submit a urlencoded form the way a browser does.
    pub async fn post_form(&self, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
        self.form("POST", uri, fields).await
    }

    pub async fn form(&self, method: &str, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form_body(fields)))
                .unwrap(),
        )
        .await
    }

    /// Create a contact through the add form, asserting it was accepted.
    pub async fn add(&self, nama: &str, email: &str, nohp: &str) {
        let response = self
            .post_form("/contact", &[("nama", nama), ("email", email), ("nohp", nohp)])
            .await;
        assert_eq!(response.status(), 303, "adding {nama} was rejected");
    }
}

pub fn form_body(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// The `name=value` part of the first `Set-Cookie` header.
pub fn cookie_pair<B>(response: &Response<B>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .next()
        .map(str::to_string)
}
