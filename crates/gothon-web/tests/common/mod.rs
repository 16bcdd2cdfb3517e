//! Shared test helpers for HTTP integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use gothon_core::store::SessionStore;
use gothon_story::content;
use gothon_test_support::RecordingSessionStore;
use http_body_util::BodyExt;
use tower::ServiceExt;

use gothon_web::config::AppConfig;
use gothon_web::state::AppState;

/// Build the full app router over the bundled story and `store`. Uses the
/// same router as `main.rs`.
pub fn build_test_app(store: Arc<dyn SessionStore>) -> Router {
    gothon_web::build_router(AppState::new(
        content::bundled().unwrap(),
        store,
        AppConfig::default(),
    ))
}

/// A fresh recording store, shared between the test and the app.
pub fn recording_store() -> Arc<RecordingSessionStore> {
    Arc::new(RecordingSessionStore::new())
}

/// Status, `Location` header, `Set-Cookie` header and body of a response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub set_cookie: Option<String>,
    pub body: String,
}

impl TestResponse {
    /// The `name=value` pair of the `Set-Cookie` header, ready to be sent
    /// back in a `Cookie` header.
    pub fn cookie(&self) -> String {
        let set_cookie = self.set_cookie.as_deref().expect("no Set-Cookie header");
        set_cookie.split(';').next().unwrap().to_owned()
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let header_value = |name: header::HeaderName| {
        response
            .headers()
            .get(name)
            .map(|value| value.to_str().unwrap().to_owned())
    };
    let location = header_value(header::LOCATION);
    let set_cookie = header_value(header::SET_COOKIE);
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        location,
        set_cookie,
        body: String::from_utf8(body_bytes.to_vec()).unwrap(),
    }
}

/// Send a GET request, with an optional `Cookie` header.
pub async fn get(app: Router, uri: &str, cookie: Option<&str>) -> TestResponse {
    let mut request = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    send(app, request.body(Body::empty()).unwrap()).await
}

/// Send a GET request asking for the JSON room view.
pub async fn get_json(app: Router, uri: &str, cookie: &str) -> TestResponse {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .header(header::ACCEPT, "application/json")
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Send a POST request with an url-encoded form body.
pub async fn post_form(app: Router, uri: &str, cookie: Option<&str>, form: &str) -> TestResponse {
    let mut request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    send(app, request.body(Body::from(form.to_owned())).unwrap()).await
}
