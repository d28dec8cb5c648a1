use crate::app::App;
use crate::auth::sessions::set_cookie_header;
use crate::auth::{SessionUser, UserKind};
use crate::catalog::Catalog;
use crate::config::AppConfig;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

pub const TEST_SECRET: &str = "test-cookie-secret";

/// App over the embedded catalog with a fixed cookie secret.
pub fn test_app() -> App {
    let config = AppConfig {
        cookie_secret: TEST_SECRET.to_string(),
        ..AppConfig::default()
    };
    let catalog = Catalog::embedded().unwrap_or_else(|e| panic!("Catalog failed to load: {e}"));
    App::new(config, catalog).unwrap_or_else(|e| panic!("App failed to build: {e}"))
}

pub fn get(uri: &str) -> astra::Request {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, form: &str) -> astra::Request {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

pub fn with_user(mut req: astra::Request, user: &SessionUser) -> astra::Request {
    // Set-Cookie value minus attributes is a valid Cookie header
    let header = set_cookie_header(TEST_SECRET, user);
    let pair = header.split(';').next().unwrap_or_default().to_string();
    req.headers_mut().insert("Cookie", pair.parse().unwrap());
    req
}

pub fn agent_user() -> SessionUser {
    SessionUser {
        name: Some("Chioma Adeyemi".into()),
        email: "chioma@example.com".into(),
        kind: UserKind::Agent,
    }
}

pub fn tenant_user() -> SessionUser {
    SessionUser {
        name: None,
        email: "tenant@example.com".into(),
        kind: UserKind::Tenant,
    }
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn header(resp: &Response, name: &str) -> String {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
