use crate::auth::sessions::{decode_session, SESSION_COOKIE};
use crate::auth::UserKind;
use crate::router::handle;
use crate::tests::utils::{body_string, get, header, post_form, test_app, TEST_SECRET};

fn cookie_value(set_cookie: &str) -> String {
    set_cookie
        .split(';')
        .next()
        .and_then(|pair| pair.strip_prefix(&format!("{SESSION_COOKIE}=")))
        .unwrap_or_default()
        .to_string()
}

#[test]
fn auth_page_defaults_to_login() {
    let app = test_app();

    let body = body_string(handle(get("/auth"), &app).expect("Handler failed"));
    assert!(body.contains("/auth/login"));
    assert!(!body.contains("confirm_password"));
}

#[test]
fn agent_signup_link_preselects_agent() {
    let app = test_app();

    let body = body_string(
        handle(get("/auth?mode=signup&type=agent"), &app).expect("Handler failed"),
    );
    assert!(body.contains("confirm_password"));
    assert!(body.contains("Agent accounts require verification"));
}

#[test]
fn login_sets_session_and_redirects_to_listings() {
    let app = test_app();

    let resp = handle(
        post_form("/auth/login", "email=Ada%40Example.com&password=secret"),
        &app,
    )
    .expect("Handler failed");

    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/listings");

    let user = decode_session(TEST_SECRET, &cookie_value(&header(&resp, "Set-Cookie")))
        .expect("cookie should decode");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.kind, UserKind::Tenant);
}

#[test]
fn agent_signup_redirects_to_dashboard() {
    let app = test_app();

    let form = "type=agent&name=Ada+Obi&email=ada%40example.com&phone=0800&password=secret1&confirm_password=secret1";
    let resp = handle(post_form("/auth/signup", form), &app).expect("Handler failed");

    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/dashboard");

    let user = decode_session(TEST_SECRET, &cookie_value(&header(&resp, "Set-Cookie")))
        .expect("cookie should decode");
    assert!(user.is_agent());
}

#[test]
fn mismatched_passwords_rerender_signup() {
    let app = test_app();

    let form = "type=agent&name=Ada&email=ada%40example.com&phone=0800&password=secret1&confirm_password=secret2";
    let resp = handle(post_form("/auth/signup", form), &app).expect("Handler failed");

    assert_eq!(resp.status(), 400);
    assert!(resp.headers().get("Set-Cookie").is_none());

    let body = body_string(resp);
    assert!(body.contains("Passwords do not match"));
    assert!(body.contains("Agent accounts require verification"));
}

#[test]
fn logout_clears_cookie() {
    let app = test_app();

    let resp = handle(post_form("/auth/logout", ""), &app).expect("Handler failed");
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/");
    assert!(header(&resp, "Set-Cookie").contains("Max-Age=0"));
}
