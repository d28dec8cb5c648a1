use crate::router::handle;
use crate::tests::utils::{
    agent_user, body_string, get, header, post_form, tenant_user, test_app, with_user,
};

#[test]
fn dashboard_requires_agent_session() {
    let app = test_app();

    let resp = handle(get("/dashboard"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 302);
    assert_eq!(header(&resp, "Location"), "/auth?mode=signup&type=agent");

    let resp = handle(with_user(get("/dashboard"), &tenant_user()), &app).expect("Handler failed");
    assert_eq!(resp.status(), 302);
}

#[test]
fn tampered_cookie_is_ignored() {
    let app = test_app();

    let mut req = get("/dashboard");
    req.headers_mut()
        .insert("Cookie", "rentproof_user=forged.value".parse().unwrap());

    let resp = handle(req, &app).expect("Handler failed");
    assert_eq!(resp.status(), 302);
}

#[test]
fn dashboard_shows_configured_agent_stats() {
    let app = test_app();

    let resp = handle(with_user(get("/dashboard"), &agent_user()), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Agent Dashboard"));
    assert!(body.contains("1,247"));
    assert!(body.contains("Event Space in Surulere"));
    assert!(!body.contains("Cozy Studio in Victoria Island"));
}

#[test]
fn valid_draft_is_submitted_for_verification() {
    let app = test_app();

    let form = "title=Garden+Flat&location=12+Admiralty+Way&area=Lekki&type=apartment&price=2%2C400%2C000&period=year&bedrooms=2&description=Quiet&amenities=Parking%2C+Gym";
    let req = with_user(post_form("/dashboard/listings", form), &agent_user());

    let resp = handle(req, &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Property submitted for verification!"));
    assert!(body.contains("Garden Flat"));
}

#[test]
fn invalid_draft_rerenders_dashboard() {
    let app = test_app();

    let req = with_user(post_form("/dashboard/listings", "title=Garden+Flat"), &agent_user());

    let resp = handle(req, &app).expect("Handler failed");
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("Agent Dashboard"));
}

#[test]
fn draft_submission_requires_agent() {
    let app = test_app();

    let resp = handle(post_form("/dashboard/listings", "title=x"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 302);
}

#[test]
fn overflowing_draft_price_is_rejected() {
    let app = test_app();

    let form = "title=Garden+Flat&location=12+Admiralty+Way&area=Lekki&price=18446744073709551615&bedrooms=2&description=Quiet";
    let req = with_user(post_form("/dashboard/listings", form), &agent_user());

    let resp = handle(req, &app).expect("Handler failed");
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("Invalid price"));
}
