use crate::router::{handle, respond};
use crate::tests::utils::{body_string, get, post_form, test_app};

#[test]
fn property_page_shows_details_and_agent() {
    let app = test_app();

    let resp = handle(get("/property/1"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Modern 3-Bedroom Apartment in Lekki Phase 1"));
    assert!(body.contains("₦3.5M"));
    assert!(body.contains("Adebayo Isreal"));
    assert!(body.contains("/property/1/book"));
}

#[test]
fn image_index_wraps_around() {
    let app = test_app();

    // Three images: -1 lands on the last one, whose "next" link is image 0
    let body = body_string(handle(get("/property/1?image=-1"), &app).expect("Handler failed"));
    assert!(body.contains("/property/1?image=1"));
    assert!(body.contains("/property/1?image=0"));

    let resp = handle(get("/property/1?image=abc"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
}

#[test]
fn missing_property_is_not_found() {
    let app = test_app();

    let resp = respond(get("/property/99"), &app);
    assert_eq!(resp.status(), 404);
}

#[test]
fn booking_request_is_confirmed_with_reference() {
    let app = test_app();

    let form = "name=Tunde+Bakare&email=tunde%40example.com&phone=%2B2348000000000&move_in=2026-11-01&message=";
    let resp = handle(post_form("/property/2/book", form), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Booking request submitted!"));
    assert!(body.contains("RP-"));
    assert!(body.contains("Cozy Studio in Victoria Island"));
}

#[test]
fn incomplete_booking_is_rejected() {
    let app = test_app();

    let resp = respond(post_form("/property/2/book", "name=Tunde"), &app);
    assert_eq!(resp.status(), 400);
}
