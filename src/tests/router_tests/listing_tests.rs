use crate::router::{handle, respond};
use crate::tests::utils::{body_string, get, test_app};

#[test]
fn landing_page_shows_featured_verified_listings() {
    let app = test_app();

    let resp = handle(get("/"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Modern 3-Bedroom Apartment in Lekki Phase 1"));
    assert!(body.contains("Cozy Studio in Victoria Island"));
    assert!(!body.contains("2-Bedroom Flat in Yaba"));
}

#[test]
fn unfiltered_listings_show_whole_catalog() {
    let app = test_app();

    let resp = handle(get("/listings"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Showing <strong>6</strong> properties"));
    assert!(body.contains("2-Bedroom Flat in Yaba"));
    assert!(body.contains("Event Space in Surulere"));
}

#[test]
fn price_band_uses_annualized_rent() {
    let app = test_app();

    // Studio is 150k a month, 1.8M a year
    let resp = handle(get("/listings?price=1m-3m"), &app).expect("Handler failed");
    let body = body_string(resp);

    assert!(body.contains("Showing <strong>2</strong> properties"));
    assert!(body.contains("Cozy Studio in Victoria Island"));
    assert!(body.contains("2-Bedroom Flat in Yaba"));
    assert!(!body.contains("Luxury Penthouse in Ikoyi"));
}

#[test]
fn combined_filters_narrow_results() {
    let app = test_app();

    let resp = handle(
        get("/listings?q=bedroom&type=Apartment&verified=true&area=All+Areas"),
        &app,
    )
    .expect("Handler failed");
    let body = body_string(resp);

    assert!(body.contains("Showing <strong>1</strong> properties"));
    assert!(body.contains("Modern 3-Bedroom Apartment in Lekki Phase 1"));
    assert!(!body.contains("2-Bedroom Flat in Yaba"));
}

#[test]
fn area_with_space_is_decoded() {
    let app = test_app();

    let resp = handle(get("/listings?area=Victoria%20Island"), &app).expect("Handler failed");
    let body = body_string(resp);

    assert!(body.contains("Showing <strong>1</strong> properties"));
    assert!(body.contains("Cozy Studio in Victoria Island"));
}

#[test]
fn no_match_renders_empty_state() {
    let app = test_app();

    let resp = handle(get("/listings?q=castle"), &app).expect("Handler failed");
    let body = body_string(resp);

    assert!(body.contains("No properties found"));
}

#[test]
fn unknown_area_is_rejected() {
    let app = test_app();

    let err = handle(get("/listings?area=Atlantis"), &app)
        .err()
        .expect("unknown area should fail");
    assert_eq!(err.status(), 400);

    let resp = respond(get("/listings?area=Atlantis"), &app);
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("Atlantis"));
}

#[test]
fn inverted_price_range_is_rejected() {
    let app = test_app();

    let resp = respond(get("/listings?min=5000000&max=1000000"), &app);
    assert_eq!(resp.status(), 400);
}

#[test]
fn unknown_route_renders_not_found_page() {
    let app = test_app();

    let resp = respond(get("/nowhere"), &app);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("<html"));
}

#[test]
fn how_it_works_page_loads() {
    let app = test_app();

    let resp = handle(get("/how-it-works"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
}

#[test]
fn custom_price_bounds_are_kept_in_the_form() {
    let app = test_app();

    let body = body_string(handle(get("/listings?min=2000000"), &app).expect("Handler failed"));
    assert!(body.contains(r#"name="min" value="2000000""#));
    assert!(body.contains("Showing <strong>4</strong> properties"));

    let body = body_string(
        handle(get("/listings?min=2000000&max=4000000"), &app).expect("Handler failed"),
    );
    assert!(body.contains(r#"name="min" value="2000000""#));
    assert!(body.contains(r#"name="max" value="4000000""#));
}

#[test]
fn preset_band_leaves_custom_inputs_blank() {
    let app = test_app();

    let body = body_string(handle(get("/listings?price=1m-3m"), &app).expect("Handler failed"));
    assert!(!body.contains(r#"name="min" value="#));
    assert!(body.contains(r#"value="1m-3m" selected"#));
}
