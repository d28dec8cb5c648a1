use crate::router::{handle, respond};
use crate::tests::utils::{body_string, get, test_app};

#[test]
fn agents_directory_lists_everyone() {
    let app = test_app();

    let body = body_string(handle(get("/agents"), &app).expect("Handler failed"));
    assert!(body.contains("Showing <strong>3</strong> agents"));
    assert!(body.contains("Emmanuel Adeyemi"));
}

#[test]
fn verified_toggle_hides_unverified_agents() {
    let app = test_app();

    let body = body_string(handle(get("/agents?verified=true"), &app).expect("Handler failed"));
    assert!(body.contains("Showing <strong>2</strong> agents"));
    assert!(!body.contains("Emmanuel Adeyemi"));
}

#[test]
fn agent_profile_lists_their_properties() {
    let app = test_app();

    let body = body_string(handle(get("/agent/2"), &app).expect("Handler failed"));
    assert!(body.contains("Chioma Nwankwo"));
    assert!(body.contains("Cozy Studio in Victoria Island"));
    assert!(body.contains("Luxury Penthouse in Ikoyi"));
    assert!(!body.contains("Event Space in Surulere"));
}

#[test]
fn unknown_agent_is_not_found() {
    let app = test_app();

    assert_eq!(respond(get("/agent/42"), &app).status(), 404);
}
