use crate::app::App;
use crate::auth::forms::{login_user, signup_user};
use crate::auth::sessions::{clear_cookie_header, set_cookie_header};
use crate::auth::token::generate_reference_default;
use crate::auth::{load_user_from_request, SessionUser, UserKind};
use crate::domain::submission::{BookingRequest, ListingDraft};
use crate::domain::{evaluate, FilterSpec};
use crate::errors::ServerError;
use crate::responses::{
    error_to_response, html_response, html_response_with_status, redirect, redirect_with_cookie,
    ResultResp,
};
use crate::templates::pages::{self, AuthMode, AuthVm, DashboardVm};
use astra::{Request, Response};
use std::collections::HashMap;
use std::io::Read;
use std::time::Instant;

const MAX_FORM_BYTES: u64 = 64 * 1024;
const AGENT_SIGNUP: &str = "/auth?mode=signup&type=agent";

/// Serves one request, turning handler errors into HTML error pages.
pub fn respond(req: Request, app: &App) -> Response {
    let started = Instant::now();
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let user = load_user_from_request(&req, &app.config.cookie_secret);

    let resp = match route(req, app, user.as_ref()) {
        Ok(resp) => resp,
        Err(err) => {
            if err.status() >= 500 {
                log::error!("{method} {path} failed: {err}");
            } else {
                log::warn!("{method} {path} rejected: {err}");
            }
            error_to_response(&err, user.as_ref())
        }
    };

    log::info!(
        "{method} {path} -> {} ({} ms)",
        resp.status().as_u16(),
        started.elapsed().as_millis()
    );
    resp
}

/// Routes without rendering errors, so tests can inspect them.
#[cfg(test)]
pub fn handle(req: Request, app: &App) -> ResultResp {
    let user = load_user_from_request(&req, &app.config.cookie_secret);
    route(req, app, user.as_ref())
}

fn route(mut req: Request, app: &App, user: Option<&SessionUser>) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = parse_query(&req);

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => {
            let featured = app.catalog.featured(app.config.featured_count);
            html_response(pages::landing_page(&app.catalog, &featured, user))
        }
        ("GET", ["listings"]) => {
            let spec = FilterSpec::from_params(&query)?;
            let results = evaluate(app.catalog.listings(), &spec);
            log::debug!("filter {:?} kept {} listings", spec, results.len());
            html_response(pages::listings_page(&app.catalog, &spec, &results, user))
        }
        ("GET", ["property", id]) => {
            let listing = app.catalog.listing(id).ok_or(ServerError::NotFound)?;
            let requested = query
                .get("image")
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(0);
            html_response(pages::property_page(
                listing,
                app.catalog.agent_for(listing),
                listing.image_index(requested),
                user,
            ))
        }
        ("POST", ["property", id, "book"]) => {
            let listing = app.catalog.listing(id).ok_or(ServerError::NotFound)?;
            let form = parse_form(&mut req)?;
            let booking =
                BookingRequest::from_form(&listing.id, &form).map_err(ServerError::BadRequest)?;

            let reference = generate_reference_default();
            log::info!("booking request {reference} for listing {}", listing.id);
            html_response(pages::booking_confirmation_page(
                listing, &booking, &reference, user,
            ))
        }
        ("GET", ["agents"]) => {
            let verified_only = is_truthy(query.get("verified"));
            let agents = app.catalog.filtered_agents(verified_only);
            html_response(pages::agents_page(&agents, verified_only, user))
        }
        ("GET", ["agent", id]) => {
            let agent = app.catalog.agent(id).ok_or(ServerError::NotFound)?;
            let listings: Vec<_> = app.catalog.listings_by_agent(&agent.id).collect();
            html_response(pages::agent_profile_page(agent, &listings, user))
        }
        ("GET", ["auth"]) => {
            let mode = match query.get("mode").map(String::as_str) {
                Some("signup") => AuthMode::Signup,
                _ => AuthMode::Login,
            };
            let kind = query
                .get("type")
                .and_then(|t| UserKind::parse(t))
                .unwrap_or(UserKind::Tenant);
            html_response(pages::auth_page(
                &AuthVm {
                    mode,
                    kind,
                    error: None,
                },
                user,
            ))
        }
        ("POST", ["auth", "login"]) => {
            let form = parse_form(&mut req)?;
            match login_user(&form) {
                Ok(new_user) => {
                    log::info!("login as {}", new_user.email);
                    let cookie = set_cookie_header(&app.config.cookie_secret, &new_user);
                    redirect_with_cookie("/listings", &cookie)
                }
                Err(err) => rejected_auth(AuthMode::Login, UserKind::Tenant, err, user),
            }
        }
        ("POST", ["auth", "signup"]) => {
            let form = parse_form(&mut req)?;
            match signup_user(&form) {
                Ok(new_user) => {
                    log::info!("signup as {:?} {}", new_user.kind, new_user.email);
                    let cookie = set_cookie_header(&app.config.cookie_secret, &new_user);
                    let next = if new_user.is_agent() { "/dashboard" } else { "/listings" };
                    redirect_with_cookie(next, &cookie)
                }
                Err(err) => {
                    let kind = form
                        .get("type")
                        .and_then(|t| UserKind::parse(t))
                        .unwrap_or(UserKind::Tenant);
                    rejected_auth(AuthMode::Signup, kind, err, user)
                }
            }
        }
        ("POST", ["auth", "logout"]) => redirect_with_cookie("/", &clear_cookie_header()),
        ("GET", ["dashboard"]) => match user {
            Some(u) if u.is_agent() => dashboard(app, None, Some(u)),
            _ => redirect(AGENT_SIGNUP),
        },
        ("POST", ["dashboard", "listings"]) => {
            let Some(agent_user) = user.filter(|u| u.is_agent()) else {
                return redirect(AGENT_SIGNUP);
            };
            let form = parse_form(&mut req)?;
            match ListingDraft::from_form(&form) {
                Ok(draft) => {
                    let reference = generate_reference_default();
                    log::info!(
                        "listing draft {reference} submitted by {}: {}",
                        agent_user.email,
                        draft.title
                    );
                    html_response(pages::draft_confirmation_page(&draft, &reference, user))
                }
                Err(msg) => dashboard(app, Some(msg), user),
            }
        }
        ("GET", ["how-it-works"]) => html_response(pages::how_it_works_page(user)),
        _ => Err(ServerError::NotFound),
    }
}

fn dashboard(app: &App, form_error: Option<String>, user: Option<&SessionUser>) -> ResultResp {
    let agent_id = &app.config.dashboard_agent_id;
    let agent = app.catalog.agent(agent_id).ok_or(ServerError::InternalError)?;
    let status = if form_error.is_some() { 400 } else { 200 };

    let vm = DashboardVm {
        agent,
        listings: app.catalog.listings_by_agent(agent_id).collect(),
        form_error,
    };
    html_response_with_status(status, pages::dashboard_page(&vm, user))
}

/// Re-renders the auth form with the validation message instead of an error page.
fn rejected_auth(
    mode: AuthMode,
    kind: UserKind,
    err: ServerError,
    user: Option<&SessionUser>,
) -> ResultResp {
    let message = match &err {
        ServerError::BadRequest(msg) => msg.clone(),
        _ => return Err(err),
    };
    let vm = AuthVm {
        mode,
        kind,
        error: Some(&message),
    };
    html_response_with_status(400, pages::auth_page(&vm, user))
}

fn is_truthy(value: Option<&String>) -> bool {
    matches!(value.map(|v| v.trim()), Some("true" | "on" | "1"))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn parse_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("Unreadable form body: {e}")))?;

    Ok(url::form_urlencoded::parse(&body).into_owned().collect())
}
