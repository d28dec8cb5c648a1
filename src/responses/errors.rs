use crate::auth::SessionUser;
use crate::errors::ServerError;
use crate::templates::pages::error_page;
use astra::{Body, Response, ResponseBuilder};

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a proper HTML response page
pub fn error_to_response(err: &ServerError, user: Option<&SessionUser>) -> Response {
    let status = err.status();
    let message = match err {
        ServerError::NotFound => "We couldn't find the page you were looking for.".to_string(),
        ServerError::BadRequest(msg) => msg.clone(),
        ServerError::InternalError => "Something went wrong on our side.".to_string(),
    };

    let body = error_page(status, &message, user).into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
