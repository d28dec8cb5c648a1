// src/auth/forms.rs
use crate::auth::sessions::{SessionUser, UserKind};
use crate::domain::submission::looks_like_email;
use crate::errors::ServerError;
use std::collections::HashMap;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Trim + lowercase, minimal sanity check.
pub fn normalize_email(email: &str) -> Result<String, ServerError> {
    let e = email.trim().to_lowercase();
    if !looks_like_email(&e) {
        return Err(ServerError::BadRequest("Invalid email address".into()));
    }
    Ok(e)
}

fn field<'a>(form: &'a HashMap<String, String>, key: &str) -> &'a str {
    form.get(key).map(String::as_str).unwrap_or("")
}

/// Mock login: any email with a non-empty password signs in as a tenant.
pub fn login_user(form: &HashMap<String, String>) -> Result<SessionUser, ServerError> {
    let email = normalize_email(field(form, "email"))?;
    if field(form, "password").is_empty() {
        return Err(ServerError::BadRequest("Password is required".into()));
    }

    Ok(SessionUser {
        name: None,
        email,
        kind: UserKind::Tenant,
    })
}

/// Mock signup. Checks the confirmation and length of the password, nothing is stored.
pub fn signup_user(form: &HashMap<String, String>) -> Result<SessionUser, ServerError> {
    let name = field(form, "name").trim();
    if name.is_empty() {
        return Err(ServerError::BadRequest("Full name is required".into()));
    }
    let email = normalize_email(field(form, "email"))?;
    if field(form, "phone").trim().is_empty() {
        return Err(ServerError::BadRequest("Phone number is required".into()));
    }

    let password = field(form, "password");
    if password != field(form, "confirm_password") {
        return Err(ServerError::BadRequest("Passwords do not match".into()));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ServerError::BadRequest(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }

    let kind = UserKind::parse(field(form, "type")).unwrap_or(UserKind::Tenant);

    Ok(SessionUser {
        name: Some(name.to_string()),
        email,
        kind,
    })
}
