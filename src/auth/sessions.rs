// src/auth/sessions.rs
use crate::auth::token::{base64_url_nopad, decode_base64_url, keyed_digest, tags_match};
use astra::Request;
use serde::{Deserialize, Serialize};

pub const SESSION_COOKIE: &str = "rentproof_user";
const SESSION_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 7; // 7 days

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserKind {
    Tenant,
    Agent,
}

impl UserKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "tenant" => Some(UserKind::Tenant),
            "agent" => Some(UserKind::Agent),
            _ => None,
        }
    }
}

/// Who the browser says it is. Nothing here is verified against a user store;
/// the tag only proves this server issued the cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    pub email: String,
    pub kind: UserKind,
}

impl SessionUser {
    pub fn is_agent(&self) -> bool {
        self.kind == UserKind::Agent
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// Cookie value: `<base64 json>.<base64 tag>`.
pub fn encode_session(secret: &str, user: &SessionUser) -> String {
    // SessionUser only holds strings and a unit enum, so serialization can't fail.
    let json = serde_json::to_vec(user).unwrap_or_default();
    let payload = base64_url_nopad(&json);
    let tag = base64_url_nopad(&keyed_digest(secret, &payload));
    format!("{payload}.{tag}")
}

/// Returns the user if the value is well formed and carries our tag.
pub fn decode_session(secret: &str, value: &str) -> Option<SessionUser> {
    let (payload, tag) = value.split_once('.')?;
    let tag = decode_base64_url(tag)?;

    if !tags_match(&keyed_digest(secret, payload), &tag) {
        return None;
    }

    let json = decode_base64_url(payload)?;
    serde_json::from_slice(&json).ok()
}

/// Looks the session cookie up in the request's `Cookie` headers.
pub fn load_user_from_request(req: &Request, secret: &str) -> Option<SessionUser> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| decode_session(secret, value))
}

pub fn set_cookie_header(secret: &str, user: &SessionUser) -> String {
    format!(
        "{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={SESSION_MAX_AGE_SECS}",
        encode_session(secret, user)
    )
}

pub fn clear_cookie_header() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
