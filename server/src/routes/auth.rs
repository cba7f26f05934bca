//! Auth routes: admin login, logout, and the bearer-session extractor.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRef, FromRequestParts, State};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

pub(crate) const INVALID_CREDENTIAL_MESSAGE: &str = "Invalid admin value";
pub(crate) const TOO_MANY_ATTEMPTS_MESSAGE: &str = "Too many attempts. Try again later.";
const UNKNOWN_CLIENT: &str = "unknown";

// =============================================================================
// EXTRACTORS
// =============================================================================

/// Admin identity behind a live bearer token.
/// Use as a handler parameter to require an admin session.
pub struct AdminSession {
    pub email: String,
    pub token: String,
}

impl<S> FromRequestParts<S> for AdminSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| StatusCode::UNAUTHORIZED)?;
        let token = bearer.token();

        let app_state = AppState::from_ref(state);
        let identity = app_state
            .sessions
            .validate(token)
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { email: identity.email, token: token.to_owned() })
    }
}

/// Rate-limit key for the caller: the peer address, else `"unknown"`.
/// The first `X-Forwarded-For` hop wins only when the deployment trusts it.
pub struct ClientKey(pub String);

pub(crate) fn client_key(parts: &Parts, trust_forwarded_for: bool) -> String {
    if trust_forwarded_for {
        let forwarded = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty());
        if let Some(hop) = forwarded {
            return hop.to_owned();
        }
    }
    parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map_or_else(|| UNKNOWN_CLIENT.to_owned(), |ConnectInfo(addr)| addr.ip().to_string())
}

impl<S> FromRequestParts<S> for ClientKey
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let trusted = AppState::from_ref(state).trust_forwarded_for;
        Ok(Self(client_key(parts, trusted)))
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct LoginBody {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginReply {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

impl LoginReply {
    fn failure(message: &'static str) -> Self {
        Self { success: false, token: None, email: None, message: Some(message) }
    }
}

/// `POST /api/login`: check the admin value and issue a session token.
pub async fn login(
    State(state): State<AppState>,
    ClientKey(client): ClientKey,
    Json(body): Json<LoginBody>,
) -> Response {
    if let Err(e) = state.login_limiter.check_and_record(&client) {
        tracing::warn!(%client, error = %e, "admin login throttled");
        return (StatusCode::TOO_MANY_REQUESTS, Json(LoginReply::failure(TOO_MANY_ATTEMPTS_MESSAGE))).into_response();
    }

    if !state.credentials.check(&body.password) {
        tracing::info!(%client, "admin login rejected");
        return (StatusCode::UNAUTHORIZED, Json(LoginReply::failure(INVALID_CREDENTIAL_MESSAGE))).into_response();
    }

    let email = body.email.trim().to_owned();
    let token = state.sessions.issue(&email);
    tracing::info!(%client, %email, "admin login accepted");
    Json(LoginReply { success: true, token: Some(token), email: Some(email), message: None }).into_response()
}

/// `POST /api/logout`: revoke the bearer token, if any.
pub async fn logout(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
) -> StatusCode {
    if let Some(TypedHeader(Authorization(bearer))) = bearer {
        if state.sessions.revoke(bearer.token()) {
            tracing::info!("admin session revoked");
        }
    }
    StatusCode::NO_CONTENT
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
