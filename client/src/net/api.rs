//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so listing and login
//! failures degrade UI behavior without crashing hydration. Mutations
//! distinguish `Unauthorized` so pages can treat a rejected token as a
//! sign-out.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Conference, ConferenceStats, NewConference};
use crate::util::session_store::SessionMarker;

/// Failure of an authenticated admin request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MutationError {
    /// The server rejected the session token (401).
    Unauthorized,
    /// Any other failure, with a displayable message.
    Failed(String),
}

impl std::fmt::Display for MutationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized => f.write_str("session expired"),
            Self::Failed(msg) => f.write_str(msg),
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn conference_endpoint(id: &str) -> String {
    format!("/api/conferences/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    match status {
        401 => "Invalid admin value".to_owned(),
        429 => "Too many attempts. Try again later.".to_owned(),
        _ => format!("login failed: {status}"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn mutation_error_for_status(action: &str, status: u16) -> MutationError {
    if status == 401 {
        MutationError::Unauthorized
    } else {
        MutationError::Failed(format!("{action} failed: {status}"))
    }
}

/// Exchange the admin credential for a session via `POST /api/login`.
///
/// # Errors
///
/// Returns a displayable message when the request fails or the server rejects
/// the credential.
pub async fn login(email: &str, password: &str) -> Result<SessionMarker, String> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::{LoginRequest, LoginResponse};

        let payload = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let resp = gloo_net::http::Request::post("/api/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        let body: LoginResponse = resp.json().await.map_err(|e| e.to_string())?;
        match (body.success, body.token) {
            (true, Some(token)) if !token.is_empty() => {
                Ok(SessionMarker::new(token, body.email.unwrap_or_else(|| email.to_owned())))
            }
            _ => Err(body.message.unwrap_or_else(|| login_failed_message(401))),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Revoke the server-side session via `POST /api/logout`. Best effort.
pub async fn logout(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/logout")
            .header("Authorization", &bearer(token))
            .send()
            .await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Fetch all conferences from `GET /api/conferences`, ordered by name.
///
/// # Errors
///
/// Returns an error string if the request or decoding fails.
pub async fn fetch_conferences() -> Result<Vec<Conference>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/conferences")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("conference list failed: {}", resp.status()));
        }
        resp.json::<Vec<Conference>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch listing aggregates from `GET /api/conferences/stats`.
///
/// # Errors
///
/// Returns an error string if the request or decoding fails.
pub async fn fetch_conference_stats() -> Result<ConferenceStats, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/conferences/stats")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("conference stats failed: {}", resp.status()));
        }
        resp.json::<ConferenceStats>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create a conference via `POST /api/conferences`.
///
/// # Errors
///
/// Returns [`MutationError::Unauthorized`] when the token is rejected, or
/// [`MutationError::Failed`] for any other failure.
pub async fn create_conference(token: &str, draft: &NewConference) -> Result<Conference, MutationError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/conferences")
            .header("Authorization", &bearer(token))
            .json(draft)
            .map_err(|e| MutationError::Failed(e.to_string()))?
            .send()
            .await
            .map_err(|e| MutationError::Failed(e.to_string()))?;
        if !resp.ok() {
            return Err(mutation_error_for_status("create conference", resp.status()));
        }
        resp.json::<Conference>()
            .await
            .map_err(|e| MutationError::Failed(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, draft);
        Err(MutationError::Failed("not available on server".to_owned()))
    }
}

/// Delete a conference via `DELETE /api/conferences/{id}`.
///
/// # Errors
///
/// Returns [`MutationError::Unauthorized`] when the token is rejected, or
/// [`MutationError::Failed`] for any other failure.
pub async fn delete_conference(token: &str, id: &str) -> Result<(), MutationError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&conference_endpoint(id))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| MutationError::Failed(e.to_string()))?;
        if !resp.ok() {
            return Err(mutation_error_for_status("delete conference", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(MutationError::Failed("not available on server".to_owned()))
    }
}
