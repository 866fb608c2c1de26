//! REST API client for the external backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning [`ApiError::Unsupported`] since every endpoint is only
//! meaningful in the browser.
//!
//! SESSION GATING
//! ==============
//! Every gated call reads the session cookie at call time and attaches it as
//! `Authorization: Bearer <token>`. Failures are classified into [`ApiError`]
//! and mapped by [`failure_action`] onto exactly two outcomes: drop the
//! session and return to login, or log and render nothing. There are no
//! retries and no in-flight de-duplication.

#![allow(clippy::unused_async)]

use super::types::{CreateTaskRequest, Credentials, RegisterRequest, Task, Team, User, UserInfo};
#[cfg(feature = "hydrate")]
use super::types::{AuthResponse, TaskResponse, TeamInfoResponse, UsersResponse};

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Backend host. Fixed; the deployment story keeps the API next to the app.
pub const API_BASE: &str = "http://localhost:3005";

/// Failure of an API call, classified for the session policy.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("no session token")]
    NoSession,
    #[error("session rejected by the server ({0})")]
    Unauthorized(u16),
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unsupported,
}

/// Classify a non-success HTTP status.
pub fn status_error(status: u16) -> ApiError {
    match status {
        401 | 403 => ApiError::Unauthorized(status),
        other => ApiError::Status(other),
    }
}

/// What a page should do with a failed gated call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureAction {
    /// The stored session is missing or rejected: clear it and go to login.
    Reauthenticate,
    /// Anything else: log the failure and leave the view empty.
    GiveUp,
}

/// The uniform failure policy for gated calls.
pub fn failure_action(error: &ApiError) -> FailureAction {
    match error {
        ApiError::NoSession | ApiError::Unauthorized(_) => FailureAction::Reauthenticate,
        ApiError::Status(_) | ApiError::Network(_) | ApiError::Decode(_) | ApiError::Unsupported => {
            FailureAction::GiveUp
        }
    }
}

#[cfg(feature = "hydrate")]
fn bearer_header() -> Result<String, ApiError> {
    crate::util::session::token()
        .map(|token| format!("Bearer {token}"))
        .ok_or(ApiError::NoSession)
}

#[cfg(feature = "hydrate")]
async fn get_authed<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = gloo_net::http::Request::get(&format!("{API_BASE}{path}"))
        .header("Authorization", &bearer_header()?)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(status_error(response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn send_authed<B: serde::Serialize>(
    method: gloo_net::http::Method,
    path: &str,
    body: &B,
) -> Result<(), ApiError> {
    let response = gloo_net::http::RequestBuilder::new(&format!("{API_BASE}{path}"))
        .method(method)
        .header("Authorization", &bearer_header()?)
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if response.ok() {
        Ok(())
    } else {
        Err(status_error(response.status()))
    }
}

/// Exchange credentials for a bearer token. Not session-gated.
///
/// # Errors
///
/// Any non-2xx response or network failure; the login form collapses all of
/// them into one user-facing message.
pub async fn login(credentials: &Credentials) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response =
            gloo_net::http::Request::post(&format!("{API_BASE}/api/v1/auth/authenticate"))
                .json(credentials)
                .map_err(|e| ApiError::Decode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(status_error(response.status()));
        }
        let body: AuthResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.access_token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Unsupported)
    }
}

/// Create an account. Not session-gated; success is the backend's 201.
///
/// # Errors
///
/// Any non-2xx response or network failure.
pub async fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = gloo_net::http::Request::post(&format!("{API_BASE}/api/v1/auth/register"))
            .json(request)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if response.ok() {
            Ok(())
        } else {
            Err(status_error(response.status()))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unsupported)
    }
}

/// Fetch the authenticated user's own record.
///
/// # Errors
///
/// [`ApiError`], already classified for [`failure_action`].
pub async fn fetch_user_info() -> Result<UserInfo, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_authed("/api/v1/users/info").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unsupported)
    }
}

/// Fetch the full user listing for assignment pickers.
///
/// # Errors
///
/// [`ApiError`], already classified for [`failure_action`].
pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body: UsersResponse = get_authed("/api/v1/users").await?;
        Ok(body.users)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unsupported)
    }
}

/// Create a task.
///
/// # Errors
///
/// [`ApiError`], already classified for [`failure_action`].
pub async fn create_task(request: &CreateTaskRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_authed(gloo_net::http::Method::POST, "/api/v1/tasks/create", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unsupported)
    }
}

/// Fetch one task by id.
///
/// # Errors
///
/// [`ApiError`], already classified for [`failure_action`].
pub async fn fetch_task(id: &str) -> Result<Task, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body: TaskResponse = get_authed(&format!("/api/v1/tasks/{id}")).await?;
        Ok(body.task)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unsupported)
    }
}

/// Save an edited task. The backend takes the full entity, so a status-only
/// change still travels as one complete update.
///
/// # Errors
///
/// [`ApiError`], already classified for [`failure_action`].
pub async fn update_task(id: &str, task: &Task) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_authed(
            gloo_net::http::Method::PUT,
            &format!("/api/v1/tasks/edit/{id}"),
            task,
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, task);
        Err(ApiError::Unsupported)
    }
}

/// Fetch one team's info by id.
///
/// # Errors
///
/// [`ApiError`], already classified for [`failure_action`].
pub async fn fetch_team(id: &str) -> Result<Team, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body: TeamInfoResponse = get_authed(&format!("/api/v1/teams/info/{id}")).await?;
        Ok(body.team_info)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unsupported)
    }
}
