//! Wire types mirrored from the backend.
//!
//! The backend owns these entities; the client keeps local view copies and
//! never validates or reconciles them. Deserialization is deliberately
//! lenient: unknown fields (`password`, `isAdmin`, `__v`, …) are ignored and
//! a few fields the backend sometimes omits fall back to defaults.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A user as returned by the user listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// A user reference embedded in task assignments and team rosters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRef {
    pub user_id: String,
    pub username: String,
}

impl MemberRef {
    /// Reference a listed user.
    pub fn of(user: &User) -> Self {
        Self {
            user_id: user.id.clone(),
            username: user.username.clone(),
        }
    }
}

/// Task lifecycle status. The set is fixed; transitions are unconstrained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Every status, in the order the status dropdowns list them.
    pub const ALL: [Self; 3] = [Self::NotStarted, Self::InProgress, Self::Completed];

    /// The wire/display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// Parse a label back into a status, e.g. from a `<select>` value.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label() == label)
    }
}

/// A task, including its assignment list.
///
/// Serializing a `Task` reproduces the backend's own shape (`_id`, camelCase
/// keys), which is what the full-entity update endpoint expects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub due_date: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub assigned_to: Vec<MemberRef>,
    #[serde(default)]
    pub team_id: String,
}

/// A team with its roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub admin_id: String,
    #[serde(default)]
    pub members: Vec<MemberRef>,
}

/// Login payload. Empty identifier fields are omitted entirely so the
/// backend can match on whichever one was supplied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub password: String,
}

impl Credentials {
    /// Build the payload from raw form fields.
    pub fn from_form(email: &str, username: &str, password: &str) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_owned());
        Self {
            email: non_empty(email),
            username: non_empty(username),
            password: password.to_owned(),
        }
    }
}

/// Registration payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Task creation payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub assigned_to: Vec<MemberRef>,
    pub team_id: String,
    pub status: TaskStatus,
}

/// Login response envelope.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// User listing envelope.
#[derive(Clone, Debug, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

/// Single-task envelope.
#[derive(Clone, Debug, Deserialize)]
pub struct TaskResponse {
    pub task: Task,
}

/// Team info envelope.
#[derive(Clone, Debug, Deserialize)]
pub struct TeamInfoResponse {
    #[serde(rename = "teamInfo")]
    pub team_info: Team,
}

/// The authenticated user's own record, as shown on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub email: String,
}
