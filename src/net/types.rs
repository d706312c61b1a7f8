//! Serde payloads for the backend REST API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The signed-in user returned by the session endpoint.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

/// A user's profile record, fetched after login for diagnostics.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub email: String,
    pub display_name: String,
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Error body the auth backend returns on a rejected call.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiErrorBody {
    pub code: String,
    #[serde(default)]
    pub message: String,
}
