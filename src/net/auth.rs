//! Credential verification and profile lookup against the auth backend.
//!
//! Pages depend on the [`CredentialVerifier`] and [`ProfileDirectory`]
//! capability traits rather than on the HTTP layer directly, so the submit
//! workflow can be driven by test doubles. [`ApiAuthGateway`] is the real
//! implementation over `gloo-net`.
//!
//! ERROR HANDLING
//! ==============
//! Verification failures are folded into [`VerifyError`]: the two kinds the
//! backend distinguishes for the user, and `Other` for everything else
//! (network failures, malformed responses, unknown codes). `Other` is never
//! shown to the user, only logged.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::fmt;

use crate::net::types::UserProfile;

/// Why a credential verification was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyError {
    /// An account exists for the email but the password does not match.
    InvalidPassword,
    /// No account exists for the email.
    UserNotFound,
    /// Any unclassified failure, with its detail for the log.
    Other(String),
}

impl VerifyError {
    /// Map a wire error code from the auth backend to a failure kind.
    pub fn from_code(code: &str) -> Self {
        match code {
            "invalid_password" => Self::InvalidPassword,
            "user_not_found" => Self::UserNotFound,
            other => Self::Other(other.to_owned()),
        }
    }

    /// The message shown near the submit button, if this kind has one.
    ///
    /// Unclassified failures return `None`: they produce no user-visible
    /// feedback.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::InvalidPassword => Some("Invalid password"),
            Self::UserNotFound => Some("User not found"),
            Self::Other(_) => None,
        }
    }
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPassword => write!(f, "invalid password"),
            Self::UserNotFound => write!(f, "user not found"),
            Self::Other(detail) => write!(f, "verification failed: {detail}"),
        }
    }
}

/// Capability interface over the remote sign-in call.
///
/// Futures here are not `Send`; the crate only runs single-threaded in the
/// browser, and implementations are used through generics, never trait
/// objects.
#[allow(async_fn_in_trait)]
pub trait CredentialVerifier {
    async fn verify(&self, email: &str, password: &str) -> Result<(), VerifyError>;
}

/// Capability interface over the post-login user record lookup.
///
/// The result is only logged; it never gates control flow.
#[allow(async_fn_in_trait)]
pub trait ProfileDirectory {
    async fn lookup(&self, email: &str) -> Option<UserProfile>;
}

/// Gateway to the hosted auth backend over same-origin HTTP.
///
/// Client-side (hydrate): real calls via `gloo-net`. Server-side (SSR):
/// stubs that fail, since these endpoints are only meaningful in the
/// browser. No retry and no timeout are configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApiAuthGateway;

impl CredentialVerifier for ApiAuthGateway {
    async fn verify(&self, email: &str, password: &str) -> Result<(), VerifyError> {
        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::{ApiErrorBody, LoginRequest};

            let resp = gloo_net::http::Request::post("/api/auth/login")
                .json(&LoginRequest { email, password })
                .map_err(|e| VerifyError::Other(e.to_string()))?
                .send()
                .await
                .map_err(|e| VerifyError::Other(e.to_string()))?;
            if resp.ok() {
                return Ok(());
            }
            match resp.json::<ApiErrorBody>().await {
                Ok(body) => Err(VerifyError::from_code(&body.code)),
                Err(e) => Err(VerifyError::Other(e.to_string())),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(VerifyError::Other("not available on server".to_owned()))
        }
    }
}

impl ProfileDirectory for ApiAuthGateway {
    async fn lookup(&self, email: &str) -> Option<UserProfile> {
        #[cfg(feature = "hydrate")]
        {
            let url = format!("/api/users/{email}/profile");
            let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
            if !resp.ok() {
                return None;
            }
            resp.json::<UserProfile>().await.ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email;
            None
        }
    }
}
