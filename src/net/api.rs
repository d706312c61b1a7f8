//! Session helpers for the backend REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning `None` since the session cookie only exists in the
//! browser. Failures degrade to "not signed in" instead of panicking.

#![allow(clippy::unused_async)]

use super::types::User;

/// Fetch the signed-in user from `GET /api/auth/session`.
///
/// Returns `None` when there is no session, the request fails, or we are
/// rendering on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/session")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
