#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and whether the initial
/// session check is still in flight.
///
/// Provided via context; `loading` starts `true` so pages do not bounce to
/// the login page before the session check has settled.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// Apply the outcome of the session check.
    pub fn resolve(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
