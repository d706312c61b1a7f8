use super::*;
use uuid::Uuid;

fn sample_user() -> User {
    User {
        id: Uuid::new_v4(),
        email: "ada@example.com".to_owned(),
        name: "Ada".to_owned(),
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_default_loading() {
    let state = AuthState::default();
    assert!(state.loading);
}

// =============================================================
// Session resolution
// =============================================================

#[test]
fn resolve_with_user_sets_authenticated() {
    let mut state = AuthState::default();
    state.resolve(Some(sample_user()));
    assert!(state.is_authenticated());
    assert!(!state.loading);
}

#[test]
fn resolve_without_user_stops_loading() {
    let mut state = AuthState::default();
    state.resolve(None);
    assert!(!state.is_authenticated());
    assert!(!state.loading);
}
