use super::*;

// =============================================================
// Wire code mapping
// =============================================================

#[test]
fn from_code_maps_invalid_password() {
    assert_eq!(
        VerifyError::from_code("invalid_password"),
        VerifyError::InvalidPassword
    );
}

#[test]
fn from_code_maps_user_not_found() {
    assert_eq!(
        VerifyError::from_code("user_not_found"),
        VerifyError::UserNotFound
    );
}

#[test]
fn from_code_keeps_unknown_codes_unclassified() {
    assert_eq!(
        VerifyError::from_code("rate_limited"),
        VerifyError::Other("rate_limited".to_owned())
    );
}

// =============================================================
// User-visible messages
// =============================================================

#[test]
fn invalid_password_has_message() {
    assert_eq!(
        VerifyError::InvalidPassword.user_message(),
        Some("Invalid password")
    );
}

#[test]
fn user_not_found_has_message() {
    assert_eq!(
        VerifyError::UserNotFound.user_message(),
        Some("User not found")
    );
}

#[test]
fn unclassified_has_no_message() {
    assert!(
        VerifyError::Other("boom".to_owned())
            .user_message()
            .is_none()
    );
}

// =============================================================
// Display
// =============================================================

#[test]
fn display_includes_detail_for_unclassified() {
    let err = VerifyError::Other("connection reset".to_owned());
    assert_eq!(err.to_string(), "verification failed: connection reset");
}
