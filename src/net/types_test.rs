use super::*;

// =============================================================
// Deserialization
// =============================================================

#[test]
fn user_deserializes_from_api_json() {
    let json = r#"{"id":"7c9e6679-7425-40de-944b-e07fc1f90ae7","email":"ada@example.com","name":"Ada"}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.name, "Ada");
}

#[test]
fn user_profile_deserializes_from_api_json() {
    let json = r#"{"email":"ada@example.com","display_name":"Ada L."}"#;
    let profile: UserProfile = serde_json::from_str(json).unwrap();
    assert_eq!(profile.display_name, "Ada L.");
}

#[test]
fn api_error_body_message_defaults_empty() {
    let body: ApiErrorBody = serde_json::from_str(r#"{"code":"user_not_found"}"#).unwrap();
    assert_eq!(body.code, "user_not_found");
    assert!(body.message.is_empty());
}

// =============================================================
// Serialization
// =============================================================

#[test]
fn login_request_serializes_credentials() {
    let req = LoginRequest {
        email: "ada@example.com",
        password: "hunter2",
    };
    let json = serde_json::to_string(&req).unwrap();
    assert_eq!(json, r#"{"email":"ada@example.com","password":"hunter2"}"#);
}
