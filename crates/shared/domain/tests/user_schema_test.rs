//! User schema validation tests.

use serde_json::{json, Value};

use domain::{
    PasswordPolicy, PasswordUpdateRequest, RawInput, Schema, UserCreateRequest, UserLoginRequest,
    UserUpdateRequest, ViolationKind, Violations, PASSWORD_MATCH_PATH,
};

fn raw(value: Value) -> RawInput {
    value.as_object().cloned().expect("test input must be an object")
}

fn valid_user_create_data() -> Value {
    json!({
        "first_name": "John",
        "last_name": "Doe",
        "email": "john.doe@example.com",
        "username": "johndoe",
        "password": "SecurePass123!",
        "confirm_password": "SecurePass123!"
    })
}

fn create_with_password(password: &str) -> Result<UserCreateRequest, Violations> {
    let mut data = valid_user_create_data();
    data["password"] = json!(password);
    data["confirm_password"] = json!(password);
    UserCreateRequest::validate(&raw(data))
}

fn messages(violations: &Violations) -> String {
    violations
        .iter()
        .map(|v| v.message.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

// =============================================================================
// UserCreateRequest
// =============================================================================

#[test]
fn test_user_create_valid() {
    let user = UserCreateRequest::validate(&raw(valid_user_create_data())).unwrap();
    assert_eq!(user.username, "johndoe");
    assert_eq!(user.email, "john.doe@example.com");
    assert_eq!(user.first_name, "John");
    assert_eq!(user.last_name, "Doe");
    assert_eq!(user.password, "SecurePass123!");
    assert_eq!(user.confirm_password, "SecurePass123!");
}

#[test]
fn test_user_create_with_special_characters() {
    let user = create_with_password("P@ssw0rd#2024!").unwrap();
    assert_eq!(user.password, "P@ssw0rd#2024!");
}

#[test]
fn test_user_create_password_mismatch() {
    let mut data = valid_user_create_data();
    data["confirm_password"] = json!("DifferentPass123!");
    let violations = UserCreateRequest::validate(&raw(data)).unwrap_err();
    assert!(violations.contains(PASSWORD_MATCH_PATH, ViolationKind::CrossFieldViolation));
    assert!(messages(&violations).contains("Passwords do not match"));
}

#[test]
fn test_user_create_mismatch_between_strong_passwords() {
    let mut data = valid_user_create_data();
    data["password"] = json!("A1!aaaaa");
    data["confirm_password"] = json!("B1!bbbbb");
    let violations = UserCreateRequest::validate(&raw(data)).unwrap_err();
    assert_eq!(violations.len(), 1);
    assert!(violations.contains(PASSWORD_MATCH_PATH, ViolationKind::CrossFieldViolation));
}

#[test]
fn test_user_create_password_too_short() {
    let violations = create_with_password("Pass1!").unwrap_err();
    assert!(violations.contains("password", ViolationKind::PasswordPolicyViolation));
    assert!(messages(&violations)
        .to_lowercase()
        .contains("at least 8 characters"));
}

#[test]
fn test_user_create_password_no_uppercase() {
    let violations = create_with_password("securepass123!").unwrap_err();
    assert!(messages(&violations).contains("at least one uppercase letter"));
}

#[test]
fn test_user_create_password_no_lowercase() {
    let violations = create_with_password("SECUREPASS123!").unwrap_err();
    assert!(messages(&violations).contains("at least one lowercase letter"));
}

#[test]
fn test_user_create_password_no_digit() {
    let violations = create_with_password("SecurePass!").unwrap_err();
    assert!(messages(&violations).contains("at least one digit"));
}

#[test]
fn test_user_create_password_no_special_char() {
    let violations = create_with_password("SecurePass123").unwrap_err();
    assert!(messages(&violations).contains("at least one special character"));
}

#[test]
fn test_user_create_password_multiple_failures_reports_first() {
    // No uppercase, no digit, no special character
    let violations = create_with_password("password").unwrap_err();
    assert_eq!(violations.len(), 1);
    assert!(messages(&violations).contains("uppercase"));
}

#[test]
fn test_user_create_password_all_failures_when_configured() {
    let mut data = valid_user_create_data();
    data["password"] = json!("password");
    data["confirm_password"] = json!("password");
    let policy = PasswordPolicy::default().with_report_all_violations(true);
    let violations = UserCreateRequest::validate_with(&raw(data), &policy).unwrap_err();
    let text = messages(&violations);
    assert_eq!(violations.for_field("password").count(), 3);
    assert!(text.contains("uppercase"));
    assert!(text.contains("digit"));
    assert!(text.contains("special character"));
}

#[test]
fn test_user_create_missing_username() {
    let mut data = valid_user_create_data();
    data.as_object_mut().unwrap().remove("username");
    let violations = UserCreateRequest::validate(&raw(data)).unwrap_err();
    assert!(violations.contains("username", ViolationKind::MissingField));
    assert!(messages(&violations).to_lowercase().contains("required"));
}

#[test]
fn test_user_create_missing_email() {
    let mut data = valid_user_create_data();
    data.as_object_mut().unwrap().remove("email");
    let violations = UserCreateRequest::validate(&raw(data)).unwrap_err();
    assert!(violations.contains("email", ViolationKind::MissingField));
}

#[test]
fn test_user_create_missing_fields_reported_together() {
    let mut data = valid_user_create_data();
    let object = data.as_object_mut().unwrap();
    object.remove("username");
    object.remove("email");
    let violations = UserCreateRequest::validate(&raw(data)).unwrap_err();
    assert_eq!(violations.len(), 2);
    assert!(violations.contains("username", ViolationKind::MissingField));
    assert!(violations.contains("email", ViolationKind::MissingField));
}

#[test]
fn test_user_create_every_required_field() {
    for field in [
        "first_name",
        "last_name",
        "email",
        "username",
        "password",
        "confirm_password",
    ] {
        let mut data = valid_user_create_data();
        data.as_object_mut().unwrap().remove(field);
        let violations = UserCreateRequest::validate(&raw(data)).unwrap_err();
        assert!(
            violations.contains(field, ViolationKind::MissingField),
            "expected {} to be reported missing",
            field
        );
    }
}

#[test]
fn test_user_create_empty_name_rejected() {
    let mut data = valid_user_create_data();
    data["first_name"] = json!("");
    let violations = UserCreateRequest::validate(&raw(data)).unwrap_err();
    assert!(violations.contains("first_name", ViolationKind::FormatViolation));
}

#[test]
fn test_user_create_invalid_email() {
    let mut data = valid_user_create_data();
    data["email"] = json!("not-an-email");
    let violations = UserCreateRequest::validate(&raw(data)).unwrap_err();
    assert!(violations.contains("email", ViolationKind::FormatViolation));
    assert!(messages(&violations).to_lowercase().contains("email"));
}

#[test]
fn test_user_create_email_without_dotted_domain() {
    let mut data = valid_user_create_data();
    data["email"] = json!("user@localhost");
    let violations = UserCreateRequest::validate(&raw(data)).unwrap_err();
    assert_eq!(violations.len(), 1);
    assert!(violations.contains("email", ViolationKind::FormatViolation));
}

#[test]
fn test_user_create_wrong_type() {
    let mut data = valid_user_create_data();
    data["username"] = json!(12345);
    let violations = UserCreateRequest::validate(&raw(data)).unwrap_err();
    assert!(violations.contains("username", ViolationKind::FormatViolation));
}

#[test]
fn test_user_create_username_too_short() {
    let mut data = valid_user_create_data();
    data["username"] = json!("ab");
    let violations = UserCreateRequest::validate(&raw(data)).unwrap_err();
    assert!(messages(&violations)
        .to_lowercase()
        .contains("at least 3 characters"));
}

#[test]
fn test_user_create_username_too_long() {
    let mut data = valid_user_create_data();
    data["username"] = json!("a".repeat(51));
    let violations = UserCreateRequest::validate(&raw(data)).unwrap_err();
    assert!(messages(&violations).contains("at most 50 characters"));
}

#[test]
fn test_user_create_username_bounds_inclusive() {
    for username in ["abc".to_string(), "a".repeat(50)] {
        let mut data = valid_user_create_data();
        data["username"] = json!(username.clone());
        let user = UserCreateRequest::validate(&raw(data)).unwrap();
        assert_eq!(user.username, username);
    }
}

#[test]
fn test_user_create_cross_field_waits_for_field_rules() {
    let mut data = valid_user_create_data();
    data["password"] = json!("weak");
    data["confirm_password"] = json!("different");
    let violations = UserCreateRequest::validate(&raw(data)).unwrap_err();
    assert_eq!(violations.len(), 1);
    assert!(violations.contains("password", ViolationKind::PasswordPolicyViolation));
}

#[test]
fn test_user_create_via_serde() {
    let user: UserCreateRequest = serde_json::from_value(valid_user_create_data()).unwrap();
    assert_eq!(user.username, "johndoe");

    let mut data = valid_user_create_data();
    data["confirm_password"] = json!("DifferentPass123!");
    let err = serde_json::from_value::<UserCreateRequest>(data).unwrap_err();
    assert!(err.to_string().contains("Passwords do not match"));
}

#[test]
fn test_validation_is_idempotent() {
    let input = raw(valid_user_create_data());
    assert_eq!(
        UserCreateRequest::validate(&input).unwrap(),
        UserCreateRequest::validate(&input).unwrap()
    );

    let mut data = valid_user_create_data();
    data["username"] = json!("ab");
    data["email"] = json!("nope");
    let input = raw(data);
    assert_eq!(
        UserCreateRequest::validate(&input).unwrap_err(),
        UserCreateRequest::validate(&input).unwrap_err()
    );
}

#[test]
fn test_non_object_input_rejected() {
    let violations = UserCreateRequest::validate_value(&json!("johndoe")).unwrap_err();
    assert!(violations.contains(domain::ROOT_PATH, ViolationKind::FormatViolation));
}

// =============================================================================
// PasswordUpdateRequest
// =============================================================================

#[test]
fn test_password_update_valid() {
    let update = PasswordUpdateRequest::validate(&raw(json!({
        "current_password": "OldPass123!",
        "new_password": "NewPass456!",
        "confirm_new_password": "NewPass456!"
    })))
    .unwrap();
    assert_eq!(update.current_password, "OldPass123!");
    assert_eq!(update.new_password, "NewPass456!");
}

#[test]
fn test_password_update_mismatch() {
    let violations = PasswordUpdateRequest::validate(&raw(json!({
        "current_password": "OldPass123!",
        "new_password": "NewPass456!",
        "confirm_new_password": "DifferentPass!"
    })))
    .unwrap_err();
    assert!(messages(&violations).contains("do not match"));
}

#[test]
fn test_password_update_same_as_current() {
    let violations = PasswordUpdateRequest::validate(&raw(json!({
        "current_password": "SamePass123!",
        "new_password": "SamePass123!",
        "confirm_new_password": "SamePass123!"
    })))
    .unwrap_err();
    assert_eq!(violations.len(), 1);
    assert!(violations.iter().all(|v| v.kind == ViolationKind::CrossFieldViolation));
    assert!(messages(&violations).contains("must be different"));
}

#[test]
fn test_password_update_weak_new_password() {
    let violations = PasswordUpdateRequest::validate(&raw(json!({
        "current_password": "anything",
        "new_password": "newpass456!",
        "confirm_new_password": "newpass456!"
    })))
    .unwrap_err();
    assert!(violations.contains("new_password", ViolationKind::PasswordPolicyViolation));
}

#[test]
fn test_password_update_missing_current() {
    let violations = PasswordUpdateRequest::validate(&raw(json!({
        "new_password": "NewPass456!",
        "confirm_new_password": "NewPass456!"
    })))
    .unwrap_err();
    assert_eq!(violations.len(), 1);
    assert!(violations.contains("current_password", ViolationKind::MissingField));
}

// =============================================================================
// UserLoginRequest
// =============================================================================

#[test]
fn test_user_login_valid() {
    let login = UserLoginRequest::validate(&raw(json!({
        "username": "johndoe",
        "password": "SecurePass123!"
    })))
    .unwrap();
    assert_eq!(login.username, "johndoe");
    assert_eq!(login.password, "SecurePass123!");
}

#[test]
fn test_user_login_does_not_apply_strength_policy() {
    let login = UserLoginRequest::validate(&raw(json!({
        "username": "johndoe",
        "password": "weak"
    })))
    .unwrap();
    assert_eq!(login.password, "weak");
}

#[test]
fn test_user_login_accepts_any_stored_username_length() {
    for username in ["ab".to_string(), "a".repeat(51)] {
        let login = UserLoginRequest::validate(&raw(json!({
            "username": username.clone(),
            "password": "SecurePass123!"
        })))
        .unwrap();
        assert_eq!(login.username, username);
    }
}

#[test]
fn test_user_login_missing_password() {
    let violations = UserLoginRequest::validate(&raw(json!({ "username": "johndoe" }))).unwrap_err();
    assert!(violations.contains("password", ViolationKind::MissingField));
    assert!(messages(&violations).to_lowercase().contains("required"));
}

// =============================================================================
// UserUpdateRequest
// =============================================================================

#[test]
fn test_user_update_partial() {
    let update = UserUpdateRequest::validate(&raw(json!({ "first_name": "Jane" }))).unwrap();
    assert_eq!(update.first_name.as_deref(), Some("Jane"));
    assert_eq!(update.last_name, None);
    assert_eq!(update.email, None);
    assert_eq!(update.username, None);
}

#[test]
fn test_user_update_all_fields() {
    let update = UserUpdateRequest::validate(&raw(json!({
        "first_name": "Jane",
        "last_name": "Smith",
        "email": "jane.smith@example.com",
        "username": "janesmith"
    })))
    .unwrap();
    assert_eq!(update.first_name.as_deref(), Some("Jane"));
    assert_eq!(update.last_name.as_deref(), Some("Smith"));
    assert_eq!(update.email.as_deref(), Some("jane.smith@example.com"));
    assert_eq!(update.username.as_deref(), Some("janesmith"));
}

#[test]
fn test_user_update_empty_and_null() {
    let update = UserUpdateRequest::validate(&raw(json!({}))).unwrap();
    assert!(update.is_empty());
    let update = UserUpdateRequest::validate(&raw(json!({ "email": null }))).unwrap();
    assert_eq!(update.email, None);
}

#[test]
fn test_user_update_supplied_fields_still_validated() {
    let violations = UserUpdateRequest::validate(&raw(json!({
        "email": "not-an-email",
        "username": "ab"
    })))
    .unwrap_err();
    assert_eq!(violations.len(), 2);
    assert!(violations.contains("email", ViolationKind::FormatViolation));
    assert!(violations.contains("username", ViolationKind::FormatViolation));
}
