//! Domain-level constants.
//!
//! These constants define the field names, bounds and messages shared by the
//! user account schemas.

// =============================================================================
// Field Names
// =============================================================================

pub const FIELD_ID: &str = "id";
pub const FIELD_USERNAME: &str = "username";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_FIRST_NAME: &str = "first_name";
pub const FIELD_LAST_NAME: &str = "last_name";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_CONFIRM_PASSWORD: &str = "confirm_password";
pub const FIELD_CURRENT_PASSWORD: &str = "current_password";
pub const FIELD_NEW_PASSWORD: &str = "new_password";
pub const FIELD_CONFIRM_NEW_PASSWORD: &str = "confirm_new_password";
pub const FIELD_IS_ACTIVE: &str = "is_active";
pub const FIELD_IS_VERIFIED: &str = "is_verified";
pub const FIELD_CREATED_AT: &str = "created_at";
pub const FIELD_UPDATED_AT: &str = "updated_at";

/// Path used for violations that concern the whole input rather than a field
pub const ROOT_PATH: &str = "__root__";

/// Path of the password confirmation check on user creation
pub const PASSWORD_MATCH_PATH: &str = "password,confirm_password";

/// Path of the confirmation check on password change
pub const NEW_PASSWORD_MATCH_PATH: &str = "new_password,confirm_new_password";

/// Path of the "new differs from current" check on password change
pub const PASSWORD_REUSE_PATH: &str = "current_password,new_password";

// =============================================================================
// Validation
// =============================================================================

/// Minimum username length (inclusive)
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Maximum username length (inclusive)
pub const MAX_USERNAME_LENGTH: usize = 50;

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Minimum name length requirement
pub const MIN_NAME_LENGTH: usize = 1;

/// Characters accepted by the "special character" password rule
pub const DEFAULT_SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{}|;:'\",.<>?/\\`~";

// =============================================================================
// Messages
// =============================================================================

pub const MSG_FIELD_REQUIRED: &str = "Field required";
pub const MSG_EXPECTED_STRING: &str = "Input should be a valid string";
pub const MSG_EXPECTED_BOOL: &str = "Input should be a valid boolean";
pub const MSG_EXPECTED_UUID: &str = "Input should be a valid UUID";
pub const MSG_EXPECTED_DATETIME: &str = "Input should be a valid datetime";
pub const MSG_EXPECTED_OBJECT: &str = "Input should be a valid dictionary";
pub const MSG_INVALID_EMAIL: &str = "value is not a valid email address";
pub const MSG_PASSWORD_UPPERCASE: &str = "Password must contain at least one uppercase letter";
pub const MSG_PASSWORD_LOWERCASE: &str = "Password must contain at least one lowercase letter";
pub const MSG_PASSWORD_DIGIT: &str = "Password must contain at least one digit";
pub const MSG_PASSWORD_SPECIAL: &str = "Password must contain at least one special character";
pub const MSG_PASSWORDS_MISMATCH: &str = "Passwords do not match";
pub const MSG_NEW_PASSWORDS_MISMATCH: &str = "New passwords do not match";
pub const MSG_PASSWORD_UNCHANGED: &str = "New password must be different from current password";
