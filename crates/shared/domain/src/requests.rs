//! Inbound request schemas.
//!
//! Instances only exist after validation: construct them with
//! [`Schema::validate`] or deserialize them with serde, which routes through
//! the same rules.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::*;
use crate::error::Violations;
use crate::password::PasswordPolicy;
use crate::rules;
use crate::validation::{CrossFieldRule, FieldSpec, Schema, SchemaValidator, ValidatedFields};

const REDACTED: &str = "[REDACTED]";

fn username_field(spec: FieldSpec<'_>) -> FieldSpec<'_> {
    spec.rule(rules::min_length(MIN_USERNAME_LENGTH))
        .rule(rules::max_length(MAX_USERNAME_LENGTH))
}

fn name_field(spec: FieldSpec<'_>) -> FieldSpec<'_> {
    spec.rule(rules::min_length(MIN_NAME_LENGTH))
}

// =============================================================================
// User Creation
// =============================================================================

/// Registration payload
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserCreateRequest {
    #[cfg_attr(feature = "openapi", schema(example = "John"))]
    pub first_name: String,
    #[cfg_attr(feature = "openapi", schema(example = "Doe"))]
    pub last_name: String,
    #[cfg_attr(feature = "openapi", schema(example = "john.doe@example.com"))]
    pub email: String,
    /// 3 to 50 characters
    #[cfg_attr(feature = "openapi", schema(example = "johndoe"))]
    pub username: String,
    /// At least 8 characters with upper and lower case letters, a digit and a special character
    #[cfg_attr(feature = "openapi", schema(example = "SecurePass123!"))]
    pub password: String,
    /// Must equal `password`
    #[cfg_attr(feature = "openapi", schema(example = "SecurePass123!"))]
    pub confirm_password: String,
}

impl Schema for UserCreateRequest {
    const NAME: &'static str = "UserCreateRequest";

    fn validator(policy: &PasswordPolicy) -> SchemaValidator<'_> {
        SchemaValidator::new(Self::NAME)
            .field(name_field(FieldSpec::required(FIELD_FIRST_NAME)))
            .field(name_field(FieldSpec::required(FIELD_LAST_NAME)))
            .field(FieldSpec::required(FIELD_EMAIL).rule(rules::email()))
            .field(username_field(FieldSpec::required(FIELD_USERNAME)))
            .field(FieldSpec::required(FIELD_PASSWORD).password_strength(policy))
            .field(FieldSpec::required(FIELD_CONFIRM_PASSWORD))
            .cross_field(CrossFieldRule::must_match(
                PASSWORD_MATCH_PATH,
                FIELD_PASSWORD,
                FIELD_CONFIRM_PASSWORD,
                MSG_PASSWORDS_MISMATCH,
            ))
    }

    fn from_fields(mut fields: ValidatedFields) -> Result<Self, Violations> {
        Ok(Self {
            first_name: fields.require(FIELD_FIRST_NAME)?,
            last_name: fields.require(FIELD_LAST_NAME)?,
            email: fields.require(FIELD_EMAIL)?,
            username: fields.require(FIELD_USERNAME)?,
            password: fields.require(FIELD_PASSWORD)?,
            confirm_password: fields.require(FIELD_CONFIRM_PASSWORD)?,
        })
    }
}

impl TryFrom<Map<String, Value>> for UserCreateRequest {
    type Error = Violations;

    fn try_from(raw: Map<String, Value>) -> Result<Self, Self::Error> {
        Self::validate(&raw)
    }
}

impl std::fmt::Debug for UserCreateRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCreateRequest")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &REDACTED)
            .field("confirm_password", &REDACTED)
            .finish()
    }
}

// =============================================================================
// Login
// =============================================================================

/// Login payload; both fields are only checked for presence
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(
    feature = "openapi",
    schema(example = json!({"username": "johndoe123", "password": "SecurePass123"}))
)]
pub struct UserLoginRequest {
    pub username: String,
    pub password: String,
}

impl Schema for UserLoginRequest {
    const NAME: &'static str = "UserLoginRequest";

    fn validator(_policy: &PasswordPolicy) -> SchemaValidator<'_> {
        SchemaValidator::new(Self::NAME)
            .field(FieldSpec::required(FIELD_USERNAME))
            .field(FieldSpec::required(FIELD_PASSWORD))
    }

    fn from_fields(mut fields: ValidatedFields) -> Result<Self, Violations> {
        Ok(Self {
            username: fields.require(FIELD_USERNAME)?,
            password: fields.require(FIELD_PASSWORD)?,
        })
    }
}

impl TryFrom<Map<String, Value>> for UserLoginRequest {
    type Error = Violations;

    fn try_from(raw: Map<String, Value>) -> Result<Self, Self::Error> {
        Self::validate(&raw)
    }
}

impl std::fmt::Debug for UserLoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserLoginRequest")
            .field("username", &self.username)
            .field("password", &REDACTED)
            .finish()
    }
}

// =============================================================================
// Profile Update
// =============================================================================

/// Partial profile update; `None` means "leave unchanged"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserUpdateRequest {
    #[cfg_attr(feature = "openapi", schema(example = "Jane"))]
    pub first_name: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "Smith"))]
    pub last_name: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "jane.smith@example.com"))]
    pub email: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "janesmith"))]
    pub username: Option<String>,
}

impl UserUpdateRequest {
    /// Whether no field was supplied
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.username.is_none()
    }
}

impl Schema for UserUpdateRequest {
    const NAME: &'static str = "UserUpdateRequest";

    fn validator(_policy: &PasswordPolicy) -> SchemaValidator<'_> {
        SchemaValidator::new(Self::NAME)
            .field(name_field(FieldSpec::optional(FIELD_FIRST_NAME)))
            .field(name_field(FieldSpec::optional(FIELD_LAST_NAME)))
            .field(FieldSpec::optional(FIELD_EMAIL).rule(rules::email()))
            .field(username_field(FieldSpec::optional(FIELD_USERNAME)))
    }

    fn from_fields(mut fields: ValidatedFields) -> Result<Self, Violations> {
        Ok(Self {
            first_name: fields.take(FIELD_FIRST_NAME),
            last_name: fields.take(FIELD_LAST_NAME),
            email: fields.take(FIELD_EMAIL),
            username: fields.take(FIELD_USERNAME),
        })
    }
}

impl TryFrom<Map<String, Value>> for UserUpdateRequest {
    type Error = Violations;

    fn try_from(raw: Map<String, Value>) -> Result<Self, Self::Error> {
        Self::validate(&raw)
    }
}

// =============================================================================
// Password Change
// =============================================================================

/// Password change payload
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PasswordUpdateRequest {
    #[cfg_attr(feature = "openapi", schema(example = "OldPass123!"))]
    pub current_password: String,
    /// Must satisfy the strength policy and differ from `current_password`
    #[cfg_attr(feature = "openapi", schema(example = "NewPass456!"))]
    pub new_password: String,
    /// Must equal `new_password`
    #[cfg_attr(feature = "openapi", schema(example = "NewPass456!"))]
    pub confirm_new_password: String,
}

impl Schema for PasswordUpdateRequest {
    const NAME: &'static str = "PasswordUpdateRequest";

    fn validator(policy: &PasswordPolicy) -> SchemaValidator<'_> {
        SchemaValidator::new(Self::NAME)
            .field(FieldSpec::required(FIELD_CURRENT_PASSWORD))
            .field(FieldSpec::required(FIELD_NEW_PASSWORD).password_strength(policy))
            .field(FieldSpec::required(FIELD_CONFIRM_NEW_PASSWORD))
            .cross_field(CrossFieldRule::must_match(
                NEW_PASSWORD_MATCH_PATH,
                FIELD_NEW_PASSWORD,
                FIELD_CONFIRM_NEW_PASSWORD,
                MSG_NEW_PASSWORDS_MISMATCH,
            ))
            .cross_field(CrossFieldRule::must_differ(
                PASSWORD_REUSE_PATH,
                FIELD_CURRENT_PASSWORD,
                FIELD_NEW_PASSWORD,
                MSG_PASSWORD_UNCHANGED,
            ))
    }

    fn from_fields(mut fields: ValidatedFields) -> Result<Self, Violations> {
        Ok(Self {
            current_password: fields.require(FIELD_CURRENT_PASSWORD)?,
            new_password: fields.require(FIELD_NEW_PASSWORD)?,
            confirm_new_password: fields.require(FIELD_CONFIRM_NEW_PASSWORD)?,
        })
    }
}

impl TryFrom<Map<String, Value>> for PasswordUpdateRequest {
    type Error = Violations;

    fn try_from(raw: Map<String, Value>) -> Result<Self, Self::Error> {
        Self::validate(&raw)
    }
}

impl std::fmt::Debug for PasswordUpdateRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordUpdateRequest")
            .field("current_password", &REDACTED)
            .field("new_password", &REDACTED)
            .field("confirm_new_password", &REDACTED)
            .finish()
    }
}
