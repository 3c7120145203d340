//! User domain entity and the client-facing response shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::constants::*;
use crate::error::{Violation, ViolationKind, Violations};
use crate::requests::{UserCreateRequest, UserUpdateRequest};

/// Read access to the attributes a [`UserResponse`] is projected from.
///
/// Implemented by any trusted record (persistence rows, cached entries) so
/// that the response can be built without knowing the concrete type.
#[cfg_attr(test, mockall::automock)]
pub trait UserAttributes {
    fn id(&self) -> Uuid;
    fn username(&self) -> String;
    fn email(&self) -> String;
    fn first_name(&self) -> String;
    fn last_name(&self) -> String;
    fn is_active(&self) -> bool;
    fn is_verified(&self) -> bool;
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;
}

/// User domain entity
#[derive(Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Don't expose the hash in debug output
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("password_hash", &"[REDACTED]")
            .field("is_active", &self.is_active)
            .field("is_verified", &self.is_verified)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

impl User {
    /// Create an active, unverified user from a validated registration.
    ///
    /// The password hash is produced by the caller; this type never sees the
    /// hashing scheme.
    pub fn new(id: Uuid, request: UserCreateRequest, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username: request.username,
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            password_hash,
            is_active: true,
            is_verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a validated partial update.
    ///
    /// Absent fields are left untouched. Returns whether anything changed;
    /// `updated_at` only moves when it did.
    pub fn apply_update(&mut self, update: &UserUpdateRequest) -> bool {
        let mut changed = false;
        changed |= replace_if_changed(&mut self.first_name, &update.first_name);
        changed |= replace_if_changed(&mut self.last_name, &update.last_name);
        changed |= replace_if_changed(&mut self.email, &update.email);
        changed |= replace_if_changed(&mut self.username, &update.username);
        if changed {
            self.updated_at = Utc::now();
        }
        changed
    }

    /// Replace the stored hash after a validated password change
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    pub fn mark_verified(&mut self) {
        self.is_verified = true;
        self.updated_at = Utc::now();
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }

    pub fn activate(&mut self) {
        self.is_active = true;
        self.updated_at = Utc::now();
    }

    /// Display name built from first and last name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

fn replace_if_changed(target: &mut String, value: &Option<String>) -> bool {
    match value {
        Some(value) if value != target => {
            target.clone_from(value);
            true
        }
        _ => false,
    }
}

impl UserAttributes for User {
    fn id(&self) -> Uuid {
        self.id
    }

    fn username(&self) -> String {
        self.username.clone()
    }

    fn email(&self) -> String {
        self.email.clone()
    }

    fn first_name(&self) -> String {
        self.first_name.clone()
    }

    fn last_name(&self) -> String {
        self.last_name.clone()
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn is_verified(&self) -> bool {
        self.is_verified
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserResponse {
    /// Unique user identifier
    pub id: Uuid,
    #[cfg_attr(feature = "openapi", schema(example = "johndoe123"))]
    pub username: String,
    #[cfg_attr(feature = "openapi", schema(example = "johndoe@example.com"))]
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub is_verified: bool,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Copy)]
enum Shape {
    Uuid,
    Text,
    Flag,
    Timestamp,
}

const RESPONSE_SHAPE: [(&str, Shape); 9] = [
    (FIELD_ID, Shape::Uuid),
    (FIELD_USERNAME, Shape::Text),
    (FIELD_EMAIL, Shape::Text),
    (FIELD_FIRST_NAME, Shape::Text),
    (FIELD_LAST_NAME, Shape::Text),
    (FIELD_IS_ACTIVE, Shape::Flag),
    (FIELD_IS_VERIFIED, Shape::Flag),
    (FIELD_CREATED_AT, Shape::Timestamp),
    (FIELD_UPDATED_AT, Shape::Timestamp),
];

fn shape_message(value: &Value, shape: Shape) -> Option<&'static str> {
    match shape {
        Shape::Text if !value.is_string() => Some(MSG_EXPECTED_STRING),
        Shape::Flag if !value.is_boolean() => Some(MSG_EXPECTED_BOOL),
        Shape::Uuid => match value.as_str().map(Uuid::parse_str) {
            Some(Ok(_)) => None,
            _ => Some(MSG_EXPECTED_UUID),
        },
        Shape::Timestamp => match value.as_str().map(DateTime::parse_from_rfc3339) {
            Some(Ok(_)) => None,
            _ => Some(MSG_EXPECTED_DATETIME),
        },
        _ => None,
    }
}

impl UserResponse {
    /// Project a response from any trusted source exposing user attributes
    pub fn from_attributes<T: UserAttributes + ?Sized>(source: &T) -> Self {
        Self {
            id: source.id(),
            username: source.username(),
            email: source.email(),
            first_name: source.first_name(),
            last_name: source.last_name(),
            is_active: source.is_active(),
            is_verified: source.is_verified(),
            created_at: source.created_at(),
            updated_at: source.updated_at(),
        }
    }

    /// Build a response from a raw record, checking structure only.
    ///
    /// Every missing or mistyped attribute is reported; no business rules
    /// are applied.
    pub fn from_value(value: &Value) -> Result<Self, Violations> {
        let Some(record) = value.as_object() else {
            return Err(Violation::new(
                ROOT_PATH,
                ViolationKind::FormatViolation,
                MSG_EXPECTED_OBJECT,
            )
            .into());
        };

        let mut violations = Violations::new();
        for (field, shape) in RESPONSE_SHAPE {
            match record.get(field) {
                None | Some(Value::Null) => violations.push(Violation::new(
                    field,
                    ViolationKind::MissingField,
                    MSG_FIELD_REQUIRED,
                )),
                Some(value) => {
                    if let Some(message) = shape_message(value, shape) {
                        violations.push(Violation::new(
                            field,
                            ViolationKind::FormatViolation,
                            message,
                        ));
                    }
                }
            }
        }
        violations.into_result()?;

        Self::deserialize(value).map_err(|e| {
            Violation::new(ROOT_PATH, ViolationKind::FormatViolation, e.to_string()).into()
        })
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            is_active: user.is_active,
            is_verified: user.is_verified,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self::from_attributes(user)
    }
}
