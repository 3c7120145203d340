//! Domain layer - user account schemas and their validation rules.
//!
//! This crate contains pure validation logic with no infrastructure
//! dependencies: no I/O, no shared state. Every schema type is `Send + Sync`
//! and validation may run concurrently from any thread.

pub mod constants;
pub mod error;
pub mod password;
pub mod requests;
pub mod rules;
pub mod user;
pub mod validation;

pub use constants::*;
pub use error::{DomainError, DomainResult, Violation, ViolationKind, Violations};
pub use password::{PasswordPolicy, PasswordRule};
pub use requests::{PasswordUpdateRequest, UserCreateRequest, UserLoginRequest, UserUpdateRequest};
pub use user::{User, UserAttributes, UserResponse};
pub use validation::{
    CrossFieldRule, FieldSpec, RawInput, Relation, Schema, SchemaValidator, ValidatedFields,
};
