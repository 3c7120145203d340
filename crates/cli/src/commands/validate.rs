//! Validate command - checks a JSON document against one schema.

use std::io::Read;

use serde_json::Value;
use tracing::{debug, info};

use common::{AppError, AppResult};
use domain::{
    PasswordPolicy, PasswordUpdateRequest, Schema, UserCreateRequest, UserLoginRequest,
    UserResponse, UserUpdateRequest,
};

use crate::args::{SchemaKind, ValidateArgs};

const REDACTED: &str = "[REDACTED]";

/// Execute the validate command and return the validated record as JSON.
pub fn execute(args: ValidateArgs, policy: &PasswordPolicy) -> AppResult<Value> {
    let document = match &args.input {
        Some(path) => {
            debug!(path = %path.display(), "reading document from file");
            std::fs::read_to_string(path)?
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let record = validate_document(args.schema, &document, policy)?;
    info!(schema = ?args.schema, "document is valid");
    Ok(record)
}

/// Validate a JSON document; password fields in the result are redacted.
pub fn validate_document(
    schema: SchemaKind,
    document: &str,
    policy: &PasswordPolicy,
) -> AppResult<Value> {
    let value: Value = serde_json::from_str(document)?;

    let mut record = match schema {
        SchemaKind::Create => to_json(UserCreateRequest::validate_value_with(&value, policy)?)?,
        SchemaKind::Login => to_json(UserLoginRequest::validate_value_with(&value, policy)?)?,
        SchemaKind::Update => to_json(UserUpdateRequest::validate_value_with(&value, policy)?)?,
        SchemaKind::PasswordUpdate => {
            to_json(PasswordUpdateRequest::validate_value_with(&value, policy)?)?
        }
        SchemaKind::Response => to_json(UserResponse::from_value(&value)?)?,
    };

    redact_passwords(&mut record);
    Ok(record)
}

fn to_json<T: serde::Serialize>(record: T) -> AppResult<Value> {
    serde_json::to_value(record).map_err(AppError::from)
}

fn redact_passwords(record: &mut Value) {
    if let Some(fields) = record.as_object_mut() {
        for (name, value) in fields.iter_mut() {
            if name.contains("password") && !value.is_null() {
                *value = Value::String(REDACTED.to_string());
            }
        }
    }
}
