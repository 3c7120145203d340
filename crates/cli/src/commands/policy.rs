//! Policy command - prints the active password policy.

use serde_json::Value;

use common::AppResult;
use domain::PasswordPolicy;

pub fn execute(policy: &PasswordPolicy) -> AppResult<Value> {
    Ok(serde_json::to_value(policy)?)
}
