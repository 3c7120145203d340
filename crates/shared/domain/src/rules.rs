//! Built-in field rules.
//!
//! Each constructor returns a closure over a single field value, suitable for
//! [`FieldSpec::rule`](crate::validation::FieldSpec::rule).

use std::borrow::Cow;

use validator::ValidateEmail;

use crate::constants::MSG_INVALID_EMAIL;
use crate::error::ViolationKind;
use crate::password::{PasswordPolicy, PasswordRule};

/// Why a single rule rejected a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFailure {
    pub kind: ViolationKind,
    pub message: Cow<'static, str>,
}

impl RuleFailure {
    pub fn format(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind: ViolationKind::FormatViolation,
            message: message.into(),
        }
    }

    pub fn password(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind: ViolationKind::PasswordPolicyViolation,
            message: message.into(),
        }
    }
}

pub type RuleResult = Result<(), RuleFailure>;

fn characters(n: usize) -> &'static str {
    if n == 1 {
        "character"
    } else {
        "characters"
    }
}

/// Value must contain at least `min` characters
pub fn min_length(min: usize) -> impl Fn(&str) -> RuleResult {
    move |value: &str| {
        if value.chars().count() < min {
            return Err(RuleFailure::format(format!(
                "String should have at least {} {}",
                min,
                characters(min)
            )));
        }
        Ok(())
    }
}

/// Value must contain at most `max` characters
pub fn max_length(max: usize) -> impl Fn(&str) -> RuleResult {
    move |value: &str| {
        if value.chars().count() > max {
            return Err(RuleFailure::format(format!(
                "String should have at most {} {}",
                max,
                characters(max)
            )));
        }
        Ok(())
    }
}

/// Domain must have at least two labels (`example.com`, not `localhost`)
fn has_dotted_domain(value: &str) -> bool {
    value
        .rsplit_once('@')
        .map(|(_, domain)| domain.split('.').filter(|label| !label.is_empty()).count() >= 2)
        .unwrap_or(false)
}

/// Value must be a syntactically valid email address with a dotted domain
pub fn email() -> impl Fn(&str) -> RuleResult {
    |value: &str| {
        if value.validate_email() && has_dotted_domain(value) {
            Ok(())
        } else {
            Err(RuleFailure::format(MSG_INVALID_EMAIL))
        }
    }
}

/// Single strength sub-rule bound to `policy`
pub fn password_rule(
    policy: &PasswordPolicy,
    rule: PasswordRule,
) -> impl Fn(&str) -> RuleResult + '_ {
    move |value: &str| {
        if policy.satisfies(rule, value) {
            Ok(())
        } else {
            Err(RuleFailure::password(policy.message(rule)))
        }
    }
}
