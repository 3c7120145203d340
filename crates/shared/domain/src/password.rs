//! Password strength policy.
//!
//! Value object describing the five-part strength rule set applied to new
//! passwords. Sub-rules are always checked in the order of
//! [`PasswordRule::ORDER`].

use std::borrow::Cow;

use serde::Serialize;

use crate::constants::{
    DEFAULT_SPECIAL_CHARACTERS, MIN_PASSWORD_LENGTH, MSG_PASSWORD_DIGIT, MSG_PASSWORD_LOWERCASE,
    MSG_PASSWORD_SPECIAL, MSG_PASSWORD_UPPERCASE,
};
use crate::error::{DomainError, DomainResult};

/// One strength sub-rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordRule {
    Length,
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl PasswordRule {
    /// Evaluation order
    pub const ORDER: [PasswordRule; 5] = [
        PasswordRule::Length,
        PasswordRule::Uppercase,
        PasswordRule::Lowercase,
        PasswordRule::Digit,
        PasswordRule::Special,
    ];
}

/// Password strength policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordPolicy {
    min_length: usize,
    special_characters: String,
    report_all_violations: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: MIN_PASSWORD_LENGTH,
            special_characters: DEFAULT_SPECIAL_CHARACTERS.to_string(),
            report_all_violations: false,
        }
    }
}

impl PasswordPolicy {
    /// Create a policy with a custom length floor and special character set.
    ///
    /// # Errors
    /// Returns an internal error if `min_length` is zero or the character set is empty.
    pub fn new(min_length: usize, special_characters: impl Into<String>) -> DomainResult<Self> {
        let special_characters = special_characters.into();
        if min_length == 0 {
            return Err(DomainError::internal(
                "password minimum length must be at least 1",
            ));
        }
        if special_characters.is_empty() {
            return Err(DomainError::internal(
                "password special character set must not be empty",
            ));
        }
        Ok(Self {
            min_length,
            special_characters,
            report_all_violations: false,
        })
    }

    /// Report every failed sub-rule instead of only the first one
    pub fn with_report_all_violations(mut self, report_all: bool) -> Self {
        self.report_all_violations = report_all;
        self
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn special_characters(&self) -> &str {
        &self.special_characters
    }

    pub fn reports_all_violations(&self) -> bool {
        self.report_all_violations
    }

    /// Whether `password` satisfies a single sub-rule
    pub fn satisfies(&self, rule: PasswordRule, password: &str) -> bool {
        match rule {
            PasswordRule::Length => password.chars().count() >= self.min_length,
            PasswordRule::Uppercase => password.chars().any(char::is_uppercase),
            PasswordRule::Lowercase => password.chars().any(char::is_lowercase),
            PasswordRule::Digit => password.chars().any(|c| c.is_ascii_digit()),
            PasswordRule::Special => password
                .chars()
                .any(|c| self.special_characters.contains(c)),
        }
    }

    /// Client-facing message for a failed sub-rule
    pub fn message(&self, rule: PasswordRule) -> Cow<'static, str> {
        match rule {
            PasswordRule::Length => Cow::Owned(format!(
                "Password must be at least {} characters long",
                self.min_length
            )),
            PasswordRule::Uppercase => Cow::Borrowed(MSG_PASSWORD_UPPERCASE),
            PasswordRule::Lowercase => Cow::Borrowed(MSG_PASSWORD_LOWERCASE),
            PasswordRule::Digit => Cow::Borrowed(MSG_PASSWORD_DIGIT),
            PasswordRule::Special => Cow::Borrowed(MSG_PASSWORD_SPECIAL),
        }
    }

    /// Sub-rules `password` fails, in evaluation order.
    ///
    /// Stops after the first failure unless the policy reports all violations.
    pub fn violated_rules(&self, password: &str) -> Vec<PasswordRule> {
        let mut failed = Vec::new();
        for rule in PasswordRule::ORDER {
            if !self.satisfies(rule, password) {
                failed.push(rule);
                if !self.report_all_violations {
                    break;
                }
            }
        }
        failed
    }

    pub fn is_strong(&self, password: &str) -> bool {
        PasswordRule::ORDER
            .iter()
            .all(|rule| self.satisfies(*rule, password))
    }
}
