//! Schema validation pipeline.
//!
//! A schema is declared as an ordered list of [`FieldSpec`]s followed by a
//! chain of [`CrossFieldRule`]s. Evaluation is deterministic:
//!
//! 1. Fields are checked in declaration order. Within a field the rules run in
//!    order and the first failure ends that field (unless the field collects
//!    all failures). Other fields keep validating.
//! 2. Cross-field rules run afterwards, in order, and only when every field
//!    they reference passed its own checks. The first failing rule ends the
//!    chain.
//!
//! All violations of one call are returned together.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::constants::{MSG_EXPECTED_OBJECT, MSG_EXPECTED_STRING, MSG_FIELD_REQUIRED, ROOT_PATH};
use crate::error::{Violation, ViolationKind, Violations};
use crate::password::{PasswordPolicy, PasswordRule};
use crate::rules::{self, RuleResult};

/// Raw field mapping as handed over by the transport layer
pub type RawInput = Map<String, Value>;

type FieldRule<'p> = Box<dyn Fn(&str) -> RuleResult + 'p>;

/// Constraints for one string field.
pub struct FieldSpec<'p> {
    name: &'static str,
    required: bool,
    collect_all: bool,
    rules: Vec<FieldRule<'p>>,
}

impl<'p> FieldSpec<'p> {
    /// Field that must be present
    pub fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
            collect_all: false,
            rules: Vec::new(),
        }
    }

    /// Field that may be absent or null
    pub fn optional(name: &'static str) -> Self {
        Self {
            required: false,
            ..Self::required(name)
        }
    }

    /// Append a rule; rules run in the order they are added
    pub fn rule(mut self, rule: impl Fn(&str) -> RuleResult + 'p) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Append the strength sub-rules of `policy` in their fixed order.
    ///
    /// The field collects every sub-rule failure when the policy asks for it.
    pub fn password_strength(mut self, policy: &'p PasswordPolicy) -> Self {
        for rule in PasswordRule::ORDER {
            self = self.rule(rules::password_rule(policy, rule));
        }
        self.collect_all = policy.reports_all_violations();
        self
    }

    fn evaluate(&self, value: &str, violations: &mut Violations) -> bool {
        let mut passed = true;
        for rule in &self.rules {
            if let Err(failure) = rule(value) {
                violations.push(Violation::new(self.name, failure.kind, failure.message));
                passed = false;
                if !self.collect_all {
                    break;
                }
            }
        }
        passed
    }
}

/// Relation a cross-field rule enforces between two fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Equal,
    Distinct,
}

/// Invariant over two fields, evaluated after field-level checks.
#[derive(Debug, Clone)]
pub struct CrossFieldRule {
    path: &'static str,
    left: &'static str,
    right: &'static str,
    relation: Relation,
    message: &'static str,
}

impl CrossFieldRule {
    /// `left` and `right` must hold identical values
    pub fn must_match(
        path: &'static str,
        left: &'static str,
        right: &'static str,
        message: &'static str,
    ) -> Self {
        Self {
            path,
            left,
            right,
            relation: Relation::Equal,
            message,
        }
    }

    /// `left` and `right` must hold different values
    pub fn must_differ(
        path: &'static str,
        left: &'static str,
        right: &'static str,
        message: &'static str,
    ) -> Self {
        Self {
            relation: Relation::Distinct,
            ..Self::must_match(path, left, right, message)
        }
    }

    fn holds(&self, left: &str, right: &str) -> bool {
        match self.relation {
            Relation::Equal => left == right,
            Relation::Distinct => left != right,
        }
    }
}

/// Field values that passed validation, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedFields(BTreeMap<&'static str, String>);

impl ValidatedFields {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Remove an optional field; `None` means it was absent
    pub fn take(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }

    /// Remove a field the schema declared as required.
    ///
    /// # Errors
    /// Reports the field as missing if it is not present.
    pub fn require(&mut self, name: &'static str) -> Result<String, Violations> {
        self.take(name).ok_or_else(|| {
            Violation::new(name, ViolationKind::MissingField, MSG_FIELD_REQUIRED).into()
        })
    }
}

/// Declarative validator for one record shape.
pub struct SchemaValidator<'p> {
    schema: &'static str,
    fields: Vec<FieldSpec<'p>>,
    cross_field_rules: Vec<CrossFieldRule>,
}

impl<'p> SchemaValidator<'p> {
    pub fn new(schema: &'static str) -> Self {
        Self {
            schema,
            fields: Vec::new(),
            cross_field_rules: Vec::new(),
        }
    }

    pub fn field(mut self, spec: FieldSpec<'p>) -> Self {
        self.fields.push(spec);
        self
    }

    pub fn cross_field(mut self, rule: CrossFieldRule) -> Self {
        self.cross_field_rules.push(rule);
        self
    }

    /// Validate any JSON value; anything but an object is rejected as a whole.
    pub fn validate_value(&self, input: &Value) -> Result<ValidatedFields, Violations> {
        match input.as_object() {
            Some(map) => self.validate(map),
            None => {
                debug!(schema = self.schema, "schema input is not an object");
                Err(Violation::new(
                    ROOT_PATH,
                    ViolationKind::FormatViolation,
                    MSG_EXPECTED_OBJECT,
                )
                .into())
            }
        }
    }

    /// Run the pipeline over a raw field mapping.
    ///
    /// # Errors
    /// Returns every violation found, field-level ones first in declaration
    /// order, then cross-field ones.
    pub fn validate(&self, input: &RawInput) -> Result<ValidatedFields, Violations> {
        let mut violations = Violations::new();
        let mut accepted = BTreeMap::new();

        for spec in &self.fields {
            match input.get(spec.name) {
                None | Some(Value::Null) => {
                    if spec.required {
                        violations.push(Violation::new(
                            spec.name,
                            ViolationKind::MissingField,
                            MSG_FIELD_REQUIRED,
                        ));
                    }
                }
                Some(Value::String(value)) => {
                    if spec.evaluate(value, &mut violations) {
                        accepted.insert(spec.name, value.clone());
                    }
                }
                Some(_) => violations.push(Violation::new(
                    spec.name,
                    ViolationKind::FormatViolation,
                    MSG_EXPECTED_STRING,
                )),
            }
        }

        for rule in &self.cross_field_rules {
            let (Some(left), Some(right)) = (accepted.get(rule.left), accepted.get(rule.right))
            else {
                continue;
            };
            if !rule.holds(left, right) {
                violations.push(Violation::new(
                    rule.path,
                    ViolationKind::CrossFieldViolation,
                    rule.message,
                ));
                break;
            }
        }

        if violations.is_empty() {
            trace!(schema = self.schema, "schema validation passed");
            Ok(ValidatedFields(accepted))
        } else {
            debug!(
                schema = self.schema,
                violations = violations.len(),
                "schema validation failed"
            );
            Err(violations)
        }
    }
}

/// A record type whose instances only exist after validation.
pub trait Schema: Sized {
    /// Schema name used in logs
    const NAME: &'static str;

    /// Declarative rule set for this record
    fn validator(policy: &PasswordPolicy) -> SchemaValidator<'_>;

    /// Build the typed record from fields that passed validation
    fn from_fields(fields: ValidatedFields) -> Result<Self, Violations>;

    /// Validate with an explicit password policy.
    fn validate_with(input: &RawInput, policy: &PasswordPolicy) -> Result<Self, Violations> {
        let fields = Self::validator(policy).validate(input)?;
        Self::from_fields(fields)
    }

    /// Validate with the default password policy.
    fn validate(input: &RawInput) -> Result<Self, Violations> {
        Self::validate_with(input, &PasswordPolicy::default())
    }

    /// Validate any JSON value with an explicit password policy.
    fn validate_value_with(input: &Value, policy: &PasswordPolicy) -> Result<Self, Violations> {
        let fields = Self::validator(policy).validate_value(input)?;
        Self::from_fields(fields)
    }

    /// Validate any JSON value with the default password policy.
    fn validate_value(input: &Value) -> Result<Self, Violations> {
        Self::validate_value_with(input, &PasswordPolicy::default())
    }
}
