use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const FIELD_IS_MISSING: &str = "Field is missing";
pub const INVALID_TYPE: &str = "Invalid type";
pub const INVALID_EMAIL: &str = "Invalid Email";
pub const NOT_A_STRING: &str = "Not a String";

const EMAIL_PATTERN: &str = r"^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$";

/// One field-level validation failure. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationProblem {
    pub field: String,
    pub message: String,
}

impl ValidationProblem {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Runtime type tag for a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

/// A single validation rule. Validators are pure: they inspect one field's
/// value and report zero or more problems, never mutating anything.
#[derive(Debug, Clone)]
pub enum Validator {
    /// Accepts any value whose runtime kind is in the allowed set.
    TypeIs { allowed: Vec<ValueKind> },
    /// Accepts strings matching the email pattern. Non-strings are reported
    /// as `NOT_A_STRING` rather than `INVALID_EMAIL`.
    Email { pattern: Regex },
}

impl Validator {
    pub fn type_is(allowed: impl Into<Vec<ValueKind>>) -> Self {
        Self::TypeIs {
            allowed: allowed.into(),
        }
    }

    pub fn email() -> Self {
        Self::Email {
            pattern: Regex::new(EMAIL_PATTERN).expect("email pattern should compile"),
        }
    }

    pub fn check(&self, field: &str, value: &Value) -> Vec<ValidationProblem> {
        match self {
            Self::TypeIs { allowed } => {
                if allowed.contains(&ValueKind::of(value)) {
                    Vec::new()
                } else {
                    vec![ValidationProblem::new(field, INVALID_TYPE)]
                }
            }
            Self::Email { pattern } => match value.as_str() {
                Some(text) if pattern.is_match(text) => Vec::new(),
                Some(_) => vec![ValidationProblem::new(field, INVALID_EMAIL)],
                None => vec![ValidationProblem::new(field, NOT_A_STRING)],
            },
        }
    }
}

/// A field name plus its validators, applied in declaration order.
#[derive(Debug, Clone)]
pub struct FieldRule {
    field: String,
    validators: Vec<Validator>,
}

impl FieldRule {
    pub fn new(field: impl Into<String>, validators: Vec<Validator>) -> Self {
        Self {
            field: field.into(),
            validators,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }
}

/// An ordered set of field rules. Immutable once constructed and safe to
/// share across concurrent invocations.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    rules: Vec<FieldRule>,
}

impl ValidationConfig {
    pub fn new(rules: Vec<FieldRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }
}

/// Builds the validation registry for account provisioning requests.
///
/// `accountEmail` and `reqId` are checked for type before shape so the
/// email pattern is never applied to a non-string value. `createdAt` is
/// the only numeric field; everything else must be a string.
pub fn account_request_rules() -> ValidationConfig {
    let string_only = |field: &str| {
        FieldRule::new(field, vec![Validator::type_is([ValueKind::String])])
    };
    let email_checked = |field: &str| {
        FieldRule::new(
            field,
            vec![Validator::type_is([ValueKind::String]), Validator::email()],
        )
    };

    ValidationConfig::new(vec![
        email_checked("accountEmail"),
        string_only("accountPrefix"),
        string_only("accountType"),
        string_only("appName"),
        string_only("cloudProvider"),
        string_only("costCenter"),
        FieldRule::new("createdAt", vec![Validator::type_is([ValueKind::Number])]),
        string_only("envType"),
        string_only("id"),
        string_only("lob"),
        string_only("primaryRegion"),
        string_only("primaryVpcCidr"),
        email_checked("reqId"),
        string_only("responsible"),
        string_only("secondaryVpcCidr"),
        string_only("securityContact"),
        string_only("servicenowCase"),
    ])
}

/// Applies the configuration against the record, yielding problems lazily
/// in configuration order. A field absent from the record yields exactly
/// one `FIELD_IS_MISSING` problem and its validators are skipped; the
/// remaining fields are still validated. Consumers may stop after the
/// first problem without the remaining fields being checked.
pub fn validate<'a>(
    config: &'a ValidationConfig,
    record: &'a Map<String, Value>,
) -> impl Iterator<Item = ValidationProblem> + 'a {
    config.rules().iter().flat_map(move |rule| {
        let problems = match record.get(rule.field()) {
            None => vec![ValidationProblem::new(rule.field(), FIELD_IS_MISSING)],
            Some(value) => rule
                .validators()
                .iter()
                .flat_map(|validator| validator.check(rule.field(), value))
                .collect(),
        };
        problems.into_iter()
    })
}
