//! Declarative field validation.
//!
//! Inputs describe their fields through [`Validate`]; a [`Validator`] instance checks each field
//! against its rules and reports the first broken rule per field, in declaration order.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$")
        .unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    Email,
    MinLen(usize),
    MaxLen(usize),
}

/// A field that failed one of its rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub rule: Rule,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rule {
            Rule::Required => write!(f, "field {} is a required field", self.field),
            Rule::Email => write!(f, "field {} is not a valid email", self.field),
            _ => write!(f, "field {} is not valid", self.field),
        }
    }
}

/// All violations found in one input, rendered comma-separated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Implemented by inputs that can be checked by a [`Validator`].
///
/// `None` values model absent optional fields: only `Required` applies to them.
pub trait Validate {
    fn fields(&self) -> Vec<(&'static str, Option<&str>, &'static [Rule])>;
}

#[derive(Debug, Clone)]
pub struct Validator {
    email: Regex,
}

impl Default for Validator {
    fn default() -> Self { Self::new() }
}

impl Validator {
    pub fn new() -> Self { Self { email: EMAIL_PATTERN.clone() } }

    pub fn validate<T: Validate + ?Sized>(&self, input: &T) -> Result<(), ValidationError> {
        let violations: Vec<Violation> = input
            .fields()
            .into_iter()
            .filter_map(|(field, value, rules)| {
                rules
                    .iter()
                    .find(|rule| !self.check(**rule, value))
                    .map(|rule| Violation { field, rule: *rule })
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations })
        }
    }

    pub fn is_email(&self, value: &str) -> bool { self.email.is_match(value) }

    fn check(&self, rule: Rule, value: Option<&str>) -> bool {
        match (rule, value) {
            (Rule::Required, v) => v.is_some_and(|s| !s.is_empty()),
            (_, None) => true,
            (Rule::Email, Some(v)) => self.is_email(v),
            (Rule::MinLen(min), Some(v)) => v.chars().count() >= min,
            (Rule::MaxLen(max), Some(v)) => v.chars().count() <= max,
        }
    }
}
