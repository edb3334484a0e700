//! Field rules checked against manifest documents.
//!
//! Rules are stateless and know nothing about [`Manifest`](crate::Manifest);
//! the model runs a [`FieldRules`] registry after every parse.

mod name;

use indexmap::IndexMap;
pub use name::{
    MAX_NAME_LEN, NameProblem, NameRule, is_valid_name, name_problem, value_name_problem,
};
use serde_json::Value;

/// A grammar rule for a single top-level manifest field.
pub trait FieldRule: Send + Sync {
    /// The key this rule applies to.
    fn field(&self) -> &'static str;

    /// Check a value, returning the problem text if it is rejected.
    fn check(&self, value: &Value) -> Option<String>;
}

/// Problem found while checking a document against a [`FieldRules`] set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub reason: String,
}

/// Set of field rules run during structural validation.
///
/// Every field with a registered rule is required.
pub struct FieldRules {
    rules: Vec<Box<dyn FieldRule>>,
}

impl FieldRules {
    /// Create a registry holding the built-in rules.
    pub fn new() -> Self {
        Self {
            rules: vec![Box::new(NameRule)],
        }
    }

    /// Create a registry with no rules.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a rule.
    pub fn with_rule(mut self, rule: impl FieldRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Get the fields covered by the registered rules.
    pub fn fields(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.field()).collect()
    }

    /// Check a document, stopping at the first violation.
    ///
    /// A missing field is reported as `no <field>`.
    pub fn check(&self, document: &IndexMap<String, Value>) -> Option<FieldViolation> {
        self.rules.iter().find_map(|rule| {
            let field = rule.field();
            let reason = match document.get(field) {
                None => Some(format!("no {}", field)),
                Some(value) => rule.check(value),
            };
            reason.map(|reason| FieldViolation { field, reason })
        })
    }
}

impl Default for FieldRules {
    fn default() -> Self {
        Self::new()
    }
}
