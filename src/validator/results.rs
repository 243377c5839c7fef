//! Validation result types
//!
//! Defines the rules of the complexity policy and the report produced by a full evaluation.

use std::fmt;

/// One condition of the complexity policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    NotEmpty,
    WithinMaxLength,
    NoWhitespace,
    HasUppercase,
    HasLowercase,
    HasDigit,
    HasSpecial,
}

impl Rule {
    /// All rules, in evaluation order.
    pub const ALL: [Rule; 7] = [
        Rule::NotEmpty,
        Rule::WithinMaxLength,
        Rule::NoWhitespace,
        Rule::HasUppercase,
        Rule::HasLowercase,
        Rule::HasDigit,
        Rule::HasSpecial,
    ];
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::NotEmpty => write!(f, "must not be empty"),
            Rule::WithinMaxLength => write!(f, "must not exceed the maximum length"),
            Rule::NoWhitespace => write!(f, "must not contain whitespace"),
            Rule::HasUppercase => write!(f, "must contain an uppercase letter (A-Z)"),
            Rule::HasLowercase => write!(f, "must contain a lowercase letter (a-z)"),
            Rule::HasDigit => write!(f, "must contain a digit (0-9)"),
            Rule::HasSpecial => write!(f, "must contain a special character"),
        }
    }
}

/// Outcome of evaluating every rule against one input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    failed: Vec<Rule>,
}

impl ValidationReport {
    pub(crate) fn new(failed: Vec<Rule>) -> Self {
        Self { failed }
    }

    pub fn is_valid(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn failed_rules(&self) -> &[Rule] {
        &self.failed
    }
}
