//! Complexity policy
//!
//! Implements the string complexity check: non-empty, bounded length, no whitespace,
//! and at least one uppercase letter, lowercase letter, digit and special character.

use super::classes::{is_digit, is_lowercase, is_special, is_uppercase, is_whitespace};
use super::results::{Rule, ValidationReport};

/// Length is counted in chars. Negative bounds never pass.
fn within_max_length(input: &str, max_length: i64) -> bool {
    i64::try_from(input.chars().count()).is_ok_and(|len| len <= max_length)
}

fn rule_holds(rule: Rule, input: &str, max_length: i64) -> bool {
    match rule {
        Rule::NotEmpty => !input.is_empty(),
        Rule::WithinMaxLength => within_max_length(input, max_length),
        Rule::NoWhitespace => !input.chars().any(is_whitespace),
        Rule::HasUppercase => input.chars().any(is_uppercase),
        Rule::HasLowercase => input.chars().any(is_lowercase),
        Rule::HasDigit => input.chars().any(is_digit),
        Rule::HasSpecial => input.chars().any(is_special),
    }
}

/// Returns `true` when `input` satisfies every rule of the complexity policy.
///
/// Never fails: empty input, a zero or negative `max_length` and over-long input
/// all simply yield `false`.
pub fn is_valid(input: &str, max_length: i64) -> bool {
    Rule::ALL
        .iter()
        .all(|&rule| rule_holds(rule, input, max_length))
}

/// Evaluates every rule and collects the ones `input` breaks, in [`Rule::ALL`] order.
pub fn evaluate(input: &str, max_length: i64) -> ValidationReport {
    let failed = Rule::ALL
        .iter()
        .copied()
        .filter(|&rule| !rule_holds(rule, input, max_length))
        .collect();

    ValidationReport::new(failed)
}
