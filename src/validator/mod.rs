//! String validation
//!
//! Checks a candidate string against a fixed complexity policy.

pub mod classes;
pub mod policy;
pub mod results;

pub use classes::SPECIAL_CHARACTERS;
pub use policy::{evaluate, is_valid};
pub use results::{Rule, ValidationReport};
