pub mod cli;
pub mod config;
pub mod error;
pub mod prompt;
pub mod validator;

pub use validator::{Rule, SPECIAL_CHARACTERS, ValidationReport, evaluate, is_valid};
