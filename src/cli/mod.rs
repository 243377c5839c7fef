//! Command-line front end
//!
//! Collects the candidate string and max length, runs the validator and prints the verdict.

pub mod args;
pub mod runner;

pub use args::{Cli, parse_max_length};
pub use runner::{Request, resolve, run};
