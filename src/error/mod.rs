//! Error handling
//!
//! Defines error types and handling for the command-line front end.

pub mod handlers;
pub mod types;

pub use types::*;
