//! Error types
//!
//! Defines the errors the command-line front end can raise. The validator itself
//! has no error conditions.

use std::fmt;
use std::io;
use std::num::ParseIntError;

/// Command-line front end errors
#[derive(Debug)]
pub enum CliError {
    InvalidMaxLength { raw: String, source: ParseIntError },
    MissingInput(&'static str),
    Io(io::Error),
    Config(config::ConfigError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidMaxLength { raw, source } => {
                write!(f, "Invalid max length {:?}: {}", raw, source)
            }
            CliError::MissingInput(what) => write!(f, "Input closed before {} was entered", what),
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::InvalidMaxLength { source, .. } => Some(source),
            CliError::Io(e) => Some(e),
            CliError::Config(e) => Some(e),
            CliError::MissingInput(_) => None,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(error: io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<config::ConfigError> for CliError {
    fn from(error: config::ConfigError) -> Self {
        CliError::Config(error)
    }
}
