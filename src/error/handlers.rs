//! Error handlers
//!
//! Logs front end errors and maps them to process exit codes.

use crate::error::types::CliError;
use log::debug;

/// Exit code for bad command-line usage
pub const EXIT_USAGE: i32 = 2;
/// Exit code for failed reads or writes on the terminal
pub const EXIT_IO: i32 = 74;
/// Exit code for an unusable configuration
pub const EXIT_CONFIG: i32 = 78;

/// Handle a front end error
///
/// The message itself is printed by the caller; this only records the details.
pub fn handle_error(err: &CliError) {
    debug!("string-validator error: {:?}", err);
}

/// Convert error to process exit code
pub fn error_to_exit_code(err: &CliError) -> i32 {
    match err {
        CliError::InvalidMaxLength { .. } => EXIT_USAGE,
        CliError::MissingInput(_) => EXIT_USAGE,
        CliError::Io(_) => EXIT_IO,
        CliError::Config(_) => EXIT_CONFIG,
    }
}
