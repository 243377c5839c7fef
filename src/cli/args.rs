//! Command-line arguments
//!
//! Defines the `string-validator` arguments and max length parsing.

use clap::Parser;

use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(
    name = "string-validator",
    version,
    about = "Check a string against the complexity policy"
)]
pub struct Cli {
    #[arg(long, help = "List the rules the string breaks on stderr")]
    pub explain: bool,
    #[arg(
        allow_hyphen_values = true,
        help = "String to validate (prompted for when omitted)"
    )]
    pub input: Option<String>,
    #[arg(
        allow_negative_numbers = true,
        help = "Maximum length in characters (prompted for when omitted)"
    )]
    pub max_length: Option<String>,
}

/// Parse a max length typed by the user or passed as an argument.
pub fn parse_max_length(raw: &str) -> Result<i64, CliError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|source| CliError::InvalidMaxLength {
            raw: raw.to_string(),
            source,
        })
}
