//! Validation run
//!
//! Resolves both inputs from arguments, configuration or prompts, then reports the verdict.

use log::{debug, info};
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};

use super::args::{Cli, parse_max_length};
use crate::config::ValidatorConfig;
use crate::error::CliError;
use crate::prompt::Prompter;
use crate::validator::{evaluate, is_valid};

const INPUT_PROMPT: &str = "Enter the string to validate:";
const MAX_LENGTH_PROMPT: &str = "Enter the max length:";

/// Both values a validation needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub input: String,
    pub max_length: i64,
}

/// Fill in whatever the arguments leave out, from the config default or by prompting.
pub async fn resolve<R, W>(
    cli: &Cli,
    config: &ValidatorConfig,
    prompter: &mut Prompter<R, W>,
) -> Result<Request, CliError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let input = match &cli.input {
        Some(input) => input.clone(),
        None => prompter.ask(INPUT_PROMPT, "the string to validate").await?,
    };

    let max_length = match (&cli.max_length, config.default_max_length) {
        (Some(raw), _) => parse_max_length(raw)?,
        (None, Some(default)) => {
            debug!("Using configured default max length {}", default);
            default
        }
        (None, None) => {
            let raw = prompter.ask(MAX_LENGTH_PROMPT, "the max length").await?;
            parse_max_length(&raw)?
        }
    };

    Ok(Request { input, max_length })
}

/// Runs one validation and writes the verdict.
///
/// The verdict goes to the prompter's writer, failed rules to `explain_out` when
/// explaining is enabled. Returns the verdict.
pub async fn run<R, W, E>(
    cli: &Cli,
    config: &ValidatorConfig,
    prompter: &mut Prompter<R, W>,
    explain_out: &mut E,
) -> Result<bool, CliError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    E: AsyncWrite + Unpin,
{
    let request = resolve(cli, config, prompter).await?;
    let interactive = prompter.has_asked();
    debug!(
        "Validating {} characters against max length {} ({} mode)",
        request.input.chars().count(),
        request.max_length,
        if interactive { "interactive" } else { "argument" }
    );

    let valid = is_valid(&request.input, request.max_length);
    info!("Validation result: {}", valid);

    if cli.explain || config.explain {
        let report = evaluate(&request.input, request.max_length);
        for rule in report.failed_rules() {
            debug!("Failed rule: {:?}", rule);
            explain_out
                .write_all(format!("- {}\n", rule).as_bytes())
                .await?;
        }
        explain_out.flush().await?;
    }

    let verdict = if interactive {
        format!("Is the string valid? {}\n", valid)
    } else {
        format!("{}\n", valid)
    };
    let out = prompter.writer_mut();
    out.write_all(verdict.as_bytes()).await?;
    out.flush().await?;

    Ok(valid)
}
