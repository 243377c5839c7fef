//! Interactive prompting
//!
//! Asks a question on the output stream and reads one answer line from the input stream.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::CliError;

pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    asked: bool,
}

impl<R, W> Prompter<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            asked: false,
        }
    }

    /// Writes `question` and returns the next line, without its line terminator.
    ///
    /// `what` names the expected answer in the error raised when the input is closed.
    pub async fn ask(&mut self, question: &str, what: &'static str) -> Result<String, CliError> {
        self.asked = true;
        self.writer.write_all(question.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;

        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Err(CliError::MissingInput(what));
        }

        // Only the terminator goes; other whitespace is part of the answer
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(line)
    }

    /// Whether any question has been shown
    pub fn has_asked(&self) -> bool {
        self.asked
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }
}
