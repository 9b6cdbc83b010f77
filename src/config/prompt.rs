//! Interactive console setup.
//!
//! Asks for the roster and stage dimensions one line at a time and builds a
//! [`StageConfig`]. Generic over the reader and writer so it can run against
//! in-memory buffers.

use std::io::{BufRead, Write};

use thiserror::Error;

use super::{parse_name_list, AudienceDirection, ConfigError, StageConfig};

/// Errors that end the startup prompts.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("input ended before {field} was entered")]
    UnexpectedEof { field: &'static str },
    #[error("{field} must be a whole number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Run the startup prompts
pub fn prompt_config<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<StageConfig, PromptError> {
    let performer_count: usize = ask_number(input, output, "Number of performers: ", "performer count")?;
    let names = ask_line(input, output, "Performer names (comma separated, optional): ")?
        .unwrap_or_default();
    let rows: u32 = ask_number(input, output, "Stage rows: ", "row count")?;
    let cols: u32 = ask_number(input, output, "Stage columns: ", "column count")?;
    let audience = ask_line(input, output, "Audience direction (top or bottom): ")?
        .ok_or(PromptError::UnexpectedEof { field: "audience direction" })?
        .parse::<AudienceDirection>()?;

    let config = StageConfig::new(performer_count, parse_name_list(&names), rows, cols, audience)?;
    log::debug!("Prompted config: {:?}", config);
    Ok(config)
}

/// Print `prompt` and read one line. `None` on end of input.
fn ask_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>, PromptError> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn ask_number<R: BufRead, W: Write, T: std::str::FromStr>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    field: &'static str,
) -> Result<T, PromptError> {
    let line = ask_line(input, output, prompt)?.ok_or(PromptError::UnexpectedEof { field })?;
    let value = line.trim();
    value.parse().map_err(|_| PromptError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
