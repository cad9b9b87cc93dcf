//! Input boundary: validation and interactive acquisition.
//!
//! The core never loops or prompts. Everything user-facing about getting a
//! sequence of non-negative integers lives here: a pure validator that
//! turns a line of text into a typed result, and a reprompting loop the
//! binary uses when no values arrive on the command line.

use std::io::{BufRead, Write};
use thiserror::Error;

/// Rejection reasons from the input boundary.
///
/// These are user-facing: in interactive mode each one is printed and the
/// prompt repeats; in argument mode the first one aborts the run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// No tokens at all
    #[error("array is empty, sorting not possible")]
    Empty,

    /// A token that does not parse as an integer
    #[error("'{0}' is not an integer")]
    NotAnInteger(String),

    /// A negative integer; the frequency table indexes by value
    #[error("counting sort does not support negative numbers ({0})")]
    Negative(i64),
}

/// Validates a whitespace-separated line of integers.
///
/// Tokens parse as signed integers first so a negative number is reported
/// as such rather than as unparseable. The first bad token wins.
pub fn parse_sequence(line: &str) -> Result<Vec<u64>, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(InputError::Empty);
    }
    tokens.into_iter().map(parse_token).collect()
}

fn parse_token(token: &str) -> Result<u64, InputError> {
    let value: i64 = token
        .parse()
        .map_err(|_| InputError::NotAnInteger(token.to_string()))?;
    u64::try_from(value).map_err(|_| InputError::Negative(value))
}

const PROMPT: &str = "Enter non-negative integers separated by space:";

/// Prompts until a valid sequence arrives.
///
/// Every rejection is echoed back and the prompt repeats; end of input is
/// an error the caller turns into process termination. Generic over the
/// reader and writer so the loop is testable without a terminal.
pub fn read_interactive<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
) -> anyhow::Result<Vec<u64>> {
    loop {
        writeln!(out, "{PROMPT}")?;
        out.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            anyhow::bail!("unexpected end of input");
        }

        match parse_sequence(&line) {
            Ok(values) => return Ok(values),
            Err(reason) => writeln!(out, "{reason}. Try again.")?,
        }
    }
}
