//! Console adapter: one input, one printed line.

use std::io::{self, BufRead, Write};

use clap::Parser;
use numsign_core::{Classification, InputSource, resolve};

use crate::exit_codes;

/// Environment variable overriding the interactive prompt.
pub const TEST_NUMBER_ENV: &str = "TEST_NUMBER";

/// Prompt written to stdout before reading a line.
pub const PROMPT: &str = "Enter a number: ";

/// Classify a number as POSITIVE, NEGATIVE or ZERO
#[derive(Debug, Default, Parser)]
#[command(name = "numsign", version, allow_negative_numbers = true)]
pub struct ConsoleCli {
    /// Number to classify (default: $TEST_NUMBER, else prompt on stdin)
    pub number: Option<String>,

    /// Print `{"result": ...}` / `{"error": ...}` instead of plain text
    #[arg(long)]
    pub json: bool,
}

impl ConsoleCli {
    /// Run against the real process environment, stdin and stdout.
    pub fn run(self) -> i32 {
        let env_value = std::env::var(TEST_NUMBER_ENV).ok();
        let stdin = io::stdin();
        let stdout = io::stdout();
        match self.execute(env_value, stdin.lock(), &mut stdout.lock()) {
            Ok(_) => exit_codes::SUCCESS,
            Err(e) => {
                tracing::error!("console I/O failed: {e}");
                exit_codes::IO_ERROR
            }
        }
    }

    /// Pick the input source, classify, and print exactly one line after the
    /// optional prompt.
    pub fn execute<R, W>(
        self,
        env_value: Option<String>,
        input: R,
        out: &mut W,
    ) -> io::Result<numsign_core::Result<Classification>>
    where
        R: BufRead,
        W: Write,
    {
        let render = if self.json { render_json } else { render_plain };
        match self.number.or(env_value) {
            Some(preset) => {
                tracing::debug!("using preset input");
                resolve(&mut Some(preset), out, render)
            }
            None => {
                write!(out, "{PROMPT}")?;
                out.flush()?;
                resolve(&mut LineSource::new(input), out, render)
            }
        }
    }
}

/// Reads a single line; end of stream before any data yields `None`.
pub struct LineSource<R> {
    input: R,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> InputSource for LineSource<R> {
    fn read_input(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn render_plain(outcome: &numsign_core::Result<Classification>) -> String {
    match outcome {
        Ok(classification) => classification.message(),
        Err(err) => format!("Error: {err}"),
    }
}

fn render_json(outcome: &numsign_core::Result<Classification>) -> String {
    let value = match outcome {
        Ok(classification) => serde_json::json!({ "result": classification.message() }),
        Err(err) => serde_json::json!({ "error": err.to_string() }),
    };
    value.to_string()
}
