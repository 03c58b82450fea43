//! Input-source and output-sink seams for adapters.
//!
//! An adapter supplies where the raw text comes from and where the rendered
//! line goes; [`resolve`] runs the single read, classify, emit cycle.

use std::io::{self, Write};

use crate::classify::Classification;
use crate::error::Result;
use crate::parse::check_input;

/// Somewhere a single raw input can be read from.
pub trait InputSource {
    /// Read one raw value. `Ok(None)` means nothing was supplied.
    fn read_input(&mut self) -> io::Result<Option<String>>;
}

/// A fixed value, e.g. one taken from an environment variable or argument.
/// Yields its value once.
impl InputSource for Option<String> {
    fn read_input(&mut self) -> io::Result<Option<String>> {
        Ok(self.take())
    }
}

/// Somewhere a rendered result line is written.
pub trait OutputSink {
    fn emit(&mut self, line: &str) -> io::Result<()>;
}

impl<W: Write> OutputSink for W {
    fn emit(&mut self, line: &str) -> io::Result<()> {
        writeln!(self, "{line}")?;
        self.flush()
    }
}

/// Read one input from `source`, classify it, and emit `render(outcome)` to
/// `sink`. Returns the outcome so the caller can pick an exit status.
///
/// Only I/O failures of the source or sink surface as `Err`.
pub fn resolve<S, O, R>(
    source: &mut S,
    sink: &mut O,
    render: R,
) -> io::Result<Result<Classification>>
where
    S: InputSource,
    O: OutputSink,
    R: FnOnce(&Result<Classification>) -> String,
{
    let raw = source.read_input()?;
    let outcome = check_input(raw.as_deref());
    if let Err(err) = &outcome {
        tracing::debug!(code = err.code(), "input rejected");
    }
    sink.emit(&render(&outcome))?;
    Ok(outcome)
}
