use std::io::{BufWriter, Write};

use crate::error::{OutputError, OutputResult};

/// Destination for the text lines the orchestrator and its helpers emit.
///
/// Emission is infallible from the caller's point of view; sinks that can
/// fail keep the error and report it from their own `finish`.
pub trait LineSink {
    fn emit(&mut self, line: &str);
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn emit(&mut self, line: &str) {
        (**self).emit(line);
    }
}

/// In-memory record of every emitted line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Drops and returns everything recorded so far.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl LineSink for Transcript {
    fn emit(&mut self, line: &str) {
        self.lines.push(line.to_owned());
    }
}

/// Writes each line to an `io::Write`, buffered.
///
/// The first write error is latched; later lines are dropped and the error is
/// returned by [`WriterSink::finish`].
pub struct WriterSink<W: Write> {
    writer: BufWriter<W>,
    error: Option<OutputError>,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            error: None,
        }
    }

    pub fn has_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Flushes buffered output and reports the first failure, if any.
    pub fn finish(mut self) -> OutputResult<()> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush().map_err(OutputError::Flush)
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn emit(&mut self, line: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.writer, "{line}") {
            tracing::debug!(error = %err, "output sink failed, dropping further lines");
            self.error = Some(OutputError::Write(err));
        }
    }
}
