//! Buffered result presenter.

use std::io::{BufWriter, Write};
use std::time::Duration;

use crate::output::{self, OutputError};

/// Presents a generated sequence on a buffered sink.
///
/// All writes go through a `BufWriter`; nothing reaches the sink until
/// `finish` flushes it or the buffer fills.
pub struct CliPresenter<W: Write> {
    out: BufWriter<W>,
}

impl<W: Write> CliPresenter<W> {
    #[must_use]
    pub fn new(sink: W) -> Self {
        Self {
            out: BufWriter::new(sink),
        }
    }

    /// Write every `<index> - <value>` line.
    pub fn present_sequence(&mut self, seq: &[i32]) -> Result<(), OutputError> {
        output::write_sequence(&mut self.out, seq)
    }

    /// Write the final timing line.
    pub fn present_elapsed(&mut self, elapsed: Duration) -> Result<(), OutputError> {
        output::write_elapsed(&mut self.out, elapsed)
    }

    /// Flush buffered output to the sink.
    pub fn finish(mut self) -> Result<(), OutputError> {
        self.out.flush()?;
        Ok(())
    }
}
