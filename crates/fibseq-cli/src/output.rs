//! Line-oriented sequence output.

use std::io::Write;
use std::time::Duration;

/// Error writing rendered output to the sink.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// The underlying sink failed.
    #[error("output write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Write one `<index> - <value>` line per sequence element.
pub fn write_sequence<W: Write>(out: &mut W, seq: &[i32]) -> Result<(), OutputError> {
    for (index, value) in seq.iter().enumerate() {
        writeln!(out, "{index} - {value}")?;
    }
    Ok(())
}

/// Write the closing timing line, with the duration truncated to whole
/// seconds.
pub fn write_elapsed<W: Write>(out: &mut W, elapsed: Duration) -> Result<(), OutputError> {
    writeln!(
        out,
        "Time taken by the function: {} seconds",
        elapsed.as_secs()
    )?;
    Ok(())
}
