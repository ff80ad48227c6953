//! UI helper functions for terminal output.

use std::io::Write;
use std::time::Duration;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Writes one announcement line and keeps it on screen for `pause_ms`.
pub fn announce(out: &mut dyn Write, line: &str, pause_ms: u64) -> std::io::Result<()> {
    writeln!(out, ">> {}", line)?;
    out.flush()?;
    if pause_ms > 0 {
        std::thread::sleep(Duration::from_millis(pause_ms));
    }
    Ok(())
}
