//! Reading interactive input.

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// The line is trimmed. Returns `None` on EOF or a read error.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use liarsclub_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  t 3 \n");
/// assert_eq!(read_stdin_line(&mut input), Some("t 3".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(e) => {
            tracing::warn!(error = %e, "stdin read failed");
            None
        }
    }
}
