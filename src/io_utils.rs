//! I/O convenience helpers used by the scanner.

use std::io::{self, BufRead, BufReader, Read};

/// Read all lines from a reader into a `Vec<String>` (without trailing newlines).
///
/// Fails with an `io::Error` on invalid UTF-8, which callers treat as an
/// unreadable (binary or foreign-encoded) file.
pub fn read_to_lines<R: Read>(reader: R) -> io::Result<Vec<String>> {
    let buf = BufReader::new(reader);
    buf.lines().collect()
}
