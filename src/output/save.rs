//! Writing report text to its destination

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use crate::error::ReportError;

/// File name the report is written to when no other is configured.
pub const DEFAULT_OUTPUT_FILE: &str = "directory_tree_output.txt";

/// Heading printed above the report when it has to go to the console instead.
pub const CONSOLE_FALLBACK_HEADER: &str = "\n--- Console Output (if file save failed) ---";

/// Write `text` as UTF-8 to `path`, replacing any existing file.
///
/// The file handle is dropped on every return path, including errors.
pub fn save_report(text: &str, path: &Path) -> Result<(), ReportError> {
    let write_err = |source: io::Error| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(write_err)?;
    file.write_all(text.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;
    debug!("wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

/// Echo the report after a failed save: fallback header, then the text.
pub fn echo_report<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "{}", CONSOLE_FALLBACK_HEADER)?;
    writeln!(out, "{}", text)?;
    out.flush()
}
