//! Report formatting and output
//!
//! - `lines` - glyphs and per-line rendering
//! - `formatter` - `ReportFormatter`, the walk visitor that assembles report text
//! - `save` - writing the report file, with a console fallback

mod formatter;
mod lines;
mod save;

pub use formatter::ReportFormatter;
pub use lines::{BRANCH, INDENT, missing_root_text};
pub use save::{CONSOLE_FALLBACK_HEADER, DEFAULT_OUTPUT_FILE, echo_report, save_report};
