//! dirtree - directory tree reports and in-place import rewriting

pub mod console;
pub mod error;
pub mod logging;
pub mod output;
pub mod report;
pub mod rewrite;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use console::{ColorMode, Console, Status, should_use_color};
pub use error::{ReportError, RewriteError};
pub use output::{DEFAULT_OUTPUT_FILE, echo_report, save_report};
pub use report::{Report, TreeReporter, generate_report};
pub use rewrite::{
    FileOutcome, FileReport, ImportRewriter, RewriteConfig, RewriteRule, RewriteSummary,
};
pub use tree::{TreeVisitor, TreeWalker, WalkStats, WalkerConfig};
