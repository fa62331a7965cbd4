//! TreeReporter - directory tree report generation
//!
//! A report is a pure function of the filesystem as observed during one walk:
//! nothing is written here. Saving the text is left to the caller (see
//! `output::save_report`).

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::output::{ReportFormatter, missing_root_text};
use crate::tree::{TreeWalker, WalkerConfig, absolute_path};

/// Report text together with the files it lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub text: String,
    /// Root-joined file paths in visit order.
    pub found_files: Vec<PathBuf>,
}

impl Report {
    pub fn into_parts(self) -> (String, Vec<PathBuf>) {
        (self.text, self.found_files)
    }
}

/// Builds directory reports with a fixed walker configuration.
pub struct TreeReporter {
    walker: TreeWalker,
}

impl TreeReporter {
    pub fn new(config: WalkerConfig) -> Self {
        Self {
            walker: TreeWalker::new(config),
        }
    }

    /// Generate the report for `root`.
    ///
    /// A nonexistent root yields the "path does not exist" text and no files
    /// rather than an error.
    pub fn generate(&self, root: &Path) -> Report {
        if !root.exists() {
            info!("report root '{}' does not exist", root.display());
            return Report {
                text: missing_root_text(root),
                found_files: Vec::new(),
            };
        }

        let mut formatter = ReportFormatter::new(&absolute_path(root));
        let stats = self.walker.walk(root, &mut formatter);
        debug!(
            "walked {} directories, {} files ({} skipped)",
            stats.dirs, stats.files, stats.skipped
        );
        formatter.finish()
    }
}

impl Default for TreeReporter {
    fn default() -> Self {
        Self::new(WalkerConfig::default())
    }
}

/// Generate a report for `root` with the default walker configuration.
pub fn generate_report(root: &Path) -> Report {
    TreeReporter::default().generate(root)
}
