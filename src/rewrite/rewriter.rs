//! ImportRewriter - applies rewrite rules to matching files under a root

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::RewriteError;
use crate::tree::{TreeVisitor, TreeWalker, WalkerConfig};

use super::rules::{RewriteRule, apply_rules, default_rules};

/// Extension selected when none is configured.
pub const DEFAULT_EXTENSION: &str = ".js";

/// Configuration for a rewrite run.
#[derive(Debug, Clone)]
pub struct RewriteConfig {
    /// File name suffix to match, e.g. `.js`.
    pub extension: String,
    pub rules: Vec<RewriteRule>,
    /// Report what would change without writing anything.
    pub dry_run: bool,
    pub walker: WalkerConfig,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            rules: default_rules(),
            dry_run: false,
            walker: WalkerConfig::default(),
        }
    }
}

impl RewriteConfig {
    /// Whether a file name ends with the configured extension.
    /// `js` and `.js` select the same files.
    pub fn matches(&self, file_name: &str) -> bool {
        if self.extension.is_empty() {
            return false;
        }
        if self.extension.starts_with('.') {
            file_name.ends_with(&self.extension)
        } else {
            file_name
                .strip_suffix(&self.extension)
                .is_some_and(|stem| stem.ends_with('.'))
        }
    }
}

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Content changed and was written back (or would be, in a dry run).
    Updated,
    Unchanged,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// Per-outcome counts for a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    pub updated: usize,
    pub unchanged: usize,
    pub failed: usize,
}

impl RewriteSummary {
    fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Updated => self.updated += 1,
            FileOutcome::Unchanged => self.unchanged += 1,
            FileOutcome::Failed(_) => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.updated + self.unchanged + self.failed
    }
}

/// Collects paths of files whose names match the configured extension.
struct MatchingFiles<'a> {
    config: &'a RewriteConfig,
    paths: Vec<PathBuf>,
}

impl TreeVisitor for MatchingFiles<'_> {
    fn visit_dir(&mut self, _path: &Path, _name: &str, _depth: usize) {}

    fn visit_file(&mut self, path: &Path, name: &str, _depth: usize) {
        if self.config.matches(name) {
            self.paths.push(path.to_path_buf());
        }
    }
}

pub struct ImportRewriter {
    config: RewriteConfig,
}

impl ImportRewriter {
    pub fn new(config: RewriteConfig) -> Self {
        Self { config }
    }

    /// Rewrite one file in place. Returns whether its content changed.
    pub fn rewrite_file(&self, path: &Path) -> Result<bool, RewriteError> {
        let content = fs::read_to_string(path).map_err(RewriteError::Read)?;
        let rewritten = apply_rules(&self.config.rules, &content);
        if rewritten == content {
            return Ok(false);
        }

        if self.config.dry_run {
            debug!("dry run, leaving {} untouched", path.display());
        } else {
            fs::write(path, rewritten).map_err(RewriteError::Write)?;
        }
        Ok(true)
    }

    /// Rewrite every matching file under `root`, calling `on_file` as each
    /// one is processed. Files are collected before any is modified.
    pub fn rewrite_tree<F>(
        &self,
        root: &Path,
        mut on_file: F,
    ) -> Result<RewriteSummary, RewriteError>
    where
        F: FnMut(&FileReport),
    {
        if !root.is_dir() {
            return Err(RewriteError::RootNotDirectory(root.to_path_buf()));
        }

        let mut matching = MatchingFiles {
            config: &self.config,
            paths: Vec::new(),
        };
        let stats = TreeWalker::new(self.config.walker.clone()).walk(root, &mut matching);
        info!(
            "{} of {} files under {} match '{}'",
            matching.paths.len(),
            stats.files,
            root.display(),
            self.config.extension
        );

        let mut summary = RewriteSummary::default();
        for path in matching.paths {
            let outcome = match self.rewrite_file(&path) {
                Ok(true) => FileOutcome::Updated,
                Ok(false) => FileOutcome::Unchanged,
                Err(e) => FileOutcome::Failed(e.to_string()),
            };
            summary.record(&outcome);
            on_file(&FileReport { path, outcome });
        }
        Ok(summary)
    }
}

impl Default for ImportRewriter {
    fn default() -> Self {
        Self::new(RewriteConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, rel: &str, content: &[u8]) -> PathBuf {
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_extension_matching() {
        let config = RewriteConfig::default();
        assert!(config.matches("app.js"));
        assert!(!config.matches("app.jsx"));
        assert!(!config.matches("app.mjs"));
        assert!(!config.matches("js"));

        let bare = RewriteConfig {
            extension: "ts".to_string(),
            ..Default::default()
        };
        assert!(bare.matches("index.ts"));
        assert!(!bare.matches("index.cts"));
        assert!(!bare.matches("ts"));
    }

    #[test]
    fn test_rewrite_file_updates_content() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "a.js", b"import x from '@/x';\n");

        let changed = ImportRewriter::default().rewrite_file(&path).unwrap();
        assert!(changed);
        assert_eq!(fs::read_to_string(&path).unwrap(), "import x from '#@/x';\n");
    }

    #[test]
    fn test_rewrite_file_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "a.js", b"import x from './x';\n");

        let changed = ImportRewriter::default().rewrite_file(&path).unwrap();
        assert!(!changed);
    }

    #[test]
    fn test_dry_run_leaves_file_alone() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "a.js", b"require('@/x');\n");

        let rewriter = ImportRewriter::new(RewriteConfig {
            dry_run: true,
            ..Default::default()
        });
        assert!(rewriter.rewrite_file(&path).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "require('@/x');\n");
    }

    #[test]
    fn test_rewrite_tree_reports_each_file() {
        let dir = TempDir::new().unwrap();
        write(&dir, "main.js", b"import a from '@/a';\n");
        write(&dir, "lib/util.js", b"export const x = 1;\n");
        write(&dir, "lib/bad.js", &[0xff, 0xfe, 0x00]);
        write(&dir, "notes.txt", b"from '@/not-touched'\n");

        let rewriter = ImportRewriter::new(RewriteConfig {
            walker: WalkerConfig::sorted(),
            ..Default::default()
        });
        let mut reports = Vec::new();
        let summary = rewriter
            .rewrite_tree(dir.path(), |r| reports.push(r.clone()))
            .unwrap();

        assert_eq!(
            summary,
            RewriteSummary {
                updated: 1,
                unchanged: 1,
                failed: 1
            }
        );
        assert_eq!(summary.total(), 3);
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].path, dir.path().join("main.js"));
        assert_eq!(reports[0].outcome, FileOutcome::Updated);
        assert_eq!(reports[1].path, dir.path().join("lib/bad.js"));
        assert!(matches!(reports[1].outcome, FileOutcome::Failed(_)));
        assert_eq!(reports[2].outcome, FileOutcome::Unchanged);

        assert_eq!(
            fs::read_to_string(dir.path().join("notes.txt")).unwrap(),
            "from '@/not-touched'\n"
        );
    }

    #[test]
    fn test_rewrite_tree_missing_root() {
        let dir = TempDir::new().unwrap();
        let err = ImportRewriter::default()
            .rewrite_tree(&dir.path().join("src"), |_| {})
            .unwrap_err();
        assert!(matches!(err, RewriteError::RootNotDirectory(_)));
    }
}
