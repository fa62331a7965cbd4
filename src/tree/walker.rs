//! TreeWalker - depth-first, pre-order directory traversal

use std::fs::DirEntry;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::config::WalkerConfig;
use super::utils::entry_name;

/// Callback for tree traversal - receives each directory and file in visit order.
pub trait TreeVisitor {
    /// Called once per directory, before any of its files.
    /// `depth` is the number of path components below the walk root (root = 0).
    fn visit_dir(&mut self, path: &Path, name: &str, depth: usize);

    /// Called for each non-directory entry. `depth` is the depth of the
    /// directory containing the file.
    fn visit_file(&mut self, path: &Path, name: &str, depth: usize);
}

/// Counters gathered during a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub dirs: usize,
    pub files: usize,
    /// Directories or entries that could not be read, plus skipped symlink cycles.
    pub skipped: usize,
}

/// A directory entry sorted into the two buckets the walk cares about.
enum EntryKind {
    Dir,
    File,
    /// Symlinked directory while symlinks are not followed.
    Skip,
}

/// Tree walker that streams directories and files to a `TreeVisitor`.
///
/// Traversal failures never abort the walk: an unreadable directory or entry
/// is logged and skipped, and the rest of the tree is still visited.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and report every directory and file to `visitor`.
    ///
    /// Paths handed to the visitor are `root` joined with the relative path,
    /// so they are absolute only if `root` is.
    pub fn walk<V: TreeVisitor>(&self, root: &Path, visitor: &mut V) -> WalkStats {
        let mut stats = WalkStats::default();
        let mut ancestors = Vec::new();
        if root.is_dir() {
            self.walk_dir(root, 0, visitor, &mut ancestors, &mut stats);
        } else {
            debug!("{} is not a directory, nothing to walk", root.display());
        }
        stats
    }

    fn walk_dir<V: TreeVisitor>(
        &self,
        path: &Path,
        depth: usize,
        visitor: &mut V,
        ancestors: &mut Vec<PathBuf>,
        stats: &mut WalkStats,
    ) {
        // Only a followed symlink can lead back to an ancestor.
        let canonical = if self.config.follow_symlinks {
            match path.canonicalize() {
                Ok(c) => Some(c),
                Err(e) => {
                    warn!("cannot resolve '{}': {}", path.display(), e);
                    None
                }
            }
        } else {
            None
        };
        if let Some(ref c) = canonical {
            if ancestors.contains(c) {
                warn!(
                    "skipping '{}': symlink cycle back to '{}'",
                    path.display(),
                    c.display()
                );
                stats.skipped += 1;
                return;
            }
        }

        let entries = match self.read_entries(path, stats) {
            Some(e) => e,
            None => return,
        };

        stats.dirs += 1;
        visitor.visit_dir(path, &entry_name(path), depth);

        let mut subdirs = Vec::new();
        for entry in entries {
            let entry_path = entry.path();
            match self.classify(&entry) {
                EntryKind::Dir => subdirs.push(entry_path),
                EntryKind::File => {
                    stats.files += 1;
                    visitor.visit_file(&entry_path, &entry_name(&entry_path), depth);
                }
                EntryKind::Skip => {
                    debug!("not following symlinked directory '{}'", entry_path.display());
                }
            }
        }

        let pushed = canonical.is_some();
        if let Some(c) = canonical {
            ancestors.push(c);
        }
        for subdir in subdirs {
            self.walk_dir(&subdir, depth + 1, visitor, ancestors, stats);
        }
        if pushed {
            ancestors.pop();
        }
    }

    /// Read a directory's entries, optionally sorted by name.
    /// Returns `None` (and logs) if the directory cannot be listed.
    fn read_entries(&self, path: &Path, stats: &mut WalkStats) -> Option<Vec<DirEntry>> {
        let read_dir = match std::fs::read_dir(path) {
            Ok(r) => r,
            Err(e) => {
                warn!("cannot read directory '{}': {}", path.display(), e);
                stats.skipped += 1;
                return None;
            }
        };

        let mut entries = Vec::new();
        for entry in read_dir {
            match entry {
                Ok(e) => entries.push(e),
                Err(e) => {
                    warn!("cannot read entry in '{}': {}", path.display(), e);
                    stats.skipped += 1;
                }
            }
        }

        if self.config.sort_entries {
            entries.sort_by_key(|a| a.file_name());
        }
        Some(entries)
    }

    fn classify(&self, entry: &DirEntry) -> EntryKind {
        let file_type = match entry.file_type() {
            Ok(t) => t,
            // Entry vanished or is unreadable: list it as a file.
            Err(_) => return EntryKind::File,
        };

        if file_type.is_dir() {
            EntryKind::Dir
        } else if file_type.is_symlink() && entry.path().is_dir() {
            if self.config.follow_symlinks {
                EntryKind::Dir
            } else {
                EntryKind::Skip
            }
        } else {
            EntryKind::File
        }
    }
}
