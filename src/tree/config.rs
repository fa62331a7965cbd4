//! Configuration types for tree walkers

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Descend into symlinked directories as if they were ordinary ones.
    /// A link that points back at one of its own ancestors is skipped.
    pub follow_symlinks: bool,
    /// Sort each directory's entries by file name instead of keeping the
    /// order the filesystem returns them in.
    pub sort_entries: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: true,
            sort_entries: false,
        }
    }
}

impl WalkerConfig {
    /// Config with name-sorted entries, for reproducible output.
    pub fn sorted() -> Self {
        Self {
            sort_entries: true,
            ..Default::default()
        }
    }
}
