//! Directory tree walking logic
//!
//! `TreeWalker` performs a depth-first, pre-order traversal: each directory is
//! reported before the files it directly contains, and those files before any
//! of its subdirectories are entered. Callers receive the walk through the
//! `TreeVisitor` trait, so the report builder and the import rewriter share
//! one traversal.

mod config;
mod utils;
mod walker;

pub use config::WalkerConfig;
pub use utils::{absolute_path, entry_name};
pub use walker::{TreeVisitor, TreeWalker, WalkStats};
