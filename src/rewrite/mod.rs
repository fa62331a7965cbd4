//! In-place pattern rewriting over a source tree
//!
//! `ImportRewriter` walks a root with the shared `TreeWalker`, picks files by
//! extension and applies an ordered list of `RewriteRule`s to each one. A
//! failure on one file is reported for that file and the batch continues.

mod rewriter;
mod rules;

pub use rewriter::{FileOutcome, FileReport, ImportRewriter, RewriteConfig, RewriteSummary};
pub use rules::{RewriteRule, apply_rules, default_rules};
