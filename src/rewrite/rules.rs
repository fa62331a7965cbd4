//! Rewrite rules: a regex pattern plus literal replacement text

use std::borrow::Cow;

use regex::{NoExpand, Regex};

use crate::error::RewriteError;

/// Separator between pattern and replacement in a rule given on the command line.
pub const RULE_SEPARATOR: &str = "=>";

/// Replaces every match of `pattern` with `replacement`, taken literally
/// (`$1` and friends are not expanded).
#[derive(Debug, Clone)]
pub struct RewriteRule {
    pattern: Regex,
    replacement: String,
}

impl RewriteRule {
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self, RewriteError> {
        let regex = Regex::new(pattern).map_err(|e| RewriteError::InvalidRule {
            rule: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            pattern: regex,
            replacement: replacement.into(),
        })
    }

    /// Parse `PATTERN=>REPLACEMENT`. The pattern must not be empty; the
    /// replacement may be, which deletes matches.
    pub fn parse(spec: &str) -> Result<Self, RewriteError> {
        let (pattern, replacement) = spec.split_once(RULE_SEPARATOR).ok_or_else(|| {
            RewriteError::InvalidRule {
                rule: spec.to_string(),
                reason: format!("expected PATTERN{}REPLACEMENT", RULE_SEPARATOR),
            }
        })?;
        if pattern.is_empty() {
            return Err(RewriteError::InvalidRule {
                rule: spec.to_string(),
                reason: "empty pattern".to_string(),
            });
        }
        Self::new(pattern, replacement)
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(text, NoExpand(self.replacement.as_str()))
    }
}

const FROM_ALIAS: &str = r"from '@/";
const REQUIRE_ALIAS: &str = r"require\('@/";

fn builtin_rule(pattern: &str, replacement: &str) -> RewriteRule {
    RewriteRule {
        pattern: Regex::new(pattern).expect("built-in rewrite pattern is invalid"),
        replacement: replacement.to_string(),
    }
}

/// The import-alias fix: `'@/` module paths become `'#@/` in both
/// `import ... from` and `require(...)` forms.
pub fn default_rules() -> Vec<RewriteRule> {
    vec![
        builtin_rule(FROM_ALIAS, "from '#@/"),
        builtin_rule(REQUIRE_ALIAS, "require('#@/"),
    ]
}

/// Apply `rules` in order, each one seeing the previous one's output.
pub fn apply_rules(rules: &[RewriteRule], content: &str) -> String {
    let mut current = content.to_string();
    for rule in rules {
        let replaced = match rule.apply(&current) {
            Cow::Borrowed(_) => None,
            Cow::Owned(s) => Some(s),
        };
        if let Some(s) = replaced {
            current = s;
        }
    }
    current
}
