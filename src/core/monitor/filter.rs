//! Category filtering for report assembly.

use std::collections::HashSet;

/// Categories covered by the "all" wildcard. Network is deliberately absent:
/// the report carries a Network section but the assembler never populates
/// it, so auto-including it would be a no-op promise.
pub const ALL_CATEGORIES: [&str; 5] = ["cpu", "gpu", "memory", "motherboard", "storage"];

/// Resolved category selection for one report.
///
/// Tokens are expected lower-cased and trimmed by the caller; legality of
/// tokens is the CLI's concern, an unknown token here simply never matches.
#[derive(Debug, Clone)]
pub struct CategoryFilter {
    include_all: bool,
    categories: HashSet<String>,
}

impl CategoryFilter {
    /// Resolve a requested token list. Empty input or an "all" token selects
    /// every populated category.
    pub fn resolve(requested: &[String]) -> Self {
        let include_all = requested.is_empty() || requested.iter().any(|t| t == "all");
        let categories = if include_all {
            ALL_CATEGORIES.iter().map(|c| c.to_string()).collect()
        } else {
            requested.iter().cloned().collect()
        };
        Self {
            include_all,
            categories,
        }
    }

    /// Membership test for a device's mapped category key.
    pub fn includes(&self, category: &str) -> bool {
        self.include_all || self.categories.contains(category)
    }
}
