//! Exclusion pattern handling for the boilerplate tree.
//! Compiles the fixed subtree exclusions into a glob set used while copying,
//! similar to .gitignore matching.

use crate::error::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Boilerplate subtrees that are never copied into a generated project.
pub const EXCLUDED_SUBTREES: [&str; 2] = ["build/**", "node_modules/**"];

/// Compiles exclusion patterns into a set of glob matchers.
///
/// A `<root>/**` pattern only matches entries below `<root>`; the bare root
/// entry is added as well so the whole subtree disappears from the copy.
///
/// # Arguments
/// * `patterns` - Exclusion patterns, relative to the boilerplate root
///
/// # Returns
/// * `Result<GlobSet>` - Set of compiled glob patterns for path matching
///
/// # Errors
/// * `Error::GlobError` if a pattern fails to compile
pub fn build_exclude_set(patterns: &[&str]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
        if let Some(root) = pattern.strip_suffix("/**") {
            builder.add(Glob::new(root)?);
        }
    }

    Ok(builder.build()?)
}
