//! Placeholder substitution in copied boilerplate files.
//! The boilerplate carries a known theme token and a known application title;
//! both are replaced in a fixed set of files after copying.

use crate::answers::Answers;
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Theme package manifest inside the boilerplate, relative to its root
pub const THEME_MANIFEST: &str = "ext-react/packages/custom-ext-react-theme/package.json";

/// HTML entry point carrying the application title
pub const INDEX_HTML: &str = "src/index.html";

/// Layout source carrying the application title
pub const LAYOUT_SOURCE: &str = "src/Layout.js";

/// Theme token the boilerplate ships with
pub const DEFAULT_THEME_TOKEN: &str = "theme-material";

/// Application title the boilerplate ships with
pub const DEFAULT_TITLE_TOKEN: &str = "ExtReact Boilerplate";

/// A single find-and-replace applied to one copied boilerplate file.
#[derive(Debug)]
pub struct RewriteTarget {
    /// File to rewrite, relative to the output root
    pub path: &'static str,
    /// Literal token searched for
    pub token: &'static str,
    /// Replacement value
    pub replacement: String,
}

/// The fixed placeholder table: which files are rewritten and with what.
pub fn placeholder_targets(answers: &Answers) -> Vec<RewriteTarget> {
    vec![
        RewriteTarget {
            path: THEME_MANIFEST,
            token: DEFAULT_THEME_TOKEN,
            replacement: answers.base_theme.qualified(),
        },
        RewriteTarget {
            path: INDEX_HTML,
            token: DEFAULT_TITLE_TOKEN,
            replacement: answers.app_name.clone(),
        },
        RewriteTarget {
            path: LAYOUT_SOURCE,
            token: DEFAULT_TITLE_TOKEN,
            replacement: answers.app_name.clone(),
        },
    ]
}

/// Applies every rewrite target to the copied tree.
///
/// Replacement is a literal substring replace of the first occurrence only;
/// all other file content is left byte-identical.
///
/// # Arguments
/// * `output_root` - Directory the boilerplate was copied into
/// * `targets` - Rewrite table from [`placeholder_targets`]
///
/// # Errors
/// * `Error::MissingTemplateFile` if a target file is absent after copying;
///   the boilerplate is assumed internally consistent, so this is fatal
pub fn apply_rewrites(output_root: &Path, targets: &[RewriteTarget]) -> Result<()> {
    for target in targets {
        let path = output_root.join(target.path);
        if !path.is_file() {
            return Err(Error::MissingTemplateFile { path: target.path.to_string() });
        }

        debug!("Rewriting '{}' in '{}'", target.token, target.path);

        let content = fs::read_to_string(&path)?;
        let rewritten = content.replacen(target.token, &target.replacement, 1);
        fs::write(&path, rewritten)?;
    }

    Ok(())
}
