//! Boilerplate materialization and scaffolding orchestration.
//! Copies the boilerplate tree into the destination and drives the
//! rewrite and manifest stages over the copied files.

use crate::answers::Answers;
use crate::error::{Error, Result};
use crate::ignore::{build_exclude_set, EXCLUDED_SUBTREES};
use crate::manifest;
use crate::rewrite;
use globset::GlobSet;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Resolves the directory all generated files are written under.
///
/// When the user asked for a new directory, it is named after the package
/// and must not already exist unless `force` is set. Otherwise generation
/// happens in the current working directory.
///
/// # Arguments
/// * `answers` - The collected answer record
/// * `force` - Whether to overwrite an existing project directory
///
/// # Errors
/// * `Error::OutputDirectoryExists` if the project directory exists and
///   force is false
pub fn resolve_output_root(answers: &Answers, force: bool) -> Result<PathBuf> {
    if !answers.create_directory {
        return Ok(PathBuf::from("."));
    }

    let output_root = PathBuf::from(&answers.package_name);
    if output_root.exists() && !force {
        return Err(Error::OutputDirectoryExists {
            output_dir: output_root.display().to_string(),
        });
    }

    Ok(output_root)
}

/// Copies every boilerplate entry into the output directory, preserving
/// relative paths.
///
/// Hidden (dot-prefixed) entries are included; entries matching the
/// exclusion set are skipped. Files are copied verbatim, no content is
/// inspected at this stage.
///
/// # Arguments
/// * `template_root` - Boilerplate directory to copy from
/// * `output_root` - Destination directory, created if absent
/// * `excludes` - Compiled exclusion patterns
///
/// # Returns
/// * `Result<usize>` - Number of files copied
///
/// # Errors
/// * `Error::TemplateDoesNotExist` if the boilerplate directory is missing
/// * `Error::IoError` if a directory cannot be created or a copy fails;
///   the failure is fatal and no partial cleanup is performed
pub fn materialize(
    template_root: &Path,
    output_root: &Path,
    excludes: &GlobSet,
) -> Result<usize> {
    if !template_root.is_dir() {
        return Err(Error::TemplateDoesNotExist {
            template_dir: template_root.display().to_string(),
        });
    }

    fs::create_dir_all(output_root)?;

    let mut copied = 0;
    for dir_entry in WalkDir::new(template_root) {
        let entry = dir_entry.map_err(|e| Error::TemplateError(e.to_string()))?;
        let relative_path = entry
            .path()
            .strip_prefix(template_root)
            .map_err(|e| Error::TemplateError(e.to_string()))?;

        if relative_path.as_os_str().is_empty() {
            continue;
        }

        if excludes.is_match(relative_path) {
            debug!("Skipping excluded entry '{}'", relative_path.display());
            continue;
        }

        let target = output_root.join(relative_path);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Generates the project tree: copy the boilerplate, rewrite the placeholder
/// files, synthesize the destination manifest.
///
/// The stages run strictly in that order and any failure stops the run
/// before the next stage.
///
/// # Arguments
/// * `template_root` - Boilerplate directory
/// * `output_root` - Destination directory
/// * `answers` - The collected answer record
pub fn scaffold(template_root: &Path, output_root: &Path, answers: &Answers) -> Result<()> {
    let excludes = build_exclude_set(&EXCLUDED_SUBTREES)?;

    let copied = materialize(template_root, output_root, &excludes)?;
    debug!("Copied {} file(s) from '{}'", copied, template_root.display());

    rewrite::apply_rewrites(output_root, &rewrite::placeholder_targets(answers))?;
    manifest::synthesize(output_root, answers)?;

    Ok(())
}
