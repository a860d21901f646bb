//! Destination package manifest synthesis.
//! Merges the collected answers with the fields the boilerplate manifest
//! controls and writes the result back as the project's package.json.

use crate::answers::{Answers, Theme};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use std::fs;
use std::path::Path;

/// Package manifest file name
pub const MANIFEST_FILE: &str = "package.json";

/// Dependency every generated project carries
pub const BASE_DEPENDENCY: &str = "@extjs/ext-react";

/// Manifest fields carried verbatim from the boilerplate manifest.
/// These are never user-editable.
const CARRIED_FIELDS: [&str; 4] = ["main", "scripts", "dependencies", "devDependencies"];

/// Dependency key for a non-default theme, e.g. `@extjs/ext-react-theme-triton`.
pub fn theme_dependency(theme: Theme) -> String {
    format!("{}-{}", BASE_DEPENDENCY, theme.qualified())
}

fn insert_if_answered(
    fields: &mut IndexMap<String, serde_json::Value>,
    key: &str,
    answer: &str,
) {
    if !answer.is_empty() {
        fields.insert(key.to_string(), serde_json::Value::String(answer.to_string()));
    }
}

/// Builds and writes the destination manifest.
///
/// Field order: `name`, then every non-empty optional answer (version,
/// description, repository, keywords, author, license), then the fields
/// carried from the boilerplate manifest. When a non-default theme was
/// chosen, the theme dependency is added with the version string already
/// declared for the base dependency.
///
/// # Arguments
/// * `output_root` - Directory the boilerplate was copied into
/// * `answers` - The collected answer record
///
/// # Errors
/// * `Error::MissingTemplateFile` if the copied boilerplate manifest is absent
/// * `Error::ManifestError` if a non-default theme was chosen but the
///   boilerplate manifest does not declare the base dependency
pub fn synthesize(output_root: &Path, answers: &Answers) -> Result<()> {
    let manifest_path = output_root.join(MANIFEST_FILE);
    if !manifest_path.is_file() {
        return Err(Error::MissingTemplateFile { path: MANIFEST_FILE.to_string() });
    }

    let raw = fs::read_to_string(&manifest_path)?;
    let template_manifest: serde_json::Value = serde_json::from_str(&raw)?;

    let mut fields: IndexMap<String, serde_json::Value> = IndexMap::new();
    fields.insert(
        "name".to_string(),
        serde_json::Value::String(answers.package_name.clone()),
    );
    insert_if_answered(&mut fields, "version", &answers.version);
    insert_if_answered(&mut fields, "description", &answers.description);
    if !answers.git_repository.is_empty() {
        fields.insert(
            "repository".to_string(),
            serde_json::json!({
                "type": "git",
                "url": answers.git_repository,
            }),
        );
    }
    insert_if_answered(&mut fields, "keywords", &answers.keywords);
    insert_if_answered(&mut fields, "author", &answers.author);
    insert_if_answered(&mut fields, "license", &answers.license);

    for field in CARRIED_FIELDS {
        if let Some(value) = template_manifest.get(field) {
            fields.insert(field.to_string(), value.clone());
        }
    }

    if !answers.base_theme.is_default() {
        let dependencies = fields
            .get_mut("dependencies")
            .and_then(|value| value.as_object_mut())
            .ok_or_else(|| {
                Error::ManifestError(
                    "boilerplate manifest declares no dependencies".to_string(),
                )
            })?;

        let base_version = dependencies.get(BASE_DEPENDENCY).cloned().ok_or_else(|| {
            Error::ManifestError(format!(
                "boilerplate manifest does not declare '{}'",
                BASE_DEPENDENCY
            ))
        })?;
        dependencies.insert(theme_dependency(answers.base_theme), base_version);
    }

    debug!("Writing manifest for '{}'", answers.package_name);

    let rendered = serde_json::to_string_pretty(&fields)?;
    fs::write(&manifest_path, rendered + "\n")?;

    Ok(())
}
