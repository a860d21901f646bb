//! Question definitions and answer collection.
//! Presents the fixed question sequence, applies defaults and produces the
//! immutable answer record every later stage reads.

use crate::error::Result;
use crate::prompt::Prompter;
use cruet::Inflector;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Default application name offered by the first question
pub const DEFAULT_APP_NAME: &str = "My ExtReact App";

/// Default package version
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Default package license
pub const DEFAULT_LICENSE: &str = "ISC";

/// Base theme selection for the generated application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Material,
    Triton,
    Ios,
}

impl Theme {
    /// Themes offered by the theme question, in presentation order.
    /// The first entry is the theme the boilerplate ships with.
    pub const CHOICES: [Theme; 3] = [Theme::Material, Theme::Triton, Theme::Ios];

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Material => "material",
            Theme::Triton => "triton",
            Theme::Ios => "ios",
        }
    }

    /// Theme package token, e.g. `theme-triton`.
    pub fn qualified(&self) -> String {
        format!("theme-{}", self.label())
    }

    /// Whether this is the theme the boilerplate already uses.
    pub fn is_default(&self) -> bool {
        matches!(self, Theme::Material)
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The complete answer record collected once per run.
///
/// Optional text answers keep the empty string for "unset"; the manifest
/// merge only materializes non-empty values.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Answers {
    pub app_name: String,
    pub package_name: String,
    pub base_theme: Theme,
    pub version: String,
    pub description: String,
    pub git_repository: String,
    pub keywords: String,
    pub author: String,
    pub license: String,
    pub create_directory: bool,
}

/// Answers supplied up front as a JSON object on stdin.
/// Any present key suppresses the corresponding interactive prompt.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreloadedAnswers {
    pub app_name: Option<String>,
    pub package_name: Option<String>,
    pub base_theme: Option<Theme>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub git_repository: Option<String>,
    pub keywords: Option<String>,
    pub author: Option<String>,
    pub license: Option<String>,
    pub create_directory: Option<bool>,
}

/// Reads preloaded answers from stdin when requested.
///
/// # Arguments
/// * `take_from_stdin` - Whether the `--stdin` flag was passed
///
/// # Returns
/// * `Result<PreloadedAnswers>` - Parsed answers, or an empty record when
///   stdin is not used
pub fn get_preloaded_answers(take_from_stdin: bool) -> Result<PreloadedAnswers> {
    if !take_from_stdin {
        return Ok(PreloadedAnswers::default());
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(serde_json::from_str(buffer.trim())?)
}

/// Collects the full answer record, asking only the questions that were not
/// preloaded.
///
/// Questions are asked strictly in the order below; the package name default
/// is derived from the app name answered just before it.
///
/// # Arguments
/// * `prompt` - Prompter implementation handling the interaction
/// * `preloaded` - Answers supplied up front
///
/// # Returns
/// * `Result<Answers>` - The complete, immutable answer record
///
/// # Errors
/// * `Error::InputAborted` if the prompt stream closes before all questions
///   are answered
pub fn collect(prompt: &dyn Prompter, preloaded: &PreloadedAnswers) -> Result<Answers> {
    let app_name = match &preloaded.app_name {
        Some(value) => value.clone(),
        None => prompt.input(
            "What would you like to name your app?",
            Some(DEFAULT_APP_NAME.to_string()),
        )?,
    };

    let package_name = match &preloaded.package_name {
        Some(value) => value.clone(),
        None => prompt.input(
            "What would you like to name the npm package?",
            Some(app_name.to_kebab_case()),
        )?,
    };

    let base_theme = match preloaded.base_theme {
        Some(value) => value,
        None => {
            let labels: Vec<&str> = Theme::CHOICES.iter().map(|theme| theme.label()).collect();
            let selection =
                prompt.select("What theme would you like to use?", &labels, 0)?;
            Theme::CHOICES[selection]
        }
    };

    let version = match &preloaded.version {
        Some(value) => value.clone(),
        None => prompt.input("version", Some(DEFAULT_VERSION.to_string()))?,
    };

    let description = match &preloaded.description {
        Some(value) => value.clone(),
        None => prompt.input("description", None)?,
    };

    let git_repository = match &preloaded.git_repository {
        Some(value) => value.clone(),
        None => prompt.input("git repository", None)?,
    };

    let keywords = match &preloaded.keywords {
        Some(value) => value.clone(),
        None => prompt.input("keywords", None)?,
    };

    let author = match &preloaded.author {
        Some(value) => value.clone(),
        None => prompt.input("author", None)?,
    };

    let license = match &preloaded.license {
        Some(value) => value.clone(),
        None => prompt.input("license", Some(DEFAULT_LICENSE.to_string()))?,
    };

    let create_directory = match preloaded.create_directory {
        Some(value) => value,
        None => prompt.confirm(
            "Would you like to create a new directory for your project?",
            true,
        )?,
    };

    Ok(Answers {
        app_name,
        package_name,
        base_theme,
        version,
        description,
        git_repository,
        keywords,
        author,
        license,
        create_directory,
    })
}
