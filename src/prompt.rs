//! User input and interaction handling.
//! Wraps dialoguer behind a small trait so answer collection can be driven
//! non-interactively in tests.

use crate::error::{Error, Result};
use dialoguer::{Confirm, Input, Select};

/// Trait for asking the user questions.
pub trait Prompter {
    /// Asks a free-text question. A `None` default allows an empty answer.
    fn input(&self, prompt: &str, default: Option<String>) -> Result<String>;

    /// Asks a single-choice question and returns the selected index.
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize>;

    /// Asks a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Dialoguer-based prompter used for the interactive flow.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str, default: Option<String>) -> Result<String> {
        let result = match default {
            Some(value) => {
                Input::new().with_prompt(prompt).default(value).interact_text()
            }
            None => Input::new().with_prompt(prompt).allow_empty(true).interact_text(),
        };

        result.map_err(|e| Error::InputAborted(e.to_string()))
    }

    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(|e| Error::InputAborted(e.to_string()))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| Error::InputAborted(e.to_string()))
    }
}
