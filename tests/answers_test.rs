use reactor_gen::answers::{
    collect, PreloadedAnswers, Theme, DEFAULT_APP_NAME, DEFAULT_LICENSE, DEFAULT_VERSION,
};
use reactor_gen::error::Result;
use reactor_gen::prompt::Prompter;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Scripted prompter standing in for interactive input.
/// A `None` scripted value accepts the question's default.
#[derive(Default)]
struct ScriptedPrompter {
    asked: RefCell<Vec<String>>,
    inputs: RefCell<VecDeque<Option<String>>>,
    selections: RefCell<VecDeque<usize>>,
    confirms: RefCell<VecDeque<Option<bool>>>,
}

impl ScriptedPrompter {
    fn new(
        inputs: Vec<Option<&str>>,
        selections: Vec<usize>,
        confirms: Vec<Option<bool>>,
    ) -> Self {
        Self {
            asked: RefCell::new(Vec::new()),
            inputs: RefCell::new(
                inputs.into_iter().map(|i| i.map(str::to_string)).collect(),
            ),
            selections: RefCell::new(selections.into_iter().collect()),
            confirms: RefCell::new(confirms.into_iter().collect()),
        }
    }

    fn all_defaults() -> Self {
        ScriptedPrompter::new(vec![None; 8], vec![], vec![None])
    }

    fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str, default: Option<String>) -> Result<String> {
        self.asked.borrow_mut().push(prompt.to_string());
        let scripted = self
            .inputs
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected input prompt: {}", prompt));
        Ok(scripted.unwrap_or_else(|| default.unwrap_or_default()))
    }

    fn select(&self, prompt: &str, _items: &[&str], default: usize) -> Result<usize> {
        self.asked.borrow_mut().push(prompt.to_string());
        Ok(self.selections.borrow_mut().pop_front().unwrap_or(default))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        self.asked.borrow_mut().push(prompt.to_string());
        let scripted = self
            .confirms
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected confirm prompt: {}", prompt));
        Ok(scripted.unwrap_or(default))
    }
}

fn position(asked: &[String], needle: &str) -> usize {
    asked
        .iter()
        .position(|prompt| prompt.contains(needle))
        .unwrap_or_else(|| panic!("prompt containing '{}' was never asked", needle))
}

#[test]
fn test_question_order() {
    let prompter = ScriptedPrompter::all_defaults();
    collect(&prompter, &PreloadedAnswers::default()).unwrap();

    let asked = prompter.asked();
    assert_eq!(asked.len(), 10);

    let app = position(&asked, "name your app");
    let package = position(&asked, "npm package");
    let theme = position(&asked, "theme");
    let directory = position(&asked, "new directory");

    assert!(app < package);
    assert!(package < theme);
    assert_eq!(directory, asked.len() - 1);
}

#[test]
fn test_defaults() {
    let prompter = ScriptedPrompter::all_defaults();
    let answers = collect(&prompter, &PreloadedAnswers::default()).unwrap();

    assert_eq!(answers.app_name, DEFAULT_APP_NAME);
    assert_eq!(answers.package_name, "my-ext-react-app");
    assert_eq!(answers.base_theme, Theme::Material);
    assert_eq!(answers.version, DEFAULT_VERSION);
    assert_eq!(answers.license, DEFAULT_LICENSE);
    assert!(answers.description.is_empty());
    assert!(answers.git_repository.is_empty());
    assert!(answers.keywords.is_empty());
    assert!(answers.author.is_empty());
    assert!(answers.create_directory);
}

#[test]
fn test_package_name_defaults_to_kebab_case() {
    let prompter = ScriptedPrompter::new(
        vec![Some("Cool App"), None, None, None, None, None, None, None],
        vec![],
        vec![None],
    );
    let answers = collect(&prompter, &PreloadedAnswers::default()).unwrap();

    assert_eq!(answers.app_name, "Cool App");
    assert_eq!(answers.package_name, "cool-app");
}

#[test]
fn test_theme_selection() {
    let prompter = ScriptedPrompter::new(vec![None; 8], vec![1], vec![None]);
    let answers = collect(&prompter, &PreloadedAnswers::default()).unwrap();
    assert_eq!(answers.base_theme, Theme::Triton);
    assert_eq!(answers.base_theme.qualified(), "theme-triton");
}

#[test]
fn test_preloaded_answers_skip_prompts() {
    let preloaded = PreloadedAnswers {
        app_name: Some("Demo".to_string()),
        package_name: Some("demo".to_string()),
        base_theme: Some(Theme::Ios),
        version: Some("3.1.0".to_string()),
        description: Some("demo app".to_string()),
        git_repository: Some(String::new()),
        keywords: Some(String::new()),
        author: Some("Demo Author".to_string()),
        license: Some("MIT".to_string()),
        create_directory: Some(false),
    };

    let prompter = ScriptedPrompter::new(vec![], vec![], vec![]);
    let answers = collect(&prompter, &preloaded).unwrap();

    assert!(prompter.asked().is_empty());
    assert_eq!(answers.app_name, "Demo");
    assert_eq!(answers.package_name, "demo");
    assert_eq!(answers.base_theme, Theme::Ios);
    assert_eq!(answers.version, "3.1.0");
    assert_eq!(answers.license, "MIT");
    assert!(!answers.create_directory);
}

#[test]
fn test_partially_preloaded_answers() {
    let preloaded = PreloadedAnswers {
        app_name: Some("Demo".to_string()),
        base_theme: Some(Theme::Material),
        ..PreloadedAnswers::default()
    };

    let prompter = ScriptedPrompter::new(vec![None; 7], vec![], vec![None]);
    let answers = collect(&prompter, &preloaded).unwrap();

    let asked = prompter.asked();
    assert_eq!(asked.len(), 8);
    assert!(!asked.iter().any(|prompt| prompt.contains("name your app")));
    assert!(!asked.iter().any(|prompt| prompt.contains("theme")));
    // package default still derives from the preloaded app name
    assert_eq!(answers.package_name, "demo");
}

#[test]
fn test_preloaded_answers_from_json() {
    let preloaded: PreloadedAnswers = serde_json::from_str(
        r#"{"appName": "Demo", "baseTheme": "triton", "createDirectory": false}"#,
    )
    .unwrap();

    assert_eq!(preloaded.app_name.as_deref(), Some("Demo"));
    assert_eq!(preloaded.base_theme, Some(Theme::Triton));
    assert_eq!(preloaded.create_directory, Some(false));
    assert!(preloaded.version.is_none());
}
