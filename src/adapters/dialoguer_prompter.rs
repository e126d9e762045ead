use dialoguer::{Confirm, Input};

use crate::domain::AppError;
use crate::ports::Prompter;

/// Terminal prompts backed by dialoguer.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

/// Parse a one-based numbered answer into a zero-based index below `count`.
pub fn parse_selection(answer: &str, count: usize) -> Result<usize, AppError> {
    let trimmed = answer.trim();
    match trimmed.parse::<usize>() {
        Ok(number) if number >= 1 && number <= count => Ok(number - 1),
        _ => Err(AppError::InvalidSelection(trimmed.to_string())),
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, prompt: &str) -> Result<bool, AppError> {
        Confirm::new()
            .with_prompt(prompt)
            .default(true)
            .interact()
            .map_err(|err| AppError::Prompt(err.to_string()))
    }

    fn select(&self, prompt: &str, items: &[String]) -> Result<usize, AppError> {
        for (index, item) in items.iter().enumerate() {
            println!("{}. {}", index + 1, item);
        }

        let answer: String = Input::new()
            .with_prompt(prompt)
            .interact_text()
            .map_err(|err| AppError::Prompt(err.to_string()))?;

        parse_selection(&answer, items.len())
    }
}
