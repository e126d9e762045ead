use crate::domain::AppError;

/// Port for interactive operator input.
pub trait Prompter {
    /// Ask a yes/no question; an empty answer counts as yes.
    fn confirm(&self, prompt: &str) -> Result<bool, AppError>;

    /// Present numbered `items` and return the chosen zero-based index.
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize, AppError>;
}
