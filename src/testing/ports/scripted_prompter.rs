use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::Prompter;

/// Prompter replaying canned answers and recording the questions asked.
#[derive(Clone, Default)]
pub struct ScriptedPrompter {
    confirms: Arc<Mutex<VecDeque<bool>>>,
    selections: Arc<Mutex<VecDeque<Result<usize, String>>>>,
    pub asked: Arc<Mutex<Vec<String>>>,
    pub offered: Arc<Mutex<Vec<Vec<String>>>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answering(self, answer: bool) -> Self {
        self.confirms.lock().unwrap().push_back(answer);
        self
    }

    pub fn choosing(self, index: usize) -> Self {
        self.selections.lock().unwrap().push_back(Ok(index));
        self
    }

    /// Queue an answer that is not a valid choice.
    pub fn choosing_invalid(self, answer: &str) -> Self {
        self.selections.lock().unwrap().push_back(Err(answer.to_string()));
        self
    }

    pub fn questions(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, prompt: &str) -> Result<bool, AppError> {
        self.asked.lock().unwrap().push(prompt.to_string());
        self.confirms
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AppError::Prompt(format!("unexpected confirmation: {}", prompt)))
    }

    fn select(&self, prompt: &str, items: &[String]) -> Result<usize, AppError> {
        self.asked.lock().unwrap().push(prompt.to_string());
        self.offered.lock().unwrap().push(items.to_vec());
        match self.selections.lock().unwrap().pop_front() {
            Some(Ok(index)) => Ok(index),
            Some(Err(answer)) => Err(AppError::InvalidSelection(answer)),
            None => Err(AppError::Prompt(format!("unexpected selection: {}", prompt))),
        }
    }
}
