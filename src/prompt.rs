//! Interactive Prompts
//!
//! The workflows block on user decisions (consent to install, environment
//! naming). They talk to a [`Prompter`] capability so the CLI can supply a
//! terminal implementation while tests supply a scripted one.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::error::Error;

use dialoguer::{Confirm, Input};

/// Synchronous confirmation/input capability.
pub trait Prompter {
    /// Asks a yes/no question. Defaults to "no" on plain Enter.
    fn confirm(&self, message: &str) -> Result<bool, Box<dyn Error>>;

    /// Asks for a line of text. An empty answer is allowed and means
    /// "use the default" to every caller.
    fn input(&self, message: &str) -> Result<String, Box<dyn Error>>;
}

/// Terminal-backed prompter.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&self, message: &str) -> Result<bool, Box<dyn Error>> {
        Ok(Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()?)
    }

    fn input(&self, message: &str) -> Result<String, Box<dyn Error>> {
        Ok(Input::<String>::new()
            .with_prompt(message)
            .allow_empty(true)
            .interact_text()?)
    }
}

/// Prompter answering from pre-recorded responses.
///
/// Used by tests and suitable for scripted, unattended runs. Runs out of
/// answers loudly rather than blocking.
#[derive(Default)]
pub struct ScriptedPrompter {
    confirms: RefCell<VecDeque<bool>>,
    inputs: RefCell<VecDeque<String>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_confirm(&self, answer: bool) {
        self.confirms.borrow_mut().push_back(answer);
    }

    pub fn push_input(&self, answer: impl Into<String>) {
        self.inputs.borrow_mut().push_back(answer.into());
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, message: &str) -> Result<bool, Box<dyn Error>> {
        self.confirms
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| format!("no scripted answer for confirmation: {}", message).into())
    }

    fn input(&self, message: &str) -> Result<String, Box<dyn Error>> {
        self.inputs
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| format!("no scripted answer for input: {}", message).into())
    }
}
