//! Scripted runner for exercising git-dependent code without a repository

use super::runner::{CommandOutput, Runner};
use crate::error::{ChartsError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// Answers from a table keyed by the space-joined argument list and records
/// every call. Unknown calls fail.
#[derive(Default)]
pub struct ScriptedRunner {
    responses: HashMap<String, std::result::Result<String, String>>,
    pub calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    pub fn ok(mut self, args: &str, stdout: &str) -> Self {
        self.responses
            .insert(args.to_string(), Ok(stdout.to_string()));
        self
    }

    pub fn fail(mut self, args: &str, stderr: &str) -> Self {
        self.responses
            .insert(args.to_string(), Err(stderr.to_string()));
        self
    }
}

impl Runner for ScriptedRunner {
    fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        let key = args.join(" ");
        self.calls.borrow_mut().push(key.clone());
        match self.responses.get(&key) {
            Some(Ok(stdout)) => Ok(CommandOutput {
                stdout: stdout.clone(),
                stderr: String::new(),
            }),
            Some(Err(stderr)) => Err(ChartsError::CommandFailed {
                command: format!("git {}", key),
                status: "exit status: 1".to_string(),
                stderr: stderr.clone(),
            }),
            None => Err(ChartsError::Other(format!("unexpected git call: {}", key))),
        }
    }
}
