//! Running the git executable

use crate::error::{ChartsError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Captured, trimmed output of a successful command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs a version-control command with the given arguments
pub trait Runner {
    /// Run once. A non-zero exit or a failure to start is an error.
    fn run(&self, args: &[&str]) -> Result<CommandOutput>;
}

/// Runs `git -C <directory> ...`
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    directory: PathBuf,
}

impl GitCli {
    pub fn new(directory: &Path) -> Self {
        Self {
            program: String::from("git"),
            directory: directory.to_path_buf(),
        }
    }

    /// Use a different executable name or path
    #[cfg(test)]
    pub fn with_program(mut self, program: &str) -> Self {
        self.program = program.to_string();
        self
    }
}

impl Runner for GitCli {
    fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        let output = Command::new(&self.program)
            .arg("-C")
            .arg(&self.directory)
            .args(args)
            .output()
            .map_err(|e| ChartsError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            return Err(ChartsError::CommandFailed {
                command: format!("{} {}", self.program, args.join(" ")),
                status: output.status.to_string(),
                stderr,
            });
        }

        Ok(CommandOutput { stdout, stderr })
    }
}
