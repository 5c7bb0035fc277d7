//! Locating changed files between two git references
//!
//! The locator runs the checks and queries needed to compare a commit against
//! a remote branch: tool and repository checks, remote lookup, fetch, commit
//! resolution, merge base and a name-only diff scoped to the scan directory.

use super::runner::{GitCli, Runner};
use crate::error::{ChartsError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Symbolic reference used when the merge base is the target commit itself
pub const HEAD_MARKER: &str = "HEAD";

/// Git queries bound to one scan directory and remote
pub struct ChangeLocator<R: Runner = GitCli> {
    runner: R,
    directory: PathBuf,
    remote: String,
}

impl ChangeLocator<GitCli> {
    /// Bind to `directory` and `remote`, checking that git is installed and
    /// that `directory` is inside a work tree
    pub fn open(directory: &Path, remote: &str) -> Result<Self> {
        let locator = Self::with_runner(GitCli::new(directory), directory, remote);
        locator.verify_tool_available()?;
        locator.verify_is_repository()?;
        Ok(locator)
    }
}

impl<R: Runner> ChangeLocator<R> {
    pub fn with_runner(runner: R, directory: &Path, remote: &str) -> Self {
        Self {
            runner,
            directory: directory.to_path_buf(),
            remote: remote.to_string(),
        }
    }

    pub fn remote(&self) -> &str {
        &self.remote
    }

    #[cfg(test)]
    pub(crate) fn runner(&self) -> &R {
        &self.runner
    }

    pub fn verify_tool_available(&self) -> Result<()> {
        self.runner
            .run(&["--version"])
            .map(|_| ())
            .map_err(|_| ChartsError::ToolNotInstalled)
    }

    pub fn verify_is_repository(&self) -> Result<()> {
        let not_a_repo = || ChartsError::NotARepository {
            path: self.directory.clone(),
        };
        let out = self
            .runner
            .run(&["rev-parse", "--is-inside-work-tree"])
            .map_err(|_| not_a_repo())?;

        match out.stdout.parse::<bool>() {
            Ok(true) => Ok(()),
            _ => Err(not_a_repo()),
        }
    }

    pub fn verify_remote_configured(&self) -> Result<()> {
        let no_remote = || ChartsError::NoRemoteConfigured {
            remote: self.remote.clone(),
        };
        let out = self
            .runner
            .run(&["remote", "get-url", self.remote.as_str()])
            .map_err(|_| no_remote())?;

        if out.stdout.is_empty() {
            return Err(no_remote());
        }
        Ok(())
    }

    /// Update remote-tracking branches of the bound remote
    pub fn fetch(&self) -> Result<()> {
        info!(remote = %self.remote, "fetching remote");
        let out = self.runner.run(&["fetch", self.remote.as_str()])?;
        if !out.stderr.is_empty() {
            debug!(output = %out.stderr, "git fetch");
        }
        Ok(())
    }

    /// Resolve a symbolic or abbreviated reference to a full commit hash
    pub fn resolve_commit(&self, reference: &str) -> Result<String> {
        let out = self.runner.run(&["rev-parse", "--verify", reference])?;
        Ok(out.stdout)
    }

    /// Common ancestor of `a` and `b`.
    ///
    /// When the ancestor is `b` itself, [`HEAD_MARKER`] is returned instead.
    pub fn merge_base(&self, a: &str, b: &str) -> Result<String> {
        let out = self.runner.run(&["merge-base", a, b])?;
        if out.stdout == b {
            debug!(commit = b, "merge base is the target commit, using {}", HEAD_MARKER);
            return Ok(HEAD_MARKER.to_string());
        }
        Ok(out.stdout)
    }

    /// Path of the bound directory relative to the repository root, empty at
    /// the root itself
    pub fn repository_prefix(&self) -> Result<PathBuf> {
        let out = self.runner.run(&["rev-parse", "--show-prefix"])?;
        Ok(PathBuf::from(out.stdout))
    }

    /// Files that differ between `base` and `target` below the bound directory,
    /// as absolute paths
    pub fn list_changed_paths(&self, base: &str, target: &str) -> Result<Vec<PathBuf>> {
        let prefix = self.repository_prefix()?;
        let scope = self.directory.to_string_lossy().into_owned();
        let out = self.runner.run(&[
            "-c",
            "core.quotePath=false",
            "diff",
            "--find-renames",
            "--name-only",
            base,
            target,
            "--",
            scope.as_str(),
        ])?;

        Ok(out
            .stdout
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|l| self.path_within_directory(&prefix, l))
            .collect())
    }

    /// Join a diff path onto the bound directory.
    ///
    /// Diff paths are relative to the repository root, so the directory's own
    /// repository prefix is dropped first. Matching is per path segment.
    pub fn path_within_directory(&self, prefix: &Path, diff_path: &str) -> PathBuf {
        let path = Path::new(diff_path);
        let stripped = path.strip_prefix(prefix).unwrap_or(path);
        self.directory.join(stripped)
    }
}
