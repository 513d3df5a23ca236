use anyhow::{Context, anyhow};
use std::path::Path;
use std::process::Command;
use tracing::debug;

use crate::domain::status::parse_modified_files;

/// Repository surface scoped to one resolved working directory.
///
/// The status query is delegated to the `git` executable; nothing below the
/// short-status text contract is interpreted here.
pub struct Repository {
    working_dir: Box<Path>,
}

impl Repository {
    pub fn new(working_dir: &Path) -> Self {
        Repository {
            working_dir: working_dir.into(),
        }
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Runs `git status --short` in the working directory and returns its
    /// stdout, waiting on the process synchronously. A non-zero exit
    /// (including the directory not being a repository) is a hard failure
    /// carrying the process stderr.
    pub fn status_short(&self) -> anyhow::Result<String> {
        debug!(working_dir = %self.working_dir.display(), "running git status --short");

        let output = Command::new("git")
            .arg("status")
            .arg("--short")
            .current_dir(&self.working_dir)
            .output()
            .context("Failed to run git status")?;

        if !output.status.success() {
            return Err(anyhow!(
                "git status failed in {:?}: {}",
                self.working_dir,
                String::from_utf8_lossy(&output.stderr).trim()
            ));
        }

        String::from_utf8(output.stdout).context("git status output is not valid utf-8")
    }

    /// Files reported as modified in the working tree, in report order.
    pub fn modified_files(&self) -> anyhow::Result<Vec<String>> {
        parse_modified_files(&self.status_short()?)
    }
}
