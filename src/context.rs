//! Invocation context resolution.
//!
//! The generator works against two inputs handed over by its host: the
//! worktree path (where git runs and the README lands) and a directory name
//! (the source of the README title). Both are read-only for the lifetime of
//! the plugin.

use crate::error::{ReadmeError, Result};
use crate::git;
use std::env;
use std::path::{Path, PathBuf};

/// Inputs supplied by the host for one plugin activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginContext {
    /// Directory containing the git checkout being documented.
    pub worktree: PathBuf,

    /// Project directory path or name; its last segment becomes the title.
    pub directory: String,
}

impl PluginContext {
    pub fn new(worktree: impl Into<PathBuf>, directory: impl Into<String>) -> Self {
        Self {
            worktree: worktree.into(),
            directory: directory.into(),
        }
    }

    /// Resolve the context from optional CLI overrides and the current
    /// working directory.
    pub fn resolve(worktree: Option<PathBuf>, directory: Option<String>) -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            ReadmeError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Self::resolve_from(&cwd, worktree, directory)
    }

    /// Resolve the context relative to `cwd`.
    ///
    /// The worktree defaults to the enclosing repository's top level, or `cwd`
    /// itself outside a repository. The directory defaults to the worktree
    /// path.
    pub fn resolve_from(
        cwd: &Path,
        worktree: Option<PathBuf>,
        directory: Option<String>,
    ) -> Result<Self> {
        let worktree = match worktree {
            Some(path) if path.is_absolute() => path,
            Some(path) => cwd.join(path),
            None => git::get_repo_root(cwd).unwrap_or_else(|_| cwd.to_path_buf()),
        };

        if !worktree.is_dir() {
            return Err(ReadmeError::UserError(format!(
                "worktree '{}' is not a directory",
                worktree.display()
            )));
        }

        let directory = directory.unwrap_or_else(|| worktree.to_string_lossy().to_string());

        Ok(Self {
            worktree,
            directory,
        })
    }

    /// Path of the README inside the worktree.
    pub fn readme_path(&self, file_name: &str) -> PathBuf {
        self.worktree.join(file_name)
    }
}
