//! Command runner and git helpers for readmegen.
//!
//! Every shell invocation goes through a [`CommandRunner`], the handle the
//! host hands to the generator. [`SystemRunner`] spawns real processes; tests
//! substitute canned output.

use crate::error::{ReadmeError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Captured result of a command execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
    /// Whether the command exited with status 0.
    pub success: bool,
}

impl CommandOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            success: output.status.success(),
        }
    }

    /// A successful output carrying the given stdout.
    #[allow(dead_code)]
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into().trim().to_string(),
            stderr: String::new(),
            success: true,
        }
    }

    /// Returns true if stdout is empty.
    pub fn is_empty(&self) -> bool {
        self.stdout.is_empty()
    }
}

/// Executes external commands on behalf of the generator.
pub trait CommandRunner {
    /// Run `program` with `args` inside `cwd` and capture its output.
    ///
    /// An `Err` means the process could not be started at all; a process that
    /// ran and failed is reported through [`CommandOutput::success`].
    fn run(&self, cwd: &Path, program: &str, args: &[&str]) -> Result<CommandOutput>;
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, cwd: &Path, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let output = Command::new(program)
            .current_dir(cwd)
            .args(args)
            .output()
            .map_err(|e| {
                ReadmeError::GitError(format!(
                    "failed to execute {} {} in '{}': {}",
                    program,
                    args.first().unwrap_or(&""),
                    cwd.display(),
                    e
                ))
            })?;

        Ok(CommandOutput::from_output(&output))
    }
}

/// Run a git command through `runner` with the specified working directory.
///
/// # Returns
///
/// * `Ok(CommandOutput)` - On successful execution (exit code 0)
/// * `Err(ReadmeError::GitError)` - On spawn failure or non-zero exit
pub fn run_git<R: CommandRunner + ?Sized>(
    runner: &R,
    cwd: &Path,
    args: &[&str],
) -> Result<CommandOutput> {
    let output = runner.run(cwd, "git", args)?;

    if output.success {
        Ok(output)
    } else {
        let error_msg = if output.stderr.is_empty() {
            &output.stdout
        } else {
            &output.stderr
        };

        Err(ReadmeError::GitError(format!(
            "git {} failed: {}",
            args.join(" "),
            error_msg
        )))
    }
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// # Returns
///
/// * `Ok(PathBuf)` - The absolute path to the repository root
/// * `Err(ReadmeError::UserError)` - If not inside a git repository
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let cwd = cwd.as_ref();
    let output = SystemRunner
        .run(cwd, "git", &["rev-parse", "--show-toplevel"])
        .map_err(|e| ReadmeError::UserError(format!("{} (is git installed?)", e)))?;

    if output.success && !output.is_empty() {
        Ok(PathBuf::from(&output.stdout))
    } else {
        Err(ReadmeError::UserError(format!(
            "'{}' is not inside a git repository",
            cwd.display()
        )))
    }
}
