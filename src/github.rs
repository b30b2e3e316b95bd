//! GitHub remote discovery.
//!
//! Scans `git remote -v` output for the first reference to a GitHub
//! repository and normalises it to `https://github.com/<owner>/<repo>`,
//! whether the remote was configured with SSH (`git@github.com:owner/repo`)
//! or HTTPS (`https://github.com/owner/repo`) syntax.

use crate::error::Result;
use crate::git::{CommandRunner, run_git};
use regex::Regex;
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

/// Canonical URL prefix for GitHub repositories.
pub const GITHUB_URL_PREFIX: &str = "https://github.com/";

// Owner and repo stop at a slash or whitespace; the `(fetch)`/`(push)` suffix
// of `git remote -v` is separated by whitespace.
static GITHUB_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"github\.com[:/]([^/\s]+)/([^/\s]+)").expect("GitHub remote pattern is valid")
});

/// A repository hosted on GitHub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubRemote {
    pub owner: String,
    pub repo: String,
}

impl GithubRemote {
    /// Canonical `https://github.com/<owner>/<repo>` form.
    pub fn url(&self) -> String {
        format!("{}{}", GITHUB_URL_PREFIX, self.path())
    }

    /// The `<owner>/<repo>` path.
    pub fn path(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    pub fn repo_name(&self) -> &str {
        &self.repo
    }
}

impl fmt::Display for GithubRemote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}

/// Extract the first GitHub repository referenced in `remotes`.
///
/// Returns `None` when the text is blank or mentions no `github.com`
/// repository. A trailing `.git` on the repository name is dropped.
pub fn extract_github_remote(remotes: &str) -> Option<GithubRemote> {
    let caps = GITHUB_REF.captures(remotes)?;
    let owner = caps.get(1)?.as_str();
    let raw_repo = caps.get(2)?.as_str();
    let repo = raw_repo.strip_suffix(".git").unwrap_or(raw_repo);

    if repo.is_empty() {
        return None;
    }

    Some(GithubRemote {
        owner: owner.to_string(),
        repo: repo.to_string(),
    })
}

/// Resolve the GitHub remote of the repository at `worktree`.
///
/// # Returns
///
/// * `Ok(Some(remote))` - The first GitHub remote listed by `git remote -v`
/// * `Ok(None)` - No remote references github.com
/// * `Err(ReadmeError::GitError)` - git could not be run in the worktree
pub fn resolve_github_remote<R: CommandRunner + ?Sized>(
    runner: &R,
    worktree: &Path,
) -> Result<Option<GithubRemote>> {
    let output = run_git(runner, worktree, &["remote", "-v"])?;

    if output.is_empty() {
        return Ok(None);
    }

    Ok(extract_github_remote(&output.stdout))
}
