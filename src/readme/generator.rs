//! The resolve, render, persist sequence.

use super::template::{readme_variables, render_template};
use super::title::display_title;
use crate::config::Config;
use crate::context::PluginContext;
use crate::error::{ReadmeError, Result};
use crate::exit_codes;
use crate::fs::atomic_write_file;
use crate::git::CommandRunner;
use crate::github::{GithubRemote, resolve_github_remote};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// Category of a failed generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// No remote points at github.com; nothing was written.
    NoRemote,
    /// git could not be run in the worktree.
    Command,
    /// The template could not be read or rendered.
    Template,
    /// The README could not be written.
    Write,
    /// Invalid input or state.
    Invalid,
}

impl From<&ReadmeError> for FailureKind {
    fn from(err: &ReadmeError) -> Self {
        match err {
            ReadmeError::NoRemote(_) => FailureKind::NoRemote,
            ReadmeError::GitError(_) => FailureKind::Command,
            ReadmeError::TemplateError(_) => FailureKind::Template,
            ReadmeError::WriteError(_) => FailureKind::Write,
            ReadmeError::UserError(_) => FailureKind::Invalid,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

/// Outcome of one generation run.
///
/// Generation never fails across its public boundary; callers inspect
/// `success` and `failure` instead.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub readme_path: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<Failure>,

    pub finished_at: DateTime<Utc>,
}

impl GenerationReport {
    fn succeeded(remote: &GithubRemote, readme_path: PathBuf) -> Self {
        Self {
            success: true,
            github_url: Some(remote.url()),
            readme_path: Some(readme_path),
            failure: None,
            finished_at: Utc::now(),
        }
    }

    fn failed(err: &ReadmeError) -> Self {
        Self {
            success: false,
            github_url: None,
            readme_path: None,
            failure: Some(Failure {
                kind: err.into(),
                message: err.to_string(),
            }),
            finished_at: Utc::now(),
        }
    }

    /// Process exit code matching this outcome.
    pub fn exit_code(&self) -> i32 {
        match self.failure.as_ref().map(|f| f.kind) {
            None => exit_codes::SUCCESS,
            Some(FailureKind::NoRemote) => exit_codes::NO_REMOTE,
            Some(FailureKind::Command) => exit_codes::GIT_FAILURE,
            Some(FailureKind::Template) => exit_codes::TEMPLATE_FAILURE,
            Some(FailureKind::Write) => exit_codes::WRITE_FAILURE,
            Some(FailureKind::Invalid) => exit_codes::USER_ERROR,
        }
    }
}

/// Produces `README.md` for a worktree from its GitHub remote.
#[derive(Debug)]
pub struct ReadmeGenerator<R> {
    runner: R,
    ctx: PluginContext,
    config: Config,
}

impl<R: CommandRunner> ReadmeGenerator<R> {
    pub fn new(runner: R, ctx: PluginContext, config: Config) -> Self {
        Self {
            runner,
            ctx,
            config,
        }
    }

    /// Runner used for git invocations.
    #[allow(dead_code)]
    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn context(&self) -> &PluginContext {
        &self.ctx
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Find the GitHub remote of the worktree.
    ///
    /// Returns `ReadmeError::NoRemote` when git lists no github.com remote.
    pub fn resolve(&self) -> Result<GithubRemote> {
        tracing::info!(worktree = %self.ctx.worktree.display(), "resolving GitHub URL");

        resolve_github_remote(&self.runner, &self.ctx.worktree)?
            .ok_or_else(|| ReadmeError::NoRemote(self.ctx.worktree.display().to_string()))
    }

    /// Render the README text for `remote`.
    pub fn render(&self, remote: &GithubRemote) -> Result<String> {
        let title = display_title(&self.ctx.directory, remote.repo_name());
        let template = self.config.template_text(&self.ctx.worktree)?;
        Ok(render_template(&template, &readme_variables(&title, remote))?)
    }

    /// Write `text` to the README path, replacing whatever is there.
    pub fn persist(&self, text: &str) -> Result<PathBuf> {
        let path = self.ctx.readme_path(&self.config.output_file);
        atomic_write_file(&path, text)?;
        Ok(path)
    }

    /// Run resolve, render and persist in order.
    ///
    /// The README is only touched once a remote was found and the template
    /// rendered.
    pub fn generate(&self) -> GenerationReport {
        match self.try_generate() {
            Ok((remote, path)) => {
                tracing::info!(
                    url = %remote.url(),
                    path = %path.display(),
                    "README generated"
                );
                GenerationReport::succeeded(&remote, path)
            }
            Err(err @ ReadmeError::NoRemote(_)) => {
                tracing::warn!("{}; cannot generate a README without one", err);
                tracing::info!("add a remote with: git remote add origin <github-url>");
                GenerationReport::failed(&err)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to generate README");
                GenerationReport::failed(&err)
            }
        }
    }

    fn try_generate(&self) -> Result<(GithubRemote, PathBuf)> {
        let remote = self.resolve()?;
        tracing::info!(url = %remote.url(), "found GitHub remote");

        let text = self.render(&remote)?;
        let path = self.persist(&text)?;
        Ok((remote, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_FILE_NAME;
    use crate::git::SystemRunner;
    use crate::test_support::{FakeRunner, create_test_repo, create_test_repo_with_remote};
    use std::fs;
    use tempfile::TempDir;

    const SSH_REMOTES: &str = "origin\tgit@github.com:Owner/Repo.git (fetch)\n\
                               origin\tgit@github.com:Owner/Repo.git (push)";

    fn generator(runner: FakeRunner, dir: &TempDir, directory: &str) -> ReadmeGenerator<FakeRunner> {
        ReadmeGenerator::new(
            runner,
            PluginContext::new(dir.path(), directory),
            Config::default(),
        )
    }

    #[test]
    fn test_generate_writes_readme() {
        let temp_dir = TempDir::new().unwrap();
        let runner = FakeRunner::with_stdout(SSH_REMOTES);

        let report = generator(runner, &temp_dir, "my_cool-project").generate();

        assert!(report.success, "{:?}", report.failure);
        assert_eq!(report.github_url.as_deref(), Some("https://github.com/Owner/Repo"));
        let path = temp_dir.path().join("README.md");
        assert_eq!(report.readme_path.as_deref(), Some(path.as_path()));

        let body = fs::read_to_string(&path).unwrap();
        assert!(body.starts_with("# My Cool Project\n"));
        assert!(body.contains("git clone https://github.com/Owner/Repo.git"));
        assert!(body.contains("cd Repo\n"));
        assert_eq!(report.exit_code(), exit_codes::SUCCESS);
    }

    #[test]
    fn test_generate_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let generator = generator(FakeRunner::with_stdout(SSH_REMOTES), &temp_dir, "proj");
        let path = temp_dir.path().join("README.md");

        assert!(generator.generate().success);
        let first = fs::read(&path).unwrap();
        assert!(generator.generate().success);
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_overwrites_existing_readme() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("README.md");
        fs::write(&path, "hand written notes\n").unwrap();

        let report = generator(FakeRunner::with_stdout(SSH_REMOTES), &temp_dir, "proj").generate();

        assert!(report.success);
        assert!(fs::read_to_string(&path).unwrap().starts_with("# Proj\n"));
    }

    #[test]
    fn test_empty_directory_title_falls_back_to_repo_name() {
        let temp_dir = TempDir::new().unwrap();
        let runner = FakeRunner::with_stdout("origin\thttps://github.com/acme/widget-lib.git (fetch)");

        let text = generator(runner, &temp_dir, "")
            .render(&GithubRemote {
                owner: "acme".to_string(),
                repo: "widget-lib".to_string(),
            })
            .unwrap();

        assert!(text.starts_with("# Widget Lib\n"));
    }

    #[test]
    fn test_no_remote_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let report = generator(FakeRunner::with_stdout(""), &temp_dir, "proj").generate();

        assert!(!report.success);
        let failure = report.failure.as_ref().unwrap();
        assert_eq!(failure.kind, FailureKind::NoRemote);
        assert_eq!(report.exit_code(), exit_codes::NO_REMOTE);
        assert!(!temp_dir.path().join("README.md").exists());
    }

    #[test]
    fn test_non_github_remote_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let runner = FakeRunner::with_stdout("origin\tgit@gitlab.com:acme/tool.git (fetch)");
        let report = generator(runner, &temp_dir, "proj").generate();

        assert_eq!(report.failure.unwrap().kind, FailureKind::NoRemote);
        assert!(!temp_dir.path().join("README.md").exists());
    }

    #[test]
    fn test_command_failure_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let report = generator(FakeRunner::unspawnable("git not found"), &temp_dir, "proj").generate();

        assert!(!report.success);
        assert_eq!(report.failure.as_ref().unwrap().kind, FailureKind::Command);
        assert!(report.failure.unwrap().message.contains("git not found"));
        assert!(!temp_dir.path().join("README.md").exists());
    }

    #[test]
    fn test_missing_worktree_is_write_failure() {
        let temp_dir = TempDir::new().unwrap();
        let gone = temp_dir.path().join("gone");
        let generator = ReadmeGenerator::new(
            FakeRunner::with_stdout(SSH_REMOTES),
            PluginContext::new(&gone, "gone"),
            Config::default(),
        );

        let report = generator.generate();

        assert_eq!(report.failure.as_ref().unwrap().kind, FailureKind::Write);
        assert_eq!(report.exit_code(), exit_codes::WRITE_FAILURE);
        assert!(!gone.exists());
    }

    #[test]
    fn test_bad_custom_template_leaves_readme_untouched() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("README.md"), "keep me\n").unwrap();
        fs::write(temp_dir.path().join("t.md"), "# {title} by {author}\n").unwrap();

        let config = Config {
            template_path: Some("t.md".to_string()),
            ..Config::default()
        };
        let generator = ReadmeGenerator::new(
            FakeRunner::with_stdout(SSH_REMOTES),
            PluginContext::new(temp_dir.path(), "proj"),
            config,
        );

        let report = generator.generate();

        assert_eq!(report.failure.as_ref().unwrap().kind, FailureKind::Template);
        assert!(report.failure.unwrap().message.contains("author"));
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("README.md")).unwrap(),
            "keep me\n"
        );
    }

    #[test]
    fn test_custom_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            output_file: "README.generated.md".to_string(),
            ..Config::default()
        };
        let generator = ReadmeGenerator::new(
            FakeRunner::with_stdout(SSH_REMOTES),
            PluginContext::new(temp_dir.path(), "proj"),
            config,
        );

        assert!(generator.generate().success);
        assert!(temp_dir.path().join("README.generated.md").exists());
        assert!(!temp_dir.path().join("README.md").exists());
    }

    #[test]
    fn test_report_serializes_to_json() {
        let temp_dir = TempDir::new().unwrap();
        let report = generator(FakeRunner::with_stdout(""), &temp_dir, "proj").generate();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["failure"]["kind"], "no_remote");
        assert!(json.get("github_url").is_none());
        assert!(json["finished_at"].is_string());
    }

    #[test]
    fn test_generate_against_real_repository() {
        let temp_dir = create_test_repo_with_remote("https://github.com/acme/widget-lib.git");
        let generator = ReadmeGenerator::new(
            SystemRunner,
            PluginContext::new(temp_dir.path(), ""),
            Config::default(),
        );

        let report = generator.generate();

        assert!(report.success, "{:?}", report.failure);
        let body = fs::read_to_string(temp_dir.path().join("README.md")).unwrap();
        assert!(body.starts_with("# Widget Lib\n"));
        assert!(body.contains("📍 **Repository:** https://github.com/acme/widget-lib\n"));
    }

    #[test]
    fn test_generate_real_repository_without_remote_keeps_readme() {
        let temp_dir = create_test_repo();
        let generator = ReadmeGenerator::new(
            SystemRunner,
            PluginContext::new(temp_dir.path(), "proj"),
            Config::load_for_worktree(temp_dir.path()).unwrap(),
        );

        let report = generator.generate();

        assert_eq!(report.failure.unwrap().kind, FailureKind::NoRemote);
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("README.md")).unwrap(),
            "# Test\n"
        );
        assert!(!temp_dir.path().join(CONFIG_FILE_NAME).exists());
    }
}
