use crate::error::{ReadmeError, Result};
use crate::git::{CommandOutput, CommandRunner};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{LazyLock, Mutex, MutexGuard};
use std::time::Duration;
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Canned command runner.
///
/// Every call returns the same response and is recorded as
/// `"<program> <args...>"` for later inspection.
pub(crate) struct FakeRunner {
    response: std::result::Result<CommandOutput, String>,
    delay: Option<Duration>,
    calls: Mutex<Vec<String>>,
}

impl FakeRunner {
    pub(crate) fn with_stdout(stdout: &str) -> Self {
        Self {
            response: Ok(CommandOutput::ok(stdout)),
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A command that runs but exits non-zero.
    pub(crate) fn failing(stderr: &str) -> Self {
        Self {
            response: Ok(CommandOutput {
                stdout: String::new(),
                stderr: stderr.to_string(),
                success: false,
            }),
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A command that cannot be spawned at all.
    pub(crate) fn unspawnable(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, _cwd: &Path, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let mut line = program.to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        self.calls.lock().unwrap().push(line);

        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }

        self.response.clone().map_err(ReadmeError::GitError)
    }
}

pub(crate) fn create_test_repo() -> TempDir {
    create_repo(None)
}

pub(crate) fn create_test_repo_with_remote(url: &str) -> TempDir {
    create_repo(Some(url))
}

fn create_repo(origin_url: Option<&str>) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);

    if let Some(url) = origin_url {
        git(path, &["remote", "add", "origin", url]);
    }

    temp_dir
}

fn git(repo_dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
}
