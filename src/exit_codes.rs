//! Exit code constants for the readmegen CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config, not a repository)
//! - 2: No GitHub remote found
//! - 3: Git/shell command failure
//! - 4: README write failure
//! - 5: Template rendering failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or invalid state.
pub const USER_ERROR: i32 = 1;

/// The worktree has no remote pointing at github.com.
pub const NO_REMOTE: i32 = 2;

/// A git or shell command could not be run or exited non-zero.
pub const GIT_FAILURE: i32 = 3;

/// The rendered README could not be persisted.
pub const WRITE_FAILURE: i32 = 4;

/// The template could not be rendered.
pub const TEMPLATE_FAILURE: i32 = 5;
