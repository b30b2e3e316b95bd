//! Configuration types and defaults for readmegen.

use serde::{Deserialize, Serialize};

/// Name of the optional per-project config file, relative to the worktree.
pub const CONFIG_FILE_NAME: &str = ".readmegen.yaml";

/// What to do with a trigger that arrives while a generation is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InFlightPolicy {
    /// Drop the second trigger (default).
    #[default]
    Skip,
    /// Run the second trigger after the first finishes.
    Wait,
}

pub(super) fn default_trigger() -> String {
    "generate-rm".to_string()
}

pub(super) fn default_output_file() -> String {
    "README.md".to_string()
}
