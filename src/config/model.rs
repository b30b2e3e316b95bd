//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Per-project settings, read from `<worktree>/.readmegen.yaml`.
///
/// Every field is optional; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Substring of a message that starts a generation.
    #[serde(default = "default_trigger")]
    pub trigger: String,

    /// File name of the generated README inside the worktree.
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Custom template, relative to the worktree. Uses the built-in
    /// scaffold when unset.
    pub template_path: Option<String>,

    /// Handling of triggers that overlap a running generation.
    pub in_flight: InFlightPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trigger: default_trigger(),
            output_file: default_output_file(),
            template_path: None,
            in_flight: InFlightPolicy::default(),
        }
    }
}
