//! CLI argument parsing for readmegen.
//!
//! Uses clap derive macros for declarative argument definitions.
//! Implementations live in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// readmegen: generate a project README from the repository's GitHub remote.
///
/// Run `generate` for a one-off README, or `listen` to act as a host plugin
/// that regenerates the README whenever a chat message contains the trigger
/// phrase (default "generate-rm").
#[derive(Parser, Debug)]
#[command(name = "readmegen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for readmegen.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate README.md in the worktree now.
    ///
    /// Overwrites any existing README without asking.
    Generate(GenerateArgs),

    /// Print the README that would be generated, without writing it.
    Preview(TargetArgs),

    /// Print the canonical GitHub URL of the worktree.
    Url(UrlArgs),

    /// Act as a host plugin: read NDJSON events from stdin.
    ///
    /// Each `message` event containing the trigger phrase generates the
    /// README and prints the outcome as one JSON line on stdout.
    Listen(TargetArgs),
}

/// Worktree and directory shared by the generating commands.
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Repository worktree (default: repository root of the current directory).
    #[arg(short, long)]
    pub worktree: Option<PathBuf>,

    /// Project directory name used for the title (default: the worktree path).
    #[arg(short, long)]
    pub directory: Option<String>,
}

/// Arguments for the `generate` command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Print the outcome as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `url` command.
#[derive(Args, Debug)]
pub struct UrlArgs {
    /// Repository worktree (default: repository root of the current directory).
    #[arg(short, long)]
    pub worktree: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
