//! Command implementations for readmegen.
//!
//! Each handler returns the process exit code on completion; hard errors
//! (bad arguments, unreadable config) are returned as `ReadmeError` and
//! mapped to an exit code by `main`.

mod listen;

use crate::cli::{Command, GenerateArgs, TargetArgs, UrlArgs};
use crate::config::Config;
use crate::context::PluginContext;
use crate::error::{ReadmeError, Result};
use crate::exit_codes;
use crate::git::SystemRunner;
use crate::github::resolve_github_remote;
use crate::plugin::ReadmePlugin;
use crate::readme::{GenerationReport, ReadmeGenerator};
use std::io::{self, Write};

use listen::listen;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<i32> {
    match command {
        Command::Generate(args) => cmd_generate(args),
        Command::Preview(target) => cmd_preview(target),
        Command::Url(args) => cmd_url(args),
        Command::Listen(target) => cmd_listen(target),
    }
}

/// Resolve the invocation context and config for a target.
fn build_generator(target: TargetArgs) -> Result<ReadmeGenerator<SystemRunner>> {
    let ctx = PluginContext::resolve(target.worktree, target.directory)?;
    let config = Config::load_for_worktree(&ctx.worktree)?;
    Ok(ReadmeGenerator::new(SystemRunner, ctx, config))
}

fn cmd_generate(args: GenerateArgs) -> Result<i32> {
    let generator = build_generator(args.target)?;
    let report = generator.generate();

    print_report(&mut io::stdout().lock(), &report, args.json)?;
    Ok(report.exit_code())
}

/// Write the outcome of `generate` to `out`.
///
/// Failures were already logged by the generator, so only JSON output
/// mentions them.
fn print_report<W: Write>(out: &mut W, report: &GenerationReport, json: bool) -> Result<()> {
    let written = if json {
        let json = serde_json::to_string_pretty(report).map_err(|e| {
            ReadmeError::UserError(format!("failed to serialize report: {}", e))
        })?;
        writeln!(out, "{}", json)
    } else if let Some(path) = &report.readme_path {
        writeln!(out, "Generated {}", path.display()).and_then(|_| match &report.github_url {
            Some(url) => writeln!(out, "  Repository: {}", url),
            None => Ok(()),
        })
    } else {
        Ok(())
    };

    written.map_err(|e| ReadmeError::UserError(format!("failed to write report: {}", e)))
}

fn cmd_preview(target: TargetArgs) -> Result<i32> {
    let generator = build_generator(target)?;
    let remote = generator.resolve()?;
    let text = generator.render(&remote)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|e| ReadmeError::UserError(format!("failed to write preview: {}", e)))?;

    Ok(exit_codes::SUCCESS)
}

fn cmd_url(args: UrlArgs) -> Result<i32> {
    let ctx = PluginContext::resolve(args.worktree, None)?;
    let remote = resolve_github_remote(&SystemRunner, &ctx.worktree)?
        .ok_or_else(|| ReadmeError::NoRemote(ctx.worktree.display().to_string()))?;

    println!("{}", remote.url());
    Ok(exit_codes::SUCCESS)
}

fn cmd_listen(target: TargetArgs) -> Result<i32> {
    let plugin = ReadmePlugin::new(build_generator(target)?);

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let summary = listen(stdin, stdout, &plugin)?;

    tracing::info!(
        events = summary.events,
        generations = summary.generations,
        failures = summary.failures,
        "event stream closed"
    );
    Ok(exit_codes::SUCCESS)
}
