// src/lib.rs

pub mod cli;
pub mod errors;
pub mod exec;
pub mod host;
pub mod logging;
pub mod pkgs;
pub mod provider;
pub mod step;

use tracing::debug;

use crate::cli::CliArgs;
use crate::errors::Result;
use crate::exec::ShellExecutor;
use crate::host::{HostIdentity, OsRelease};
use crate::pkgs::PackageSpec;
use crate::provider::Provider;
use crate::step::{run_step, ExecutionResult, StepRequest};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - the step record (from `--step <file>` or the command line)
/// - host detection (`/etc/os-release`)
/// - the shell executor
///
/// When `--step` is given the file's values are used as-is; `--provider` and
/// `--timeout` apply only to steps built from command-line packages.
pub async fn run(args: CliArgs) -> Result<ExecutionResult> {
    let step = match &args.step {
        Some(path) => step::load_from_path(path)?,
        None => step_from_args(&args),
    };

    if args.dry_run {
        print_dry_run(&step)?;
        return Ok(ExecutionResult::success());
    }

    let host = OsRelease::detect()?;
    debug!(id = host.id(), version = host.version(), "detected host");

    let executor = ShellExecutor::new();
    run_step(&host, &executor, &step).await
}

fn step_from_args(args: &CliArgs) -> StepRequest {
    // One positional argument may itself be a comma/whitespace separated
    // string; several arguments are taken as an explicit list.
    let pkgs = if args.packages.len() == 1 {
        PackageSpec::from(args.packages[0].as_str())
    } else {
        PackageSpec::from(args.packages.clone())
    };

    StepRequest {
        pkgs,
        provider: args.provider,
        timeout: args.timeout,
    }
}

/// Dry-run output: resolved provider and the exact command, no execution.
fn print_dry_run(step: &StepRequest) -> Result<()> {
    println!("pkgstep dry-run");

    let packages = step.pkgs.normalize();
    if packages.is_empty() {
        println!("  no packages to install");
        return Ok(());
    }

    let provider = match step.provider {
        Some(p) => p,
        None => {
            let host = OsRelease::detect()?;
            Provider::resolve(host.id(), host.version())?
        }
    };
    let command = provider.build_command(&packages);

    println!("  provider: {provider}");
    println!("  timeout: {}s", step.timeout);
    println!("  cmd: {}", command.line);
    if let Some(env) = &command.env {
        for (key, value) in env {
            println!("  env: {key}={value}");
        }
    }

    Ok(())
}
