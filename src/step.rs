// src/step.rs

//! The package-install step: input record, result, and orchestration.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info};

use crate::errors::Result;
use crate::exec::Executor;
use crate::host::HostIdentity;
use crate::pkgs::PackageSpec;
use crate::provider::Provider;

const DEFAULT_TIMEOUT_SECS: u64 = 60;

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// A declarative step record as submitted to the agent.
#[derive(Debug, Clone, Deserialize)]
pub struct StepRequest {
    /// Packages to install: a list, or one comma/whitespace separated string.
    pub pkgs: PackageSpec,

    /// Explicit provider override. When set, host detection is skipped and
    /// the value is used unchecked; the caller is responsible for picking a
    /// provider that exists on the host.
    #[serde(default)]
    pub provider: Option<Provider>,

    /// Command timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl StepRequest {
    pub fn new(pkgs: impl Into<PackageSpec>) -> Self {
        Self {
            pkgs: pkgs.into(),
            provider: None,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Outcome of a step: the installer's exit code plus a diagnostic message.
/// Success is `(0, "")`; a fatal error (unsupported host, unstartable
/// process) is never encoded here, it propagates as `Err` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub exit_code: i32,
    pub message: String,
}

impl ExecutionResult {
    pub fn success() -> Self {
        Self {
            exit_code: 0,
            message: String::new(),
        }
    }

    pub fn from_exit_code(code: i32) -> Self {
        if code == 0 {
            Self::success()
        } else {
            Self {
                exit_code: code,
                message: format!("cmd exited with non-zero retcode: {code}"),
            }
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Execute a package-install step.
///
/// Resolves the provider for the host (unless the step overrides it), builds
/// the non-interactive install command, and runs it through `executor` with
/// the step's timeout. An empty package list is a successful no-op and never
/// reaches the executor.
pub async fn run_step<H, E>(host: &H, executor: &E, step: &StepRequest) -> Result<ExecutionResult>
where
    H: HostIdentity,
    E: Executor + ?Sized,
{
    let packages = step.pkgs.normalize();
    if packages.is_empty() {
        info!("no packages to install");
        return Ok(ExecutionResult::success());
    }

    let provider = match step.provider {
        Some(p) => p,
        None => Provider::resolve(host.id(), host.version())?,
    };
    debug!(%provider, ?packages, "resolved install provider");

    let command = provider.build_command(&packages);
    let timeout = Duration::from_secs(step.timeout);

    let exit_code = executor
        .execute(&command.line, timeout, command.env.as_deref(), true)
        .await?;

    Ok(ExecutionResult::from_exit_code(exit_code))
}

/// On-disk shape of a declarative step file: a single `[step]` table.
#[derive(Debug, Deserialize)]
struct StepFile {
    step: StepRequest,
}

/// Load a step record from a TOML file.
///
/// Expected shape:
///
/// ```toml
/// [step]
/// pkgs = "git, curl"      # or pkgs = ["git", "curl"]
/// provider = "apt"        # optional
/// timeout = 120           # optional, seconds
/// ```
pub fn load_from_path(path: impl AsRef<Path>) -> Result<StepRequest> {
    let contents = fs::read_to_string(path.as_ref())?;
    let file: StepFile = toml::from_str(&contents)?;
    Ok(file.step)
}
