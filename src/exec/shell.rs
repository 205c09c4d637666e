// src/exec/shell.rs

//! Production executor: runs the command through `sh -c` with a bounded
//! timeout and guaranteed kill.

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;
use std::time::Duration;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::errors::{PkgstepError, Result};
use crate::exec::Executor;

/// Exit code reported when the command is killed on timeout, matching the
/// convention of `timeout(1)`.
pub const TIMEOUT_EXIT_CODE: i32 = 124;

/// Executor backed by a real shell.
///
/// Note: `tokio::time::timeout` around `.wait().await` alone does not kill
/// the child when the timeout fires; the future is dropped but the OS
/// process keeps running. This implementation uses `tokio::select!` with an
/// explicit `child.kill()` so the process is actually terminated.
pub struct ShellExecutor {
    shell: String,
}

impl ShellExecutor {
    pub fn new() -> Self {
        Self {
            shell: "sh".to_string(),
        }
    }

    /// Use a specific shell binary instead of `sh`. Mainly useful in tests
    /// that need a spawn failure on demand.
    pub fn with_shell(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

impl Default for ShellExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for ShellExecutor {
    fn execute<'a>(
        &'a self,
        command: &'a str,
        timeout: Duration,
        env: Option<&'a [(String, String)]>,
        ignore_output: bool,
    ) -> Pin<Box<dyn Future<Output = Result<i32>> + Send + 'a>> {
        Box::pin(async move {
            info!(cmd = %command, timeout_secs = timeout.as_secs(), "starting command");

            let mut cmd = Command::new(&self.shell);
            cmd.arg("-c").arg(command);

            // Overlay on the child only; the ambient environment of this
            // process is never touched.
            if let Some(overlay) = env {
                cmd.envs(overlay.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            }

            if ignore_output {
                cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
            } else {
                cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
            }
            cmd.kill_on_drop(true);

            let mut child = cmd.spawn().map_err(|source| PkgstepError::ProcessStart {
                command: command.to_string(),
                source,
            })?;

            // Drain captured output so pipe buffers don't fill; surface it
            // at debug only.
            if ignore_output {
                drain_at_debug(child.stdout.take(), "stdout");
                drain_at_debug(child.stderr.take(), "stderr");
            }

            tokio::select! {
                status_res = child.wait() => {
                    let status = status_res
                        .with_context(|| format!("waiting for command '{command}'"))?;
                    let code = status.code().unwrap_or(-1);

                    info!(
                        cmd = %command,
                        exit_code = code,
                        success = status.success(),
                        "command exited"
                    );

                    Ok(code)
                }

                _ = tokio::time::sleep(timeout) => {
                    warn!(
                        cmd = %command,
                        timeout_secs = timeout.as_secs(),
                        "command timed out; killing process"
                    );
                    if let Err(e) = child.kill().await {
                        warn!(cmd = %command, error = %e, "failed to kill timed-out process");
                    }
                    Ok(TIMEOUT_EXIT_CODE)
                }
            }
        })
    }
}

/// Read lines from a captured stream and log them at debug level.
fn drain_at_debug(stream: Option<impl AsyncRead + Unpin + Send + 'static>, name: &'static str) {
    if let Some(stream) = stream {
        tokio::spawn(async move {
            let reader = BufReader::new(stream);
            let mut lines = reader.lines();

            while let Ok(Some(line)) = lines.next_line().await {
                debug!("{name}: {line}");
            }
        });
    }
}
