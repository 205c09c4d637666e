// src/exec/mod.rs

//! Pluggable process-execution abstraction.
//!
//! The step handler talks to an [`Executor`] instead of spawning processes
//! itself. This makes it easy to swap in a fake executor in tests while
//! keeping the production implementation in [`shell`].

pub mod shell;

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use crate::errors::Result;

pub use shell::{ShellExecutor, TIMEOUT_EXIT_CODE};

/// Trait abstracting how a command line is executed.
///
/// Production code uses [`ShellExecutor`]; tests can provide their own
/// implementation that records calls and returns canned exit codes.
pub trait Executor: Send + Sync {
    /// Run `command` to completion and return its exit code.
    ///
    /// Contract:
    /// - `env` is an overlay merged into the child's inherited environment;
    ///   the ambient process environment is never mutated.
    /// - `ignore_output = true` means stdout/stderr are captured but not
    ///   relayed to the caller.
    /// - A timeout or nonzero exit is reported through the returned exit
    ///   code, never as an error.
    /// - Inability to start the process at all is an error
    ///   (`PkgstepError::ProcessStart`) and must propagate.
    fn execute<'a>(
        &'a self,
        command: &'a str,
        timeout: Duration,
        env: Option<&'a [(String, String)]>,
        ignore_output: bool,
    ) -> Pin<Box<dyn Future<Output = Result<i32>> + Send + 'a>>;
}
