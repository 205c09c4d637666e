use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use pkgstep::errors::{PkgstepError, Result};
use pkgstep::exec::Executor;

/// One recorded call into the fake executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub command: String,
    pub timeout: Duration,
    pub env: Option<Vec<(String, String)>>,
    pub ignore_output: bool,
}

/// A fake executor that:
/// - records every call (command, timeout, env overlay, output mode)
/// - returns a canned exit code without spawning any process.
pub struct FakeExecutor {
    exit_code: i32,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl FakeExecutor {
    pub fn new(exit_code: i32) -> Self {
        Self {
            exit_code,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Executor for FakeExecutor {
    fn execute<'a>(
        &'a self,
        command: &'a str,
        timeout: Duration,
        env: Option<&'a [(String, String)]>,
        ignore_output: bool,
    ) -> Pin<Box<dyn Future<Output = Result<i32>> + Send + 'a>> {
        let calls = Arc::clone(&self.calls);
        let exit_code = self.exit_code;
        let call = RecordedCall {
            command: command.to_string(),
            timeout,
            env: env.map(|e| e.to_vec()),
            ignore_output,
        };

        Box::pin(async move {
            calls.lock().unwrap().push(call);
            Ok(exit_code)
        })
    }
}

/// An executor whose process can never be started. Every call fails with
/// `PkgstepError::ProcessStart`, as a real executor does when the shell is
/// missing.
pub struct UnstartableExecutor;

impl Executor for UnstartableExecutor {
    fn execute<'a>(
        &'a self,
        command: &'a str,
        _timeout: Duration,
        _env: Option<&'a [(String, String)]>,
        _ignore_output: bool,
    ) -> Pin<Box<dyn Future<Output = Result<i32>> + Send + 'a>> {
        let command = command.to_string();
        Box::pin(async move {
            Err(PkgstepError::ProcessStart {
                command,
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
        })
    }
}
