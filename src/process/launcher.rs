//! Process launching
//!
//! The [`Launcher`] trait is the seam between scenario evaluation and the
//! operating system, so evaluation logic can run against canned results.

use std::process::{ExitStatus, Stdio};

use async_trait::async_trait;
use tokio::process::Command;

use super::{ExecutionRequest, ExecutionResult};
use crate::common::{Error, Result};

/// Runs an [`ExecutionRequest`] to completion
#[async_trait]
pub trait Launcher: Send + Sync {
    /// Run the request and wait for it to exit
    ///
    /// Errors only when the program cannot be started at all.
    async fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionResult>;
}

/// Launches real child processes
///
/// Waits without a timeout: a target that never exits blocks the run.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

#[async_trait]
impl Launcher for ProcessLauncher {
    async fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionResult> {
        tracing::debug!(
            program = %request.program.display(),
            args = ?request.args,
            "Launching target"
        );

        let output = Command::new(&request.program)
            .args(&request.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| Error::launch(&request.program, e))?;

        let exit_code = exit_code(output.status);
        tracing::trace!(
            exit_code,
            stdout_len = output.stdout.len(),
            stderr_len = output.stderr.len(),
            "Target exited"
        );

        Ok(ExecutionResult {
            exit_code,
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|sig| -sig))
        .unwrap_or(-1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}
