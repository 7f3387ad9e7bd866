//! Subprocess plumbing: awaited one-shot commands and presence probes.

use std::io;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use thiserror::Error;
use tokio::process::Command;

/// Captured output of a completed command.
#[derive(Debug)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("executable '{command}' not found in PATH")]
    NotFound { command: String },

    #[error("'{command}' exited with code {code}: {stderr}")]
    NonZero {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("failed to run '{command}': {source}")]
    Io {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// Run a command to completion with captured stdio.
pub async fn run_command(
    command: &str,
    args: &[&str],
    cwd: Option<&Path>,
) -> Result<CommandOutput, CommandError> {
    let mut cmd = Command::new(command);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let output = match cmd.output().await {
        Ok(output) => output,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(CommandError::NotFound {
                command: command.to_string(),
            });
        }
        Err(err) => {
            return Err(CommandError::Io {
                command: command.to_string(),
                source: err,
            });
        }
    };

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if output.status.success() {
        Ok(CommandOutput { stdout, stderr })
    } else {
        Err(CommandError::NonZero {
            command: command.to_string(),
            code: output.status.code().unwrap_or(-1),
            stderr,
        })
    }
}

/// Check whether a command runs and exits zero within the timeout.
///
/// Probe failures are never errors; an absent or broken executable
/// simply answers no.
pub async fn probe(command: &str, args: &[&str], timeout: Duration) -> bool {
    match tokio::time::timeout(timeout, run_command(command, args, None)).await {
        Ok(Ok(_)) => true,
        Ok(Err(err)) => {
            tracing::debug!(command, %err, "probe failed");
            false
        }
        Err(_) => {
            tracing::debug!(command, "probe timed out");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_executable_classifies_as_not_found() {
        let result = run_command("darbot-no-such-binary", &[], None).await;
        assert!(matches!(result, Err(CommandError::NotFound { .. })));
    }

    #[tokio::test]
    async fn probe_of_missing_executable_answers_no() {
        let present = probe("darbot-no-such-binary", &["--version"], Duration::from_secs(2)).await;
        assert!(!present);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn nonzero_exit_carries_the_code() {
        let result = run_command("sh", &["-c", "exit 3"], None).await;
        match result {
            Err(CommandError::NonZero { code, .. }) => assert_eq!(code, 3),
            other => panic!("expected NonZero, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn captures_stdout() {
        let output = run_command("sh", &["-c", "echo hello"], None).await.unwrap();
        assert_eq!(output.stdout.trim(), "hello");
    }
}
