//! Launch supervision: spawn the server, relay signals, mirror its exit.

use std::io;
use std::process::Stdio;

use thiserror::Error;
use tokio::process::{Child, Command};

use crate::runtime::LaunchSpec;

/// Exit code reported when the child terminated on a signal without
/// reporting a code of its own.
pub const SIGNAL_EXIT_CODE: i32 = 130;

#[derive(Debug, Error)]
pub enum LaunchError {
    /// The selected runtime binary is not installed or not on PATH.
    #[error("executable '{command}' not found")]
    MissingExecutable { command: String },

    #[error("failed to start '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("failed waiting for '{command}': {source}")]
    Wait {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// Start the server process and supervise it until exit.
///
/// Standard streams are inherited so the server's protocol traffic passes
/// through untouched. Interrupt and termination signals received while
/// the child runs are forwarded to it, and the parent keeps waiting until
/// the child's own termination is observed. Returns the child's exit code.
pub async fn supervise(spec: &LaunchSpec) -> Result<i32, LaunchError> {
    let mut child = Command::new(&spec.command)
        .args(&spec.args)
        .current_dir(&spec.working_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|err| classify_spawn(&spec.command, err))?;

    tracing::debug!(command = %spec.command, pid = child.id(), "server started");
    wait_with_signals(&spec.command, &mut child).await
}

fn classify_spawn(command: &str, err: io::Error) -> LaunchError {
    if err.kind() == io::ErrorKind::NotFound {
        LaunchError::MissingExecutable {
            command: command.to_string(),
        }
    } else {
        LaunchError::Spawn {
            command: command.to_string(),
            source: err,
        }
    }
}

fn wait_error(command: &str, source: io::Error) -> LaunchError {
    LaunchError::Wait {
        command: command.to_string(),
        source,
    }
}

fn exit_code(status: std::process::ExitStatus) -> i32 {
    status.code().unwrap_or(SIGNAL_EXIT_CODE)
}

#[cfg(unix)]
async fn wait_with_signals(command: &str, child: &mut Child) -> Result<i32, LaunchError> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigint =
        signal(SignalKind::interrupt()).map_err(|err| wait_error(command, err))?;
    let mut sigterm =
        signal(SignalKind::terminate()).map_err(|err| wait_error(command, err))?;

    // The pid is captured before waiting; forwarding to a pid that has
    // already exited is harmless.
    let pid = child.id();

    loop {
        tokio::select! {
            status = child.wait() => {
                let status = status.map_err(|err| wait_error(command, err))?;
                return Ok(exit_code(status));
            }
            _ = sigint.recv() => forward_signal(pid, libc::SIGINT),
            _ = sigterm.recv() => forward_signal(pid, libc::SIGTERM),
        }
    }
}

/// Forward a signal to the child process by pid.
#[cfg(unix)]
pub fn forward_signal(pid: Option<u32>, signal: i32) {
    if let Some(pid) = pid {
        tracing::debug!(pid, signal, "forwarding signal to server");
        unsafe {
            libc::kill(pid as libc::pid_t, signal);
        }
    }
}

#[cfg(not(unix))]
async fn wait_with_signals(command: &str, child: &mut Child) -> Result<i32, LaunchError> {
    tokio::select! {
        status = child.wait() => {
            let status = status.map_err(|err| wait_error(command, err))?;
            return Ok(exit_code(status));
        }
        _ = tokio::signal::ctrl_c() => {}
    }

    // No cross-process signal delivery on this platform; stop the child
    // directly and still observe its termination before returning.
    let _ = child.start_kill();
    let status = child.wait().await.map_err(|err| wait_error(command, err))?;
    Ok(exit_code(status))
}
