//! Interpreter requirement probing.

use std::time::Duration;

use semver::Version;

use crate::process::{self, CommandError};

/// Interpreter command probed for the version requirement.
pub const INTERPRETER_COMMAND: &str = "python";

/// Accepted interpreter series: 3.12 through 3.15.
pub const SUPPORTED_MAJOR: u64 = 3;
pub const SUPPORTED_MINORS: std::ops::RangeInclusive<u64> = 12..=15;

const VERSION_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of the interpreter probe.
///
/// Callers decide severity: the setup wizard treats anything but
/// `Supported` as fatal, the plain installer downgrades it to a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpreterStatus {
    Supported(Version),
    Unsupported(Version),
    Missing(String),
}

impl InterpreterStatus {
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Supported(_))
    }
}

/// Probe the default interpreter.
pub async fn probe_interpreter() -> InterpreterStatus {
    probe_interpreter_with(INTERPRETER_COMMAND).await
}

/// Probe a specific interpreter command (injectable for tests).
pub async fn probe_interpreter_with(command: &str) -> InterpreterStatus {
    let result = tokio::time::timeout(
        VERSION_PROBE_TIMEOUT,
        process::run_command(command, &["--version"], None),
    )
    .await;

    let output = match result {
        Ok(Ok(output)) => output,
        Ok(Err(CommandError::NotFound { command })) => {
            return InterpreterStatus::Missing(format!("'{command}' is not on PATH"));
        }
        Ok(Err(err)) => return InterpreterStatus::Missing(err.to_string()),
        Err(_) => {
            return InterpreterStatus::Missing(format!("'{command}' version probe timed out"));
        }
    };

    // Older interpreters print the version banner to stderr.
    let banner = if output.stdout.trim().is_empty() {
        &output.stderr
    } else {
        &output.stdout
    };

    match parse_python_version(banner) {
        Some(version) => classify(version),
        None => InterpreterStatus::Missing(format!(
            "unrecognized version output: {}",
            banner.trim()
        )),
    }
}

/// Classify a parsed version against the accepted range.
pub fn classify(version: Version) -> InterpreterStatus {
    if version.major == SUPPORTED_MAJOR && SUPPORTED_MINORS.contains(&version.minor) {
        InterpreterStatus::Supported(version)
    } else {
        InterpreterStatus::Unsupported(version)
    }
}

/// Parse `Python X.Y.Z` (or a bare `X.Y` / `X.Y.Z`) from a version banner.
pub fn parse_python_version(banner: &str) -> Option<Version> {
    let token = banner
        .split_whitespace()
        .find(|t| t.chars().next().is_some_and(|c| c.is_ascii_digit()))?;

    Version::parse(token)
        .ok()
        .or_else(|| Version::parse(&format!("{token}.0")).ok())
}
