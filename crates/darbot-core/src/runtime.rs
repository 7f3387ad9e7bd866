//! Runtime selection for starting the automation server.
//!
//! The server prefers the UV runner when present and falls back to the
//! standard Python interpreter; detection is a cheap version probe.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::context::AppContext;
use crate::process;

/// Command used to invoke the UV runner.
pub const UV_COMMAND: &str = "uv";

/// Command used to invoke the standard interpreter.
pub const PYTHON_COMMAND: &str = "python";

/// How long a runtime presence probe may take before the runtime counts
/// as absent.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Which runtime starts the server. Exactly one choice is active per
/// launch or setup pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuntimeChoice {
    /// UV runner: faster startup, manages dependencies itself.
    #[default]
    Uv,
    /// Standard Python interpreter with a project virtualenv.
    Python,
}

/// Final invocation shape for one launch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    pub command: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

/// Build the invocation for the chosen runtime.
///
/// UV wraps the interpreter: `uv --directory <pkg> run python <entry>`.
/// The standard path invokes `python <entry>` directly. Both run with the
/// package directory as working directory.
pub fn launch_spec(choice: RuntimeChoice, ctx: &AppContext) -> LaunchSpec {
    let entry = ctx.entry_script().to_string_lossy().into_owned();
    match choice {
        RuntimeChoice::Uv => LaunchSpec {
            command: UV_COMMAND.to_string(),
            args: vec![
                "--directory".to_string(),
                ctx.package_dir().to_string_lossy().into_owned(),
                "run".to_string(),
                PYTHON_COMMAND.to_string(),
                entry,
            ],
            working_dir: ctx.package_dir().to_path_buf(),
        },
        RuntimeChoice::Python => LaunchSpec {
            command: PYTHON_COMMAND.to_string(),
            args: vec![entry],
            working_dir: ctx.package_dir().to_path_buf(),
        },
    }
}

/// Probe for UV and pick the runtime accordingly.
pub async fn detect_runtime() -> RuntimeChoice {
    detect_runtime_with(UV_COMMAND).await
}

/// Probe a specific UV command (injectable for tests). Any probe failure
/// selects the standard interpreter; a missing runtime is not an error.
pub async fn detect_runtime_with(uv_command: &str) -> RuntimeChoice {
    if process::probe(uv_command, &["--version"], PROBE_TIMEOUT).await {
        RuntimeChoice::Uv
    } else {
        tracing::debug!(command = uv_command, "uv unavailable, using python");
        RuntimeChoice::Python
    }
}
