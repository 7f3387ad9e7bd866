//! Setup reconciliation: probe requirements, install dependencies, and
//! bring the integration config files into the desired state.

use semver::Version;
use thiserror::Error;

use crate::client::{claude_desktop, vscode};
use crate::context::AppContext;
use crate::install;
use crate::process;
use crate::requirements::{self, InterpreterStatus};
use crate::runtime::{PYTHON_COMMAND, RuntimeChoice, UV_COMMAND};

/// Choices collected from the user before reconciling.
#[derive(Debug, Clone, Copy)]
pub struct Preferences {
    pub install_method: RuntimeChoice,
    pub configure_editor: bool,
    pub configure_assistant: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            install_method: RuntimeChoice::Uv,
            configure_editor: true,
            configure_assistant: true,
        }
    }
}

/// Fatal setup failures. Integration write failures never appear here;
/// they surface as report warnings instead.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Python interpreter not found: {0}")]
    InterpreterMissing(String),

    #[error("Python {0} is not supported; install Python 3.12 or higher")]
    InterpreterUnsupported(Version),

    #[error("dependency installation failed")]
    DependencyInstall(#[source] anyhow::Error),
}

/// Outcome of a completed reconcile. Warnings cover soft steps that
/// failed without aborting setup.
#[derive(Debug, Default)]
pub struct SetupReport {
    pub interpreter: Option<Version>,
    pub editor_configured: bool,
    pub assistant_configured: bool,
    pub warnings: Vec<String>,
}

/// Orchestrates one reconcile pass. Re-running is safe: every step is
/// idempotent. Concurrent reconciles are not coordinated.
pub struct SetupCommand {
    ctx: AppContext,
}

impl SetupCommand {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    /// Run the full reconcile: requirements, dependencies, verification,
    /// then integrations. Stops at the first fatal step.
    pub async fn execute(&self, prefs: &Preferences) -> Result<SetupReport, SetupError> {
        let mut report = SetupReport::default();

        match requirements::probe_interpreter().await {
            InterpreterStatus::Supported(version) => {
                tracing::debug!(%version, "interpreter accepted");
                report.interpreter = Some(version);
            }
            InterpreterStatus::Unsupported(version) => {
                return Err(SetupError::InterpreterUnsupported(version));
            }
            InterpreterStatus::Missing(reason) => {
                return Err(SetupError::InterpreterMissing(reason));
            }
        }

        install::install_dependencies(&self.ctx, prefs.install_method)
            .await
            .map_err(SetupError::DependencyInstall)?;

        if let Err(err) = self.verify_installation(prefs.install_method).await {
            tracing::warn!(%err, "installation check failed");
            report
                .warnings
                .push(format!("installation check failed: {err}"));
        }

        self.apply_integrations(prefs, &mut report);
        Ok(report)
    }

    /// Import-check the server entry module with the runtime that will
    /// actually run it.
    async fn verify_installation(&self, choice: RuntimeChoice) -> anyhow::Result<()> {
        const IMPORT_CHECK: &str = "import main";

        match choice {
            RuntimeChoice::Uv => {
                process::run_command(
                    UV_COMMAND,
                    &["run", PYTHON_COMMAND, "-c", IMPORT_CHECK],
                    Some(self.ctx.package_dir()),
                )
                .await?;
            }
            RuntimeChoice::Python => {
                let python = self.ctx.venv_python();
                let python = python.to_string_lossy();
                process::run_command(&python, &["-c", IMPORT_CHECK], Some(self.ctx.package_dir()))
                    .await?;
            }
        }
        Ok(())
    }

    /// File-only integration steps. Failures here are soft: they are
    /// recorded as warnings and the rest of setup stands.
    pub fn apply_integrations(&self, prefs: &Preferences, report: &mut SetupReport) {
        if prefs.configure_editor {
            match vscode::configure(&self.ctx, prefs.install_method) {
                Ok(()) => report.editor_configured = true,
                Err(err) => {
                    tracing::warn!(%err, "editor integration failed");
                    report
                        .warnings
                        .push(format!("VS Code integration failed: {err:#}"));
                }
            }
        }

        if prefs.configure_assistant {
            match claude_desktop::configure(&self.ctx) {
                Ok(()) => report.assistant_configured = true,
                Err(err) => {
                    tracing::warn!(%err, "assistant integration failed");
                    report
                        .warnings
                        .push(format!("Claude Desktop integration failed: {err:#}"));
                }
            }
        }
    }
}
