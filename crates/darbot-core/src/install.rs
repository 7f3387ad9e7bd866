//! Dependency installation for the chosen runtime.

use anyhow::Context as _;

use crate::context::AppContext;
use crate::process;
use crate::runtime::{PROBE_TIMEOUT, PYTHON_COMMAND, RuntimeChoice, UV_COMMAND};

/// Install server dependencies using the preferred method.
///
/// UV path: bootstrap UV through pip when absent, then sync the package
/// directory. Python path: create the virtualenv once (creation is
/// skipped when the directory already exists), then install the pinned
/// manifest into it.
pub async fn install_dependencies(ctx: &AppContext, choice: RuntimeChoice) -> anyhow::Result<()> {
    match choice {
        RuntimeChoice::Uv => install_with_uv(ctx).await,
        RuntimeChoice::Python => install_with_python(ctx).await,
    }
}

async fn install_with_uv(ctx: &AppContext) -> anyhow::Result<()> {
    if !process::probe(UV_COMMAND, &["--version"], PROBE_TIMEOUT).await {
        tracing::info!("uv not found, bootstrapping through pip");
        process::run_command(PYTHON_COMMAND, &["-m", "pip", "install", "uv"], None)
            .await
            .context("Failed to install uv")?;
    }

    process::run_command(UV_COMMAND, &["sync"], Some(ctx.package_dir()))
        .await
        .context("Failed to sync dependencies with uv")?;

    Ok(())
}

async fn install_with_python(ctx: &AppContext) -> anyhow::Result<()> {
    if !ctx.venv_dir().exists() {
        process::run_command(PYTHON_COMMAND, &["-m", "venv", "venv"], Some(ctx.package_dir()))
            .await
            .context("Failed to create virtual environment")?;
    }

    let python = ctx.venv_python();
    let python = python.to_string_lossy();
    let manifest = ctx.requirements_manifest();
    let manifest = manifest.to_string_lossy();

    process::run_command(
        &python,
        &["-m", "pip", "install", "-r", &manifest],
        Some(ctx.package_dir()),
    )
    .await
    .context("Failed to install pinned dependencies")?;

    Ok(())
}
