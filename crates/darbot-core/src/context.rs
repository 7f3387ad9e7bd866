//! Application context for unified path resolution.

use std::path::{Path, PathBuf};

use anyhow::Context as _;

/// Fixed directories threaded through every launcher and setup operation.
///
/// Frontends construct this once at startup and pass it to commands
/// instead of consulting process-wide globals.
#[derive(Debug, Clone)]
pub struct AppContext {
    package_dir: PathBuf,
    workspace_dir: PathBuf,
    config_dir: PathBuf,
}

impl AppContext {
    /// Create a context with explicit package and workspace directories.
    pub fn new(package_dir: PathBuf, workspace_dir: PathBuf) -> Self {
        let config_dir = dirs::config_dir().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
        });

        Self {
            package_dir,
            workspace_dir,
            config_dir,
        }
    }

    /// Create a context with a custom application-data directory (for testing).
    pub fn with_config_dir(
        package_dir: PathBuf,
        workspace_dir: PathBuf,
        config_dir: PathBuf,
    ) -> Self {
        Self {
            package_dir,
            workspace_dir,
            config_dir,
        }
    }

    /// Derive the context from the running executable's location.
    ///
    /// The package directory is the parent of the directory holding the
    /// binary, matching the layout the server package ships with; the
    /// workspace is wherever the user invoked us.
    pub fn from_env() -> anyhow::Result<Self> {
        let exe = std::env::current_exe().context("Failed to locate current executable")?;
        let bin_dir = exe
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let package_dir = bin_dir.parent().map(Path::to_path_buf).unwrap_or(bin_dir);
        let workspace_dir =
            std::env::current_dir().context("Failed to resolve working directory")?;
        Ok(Self::new(package_dir, workspace_dir))
    }

    pub fn package_dir(&self) -> &Path {
        &self.package_dir
    }

    pub fn workspace_dir(&self) -> &Path {
        &self.workspace_dir
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Entry script of the Python automation server.
    pub fn entry_script(&self) -> PathBuf {
        self.package_dir.join("main.py")
    }

    pub fn vscode_dir(&self) -> PathBuf {
        self.workspace_dir.join(".vscode")
    }

    pub fn mcp_config_path(&self) -> PathBuf {
        self.vscode_dir().join("mcp.json")
    }

    pub fn settings_path(&self) -> PathBuf {
        self.vscode_dir().join("settings.json")
    }

    pub fn venv_dir(&self) -> PathBuf {
        self.package_dir.join("venv")
    }

    /// Interpreter inside the virtual environment.
    pub fn venv_python(&self) -> PathBuf {
        if cfg!(windows) {
            self.venv_dir().join("Scripts").join("python.exe")
        } else {
            self.venv_dir().join("bin").join("python")
        }
    }

    /// Pinned dependency manifest consumed by the venv install path.
    pub fn requirements_manifest(&self) -> PathBuf {
        self.package_dir.join("requirements.txt")
    }

    /// Claude Desktop config under the platform application-data directory.
    pub fn assistant_config_path(&self) -> PathBuf {
        self.config_dir.join("Claude").join("claude_desktop_config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> AppContext {
        AppContext::with_config_dir(
            PathBuf::from("/opt/darbot"),
            PathBuf::from("/home/user/project"),
            PathBuf::from("/home/user/.config"),
        )
    }

    #[test]
    fn entry_script_lives_in_package_dir() {
        assert_eq!(ctx().entry_script(), PathBuf::from("/opt/darbot/main.py"));
    }

    #[test]
    fn vscode_paths_live_in_workspace() {
        let ctx = ctx();
        assert_eq!(
            ctx.mcp_config_path(),
            PathBuf::from("/home/user/project/.vscode/mcp.json")
        );
        assert_eq!(
            ctx.settings_path(),
            PathBuf::from("/home/user/project/.vscode/settings.json")
        );
    }

    #[test]
    fn assistant_config_lives_under_app_data() {
        assert_eq!(
            ctx().assistant_config_path(),
            PathBuf::from("/home/user/.config/Claude/claude_desktop_config.json")
        );
    }

    #[test]
    fn venv_python_is_platform_specific() {
        let python = ctx().venv_python();
        if cfg!(windows) {
            assert!(python.ends_with("Scripts/python.exe"));
        } else {
            assert!(python.ends_with("bin/python"));
        }
    }
}
