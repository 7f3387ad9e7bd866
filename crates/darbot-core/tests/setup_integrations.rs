use tempfile::TempDir;

use darbot_core::context::AppContext;
use darbot_core::runtime::RuntimeChoice;
use darbot_core::setup::{Preferences, SetupCommand, SetupReport};

fn test_command(temp: &TempDir) -> SetupCommand {
    SetupCommand::new(AppContext::with_config_dir(
        temp.path().join("package"),
        temp.path().join("workspace"),
        temp.path().join("appdata"),
    ))
}

#[test]
fn configures_only_the_requested_targets() {
    let temp = TempDir::new().unwrap();
    let cmd = test_command(&temp);
    let prefs = Preferences {
        install_method: RuntimeChoice::Uv,
        configure_editor: false,
        configure_assistant: true,
    };

    let mut report = SetupReport::default();
    cmd.apply_integrations(&prefs, &mut report);

    assert!(!report.editor_configured);
    assert!(report.assistant_configured);
    assert!(report.warnings.is_empty());
    assert!(!cmd.context().vscode_dir().exists());
    assert!(cmd.context().assistant_config_path().exists());
}

#[test]
fn configures_both_targets_for_full_setup() {
    let temp = TempDir::new().unwrap();
    let cmd = test_command(&temp);
    let prefs = Preferences::default();

    let mut report = SetupReport::default();
    cmd.apply_integrations(&prefs, &mut report);

    assert!(report.editor_configured);
    assert!(report.assistant_configured);
    assert!(cmd.context().mcp_config_path().exists());
    assert!(cmd.context().settings_path().exists());
    assert!(cmd.context().assistant_config_path().exists());
}

#[test]
fn assistant_failure_is_soft_and_editor_still_lands() {
    let temp = TempDir::new().unwrap();
    let cmd = test_command(&temp);
    let prefs = Preferences::default();

    // A directory where the assistant config file should be makes that
    // step fail while everything else proceeds.
    std::fs::create_dir_all(cmd.context().assistant_config_path()).unwrap();

    let mut report = SetupReport::default();
    cmd.apply_integrations(&prefs, &mut report);

    assert!(report.editor_configured);
    assert!(!report.assistant_configured);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("Claude Desktop"));
}

#[test]
fn reapplying_integrations_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let cmd = test_command(&temp);
    let prefs = Preferences::default();

    let mut report = SetupReport::default();
    cmd.apply_integrations(&prefs, &mut report);
    let first = std::fs::read(cmd.context().mcp_config_path()).unwrap();

    let mut report = SetupReport::default();
    cmd.apply_integrations(&prefs, &mut report);

    assert_eq!(std::fs::read(cmd.context().mcp_config_path()).unwrap(), first);
}
