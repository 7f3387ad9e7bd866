#![cfg(unix)]

use std::path::PathBuf;
use std::time::Duration;

use darbot_core::launch::{self, LaunchError};
use darbot_core::runtime::LaunchSpec;

fn shell_spec(script: &str) -> LaunchSpec {
    LaunchSpec {
        command: "sh".to_string(),
        args: vec!["-c".to_string(), script.to_string()],
        working_dir: std::env::temp_dir(),
    }
}

#[tokio::test]
async fn mirrors_nonzero_child_exit_code() {
    let code = launch::supervise(&shell_spec("exit 7")).await.unwrap();
    assert_eq!(code, 7);
}

#[tokio::test]
async fn clean_exit_reports_zero() {
    let code = launch::supervise(&shell_spec("exit 0")).await.unwrap();
    assert_eq!(code, 0);
}

#[tokio::test]
async fn missing_executable_is_classified() {
    let spec = LaunchSpec {
        command: "darbot-no-such-server".to_string(),
        args: vec![],
        working_dir: std::env::temp_dir(),
    };

    let err = launch::supervise(&spec).await.unwrap_err();
    match err {
        LaunchError::MissingExecutable { command } => {
            assert_eq!(command, "darbot-no-such-server");
        }
        other => panic!("expected MissingExecutable, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_working_directory_is_a_spawn_error() {
    let spec = LaunchSpec {
        command: "sh".to_string(),
        args: vec!["-c".to_string(), "exit 0".to_string()],
        working_dir: PathBuf::from("/darbot-no-such-dir"),
    };

    let err = launch::supervise(&spec).await.unwrap_err();
    assert!(matches!(
        err,
        LaunchError::Spawn { .. } | LaunchError::MissingExecutable { .. }
    ));
}

#[tokio::test]
async fn forwarded_signal_reaches_the_child() {
    use std::os::unix::process::ExitStatusExt;

    let mut child = tokio::process::Command::new("sleep")
        .arg("30")
        .spawn()
        .unwrap();

    launch::forward_signal(child.id(), libc::SIGTERM);

    let status = tokio::time::timeout(Duration::from_secs(5), child.wait())
        .await
        .expect("child did not terminate after forwarded signal")
        .unwrap();

    assert_eq!(status.signal(), Some(libc::SIGTERM));
}
