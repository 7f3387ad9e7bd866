use darbot_core::runtime::{self, RuntimeChoice};

#[tokio::test]
async fn absent_uv_falls_back_to_python() {
    let choice = runtime::detect_runtime_with("darbot-no-such-uv").await;
    assert_eq!(choice, RuntimeChoice::Python);
}

#[cfg(unix)]
#[tokio::test]
async fn present_uv_is_preferred() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempfile::TempDir::new().unwrap();
    let stub = temp.path().join("uv");
    std::fs::write(&stub, "#!/bin/sh\necho 'uv 0.4.0'\nexit 0\n").unwrap();
    std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755)).unwrap();

    let choice = runtime::detect_runtime_with(stub.to_str().unwrap()).await;
    assert_eq!(choice, RuntimeChoice::Uv);
}

#[cfg(unix)]
#[tokio::test]
async fn failing_uv_probe_falls_back_to_python() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempfile::TempDir::new().unwrap();
    let stub = temp.path().join("uv");
    std::fs::write(&stub, "#!/bin/sh\nexit 1\n").unwrap();
    std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755)).unwrap();

    let choice = runtime::detect_runtime_with(stub.to_str().unwrap()).await;
    assert_eq!(choice, RuntimeChoice::Python);
}
