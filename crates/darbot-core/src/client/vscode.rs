//! VS Code integration: workspace `mcp.json` and `settings.json`.

use serde_json::{Map, Value, json};

use crate::client::ManagedJsonPlan;
use crate::config::merge;
use crate::context::AppContext;
use crate::runtime::{RuntimeChoice, launch_spec};

/// Invocation VS Code should use for the server.
///
/// The UV variant reuses the launcher's wrapper invocation. The Python
/// variant points at the virtualenv interpreter directly and pins the
/// working directory, since VS Code spawns from the workspace root.
fn server_invocation(ctx: &AppContext, choice: RuntimeChoice) -> (String, Vec<String>, Option<String>) {
    match choice {
        RuntimeChoice::Uv => {
            let spec = launch_spec(RuntimeChoice::Uv, ctx);
            (spec.command, spec.args, None)
        }
        RuntimeChoice::Python => (
            ctx.venv_python().to_string_lossy().into_owned(),
            vec![ctx.entry_script().to_string_lossy().into_owned()],
            Some(ctx.package_dir().to_string_lossy().into_owned()),
        ),
    }
}

/// Plan for `.vscode/mcp.json`: a stdio server definition under `servers`.
pub fn mcp_json_plan(ctx: &AppContext, choice: RuntimeChoice) -> ManagedJsonPlan {
    let (command, args, cwd) = server_invocation(ctx, choice);

    let mut entry = Map::new();
    entry.insert("type".to_string(), json!("stdio"));
    entry.insert("command".to_string(), json!(command));
    entry.insert("args".to_string(), json!(args));
    if let Some(cwd) = cwd {
        entry.insert("cwd".to_string(), json!(cwd));
    }

    ManagedJsonPlan {
        path: ctx.mcp_config_path(),
        config_path: vec!["servers".to_string()],
        entry: Value::Object(entry),
    }
}

/// Plan for `.vscode/settings.json`.
///
/// "mcp.servers" is one flat settings key containing a dot, not nesting.
pub fn settings_plan(ctx: &AppContext, choice: RuntimeChoice) -> ManagedJsonPlan {
    let (command, args, cwd) = server_invocation(ctx, choice);

    let mut entry = Map::new();
    entry.insert("command".to_string(), json!(command));
    entry.insert("args".to_string(), json!(args));
    if let Some(cwd) = cwd {
        entry.insert("cwd".to_string(), json!(cwd));
    }
    entry.insert("env".to_string(), json!({}));

    ManagedJsonPlan {
        path: ctx.settings_path(),
        config_path: vec!["mcp.servers".to_string()],
        entry: Value::Object(entry),
    }
}

/// Write both VS Code files for the chosen runtime.
pub fn configure(ctx: &AppContext, choice: RuntimeChoice) -> anyhow::Result<()> {
    mcp_json_plan(ctx, choice).apply()?;
    // VS Code expects an inputs list alongside the server map.
    merge::ensure_top_level(&ctx.mcp_config_path(), "inputs", json!([]))?;
    settings_plan(ctx, choice).apply()?;
    Ok(())
}
