//! Claude Desktop integration: user-level `claude_desktop_config.json`.

use serde_json::json;

use crate::client::{ManagedJsonPlan, SERVER_NAME};
use crate::context::AppContext;

/// Plan for the assistant config: a minimal entry that defers to the
/// `darbot-windows-mcp` launcher on PATH.
pub fn config_plan(ctx: &AppContext) -> ManagedJsonPlan {
    ManagedJsonPlan {
        path: ctx.assistant_config_path(),
        config_path: vec!["mcpServers".to_string()],
        entry: json!({
            "command": SERVER_NAME,
            "args": [],
        }),
    }
}

/// Merge the server entry into the assistant config.
pub fn configure(ctx: &AppContext) -> anyhow::Result<()> {
    config_plan(ctx).apply()?;
    Ok(())
}
