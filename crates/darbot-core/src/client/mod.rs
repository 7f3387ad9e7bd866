//! Integration targets for external MCP clients.
//!
//! Each adapter renders `ManagedJsonPlan`s describing where its server
//! entry lives and what it contains; one generic apply routine executes
//! every plan through the same JSON merge primitive.

pub mod claude_desktop;
pub mod vscode;

use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::config::merge;

/// Server entry name written into every client config.
pub const SERVER_NAME: &str = "darbot-windows-mcp";

/// A single managed entry destined for one JSON config file.
#[derive(Debug, Clone)]
pub struct ManagedJsonPlan {
    /// Absolute path of the target config file.
    pub path: PathBuf,
    /// Key path of the mapping that holds server entries.
    pub config_path: Vec<String>,
    /// The fragment stored under [`SERVER_NAME`].
    pub entry: Value,
}

impl ManagedJsonPlan {
    /// Merge this plan's entry into its target file.
    pub fn apply(&self) -> anyhow::Result<Map<String, Value>> {
        let segments: Vec<&str> = self.config_path.iter().map(String::as_str).collect();
        merge::merge_entry_at_path(&self.path, &segments, SERVER_NAME, self.entry.clone())
    }
}
