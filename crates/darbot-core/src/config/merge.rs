//! Merge named entries into mapping-valued JSON config files.
//!
//! One primitive serves every integration target: read the existing
//! document (an absent file behaves as empty), insert or overwrite a
//! single named entry at a key path, and write the whole document back
//! in one step. Sibling keys are never touched, so re-running a merge
//! with the same inputs produces an identical file. Concurrent writers
//! are not coordinated.

use std::path::Path;

use anyhow::Context;
use serde_json::{Map, Value};

/// Insert or overwrite `name` under the object at `path`, creating the
/// file, parent directories, and intermediate objects as needed.
///
/// Each path element is one literal key; dotted keys stay intact.
/// Returns the merged document root.
pub fn merge_entry_at_path(
    config_path: &Path,
    path: &[&str],
    name: &str,
    fragment: Value,
) -> anyhow::Result<Map<String, Value>> {
    if path.is_empty() {
        anyhow::bail!("Path for managed entries cannot be empty");
    }

    let mut root = load_json_map(config_path)?;
    object_at_path_mut(&mut root, path)?.insert(name.to_string(), fragment);
    write_json_map(config_path, &root)?;

    Ok(root)
}

/// Set a top-level key only when it is absent. Used for scaffolding keys
/// (an empty `inputs` list) without clobbering user content.
pub fn ensure_top_level(config_path: &Path, key: &str, value: Value) -> anyhow::Result<()> {
    let mut root = load_json_map(config_path)?;
    if root.contains_key(key) {
        return Ok(());
    }
    root.insert(key.to_string(), value);
    write_json_map(config_path, &root)
}

/// Read a config file as a JSON object; a missing file reads as empty.
pub fn read_json_map(config_path: &Path) -> anyhow::Result<Map<String, Value>> {
    load_json_map(config_path)
}

fn load_json_map(path: &Path) -> anyhow::Result<Map<String, Value>> {
    if !path.exists() {
        return Ok(Map::new());
    }
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let value: Value = serde_json::from_slice(&bytes)
        .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => anyhow::bail!("Expected JSON object at root: {}", path.display()),
    }
}

fn write_json_map(path: &Path, map: &Map<String, Value>) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }
    let bytes = serde_json::to_vec_pretty(map).context("Failed to serialize JSON config")?;

    // Write-then-rename so an interrupted write cannot leave a truncated file.
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, &bytes)
        .with_context(|| format!("Failed to write config file: {}", tmp.display()))?;
    std::fs::rename(&tmp, path)
        .with_context(|| format!("Failed to replace config file: {}", path.display()))?;

    Ok(())
}

fn object_at_path_mut<'a>(
    root: &'a mut Map<String, Value>,
    path: &[&str],
) -> anyhow::Result<&'a mut Map<String, Value>> {
    let mut current = root;
    for segment in path {
        if !current.contains_key(*segment) {
            current.insert(segment.to_string(), Value::Object(Map::new()));
        }
        match current.get_mut(*segment) {
            Some(Value::Object(map)) => current = map,
            _ => anyhow::bail!("Expected '{}' to be a JSON object", segment),
        }
    }
    Ok(current)
}
