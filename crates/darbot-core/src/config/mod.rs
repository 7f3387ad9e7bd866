//! Managed JSON configuration files.

pub mod merge;

pub use merge::{ensure_top_level, merge_entry_at_path, read_json_map};
