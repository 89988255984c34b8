use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Defaults for the `tokenize` subcommand, overridable per-invocation by
/// CLI flags. The script removal table is not configurable.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PrepConfig {
    pub max_seq_len: usize,
    pub batch_size: usize,
    pub num_proc: usize,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            max_seq_len: 4096,
            batch_size: 4096,
            num_proc: 4,
        }
    }
}

pub fn find_config_path(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start.to_path_buf());
    while let Some(dir) = current {
        let candidate = dir.join(".hanzi-prep/config.toml");
        if candidate.exists() {
            return Some(candidate);
        }
        current = dir.parent().map(|p| p.to_path_buf());
    }
    None
}
