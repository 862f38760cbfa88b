//! Configuration and pattern file loading

use acscan_core::AcConfig;
use std::path::Path;
use tracing::debug;

/// Configuration loading error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for config loading
pub type Result<T> = std::result::Result<T, ConfigError>;

fn read(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Load an `AcConfig` from a JSON file; missing keys keep their defaults
pub fn load_config(path: &Path) -> Result<AcConfig> {
    let content = read(path)?;
    let config = serde_json::from_slice(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), ?config, "Loaded configuration");
    Ok(config)
}

/// Read one pattern per line
///
/// Lines are raw bytes and need not be UTF-8. Trailing `\r` is stripped.
/// Blank lines are dropped unless `keep_empty` is set, in which case they
/// reach the automaton's empty-pattern policy.
pub fn load_patterns(path: &Path, keep_empty: bool) -> Result<Vec<Vec<u8>>> {
    let content = read(path)?;
    Ok(parse_patterns(&content, keep_empty))
}

pub fn parse_patterns(content: &[u8], keep_empty: bool) -> Vec<Vec<u8>> {
    if content.is_empty() {
        return Vec::new();
    }

    let content = content.strip_suffix(b"\n").unwrap_or(content);
    content
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .filter(|line| keep_empty || !line.is_empty())
        .map(<[u8]>::to_vec)
        .collect()
}
