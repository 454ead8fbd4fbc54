//! Session configuration and loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level shuffle configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffleConfig {
    /// Target number of students per group.
    #[serde(default = "default_group_size")]
    pub group_size: usize,
    /// Largest group size a caller may request.
    #[serde(default = "default_max_group_size")]
    pub max_group_size: usize,
    /// Fixed seed for reproducible formation. Unset means fresh entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_group_size() -> usize {
    5
}
fn default_max_group_size() -> usize {
    10
}

impl Default for ShuffleConfig {
    fn default() -> Self {
        Self {
            group_size: default_group_size(),
            max_group_size: default_max_group_size(),
            seed: None,
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `shuffle.toml` in the current directory
/// 2. `~/.config/shuffle/config.toml`
///
/// Environment variable overrides: `SHUFFLE_GROUP_SIZE`, `SHUFFLE_SEED`.
pub fn load_config_from(path: Option<&Path>) -> Result<ShuffleConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("shuffle.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => ShuffleConfig::default(),
    };

    if let Ok(size) = std::env::var("SHUFFLE_GROUP_SIZE") {
        config.group_size = size
            .trim()
            .parse()
            .with_context(|| format!("invalid SHUFFLE_GROUP_SIZE: {size}"))?;
    }
    if let Ok(seed) = std::env::var("SHUFFLE_SEED") {
        config.seed = Some(
            seed.trim()
                .parse()
                .with_context(|| format!("invalid SHUFFLE_SEED: {seed}"))?,
        );
    }

    Ok(config)
}

/// Parse a TOML config string.
pub fn parse_config_str(content: &str) -> Result<ShuffleConfig> {
    let config: ShuffleConfig = toml::from_str(content)?;
    anyhow::ensure!(
        config.max_group_size >= 1,
        "max_group_size must be at least 1"
    );
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("shuffle"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ShuffleConfig::default();
        assert_eq!(config.group_size, 5);
        assert_eq!(config.max_group_size, 10);
        assert!(config.seed.is_none());
    }

    #[test]
    fn parse_partial_config() {
        let config = parse_config_str("group_size = 3\nseed = 42\n").unwrap();
        assert_eq!(config.group_size, 3);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.max_group_size, 10);
    }

    #[test]
    fn parse_rejects_bad_values() {
        assert!(parse_config_str("group_size = \"four\"").is_err());
        assert!(parse_config_str("max_group_size = 0").is_err());
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = load_config_from(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn load_from_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shuffle.toml");
        std::fs::write(&path, "group_size = 4\nmax_group_size = 8\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.max_group_size, 8);
    }
}
