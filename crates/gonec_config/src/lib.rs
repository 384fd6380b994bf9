pub mod errors;

use anyhow::{Context, Result};
use errors::ConfigError;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Deep enough for any hand written program, shallow enough to stay well inside the
/// main thread's stack.
pub const DEFAULT_MAX_DEPTH: usize = 512;

pub const CONFIG_FILE: &str = "gonec.toml";

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GonecConfig {
    pub walk: WalkConfig,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct WalkConfig {
    /// Maximum nesting depth a walk may enter. The root node is at depth 1.
    pub max_depth: usize,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

impl WalkConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::InvalidMaxDepth(self.max_depth));
        }

        Ok(())
    }
}

impl GonecConfig {
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: GonecConfig = toml::from_str(content)?;
        config.walk.validate()?;

        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from {}", path.display());

        let content = fs_err::read_to_string(path).map_err(ConfigError::from)?;

        Self::parse(&content).with_context(|| format!("Failed to load {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_uses_defaults() {
        let config = GonecConfig::parse("").unwrap();
        assert_eq!(config, GonecConfig::default());
        assert_eq!(config.walk.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn walk_table_without_key_uses_default() {
        let config = GonecConfig::parse("[walk]\n").unwrap();
        assert_eq!(config.walk.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn max_depth_is_read() {
        let config = GonecConfig::parse("[walk]\nmax_depth = 64\n").unwrap();
        assert_eq!(config.walk, WalkConfig::default().with_max_depth(64));
    }

    #[test]
    fn zero_depth_is_rejected() {
        let err = GonecConfig::parse("[walk]\nmax_depth = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMaxDepth(0)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = GonecConfig::parse("[walk\nmax_depth = 3").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParseError(_)));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[walk]\nmax_depth = 32").unwrap();

        let config = GonecConfig::load(file.path()).unwrap();
        assert_eq!(config.walk.max_depth, 32);
    }

    #[test]
    fn load_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        let err = GonecConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains(CONFIG_FILE));
    }

    #[test]
    fn load_invalid_file_adds_context() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[walk]\nmax_depth = 0").unwrap();

        let err = GonecConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to load"));
        assert!(matches!(err.downcast_ref::<ConfigError>(), Some(ConfigError::InvalidMaxDepth(0))));
    }
}
