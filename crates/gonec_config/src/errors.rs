#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read gonec.toml: {0}")]
    ConfigReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Invalid walk.max_depth '{0}'. The maximum nesting depth must be at least 1")]
    InvalidMaxDepth(usize),
}
