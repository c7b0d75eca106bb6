// crates/algokit-config/src/config.rs
// ============================================================================
// Module: algokit Configuration
// Description: Configuration loading and validation for the algokit CLI.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: algokit-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Every section is optional and unknown keys are rejected. When neither an
//! explicit path nor `ALGOKIT_CONFIG` is given and `algokit.toml` is absent
//! from the working directory, the defaults apply.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use algokit_core::GraphLimits;
use algokit_core::SortAlgorithm;
use algokit_core::UnionFindAlgorithm;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "algokit.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "ALGOKIT_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// One mebibyte.
const MIB: usize = 1024 * 1024;
/// Default cap on bytes read from one input.
pub(crate) const DEFAULT_MAX_INPUT_BYTES: usize = 16 * MIB;
/// Largest accepted `limits.max_input_bytes`.
pub(crate) const MAX_MAX_INPUT_BYTES: usize = 256 * MIB;
/// Largest accepted `limits.max_vertices`.
pub(crate) const MAX_MAX_VERTICES: usize = 50_000_000;
/// Largest accepted `limits.max_edges`.
pub(crate) const MAX_MAX_EDGES: usize = 200_000_000;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// algokit configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlgokitConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Input size limits.
    #[serde(default)]
    pub limits: LimitsConfig,
    /// Sorting defaults.
    #[serde(default)]
    pub sorting: SortingConfig,
    /// Union-find defaults.
    #[serde(default)]
    pub union_find: UnionFindConfig,
    /// Output rendering.
    #[serde(default)]
    pub output: OutputConfig,
}

impl AlgokitConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails. A missing
    /// file is an error only when its path was given explicitly or through
    /// [`CONFIG_ENV_VAR`].
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let source = resolve_path(path, env::var(CONFIG_ENV_VAR).ok())?;
        let resolved = source.path();
        validate_path(resolved)?;
        if matches!(source, ConfigSource::Implicit(_)) && !resolved.exists() {
            return Ok(Self::default());
        }
        let bytes = fs::read(resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml_str(content)
    }

    /// Parses and validates configuration text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.limits.validate()
    }

    /// Returns the parser limits for graph inputs.
    #[must_use]
    pub const fn graph_limits(&self) -> GraphLimits {
        GraphLimits {
            max_vertices: self.limits.max_vertices,
            max_edges: self.limits.max_edges,
        }
    }
}

// ============================================================================
// SECTION: Logging
// ============================================================================

/// Logging configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Minimum level emitted.
    #[serde(default)]
    pub level: LogLevel,
    /// Line layout.
    #[serde(default)]
    pub format: LogFormat,
}

/// Log verbosity threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Warnings and errors.
    #[default]
    Warn,
    /// Informational events.
    Info,
    /// Algorithm-level debug events.
    Debug,
    /// Everything.
    Trace,
}

impl LogLevel {
    /// Returns the filter directive for this level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Log line layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Input size limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LimitsConfig {
    /// Maximum bytes read from one input.
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,
    /// Maximum vertex count accepted from graph text.
    #[serde(default = "default_max_vertices")]
    pub max_vertices: usize,
    /// Maximum edge count accepted from graph text.
    #[serde(default = "default_max_edges")]
    pub max_edges: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: default_max_input_bytes(),
            max_vertices: default_max_vertices(),
            max_edges: default_max_edges(),
        }
    }
}

impl LimitsConfig {
    /// Validates limits configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_input_bytes == 0 || self.max_input_bytes > MAX_MAX_INPUT_BYTES {
            return Err(ConfigError::Invalid("limits.max_input_bytes out of range".to_string()));
        }
        if self.max_vertices == 0 || self.max_vertices > MAX_MAX_VERTICES {
            return Err(ConfigError::Invalid("limits.max_vertices out of range".to_string()));
        }
        if self.max_edges == 0 || self.max_edges > MAX_MAX_EDGES {
            return Err(ConfigError::Invalid("limits.max_edges out of range".to_string()));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Algorithm Defaults
// ============================================================================

/// Sorting defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SortingConfig {
    /// Algorithm used when the command line names none.
    #[serde(default)]
    pub algorithm: SortAlgorithm,
}

/// Union-find defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnionFindConfig {
    /// Implementation used when the command line names none.
    #[serde(default)]
    pub algorithm: UnionFindAlgorithm,
}

// ============================================================================
// SECTION: Output
// ============================================================================

/// Output rendering configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Result layout on stdout.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Result layout on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text lines.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Where the config path came from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ConfigSource {
    /// Named on the command line or through the environment; must exist.
    Explicit(PathBuf),
    /// The default filename; may be absent.
    Implicit(PathBuf),
}

impl ConfigSource {
    /// Returns the resolved path.
    fn path(&self) -> &Path {
        match self {
            Self::Explicit(path) | Self::Implicit(path) => path,
        }
    }
}

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(
    path: Option<&Path>,
    env_path: Option<String>,
) -> Result<ConfigSource, ConfigError> {
    if let Some(path) = path {
        return Ok(ConfigSource::Explicit(path.to_path_buf()));
    }
    if let Some(env_path) = env_path {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(ConfigSource::Explicit(PathBuf::from(env_path)));
    }
    Ok(ConfigSource::Implicit(PathBuf::from(DEFAULT_CONFIG_NAME)))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Default for `limits.max_input_bytes`.
const fn default_max_input_bytes() -> usize {
    DEFAULT_MAX_INPUT_BYTES
}

/// Default for `limits.max_vertices`.
const fn default_max_vertices() -> usize {
    algokit_core::graphs::io::DEFAULT_MAX_VERTICES
}

/// Default for `limits.max_edges`.
const fn default_max_edges() -> usize {
    algokit_core::graphs::io::DEFAULT_MAX_EDGES
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::path::PathBuf;

    use super::ConfigSource;
    use super::MAX_TOTAL_PATH_LENGTH;
    use super::resolve_path;
    use super::validate_path;

    #[test]
    fn explicit_path_wins_over_environment() {
        let source = resolve_path(Some(Path::new("cli.toml")), Some("env.toml".to_string()));
        assert_eq!(source.ok(), Some(ConfigSource::Explicit(PathBuf::from("cli.toml"))));
    }

    #[test]
    fn environment_path_is_explicit() {
        let source = resolve_path(None, Some("env.toml".to_string()));
        assert_eq!(source.ok(), Some(ConfigSource::Explicit(PathBuf::from("env.toml"))));
    }

    #[test]
    fn default_name_is_implicit() {
        let source = resolve_path(None, None);
        assert_eq!(source.ok(), Some(ConfigSource::Implicit(PathBuf::from("algokit.toml"))));
    }

    #[test]
    fn rejects_overlong_paths() {
        assert!(resolve_path(None, Some("a".repeat(MAX_TOTAL_PATH_LENGTH + 1))).is_err());
        assert!(validate_path(Path::new(&"b".repeat(256))).is_err());
        assert!(validate_path(Path::new("dir/algokit.toml")).is_ok());
    }
}
