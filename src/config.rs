//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/bintree/bintree.toml`
//! 3. Local config: file passed with `--config`
//! 4. Environment variables: `BINTREE_*` prefix

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::cli::CliError;
use crate::samples::Sample;
use crate::traversal::TraversalOrder;
use crate::tree_traits::DEFAULT_INDENT;

/// Unified configuration for the bintree CLI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Spaces per depth level for the `show` command
    pub indent_width: usize,
    /// Order used by `walk` when none is given
    pub traversal: TraversalOrder,
    /// Demo tree used when `--sample` is not given
    pub sample: Sample,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT,
            traversal: TraversalOrder::default(),
            sample: Sample::default(),
        }
    }
}

/// Raw settings for intermediate parsing (None means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub indent_width: Option<usize>,
    pub traversal: Option<TraversalOrder>,
    pub sample: Option<Sample>,
}

/// Get the XDG config directory for bintree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bintree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("bintree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, CliError> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| CliError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins wherever it specifies a value.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            indent_width: overlay.indent_width.unwrap_or(self.indent_width),
            traversal: overlay.traversal.unwrap_or(self.traversal),
            sample: overlay.sample.unwrap_or(self.sample),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// A missing global file is skipped; a `local` path that was given
    /// explicitly must exist.
    #[instrument(level = "debug")]
    pub fn load(local: Option<&Path>) -> Result<Self, CliError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(local_path) = local {
            debug!("local config: {}", local_path.display());
            current = current.merge_with(&load_raw_settings(local_path)?);
        }

        Self::apply_env_overrides(current)
    }

    /// Apply BINTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, CliError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("BINTREE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("indent_width") {
            settings.indent_width = val.parse().map_err(|e| CliError::Config {
                message: format!("BINTREE_INDENT_WIDTH={val}: {e}"),
            })?;
        }
        if let Ok(val) = config.get_string("traversal") {
            settings.traversal = parse_env_value("BINTREE_TRAVERSAL", &val)?;
        }
        if let Ok(val) = config.get_string("sample") {
            settings.sample = parse_env_value("BINTREE_SAMPLE", &val)?;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, CliError> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# bintree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/bintree/bintree.toml
#   Local:  file passed with --config
#   Env:    BINTREE_* environment variables

# Spaces per depth level used by `bintree show`
# indent_width = 2

# Default order for `bintree walk`:
# breadth-first | reverse-breadth-first | post-order | pre-order
# traversal = "breadth-first"

# Demo tree: numbers | ancestors
# sample = "numbers"
"#
        .to_string()
    }
}

fn parse_env_value<V: ValueEnum>(var: &str, val: &str) -> Result<V, CliError> {
    V::from_str(val, true).map_err(|e| CliError::Config {
        message: format!("{var}={val}: {e}"),
    })
}

fn config_err(e: ConfigError) -> CliError {
    CliError::Config {
        message: e.to_string(),
    }
}
