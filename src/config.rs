//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/arbor/arbor.toml`
//! 3. Environment variables: `ARBOR_*` prefix

use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

const ENV_PREFIX: &str = "ARBOR";

/// How object graphs are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// Indented tree with box-drawing glyphs
    #[default]
    Tree,
    /// One `path = value` line per text attribute
    Plain,
}

impl FromStr for OutputStyle {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tree" => Ok(Self::Tree),
            "plain" => Ok(Self::Plain),
            other => Err(ApplicationError::Config {
                message: format!("unknown output style '{other}' (expected tree or plain)"),
            }),
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub doubles_dir: Option<PathBuf>,
    pub style: Option<OutputStyle>,
}

/// Unified configuration for arbor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory searched for named double files (default: <config dir>/doubles)
    pub doubles_dir: PathBuf,
    /// Output style for `show`
    pub style: OutputStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            doubles_dir: default_doubles_dir(),
            style: OutputStyle::default(),
        }
    }
}

fn default_doubles_dir() -> PathBuf {
    global_config_dir()
        .map(|dir| dir.join("doubles"))
        .unwrap_or_else(|| PathBuf::from("~/.config/arbor/doubles"))
}

/// Get the XDG config directory for arbor.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "arbor").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("arbor.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Load settings with layered precedence, using the XDG global config path.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings with layered precedence from an explicit global config file.
    ///
    /// A missing file is skipped; a file that exists but does not parse is an error.
    pub fn load_from(global: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_layers(global, ENV_PREFIX)
    }

    fn load_layers(global: Option<&Path>, env_prefix: &str) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                let raw = load_raw_settings(global_path)?;
                current = current.merge_with(&raw);
                tracing::debug!(path = %global_path.display(), "applied global config");
            }
        }

        current = Self::apply_env_overrides(current, env_prefix)?;
        current.expand_paths();

        Ok(current)
    }

    /// Scalar options: overlay wins if specified, otherwise keep base.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            doubles_dir: overlay
                .doubles_dir
                .clone()
                .unwrap_or_else(|| self.doubles_dir.clone()),
            style: overlay.style.unwrap_or(self.style),
        }
    }

    /// Apply `<PREFIX>_*` environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self, prefix: &str) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("doubles_dir") {
            settings.doubles_dir = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("style") {
            settings.style = val.parse()?;
        }

        Ok(settings)
    }

    /// Expand `~`, `$VAR` and `${VAR}` in path-like fields.
    fn expand_paths(&mut self) {
        let raw = self.doubles_dir.to_string_lossy().into_owned();
        if let Ok(expanded) = shellexpand::full(&raw) {
            self.doubles_dir = PathBuf::from(expanded.into_owned());
        }
    }

    /// Resolve a double reference: an existing path, or a name under `doubles_dir`.
    pub fn double_path(&self, reference: &str) -> PathBuf {
        let direct = PathBuf::from(reference);
        if direct.extension().is_some() || direct.components().count() > 1 {
            return direct;
        }
        self.doubles_dir.join(format!("{reference}.toml"))
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# arbor configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/arbor/arbor.toml
#   Env:    ARBOR_* environment variables (explicit overrides)

# Directory holding named double files: `--double leaf` reads <doubles_dir>/leaf.toml
# doubles_dir = "~/.config/arbor/doubles"

# Output style for `arbor show`: "tree" or "plain"
# style = "tree"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::load_layers(None, "ARBOR_UNIT_NO_CONFIG").unwrap();
        assert_eq!(settings.style, OutputStyle::Tree);
        assert!(settings.doubles_dir.ends_with("doubles"));
    }

    #[test]
    fn given_env_override_when_loading_then_env_wins() {
        std::env::set_var("ARBOR_UNIT_ENV_STYLE", "plain");

        let settings = Settings::load_layers(None, "ARBOR_UNIT_ENV").unwrap();

        std::env::remove_var("ARBOR_UNIT_ENV_STYLE");
        assert_eq!(settings.style, OutputStyle::Plain);
    }

    #[test]
    fn given_bad_env_style_when_loading_then_config_error() {
        std::env::set_var("ARBOR_UNIT_BAD_STYLE", "fancy");

        let result = Settings::load_layers(None, "ARBOR_UNIT_BAD");

        std::env::remove_var("ARBOR_UNIT_BAD_STYLE");
        assert!(matches!(result, Err(ApplicationError::Config { .. })));
    }

    #[test]
    fn given_bare_name_when_resolving_double_then_joins_doubles_dir() {
        let settings = Settings {
            doubles_dir: PathBuf::from("/tmp/doubles"),
            style: OutputStyle::Tree,
        };

        assert_eq!(
            settings.double_path("leaf"),
            PathBuf::from("/tmp/doubles/leaf.toml")
        );
        assert_eq!(
            settings.double_path("./leaf.toml"),
            PathBuf::from("./leaf.toml")
        );
    }

    #[test]
    fn given_tilde_in_doubles_dir_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            doubles_dir: PathBuf::from("~/doubles"),
            style: OutputStyle::Tree,
        };

        settings.expand_paths();

        assert!(!settings.doubles_dir.to_string_lossy().starts_with('~'));
    }

    #[test]
    fn given_template_when_parsed_then_valid_toml() {
        let raw: RawSettings = toml::from_str(&Settings::template()).unwrap();
        assert!(raw.doubles_dir.is_none());
        assert!(raw.style.is_none());
    }
}
