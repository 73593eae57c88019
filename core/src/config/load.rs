use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;

use super::types::AppConfig;
use crate::error::ConfigError;

pub const DEFAULT_CONFIG_FILE: &str = "primer.toml";
pub const ENV_REFERENCE_YEAR: &str = "PRIMER_REFERENCE_YEAR";
pub const ENV_STDIN_ENCODING: &str = "PRIMER_STDIN_ENCODING";

/// Where the loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Defaults,
    File(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Defaults => f.write_str("defaults"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub fn load_default() -> Result<(AppConfig, ConfigSource), ConfigError> {
    load(None)
}

/// An explicit path must exist. Without one, `primer.toml` in the working
/// directory is used when present. Environment overrides apply last.
pub fn load(path: Option<&Path>) -> Result<(AppConfig, ConfigSource), ConfigError> {
    let (mut cfg, source) = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ConfigError::NotFound(p.display().to_string()));
            }
            (read_file(p)?, ConfigSource::File(p.to_path_buf()))
        }
        None => {
            let p = Path::new(DEFAULT_CONFIG_FILE);
            if p.exists() {
                (read_file(p)?, ConfigSource::File(p.to_path_buf()))
            } else {
                (AppConfig::default(), ConfigSource::Defaults)
            }
        }
    };

    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok())?;
    Ok((cfg, source))
}

pub fn from_toml_str(s: &str) -> Result<AppConfig, ConfigError> {
    toml::from_str::<AppConfig>(s).map_err(|e| ConfigError::Parse(e.into()))
}

fn read_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))
        .map_err(ConfigError::Parse)?;
    from_toml_str(&s)
}

pub fn apply_env_overrides<F>(cfg: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup(ENV_REFERENCE_YEAR) {
        if !v.trim().is_empty() {
            let year = v.trim().parse::<i64>().map_err(|e| ConfigError::EnvInvalid {
                key: ENV_REFERENCE_YEAR.to_string(),
                source: e.into(),
            })?;
            cfg.reference_year = year;
        }
    }

    if let Some(v) = lookup(ENV_STDIN_ENCODING) {
        if !v.trim().is_empty() {
            cfg.input.encoding = Some(v.trim().to_string());
        }
    }

    Ok(())
}
