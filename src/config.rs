//! The configuration file.
//!
//! The file is in TOML format and is looked up in the OS specific
//! config directory at `edgectl/config.toml`. A different file can be
//! given via the `--config` option or the environment variable
//! `EDGECTL_CONFIG`. If no file exists, the default configuration is
//! used.

use crate::cli::opts::Format;
use serde::{Deserialize, Serialize};
use snafu::{ResultExt, Snafu};
use std::path::{Path, PathBuf};

const EDGECTL_CONFIG: &str = "EDGECTL_CONFIG";
pub const DEFAULT_API_URL: &str = "https://api.azionapi.net";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeConfig {
    pub api_url: String,
    pub token: Option<String>,
    pub default_format: Format,
}

#[derive(Debug, Snafu)]
pub enum ConfigError {
    #[snafu(display("Unable to read config file {}: {}", path.display(), source))]
    ReadFile {
        source: std::io::Error,
        path: PathBuf,
    },

    #[snafu(display("Unable to create default config file {}: {}", path.display(), source))]
    CreateDefault {
        source: std::io::Error,
        path: PathBuf,
    },

    #[snafu(display("The default config file {} already exists", path.display()))]
    DefaultExists { path: PathBuf },

    #[snafu(display("Unable to parse file {}: {}", path.display(), source))]
    ParseFile {
        source: toml::de::Error,
        path: PathBuf,
    },

    #[snafu(display("The config file {} could not be serialized: {}", path.display(), source))]
    WriteFile {
        source: toml::ser::Error,
        path: PathBuf,
    },

    #[snafu(display("The config directory could not be found"))]
    NoConfigDir,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            token: None,
            default_format: Format::Text,
        }
    }
}

impl EdgeConfig {
    /// Reads the configuration from the given file, the file in
    /// `EDGECTL_CONFIG` or the default location, in this order.
    ///
    /// An explicitly given file must exist. If the default file does
    /// not exist, the default configuration is returned.
    pub fn read(file: Option<&Path>) -> Result<EdgeConfig, ConfigError> {
        match explicit_file(file) {
            Some(given) => {
                let cfg = given.canonicalize().context(ReadFileSnafu { path: &given })?;
                log::debug!("Load config from: {}", cfg.display());
                load_from(&cfg)
            }
            None => {
                let file = default_file()?;
                if file.exists() {
                    log::debug!("Load config from: {}", file.display());
                    load_from(&file)
                } else {
                    log::debug!("No config file present; using default config");
                    Ok(EdgeConfig::default())
                }
            }
        }
    }

    pub fn write_default_file() -> Result<PathBuf, ConfigError> {
        let file = default_file()?;
        if file.exists() {
            log::info!("The default config file already exists. Not writing it!");
            DefaultExistsSnafu { path: file }.fail()
        } else {
            write_to(&EdgeConfig::default(), &file)?;
            Ok(file)
        }
    }

    /// Loads the config file (or the defaults if it does not exist
    /// yet), applies `change` and writes the result back.
    pub fn update_file<F>(file: Option<&Path>, change: F) -> Result<PathBuf, ConfigError>
    where
        F: FnOnce(&mut EdgeConfig),
    {
        let path = match explicit_file(file) {
            Some(p) => p,
            None => default_file()?,
        };
        let mut cfg = if path.exists() {
            load_from(&path)?
        } else {
            EdgeConfig::default()
        };
        change(&mut cfg);
        write_to(&cfg, &path)?;
        Ok(path)
    }
}

fn explicit_file(file: Option<&Path>) -> Option<PathBuf> {
    file.map(Path::to_path_buf).or_else(|| {
        std::env::var_os(EDGECTL_CONFIG)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    })
}

fn default_file() -> Result<PathBuf, ConfigError> {
    let mut dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    dir.push("edgectl");
    dir.push("config.toml");
    Ok(dir)
}

fn load_from(file: &Path) -> Result<EdgeConfig, ConfigError> {
    let cnt = std::fs::read_to_string(file).context(ReadFileSnafu { path: file })?;
    toml::from_str(&cnt).context(ParseFileSnafu { path: file })
}

fn write_to(cfg: &EdgeConfig, file: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = file.parent() {
        if !dir.exists() {
            log::debug!("Creating config directory {}", dir.display());
            std::fs::create_dir_all(dir).context(CreateDefaultSnafu { path: file })?;
        }
    }
    let cnt = toml::to_string(cfg).context(WriteFileSnafu { path: file })?;
    log::debug!("Writing config file: {}", file.display());
    std::fs::write(file, cnt).context(CreateDefaultSnafu { path: file })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_partial_config_uses_defaults() {
        let cfg: EdgeConfig = toml::from_str("token = \"abc\"").unwrap();
        assert_eq!(cfg.token.as_deref(), Some("abc"));
        assert_eq!(cfg.api_url, DEFAULT_API_URL);
        assert_eq!(cfg.default_format, Format::Text);
    }

    #[test]
    fn unit_update_creates_and_keeps_values() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("sub").join("config.toml");

        EdgeConfig::update_file(Some(&file), |c| c.api_url = "http://localhost:1".into()).unwrap();
        EdgeConfig::update_file(Some(&file), |c| c.token = Some("secret".into())).unwrap();

        let cfg = EdgeConfig::read(Some(&file)).unwrap();
        assert_eq!(cfg.api_url, "http://localhost:1");
        assert_eq!(cfg.token.as_deref(), Some("secret"));
    }

    #[test]
    fn unit_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = EdgeConfig::read(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }
}
