use clap::Parser;
use snafu::{ResultExt, Snafu};
use std::path::Path;

use crate::cli::opts::Format;
use crate::cli::sink::{self, Error as SinkError};
use crate::config::{ConfigError, EdgeConfig};
use crate::error::ErrorKind;

/// Stores settings in the config file.
///
/// Only the given values are changed, all others are kept. If the
/// config file does not exist yet, it is created with the default
/// values first.
#[derive(Parser, Debug, PartialEq)]
pub struct Input {
    /// The personal token to authenticate at the api.
    #[arg(long)]
    pub token: Option<String>,

    /// The (base) URL of the api.
    #[arg(long)]
    pub api_url: Option<String>,

    /// The output format to use when `--format` is not given.
    #[arg(long, value_enum)]
    pub default_format: Option<Format>,
}

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Nothing to configure. Use -h or --help for more information"))]
    NothingGiven,

    #[snafu(display("{}", source))]
    UpdateConfig { source: ConfigError },

    #[snafu(display("Error writing data: {}", source))]
    WriteResult { source: SinkError },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NothingGiven => ErrorKind::NoFieldInformed,
            Error::UpdateConfig { .. } => ErrorKind::Config,
            Error::WriteResult { .. } => ErrorKind::Output,
        }
    }
}

impl Input {
    /// Applies the given values to `file` (or the default config
    /// file). This does not need a connection to the api.
    pub fn exec(&self, file: Option<&Path>) -> Result<(), Error> {
        if self.token.is_none() && self.api_url.is_none() && self.default_format.is_none() {
            return Err(Error::NothingGiven);
        }
        let path = EdgeConfig::update_file(file, |cfg| self.apply(cfg)).context(UpdateConfigSnafu)?;
        log::info!("Updated config file {}", path.display());
        sink::write_line(format!("Configuration written to {}", path.display()))
            .context(WriteResultSnafu)
    }

    fn apply(&self, cfg: &mut EdgeConfig) {
        if let Some(token) = &self.token {
            cfg.token = Some(token.clone());
        }
        if let Some(url) = &self.api_url {
            cfg.api_url = url.clone();
        }
        if let Some(fmt) = self.default_format {
            cfg.default_format = fmt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_apply_keeps_other_values() {
        let input = Input {
            token: Some("abc".into()),
            api_url: None,
            default_format: None,
        };
        let mut cfg = EdgeConfig {
            api_url: "http://localhost:1234".into(),
            ..EdgeConfig::default()
        };
        input.apply(&mut cfg);
        assert_eq!(cfg.token.as_deref(), Some("abc"));
        assert_eq!(cfg.api_url, "http://localhost:1234");
        assert_eq!(cfg.default_format, Format::Text);
    }

    #[test]
    fn unit_writes_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("config.toml");
        let input = Input {
            token: None,
            api_url: Some("http://localhost:8080".into()),
            default_format: Some(Format::Json),
        };
        input.exec(Some(&file)).unwrap();
        let cfg = EdgeConfig::read(Some(&file)).unwrap();
        assert_eq!(cfg.api_url, "http://localhost:8080");
        assert_eq!(cfg.default_format, Format::Json);
        assert_eq!(cfg.token, None);
    }

    #[test]
    fn unit_nothing_given() {
        let input = Input {
            token: None,
            api_url: None,
            default_format: None,
        };
        assert_eq!(input.exec(None).unwrap_err().kind(), ErrorKind::NoFieldInformed);
    }
}
