//! Defines all commands of the cli.
//!
//! A command is defined by the trait [`Cmd`]. Besides the type it is
//! defined on, it expects a [`Context`] argument which contains the
//! configuration file, the common options and an instance of the
//! [`crate::http::Client`].
//!
//! Each command defines its inputs via [clap](https://clap.rs) and
//! implements for this type the `Cmd` trait. Each input type is
//! referenced in the subcommand enum. Commands operating on api
//! resources are grouped by resource and delegate to the generic
//! executor in [`super::template`].

pub mod configure;
pub mod domain;
pub mod edge_application;
pub mod generate_completions;
pub mod origin;
pub mod resource;
pub mod variable;
pub mod version;

use super::opts::Format;
use super::sink::{Error as SinkError, Sink};
use super::template;
use crate::cli::opts::CommonOpts;
use crate::config::{ConfigError, EdgeConfig};
use crate::error::ErrorKind;
use crate::http::{self, Client, ClientSettings};
use serde::Serialize;
use snafu::{ResultExt, Snafu};

const EDGECTL_API_URL: &str = "EDGECTL_API_URL";
const EDGECTL_TOKEN: &str = "EDGECTL_TOKEN";

/// A command for the cli.
///
/// The [`Context`] argument is defined for all commands.
pub trait Cmd {
    type CmdError;

    fn exec(&self, ctx: &Context) -> Result<(), Self::CmdError>;
}

/// An environment for running a command.
///
/// It has by default access to the configuration and the common
/// options. The http client is also provided.
pub struct Context<'a> {
    pub opts: &'a CommonOpts,
    pub cfg: &'a EdgeConfig,
    pub client: Client,
}

impl Context<'_> {
    pub fn new<'a>(opts: &'a CommonOpts, cfg: &'a EdgeConfig) -> Result<Context<'a>, CmdError> {
        let settings = ClientSettings {
            token: api_token(opts, cfg),
            proxy: opts.to_proxy_setting(),
            accept_invalid_certs: opts.accept_invalid_certificates,
        };
        let client = Client::new(api_url(opts, cfg), settings).context(ContextCreateSnafu)?;
        Ok(Context { opts, cfg, client })
    }

    pub fn base_url(&self) -> String {
        api_url(self.opts, self.cfg)
    }

    /// True if details instead of confirmations should be printed.
    pub fn verbose(&self) -> bool {
        self.opts.verbose > 0
    }

    pub fn format(&self) -> Format {
        self.opts.format.unwrap_or(self.cfg.default_format)
    }

    fn write_result<A: Sink + Serialize>(&self, value: A) -> Result<(), SinkError> {
        Sink::write_value(self.format(), &value)
    }
}

/// Option, then environment, then config file.
fn api_url(opts: &CommonOpts, cfg: &EdgeConfig) -> String {
    opts.api_url
        .clone()
        .or_else(|| env_value(EDGECTL_API_URL))
        .unwrap_or_else(|| cfg.api_url.clone())
}

/// Option, then environment, then config file.
fn api_token(opts: &CommonOpts, cfg: &EdgeConfig) -> Option<String> {
    opts.token
        .clone()
        .or_else(|| env_value(EDGECTL_TOKEN))
        .or_else(|| cfg.token.clone())
}

fn env_value(name: &str) -> Option<String> {
    std::env::var_os(name)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.into_string().ok())
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CmdError {
    #[snafu(display("{}", source))]
    ContextCreate { source: http::Error },

    #[snafu(display("{}", source))]
    EdgeApplication { source: template::Error },

    #[snafu(display("{}", source))]
    Origin { source: template::Error },

    #[snafu(display("{}", source))]
    Domain { source: template::Error },

    #[snafu(display("{}", source))]
    Variable { source: template::Error },

    #[snafu(display("{}", source))]
    Resource { source: template::Error },

    #[snafu(display("{}", source))]
    Configure { source: configure::Error },

    #[snafu(display("{}", source))]
    Version { source: version::Error },

    #[snafu(display("{}", source))]
    WriteConfig { source: ConfigError },
}

impl CmdError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CmdError::ContextCreate { source } => source.kind(),
            CmdError::EdgeApplication { source }
            | CmdError::Origin { source }
            | CmdError::Domain { source }
            | CmdError::Variable { source }
            | CmdError::Resource { source } => source.kind(),
            CmdError::Configure { source } => source.kind(),
            CmdError::Version { source } => source.kind(),
            CmdError::WriteConfig { .. } => ErrorKind::Config,
        }
    }
}

impl From<ConfigError> for CmdError {
    fn from(source: ConfigError) -> Self {
        CmdError::WriteConfig { source }
    }
}
impl From<configure::Error> for CmdError {
    fn from(source: configure::Error) -> Self {
        CmdError::Configure { source }
    }
}
impl From<version::Error> for CmdError {
    fn from(source: version::Error) -> Self {
        CmdError::Version { source }
    }
}
