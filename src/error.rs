//! Global error types.
//!
//! Every error in this crate can be classified by an [`ErrorKind`].
//! Callers (and tests) match on the kind instead of comparing error
//! values or messages.

use crate::cli::cmd;
use crate::config;
use snafu::Snafu;

/// The kind of failure, independent of where it occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required flag (or document field) was not given.
    MissingRequired,
    /// Identifying flags that must be given together were not.
    MandatoryFlags,
    /// An update was requested without any field to change.
    NoFieldInformed,
    /// A boolean flag did not parse as `true` or `false`.
    InvalidBoolean,
    /// A value outside of the closed set of an enumerated field.
    InvalidChoice,
    /// A document field has the wrong JSON type.
    InvalidType,
    /// A shellscript resource was given no (or an unknown) trigger.
    InvalidTrigger,
    /// The input document or a content file could not be opened.
    OpeningFile,
    /// The input document is not valid JSON for the request.
    UnmarshalReader,
    /// The server answered with a non-success status.
    Api,
    /// The server could not be reached or the response was unusable.
    Transport,
    /// The configuration file could not be read or written.
    Config,
    /// Interactive input failed.
    Interaction,
    /// Writing the result failed.
    Output,
}

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("{}", source))]
    Cmd { source: cmd::CmdError },

    #[snafu(display("Configuration error: {}", source))]
    Config { source: config::ConfigError },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Cmd { source } => source.kind(),
            Error::Config { .. } => ErrorKind::Config,
        }
    }
}

impl From<config::ConfigError> for Error {
    fn from(e: config::ConfigError) -> Error {
        Error::Config { source: e }
    }
}

impl From<cmd::CmdError> for Error {
    fn from(e: cmd::CmdError) -> Error {
        Error::Cmd { source: e }
    }
}

pub type Result<A> = std::result::Result<A, Error>;
