use clap::Parser;
use snafu::{ResultExt, Snafu};

use super::{Cmd, Context};
use crate::cli::sink::Error as SinkError;
use crate::error::ErrorKind;
use crate::http::payload::BuildInfo;

/// Prints version information about this client.
///
/// Shows the version, the commit and the build environment of this
/// binary and the api url that is in use.
#[derive(Parser, Debug, PartialEq)]
pub struct Input {}

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Error writing data: {}", source))]
    WriteResult { source: SinkError },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Output
    }
}

impl Cmd for Input {
    type CmdError = Error;

    fn exec(&self, ctx: &Context) -> Result<(), Error> {
        let info = BuildInfo {
            api_url: ctx.base_url(),
            ..BuildInfo::default()
        };
        ctx.write_result(info).context(WriteResultSnafu)?;
        Ok(())
    }
}
