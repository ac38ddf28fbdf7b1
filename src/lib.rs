//! A command line client for an edge platform api.
//!
//! The binary is a thin wrapper: it reads the arguments and the
//! configuration and runs the selected command via
//! [`cli::execute_cmd`].

pub mod cli;
pub mod config;
pub mod error;
pub mod http;

use clap::Parser;
use cli::opts::MainOpts;
use config::EdgeConfig;
use error::Result;

pub fn read_args() -> MainOpts {
    MainOpts::parse()
}

pub fn read_config(file: Option<&std::path::Path>) -> Result<EdgeConfig> {
    let cfg = EdgeConfig::read(file)?;
    log::debug!("Config: {:?}", cfg);
    Ok(cfg)
}

pub fn execute(opts: MainOpts) -> Result<()> {
    let cfg = read_config(opts.config.as_deref())?;
    cli::execute_cmd(cfg, opts)?;
    Ok(())
}
