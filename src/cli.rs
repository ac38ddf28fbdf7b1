pub mod cmd;
pub mod input;
pub mod opts;
pub mod sink;
pub mod spec;
pub mod table;
pub mod template;

use crate::config::EdgeConfig;
use clap::CommandFactory;
use snafu::ResultExt;

use self::cmd::{
    Cmd, CmdError, Context, DomainSnafu, EdgeApplicationSnafu, OriginSnafu, ResourceSnafu,
    VariableSnafu,
};
use self::opts::{MainOpts, SubCommand};

pub fn execute_cmd(cfg: EdgeConfig, opts: MainOpts) -> Result<(), CmdError> {
    log::info!("Running command: {:?}", opts.subcmd);
    match &opts.subcmd {
        SubCommand::WriteDefaultConfig => {
            let cfg_file = EdgeConfig::write_default_file()?;
            eprintln!("Wrote config to {:}", cfg_file.display());
        }
        SubCommand::GenerateCompletions(input) => {
            let mut app = MainOpts::command();
            input.print_completions(&mut app);
        }
        SubCommand::Configure(input) => input.exec(opts.config.as_deref())?,
        subcmd => {
            let ctx = Context::new(&opts.common_opts, &cfg)?;
            match subcmd {
                SubCommand::Version(input) => input.exec(&ctx)?,
                SubCommand::EdgeApplication(input) => {
                    input.exec(&ctx).context(EdgeApplicationSnafu)?
                }
                SubCommand::Origin(input) => input.exec(&ctx).context(OriginSnafu)?,
                SubCommand::Domain(input) => input.exec(&ctx).context(DomainSnafu)?,
                SubCommand::Variable(input) => input.exec(&ctx).context(VariableSnafu)?,
                SubCommand::Resource(input) => input.exec(&ctx).context(ResourceSnafu)?,
                SubCommand::WriteDefaultConfig
                | SubCommand::GenerateCompletions(_)
                | SubCommand::Configure(_) => {}
            }
        }
    };
    Ok(())
}
