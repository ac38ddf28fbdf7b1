use clap::Parser;

use super::{Cmd, Context};
use crate::cli::opts::ListOpts;
use crate::cli::spec::{CommandSpec, Operation, Verb};
use crate::cli::template::{self, Error};
use crate::http::payload::Domain;

static SPEC: CommandSpec = CommandSpec {
    resource: "domain",
    label: "Domain",
    id_label: "ID",
    operation: Operation::List,
    verb: Verb::Get,
    path: "domains",
    fields: &[],
};

/// Lists domains.
#[derive(Parser, Debug)]
pub struct Input {
    #[command(flatten)]
    pub list: ListOpts,
}

impl Cmd for Input {
    type CmdError = Error;

    fn exec(&self, ctx: &Context) -> Result<(), Error> {
        template::list::<Domain>(ctx, &SPEC, Vec::new(), &self.list)
    }
}
