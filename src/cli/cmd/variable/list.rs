use clap::Parser;

use super::{Cmd, Context};
use crate::cli::opts::ListOpts;
use crate::cli::spec::{CommandSpec, Operation, Verb};
use crate::cli::template::{self, Error};
use crate::http::payload::Variable;

static SPEC: CommandSpec = CommandSpec {
    resource: "variable",
    label: "Variable",
    id_label: "UUID",
    operation: Operation::List,
    verb: Verb::Get,
    path: "variables",
    fields: &[],
};

/// Lists variables.
#[derive(Parser, Debug)]
pub struct Input {
    #[command(flatten)]
    pub list: ListOpts,
}

impl Cmd for Input {
    type CmdError = Error;

    fn exec(&self, ctx: &Context) -> Result<(), Error> {
        template::list::<Variable>(ctx, &SPEC, Vec::new(), &self.list)
    }
}
