use clap::Parser;

use super::{Cmd, Context};
use crate::cli::opts::ListOpts;
use crate::cli::spec::{CommandSpec, Operation, Verb};
use crate::cli::template::{self, Error};
use crate::http::payload::EdgeApplication;

static SPEC: CommandSpec = CommandSpec {
    resource: "edge-application",
    label: "Edge Application",
    id_label: "ID",
    operation: Operation::List,
    verb: Verb::Get,
    path: "edge_applications",
    fields: &[],
};

/// Lists edge applications.
#[derive(Parser, Debug)]
pub struct Input {
    #[command(flatten)]
    pub list: ListOpts,
}

impl Cmd for Input {
    type CmdError = Error;

    fn exec(&self, ctx: &Context) -> Result<(), Error> {
        template::list::<EdgeApplication>(ctx, &SPEC, Vec::new(), &self.list)
    }
}
