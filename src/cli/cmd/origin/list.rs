use clap::Parser;

use super::{Cmd, Context};
use crate::cli::opts::ListOpts;
use crate::cli::spec::{CommandSpec, FieldSpec, Operation, Verb};
use crate::cli::template::{self, Error};
use crate::http::payload::Origin;

static SPEC: CommandSpec = CommandSpec {
    resource: "origin",
    label: "Origin",
    id_label: "key",
    operation: Operation::List,
    verb: Verb::Get,
    path: "edge_applications/{application_id}/origins",
    fields: &[FieldSpec::path("application_id", "application-id")],
};

/// Lists the origins of an edge application.
#[derive(Parser, Debug)]
pub struct Input {
    /// The id of the edge application.
    #[arg(long)]
    pub application_id: Option<i64>,

    #[command(flatten)]
    pub list: ListOpts,
}

impl Cmd for Input {
    type CmdError = Error;

    fn exec(&self, ctx: &Context) -> Result<(), Error> {
        let params = vec![("application_id", self.application_id.map(|id| id.to_string()))];
        template::list::<Origin>(ctx, &SPEC, params, &self.list)
    }
}
