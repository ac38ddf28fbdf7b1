use clap::Parser;

use super::{Cmd, Context};
use crate::cli::spec::{CommandSpec, FieldSpec, Operation, Verb};
use crate::cli::template::{self, Error};
use crate::http::payload::EdgeApplication;

static SPEC: CommandSpec = CommandSpec {
    resource: "edge-application",
    label: "Edge Application",
    id_label: "ID",
    operation: Operation::Describe,
    verb: Verb::Get,
    path: "edge_applications/{application_id}",
    fields: &[FieldSpec::path("application_id", "application-id")],
};

/// Shows all details of an edge application.
#[derive(Parser, Debug)]
pub struct Input {
    /// The id of the edge application.
    #[arg(long)]
    pub application_id: Option<i64>,
}

impl Cmd for Input {
    type CmdError = Error;

    fn exec(&self, ctx: &Context) -> Result<(), Error> {
        let params = vec![("application_id", self.application_id.map(|id| id.to_string()))];
        template::describe::<EdgeApplication>(ctx, &SPEC, params)
    }
}
