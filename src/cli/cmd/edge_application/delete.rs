use clap::Parser;

use super::{Cmd, Context};
use crate::cli::spec::{CommandSpec, FieldSpec, Operation, Verb};
use crate::cli::template::{self, Error};

static SPEC: CommandSpec = CommandSpec {
    resource: "edge-application",
    label: "Edge Application",
    id_label: "ID",
    operation: Operation::Delete,
    verb: Verb::Delete,
    path: "edge_applications/{application_id}",
    fields: &[FieldSpec::path("application_id", "application-id")],
};

/// Deletes an edge application.
///
/// If no id is given and a terminal is attached, it is asked for.
#[derive(Parser, Debug)]
pub struct Input {
    /// The id of the edge application to delete.
    #[arg(long)]
    pub application_id: Option<i64>,
}

impl Cmd for Input {
    type CmdError = Error;

    fn exec(&self, ctx: &Context) -> Result<(), Error> {
        let params = vec![("application_id", self.application_id.map(|id| id.to_string()))];
        template::delete(ctx, &SPEC, params)
    }
}
