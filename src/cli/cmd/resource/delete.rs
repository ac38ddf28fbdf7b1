use clap::Parser;

use super::{Cmd, Context};
use crate::cli::spec::{CommandSpec, FieldSpec, Operation, Verb};
use crate::cli::template::{self, Error};

static SPEC: CommandSpec = CommandSpec {
    resource: "resource",
    label: "Resource",
    id_label: "ID",
    operation: Operation::Delete,
    verb: Verb::Delete,
    path: "edge_services/{service_id}/resources/{resource_id}",
    fields: &[
        FieldSpec::positional("service_id", "SERVICE_ID"),
        FieldSpec::path("resource_id", "resource-id"),
    ],
};

/// Deletes a resource of an edge service.
#[derive(Parser, Debug)]
pub struct Input {
    /// The id of the edge service.
    #[arg(value_name = "SERVICE_ID")]
    pub service_id: Option<i64>,

    /// The id of the resource to delete.
    #[arg(long)]
    pub resource_id: Option<i64>,
}

impl Cmd for Input {
    type CmdError = Error;

    fn exec(&self, ctx: &Context) -> Result<(), Error> {
        let params = vec![
            ("service_id", self.service_id.map(|id| id.to_string())),
            ("resource_id", self.resource_id.map(|id| id.to_string())),
        ];
        template::delete(ctx, &SPEC, params)
    }
}
