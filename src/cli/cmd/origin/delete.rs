use clap::Parser;

use super::{Cmd, Context};
use crate::cli::spec::{CommandSpec, FieldSpec, Operation, Verb};
use crate::cli::template::{self, Error};

static SPEC: CommandSpec = CommandSpec {
    resource: "origin",
    label: "Origin",
    id_label: "key",
    operation: Operation::Delete,
    verb: Verb::Delete,
    path: "edge_applications/{application_id}/origins/{origin_key}",
    fields: &[
        FieldSpec::path("application_id", "application-id"),
        FieldSpec::path("origin_key", "origin-key"),
    ],
};

/// Deletes an origin of an edge application.
#[derive(Parser, Debug)]
pub struct Input {
    /// The id of the edge application the origin belongs to.
    #[arg(long)]
    pub application_id: Option<i64>,

    /// The key of the origin to delete.
    #[arg(long)]
    pub origin_key: Option<String>,
}

impl Cmd for Input {
    type CmdError = Error;

    fn exec(&self, ctx: &Context) -> Result<(), Error> {
        let params = vec![
            ("application_id", self.application_id.map(|id| id.to_string())),
            ("origin_key", self.origin_key.clone()),
        ];
        template::delete(ctx, &SPEC, params)
    }
}
