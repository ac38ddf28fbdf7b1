use clap::Parser;

use super::{Cmd, Context};
use crate::cli::spec::{CommandSpec, FieldSpec, Operation, Verb};
use crate::cli::template::{self, Error};
use crate::http::payload::Origin;

static SPEC: CommandSpec = CommandSpec {
    resource: "origin",
    label: "Origin",
    id_label: "key",
    operation: Operation::Describe,
    verb: Verb::Get,
    path: "edge_applications/{application_id}/origins/{origin_key}",
    fields: &[
        FieldSpec::path("application_id", "application-id"),
        FieldSpec::path("origin_key", "origin-key"),
    ],
};

/// Shows all details of an origin.
#[derive(Parser, Debug)]
pub struct Input {
    #[arg(long)]
    pub application_id: Option<i64>,

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
        template::describe::<Origin>(ctx, &SPEC, params)
    }
}
