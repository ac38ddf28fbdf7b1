use clap::Parser;

use super::{Cmd, Context};
use crate::cli::spec::{CommandSpec, FieldSpec, Operation, Verb};
use crate::cli::template::{self, Error};
use crate::http::payload::Domain;

static SPEC: CommandSpec = CommandSpec {
    resource: "domain",
    label: "Domain",
    id_label: "ID",
    operation: Operation::Describe,
    verb: Verb::Get,
    path: "domains/{domain_id}",
    fields: &[FieldSpec::path("domain_id", "domain-id")],
};

/// Shows all details of a domain.
#[derive(Parser, Debug)]
pub struct Input {
    #[arg(long)]
    pub domain_id: Option<i64>,
}

impl Cmd for Input {
    type CmdError = Error;

    fn exec(&self, ctx: &Context) -> Result<(), Error> {
        let params = vec![("domain_id", self.domain_id.map(|id| id.to_string()))];
        template::describe::<Domain>(ctx, &SPEC, params)
    }
}
