use clap::Parser;

use super::{Cmd, Context};
use crate::cli::spec::{CommandSpec, FieldSpec, Operation, Verb};
use crate::cli::template::{self, Error};

static SPEC: CommandSpec = CommandSpec {
    resource: "domain",
    label: "Domain",
    id_label: "ID",
    operation: Operation::Delete,
    verb: Verb::Delete,
    path: "domains/{domain_id}",
    fields: &[FieldSpec::path("domain_id", "domain-id")],
};

/// Deletes a domain.
///
/// If no id is given and a terminal is attached, it is asked for.
#[derive(Parser, Debug)]
pub struct Input {
    /// The id of the domain to delete.
    #[arg(long)]
    pub domain_id: Option<i64>,
}

impl Cmd for Input {
    type CmdError = Error;

    fn exec(&self, ctx: &Context) -> Result<(), Error> {
        let params = vec![("domain_id", self.domain_id.map(|id| id.to_string()))];
        template::delete(ctx, &SPEC, params)
    }
}
