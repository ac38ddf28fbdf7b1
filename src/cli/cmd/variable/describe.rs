use clap::Parser;

use super::{Cmd, Context};
use crate::cli::spec::{CommandSpec, FieldSpec, Operation, Verb};
use crate::cli::template::{self, Error};
use crate::http::payload::Variable;

static SPEC: CommandSpec = CommandSpec {
    resource: "variable",
    label: "Variable",
    id_label: "UUID",
    operation: Operation::Describe,
    verb: Verb::Get,
    path: "variables/{variable_id}",
    fields: &[FieldSpec::path("variable_id", "variable-id")],
};

/// Shows all details of a variable.
#[derive(Parser, Debug)]
pub struct Input {
    #[arg(long)]
    pub variable_id: Option<String>,
}

impl Cmd for Input {
    type CmdError = Error;

    fn exec(&self, ctx: &Context) -> Result<(), Error> {
        template::describe::<Variable>(ctx, &SPEC, vec![("variable_id", self.variable_id.clone())])
    }
}
