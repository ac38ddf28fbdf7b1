use clap::Parser;

use super::{Cmd, Context};
use crate::cli::spec::{CommandSpec, FieldSpec, Operation, Verb};
use crate::cli::template::{self, Error};

static SPEC: CommandSpec = CommandSpec {
    resource: "variable",
    label: "Variable",
    id_label: "UUID",
    operation: Operation::Delete,
    verb: Verb::Delete,
    path: "variables/{variable_id}",
    fields: &[FieldSpec::path("variable_id", "variable-id")],
};

/// Deletes a variable.
///
/// If no uuid is given and a terminal is attached, it is asked for.
#[derive(Parser, Debug)]
pub struct Input {
    /// The uuid of the variable to delete.
    #[arg(long)]
    pub variable_id: Option<String>,
}

impl Cmd for Input {
    type CmdError = Error;

    fn exec(&self, ctx: &Context) -> Result<(), Error> {
        template::delete(ctx, &SPEC, vec![("variable_id", self.variable_id.clone())])
    }
}
