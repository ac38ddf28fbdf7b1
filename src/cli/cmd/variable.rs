//! Variables hold configuration and secrets for edge functions.

pub mod create;
pub mod delete;
pub mod describe;
pub mod list;
pub mod update;

use clap::{Parser, Subcommand};

use super::{Cmd, Context};
use crate::cli::sink::{Describe, Field, Fields};
use crate::cli::spec::PathParams;
use crate::cli::template::{Error, Payload};
use crate::http::payload::{Variable, VariableRequest};

/// Manage variables.
#[derive(Parser, Debug)]
pub struct Input {
    #[command(subcommand)]
    pub subcmd: VariableCommand,
}

#[derive(Subcommand, Debug)]
pub enum VariableCommand {
    Create(create::Input),
    Update(update::Input),
    Delete(delete::Input),
    List(list::Input),
    Describe(describe::Input),
}

impl Cmd for Input {
    type CmdError = Error;

    fn exec(&self, ctx: &Context) -> Result<(), Error> {
        match &self.subcmd {
            VariableCommand::Create(input) => input.exec(ctx),
            VariableCommand::Update(input) => input.exec(ctx),
            VariableCommand::Delete(input) => input.exec(ctx),
            VariableCommand::List(input) => input.exec(ctx),
            VariableCommand::Describe(input) => input.exec(ctx),
        }
    }
}

impl Payload for VariableRequest {
    fn path_params(&self) -> PathParams {
        vec![("variable_id", self.variable_id.clone())]
    }
}

impl Describe for Variable {
    fn id(&self) -> String {
        self.uuid.clone()
    }

    fn name(&self) -> &str {
        &self.key
    }

    fn fields(&self) -> Vec<Field> {
        Fields::new()
            .line("UUID", &self.uuid)
            .line("Key", &self.key)
            .line("Value", &self.value)
            .line("Secret", self.secret)
            .opt("Last editor", self.last_editor.as_ref())
            .opt("Created at", self.created_at.map(|t| t.to_rfc3339()))
            .opt("Updated at", self.updated_at.map(|t| t.to_rfc3339()))
            .build()
    }
}
