use clap::Parser;

use super::{Cmd, Context};
use crate::cli::opts::ListOpts;
use crate::cli::spec::{CommandSpec, FieldSpec, Operation, Verb};
use crate::cli::template::{self, Error};
use crate::http::payload::Resource;

static SPEC: CommandSpec = CommandSpec {
    resource: "resource",
    label: "Resource",
    id_label: "ID",
    operation: Operation::List,
    verb: Verb::Get,
    path: "edge_services/{service_id}/resources",
    fields: &[FieldSpec::positional("service_id", "SERVICE_ID")],
};

/// Lists the resources of an edge service.
#[derive(Parser, Debug)]
pub struct Input {
    /// The id of the edge service.
    #[arg(value_name = "SERVICE_ID")]
    pub service_id: Option<i64>,

    #[command(flatten)]
    pub list: ListOpts,
}

impl Cmd for Input {
    type CmdError = Error;

    fn exec(&self, ctx: &Context) -> Result<(), Error> {
        let params = vec![("service_id", self.service_id.map(|id| id.to_string()))];
        template::list::<Resource>(ctx, &SPEC, params, &self.list)
    }
}
