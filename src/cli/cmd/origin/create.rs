use clap::Parser;
use std::path::{Path, PathBuf};

use super::{body_fields, Cmd, Context, OriginFlags};
use crate::cli::spec::{CommandSpec, FieldSpec, Operation, PathParams, Verb};
use crate::cli::template::{self, Error, RequestInput};
use crate::http::payload::{Origin, OriginRequest};

const fn fields() -> [FieldSpec; 11] {
    let b = body_fields(true);
    [
        FieldSpec::path("application_id", "application-id"),
        b[0],
        b[1],
        b[2],
        b[3],
        b[4],
        b[5],
        b[6],
        b[7],
        b[8],
        b[9],
    ]
}

static FIELDS: [FieldSpec; 11] = fields();

static SPEC: CommandSpec = CommandSpec {
    resource: "origin",
    label: "Origin",
    id_label: "key",
    operation: Operation::Create,
    verb: Verb::Post,
    path: "edge_applications/{application_id}/origins",
    fields: &FIELDS,
};

/// Creates a new origin for an edge application.
#[derive(Parser, Debug)]
pub struct Input {
    /// The id of the edge application the origin belongs to.
    #[arg(long)]
    pub application_id: Option<i64>,

    #[command(flatten)]
    pub origin: OriginFlags,

    /// Read the request from a json file, `-` reads stdin. All other
    /// flags are ignored then.
    #[arg(long = "in", value_name = "FILE")]
    pub input: Option<PathBuf>,
}

impl RequestInput for Input {
    type Request = OriginRequest;
    type Response = Origin;

    fn spec(&self) -> &'static CommandSpec {
        &SPEC
    }

    fn document(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    fn path_params(&self) -> PathParams {
        vec![("application_id", self.application_id.map(|id| id.to_string()))]
    }

    fn build(&self) -> Result<OriginRequest, Error> {
        let mut req = self.origin.to_request(&SPEC)?;
        req.application_id = self.application_id;
        Ok(req)
    }
}

impl Cmd for Input {
    type CmdError = Error;

    fn exec(&self, ctx: &Context) -> Result<(), Error> {
        template::apply(self, ctx)
    }
}
