use clap::Parser;
use std::path::{Path, PathBuf};

use super::{body_fields, Cmd, Context, ResourceFlags};
use crate::cli::spec::{CommandSpec, FieldSpec, Operation, PathParams, Verb};
use crate::cli::template::{self, Error, RequestInput};
use crate::http::payload::{Resource, ResourceRequest};

const fn fields() -> [FieldSpec; 5] {
    let b = body_fields(true);
    [
        FieldSpec::positional("service_id", "SERVICE_ID"),
        b[0],
        b[1],
        b[2],
        b[3],
    ]
}

static FIELDS: [FieldSpec; 5] = fields();

static SPEC: CommandSpec = CommandSpec {
    resource: "resource",
    label: "Resource",
    id_label: "ID",
    operation: Operation::Create,
    verb: Verb::Post,
    path: "edge_services/{service_id}/resources",
    fields: &FIELDS,
};

/// Creates a new resource for an edge service.
///
/// The content is read from the file given via `--content-file`.
/// Shellscripts need a `--trigger`.
#[derive(Parser, Debug)]
pub struct Input {
    /// The id of the edge service.
    #[arg(value_name = "SERVICE_ID")]
    pub service_id: Option<i64>,

    #[command(flatten)]
    pub resource: ResourceFlags,

    /// Read the request from a json file, `-` reads stdin. All other
    /// flags are ignored then, the content is given inline in the
    /// document.
    #[arg(long = "in", value_name = "FILE")]
    pub input: Option<PathBuf>,
}

impl RequestInput for Input {
    type Request = ResourceRequest;
    type Response = Resource;

    fn spec(&self) -> &'static CommandSpec {
        &SPEC
    }

    fn document(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    fn path_params(&self) -> PathParams {
        vec![("service_id", self.service_id.map(|id| id.to_string()))]
    }

    fn build(&self) -> Result<ResourceRequest, Error> {
        let mut req = self.resource.to_request(&SPEC)?;
        req.service_id = self.service_id;
        Ok(req)
    }
}

impl Cmd for Input {
    type CmdError = Error;

    fn exec(&self, ctx: &Context) -> Result<(), Error> {
        template::apply(self, ctx)
    }
}
