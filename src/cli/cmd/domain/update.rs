use clap::Parser;
use std::path::{Path, PathBuf};

use super::{body_fields, Cmd, Context, DomainFlags};
use crate::cli::spec::{CommandSpec, FieldSpec, Operation, PathParams, Verb};
use crate::cli::template::{self, Error, RequestInput};
use crate::http::payload::{Domain, DomainRequest};

const fn fields() -> [FieldSpec; 7] {
    let b = body_fields(false);
    [
        FieldSpec::path("domain_id", "domain-id"),
        b[0],
        b[1],
        b[2],
        b[3],
        b[4],
        b[5],
    ]
}

static FIELDS: [FieldSpec; 7] = fields();

static SPEC: CommandSpec = CommandSpec {
    resource: "domain",
    label: "Domain",
    id_label: "ID",
    operation: Operation::Update,
    verb: Verb::Patch,
    path: "domains/{domain_id}",
    fields: &FIELDS,
};

/// Updates a domain. Only the given fields are changed.
#[derive(Parser, Debug)]
pub struct Input {
    /// The id of the domain to update.
    #[arg(long)]
    pub domain_id: Option<i64>,

    #[command(flatten)]
    pub domain: DomainFlags,

    /// Read the request from a json file, `-` reads stdin. All other
    /// flags are ignored then, the id may be given in the document.
    #[arg(long = "in", value_name = "FILE")]
    pub input: Option<PathBuf>,
}

impl RequestInput for Input {
    type Request = DomainRequest;
    type Response = Domain;

    fn spec(&self) -> &'static CommandSpec {
        &SPEC
    }

    fn document(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    fn path_params(&self) -> PathParams {
        vec![("domain_id", self.domain_id.map(|id| id.to_string()))]
    }

    fn build(&self) -> Result<DomainRequest, Error> {
        let mut req = self.domain.to_request(&SPEC)?;
        req.domain_id = self.domain_id;
        Ok(req)
    }
}

impl Cmd for Input {
    type CmdError = Error;

    fn exec(&self, ctx: &Context) -> Result<(), Error> {
        template::apply(self, ctx)
    }
}
