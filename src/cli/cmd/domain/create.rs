use clap::Parser;
use std::path::{Path, PathBuf};

use super::{body_fields, Cmd, Context, DomainFlags};
use crate::cli::spec::{CommandSpec, FieldSpec, Operation, PathParams, Verb};
use crate::cli::template::{self, Error, RequestInput};
use crate::http::payload::{Domain, DomainRequest};

static FIELDS: [FieldSpec; 6] = body_fields(true);

static SPEC: CommandSpec = CommandSpec {
    resource: "domain",
    label: "Domain",
    id_label: "ID",
    operation: Operation::Create,
    verb: Verb::Post,
    path: "domains",
    fields: &FIELDS,
};

/// Creates a new domain for an edge application.
#[derive(Parser, Debug)]
pub struct Input {
    #[command(flatten)]
    pub domain: DomainFlags,

    /// Read the request from a json file, `-` reads stdin. All other
    /// flags are ignored then.
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
        Vec::new()
    }

    fn build(&self) -> Result<DomainRequest, Error> {
        self.domain.to_request(&SPEC)
    }
}

impl Cmd for Input {
    type CmdError = Error;

    fn exec(&self, ctx: &Context) -> Result<(), Error> {
        template::apply(self, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::template::prepare;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn parse(args: &[&str]) -> Input {
        Input::try_parse_from(std::iter::once("create").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn unit_create_domain() {
        let input = parse(&[
            "--name",
            "shop",
            "--application-id",
            "1666",
            "--cnames",
            "www.example.com,shop.example.com",
            "--active",
            "true",
        ]);
        let (path, req) = prepare(&input).unwrap();
        assert_eq!(path, "domains");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "name": "shop",
                "cnames": ["www.example.com", "shop.example.com"],
                "edge_application_id": 1666,
                "is_active": true
            })
        );
    }

    #[test]
    fn unit_create_needs_application() {
        let err = prepare(&parse(&["--name", "shop"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequired);
        assert_eq!(err.to_string(), "required flag(s) \"application-id\" not set");
    }
}
