use clap::Parser;
use std::path::{Path, PathBuf};

use super::{body_fields, Cmd, Context, OriginFlags};
use crate::cli::spec::{CommandSpec, FieldSpec, Operation, PathParams, Verb};
use crate::cli::template::{self, Error, RequestInput};
use crate::http::payload::{Origin, OriginRequest};

const fn fields() -> [FieldSpec; 12] {
    let b = body_fields(false);
    [
        FieldSpec::path("application_id", "application-id"),
        FieldSpec::path("origin_key", "origin-key"),
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

static FIELDS: [FieldSpec; 12] = fields();

static SPEC: CommandSpec = CommandSpec {
    resource: "origin",
    label: "Origin",
    id_label: "key",
    operation: Operation::Update,
    verb: Verb::Patch,
    path: "edge_applications/{application_id}/origins/{origin_key}",
    fields: &FIELDS,
};

/// Updates an origin.
///
/// The edge application id and the origin key must be given together.
/// Only the given fields are changed.
#[derive(Parser, Debug)]
pub struct Input {
    /// The id of the edge application the origin belongs to.
    #[arg(long)]
    pub application_id: Option<i64>,

    /// The key of the origin to update.
    #[arg(long)]
    pub origin_key: Option<String>,

    #[command(flatten)]
    pub origin: OriginFlags,

    /// Read the request from a json file, `-` reads stdin. All other
    /// flags are ignored then, the identifiers may be given in the
    /// document.
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
        vec![
            ("application_id", self.application_id.map(|id| id.to_string())),
            ("origin_key", self.origin_key.clone()),
        ]
    }

    fn build(&self) -> Result<OriginRequest, Error> {
        let mut req = self.origin.to_request(&SPEC)?;
        req.application_id = self.application_id;
        req.origin_key = self.origin_key.clone();
        Ok(req)
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
        Input::try_parse_from(std::iter::once("update").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn unit_update_is_partial() {
        let input = parse(&[
            "--application-id",
            "1673",
            "--origin-key",
            "0a1b",
            "--origin-path",
            "/v2",
        ]);
        let (path, req) = prepare(&input).unwrap();
        assert_eq!(path, "edge_applications/1673/origins/0a1b");
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({"origin_path": "/v2"}));
    }

    #[test]
    fn unit_update_needs_both_identifiers() {
        let err = prepare(&parse(&["--origin-key", "0a1b", "--name", "x"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MandatoryFlags);
        assert_eq!(
            err.to_string(),
            "Required flags are missing: --application-id. You must provide --application-id and --origin-key together"
        );
    }

    #[test]
    fn unit_update_checks_policy() {
        let err = prepare(&parse(&[
            "--application-id",
            "1",
            "--origin-key",
            "k",
            "--origin-protocol-policy",
            "ftp",
        ]))
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidChoice);
    }
}
