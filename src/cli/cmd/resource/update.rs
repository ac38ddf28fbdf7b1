use clap::Parser;
use std::path::{Path, PathBuf};

use super::{body_fields, Cmd, Context, ResourceFlags};
use crate::cli::spec::{CommandSpec, FieldSpec, Operation, PathParams, Verb};
use crate::cli::template::{self, Error, RequestInput};
use crate::http::payload::{Resource, ResourceRequest};

const fn fields() -> [FieldSpec; 6] {
    let b = body_fields(false);
    [
        FieldSpec::positional("service_id", "SERVICE_ID"),
        FieldSpec::path("resource_id", "resource-id"),
        b[0],
        b[1],
        b[2],
        b[3],
    ]
}

static FIELDS: [FieldSpec; 6] = fields();

static SPEC: CommandSpec = CommandSpec {
    resource: "resource",
    label: "Resource",
    id_label: "ID",
    operation: Operation::Update,
    verb: Verb::Patch,
    path: "edge_services/{service_id}/resources/{resource_id}",
    fields: &FIELDS,
};

/// Updates a resource of an edge service. Only the given fields are
/// changed.
#[derive(Parser, Debug)]
pub struct Input {
    /// The id of the edge service.
    #[arg(value_name = "SERVICE_ID")]
    pub service_id: Option<i64>,

    /// The id of the resource to update.
    #[arg(long)]
    pub resource_id: Option<i64>,

    #[command(flatten)]
    pub resource: ResourceFlags,

    /// Read the request from a json file, `-` reads stdin. All other
    /// flags are ignored then, the identifiers may be given in the
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
        vec![
            ("service_id", self.service_id.map(|id| id.to_string())),
            ("resource_id", self.resource_id.map(|id| id.to_string())),
        ]
    }

    fn build(&self) -> Result<ResourceRequest, Error> {
        let mut req = self.resource.to_request(&SPEC)?;
        req.service_id = self.service_id;
        req.resource_id = self.resource_id;
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

    #[test]
    fn unit_update_trigger_only() {
        let input =
            Input::try_parse_from(["update", "1234", "--resource-id", "82706", "--trigger", "reload"])
                .unwrap();
        let (path, req) = prepare(&input).unwrap();
        assert_eq!(path, "edge_services/1234/resources/82706");
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({"trigger": "Reload"}));
    }

    #[test]
    fn unit_update_needs_both_ids() {
        let input = Input::try_parse_from(["update", "--resource-id", "82706", "--name", "a"]).unwrap();
        let err = prepare(&input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MandatoryFlags);
        assert_eq!(
            err.to_string(),
            "Required arguments are missing: SERVICE_ID. You must provide SERVICE_ID and --resource-id together"
        );
    }

    #[test]
    fn unit_update_to_shellscript_needs_trigger() {
        let input = Input::try_parse_from([
            "update",
            "1234",
            "--resource-id",
            "82706",
            "--content-type",
            "shellscript",
        ])
        .unwrap();
        let err = prepare(&input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidTrigger);

        let input = Input::try_parse_from([
            "update",
            "1234",
            "--resource-id",
            "82706",
            "--content-type",
            "shellscript",
            "--trigger",
            "install",
        ])
        .unwrap();
        let (_, req) = prepare(&input).unwrap();
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"trigger": "Install", "content_type": "Shellscript"})
        );
    }
}
