use clap::Parser;
use snafu::ResultExt;
use std::path::{Path, PathBuf};

use super::{settings, Cmd, Context};
use crate::cli::spec::{CommandSpec, FieldKind, FieldSpec, Operation, PathParams, Verb};
use crate::cli::template::{self, Error, RequestInput, ValidationSnafu};
use crate::http::payload::{EdgeApplication, EdgeApplicationRequest};

const fn fields() -> [FieldSpec; 21] {
    let s = settings(FieldSpec::optional("name", "name", FieldKind::Text));
    [
        FieldSpec::path("application_id", "application-id"),
        s[0],
        s[1],
        s[2],
        s[3],
        s[4],
        s[5],
        s[6],
        s[7],
        s[8],
        s[9],
        FieldSpec::optional(
            "application_acceleration",
            "application-acceleration",
            FieldKind::Bool,
        ),
        FieldSpec::optional("caching", "caching", FieldKind::Bool),
        FieldSpec::optional("device_detection", "device-detection", FieldKind::Bool),
        FieldSpec::optional("edge_firewall", "edge-firewall", FieldKind::Bool),
        FieldSpec::optional("edge_functions", "edge-functions", FieldKind::Bool),
        FieldSpec::optional("image_optimization", "image-optimization", FieldKind::Bool),
        FieldSpec::optional("l2_caching", "l2-caching", FieldKind::Bool),
        FieldSpec::optional("load_balancer", "load-balancer", FieldKind::Bool),
        FieldSpec::optional("raw_logs", "raw-logs", FieldKind::Bool),
        FieldSpec::optional(
            "web_application_firewall",
            "webapp-firewall",
            FieldKind::Bool,
        ),
    ]
}

static FIELDS: [FieldSpec; 21] = fields();

static SPEC: CommandSpec = CommandSpec {
    resource: "edge-application",
    label: "Edge Application",
    id_label: "ID",
    operation: Operation::Update,
    verb: Verb::Patch,
    path: "edge_applications/{application_id}",
    fields: &FIELDS,
};

/// Updates an edge application.
///
/// Only the given fields are changed. Boolean flags take `true` or
/// `false`.
#[derive(Parser, Debug)]
pub struct Input {
    /// The id of the edge application to update.
    #[arg(long)]
    pub application_id: Option<i64>,

    /// The new name.
    #[arg(long)]
    pub name: Option<String>,

    /// The protocols to deliver content with: http, https or
    /// "http,https".
    #[arg(long)]
    pub delivery_protocol: Option<String>,

    #[arg(long)]
    pub http_port: Option<i64>,

    #[arg(long)]
    pub https_port: Option<i64>,

    /// tls_1_0, tls_1_1, tls_1_2 or tls_1_3.
    #[arg(long)]
    pub minimum_tls_version: Option<String>,

    /// single_origin, load_balancer or live_ingest.
    #[arg(long)]
    pub origin_type: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    /// preserve, http or https.
    #[arg(long)]
    pub origin_protocol_policy: Option<String>,

    #[arg(long)]
    pub host_header: Option<String>,

    #[arg(long)]
    pub debug_rules: Option<String>,

    #[arg(long)]
    pub application_acceleration: Option<String>,

    #[arg(long)]
    pub caching: Option<String>,

    #[arg(long)]
    pub device_detection: Option<String>,

    #[arg(long)]
    pub edge_firewall: Option<String>,

    #[arg(long)]
    pub edge_functions: Option<String>,

    #[arg(long)]
    pub image_optimization: Option<String>,

    #[arg(long)]
    pub l2_caching: Option<String>,

    #[arg(long)]
    pub load_balancer: Option<String>,

    #[arg(long)]
    pub raw_logs: Option<String>,

    #[arg(long)]
    pub webapp_firewall: Option<String>,

    /// Read the request from a json file, `-` reads stdin. All other
    /// flags are ignored then, the id may be given in the document.
    #[arg(long = "in", value_name = "FILE")]
    pub input: Option<PathBuf>,
}

impl Input {
    fn flag(&self, name: &'static str, value: &Option<String>) -> Result<Option<bool>, Error> {
        SPEC.boolean(name, value.as_deref()).context(ValidationSnafu)
    }

    fn choice(&self, name: &'static str, value: &Option<String>) -> Result<Option<String>, Error> {
        SPEC.choice(name, value.as_deref()).context(ValidationSnafu)
    }
}

impl RequestInput for Input {
    type Request = EdgeApplicationRequest;
    type Response = EdgeApplication;

    fn spec(&self) -> &'static CommandSpec {
        &SPEC
    }

    fn document(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    fn path_params(&self) -> PathParams {
        vec![("application_id", self.application_id.map(|id| id.to_string()))]
    }

    fn build(&self) -> Result<EdgeApplicationRequest, Error> {
        Ok(EdgeApplicationRequest {
            application_id: self.application_id,
            name: self.name.clone(),
            delivery_protocol: self.choice("delivery_protocol", &self.delivery_protocol)?,
            http_port: self.http_port,
            https_port: self.https_port,
            minimum_tls_version: self.choice("minimum_tls_version", &self.minimum_tls_version)?,
            origin_type: self.choice("origin_type", &self.origin_type)?,
            address: self.address.clone(),
            origin_protocol_policy: self
                .choice("origin_protocol_policy", &self.origin_protocol_policy)?,
            host_header: self.host_header.clone(),
            debug_rules: self.flag("debug_rules", &self.debug_rules)?,
            application_acceleration: self
                .flag("application_acceleration", &self.application_acceleration)?,
            caching: self.flag("caching", &self.caching)?,
            device_detection: self.flag("device_detection", &self.device_detection)?,
            edge_firewall: self.flag("edge_firewall", &self.edge_firewall)?,
            edge_functions: self.flag("edge_functions", &self.edge_functions)?,
            image_optimization: self.flag("image_optimization", &self.image_optimization)?,
            l2_caching: self.flag("l2_caching", &self.l2_caching)?,
            load_balancer: self.flag("load_balancer", &self.load_balancer)?,
            raw_logs: self.flag("raw_logs", &self.raw_logs)?,
            web_application_firewall: self
                .flag("web_application_firewall", &self.webapp_firewall)?,
        })
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
    fn unit_update_sends_only_changed_fields() {
        let input = parse(&["--application-id", "1666", "--caching", "true", "--webapp-firewall", "false"]);
        let (path, req) = prepare(&input).unwrap();
        assert_eq!(path, "edge_applications/1666");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"caching": true, "web_application_firewall": false})
        );
    }

    #[test]
    fn unit_update_rejects_bad_boolean() {
        let err = prepare(&parse(&["--application-id", "1", "--raw-logs", "yes"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBoolean);
        assert_eq!(
            err.to_string(),
            "Invalid --raw-logs flag provided: \"yes\". It must have 'true' or 'false' values"
        );
    }

    #[test]
    fn unit_update_needs_id_and_a_field() {
        let err = prepare(&parse(&["--name", "x"])).unwrap_err();
        assert_eq!(err.to_string(), "required flag(s) \"application-id\" not set");

        let err = prepare(&parse(&["--application-id", "1"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoFieldInformed);
    }

    #[test]
    fn unit_update_sends_empty_values() {
        let (_, req) = prepare(&parse(&["--application-id", "1", "--host-header", ""])).unwrap();
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({"host_header": ""}));
    }
}
