use clap::Parser;
use std::path::{Path, PathBuf};

use super::{settings, Cmd, Context};
use crate::cli::spec::{CommandSpec, FieldKind, FieldSpec, Operation, PathParams, Verb};
use crate::cli::template::{self, Error, RequestInput, ValidationSnafu};
use crate::http::payload::{EdgeApplication, NewEdgeApplication};
use snafu::ResultExt;

static FIELDS: [FieldSpec; 10] = settings(FieldSpec::required("name", "name", FieldKind::Text));

static SPEC: CommandSpec = CommandSpec {
    resource: "edge-application",
    label: "Edge Application",
    id_label: "ID",
    operation: Operation::Create,
    verb: Verb::Post,
    path: "edge_applications",
    fields: &FIELDS,
};

/// Creates a new edge application.
///
/// Give the settings as flags or as a json document via `--in`.
#[derive(Parser, Debug)]
pub struct Input {
    /// The name of the edge application.
    #[arg(long)]
    pub name: Option<String>,

    /// The protocols to deliver content with: http, https or
    /// "http,https".
    #[arg(long)]
    pub delivery_protocol: Option<String>,

    /// The port used for http.
    #[arg(long)]
    pub http_port: Option<i64>,

    /// The port used for https.
    #[arg(long)]
    pub https_port: Option<i64>,

    /// The lowest TLS version accepted: tls_1_0, tls_1_1, tls_1_2 or
    /// tls_1_3.
    #[arg(long)]
    pub minimum_tls_version: Option<String>,

    /// The kind of the default origin: single_origin, load_balancer
    /// or live_ingest.
    #[arg(long)]
    pub origin_type: Option<String>,

    /// The address of the default origin.
    #[arg(long)]
    pub address: Option<String>,

    /// How to connect to the default origin: preserve, http or https.
    #[arg(long)]
    pub origin_protocol_policy: Option<String>,

    /// The host header sent to the default origin.
    #[arg(long)]
    pub host_header: Option<String>,

    /// Whether rule debugging is enabled: true or false.
    #[arg(long)]
    pub debug_rules: Option<String>,

    /// Read the request from a json file, `-` reads stdin. All other
    /// flags are ignored then.
    #[arg(long = "in", value_name = "FILE")]
    pub input: Option<PathBuf>,
}

impl RequestInput for Input {
    type Request = NewEdgeApplication;
    type Response = EdgeApplication;

    fn spec(&self) -> &'static CommandSpec {
        &SPEC
    }

    fn document(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    fn path_params(&self) -> PathParams {
        Vec::new()
    }

    fn build(&self) -> Result<NewEdgeApplication, Error> {
        Ok(NewEdgeApplication {
            name: self.name.clone(),
            delivery_protocol: SPEC
                .choice("delivery_protocol", self.delivery_protocol.as_deref())
                .context(ValidationSnafu)?,
            http_port: self.http_port,
            https_port: self.https_port,
            minimum_tls_version: SPEC
                .choice("minimum_tls_version", self.minimum_tls_version.as_deref())
                .context(ValidationSnafu)?,
            origin_type: SPEC
                .choice("origin_type", self.origin_type.as_deref())
                .context(ValidationSnafu)?,
            address: self.address.clone(),
            origin_protocol_policy: SPEC
                .choice("origin_protocol_policy", self.origin_protocol_policy.as_deref())
                .context(ValidationSnafu)?,
            host_header: self.host_header.clone(),
            debug_rules: SPEC
                .boolean("debug_rules", self.debug_rules.as_deref())
                .context(ValidationSnafu)?,
        })
    }
}

impl Cmd for Input {
    type CmdError = Error;

    fn exec(&self, ctx: &Context) -> Result<(), Error> {
        template::apply(self, ctx)
    }
}
