//! Edge applications: the top level entity that bundles the delivery
//! settings and the enabled modules of a site.

pub mod create;
pub mod delete;
pub mod describe;
pub mod list;
pub mod update;

use clap::{Parser, Subcommand};

use super::{Cmd, Context};
use crate::cli::sink::{Describe, Field, Fields};
use crate::cli::spec::{same, Choice, FieldKind, FieldSpec, PathParams};
use crate::cli::template::{Error, Payload};
use crate::http::payload::{EdgeApplication, EdgeApplicationRequest, NewEdgeApplication};

/// Manage edge applications.
#[derive(Parser, Debug)]
pub struct Input {
    #[command(subcommand)]
    pub subcmd: EdgeApplicationCommand,
}

#[derive(Subcommand, Debug)]
pub enum EdgeApplicationCommand {
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
            EdgeApplicationCommand::Create(input) => input.exec(ctx),
            EdgeApplicationCommand::Update(input) => input.exec(ctx),
            EdgeApplicationCommand::Delete(input) => input.exec(ctx),
            EdgeApplicationCommand::List(input) => input.exec(ctx),
            EdgeApplicationCommand::Describe(input) => input.exec(ctx),
        }
    }
}

const DELIVERY_PROTOCOLS: &[Choice] = &[same("http"), same("https"), same("http,https")];
const TLS_VERSIONS: &[Choice] = &[
    same("tls_1_0"),
    same("tls_1_1"),
    same("tls_1_2"),
    same("tls_1_3"),
];
const ORIGIN_TYPES: &[Choice] = &[
    same("single_origin"),
    same("load_balancer"),
    same("live_ingest"),
];
const PROTOCOL_POLICIES: &[Choice] = &[same("preserve"), same("http"), same("https")];

/// The fields shared by create and update; update additionally knows
/// the module switches.
const fn settings(name: FieldSpec) -> [FieldSpec; 10] {
    [
        name,
        FieldSpec::optional(
            "delivery_protocol",
            "delivery-protocol",
            FieldKind::Enum(DELIVERY_PROTOCOLS),
        ),
        FieldSpec::optional("http_port", "http-port", FieldKind::Integer),
        FieldSpec::optional("https_port", "https-port", FieldKind::Integer),
        FieldSpec::optional(
            "minimum_tls_version",
            "minimum-tls-version",
            FieldKind::Enum(TLS_VERSIONS),
        ),
        FieldSpec::optional("origin_type", "origin-type", FieldKind::Enum(ORIGIN_TYPES)),
        FieldSpec::optional("address", "address", FieldKind::Text),
        FieldSpec::optional(
            "origin_protocol_policy",
            "origin-protocol-policy",
            FieldKind::Enum(PROTOCOL_POLICIES),
        ),
        FieldSpec::optional("host_header", "host-header", FieldKind::Text),
        FieldSpec::optional("debug_rules", "debug-rules", FieldKind::Bool),
    ]
}

impl Payload for NewEdgeApplication {
    fn path_params(&self) -> PathParams {
        Vec::new()
    }
}

impl Payload for EdgeApplicationRequest {
    fn path_params(&self) -> PathParams {
        vec![("application_id", self.application_id.map(|id| id.to_string()))]
    }
}

impl Describe for EdgeApplication {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn fields(&self) -> Vec<Field> {
        Fields::new()
            .line("ID", self.id)
            .line("Name", &self.name)
            .opt("Active", self.active)
            .opt("Delivery protocol", self.delivery_protocol.as_ref())
            .opt("HTTP port", self.http_port.as_ref())
            .opt("HTTPS port", self.https_port.as_ref())
            .opt("Minimum TLS version", self.minimum_tls_version.as_ref())
            .opt("Debug rules", self.debug_rules)
            .opt("Application acceleration", self.application_acceleration)
            .opt("Caching", self.caching)
            .opt("Device detection", self.device_detection)
            .opt("Edge firewall", self.edge_firewall)
            .opt("Edge functions", self.edge_functions)
            .opt("Image optimization", self.image_optimization)
            .opt("L2 caching", self.l2_caching)
            .opt("Load balancer", self.load_balancer)
            .opt("Raw logs", self.raw_logs)
            .opt("Web application firewall", self.web_application_firewall)
            .build()
    }
}
