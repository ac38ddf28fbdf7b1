//! Origins of an edge application: where the edge fetches content
//! from.

pub mod create;
pub mod delete;
pub mod describe;
pub mod list;
pub mod update;

use clap::{Args, Parser, Subcommand};
use snafu::ResultExt;

use super::{Cmd, Context};
use crate::cli::sink::{Describe, Field, Fields};
use crate::cli::spec::{same, Choice, CommandSpec, FieldKind, FieldSpec, PathParams};
use crate::cli::template::{Error, Payload, ValidationSnafu};
use crate::http::payload::{Origin, OriginAddress, OriginRequest};

/// Manage the origins of an edge application.
#[derive(Parser, Debug)]
pub struct Input {
    #[command(subcommand)]
    pub subcmd: OriginCommand,
}

#[derive(Subcommand, Debug)]
pub enum OriginCommand {
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
            OriginCommand::Create(input) => input.exec(ctx),
            OriginCommand::Update(input) => input.exec(ctx),
            OriginCommand::Delete(input) => input.exec(ctx),
            OriginCommand::List(input) => input.exec(ctx),
            OriginCommand::Describe(input) => input.exec(ctx),
        }
    }
}

const ORIGIN_TYPES: &[Choice] = &[same("single_origin"), same("load_balancer")];
const PROTOCOL_POLICIES: &[Choice] = &[same("preserve"), same("http"), same("https")];

const fn field(name: &'static str, flag: &'static str, kind: FieldKind, required: bool) -> FieldSpec {
    if required {
        FieldSpec::required(name, flag, kind)
    } else {
        FieldSpec::optional(name, flag, kind)
    }
}

/// The body fields. On create, the name, the addresses and the host
/// header are required.
const fn body_fields(create: bool) -> [FieldSpec; 10] {
    [
        field("name", "name", FieldKind::Text, create),
        field("addresses", "addresses", FieldKind::List, create),
        field("host_header", "host-header", FieldKind::Text, create),
        FieldSpec::optional("origin_type", "origin-type", FieldKind::Enum(ORIGIN_TYPES)),
        FieldSpec::optional(
            "origin_protocol_policy",
            "origin-protocol-policy",
            FieldKind::Enum(PROTOCOL_POLICIES),
        ),
        FieldSpec::optional("origin_path", "origin-path", FieldKind::Text),
        FieldSpec::optional("hmac_authentication", "hmac-authentication", FieldKind::Bool),
        FieldSpec::optional("hmac_region_name", "hmac-region-name", FieldKind::Text),
        FieldSpec::optional("hmac_access_key", "hmac-access-key", FieldKind::Text),
        FieldSpec::optional("hmac_secret_key", "hmac-secret-key", FieldKind::Text),
    ]
}

/// The flags for the origin's settings, shared by create and update.
#[derive(Args, Debug)]
pub struct OriginFlags {
    /// The name of the origin.
    #[arg(long)]
    pub name: Option<String>,

    /// The addresses of the origin, separated by commas. They are
    /// sent in the given order.
    #[arg(long, value_delimiter = ',')]
    pub addresses: Option<Vec<String>>,

    /// The host header sent to the origin.
    #[arg(long)]
    pub host_header: Option<String>,

    /// single_origin or load_balancer.
    #[arg(long)]
    pub origin_type: Option<String>,

    /// How to connect to the origin: preserve, http or https.
    #[arg(long)]
    pub origin_protocol_policy: Option<String>,

    /// A path prefix added to each request to the origin.
    #[arg(long)]
    pub origin_path: Option<String>,

    /// Whether requests to the origin are signed: true or false.
    #[arg(long)]
    pub hmac_authentication: Option<String>,

    #[arg(long)]
    pub hmac_region_name: Option<String>,

    #[arg(long)]
    pub hmac_access_key: Option<String>,

    #[arg(long)]
    pub hmac_secret_key: Option<String>,
}

impl OriginFlags {
    fn to_request(&self, spec: &CommandSpec) -> Result<OriginRequest, Error> {
        Ok(OriginRequest {
            name: self.name.clone(),
            addresses: self
                .addresses
                .as_ref()
                .map(|list| list.iter().map(OriginAddress::new).collect()),
            host_header: self.host_header.clone(),
            origin_type: spec
                .choice("origin_type", self.origin_type.as_deref())
                .context(ValidationSnafu)?,
            origin_protocol_policy: spec
                .choice("origin_protocol_policy", self.origin_protocol_policy.as_deref())
                .context(ValidationSnafu)?,
            origin_path: self.origin_path.clone(),
            hmac_authentication: spec
                .boolean("hmac_authentication", self.hmac_authentication.as_deref())
                .context(ValidationSnafu)?,
            hmac_region_name: self.hmac_region_name.clone(),
            hmac_access_key: self.hmac_access_key.clone(),
            hmac_secret_key: self.hmac_secret_key.clone(),
            ..OriginRequest::default()
        })
    }
}

impl Payload for OriginRequest {
    fn path_params(&self) -> PathParams {
        vec![
            ("application_id", self.application_id.map(|id| id.to_string())),
            ("origin_key", self.origin_key.clone()),
        ]
    }
}

impl Describe for Origin {
    fn id(&self) -> String {
        self.origin_key.clone()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn fields(&self) -> Vec<Field> {
        let addresses: Vec<&str> = self.addresses.iter().map(|a| a.address.as_str()).collect();
        Fields::new()
            .line("Origin key", &self.origin_key)
            .opt("Origin ID", self.origin_id)
            .line("Name", &self.name)
            .opt("Origin type", self.origin_type.as_ref())
            .line("Addresses", addresses.join(", "))
            .opt("Origin protocol policy", self.origin_protocol_policy.as_ref())
            .opt("Origin redirection", self.is_origin_redirection_enabled)
            .opt("Host header", self.host_header.as_ref())
            .opt("Method", self.method.as_ref())
            .opt("Origin path", self.origin_path.as_ref())
            .opt("Connection timeout", self.connection_timeout)
            .opt("Timeout between bytes", self.timeout_between_bytes)
            .opt("HMAC authentication", self.hmac_authentication)
            .opt("HMAC region name", self.hmac_region_name.as_ref())
            .opt("HMAC access key", self.hmac_access_key.as_ref())
            .opt("HMAC secret key", self.hmac_secret_key.as_ref())
            .build()
    }
}
