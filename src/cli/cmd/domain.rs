//! Domains route requests for a host name to an edge application.

pub mod create;
pub mod delete;
pub mod describe;
pub mod list;
pub mod update;

use clap::{Args, Parser, Subcommand};
use snafu::ResultExt;

use super::{Cmd, Context};
use crate::cli::sink::{Describe, Field, Fields};
use crate::cli::spec::{CommandSpec, FieldKind, FieldSpec, PathParams};
use crate::cli::template::{Error, Payload, ValidationSnafu};
use crate::http::payload::{Domain, DomainRequest};

/// Manage domains.
#[derive(Parser, Debug)]
pub struct Input {
    #[command(subcommand)]
    pub subcmd: DomainCommand,
}

#[derive(Subcommand, Debug)]
pub enum DomainCommand {
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
            DomainCommand::Create(input) => input.exec(ctx),
            DomainCommand::Update(input) => input.exec(ctx),
            DomainCommand::Delete(input) => input.exec(ctx),
            DomainCommand::List(input) => input.exec(ctx),
            DomainCommand::Describe(input) => input.exec(ctx),
        }
    }
}

const fn body_fields(create: bool) -> [FieldSpec; 6] {
    let (name, application) = if create {
        (
            FieldSpec::required("name", "name", FieldKind::Text),
            FieldSpec::required("edge_application_id", "application-id", FieldKind::Integer),
        )
    } else {
        (
            FieldSpec::optional("name", "name", FieldKind::Text),
            FieldSpec::optional("edge_application_id", "application-id", FieldKind::Integer),
        )
    };
    [
        name,
        FieldSpec::optional("cnames", "cnames", FieldKind::List),
        FieldSpec::optional("cname_access_only", "cname-access-only", FieldKind::Bool),
        FieldSpec::optional(
            "digital_certificate_id",
            "digital-certificate-id",
            FieldKind::Integer,
        ),
        application,
        FieldSpec::optional("is_active", "active", FieldKind::Bool),
    ]
}

#[derive(Args, Debug)]
pub struct DomainFlags {
    /// The name of the domain.
    #[arg(long)]
    pub name: Option<String>,

    /// Alternative host names, separated by commas.
    #[arg(long, value_delimiter = ',')]
    pub cnames: Option<Vec<String>>,

    /// Whether the domain is reachable only via its cnames: true or
    /// false.
    #[arg(long)]
    pub cname_access_only: Option<String>,

    /// The id of the certificate to use for https.
    #[arg(long)]
    pub digital_certificate_id: Option<i64>,

    /// The id of the edge application that serves the domain.
    #[arg(long)]
    pub application_id: Option<i64>,

    /// Whether the domain is active: true or false.
    #[arg(long)]
    pub active: Option<String>,
}

impl DomainFlags {
    fn to_request(&self, spec: &CommandSpec) -> Result<DomainRequest, Error> {
        Ok(DomainRequest {
            domain_id: None,
            name: self.name.clone(),
            cnames: self.cnames.clone(),
            cname_access_only: spec
                .boolean("cname_access_only", self.cname_access_only.as_deref())
                .context(ValidationSnafu)?,
            digital_certificate_id: self.digital_certificate_id,
            edge_application_id: self.application_id,
            is_active: spec
                .boolean("is_active", self.active.as_deref())
                .context(ValidationSnafu)?,
        })
    }
}

impl Payload for DomainRequest {
    fn path_params(&self) -> PathParams {
        vec![("domain_id", self.domain_id.map(|id| id.to_string()))]
    }
}

impl Describe for Domain {
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
            .opt("Domain name", self.domain_name.as_ref())
            .line("Cnames", self.cnames.join(", "))
            .opt("Cname access only", self.cname_access_only)
            .opt("Digital certificate ID", self.digital_certificate_id)
            .opt("Edge application ID", self.edge_application_id)
            .opt("Active", self.is_active)
            .build()
    }
}
