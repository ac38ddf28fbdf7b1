//! Resources of an edge service: files and scripts that are deployed
//! to the edge nodes.
//!
//! Scripts are run on install, reload or uninstall of the service, so
//! a resource of content type shellscript needs a trigger. Text files
//! don't.

pub mod create;
pub mod delete;
pub mod describe;
pub mod list;
pub mod update;

use clap::{Args, Parser, Subcommand};
use snafu::ResultExt;
use std::path::PathBuf;

use super::{Cmd, Context};
use crate::cli::input;
use crate::cli::sink::{Describe, Field, Fields};
use crate::cli::spec::{self, same, Choice, CommandSpec, FieldKind, FieldSpec, PathParams};
use crate::cli::template::{Error, InputSnafu, Payload, ValidationSnafu};
use crate::http::payload::{Resource, ResourceRequest};

/// Manage the resources of an edge service.
#[derive(Parser, Debug)]
pub struct Input {
    #[command(subcommand)]
    pub subcmd: ResourceCommand,
}

#[derive(Subcommand, Debug)]
pub enum ResourceCommand {
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
            ResourceCommand::Create(input) => input.exec(ctx),
            ResourceCommand::Update(input) => input.exec(ctx),
            ResourceCommand::Delete(input) => input.exec(ctx),
            ResourceCommand::List(input) => input.exec(ctx),
            ResourceCommand::Describe(input) => input.exec(ctx),
        }
    }
}

const SHELLSCRIPT: &str = "Shellscript";

const TRIGGERS: &[Choice] = &[same("Install"), same("Reload"), same("Uninstall")];
const CONTENT_TYPES: &[Choice] = &[
    Choice {
        flag: "shellscript",
        wire: SHELLSCRIPT,
    },
    Choice {
        flag: "text",
        wire: "Text",
    },
];

const fn body_fields(create: bool) -> [FieldSpec; 4] {
    if create {
        [
            FieldSpec::required("name", "name", FieldKind::Text),
            FieldSpec::optional("trigger", "trigger", FieldKind::Enum(TRIGGERS)),
            FieldSpec::required("content_type", "content-type", FieldKind::Enum(CONTENT_TYPES)),
            FieldSpec::required("content", "content-file", FieldKind::Text),
        ]
    } else {
        [
            FieldSpec::optional("name", "name", FieldKind::Text),
            FieldSpec::optional("trigger", "trigger", FieldKind::Enum(TRIGGERS)),
            FieldSpec::optional("content_type", "content-type", FieldKind::Enum(CONTENT_TYPES)),
            FieldSpec::optional("content", "content-file", FieldKind::Text),
        ]
    }
}

#[derive(Args, Debug)]
pub struct ResourceFlags {
    /// The path of the resource on the edge nodes, like
    /// `/tmp/setup.sh`.
    #[arg(long)]
    pub name: Option<String>,

    /// When a script is run: Install, Reload or Uninstall. Required
    /// for shellscripts.
    #[arg(long)]
    pub trigger: Option<String>,

    /// shellscript or text.
    #[arg(long)]
    pub content_type: Option<String>,

    /// The file holding the content of the resource.
    #[arg(long)]
    pub content_file: Option<PathBuf>,
}

impl ResourceFlags {
    fn to_request(&self, spec: &CommandSpec) -> Result<ResourceRequest, Error> {
        let content = match &self.content_file {
            Some(file) => Some(input::read_content(file).context(InputSnafu)?),
            None => None,
        };
        Ok(ResourceRequest {
            name: self.name.clone(),
            trigger: spec
                .choice("trigger", self.trigger.as_deref())
                .context(ValidationSnafu)?,
            content_type: spec
                .choice("content_type", self.content_type.as_deref())
                .context(ValidationSnafu)?,
            content,
            ..ResourceRequest::default()
        })
    }
}

impl Payload for ResourceRequest {
    fn path_params(&self) -> PathParams {
        vec![
            ("service_id", self.service_id.map(|id| id.to_string())),
            ("resource_id", self.resource_id.map(|id| id.to_string())),
        ]
    }

    /// A shellscript needs to know when it is run. This holds for
    /// updates as well: whoever sets the content type to shellscript
    /// sets the trigger along with it.
    fn check(&self, spec: &CommandSpec) -> Result<(), spec::Error> {
        let is_script = self.content_type.as_deref() == Some(SHELLSCRIPT);
        let has_trigger = self.trigger.as_deref().is_some_and(|t| !t.is_empty());
        if is_script && !has_trigger {
            return Err(spec::Error::InvalidTrigger {
                allowed: spec.wire_values("trigger").join(", "),
            });
        }
        Ok(())
    }
}

impl Describe for Resource {
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
            .opt("Type", self.trigger.as_ref())
            .opt("Content type", self.content_type.as_ref())
            .block("Content", self.content.as_ref())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::sink::describe_lines;

    #[test]
    fn unit_describe_text_resource() {
        let res: Resource = serde_json::from_str(
            r#"{"id": 82706, "name": "/tmp/testando.txt", "type": null, "content_type": "Text", "content": "insert your text here"}"#,
        )
        .unwrap();
        assert_eq!(
            describe_lines(&res),
            "ID: 82706\nName: /tmp/testando.txt\nContent type: Text\nContent: \ninsert your text here"
        );
    }
}
