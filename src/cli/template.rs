//! The generic executor for resource commands.
//!
//! A create or update command implements [`RequestInput`]: it names
//! its [`CommandSpec`], its request and response types, and knows how
//! to build the request from its flags. Everything else is done here
//! for all resources alike:
//!
//! 1. resolve the input mode (`--in` document or flags),
//! 2. check identifiers and render the request path,
//! 3. validate the request against its field table,
//! 4. send it and translate failures,
//! 5. print the result (terse, verbose or a machine format).
//!
//! Nothing is sent if any step before 4 fails.

use serde::{de::DeserializeOwned, Serialize};
use snafu::{ResultExt, Snafu};
use std::fmt::Debug;
use std::io::IsTerminal;
use std::path::Path;

use super::cmd::Context;
use super::input;
use super::opts::{Format, ListOpts};
use super::sink::{self, describe_lines, Describe, Listing, Single, Sink};
use super::spec::{self, CommandSpec, Location, Operation, PathParams, Source};
use crate::error::ErrorKind;
use crate::http;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("{}", source))]
    Input { source: input::Error },

    #[snafu(display("{}", source))]
    Validation { source: spec::Error },

    #[snafu(display("{}", source))]
    Http { source: http::Error },

    #[snafu(display("Unable to encode the request: {}", source))]
    Encode { source: serde_json::Error },

    #[snafu(display("Unable to read the {} interactively: {}", what, source))]
    Interact {
        source: dialoguer::Error,
        what: String,
    },

    #[snafu(display("Error writing data: {}", source))]
    WriteResult { source: sink::Error },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Input { source } => source.kind(),
            Error::Validation { source } => source.kind(),
            Error::Http { source } => source.kind(),
            Error::Encode { .. } => ErrorKind::UnmarshalReader,
            Error::Interact { .. } => ErrorKind::Interaction,
            Error::WriteResult { .. } => ErrorKind::Output,
        }
    }
}

/// A request body that may carry path identifiers.
pub trait Payload: Serialize + DeserializeOwned + Debug {
    /// Identifiers found in the request, by field name.
    fn path_params(&self) -> PathParams;

    /// Constraints that span several fields.
    fn check(&self, _spec: &CommandSpec) -> Result<(), spec::Error> {
        Ok(())
    }
}

/// A create or update command.
pub trait RequestInput {
    type Request: Payload;
    type Response: DeserializeOwned + Serialize + Describe;

    fn spec(&self) -> &'static CommandSpec;

    /// The `--in` argument, if given.
    fn document(&self) -> Option<&Path>;

    /// Identifiers given as flags, by field name.
    fn path_params(&self) -> PathParams;

    /// Builds the request from the flags. Only given flags end up in
    /// the request.
    fn build(&self) -> Result<Self::Request, Error>;
}

/// Resolves the input, validates and sends it. Returns the response
/// as received.
pub fn submit<I: RequestInput>(input: &I, ctx: &Context) -> Result<I::Response, Error> {
    let spec = input.spec();
    let (path, request) = prepare(input)?;
    log::debug!("{:?} {} at {}: {:?}", spec.operation, spec.resource, path, request);
    ctx.client
        .send(spec.verb.method(), &path, &request)
        .context(HttpSnafu)
}

/// Everything before the request is sent: the rendered path and the
/// validated request.
pub fn prepare<I: RequestInput>(input: &I) -> Result<(String, I::Request), Error> {
    let spec = input.spec();
    match input.document() {
        Some(file) => {
            log::info!("Reading the {} request from {}", spec.resource, file.display());
            let doc = input::read_document(file).context(InputSnafu)?;
            spec.validate(&doc, Source::Document)
                .context(ValidationSnafu)?;
            let request: I::Request = input::decode(doc, file).context(InputSnafu)?;
            let params = merge(request.path_params(), input.path_params());
            let path = spec
                .render_path(&params, Source::Document)
                .context(ValidationSnafu)?;
            request.check(spec).context(ValidationSnafu)?;
            Ok((path, request))
        }
        None => {
            log::debug!("Building the {} request from flags", spec.resource);
            let path = spec
                .render_path(&input.path_params(), Source::Flags)
                .context(ValidationSnafu)?;
            let request = input.build()?;
            let body = serde_json::to_value(&request).context(EncodeSnafu)?;
            spec.validate(&body, Source::Flags)
                .context(ValidationSnafu)?;
            request.check(spec).context(ValidationSnafu)?;
            Ok((path, request))
        }
    }
}

/// Identifiers from the document win over those given as flags.
fn merge(document: PathParams, flags: PathParams) -> PathParams {
    document
        .into_iter()
        .map(|(name, value)| {
            let fallback = || {
                flags
                    .iter()
                    .find(|(n, _)| *n == name)
                    .and_then(|(_, v)| v.clone())
            };
            (name, value.or_else(fallback))
        })
        .collect()
}

/// Runs a create or update command and prints its result.
pub fn apply<I: RequestInput>(input: &I, ctx: &Context) -> Result<(), Error> {
    let response = submit(input, ctx)?;
    write_resource(ctx, input.spec(), response)
}

/// Prints a single resource: a confirmation line, all of its fields
/// or a machine format.
pub fn write_resource<A>(ctx: &Context, spec: &CommandSpec, value: A) -> Result<(), Error>
where
    A: Describe + Serialize,
{
    let result = match ctx.format() {
        Format::Text if ctx.verbose() || spec.operation == Operation::Describe => {
            sink::write_line(describe_lines(&value))
        }
        Format::Text => sink::write_line(confirmation(spec, &value.id(), value.name())),
        fmt => Sink::write_value(fmt, &Single(value)),
    };
    result.context(WriteResultSnafu)
}

/// The terse output line of an operation.
pub fn confirmation(spec: &CommandSpec, id: &str, name: &str) -> String {
    match spec.operation {
        Operation::Create => format!(
            "Created {} with {} {} and name {}",
            spec.label, spec.id_label, id, name
        ),
        Operation::Update => format!("Updated {} with {} {}", spec.label, spec.id_label, id),
        Operation::Delete => format!("{} {} was successfully deleted", spec.label, id),
        Operation::List | Operation::Describe => format!("{} {}: {}", spec.label, id, name),
    }
}

/// Fetches and prints one resource.
pub fn describe<A>(ctx: &Context, spec: &CommandSpec, params: PathParams) -> Result<(), Error>
where
    A: DeserializeOwned + Serialize + Describe,
{
    let path = spec
        .render_path(&params, Source::Flags)
        .context(ValidationSnafu)?;
    let value: A = ctx.client.get(&path, &[]).context(HttpSnafu)?;
    write_resource(ctx, spec, value)
}

/// Fetches and prints a page of resources.
pub fn list<A>(ctx: &Context, spec: &CommandSpec, params: PathParams, opts: &ListOpts) -> Result<(), Error>
where
    A: DeserializeOwned + Serialize + Describe,
{
    let path = spec
        .render_path(&params, Source::Flags)
        .context(ValidationSnafu)?;
    let items: Vec<A> = ctx
        .client
        .get(&path, &opts.to_query())
        .context(HttpSnafu)?;
    log::debug!("Received {} {} entries", items.len(), spec.resource);
    let listing = Listing {
        items,
        verbose: ctx.verbose(),
    };
    Sink::write_value(ctx.format(), &listing).context(WriteResultSnafu)
}

/// Deletes a resource. Missing identifiers are asked for when stdin
/// and stderr are terminals.
pub fn delete(ctx: &Context, spec: &CommandSpec, params: PathParams) -> Result<(), Error> {
    let params = ask_missing(spec, params)?;
    let path = spec
        .render_path(&params, Source::Flags)
        .context(ValidationSnafu)?;
    ctx.client.delete(&path).context(HttpSnafu)?;

    // The last placeholder identifies the deleted item.
    let id = params
        .iter()
        .rev()
        .find_map(|(_, v)| v.clone())
        .unwrap_or_default();
    match ctx.format() {
        Format::Json => {
            let value = serde_json::json!({ "id": id, "deleted": true });
            sink::write_line(value).context(WriteResultSnafu)
        }
        _ => sink::write_line(confirmation(spec, &id, "")).context(WriteResultSnafu),
    }
}

fn ask_missing(spec: &CommandSpec, params: PathParams) -> Result<PathParams, Error> {
    // The prompt goes to stderr, the answer comes from stdin.
    if !(console::user_attended_stderr() && std::io::stdin().is_terminal()) {
        return Ok(params);
    }
    let last = params.len().saturating_sub(1);
    params
        .into_iter()
        .enumerate()
        .map(|(pos, (name, value))| match value {
            Some(v) if !v.is_empty() => Ok((name, Some(v))),
            _ => {
                let is_path = spec
                    .field(name)
                    .map(|f| f.location == Location::Path)
                    .unwrap_or(false);
                if !is_path {
                    return Ok((name, value));
                }
                // The item itself is named by its id label, parents by
                // their field name.
                let what = if pos == last {
                    spec.id_label.to_lowercase()
                } else {
                    name.replace('_', " ")
                };
                let answer: String = dialoguer::Input::new()
                    .with_prompt(format!(
                        "What is the {} of the {} you wish to delete?",
                        what, spec.label
                    ))
                    .interact_text()
                    .context(InteractSnafu { what })?;
                Ok((name, Some(answer.trim().to_string())))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::spec::{FieldKind, FieldSpec, Verb};

    static CREATE: CommandSpec = CommandSpec {
        resource: "domain",
        label: "Domain",
        id_label: "ID",
        operation: Operation::Create,
        verb: Verb::Post,
        path: "domains",
        fields: &[FieldSpec::required("name", "name", FieldKind::Text)],
    };

    static DELETE: CommandSpec = CommandSpec {
        resource: "domain",
        label: "Domain",
        id_label: "ID",
        operation: Operation::Delete,
        verb: Verb::Delete,
        path: "domains/{domain_id}",
        fields: &[FieldSpec::path("domain_id", "domain-id")],
    };

    #[test]
    fn unit_merge_prefers_document() {
        let doc = vec![("a", Some("1".to_string())), ("b", None)];
        let flags = vec![("a", Some("9".to_string())), ("b", Some("2".to_string()))];
        assert_eq!(
            merge(doc, flags),
            vec![("a", Some("1".to_string())), ("b", Some("2".to_string()))]
        );
    }

    #[test]
    fn unit_confirmations() {
        assert_eq!(
            confirmation(&CREATE, "12", "example.com"),
            "Created Domain with ID 12 and name example.com"
        );
        assert_eq!(
            confirmation(&DELETE, "1234", ""),
            "Domain 1234 was successfully deleted"
        );
    }
}
