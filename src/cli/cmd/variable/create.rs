use clap::Parser;
use snafu::ResultExt;
use std::path::{Path, PathBuf};

use super::{Cmd, Context};
use crate::cli::spec::{CommandSpec, FieldKind, FieldSpec, Operation, PathParams, Verb};
use crate::cli::template::{self, Error, RequestInput, ValidationSnafu};
use crate::http::payload::{Variable, VariableRequest};

static SPEC: CommandSpec = CommandSpec {
    resource: "variable",
    label: "Variable",
    id_label: "UUID",
    operation: Operation::Create,
    verb: Verb::Post,
    path: "variables",
    fields: &[
        FieldSpec::required("key", "key", FieldKind::Text),
        FieldSpec::required("value", "value", FieldKind::Text),
        FieldSpec::optional("secret", "secret", FieldKind::Bool),
    ],
};

/// Creates a new variable.
#[derive(Parser, Debug)]
pub struct Input {
    /// The name of the variable.
    #[arg(long)]
    pub key: Option<String>,

    #[arg(long)]
    pub value: Option<String>,

    /// Whether the value is hidden after creation: true or false.
    #[arg(long)]
    pub secret: Option<String>,

    /// Read the request from a json file, `-` reads stdin. All other
    /// flags are ignored then.
    #[arg(long = "in", value_name = "FILE")]
    pub input: Option<PathBuf>,
}

impl RequestInput for Input {
    type Request = VariableRequest;
    type Response = Variable;

    fn spec(&self) -> &'static CommandSpec {
        &SPEC
    }

    fn document(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    fn path_params(&self) -> PathParams {
        Vec::new()
    }

    fn build(&self) -> Result<VariableRequest, Error> {
        Ok(VariableRequest {
            variable_id: None,
            key: self.key.clone(),
            value: self.value.clone(),
            secret: SPEC
                .boolean("secret", self.secret.as_deref())
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
    fn unit_create_variable() {
        let (_, req) = prepare(&parse(&["--key", "A", "--value", "", "--secret", "true"])).unwrap();
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"key": "A", "value": "", "secret": true})
        );
    }

    #[test]
    fn unit_create_needs_value() {
        let err = prepare(&parse(&["--key", "A"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequired);
        assert_eq!(err.to_string(), "required flag(s) \"value\" not set");
    }
}
