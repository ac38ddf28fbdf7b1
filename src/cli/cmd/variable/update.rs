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
    operation: Operation::Update,
    verb: Verb::Patch,
    path: "variables/{variable_id}",
    fields: &[
        FieldSpec::path("variable_id", "variable-id"),
        FieldSpec::optional("key", "key", FieldKind::Text),
        FieldSpec::optional("value", "value", FieldKind::Text),
        FieldSpec::optional("secret", "secret", FieldKind::Bool),
    ],
};

/// Updates a variable. Only the given fields are changed.
#[derive(Parser, Debug)]
pub struct Input {
    /// The uuid of the variable to update.
    #[arg(long)]
    pub variable_id: Option<String>,

    #[arg(long)]
    pub key: Option<String>,

    #[arg(long)]
    pub value: Option<String>,

    /// true or false.
    #[arg(long)]
    pub secret: Option<String>,

    /// Read the request from a json file, `-` reads stdin. All other
    /// flags are ignored then, the uuid may be given in the document.
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
        vec![("variable_id", self.variable_id.clone())]
    }

    fn build(&self) -> Result<VariableRequest, Error> {
        Ok(VariableRequest {
            variable_id: self.variable_id.clone(),
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
    use serde_json::json;

    #[test]
    fn unit_update_variable() {
        let input = Input::try_parse_from([
            "update",
            "--variable-id",
            "32e8ffca-4021",
            "--value",
            "new",
        ])
        .unwrap();
        let (path, req) = prepare(&input).unwrap();
        assert_eq!(path, "variables/32e8ffca-4021");
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({"value": "new"}));
    }
}
