//! Declarative descriptions of resource operations.
//!
//! Each subcommand that talks to the api owns a static
//! [`CommandSpec`]: the resource, the http verb, the path template and
//! a table of fields. The generic executor in
//! [`super::template`] uses it to render the request path and to
//! validate a request before anything is sent. Both input modes
//! (flags and documents) go through the same checks; the [`Source`]
//! only changes how offending inputs are named in messages.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Method;
use serde_json::Value;
use snafu::Snafu;

use crate::error::ErrorKind;

/// Characters that are kept as is in a path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Values for the placeholders of a path template, by field name.
pub type PathParams = Vec<(&'static str, Option<String>)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Delete,
    List,
    Describe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Patch,
    Delete,
}

impl Verb {
    pub fn method(self) -> Method {
        match self {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Patch => Method::PATCH,
            Verb::Delete => Method::DELETE,
        }
    }
}

/// Where a field goes in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Path,
    Body,
}

/// One allowed value of an enumerated field: what the user types and
/// what is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub flag: &'static str,
    pub wire: &'static str,
}

/// A choice that is sent exactly as typed.
pub const fn same(value: &'static str) -> Choice {
    Choice {
        flag: value,
        wire: value,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Bool,
    List,
    Enum(&'static [Choice]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// The json name of the field.
    pub name: &'static str,
    /// The name of the command line flag, without dashes, or the value
    /// name of a positional argument.
    pub flag: &'static str,
    pub positional: bool,
    pub location: Location,
    /// Required when creating the resource.
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldSpec {
    /// A placeholder in the path template.
    pub const fn path(name: &'static str, flag: &'static str) -> FieldSpec {
        FieldSpec {
            name,
            flag,
            positional: false,
            location: Location::Path,
            required: true,
            kind: FieldKind::Text,
        }
    }

    /// A placeholder in the path template that is given as a
    /// positional argument, like `SERVICE_ID`.
    pub const fn positional(name: &'static str, value_name: &'static str) -> FieldSpec {
        FieldSpec {
            positional: true,
            ..FieldSpec::path(name, value_name)
        }
    }

    pub const fn optional(name: &'static str, flag: &'static str, kind: FieldKind) -> FieldSpec {
        FieldSpec {
            name,
            flag,
            positional: false,
            location: Location::Body,
            required: false,
            kind,
        }
    }

    pub const fn required(name: &'static str, flag: &'static str, kind: FieldKind) -> FieldSpec {
        FieldSpec {
            name,
            flag,
            positional: false,
            location: Location::Body,
            required: true,
            kind,
        }
    }

    fn choices(&self) -> &'static [Choice] {
        match self.kind {
            FieldKind::Enum(choices) => choices,
            _ => &[],
        }
    }
}

/// How the request was given; used to name inputs in messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Flags,
    Document,
}

impl Source {
    fn noun(self) -> &'static str {
        match self {
            Source::Flags => "flag",
            Source::Document => "field",
        }
    }

    /// `--origin-key` for flags, `origin_key` for documents.
    fn name(self, field: &FieldSpec) -> String {
        match self {
            Source::Flags if field.positional => field.flag.to_string(),
            Source::Flags => format!("--{}", field.flag),
            Source::Document => field.name.to_string(),
        }
    }

    fn quoted(self, field: &FieldSpec) -> String {
        match self {
            Source::Flags => format!("\"{}\"", field.flag),
            Source::Document => format!("\"{}\"", field.name),
        }
    }

    /// `--origin-type flag` or `"origin_type" field`.
    fn subject(self, field: &FieldSpec) -> String {
        match self {
            Source::Flags if field.positional => format!("{} argument", field.flag),
            Source::Flags => format!("--{} flag", field.flag),
            Source::Document => format!("\"{}\" field", field.name),
        }
    }
}

#[derive(Debug, Snafu, PartialEq)]
pub enum Error {
    #[snafu(display("required {}(s) {} not set", noun, names))]
    MissingRequired { noun: &'static str, names: String },

    #[snafu(display(
        "Required {}s are missing: {}. You must provide {} together",
        noun,
        missing,
        all
    ))]
    MandatoryFlags {
        noun: &'static str,
        missing: String,
        all: String,
    },

    #[snafu(display(
        "Inform at least one field to be updated. It is not possible to update a {} without specifying the fields that will be updated. Run 'edgectl {} update --help' to display more information and try again",
        label,
        command
    ))]
    NoFieldInformed {
        label: &'static str,
        command: &'static str,
    },

    #[snafu(display(
        "Invalid {} provided: {}. It must have 'true' or 'false' values",
        subject,
        value
    ))]
    InvalidBoolean { subject: String, value: String },

    #[snafu(display(
        "Invalid {} provided: {}. Allowed values are: {}",
        subject,
        value,
        allowed
    ))]
    InvalidChoice {
        subject: String,
        value: String,
        allowed: String,
    },

    #[snafu(display("Invalid {} provided: {}. Expected {}", subject, value, expected))]
    InvalidType {
        subject: String,
        value: String,
        expected: &'static str,
    },

    #[snafu(display(
        "Invalid --trigger flag provided. Resources with content type 'shellscript' need one of the triggers: {}",
        allowed
    ))]
    InvalidTrigger { allowed: String },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingRequired { .. } => ErrorKind::MissingRequired,
            Error::MandatoryFlags { .. } => ErrorKind::MandatoryFlags,
            Error::NoFieldInformed { .. } => ErrorKind::NoFieldInformed,
            Error::InvalidBoolean { .. } => ErrorKind::InvalidBoolean,
            Error::InvalidChoice { .. } => ErrorKind::InvalidChoice,
            Error::InvalidType { .. } => ErrorKind::InvalidType,
            Error::InvalidTrigger { .. } => ErrorKind::InvalidTrigger,
        }
    }
}

/// Describes one operation on one resource.
#[derive(Debug)]
pub struct CommandSpec {
    /// The subcommand group, like `origin`.
    pub resource: &'static str,
    /// How the resource is named in messages, like `Origin`.
    pub label: &'static str,
    /// How the identifier is named in messages: `ID`, `key`, ...
    pub id_label: &'static str,
    pub operation: Operation,
    pub verb: Verb,
    /// Relative to the api url, with `{field}` placeholders.
    pub path: &'static str,
    pub fields: &'static [FieldSpec],
}

impl CommandSpec {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn path_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.location == Location::Path)
    }

    fn body_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.location == Location::Body)
    }

    /// The field for `name`, or an ad-hoc text field if the table
    /// does not know it.
    fn field_or_text(&self, name: &'static str) -> FieldSpec {
        self.field(name)
            .copied()
            .unwrap_or_else(|| FieldSpec::optional(name, name, FieldKind::Text))
    }

    /// Parses the value of a boolean flag, if it was given.
    pub fn boolean(&self, name: &'static str, value: Option<&str>) -> Result<Option<bool>, Error> {
        value
            .map(|v| match v.trim() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(Error::InvalidBoolean {
                    subject: Source::Flags.subject(&self.field_or_text(name)),
                    value: format!("{:?}", v),
                }),
            })
            .transpose()
    }

    /// Maps the value of an enumerated flag to its wire value, if it
    /// was given. Matching ignores ascii case.
    pub fn choice(&self, name: &'static str, value: Option<&str>) -> Result<Option<String>, Error> {
        let field = self.field_or_text(name);
        let choices = field.choices();
        value
            .map(|v| {
                choices
                    .iter()
                    .find(|c| c.flag.eq_ignore_ascii_case(v) || c.wire.eq_ignore_ascii_case(v))
                    .map(|c| c.wire.to_string())
                    .ok_or_else(|| Error::InvalidChoice {
                        subject: Source::Flags.subject(&field),
                        value: format!("{:?}", v),
                        allowed: allowed(choices, |c| c.flag),
                    })
            })
            .transpose()
    }

    /// The allowed wire values of an enumerated field.
    pub fn wire_values(&self, name: &str) -> Vec<&'static str> {
        self.field(name)
            .map(|f| f.choices().iter().map(|c| c.wire).collect())
            .unwrap_or_default()
    }

    /// Substitutes the path placeholders.
    ///
    /// All path fields are mandatory. If more than one exists, they
    /// must be given together and a single error names all of them.
    pub fn render_path(&self, params: &[(&str, Option<String>)], source: Source) -> Result<String, Error> {
        let lookup = |name: &str| {
            params
                .iter()
                .find(|(n, _)| *n == name)
                .and_then(|(_, v)| v.as_deref())
                .filter(|v| !v.is_empty())
        };

        let fields: Vec<&FieldSpec> = self.path_fields().collect();
        let missing: Vec<&FieldSpec> = fields
            .iter()
            .copied()
            .filter(|f| lookup(f.name).is_none())
            .collect();

        if !missing.is_empty() {
            // Positional identifiers are not flags.
            let noun = match source {
                Source::Flags if fields.iter().any(|f| f.positional) => "argument",
                _ => source.noun(),
            };
            return Err(if fields.len() > 1 {
                Error::MandatoryFlags {
                    noun,
                    missing: join(&missing, |f| source.name(f), ", "),
                    all: join(&fields, |f| source.name(f), " and "),
                }
            } else {
                Error::MissingRequired {
                    noun,
                    names: join(&missing, |f| source.quoted(f), ", "),
                }
            });
        }

        let mut path = self.path.to_string();
        for field in fields {
            let value = lookup(field.name).unwrap_or_default();
            let encoded = utf8_percent_encode(value, PATH_SEGMENT).to_string();
            path = path.replace(&format!("{{{}}}", field.name), &encoded);
        }
        Ok(path)
    }

    /// Checks a serialized request body against the field table.
    ///
    /// On create, all required fields must be present. On update, at
    /// least one field must be present. Present values must have the
    /// type of their field; enumerations must hold a wire value.
    pub fn validate(&self, body: &Value, source: Source) -> Result<(), Error> {
        let present = |f: &FieldSpec| body.get(f.name).filter(|v| !v.is_null());

        if self.operation == Operation::Create {
            let missing: Vec<&FieldSpec> = self
                .body_fields()
                .filter(|&f| f.required && present(f).is_none())
                .collect();
            if !missing.is_empty() {
                return Err(Error::MissingRequired {
                    noun: source.noun(),
                    names: join(&missing, |f| source.quoted(f), ", "),
                });
            }
        }

        if self.operation == Operation::Update && self.body_fields().all(|f| present(f).is_none()) {
            return Err(Error::NoFieldInformed {
                label: self.label,
                command: self.resource,
            });
        }

        for field in self.body_fields() {
            if let Some(value) = present(field) {
                check_kind(field, value, source)?;
            }
        }
        Ok(())
    }
}

fn check_kind(field: &FieldSpec, value: &Value, source: Source) -> Result<(), Error> {
    let type_error = |expected: &'static str| Error::InvalidType {
        subject: source.subject(field),
        value: value.to_string(),
        expected,
    };
    match field.kind {
        FieldKind::Text if !value.is_string() => Err(type_error("a string")),
        FieldKind::Integer if !(value.is_i64() || value.is_u64()) => Err(type_error("an integer")),
        FieldKind::List if !value.is_array() => Err(type_error("a list")),
        FieldKind::Bool if !value.is_boolean() => Err(Error::InvalidBoolean {
            subject: source.subject(field),
            value: value.to_string(),
        }),
        FieldKind::Enum(choices) => {
            let known = value
                .as_str()
                .map(|s| choices.iter().any(|c| c.wire == s))
                .unwrap_or(false);
            if known {
                Ok(())
            } else {
                Err(Error::InvalidChoice {
                    subject: source.subject(field),
                    value: value.to_string(),
                    allowed: match source {
                        Source::Flags => allowed(choices, |c| c.flag),
                        Source::Document => allowed(choices, |c| c.wire),
                    },
                })
            }
        }
        _ => Ok(()),
    }
}

fn allowed(choices: &[Choice], f: impl Fn(&Choice) -> &'static str) -> String {
    choices.iter().map(f).collect::<Vec<_>>().join(", ")
}

fn join(fields: &[&FieldSpec], f: impl Fn(&FieldSpec) -> String, sep: &str) -> String {
    fields.iter().map(|&field| f(field)).collect::<Vec<_>>().join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const POLICIES: &[Choice] = &[same("preserve"), same("http"), same("https")];
    const CONTENT_TYPES: &[Choice] = &[
        Choice {
            flag: "shellscript",
            wire: "Shellscript",
        },
        Choice {
            flag: "text",
            wire: "Text",
        },
    ];

    static CREATE: CommandSpec = CommandSpec {
        resource: "origin",
        label: "Origin",
        id_label: "key",
        operation: Operation::Create,
        verb: Verb::Post,
        path: "edge_applications/{application_id}/origins",
        fields: &[
            FieldSpec::path("application_id", "application-id"),
            FieldSpec::required("name", "name", FieldKind::Text),
            FieldSpec::required("content", "content-file", FieldKind::Text),
            FieldSpec::optional("content_type", "content-type", FieldKind::Enum(CONTENT_TYPES)),
            FieldSpec::optional("origin_protocol_policy", "origin-protocol-policy", FieldKind::Enum(POLICIES)),
            FieldSpec::optional("hmac_authentication", "hmac-authentication", FieldKind::Bool),
            FieldSpec::optional("http_port", "http-port", FieldKind::Integer),
        ],
    };

    static UPDATE: CommandSpec = CommandSpec {
        resource: "origin",
        label: "Origin",
        id_label: "key",
        operation: Operation::Update,
        verb: Verb::Patch,
        path: "edge_applications/{application_id}/origins/{origin_key}",
        fields: &[
            FieldSpec::path("application_id", "application-id"),
            FieldSpec::path("origin_key", "origin-key"),
            FieldSpec::optional("name", "name", FieldKind::Text),
        ],
    };

    #[test]
    fn unit_render_path_substitutes_and_encodes() {
        let params = vec![
            ("application_id", Some("12".to_string())),
            ("origin_key", Some("a b/c".to_string())),
        ];
        assert_eq!(
            UPDATE.render_path(&params, Source::Flags).unwrap(),
            "edge_applications/12/origins/a%20b%2Fc"
        );
    }

    #[test]
    fn unit_render_path_names_mandatory_pair() {
        let params = vec![("application_id", Some("12".to_string())), ("origin_key", None)];
        let err = UPDATE.render_path(&params, Source::Flags).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MandatoryFlags);
        assert_eq!(
            err.to_string(),
            "Required flags are missing: --origin-key. You must provide --application-id and --origin-key together"
        );
    }

    #[test]
    fn unit_render_path_single_field() {
        let err = CREATE
            .render_path(&[("application_id", Some(String::new()))], Source::Document)
            .unwrap_err();
        assert_eq!(err.to_string(), "required field(s) \"application_id\" not set");
    }

    #[test]
    fn unit_render_path_names_positional_argument() {
        static LIST: CommandSpec = CommandSpec {
            resource: "resource",
            label: "Resource",
            id_label: "ID",
            operation: Operation::List,
            verb: Verb::Get,
            path: "edge_services/{service_id}/resources",
            fields: &[FieldSpec::positional("service_id", "SERVICE_ID")],
        };
        let err = LIST
            .render_path(&[("service_id", None)], Source::Flags)
            .unwrap_err();
        assert_eq!(err.to_string(), "required argument(s) \"SERVICE_ID\" not set");

        let err = LIST
            .render_path(&[("service_id", None)], Source::Document)
            .unwrap_err();
        assert_eq!(err.to_string(), "required field(s) \"service_id\" not set");
    }

    #[test]
    fn unit_validate_missing_required_names_flags() {
        let err = CREATE
            .validate(&json!({"name": "a"}), Source::Flags)
            .unwrap_err();
        assert_eq!(err.to_string(), "required flag(s) \"content-file\" not set");
        assert_eq!(err.kind(), ErrorKind::MissingRequired);
    }

    #[test]
    fn unit_validate_document_types() {
        let doc = json!({"name": "a", "content": "x", "hmac_authentication": "yes"});
        let err = CREATE.validate(&doc, Source::Document).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBoolean);

        let doc = json!({"name": "a", "content": "x", "http_port": "80"});
        let err = CREATE.validate(&doc, Source::Document).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidType);

        let doc = json!({"name": "a", "content": "x", "content_type": "text"});
        let err = CREATE.validate(&doc, Source::Document).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid \"content_type\" field provided: \"text\". Allowed values are: Shellscript, Text"
        );

        let doc = json!({"name": "a", "content": "x", "content_type": "Text", "http_port": 80});
        assert!(CREATE.validate(&doc, Source::Document).is_ok());
    }

    #[test]
    fn unit_validate_update_needs_a_field() {
        let err = UPDATE.validate(&json!({}), Source::Flags).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoFieldInformed);
        assert!(UPDATE.validate(&json!({"name": ""}), Source::Flags).is_ok());
    }

    #[test]
    fn unit_boolean_flags() {
        assert_eq!(CREATE.boolean("hmac_authentication", Some("true")), Ok(Some(true)));
        assert_eq!(CREATE.boolean("hmac_authentication", None), Ok(None));
        let err = CREATE
            .boolean("hmac_authentication", Some("maybe"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid --hmac-authentication flag provided: \"maybe\". It must have 'true' or 'false' values"
        );
    }

    #[test]
    fn unit_choice_maps_to_wire_value() {
        assert_eq!(
            CREATE.choice("content_type", Some("text")),
            Ok(Some("Text".to_string()))
        );
        assert_eq!(
            CREATE.choice("content_type", Some("Shellscript")),
            Ok(Some("Shellscript".to_string()))
        );
        let err = CREATE.choice("origin_protocol_policy", Some("ftp")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidChoice);
        assert!(err.to_string().contains("preserve, http, https"));
    }
}
