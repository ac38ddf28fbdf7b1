//! A [`Sink`] is a common way to output datastructures for a command.
//!
//! A command may format its data based on the common `--format`
//! option. Data types that should be presented in this way can
//! implement the [`Sink`] trait so commands can easily output them.
//!
//! Api resources implement [`Describe`] instead. It lists their
//! fields in a fixed order, which is used for the verbose text output
//! and, via [`Single`] and [`Listing`], for tables.

use super::opts::Format;
use crate::cli::table::AsTable;
use serde::Serialize;
use snafu::Snafu;
use std::convert::From;
use std::fmt::Display;
use std::io::Write;

/// Defines different outputs for a data type given via a [`Format`]
/// argument.
///
/// The format `json` is handled via [serde](https://serde.rs), the
/// formats `tabular` and `csv` are handled by
/// [prettytable](https://crates.io/crates/prettytable-rs) (and the
/// csv crate). Plain `text` falls back to a table.
pub trait Sink
where
    Self: Serialize + AsTable,
{
    fn write_value(format: Format, value: &Self) -> Result<(), Error> {
        match format {
            Format::Json => {
                let mut out = std::io::stdout().lock();
                serde_json::to_writer(&mut out, &value)?;
                writeln!(out)?;
                Ok(())
            }
            Format::Csv => Self::write_csv(value),
            Format::Tabular | Format::Text => Self::write_tabular(value),
        }
    }

    fn write_tabular(value: &Self) -> Result<(), Error> {
        let table = value.to_table();
        table.printstd();
        Ok(())
    }

    fn write_csv(value: &Self) -> Result<(), Error> {
        let table = value.to_table();
        table.to_csv(std::io::stdout())?;
        Ok(())
    }
}

/// Possible errors when serializing data.
#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Error serializing to JSON"))]
    Json { source: serde_json::Error },

    #[snafu(display("Error serializing to CSV"))]
    Csv { source: csv::Error },

    #[snafu(display("Error writing to stdout: {}", source))]
    Io { source: std::io::Error },
}
impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv { source: e }
    }
}
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Json { source: e }
    }
}
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io { source: e }
    }
}

/// A labeled value of a resource.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// Printed as `Label: value`.
    Line(&'static str, String),
    /// Printed as `Label: ` with the value on the following line(s).
    Block(&'static str, String),
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Line(l, _) | Field::Block(l, _) => *l,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Field::Line(_, v) | Field::Block(_, v) => v,
        }
    }
}

/// Collects the fields of a resource. Absent values are skipped,
/// empty ones are kept.
#[derive(Debug, Default)]
pub struct Fields(Vec<Field>);

impl Fields {
    pub fn new() -> Fields {
        Fields(Vec::new())
    }

    pub fn line<V: Display>(mut self, label: &'static str, value: V) -> Fields {
        self.0.push(Field::Line(label, value.to_string()));
        self
    }

    pub fn opt<V: Display>(self, label: &'static str, value: Option<V>) -> Fields {
        match value {
            Some(v) => self.line(label, v),
            None => self,
        }
    }

    pub fn block<V: Display>(mut self, label: &'static str, value: Option<V>) -> Fields {
        if let Some(v) = value {
            self.0.push(Field::Block(label, v.to_string()));
        }
        self
    }

    pub fn build(self) -> Vec<Field> {
        self.0
    }
}

/// A resource as returned by the api.
pub trait Describe {
    /// The identifier used in paths and confirmations.
    fn id(&self) -> String;

    /// The human readable name.
    fn name(&self) -> &str;

    /// All populated fields, in presentation order.
    fn fields(&self) -> Vec<Field>;
}

/// Renders all fields, one per line.
pub fn describe_lines<A: Describe>(value: &A) -> String {
    value
        .fields()
        .iter()
        .map(|f| match f {
            Field::Line(label, v) => format!("{}: {}", label, v),
            Field::Block(label, v) => format!("{}: \n{}", label, v),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes a single line of text to stdout.
pub fn write_line<S: Display>(line: S) -> Result<(), Error> {
    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", line)?;
    Ok(())
}

/// One resource, for table and json output.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct Single<A>(pub A);

impl<A: Describe + Serialize> Sink for Single<A> {}

/// Many resources, for table and json output. In verbose mode tables
/// show every inline field.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct Listing<A> {
    pub items: Vec<A>,
    #[serde(skip)]
    pub verbose: bool,
}

impl<A: Describe + Serialize> Sink for Listing<A> {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sample;

    impl Describe for Sample {
        fn id(&self) -> String {
            "82706".into()
        }
        fn name(&self) -> &str {
            "/tmp/testando.txt"
        }
        fn fields(&self) -> Vec<Field> {
            Fields::new()
                .line("ID", self.id())
                .line("Name", self.name())
                .opt::<String>("Absent", None)
                .line("Type", "")
                .block("Content", Some("insert your text here"))
                .build()
        }
    }

    #[test]
    fn unit_describe_lines() {
        assert_eq!(
            describe_lines(&Sample),
            "ID: 82706\nName: /tmp/testando.txt\nType: \nContent: \ninsert your text here"
        );
    }
}
