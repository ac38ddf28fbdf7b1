//! Defines human readable table output for various types.

use crate::cli::sink::{Describe, Field, Listing, Single, Sink};
use crate::http::payload::BuildInfo;
use prettytable::format::{FormatBuilder, LinePosition, LineSeparator};
use prettytable::{cell, row, Table};

/// A trait to format a data structure into a [`prettytable::Table`].
pub trait AsTable {
    fn to_table(&self) -> Table;
}

/// Creates a new table with some default settings.
pub fn mk_table() -> Table {
    let mut table = Table::new();

    table.set_format(
        FormatBuilder::new()
            .column_separator('│')
            .borders('│')
            .separators(&[LinePosition::Top], LineSeparator::new('─', '┬', '┌', '┐'))
            .separators(
                &[LinePosition::Title],
                LineSeparator::new('─', '┼', '├', '┤'),
            )
            .separators(
                &[LinePosition::Bottom],
                LineSeparator::new('─', '┴', '└', '┘'),
            )
            .padding(1, 1)
            .build(),
    );
    table
}

impl<A: Describe> AsTable for Single<A> {
    fn to_table(&self) -> Table {
        let mut table = mk_table();
        table.set_titles(row![bFg => "Property", "Value"]);
        for field in self.0.fields() {
            table.add_row(row![field.label(), field.value()]);
        }
        table
    }
}

impl<A: Describe> AsTable for Listing<A> {
    fn to_table(&self) -> Table {
        let mut table = mk_table();
        if !self.verbose {
            table.set_titles(row![bFg => "ID", "Name"]);
            for item in &self.items {
                table.add_row(row![item.id(), item.name()]);
            }
            return table;
        }

        // Multi line values don't fit into a table row.
        let inline = |a: &A| -> Vec<Field> {
            a.fields()
                .into_iter()
                .filter(|f| matches!(f, Field::Line(..)))
                .collect()
        };
        let rows: Vec<Vec<Field>> = self.items.iter().map(inline).collect();
        // All labels in the order they are first seen; items without a
        // field get an empty cell.
        let mut columns: Vec<&'static str> = Vec::new();
        for label in rows.iter().flatten().map(Field::label) {
            if !columns.contains(&label) {
                columns.push(label);
            }
        }
        table.set_titles(columns.iter().collect());
        for fields in &rows {
            let cells: Vec<&str> = columns
                .iter()
                .map(|c| {
                    fields
                        .iter()
                        .find(|f| f.label() == *c)
                        .map(Field::value)
                        .unwrap_or("")
                })
                .collect();
            table.add_row(cells.iter().collect());
        }
        table
    }
}

impl AsTable for BuildInfo {
    fn to_table(&self) -> Table {
        let mut table = mk_table();
        table.add_row(row!["build date", self.build_date]);
        table.add_row(row!["version", self.build_version]);
        table.add_row(row!["commit", self.git_commit]);
        table.add_row(row!["rustc host", self.rustc_host_triple]);
        table.add_row(row!["rust version", self.rustc_version]);
        table.add_row(row!["target", self.cargo_target_triple]);
        table.add_row(row!["api url", self.api_url]);
        table
    }
}
impl Sink for BuildInfo {}
