use super::{LOG_TARGET, WriteMode};
use crate::model::{MissingReference, Record, Row};
use camino::{Utf8Path, Utf8PathBuf};
use core::borrow::Borrow;
use csv::{QuoteStyle, WriterBuilder};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};

/// Errors raised while exporting a table.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("unable to build the {kind} table for '{path}'")]
    Row {
        kind: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: MissingReference,
    },

    #[error("unable to open the {kind} table at '{path}'")]
    Open {
        kind: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to write the {kind} table to '{path}'")]
    Write {
        kind: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// A header plus the rows of one entity kind, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    kind: &'static str,
    header: &'static [&'static str],
    rows: Vec<Row>,
}

impl Table {
    #[must_use]
    pub const fn new(kind: &'static str, header: &'static [&'static str]) -> Self {
        Self {
            kind,
            header,
            rows: Vec::new(),
        }
    }

    /// Build the table of a record kind, one row per record.
    pub fn from_records<R, I>(records: I) -> Result<Self, MissingReference>
    where
        R: Record,
        I: IntoIterator,
        I::Item: Borrow<R>,
    {
        let mut table = Self::new(R::KIND, R::csv_header());
        for record in records {
            table.rows.push(record.borrow().as_row()?);
        }

        Ok(table)
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    #[must_use]
    pub const fn header(&self) -> &'static [&'static str] {
        self.header
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write the table as fully quoted CSV, optionally preceded by the header.
    ///
    /// Rows whose length differs from the previous record are rejected by the writer.
    pub fn write_to<W: Write>(&self, writer: W, include_header: bool) -> Result<(), csv::Error> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Always)
            .from_writer(writer);

        if include_header {
            writer.write_record(self.header)?;
        }

        for row in &self.rows {
            writer.write_record(row.iter().map(ToString::to_string))?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Write the table to `path`.
    ///
    /// In [`WriteMode::Append`] an existing file only receives the rows; otherwise the file
    /// is (re)created starting with the header. A failure part-way leaves the destination
    /// in an unspecified state.
    pub fn write(&self, path: &Utf8Path, mode: WriteMode) -> Result<(), ExportError> {
        let append = mode == WriteMode::Append && path.is_file();

        let file = if append {
            OpenOptions::new().append(true).open(path)
        } else {
            File::create(path)
        }
        .map_err(|source| ExportError::Open {
            kind: self.kind,
            path: path.to_owned(),
            source,
        })?;

        log::debug!(
            target: LOG_TARGET,
            "Writing {} {} row(s) to '{path}' ({})",
            self.rows.len(),
            self.kind,
            if append { "appending, no header" } else { "with header" }
        );

        self.write_to(BufWriter::new(file), !append).map_err(|source| ExportError::Write {
            kind: self.kind,
            path: path.to_owned(),
            source,
        })?;

        log::info!(target: LOG_TARGET, "Saved {} {} row(s) to '{path}'", self.rows.len(), self.kind);
        Ok(())
    }
}

/// Export a homogeneous collection of records to `destination`, returning the number of rows
/// written.
pub fn export<R, I>(records: I, destination: &Utf8Path, mode: WriteMode) -> Result<usize, ExportError>
where
    R: Record,
    I: IntoIterator,
    I::Item: Borrow<R>,
{
    let table = Table::from_records::<R, I>(records).map_err(|source| ExportError::Row {
        kind: R::KIND,
        path: destination.to_owned(),
        source,
    })?;

    table.write(destination, mode)?;
    Ok(table.len())
}
