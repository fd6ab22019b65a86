//! Name-keyed CSV writing.
//!
//! Defines [`MapWriter`], which lays [`MappedRecord`]s back out as
//! positional CSV records in header order, and [`MapWriterBuilder`] for
//! configuring the output format.

use csv::{Writer, WriterBuilder};
use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::RowMapError;
use crate::record::MappedRecord;

/// CSV writer that accepts records keyed by column name.
///
/// The `MapWriter` writes the column names as a header row when it is
/// created and lays every [`MappedRecord`] back out in that column order,
/// so the map's own iteration order never leaks into the output.
///
/// # Features
///
/// - Writes a header row automatically on creation
/// - Orders fields by the header row
/// - Missing columns become empty fields; names outside the header row are
///   skipped
/// - Provides explicit flush control for data persistence
///
/// # CSV Format
///
/// Fields containing delimiters, double quotes, or newlines are
/// automatically quoted and escaped by the underlying csv crate.
///
/// # Example
///
/// ```no_run
/// use rowmap::{MapWriter, MappedRecord};
///
/// let mut writer = MapWriter::from_path(["id", "name"], "people.csv")?;
///
/// let mut record = MappedRecord::new();
/// record.insert("id".to_string(), "1".to_string());
/// record.insert("name".to_string(), "Alice".to_string());
///
/// writer.write(&record)?;
/// writer.flush()?;
/// # Ok::<(), rowmap::RowMapError>(())
/// ```
pub struct MapWriter<W: io::Write> {
    /// The underlying CSV writer.
    writer: Writer<W>,
    /// Ordered column names, already written as the header row.
    headers: Vec<String>,
}

impl<W: io::Write> MapWriter<W> {
    /// Creates a writer over any byte sink, writing the header row
    /// immediately.
    pub fn from_writer<I, S>(headers: I, wtr: W) -> Result<Self, RowMapError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MapWriterBuilder::new().from_writer(headers, wtr)
    }

    /// Ordered column names this writer lays records out by.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Writes one record in header order.
    ///
    /// A column name absent from `record` produces an empty field; names
    /// in `record` that are not part of the header row are skipped.
    pub fn write(&mut self, record: &MappedRecord) -> Result<(), RowMapError> {
        let fields = self
            .headers
            .iter()
            .map(|name| record.get(name).unwrap_or(""));
        self.writer.write_record(fields)?;
        Ok(())
    }

    /// Writes every record in order, stopping at the first failure.
    pub fn write_all<'a, I>(&mut self, records: I) -> Result<(), RowMapError>
    where
        I: IntoIterator<Item = &'a MappedRecord>,
    {
        for record in records {
            self.write(record)?;
        }
        Ok(())
    }

    /// Flushes pending writes to the underlying sink.
    pub fn flush(&mut self) -> Result<(), RowMapError> {
        self.writer.flush()?;
        Ok(())
    }
}

impl MapWriter<File> {
    /// Creates a writer for the file at `path`, writing the header row
    /// immediately. An existing file is truncated.
    pub fn from_path<P, I, S>(headers: I, path: P) -> Result<Self, RowMapError>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MapWriterBuilder::new().from_path(headers, path)
    }
}

/// Builder for configuring a [`MapWriter`] before opening the sink.
#[derive(Debug, Clone)]
pub struct MapWriterBuilder {
    delimiter: u8,
}

impl Default for MapWriterBuilder {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl MapWriterBuilder {
    /// Creates a builder with the default comma delimiter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field delimiter. Defaults to `,`.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builds a [`MapWriter`] over any byte sink, writing the header row
    /// immediately.
    pub fn from_writer<W, I, S>(&self, headers: I, wtr: W) -> Result<MapWriter<W>, RowMapError>
    where
        W: io::Write,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let writer = WriterBuilder::new().delimiter(self.delimiter).from_writer(wtr);
        Self::build(headers.into_iter().map(Into::into).collect(), writer)
    }

    /// Builds a [`MapWriter`] for the file at `path`, writing the header
    /// row immediately.
    pub fn from_path<P, I, S>(&self, headers: I, path: P) -> Result<MapWriter<File>, RowMapError>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let writer = WriterBuilder::new().delimiter(self.delimiter).from_path(path)?;
        Self::build(headers.into_iter().map(Into::into).collect(), writer)
    }

    /// Writes the header row and assembles the writer around it.
    fn build<W: io::Write>(
        headers: Vec<String>,
        mut writer: Writer<W>,
    ) -> Result<MapWriter<W>, RowMapError> {
        writer.write_record(&headers)?;
        Ok(MapWriter { writer, headers })
    }
}
