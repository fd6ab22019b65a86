//! Name-keyed CSV reading.
//!
//! Defines [`MapReader`], which wraps a positional CSV reader, takes the
//! first record as the header row, and yields every following record as a
//! [`MappedRecord`] keyed by column name. [`MapReaderBuilder`] configures
//! the parsing options of the underlying reader.

use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::RowMapError;
use crate::record::MappedRecord;

/// Builds the column lookup for an ordered sequence of header names.
///
/// Each name maps to its zero-based position in the sequence. When a name
/// occurs more than once, the position of its last occurrence wins and the
/// collision is logged as a warning. An empty sequence yields an empty map.
///
/// # Example
///
/// ```
/// let index = rowmap::header_index(&["id", "name", "city"]);
/// assert_eq!(index["name"], 1);
/// ```
#[must_use]
pub fn header_index<S: AsRef<str>>(headers: &[S]) -> HashMap<String, usize> {
    let mut index = HashMap::with_capacity(headers.len());
    for (position, name) in headers.iter().enumerate() {
        let name = name.as_ref();
        if let Some(previous) = index.insert(name.to_string(), position) {
            tracing::warn!(
                "Duplicate header name '{}': column {} shadows column {}",
                name,
                position,
                previous
            );
        }
    }
    index
}

/// CSV reader that yields records keyed by column name.
///
/// The `MapReader` reads the first record of the source as the header row
/// and translates every following positional record into a
/// [`MappedRecord`]. Field parsing itself (quoting, escaping, delimiters)
/// is left to the underlying `csv::Reader`.
///
/// # Features
///
/// - Reads the header row once at construction and keeps it for the
///   lifetime of the reader
/// - Validates the width of every record against the header row
/// - Implements `Iterator` for convenient sequential reading
///
/// # Example
///
/// ```
/// use rowmap::MapReader;
///
/// let data = "id,name\n1,Alice\n2,Bob\n";
/// let mut reader = MapReader::from_reader(data.as_bytes())?;
///
/// let record = reader.read_next().unwrap()?;
/// assert_eq!(record.get("name"), Some("Alice"));
/// # Ok::<(), rowmap::RowMapError>(())
/// ```
pub struct MapReader<R: io::Read> {
    /// The underlying CSV reader.
    reader: Reader<R>,
    /// Ordered column names taken from the header row.
    headers: Vec<String>,
    /// Column name to zero-based field position.
    index: HashMap<String, usize>,
    /// Current line number (1-indexed, accounts for header row).
    /// Used for providing descriptive error messages with line context.
    current_line: u64,
}

impl<R: io::Read> MapReader<R> {
    /// Creates a reader over any byte source, taking the first record as
    /// the header row.
    ///
    /// Fails with [`RowMapError::MissingHeader`] when the source holds no
    /// records at all.
    pub fn from_reader(rdr: R) -> Result<Self, RowMapError> {
        MapReaderBuilder::new().from_reader(rdr)
    }

    /// Ordered column names from the header row.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Mapping from column name to zero-based field position.
    ///
    /// When the header row repeats a name, the map holds the position of
    /// its last occurrence, so the map can be smaller than the header row.
    pub fn header_index_map(&self) -> &HashMap<String, usize> {
        &self.index
    }

    /// Translates one positional record into a name-keyed record.
    ///
    /// Every column name picks up the field at its header position. Fails
    /// with [`RowMapError::RowLengthMismatch`] when `record` carries fewer
    /// fields than the header row defines; fields beyond the header's
    /// width are ignored.
    pub fn map_record(&self, record: &StringRecord) -> Result<MappedRecord, RowMapError> {
        if record.len() < self.headers.len() {
            return Err(RowMapError::RowLengthMismatch {
                line: self.current_line,
                expected: self.headers.len(),
                found: record.len(),
            });
        }

        let mut mapped = MappedRecord::with_capacity(self.index.len());
        for (name, &position) in &self.index {
            // The width check above keeps every position in bounds
            mapped.insert(name.clone(), record[position].to_string());
        }
        Ok(mapped)
    }

    /// Reads the next record from the source, keyed by column name.
    ///
    /// Returns `None` once the source is exhausted. Parse errors from the
    /// underlying reader are passed through unchanged.
    pub fn read_next(&mut self) -> Option<Result<MappedRecord, RowMapError>> {
        let mut record = StringRecord::new();
        match self.reader.read_record(&mut record) {
            Ok(true) => {
                // Increment line counter for error reporting
                self.current_line += 1;
                Some(self.map_record(&record))
            }
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
        }
    }

    /// Reads and maps every remaining record of the source.
    ///
    /// Records come back in source order; a source holding only a header
    /// row yields an empty vec. The first parse or translation failure
    /// aborts the whole call with no partial result.
    pub fn read_all(&mut self) -> Result<Vec<MappedRecord>, RowMapError> {
        let mut records = Vec::new();
        while let Some(result) = self.read_next() {
            records.push(result?);
        }
        Ok(records)
    }
}

impl MapReader<File> {
    /// Creates a reader for the CSV file at `path`, taking its first
    /// record as the header row.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RowMapError> {
        MapReaderBuilder::new().from_path(path)
    }
}

impl<R: io::Read> Iterator for MapReader<R> {
    type Item = Result<MappedRecord, RowMapError>;

    /// Returns the next mapped record from the source.
    fn next(&mut self) -> Option<Self::Item> {
        self.read_next()
    }
}

/// Builder for configuring a [`MapReader`] before opening the source.
///
/// The parsing options mirror the ones of `csv::ReaderBuilder` and are
/// passed through to the underlying reader.
///
/// # Example
///
/// ```
/// use rowmap::MapReaderBuilder;
///
/// let data = "id;name\n1;Alice\n";
/// let mut reader = MapReaderBuilder::new()
///     .delimiter(b';')
///     .from_reader(data.as_bytes())?;
///
/// let record = reader.read_next().unwrap()?;
/// assert_eq!(record.get("name"), Some("Alice"));
/// # Ok::<(), rowmap::RowMapError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MapReaderBuilder {
    delimiter: u8,
    quote: u8,
    trim: bool,
    comment: Option<u8>,
    headers: Option<Vec<String>>,
}

impl Default for MapReaderBuilder {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            trim: false,
            comment: None,
            headers: None,
        }
    }
}

impl MapReaderBuilder {
    /// Creates a builder with the default options: comma delimiter,
    /// double-quote quoting, no trimming, no comment lines, and the header
    /// row read from the source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field delimiter. Defaults to `,`.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the quote character. Defaults to `"`.
    pub fn quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    /// When true, strips leading and trailing whitespace from header names
    /// and fields. Defaults to false.
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Sets a comment character; lines starting with it are skipped.
    /// Defaults to `None`.
    pub fn comment(mut self, comment: Option<u8>) -> Self {
        self.comment = comment;
        self
    }

    /// Supplies the column names upfront instead of reading them from the
    /// source. The first record of the source is then treated as data.
    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    /// Builds a [`MapReader`] over any byte source.
    pub fn from_reader<R: io::Read>(&self, rdr: R) -> Result<MapReader<R>, RowMapError> {
        self.build(self.csv_builder().from_reader(rdr))
    }

    /// Builds a [`MapReader`] for the CSV file at `path`.
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<MapReader<File>, RowMapError> {
        self.build(self.csv_builder().from_path(path)?)
    }

    /// Creates the underlying reader configuration.
    ///
    /// The wrapper reads the header row itself and checks record widths on
    /// its own, so the inner reader runs with headers off and flexible
    /// record lengths.
    fn csv_builder(&self) -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .quote(self.quote)
            .comment(self.comment)
            .trim(if self.trim { Trim::All } else { Trim::None });
        builder
    }

    /// Reads the header row (unless one was supplied) and assembles the
    /// reader around it.
    fn build<R: io::Read>(&self, mut reader: Reader<R>) -> Result<MapReader<R>, RowMapError> {
        let (headers, current_line) = match &self.headers {
            Some(names) => (names.clone(), 0),
            None => {
                let mut row = StringRecord::new();
                if !reader.read_record(&mut row)? {
                    return Err(RowMapError::MissingHeader);
                }
                tracing::debug!("Read header row with {} columns", row.len());
                let names: Vec<String> = row.iter().map(str::to_string).collect();
                (names, 1)
            }
        };

        let index = header_index(&headers);
        Ok(MapReader {
            reader,
            headers,
            index,
            current_line,
        })
    }
}
