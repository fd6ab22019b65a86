//! Row Mapper Library
//!
//! This library reads and writes CSV records keyed by column name. The
//! first record of a source is taken as the header row; every following
//! record is exposed as a [`MappedRecord`] from column name to field
//! value, and records can be written back out in header order. Field
//! parsing and escaping are handled by the `csv` crate underneath.
//!
//! # Example
//!
//! ```
//! use rowmap::MapReader;
//!
//! let data = "\
//! id,name
//! 1,Alice
//! 2,Bob
//! ";
//!
//! let mut reader = MapReader::from_reader(data.as_bytes())?;
//! let records = reader.read_all()?;
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].get("name"), Some("Alice"));
//! assert_eq!(records[1].get("id"), Some("2"));
//! # Ok::<(), rowmap::RowMapError>(())
//! ```

pub mod error;
pub mod reader;
pub mod record;
pub mod writer;

pub use error::RowMapError;
pub use reader::{header_index, MapReader, MapReaderBuilder};
pub use record::MappedRecord;
pub use writer::{MapWriter, MapWriterBuilder};
