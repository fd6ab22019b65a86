//! Name-keyed CSV record type.
//!
//! Defines [`MappedRecord`], the column-name to field-value view of a single
//! CSV record produced by [`MapReader`](crate::MapReader) and consumed by
//! [`MapWriter`](crate::MapWriter).

use std::collections::HashMap;
use std::ops::Index;

use serde::{Deserialize, Serialize};

/// A single CSV record keyed by column name.
///
/// This struct represents one data record of a CSV source with every field
/// reachable by the name of its column instead of its position. Records are
/// produced by [`MapReader`](crate::MapReader), which pairs each field with
/// the header row read from the source, and accepted by
/// [`MapWriter`](crate::MapWriter), which lays the fields back out in header
/// order.
///
/// Lookup order is not defined; iterate the reader's
/// [`headers`](crate::MapReader::headers) when column order matters.
///
/// # Example
///
/// ```
/// use rowmap::MappedRecord;
///
/// let record: MappedRecord = [("id", "1"), ("name", "Alice")]
///     .into_iter()
///     .map(|(name, value)| (name.to_string(), value.to_string()))
///     .collect();
///
/// assert_eq!(record.get("name"), Some("Alice"));
/// assert_eq!(record.get("age"), None);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MappedRecord(HashMap<String, String>);

impl MappedRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Creates an empty record sized for `capacity` columns.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self(HashMap::with_capacity(capacity))
    }

    /// Returns the field value for `name`, or `None` when the record has no
    /// such column.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Returns true when the record has a field for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Sets the field value for `name`, returning the previous value when
    /// the column was already present.
    pub fn insert(&mut self, name: String, value: String) -> Option<String> {
        self.0.insert(name, value)
    }

    /// Number of named fields in the record.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(name, value)` pairs in no defined order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Consumes the record and returns the underlying map.
    pub fn into_inner(self) -> HashMap<String, String> {
        self.0
    }
}

impl From<HashMap<String, String>> for MappedRecord {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

impl From<MappedRecord> for HashMap<String, String> {
    fn from(record: MappedRecord) -> Self {
        record.0
    }
}

impl FromIterator<(String, String)> for MappedRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for MappedRecord {
    type Item = (String, String);
    type IntoIter = std::collections::hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Index<&str> for MappedRecord {
    type Output = str;

    /// Returns the field value for `name`.
    ///
    /// # Panics
    ///
    /// Panics when the record has no column named `name`. Use
    /// [`MappedRecord::get`] for a fallible lookup.
    fn index(&self, name: &str) -> &str {
        match self.get(name) {
            Some(value) => value,
            None => panic!("no column named {:?} in record", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> MappedRecord {
        let mut record = MappedRecord::new();
        record.insert("id".to_string(), "7".to_string());
        record.insert("name".to_string(), "Alice".to_string());
        record
    }

    #[test]
    fn test_mapped_record_creation() {
        let record = MappedRecord::new();
        assert!(record.is_empty());
        assert_eq!(record.len(), 0);
    }

    #[test]
    fn test_mapped_record_get() {
        let record = sample_record();
        assert_eq!(record.get("id"), Some("7"));
        assert_eq!(record.get("name"), Some("Alice"));
        assert_eq!(record.get("missing"), None);
    }

    #[test]
    fn test_mapped_record_contains() {
        let record = sample_record();
        assert!(record.contains("id"));
        assert!(!record.contains("age"));
    }

    #[test]
    fn test_mapped_record_insert_replaces_value() {
        let mut record = sample_record();
        let previous = record.insert("id".to_string(), "8".to_string());
        assert_eq!(previous, Some("7".to_string()));
        assert_eq!(record.get("id"), Some("8"));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_mapped_record_index() {
        let record = sample_record();
        assert_eq!(&record["name"], "Alice");
    }

    #[test]
    #[should_panic(expected = "no column named")]
    fn test_mapped_record_index_panics_on_missing_column() {
        let record = sample_record();
        let _ = &record["age"];
    }

    #[test]
    fn test_mapped_record_from_hash_map() {
        let mut map = HashMap::new();
        map.insert("city".to_string(), "Oslo".to_string());
        let record = MappedRecord::from(map.clone());
        assert_eq!(record.get("city"), Some("Oslo"));

        let back: HashMap<String, String> = record.into();
        assert_eq!(back, map);
    }

    #[test]
    fn test_mapped_record_iteration() {
        let record = sample_record();
        let mut pairs: Vec<(&str, &str)> = record.iter().collect();
        pairs.sort();
        assert_eq!(pairs, vec![("id", "7"), ("name", "Alice")]);

        let mut owned: Vec<(String, String)> = record.into_iter().collect();
        owned.sort();
        assert_eq!(owned[0], ("id".to_string(), "7".to_string()));
        assert_eq!(owned[1], ("name".to_string(), "Alice".to_string()));
    }

    #[test]
    fn test_mapped_record_clone_and_equality() {
        let record = sample_record();
        let cloned = record.clone();
        assert_eq!(record, cloned);

        let mut other = cloned;
        other.insert("name".to_string(), "Bob".to_string());
        assert_ne!(record, other);
    }

    #[test]
    fn test_mapped_record_debug() {
        let record = sample_record();
        let debug_str = format!("{:?}", record);
        assert!(debug_str.contains("MappedRecord"));
        assert!(debug_str.contains("Alice"));
    }

    #[test]
    fn test_mapped_record_serialization() {
        let record = sample_record();

        // Serializes transparently as a flat JSON object
        let json = serde_json::to_string(&record).expect("Failed to serialize");
        assert!(json.contains("\"id\":\"7\""));
        assert!(json.contains("\"name\":\"Alice\""));
        assert!(!json.contains("MappedRecord"));

        // The round-trip should preserve every field exactly
        let deserialized: MappedRecord =
            serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_mapped_record_with_special_characters() {
        let mut record = MappedRecord::new();
        let value = "Hello, \"World\"!\nNew line\tTab";
        record.insert("note".to_string(), value.to_string());
        assert_eq!(record.get("note"), Some(value));
    }

    #[test]
    fn test_mapped_record_with_empty_value() {
        let mut record = MappedRecord::new();
        record.insert("blank".to_string(), String::new());
        assert_eq!(record.get("blank"), Some(""));
        assert!(record.contains("blank"));
    }
}
