//! Dataset document types and JSON parsing.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;

/// Current supported dataset version.
pub const SUPPORTED_VERSION: u32 = 1;

/// One user row as it appears in the dataset document.
///
/// Field names follow the document's mixed naming (`first_name` alongside
/// `isActive`), so each field is renamed explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRow {
    /// Numeric identifier, unique within the dataset.
    pub id: i64,
    /// Globally unique identifier string.
    pub guid: String,
    /// Whether the account is active.
    #[serde(rename = "isActive")]
    pub is_active: bool,
    /// Account balance as formatted text.
    pub balance: String,
    /// Picture reference.
    pub picture: String,
    /// Age in years.
    pub age: u32,
    /// Eye colour tag.
    #[serde(rename = "eyeColor")]
    pub eye_color: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Gender tag.
    pub gender: String,
    /// Employer name.
    pub company: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Postal address.
    pub address: String,
    /// Free-form biography; may be empty.
    pub about: String,
    /// Registration timestamp as recorded in the source.
    pub registered: String,
    /// Favourite fruit tag.
    #[serde(rename = "favoriteFruit")]
    pub favorite_fruit: String,
}

#[derive(Debug, Deserialize)]
struct RawDataset {
    version: u32,
    rows: Vec<DatasetRow>,
}

/// A validated dataset document.
///
/// Rows keep document order; the search evaluator relies on it for stable
/// tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    rows: Vec<DatasetRow>,
}

impl Dataset {
    /// Parses a dataset from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if:
    /// - The JSON is malformed or a required field is missing
    /// - The version is unsupported
    /// - Two rows share an identifier
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let raw: RawDataset = serde_json::from_str(json).map_err(|e| DatasetError::ParseError {
            message: e.to_string(),
        })?;

        Self::from_raw(raw)
    }

    /// Loads a dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, DatasetError> {
        let contents = fs::read_to_string(path).map_err(|e| DatasetError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawDataset) -> Result<Self, DatasetError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(DatasetError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        let mut seen = HashSet::with_capacity(raw.rows.len());
        for (index, row) in raw.rows.iter().enumerate() {
            if !seen.insert(row.id) {
                return Err(DatasetError::DuplicateId { id: row.id, index });
            }
        }

        Ok(Self { rows: raw.rows })
    }

    /// Returns the rows in document order.
    #[must_use]
    pub fn rows(&self) -> &[DatasetRow] {
        &self.rows
    }

    /// Consumes the dataset and returns its rows in document order.
    #[must_use]
    pub fn into_rows(self) -> Vec<DatasetRow> {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn row_json(id: i64, first_name: &str) -> String {
        format!(
            r#"{{
                "id": {id},
                "guid": "guid-{id}",
                "isActive": true,
                "balance": "$1,000.00",
                "picture": "http://placehold.it/32x32",
                "age": 30,
                "eyeColor": "blue",
                "first_name": "{first_name}",
                "last_name": "Example",
                "gender": "female",
                "company": "ACME",
                "email": "someone@example.com",
                "phone": "+1 (800) 555-0100",
                "address": "1 Example Street",
                "about": "",
                "registered": "2014-01-01T00:00:00 -00:00",
                "favoriteFruit": "banana"
            }}"#
        )
    }

    fn document(version: u32, rows: &[String]) -> String {
        format!(r#"{{"version": {version}, "rows": [{}]}}"#, rows.join(","))
    }

    #[rstest]
    fn parses_rows_in_document_order() {
        let json = document(1, &[row_json(3, "Cara"), row_json(1, "Abel")]);
        let dataset = Dataset::from_json(&json).expect("valid dataset");

        let names: Vec<&str> = dataset
            .rows()
            .iter()
            .map(|row| row.first_name.as_str())
            .collect();
        assert_eq!(names, ["Cara", "Abel"]);
        assert!(dataset.rows()[0].is_active);
        assert_eq!(dataset.rows()[0].favorite_fruit, "banana");
    }

    #[rstest]
    fn rows_serialise_with_document_field_names() {
        let json = document(1, &[row_json(4, "Dana")]);
        let dataset = Dataset::from_json(&json).expect("valid dataset");

        let rows = serde_json::to_string(dataset.rows()).expect("serialise rows");
        for key in ["\"isActive\"", "\"eyeColor\"", "\"favoriteFruit\"", "\"first_name\""] {
            assert!(rows.contains(key), "missing {key} in {rows}");
        }

        let reparsed = Dataset::from_json(&format!(r#"{{"version": 1, "rows": {rows}}}"#))
            .expect("serialised rows parse back");
        assert_eq!(reparsed, dataset);
    }

    #[rstest]
    fn accepts_empty_row_list() {
        let dataset = Dataset::from_json(&document(1, &[])).expect("valid dataset");
        assert!(dataset.rows().is_empty());
    }

    #[rstest]
    #[case(0)]
    #[case(2)]
    fn rejects_unsupported_versions(#[case] version: u32) {
        let error = Dataset::from_json(&document(version, &[])).expect_err("version must fail");
        assert_eq!(
            error,
            DatasetError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: version,
            }
        );
    }

    #[rstest]
    fn rejects_duplicate_ids() {
        let json = document(1, &[row_json(7, "Abel"), row_json(7, "Cara")]);
        let error = Dataset::from_json(&json).expect_err("duplicates must fail");
        assert_eq!(error, DatasetError::DuplicateId { id: 7, index: 1 });
    }

    #[rstest]
    #[case::not_json("NotJSON")]
    #[case::missing_rows(r#"{"version": 1}"#)]
    #[case::missing_field(r#"{"version": 1, "rows": [{"id": 1}]}"#)]
    fn rejects_malformed_documents(#[case] json: &str) {
        let error = Dataset::from_json(json).expect_err("malformed JSON must fail");
        assert!(matches!(error, DatasetError::ParseError { .. }));
    }
}
