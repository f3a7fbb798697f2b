//! In-memory tabular data read from and written to CSV

use std::path::Path;

use crate::{CleanDataError, Result};

/// A header row plus string records, the unit the cleaning steps
/// operate on before rows are loaded into the database.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub records: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, records: Vec<Vec<String>>) -> Self {
        Self { headers, records }
    }

    /// Read a table from a CSV file
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        // Flexible so length mismatches surface as our own error below
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path.as_ref())?;

        let headers = reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect::<Vec<_>>();

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            if record.len() != headers.len() {
                return Err(CleanDataError::RaggedRecord {
                    row: records.len() + 1,
                    expected: headers.len(),
                    found: record.len(),
                });
            }
            records.push(record.iter().map(|f| f.to_string()).collect());
        }

        Ok(Self { headers, records })
    }

    /// Write the table out as CSV
    pub fn to_csv_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut writer = csv::Writer::from_path(path.as_ref())?;

        writer.write_record(&self.headers)?;
        for record in &self.records {
            writer.write_record(record)?;
        }
        writer.flush()?;

        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_round_trip_through_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("table.csv");

        let table = Table::new(
            vec!["brand".into(), "price".into()],
            vec![
                vec!["Kia".into(), "8500".into()],
                vec!["Audi".into(), "21000".into()],
            ],
        );

        table.to_csv_path(&path).unwrap();
        let read_back = Table::from_csv_path(&path).unwrap();

        assert_eq!(read_back, table);
    }

    #[test]
    fn test_ragged_record_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "a,b\n1,2\n3\n").unwrap();

        let result = Table::from_csv_path(&path);
        assert!(matches!(
            result,
            Err(CleanDataError::RaggedRecord {
                row: 2,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let result = Table::from_csv_path(dir.path().join("nope.csv"));
        assert!(matches!(result, Err(CleanDataError::CsvError(_))));
    }
}
