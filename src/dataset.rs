//! CSV-backed tabular dataset.
//!
//! A `Dataset` is the header row plus an ordered list of rows, all carried as
//! strings. The normalization pipeline only interprets the name column;
//! every other column passes through untouched, in its original order.
//!
//! Output is written through a temp file in the destination directory and
//! atomically renamed into place, so the artifact exists in full or not at
//! all.

use crate::error::{NormalizeError, NormalizeResult};
use std::path::Path;
use tempfile::NamedTempFile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Build a dataset from a header row and data rows. Every row must have
    /// one cell per header.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> NormalizeResult<Self> {
        if headers.is_empty() {
            return Err(NormalizeError::MissingHeader);
        }
        for (index, row) in rows.iter().enumerate() {
            if row.len() != headers.len() {
                return Err(NormalizeError::InternalError(format!(
                    "row {} has {} cells, expected {}",
                    index,
                    row.len(),
                    headers.len()
                )));
            }
        }
        Ok(Dataset { headers, rows })
    }

    /// Load a headered CSV file.
    pub fn read(path: &Path) -> NormalizeResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)?;
        let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();
        if headers.is_empty() {
            return Err(NormalizeError::MissingHeader);
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(String::from).collect());
        }
        Ok(Dataset { headers, rows })
    }

    /// Write the dataset as headered CSV. The file is staged in the target
    /// directory and persisted with a rename.
    pub fn write(&self, path: &Path) -> NormalizeResult<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let tmp = NamedTempFile::new_in(dir)?;

        let mut writer = csv::Writer::from_writer(tmp.as_file());
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        drop(writer);

        tmp.persist(path)?;
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> NormalizeResult<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| NormalizeError::ColumnNotFound(name.to_string()))
    }

    /// All values of one column, in row order.
    pub fn column(&self, name: &str) -> NormalizeResult<Vec<String>> {
        let index = self.column_index(name)?;
        Ok(self.rows.iter().map(|row| row[index].clone()).collect())
    }

    /// Keep only rows whose `column` cell equals `value`. Returns the number
    /// of rows kept.
    pub fn filter_rows(&mut self, column: &str, value: &str) -> NormalizeResult<usize> {
        let index = self.column_index(column)?;
        self.rows.retain(|row| row[index] == value);
        Ok(self.rows.len())
    }

    /// Remove the named columns from the header and every row. Names not
    /// present are skipped, so re-running over an already-projected artifact
    /// is harmless.
    pub fn drop_columns(&mut self, names: &[String]) {
        let keep: Vec<bool> = self.headers.iter().map(|h| !names.contains(h)).collect();
        if keep.iter().all(|k| *k) {
            return;
        }
        self.headers = filter_cells(std::mem::take(&mut self.headers), &keep);
        for row in &mut self.rows {
            *row = filter_cells(std::mem::take(row), &keep);
        }
    }

    /// Append a derived column, or overwrite it if the name already exists
    /// (re-running the pipeline over its own output stays valid).
    pub fn push_column(&mut self, name: &str, values: Vec<String>) -> NormalizeResult<()> {
        if values.len() != self.rows.len() {
            return Err(NormalizeError::InternalError(format!(
                "column '{}' has {} values for {} rows",
                name,
                values.len(),
                self.rows.len()
            )));
        }

        match self.headers.iter().position(|h| h == name) {
            Some(index) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[index] = value;
                }
            }
            None => {
                self.headers.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
        Ok(())
    }
}

fn filter_cells(cells: Vec<String>, keep: &[bool]) -> Vec<String> {
    cells
        .into_iter()
        .zip(keep)
        .filter(|(_, keep)| **keep)
        .map(|(cell, _)| cell)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::new(
            vec!["prenom".into(), "annee".into(), "niveau_geographique".into()],
            vec![
                vec!["Léa".into(), "2001".into(), "FRANCE".into()],
                vec!["Léa".into(), "2002".into(), "REGION".into()],
                vec!["Paul".into(), "2001".into(), "FRANCE".into()],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_ragged_rows() {
        let result = Dataset::new(
            vec!["prenom".into()],
            vec![vec!["Léa".into(), "extra".into()]],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_column_access() {
        let ds = sample();
        assert_eq!(ds.column("prenom").unwrap(), vec!["Léa", "Léa", "Paul"]);
        assert!(matches!(
            ds.column("missing"),
            Err(NormalizeError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn test_filter_rows() {
        let mut ds = sample();
        let kept = ds.filter_rows("niveau_geographique", "FRANCE").unwrap();
        assert_eq!(kept, 2);
        assert_eq!(ds.column("annee").unwrap(), vec!["2001", "2001"]);
    }

    #[test]
    fn test_drop_columns() {
        let mut ds = sample();
        ds.drop_columns(&["niveau_geographique".into(), "absent".into()]);
        assert_eq!(ds.headers(), &["prenom".to_string(), "annee".to_string()]);
        assert_eq!(ds.column("annee").unwrap(), vec!["2001", "2002", "2001"]);
    }

    #[test]
    fn test_push_column_appends_and_overwrites() {
        let mut ds = sample();
        ds.push_column("folded", vec!["lea".into(), "lea".into(), "paul".into()])
            .unwrap();
        assert_eq!(ds.headers().last().unwrap(), "folded");

        ds.push_column("folded", vec!["x".into(), "y".into(), "z".into()])
            .unwrap();
        assert_eq!(ds.column("folded").unwrap(), vec!["x", "y", "z"]);
        assert_eq!(ds.headers().len(), 4);
    }

    #[test]
    fn test_push_column_length_mismatch() {
        let mut ds = sample();
        assert!(ds.push_column("folded", vec!["only-one".into()]).is_err());
    }
}
