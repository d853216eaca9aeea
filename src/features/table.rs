//! Per-slide feature table loading from CSV

use crate::io::error::{RenderError, Result, invalid_parameter};
use std::path::{Path, PathBuf};

/// Tile-level feature table for one slide
///
/// Rows are keyed by tile identifier strings (the CSV index column);
/// columns are named numeric features. Non-numeric or empty cells are
/// stored as NaN so that downstream normalization can skip them.
#[derive(Debug, Clone)]
pub struct FeatureTable {
    tile_names: Vec<String>,
    columns: Vec<(String, Vec<f64>)>,
}

impl FeatureTable {
    /// Load the feature table for a slide from `<feats_dir>/<slide>.csv`
    ///
    /// The first CSV column is the tile identifier index; every other
    /// column is parsed as `f64` with unparseable cells coerced to NaN.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, a record is
    /// malformed, the header is empty, or two columns share a name.
    pub fn load(feats_dir: &Path, slide: &str) -> Result<Self> {
        let path = feats_dir.join(format!("{slide}.csv"));
        Self::load_from_path(&path)
    }

    /// Load a feature table directly from a CSV path
    ///
    /// # Errors
    ///
    /// Same conditions as [`FeatureTable::load`].
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let table_error = |source: csv::Error| RenderError::TableLoad {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .map_err(table_error)?;

        let headers = reader.headers().map_err(table_error)?.clone();
        if headers.is_empty() {
            return Err(malformed(path, "header row is empty"));
        }

        let column_names: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();
        for (i, name) in column_names.iter().enumerate() {
            if column_names
                .get(..i)
                .is_some_and(|prior| prior.iter().any(|other| other == name))
            {
                return Err(malformed(path, &format!("duplicate column name '{name}'")));
            }
        }

        let mut tile_names = Vec::new();
        let mut cells: Vec<Vec<f64>> = vec![Vec::new(); column_names.len()];

        for record in reader.records() {
            let record = record.map_err(table_error)?;
            let tile_name = record
                .get(0)
                .ok_or_else(|| malformed(path, "record is missing the tile identifier column"))?;
            tile_names.push(tile_name.to_string());

            for (column, values) in cells.iter_mut().enumerate() {
                let parsed = record
                    .get(column + 1)
                    .map_or(f64::NAN, |cell| cell.trim().parse().unwrap_or(f64::NAN));
                values.push(parsed);
            }
        }

        let columns = column_names.into_iter().zip(cells).collect();
        Ok(Self {
            tile_names,
            columns,
        })
    }

    /// Number of tile rows in the table
    pub const fn len(&self) -> usize {
        self.tile_names.len()
    }

    /// Check whether the table has no rows
    pub const fn is_empty(&self) -> bool {
        self.tile_names.is_empty()
    }

    /// Tile identifier strings, in CSV row order
    pub fn tile_names(&self) -> &[String] {
        &self.tile_names
    }

    /// Names of all columns, in CSV order plus any appended columns
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Check whether a named column exists
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|(n, _)| n == name)
    }

    /// Look up a column's values by name
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, values)| values.as_slice())
    }

    /// Append a derived column to the table
    ///
    /// # Errors
    ///
    /// Returns an error if the column length doesn't match the row count
    /// or a column with the same name already exists.
    pub fn append_column(&mut self, name: &str, values: Vec<f64>) -> Result<()> {
        if values.len() != self.len() {
            return Err(invalid_parameter(
                "column",
                &name,
                &format!(
                    "length {} doesn't match table row count {}",
                    values.len(),
                    self.len()
                ),
            ));
        }
        if self.has_column(name) {
            return Err(invalid_parameter(
                "column",
                &name,
                &"a column with this name already exists",
            ));
        }
        self.columns.push((name.to_string(), values));
        Ok(())
    }
}

fn malformed(path: &Path, reason: &str) -> RenderError {
    RenderError::MalformedTable {
        path: PathBuf::from(path),
        reason: reason.to_string(),
    }
}
