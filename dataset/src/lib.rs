use serde::{Deserialize, Serialize};

pub mod cell;
pub mod load;

pub use cell::{format_float, Cell};
pub use load::DataFormat;

#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("row {row} has {found} values, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("index has {found} labels, expected {expected}")]
    IndexLength { expected: usize, found: usize },
    #[error("unknown column '{0}'")]
    UnknownColumn(String),
    #[error("unsupported data format '{0}'")]
    UnsupportedFormat(String),
}

/// A two-dimensional, column-labeled dataset with row labels.
///
/// Serializes in the "split" layout: `{"columns": [...], "index": [...],
/// "data": [[...], ...]}`. Deserialization checks the shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SplitFrame")]
pub struct DataFrame {
    columns: Vec<String>,
    index: Vec<String>,
    #[serde(rename = "data")]
    rows: Vec<Vec<Cell>>,
}

#[derive(Deserialize)]
struct SplitFrame {
    columns: Vec<Cell>,
    #[serde(default)]
    index: Option<Vec<Cell>>,
    data: Vec<Vec<Cell>>,
}

impl TryFrom<SplitFrame> for DataFrame {
    type Error = DatasetError;

    fn try_from(raw: SplitFrame) -> Result<Self, Self::Error> {
        let columns = raw.columns.iter().map(ToString::to_string);
        let frame = DataFrame::new(columns, raw.data)?;
        match raw.index {
            Some(index) => frame.with_index(index.iter().map(ToString::to_string)),
            None => Ok(frame),
        }
    }
}

impl DataFrame {
    /// Builds a frame with a default `0..n` index.
    pub fn new<C, S>(columns: C, rows: Vec<Vec<Cell>>) -> Result<Self, DatasetError>
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        for (row, values) in rows.iter().enumerate() {
            if values.len() != columns.len() {
                return Err(DatasetError::RowLength {
                    row,
                    expected: columns.len(),
                    found: values.len(),
                });
            }
        }
        let index = (0..rows.len()).map(|i| i.to_string()).collect();
        Ok(Self {
            columns,
            index,
            rows,
        })
    }

    /// A frame with the given columns and no rows.
    pub fn empty<C, S>(columns: C) -> Self
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            index: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Replaces the row labels.
    pub fn with_index<I, S>(mut self, index: I) -> Result<Self, DatasetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let index: Vec<String> = index.into_iter().map(Into::into).collect();
        if index.len() != self.rows.len() {
            return Err(DatasetError::IndexLength {
                expected: self.rows.len(),
                found: index.len(),
            });
        }
        self.index = index;
        Ok(self)
    }

    /// Moves `column` out of the body and uses its values as row labels.
    pub fn set_index(&mut self, column: &str) -> Result<(), DatasetError> {
        let position = self
            .column_position(column)
            .ok_or_else(|| DatasetError::UnknownColumn(column.to_string()))?;
        self.columns.remove(position);
        self.index = self
            .rows
            .iter_mut()
            .map(|row| row.remove(position).to_string())
            .collect();
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn index(&self) -> &[String] {
        &self.index
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|values| values.get(col))
    }

    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Every body cell formatted as display text, row-major.
    pub fn cell_text(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_assigns_range_index() {
        let frame = DataFrame::new(
            ["a", "b"],
            vec![vec![1.into(), 2.into()], vec![3.into(), 4.into()]],
        )
        .unwrap();
        assert_eq!(frame.index(), &["0".to_string(), "1".to_string()]);
        assert_eq!(frame.n_cols(), 2);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = DataFrame::new(["a", "b"], vec![vec![1.into()]]).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::RowLength {
                row: 0,
                expected: 2,
                found: 1
            }
        ));
    }
}
