use crate::{Cell, DataFrame, DatasetError};
use std::fs;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Csv,
    Json,
}

impl DataFormat {
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        match ext.as_str() {
            "csv" | "tsv" | "txt" => Ok(DataFormat::Csv),
            "json" => Ok(DataFormat::Json),
            other => Err(DatasetError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl DataFrame {
    /// Loads a dataset, picking the parser from the file extension.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        match DataFormat::from_path(path)? {
            DataFormat::Csv => {
                let delimiter = if path.extension().and_then(|s| s.to_str()) == Some("tsv") {
                    b'\t'
                } else {
                    b','
                };
                let file = fs::File::open(path)?;
                Self::from_csv_reader(file, delimiter)
            }
            DataFormat::Json => {
                let data = fs::read(path)?;
                Self::from_json_slice(&data)
            }
        }
    }

    /// Reads a headed CSV stream.
    ///
    /// Types are inferred per field, then unified per column: a column with
    /// any text keeps its raw fields as text, and integers sharing a column
    /// with floats or missing values become floats.
    pub fn from_csv_reader<R: Read>(reader: R, delimiter: u8) -> Result<Self, DatasetError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(delimiter)
            .from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();

        let mut raw = Vec::new();
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(Cell::parse).collect::<Vec<_>>());
            raw.push(record.iter().map(str::to_string).collect::<Vec<_>>());
        }
        keep_text_columns(&mut rows, &raw, headers.len());
        widen_numeric_columns(&mut rows, headers.len());
        DataFrame::new(headers, rows)
    }

    /// Accepts either an array of records (`[{"a": 1}, ...]`, columns in
    /// first-seen order) or the split layout produced by serializing a
    /// [`DataFrame`].
    pub fn from_json_slice(data: &[u8]) -> Result<Self, DatasetError> {
        let value: serde_json::Value = serde_json::from_slice(data)?;
        match value {
            serde_json::Value::Array(records) => Self::from_json_records(records),
            other => Ok(serde_json::from_value(other)?),
        }
    }

    fn from_json_records(records: Vec<serde_json::Value>) -> Result<Self, DatasetError> {
        let mut columns: Vec<String> = Vec::new();
        let mut objects = Vec::with_capacity(records.len());
        for record in records {
            let object: serde_json::Map<String, serde_json::Value> =
                serde_json::from_value(record)?;
            for key in object.keys() {
                if !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
            objects.push(object);
        }

        let mut rows = Vec::with_capacity(objects.len());
        for object in objects {
            let mut row = Vec::with_capacity(columns.len());
            for column in &columns {
                let cell = match object.get(column) {
                    Some(value) => serde_json::from_value(value.clone())?,
                    None => Cell::Missing,
                };
                row.push(cell);
            }
            rows.push(row);
        }
        widen_numeric_columns(&mut rows, columns.len());
        DataFrame::new(columns, rows)
    }
}

fn keep_text_columns(rows: &mut [Vec<Cell>], raw: &[Vec<String>], n_cols: usize) {
    for col in 0..n_cols {
        let has_text = rows
            .iter()
            .any(|row| matches!(row.get(col), Some(Cell::Text(_))));
        if !has_text {
            continue;
        }
        for (row, fields) in rows.iter_mut().zip(raw) {
            if let (Some(cell), Some(field)) = (row.get_mut(col), fields.get(col)) {
                if !cell.is_missing() {
                    *cell = Cell::Text(field.clone());
                }
            }
        }
    }
}

fn widen_numeric_columns(rows: &mut [Vec<Cell>], n_cols: usize) {
    for col in 0..n_cols {
        let mut ints = false;
        let mut float_like = false;
        let mut other = false;
        for cell in rows.iter().filter_map(|row| row.get(col)) {
            match cell {
                Cell::Int(_) => ints = true,
                Cell::Float(_) | Cell::Missing => float_like = true,
                Cell::Bool(_) | Cell::Text(_) => other = true,
            }
        }
        if !(ints && float_like) || other {
            continue;
        }
        for cell in rows.iter_mut().filter_map(|row| row.get_mut(col)) {
            if let Cell::Int(value) = *cell {
                *cell = Cell::Float(value as f64);
            }
        }
    }
}
