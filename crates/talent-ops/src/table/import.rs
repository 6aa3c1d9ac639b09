use super::value::Row;
use serde_json::{Number, Value};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("unable to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("duplicate column header '{0}'")]
    DuplicateHeader(String),
}

/// Reads CSV records (header row required) into table rows.
///
/// Integers and finite decimals whose text round-trips become numbers so they
/// sort numerically; empty cells become `null`; everything else stays text.
pub fn rows_from_csv<R: Read>(reader: R) -> Result<Vec<Row>, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut seen = HashSet::new();
    for header in headers.iter() {
        if !seen.insert(header) {
            return Err(ImportError::DuplicateHeader(header.to_string()));
        }
    }

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let mut row = Row::new();
        for (header, cell) in headers.iter().zip(record.iter()) {
            row.insert(header, cell_value(cell));
        }
        rows.push(row);
    }

    Ok(rows)
}

pub fn rows_from_csv_path(path: &Path) -> Result<Vec<Row>, ImportError> {
    let file = File::open(path).map_err(|source| ImportError::Open {
        path: path.display().to_string(),
        source,
    })?;
    rows_from_csv(file)
}

fn cell_value(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::Null;
    }

    if let Ok(int) = raw.parse::<i64>() {
        if int.to_string() == raw {
            return Value::Number(int.into());
        }
    }

    if let Ok(float) = raw.parse::<f64>() {
        if float.is_finite() && float.to_string() == raw {
            if let Some(number) = Number::from_f64(float) {
                return Value::Number(number);
            }
        }
    }

    Value::String(raw.to_string())
}
