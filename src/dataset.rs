//! Loading the coordinate table and pulling `longitude`/`latitude` out of it.

use csv::{ReaderBuilder, StringRecord, Trim};
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::Point;

/// Column holding the x coordinate.
pub const LONGITUDE: &str = "longitude";
/// Column holding the y coordinate.
pub const LATITUDE: &str = "latitude";

/// Cell spellings read as a missing value (the usual dataframe NA markers).
/// Matching is exact and case-sensitive.
pub const NA_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// In-memory table: header names plus every record, in file order.
///
/// Built once by [`load`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    headers: StringRecord,
    records: Vec<StringRecord>,
}

impl Dataset {
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.headers.iter()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn records(&self) -> &[StringRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Read the whole CSV file at `path` into memory.
///
/// Headers and cells are whitespace-trimmed. Ragged rows, invalid UTF-8 and
/// files without a header row are load errors.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    let load_err = |source: Box<dyn std::error::Error + Send + Sync>| Error::DataLoad {
        path: path.to_path_buf(),
        source,
    };

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(|e| load_err(e.into()))?;

    let headers = rdr.headers().map_err(|e| load_err(e.into()))?.clone();
    if headers.is_empty() || headers.iter().all(str::is_empty) {
        return Err(load_err("no header row".into()));
    }

    let records = rdr
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| load_err(e.into()))?;

    log::debug!(
        "loaded {} records with columns {:?} from {}",
        records.len(),
        headers.iter().collect::<Vec<_>>(),
        path.display()
    );
    Ok(Dataset { headers, records })
}

/// Turn every record into a [`Point`], preserving row order.
///
/// Empty cells and [`NA_MARKERS`] become `NaN` (the point exists but is never
/// drawn); anything else that does not parse as a number is an error.
pub fn extract_coordinates(dataset: &Dataset) -> Result<Vec<Point>> {
    let lon_idx = required_column(dataset, LONGITUDE)?;
    let lat_idx = required_column(dataset, LATITUDE)?;

    dataset
        .records
        .iter()
        .enumerate()
        .map(|(i, rec)| {
            let row = i + 1;
            Ok(Point::new(
                parse_cell(rec, lon_idx, row, LONGITUDE)?,
                parse_cell(rec, lat_idx, row, LATITUDE)?,
            ))
        })
        .collect()
}

fn required_column(dataset: &Dataset, name: &str) -> Result<usize> {
    dataset.column_index(name).ok_or_else(|| Error::MissingColumn {
        column: name.to_string(),
    })
}

fn parse_cell(rec: &StringRecord, idx: usize, row: usize, column: &str) -> Result<f64> {
    let raw = rec.get(idx).unwrap_or("").trim();
    if raw.is_empty() || NA_MARKERS.contains(&raw) {
        return Ok(f64::NAN);
    }
    raw.parse::<f64>().map_err(|_| Error::InvalidCoordinate {
        row,
        column: column.to_string(),
        value: raw.to_string(),
    })
}
