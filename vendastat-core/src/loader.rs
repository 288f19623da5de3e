//! CSV loading — file path to raw, field-count-validated rows.

use std::fs::File;
use std::path::Path;

use crate::error::ReportError;

/// Fields every data row must carry:
/// `date,region,product,quantity,unit_price,total_value`.
pub const FIELD_COUNT: usize = 6;

/// One raw data row: its 1-based index (header excluded) and field texts.
#[derive(Debug, Clone)]
pub struct RawRow {
    pub index: usize,
    pub fields: Vec<String>,
}

/// Read the sales table at `path` into raw rows, in file order.
///
/// The first line is a header and is discarded. Every remaining row must
/// have exactly [`FIELD_COUNT`] comma-separated fields; the first row that
/// does not aborts the load. The file handle is dropped before this
/// function returns, so nothing downstream touches the disk.
pub fn load_rows(path: &Path) -> Result<Vec<RawRow>, ReportError> {
    let file = File::open(path).map_err(|source| ReportError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    // flexible: field-count validation is ours, with a row-indexed error.
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result.map_err(|source| ReportError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if record.len() != FIELD_COUNT {
            return Err(ReportError::MalformedRow {
                row: i + 1,
                found: record.len(),
            });
        }
        rows.push(RawRow {
            index: i + 1,
            fields: record.iter().map(str::to_string).collect(),
        });
    }

    Ok(rows)
}
