//! Typed extraction — raw rows to a typed dataset.

use chrono::NaiveDate;

use crate::error::ReportError;
use crate::loader::RawRow;
use crate::record::{Dataset, SaleRecord};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse every raw row into a [`SaleRecord`] and build the [`Dataset`].
///
/// Column layout is fixed: `date,region,product,quantity,unit_price,
/// total_value`. `region` and `product` are taken verbatim; `date` must be
/// `YYYY-MM-DD` and the three numeric columns decimal numbers (leading sign
/// and fractional part accepted, `.` separator). The first failure aborts
/// extraction with the offending row and column.
pub fn extract_records(rows: Vec<RawRow>) -> Result<Dataset, ReportError> {
    let mut records = Vec::with_capacity(rows.len());
    for row in &rows {
        records.push(parse_row(row)?);
    }
    Ok(Dataset::from_records(records))
}

fn parse_row(row: &RawRow) -> Result<SaleRecord, ReportError> {
    let date = parse_date(row, 0, "date")?;
    let quantity = parse_number(row, 3, "quantity")?;
    let unit_price = parse_number(row, 4, "unit_price")?;
    let total_value = parse_number(row, 5, "total_value")?;

    Ok(SaleRecord {
        date,
        region: row.fields[1].clone(),
        product: row.fields[2].clone(),
        quantity,
        unit_price,
        total_value,
    })
}

fn parse_date(row: &RawRow, col: usize, column: &'static str) -> Result<NaiveDate, ReportError> {
    let text = &row.fields[col];
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| ReportError::Parse {
        row: row.index,
        column,
        value: text.clone(),
        expected: "a YYYY-MM-DD date",
    })
}

fn parse_number(row: &RawRow, col: usize, column: &'static str) -> Result<f64, ReportError> {
    let text = &row.fields[col];
    text.trim().parse::<f64>().map_err(|_| ReportError::Parse {
        row: row.index,
        column,
        value: text.clone(),
        expected: "a decimal number",
    })
}
