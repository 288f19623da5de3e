//! One-shot pipeline: load → extract → aggregate → render.

use std::path::Path;

use crate::aggregate::SalesSummary;
use crate::error::ReportError;
use crate::extract::extract_records;
use crate::loader::load_rows;
use crate::report::render_report;

/// Run the whole pipeline for the sales table at `path` and return the
/// report text.
///
/// Fail-fast: the first load or parse error is returned as-is and no report
/// text is produced. The input file is fully read and closed before any
/// aggregation starts.
pub fn generate_report(path: &Path) -> Result<String, ReportError> {
    let rows = load_rows(path)?;
    let dataset = extract_records(rows)?;
    let summary = SalesSummary::compute(&dataset);
    Ok(render_report(&summary))
}
