//! Vendastat Core — sales table loading, typed extraction, descriptive
//! statistics, and report rendering.
//!
//! The crate is one linear pipeline with no shared state between stages:
//! - [`loader`] reads the comma-delimited sales table into raw rows
//! - [`extract`] parses each raw row into a typed [`record::SaleRecord`]
//! - [`aggregate`] computes global and grouped statistics in one pass
//! - [`report`] renders them as fixed-order text
//!
//! Each stage takes the previous stage's output as an explicit value.
//! [`pipeline::generate_report`] chains all four for the CLI.

pub mod aggregate;
pub mod error;
pub mod extract;
pub mod loader;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod stats;
pub mod weekday;

pub use aggregate::{SalesSummary, TopProduct, VariationStep};
pub use error::ReportError;
pub use extract::extract_records;
pub use loader::{load_rows, RawRow, FIELD_COUNT};
pub use pipeline::generate_report;
pub use record::{Dataset, SaleRecord};
pub use report::render_report;
