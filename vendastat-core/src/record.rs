//! SaleRecord — the fundamental transaction unit — and the loaded dataset.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::weekday::weekday_index;

/// One sales transaction, as parsed from a data row.
///
/// `total_value` is taken from the file as-is; it is not recomputed from
/// `quantity * unit_price`. Records are never mutated after loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub date: NaiveDate,
    pub region: String,
    pub product: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub total_value: f64,
}

/// The full table of sale records, in file order, with the weekday index of
/// each record cached in a parallel vector.
///
/// File order is preserved so error diagnostics and the weekday cache stay
/// index-aligned; no aggregate depends on it.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<SaleRecord>,
    weekdays: Vec<u8>,
}

impl Dataset {
    /// Build a dataset, deriving the weekday index of every record once.
    pub fn from_records(records: Vec<SaleRecord>) -> Self {
        let weekdays = records.iter().map(|r| weekday_index(r.date)).collect();
        Self { records, weekdays }
    }

    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    /// Weekday index (Monday=0 … Sunday=6) per record, parallel to [`Self::records`].
    pub fn weekdays(&self) -> &[u8] {
        &self.weekdays
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The `total_value` column as a plain vector.
    pub fn total_values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.total_value).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> SaleRecord {
        SaleRecord {
            date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            region: "North".into(),
            product: "Widget".into(),
            quantity: 10.0,
            unit_price: 5.0,
            total_value: 50.0,
        }
    }

    #[test]
    fn weekday_cache_is_parallel_to_records() {
        let mut second = sample_record();
        second.date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(); // Saturday

        let dataset = Dataset::from_records(vec![sample_record(), second]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.weekdays(), &[0, 5]);
    }

    #[test]
    fn total_values_extracts_the_column() {
        let mut second = sample_record();
        second.total_value = 25.0;

        let dataset = Dataset::from_records(vec![sample_record(), second]);
        assert_eq!(dataset.total_values(), vec![50.0, 25.0]);
    }

    #[test]
    fn record_serialization_roundtrip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let deser: SaleRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deser);
    }
}
