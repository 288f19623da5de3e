//! Aggregation — grouped sums, argmaxes, and the cyclic weekday variation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::Dataset;
use crate::stats;

/// A product paired with its summed column (quantity or total value).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub product: String,
    pub total: f64,
}

/// One step of the cyclic weekday variation: the change in total value from
/// one observed weekday to the next, the last step wrapping to the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariationStep {
    pub from: u8,
    pub to: u8,
    pub delta: f64,
}

/// Every derived statistic the report prints.
///
/// Computed in a single scan of the dataset and never mutated afterwards.
/// Grouping keys are exactly the distinct values observed in the data, so
/// the grouped sums partition the global `total_value` sum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesSummary {
    pub mean_value: f64,
    pub median_value: f64,
    pub std_dev_value: f64,
    pub quantity_by_product: BTreeMap<String, f64>,
    pub value_by_product: BTreeMap<String, f64>,
    pub value_by_region: BTreeMap<String, f64>,
    pub value_by_weekday: BTreeMap<u8, f64>,
    pub count_by_weekday: BTreeMap<u8, usize>,
    /// `value_by_weekday / count_by_weekday`, elementwise. A weekday with no
    /// records has no entry, so no division by zero can occur.
    pub average_value_by_weekday: BTreeMap<u8, f64>,
    pub most_sold: Option<TopProduct>,
    pub highest_grossing: Option<TopProduct>,
    pub busiest_weekday: Option<u8>,
    pub weekday_variation: Vec<VariationStep>,
}

impl SalesSummary {
    /// Compute every aggregate from the typed dataset.
    pub fn compute(dataset: &Dataset) -> Self {
        let totals = dataset.total_values();

        let mut quantity_by_product: BTreeMap<String, f64> = BTreeMap::new();
        let mut value_by_product: BTreeMap<String, f64> = BTreeMap::new();
        let mut value_by_region: BTreeMap<String, f64> = BTreeMap::new();
        let mut value_by_weekday: BTreeMap<u8, f64> = BTreeMap::new();
        let mut count_by_weekday: BTreeMap<u8, usize> = BTreeMap::new();

        for (record, &weekday) in dataset.records().iter().zip(dataset.weekdays()) {
            *quantity_by_product
                .entry(record.product.clone())
                .or_insert(0.0) += record.quantity;
            *value_by_product
                .entry(record.product.clone())
                .or_insert(0.0) += record.total_value;
            *value_by_region
                .entry(record.region.clone())
                .or_insert(0.0) += record.total_value;
            *value_by_weekday.entry(weekday).or_insert(0.0) += record.total_value;
            *count_by_weekday.entry(weekday).or_insert(0) += 1;
        }

        let average_value_by_weekday = value_by_weekday
            .iter()
            .map(|(&day, &value)| (day, value / count_by_weekday[&day] as f64))
            .collect();

        let most_sold = argmax(&quantity_by_product).map(|(product, total)| TopProduct {
            product,
            total,
        });
        let highest_grossing = argmax(&value_by_product).map(|(product, total)| TopProduct {
            product,
            total,
        });
        let busiest_weekday = argmax(&value_by_weekday).map(|(day, _)| day);
        let weekday_variation = cyclic_variation(&value_by_weekday);

        Self {
            mean_value: stats::mean(&totals),
            median_value: stats::median(&totals),
            std_dev_value: stats::population_std_dev(&totals),
            quantity_by_product,
            value_by_product,
            value_by_region,
            value_by_weekday,
            count_by_weekday,
            average_value_by_weekday,
            most_sold,
            highest_grossing,
            busiest_weekday,
            weekday_variation,
        }
    }
}

/// Key with the greatest total. Ties resolve to the smallest key: the map
/// iterates in ascending key order and only a strictly greater total
/// replaces the current best.
fn argmax<K: Clone + Ord>(totals: &BTreeMap<K, f64>) -> Option<(K, f64)> {
    let mut best: Option<(&K, f64)> = None;
    for (key, &total) in totals {
        match best {
            Some((_, t)) if total <= t => {}
            _ => best = Some((key, total)),
        }
    }
    best.map(|(key, total)| (key.clone(), total))
}

/// First differences of the per-weekday totals over the ascending observed
/// weekdays, closed into a loop: the last step wraps back to the first
/// observed weekday, so the deltas sum to zero.
fn cyclic_variation(value_by_weekday: &BTreeMap<u8, f64>) -> Vec<VariationStep> {
    let days: Vec<u8> = value_by_weekday.keys().copied().collect();

    (0..days.len())
        .map(|i| {
            let from = days[i];
            let to = days[(i + 1) % days.len()];
            VariationStep {
                from,
                to,
                delta: value_by_weekday[&to] - value_by_weekday[&from],
            }
        })
        .collect()
}
