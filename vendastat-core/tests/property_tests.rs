//! Property tests for the aggregation invariants.
//!
//! Uses proptest to verify:
//! 1. Partition — grouped sums by product, region, and weekday each equal
//!    the global `total_value` sum
//! 2. Cyclic variation — one step per observed weekday, deltas sum to zero
//! 3. Weekday averages — exactly `value / count` for every observed weekday
//! 4. Argmax — the most-sold total dominates every product, ties going to
//!    the lexically first key
//! 5. Reporting precision — two-decimal formatting round-trips within 0.005

use chrono::NaiveDate;
use proptest::prelude::*;
use vendastat_core::{Dataset, SaleRecord, SalesSummary};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_record() -> impl Strategy<Value = SaleRecord> {
    (
        0u32..28,
        prop::sample::select(vec!["Norte", "Sul", "Leste", "Oeste"]),
        prop::sample::select(vec!["Widget", "Gadget", "Gizmo", "Doohickey"]),
        1.0..50.0_f64,
        0.5..200.0_f64,
    )
        .prop_map(|(day_offset, region, product, qty, price)| {
            let quantity = qty.round();
            let unit_price = (price * 100.0).round() / 100.0;
            SaleRecord {
                date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
                    + chrono::Days::new(u64::from(day_offset)),
                region: region.to_string(),
                product: product.to_string(),
                quantity,
                unit_price,
                total_value: (quantity * unit_price * 100.0).round() / 100.0,
            }
        })
}

fn arb_dataset() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(arb_record(), 1..60).prop_map(Dataset::from_records)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6 * (1.0 + a.abs().max(b.abs()))
}

// ── 1. Partition invariant ───────────────────────────────────────────

proptest! {
    /// Every grouping of `total_value` sums back to the global column sum.
    #[test]
    fn grouped_sums_partition_the_global_sum(dataset in arb_dataset()) {
        let summary = SalesSummary::compute(&dataset);
        let global: f64 = dataset.total_values().iter().sum();

        let by_product: f64 = summary.value_by_product.values().sum();
        let by_region: f64 = summary.value_by_region.values().sum();
        let by_weekday: f64 = summary.value_by_weekday.values().sum();

        prop_assert!(close(by_product, global));
        prop_assert!(close(by_region, global));
        prop_assert!(close(by_weekday, global));
    }

    /// Record counts partition the same way.
    #[test]
    fn weekday_counts_partition_the_record_count(dataset in arb_dataset()) {
        let summary = SalesSummary::compute(&dataset);
        let counted: usize = summary.count_by_weekday.values().sum();
        prop_assert_eq!(counted, dataset.len());
    }
}

// ── 2. Cyclic variation ──────────────────────────────────────────────

proptest! {
    /// The variation has one step per observed weekday and closes the loop:
    /// its deltas cancel to zero.
    #[test]
    fn variation_is_a_closed_loop(dataset in arb_dataset()) {
        let summary = SalesSummary::compute(&dataset);

        prop_assert_eq!(
            summary.weekday_variation.len(),
            summary.value_by_weekday.len()
        );

        let total: f64 = summary.weekday_variation.iter().map(|s| s.delta).sum();
        let scale: f64 = summary
            .value_by_weekday
            .values()
            .fold(0.0_f64, |acc, v| acc.max(v.abs()));
        prop_assert!(total.abs() < 1e-9 * (1.0 + scale));
    }

    /// Steps chain through the ascending observed weekdays and wrap.
    #[test]
    fn variation_steps_chain_in_ascending_weekday_order(dataset in arb_dataset()) {
        let summary = SalesSummary::compute(&dataset);
        let days: Vec<u8> = summary.value_by_weekday.keys().copied().collect();

        for (i, step) in summary.weekday_variation.iter().enumerate() {
            prop_assert_eq!(step.from, days[i]);
            prop_assert_eq!(step.to, days[(i + 1) % days.len()]);
        }
    }
}

// ── 3. Weekday averages ──────────────────────────────────────────────

proptest! {
    /// Each average is exactly the weekday's value total over its count —
    /// the same division, bit for bit.
    #[test]
    fn weekday_average_is_value_over_count(dataset in arb_dataset()) {
        let summary = SalesSummary::compute(&dataset);

        prop_assert_eq!(
            summary.average_value_by_weekday.len(),
            summary.value_by_weekday.len()
        );
        for (day, &avg) in &summary.average_value_by_weekday {
            let value = summary.value_by_weekday[day];
            let count = summary.count_by_weekday[day] as f64;
            prop_assert_eq!(avg, value / count);
        }
    }
}

// ── 4. Argmax ────────────────────────────────────────────────────────

proptest! {
    /// The most-sold total dominates every product; on a tie the lexically
    /// first key wins.
    #[test]
    fn most_sold_dominates_and_breaks_ties_lexically(dataset in arb_dataset()) {
        let summary = SalesSummary::compute(&dataset);
        let top = summary.most_sold.unwrap();

        for (product, &qty) in &summary.quantity_by_product {
            prop_assert!(qty <= top.total);
            if qty == top.total {
                prop_assert!(top.product <= *product);
            }
        }
    }

    /// Busiest weekday dominates the per-weekday value totals.
    #[test]
    fn busiest_weekday_dominates(dataset in arb_dataset()) {
        let summary = SalesSummary::compute(&dataset);
        let busiest = summary.busiest_weekday.unwrap();
        let best = summary.value_by_weekday[&busiest];

        for (&day, &value) in &summary.value_by_weekday {
            prop_assert!(value <= best);
            if value == best {
                prop_assert!(busiest <= day);
            }
        }
    }
}

// ── 5. Reporting precision ───────────────────────────────────────────

proptest! {
    /// Two-decimal formatting loses at most half a cent.
    #[test]
    fn two_decimal_formatting_round_trips(value in 0.0..100_000.0_f64) {
        let printed: f64 = format!("{value:.2}").parse().unwrap();
        prop_assert!((printed - value).abs() < 0.005);
    }
}
