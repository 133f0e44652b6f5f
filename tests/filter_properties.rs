//! Property tests for the filter algebra
//!
//! The four predicates are independent equality filters, so applying them
//! in any order must produce the same row set, and re-applying a spec to
//! its own output must change nothing.

use chrono::NaiveDate;
use proptest::prelude::*;
use salescope::prelude::*;
use salescope::types::month_name;

const REGIONS: [&str; 3] = ["East", "West", "Central"];
const CHANNELS: [&str; 3] = ["Online", "Retail", "Distributor"];

fn arb_table() -> impl Strategy<Value = Table> {
    prop::collection::vec(
        (2022i32..=2024, 1u32..=12, 0usize..3, 0usize..3, 0.0f64..1000.0),
        0..40,
    )
    .prop_map(|raw| {
        let rows = raw
            .into_iter()
            .enumerate()
            .map(|(i, (year, month, region, channel, revenue))| Transaction {
                order_number: format!("SO-{i}"),
                order_date: NaiveDate::from_ymd_opt(year, month, 15).unwrap(),
                order_month_name: month_name(month).unwrap().to_string(),
                order_month_num: month,
                us_region: REGIONS[region].to_string(),
                state: "NY".to_string(),
                state_name: "New York".to_string(),
                channel: CHANNELS[channel].to_string(),
                customer_name: "Acme".to_string(),
                product_name: "Widget".to_string(),
                unit_price: 10.0,
                revenue,
                profit: revenue * 0.1,
                profit_margin_pct: 10.0,
            })
            .collect();
        Table::from_rows(rows)
    })
}

fn arb_spec() -> impl Strategy<Value = FilterSpec> {
    (
        prop::option::of(2021i32..=2025),
        prop::option::of(1u32..=12),
        prop::option::of(0usize..3),
        prop::option::of(0usize..3),
    )
        .prop_map(|(year, month, region, channel)| {
            let mut spec = FilterSpec::new();
            if let Some(year) = year {
                spec = spec.year(year);
            }
            if let Some(month) = month {
                spec = spec.month(month_name(month).unwrap());
            }
            if let Some(region) = region {
                spec = spec.region(REGIONS[region]);
            }
            if let Some(channel) = channel {
                spec = spec.channel(CHANNELS[channel]);
            }
            spec
        })
}

fn order_ids(view: &View<'_>) -> Vec<String> {
    view.iter().map(|tx| tx.order_number.clone()).collect()
}

/// Single-dimension specs carrying each active predicate of `spec`
fn dimensions(spec: &FilterSpec) -> Vec<FilterSpec> {
    let mut dims = Vec::new();
    if let Some(year) = spec.year {
        dims.push(FilterSpec::new().year(year));
    }
    if let Some(month) = &spec.month {
        dims.push(FilterSpec::new().month(month.clone()));
    }
    if let Some(region) = &spec.region {
        dims.push(FilterSpec::new().region(region.clone()));
    }
    if let Some(channel) = &spec.channel {
        dims.push(FilterSpec::new().channel(channel.clone()));
    }
    dims
}

proptest! {
    #[test]
    fn filter_commutes_over_predicate_order(table in arb_table(), spec in arb_spec()) {
        let one_pass = spec.apply(&table);

        let dims = dimensions(&spec);
        let forward = dims.iter().fold(table.view(), |view, dim| view.refine(dim));
        let reverse = dims.iter().rev().fold(table.view(), |view, dim| view.refine(dim));

        prop_assert_eq!(order_ids(&one_pass), order_ids(&forward));
        prop_assert_eq!(order_ids(&forward), order_ids(&reverse));
    }

    #[test]
    fn filter_is_idempotent(table in arb_table(), spec in arb_spec()) {
        let once = spec.apply(&table);
        let twice = once.refine(&spec);

        prop_assert_eq!(order_ids(&once), order_ids(&twice));
    }

    #[test]
    fn row_survives_iff_every_predicate_holds(table in arb_table(), spec in arb_spec()) {
        let kept = order_ids(&spec.apply(&table));

        for tx in table.rows() {
            let satisfies = spec.year.map_or(true, |y| tx.order_year() == y)
                && spec.month.as_ref().map_or(true, |m| &tx.order_month_name == m)
                && spec.region.as_ref().map_or(true, |r| &tx.us_region == r)
                && spec.channel.as_ref().map_or(true, |c| &tx.channel == c);
            prop_assert_eq!(kept.contains(&tx.order_number), satisfies);
        }
    }

    #[test]
    fn filtering_never_reorders_rows(table in arb_table(), spec in arb_spec()) {
        let kept = order_ids(&spec.apply(&table));

        // Kept ids appear in the same relative order as in the table
        let table_ids: Vec<String> = table.rows().iter().map(|tx| tx.order_number.clone()).collect();
        let mut cursor = table_ids.iter();
        for id in &kept {
            prop_assert!(cursor.any(|t| t == id));
        }
    }
}
