//! Aggregation engine: stateless summaries over filtered views
//!
//! Every function here is a pure function of a [`View`]: no state, no
//! mutation, recomputed on each filter change. Grouped outputs collect
//! groups in order of first appearance (stable across calls), then apply
//! the per-view sort policy.
//!
//! Two margin formulas coexist and are never interchangeable:
//! - ratio-of-sums: `sum(profit) / sum(revenue) * 100`, undefined when the
//!   summed revenue is zero (signalled as `None`, never NaN);
//! - mean-of-ratios: arithmetic mean of per-row `profit_margin_pct`, always
//!   defined for a non-empty group.
//! Each view uses exactly the formula its contract calls for.

pub mod breakdown;
pub mod distribution;
pub mod kpi;
pub mod monthly;
pub mod ranking;

pub use breakdown::{
    channel_breakdown, customer_profiles, region_margin, region_revenue, state_revenue,
    ChannelBreakdown, CustomerProfile, RegionMargin, RegionRevenue, StateRevenue,
};
pub use distribution::{
    order_value_distribution, price_margin_scatter, OrderValue, PricePoint,
};
pub use kpi::{kpi_summary, KpiSummary};
pub use monthly::{monthly_profit, monthly_revenue, MonthlyPoint};
pub use ranking::{
    customers_by_margin, customers_by_revenue, products_by_margin, products_by_revenue,
    states_by_revenue, MarginRank, RankOrder, RevenueRank, CUSTOMER_RANK_LIMIT,
    PRODUCT_RANK_LIMIT, STATE_RANK_LIMIT,
};

use crate::table::View;
use crate::types::{Money, Percent, Transaction};
use hashbrown::HashMap;

/// Group margin as ratio of sums; `None` when revenue sums to zero
pub(crate) fn ratio_of_sums(profit: Money, revenue: Money) -> Option<Percent> {
    if revenue == 0.0 {
        None
    } else {
        Some(profit / revenue * 100.0)
    }
}

/// Round to two decimal places
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Partition a view's rows by a string key, groups in first-appearance order
pub(crate) fn group_rows<'a>(
    view: &View<'a>,
    key: impl Fn(&Transaction) -> &str,
) -> Vec<(String, Vec<&'a Transaction>)> {
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<&'a Transaction>)> = Vec::new();

    for tx in view.iter() {
        let k = key(tx);
        match index.get(k) {
            Some(&i) => groups[i].1.push(tx),
            None => {
                index.insert(k, groups.len());
                groups.push((k.to_string(), vec![tx]));
            }
        }
    }
    groups
}

pub(crate) fn sum_revenue(rows: &[&Transaction]) -> Money {
    rows.iter().map(|tx| tx.revenue).sum()
}

pub(crate) fn sum_profit(rows: &[&Transaction]) -> Money {
    rows.iter().map(|tx| tx.profit).sum()
}

/// Mean of per-row `profit_margin_pct`; caller guarantees a non-empty group
pub(crate) fn mean_margin(rows: &[&Transaction]) -> Percent {
    rows.iter().map(|tx| tx.profit_margin_pct).sum::<Percent>() / rows.len() as f64
}
