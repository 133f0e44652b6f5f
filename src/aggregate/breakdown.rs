//! Channel, region, state, and customer breakdowns
//!
//! The margin measures here are deliberately not uniform: the channel and
//! region breakdowns and the customer profiles report a mean of per-row
//! margins, while the rankings in [`super::ranking`] recompute margins from
//! grouped sums. Each view keeps the formula its dashboard chart was built
//! around.

use super::{group_rows, mean_margin, round2, sum_profit, sum_revenue};
use crate::table::View;
use crate::types::{Money, Percent};
use hashbrown::HashSet;
use serde::Serialize;

/// Per-channel totals, all measures rounded to two decimals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelBreakdown {
    pub channel: String,
    pub total_revenue: Money,
    pub total_profit: Money,
    /// Mean of per-row `profit_margin_pct`
    pub margin_per_sale: Percent,
}

/// Revenue, profit, and mean margin per sales channel
///
/// Channels appear in first-appearance order; this one view rounds its
/// measures to two decimals before handing them out.
pub fn channel_breakdown(view: &View<'_>) -> Vec<ChannelBreakdown> {
    group_rows(view, |tx| tx.channel.as_str())
        .into_iter()
        .map(|(channel, rows)| ChannelBreakdown {
            channel,
            total_revenue: round2(sum_revenue(&rows)),
            total_profit: round2(sum_profit(&rows)),
            margin_per_sale: round2(mean_margin(&rows)),
        })
        .collect()
}

/// Revenue summed per region
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionRevenue {
    pub region: String,
    pub revenue: Money,
}

/// Region revenue totals, ascending by region name
pub fn region_revenue(view: &View<'_>) -> Vec<RegionRevenue> {
    let mut rows: Vec<RegionRevenue> = group_rows(view, |tx| tx.us_region.as_str())
        .into_iter()
        .map(|(region, rows)| RegionRevenue {
            region,
            revenue: sum_revenue(&rows),
        })
        .collect();
    rows.sort_by(|a, b| a.region.cmp(&b.region));
    rows
}

/// Mean margin per region
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionMargin {
    pub region: String,
    /// Mean of per-row `profit_margin_pct`
    pub margin_pct: Percent,
}

/// Region mean margins, ascending by region name
pub fn region_margin(view: &View<'_>) -> Vec<RegionMargin> {
    let mut rows: Vec<RegionMargin> = group_rows(view, |tx| tx.us_region.as_str())
        .into_iter()
        .map(|(region, rows)| RegionMargin {
            region,
            margin_pct: mean_margin(&rows),
        })
        .collect();
    rows.sort_by(|a, b| a.region.cmp(&b.region));
    rows
}

/// Revenue summed per state code, for the choropleth map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateRevenue {
    /// Two-letter state code
    pub state: String,
    pub revenue: Money,
}

/// State revenue totals keyed by state code, first-appearance order
pub fn state_revenue(view: &View<'_>) -> Vec<StateRevenue> {
    group_rows(view, |tx| tx.state.as_str())
        .into_iter()
        .map(|(state, rows)| StateRevenue {
            state,
            revenue: sum_revenue(&rows),
        })
        .collect()
}

/// Per-customer revenue/margin position for the strategic-profit scatter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerProfile {
    pub customer_name: String,
    pub total_revenue: Money,
    pub total_profit: Money,
    /// Mean of per-row `profit_margin_pct`
    pub average_margin_pct: Percent,
    /// Count of distinct order numbers
    pub order_count: usize,
}

/// Customer-level totals in first-appearance order
pub fn customer_profiles(view: &View<'_>) -> Vec<CustomerProfile> {
    group_rows(view, |tx| tx.customer_name.as_str())
        .into_iter()
        .map(|(customer_name, rows)| {
            let orders: HashSet<&str> =
                rows.iter().map(|tx| tx.order_number.as_str()).collect();
            CustomerProfile {
                customer_name,
                total_revenue: sum_revenue(&rows),
                total_profit: sum_profit(&rows),
                average_margin_pct: mean_margin(&rows),
                order_count: orders.len(),
            }
        })
        .collect()
}
