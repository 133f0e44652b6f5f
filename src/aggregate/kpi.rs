//! Headline KPI summary

use super::ratio_of_sums;
use crate::table::View;
use crate::types::{Money, Percent};
use serde::Serialize;

/// Scalar metrics shown at the top of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiSummary {
    pub total_revenue: Money,
    pub total_profit: Money,
    /// Ratio of sums; `None` when total revenue is zero
    pub profit_margin: Option<Percent>,
    /// Line-item count; order numbers are not deduplicated here
    pub total_orders: usize,
    /// `None` for an empty view
    pub revenue_per_order: Option<Money>,
}

/// Compute the KPI block for a filtered view
///
/// An empty view yields zero sums, a zero order count, and undefined
/// ratios. Never fails.
pub fn kpi_summary(view: &View<'_>) -> KpiSummary {
    let total_revenue: Money = view.iter().map(|tx| tx.revenue).sum();
    let total_profit: Money = view.iter().map(|tx| tx.profit).sum();
    let total_orders = view.len();

    KpiSummary {
        total_revenue,
        total_profit,
        profit_margin: ratio_of_sums(total_profit, total_revenue),
        total_orders,
        revenue_per_order: if total_orders == 0 {
            None
        } else {
            Some(total_revenue / total_orders as f64)
        },
    }
}
