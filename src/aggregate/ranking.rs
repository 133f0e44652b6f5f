//! Top/bottom-N rankings by product, customer, and state
//!
//! All rankings use a stable sort, so ties keep first-appearance order.
//! Margin rankings rank by the exact ratio-of-sums value and round only
//! the final output; groups with zero summed revenue have an undefined
//! margin and sort after every defined value in either direction.

use super::{group_rows, ratio_of_sums, round2, sum_profit, sum_revenue};
use crate::table::View;
use crate::types::{Money, Percent, Transaction};
use serde::Serialize;
use std::cmp::Ordering;

/// Product rankings keep the ten best/worst groups
pub const PRODUCT_RANK_LIMIT: usize = 10;
/// Customer rankings keep five
pub const CUSTOMER_RANK_LIMIT: usize = 5;
/// State rankings keep five
pub const STATE_RANK_LIMIT: usize = 5;

/// Ranking direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RankOrder {
    /// Largest values first
    Top,
    /// Smallest values first
    Bottom,
}

/// One row of a revenue ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueRank {
    pub label: String,
    pub revenue: Money,
}

/// One row of a margin ranking; margin is ratio-of-sums, rounded to 2dp
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarginRank {
    pub label: String,
    pub margin_pct: Option<Percent>,
}

/// Best/worst-selling products by summed revenue (limit 10)
pub fn products_by_revenue(view: &View<'_>, order: RankOrder) -> Vec<RevenueRank> {
    revenue_ranking(view, |tx| tx.product_name.as_str(), order, PRODUCT_RANK_LIMIT)
}

/// Most/least efficient products by grouped margin (limit 10)
pub fn products_by_margin(view: &View<'_>, order: RankOrder) -> Vec<MarginRank> {
    margin_ranking(view, |tx| tx.product_name.as_str(), order, PRODUCT_RANK_LIMIT)
}

/// Customers ranked by summed revenue (limit 5)
pub fn customers_by_revenue(view: &View<'_>, order: RankOrder) -> Vec<RevenueRank> {
    revenue_ranking(
        view,
        |tx| tx.customer_name.as_str(),
        order,
        CUSTOMER_RANK_LIMIT,
    )
}

/// Customers ranked by grouped margin (limit 5)
pub fn customers_by_margin(view: &View<'_>, order: RankOrder) -> Vec<MarginRank> {
    margin_ranking(
        view,
        |tx| tx.customer_name.as_str(),
        order,
        CUSTOMER_RANK_LIMIT,
    )
}

/// States ranked by summed revenue, labelled with full state names (limit 5)
pub fn states_by_revenue(view: &View<'_>, order: RankOrder) -> Vec<RevenueRank> {
    revenue_ranking(view, |tx| tx.state_name.as_str(), order, STATE_RANK_LIMIT)
}

fn revenue_ranking(
    view: &View<'_>,
    key: impl Fn(&Transaction) -> &str,
    order: RankOrder,
    limit: usize,
) -> Vec<RevenueRank> {
    let mut ranks: Vec<RevenueRank> = group_rows(view, key)
        .into_iter()
        .map(|(label, rows)| RevenueRank {
            label,
            revenue: sum_revenue(&rows),
        })
        .collect();

    ranks.sort_by(|a, b| directed(a.revenue.total_cmp(&b.revenue), order));
    ranks.truncate(limit);
    ranks
}

fn margin_ranking(
    view: &View<'_>,
    key: impl Fn(&Transaction) -> &str,
    order: RankOrder,
    limit: usize,
) -> Vec<MarginRank> {
    let mut ranks: Vec<MarginRank> = group_rows(view, key)
        .into_iter()
        .map(|(label, rows)| MarginRank {
            label,
            margin_pct: ratio_of_sums(sum_profit(&rows), sum_revenue(&rows)),
        })
        .collect();

    ranks.sort_by(|a, b| cmp_optional(a.margin_pct, b.margin_pct, order));
    ranks.truncate(limit);
    for rank in &mut ranks {
        rank.margin_pct = rank.margin_pct.map(round2);
    }
    ranks
}

fn directed(ascending: Ordering, order: RankOrder) -> Ordering {
    match order {
        RankOrder::Top => ascending.reverse(),
        RankOrder::Bottom => ascending,
    }
}

/// Undefined margins rank last regardless of direction
fn cmp_optional(a: Option<f64>, b: Option<f64>, order: RankOrder) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => directed(a.total_cmp(&b), order),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
