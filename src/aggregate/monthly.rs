//! Monthly revenue and profit series

use super::group_rows;
use crate::table::View;
use crate::types::{Money, MonthNum, Transaction};
use serde::Serialize;

/// One point of a month-keyed series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPoint {
    pub month_name: String,
    pub month_num: MonthNum,
    pub value: Money,
}

/// Revenue summed per month, ascending by month number
pub fn monthly_revenue(view: &View<'_>) -> Vec<MonthlyPoint> {
    monthly_sum(view, |tx| tx.revenue)
}

/// Profit summed per month, ascending by month number
pub fn monthly_profit(view: &View<'_>) -> Vec<MonthlyPoint> {
    monthly_sum(view, |tx| tx.profit)
}

fn monthly_sum(view: &View<'_>, measure: impl Fn(&Transaction) -> Money) -> Vec<MonthlyPoint> {
    let mut points: Vec<MonthlyPoint> = group_rows(view, |tx| tx.order_month_name.as_str())
        .into_iter()
        .map(|(month_name, rows)| MonthlyPoint {
            month_num: rows[0].order_month_num,
            month_name,
            value: rows.iter().map(|tx| measure(tx)).sum(),
        })
        .collect();

    points.sort_by_key(|p| p.month_num);
    points
}
