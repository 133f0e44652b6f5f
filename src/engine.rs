//! Analytics engine facade
//!
//! Owns the loaded table plus its selectors and exposes one method per
//! dashboard view. Each call validates the filter spec, builds the view,
//! and runs the aggregation; this is the whole surface the presentation
//! layer talks to.

use crate::aggregate::{
    channel_breakdown, customer_profiles, customers_by_margin, customers_by_revenue,
    kpi_summary, monthly_profit, monthly_revenue, order_value_distribution,
    price_margin_scatter, products_by_margin, products_by_revenue, region_margin,
    region_revenue, state_revenue, states_by_revenue, ChannelBreakdown, CustomerProfile,
    KpiSummary, MarginRank, MonthlyPoint, OrderValue, PricePoint, RankOrder, RegionMargin,
    RegionRevenue, RevenueRank, StateRevenue,
};
use crate::error::Result;
use crate::filter::FilterSpec;
use crate::loader::load_csv;
use crate::selectors::Selectors;
use crate::table::{Table, View};
use std::path::Path;

/// One session's analytics engine: an immutable table and its selectors
#[derive(Debug)]
pub struct AnalyticsEngine {
    table: Table,
    selectors: Selectors,
}

impl AnalyticsEngine {
    /// Load the dataset from a CSV file; fatal for the session on failure
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(load_csv(path)?))
    }

    /// Wrap an already-built table (synthetic tables in tests)
    pub fn new(table: Table) -> Self {
        let selectors = Selectors::from_table(&table);
        Self { table, selectors }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Distinct filter values discovered from the unfiltered table
    pub fn selectors(&self) -> &Selectors {
        &self.selectors
    }

    /// Validate a spec against the selectors, then filter
    fn view(&self, spec: &FilterSpec) -> Result<View<'_>> {
        self.selectors.validate(spec)?;
        Ok(spec.apply(&self.table))
    }

    pub fn kpi_summary(&self, spec: &FilterSpec) -> Result<KpiSummary> {
        Ok(kpi_summary(&self.view(spec)?))
    }

    pub fn monthly_revenue(&self, spec: &FilterSpec) -> Result<Vec<MonthlyPoint>> {
        Ok(monthly_revenue(&self.view(spec)?))
    }

    pub fn monthly_profit(&self, spec: &FilterSpec) -> Result<Vec<MonthlyPoint>> {
        Ok(monthly_profit(&self.view(spec)?))
    }

    pub fn order_value_distribution(&self, spec: &FilterSpec) -> Result<Vec<OrderValue>> {
        Ok(order_value_distribution(&self.view(spec)?))
    }

    pub fn price_margin_scatter(&self, spec: &FilterSpec) -> Result<Vec<PricePoint>> {
        Ok(price_margin_scatter(&self.view(spec)?))
    }

    pub fn products_by_revenue(
        &self,
        spec: &FilterSpec,
        order: RankOrder,
    ) -> Result<Vec<RevenueRank>> {
        Ok(products_by_revenue(&self.view(spec)?, order))
    }

    pub fn products_by_margin(
        &self,
        spec: &FilterSpec,
        order: RankOrder,
    ) -> Result<Vec<MarginRank>> {
        Ok(products_by_margin(&self.view(spec)?, order))
    }

    pub fn customers_by_revenue(
        &self,
        spec: &FilterSpec,
        order: RankOrder,
    ) -> Result<Vec<RevenueRank>> {
        Ok(customers_by_revenue(&self.view(spec)?, order))
    }

    pub fn customers_by_margin(
        &self,
        spec: &FilterSpec,
        order: RankOrder,
    ) -> Result<Vec<MarginRank>> {
        Ok(customers_by_margin(&self.view(spec)?, order))
    }

    pub fn states_by_revenue(
        &self,
        spec: &FilterSpec,
        order: RankOrder,
    ) -> Result<Vec<RevenueRank>> {
        Ok(states_by_revenue(&self.view(spec)?, order))
    }

    pub fn customer_profiles(&self, spec: &FilterSpec) -> Result<Vec<CustomerProfile>> {
        Ok(customer_profiles(&self.view(spec)?))
    }

    pub fn channel_breakdown(&self, spec: &FilterSpec) -> Result<Vec<ChannelBreakdown>> {
        Ok(channel_breakdown(&self.view(spec)?))
    }

    pub fn region_revenue(&self, spec: &FilterSpec) -> Result<Vec<RegionRevenue>> {
        Ok(region_revenue(&self.view(spec)?))
    }

    pub fn region_margin(&self, spec: &FilterSpec) -> Result<Vec<RegionMargin>> {
        Ok(region_margin(&self.view(spec)?))
    }

    pub fn state_revenue(&self, spec: &FilterSpec) -> Result<Vec<StateRevenue>> {
        Ok(state_revenue(&self.view(spec)?))
    }
}
