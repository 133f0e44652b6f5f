//! Equality filters over the transaction table
//!
//! A [`FilterSpec`] carries up to four optional predicates (year, month,
//! region, channel). Unset fields impose no constraint; set fields AND
//! together. Applying a spec never mutates the table and never fails: a
//! selection that matches nothing yields an empty view.

use crate::table::{Table, View};
use crate::types::{Transaction, Year};

/// Filter selections for one render cycle
///
/// Presence is tagged per dimension (`None` = no constraint) so no sentinel
/// value can collide with legitimate data. Built fresh from user input each
/// cycle and treated as immutable once applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    pub year: Option<Year>,
    pub month: Option<String>,
    pub region: Option<String>,
    pub channel: Option<String>,
}

impl FilterSpec {
    /// Spec with no constraints; matches every row
    pub fn new() -> Self {
        Self::default()
    }

    pub fn year(mut self, year: Year) -> Self {
        self.year = Some(year);
        self
    }

    pub fn month(mut self, month: impl Into<String>) -> Self {
        self.month = Some(month.into());
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// True when no dimension is constrained
    pub fn is_unconstrained(&self) -> bool {
        self.year.is_none()
            && self.month.is_none()
            && self.region.is_none()
            && self.channel.is_none()
    }

    /// Conjunction of the active predicates
    ///
    /// Month, region, and channel compare case-sensitively; year compares
    /// the year component of `order_date`.
    pub fn matches(&self, tx: &Transaction) -> bool {
        if let Some(year) = self.year {
            if tx.order_year() != year {
                return false;
            }
        }
        if let Some(month) = &self.month {
            if tx.order_month_name != *month {
                return false;
            }
        }
        if let Some(region) = &self.region {
            if tx.us_region != *region {
                return false;
            }
        }
        if let Some(channel) = &self.channel {
            if tx.channel != *channel {
                return false;
            }
        }
        true
    }

    /// Filter a table down to the rows matching every active predicate
    pub fn apply<'a>(&self, table: &'a Table) -> View<'a> {
        View::from_refs(table.rows().iter().filter(|tx| self.matches(tx)).collect())
    }
}

impl<'a> View<'a> {
    /// Narrow an existing view with further predicates
    ///
    /// Refining with the spec that produced the view is a no-op.
    pub fn refine(&self, spec: &FilterSpec) -> View<'a> {
        View::from_refs(self.iter().filter(|tx| spec.matches(tx)).collect())
    }
}
