//! In-memory transaction table and read-only views

use crate::types::Transaction;

/// The loaded transaction dataset
///
/// Owns every row for the lifetime of a session and is shared read-only
/// across all filter and aggregation calls. There is no write path after
/// loading.
#[derive(Debug, Clone, Default)]
pub struct Table {
    rows: Vec<Transaction>,
}

impl Table {
    /// Build a table from already-parsed rows (synthetic tables in tests,
    /// or the loader's output)
    pub fn from_rows(rows: Vec<Transaction>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Transaction] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// View over every row, in table order
    pub fn view(&self) -> View<'_> {
        View {
            rows: self.rows.iter().collect(),
        }
    }
}

/// A read-only subset of a [`Table`]'s rows
///
/// Views borrow from the table, preserve table order, and are transient:
/// built per render cycle and discarded after the aggregations run. An
/// empty view is a valid value, not an error.
#[derive(Debug, Clone)]
pub struct View<'a> {
    rows: Vec<&'a Transaction>,
}

impl<'a> View<'a> {
    pub(crate) fn from_refs(rows: Vec<&'a Transaction>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[&'a Transaction] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Transaction> + '_ {
        self.rows.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
