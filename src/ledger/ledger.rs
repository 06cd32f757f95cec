use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::record::{Record, RecordKind};

/// Ordered collection of records plus id-assignment state.
///
/// Insertion order is display and export order. Ids are assigned 0, 1, 2, …
/// and never reused; records are immutable once added.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    records: Vec<Record>,
    #[serde(default)]
    next_id: u64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record dated today (UTC calendar date) and returns its id.
    ///
    /// Amount sign and kind are taken as given; input is validated at the
    /// shell boundary, not here.
    pub fn add(&mut self, amount: f64, category: impl Into<String>, kind: RecordKind) -> u64 {
        self.add_on(Utc::now().date_naive(), amount, category, kind)
    }

    /// Appends a record with an explicit date and returns its id.
    pub fn add_on(
        &mut self,
        date: NaiveDate,
        amount: f64,
        category: impl Into<String>,
        kind: RecordKind,
    ) -> u64 {
        let record = Record {
            id: self.next_id,
            amount,
            category: category.into(),
            date,
            kind,
        };
        debug!(id = record.id, amount, kind = %record.kind, "record added");
        let id = record.id;
        self.records.push(record);
        self.next_id += 1;
        id
    }

    /// Iterates records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sums amounts over records whose kind matches exactly.
    ///
    /// Linear scan, recomputed on every call. Returns 0.0 when nothing
    /// matches.
    pub fn total(&self, kind: &RecordKind) -> f64 {
        self.records
            .iter()
            .filter(|record| &record.kind == kind)
            .map(|record| record.amount)
            .sum()
    }

    /// Per-category sums, keyed alphabetically.
    pub fn category_totals(&self) -> BTreeMap<String, f64> {
        let mut totals = BTreeMap::new();
        for record in &self.records {
            *totals.entry(record.category.clone()).or_insert(0.0) += record.amount;
        }
        totals
    }

    /// Income, expense, and net totals for display.
    ///
    /// Records whose kind is neither `income` nor `expense` count toward
    /// neither side.
    pub fn summary(&self) -> LedgerSummary {
        let income = self.total(&RecordKind::Income);
        let expense = self.total(&RecordKind::Expense);
        LedgerSummary {
            record_count: self.records.len(),
            income,
            expense,
            net: income - expense,
        }
    }
}

/// Totals reported by [`Ledger::summary`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub record_count: usize,
    pub income: f64,
    pub expense: f64,
    pub net: f64,
}
