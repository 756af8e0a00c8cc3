//! Monthly report generation and caching.
//!
//! Reports are regenerated on demand; the cached list is overwritten
//! wholesale, last write wins.

use anyhow::Result;
use paisa_core::{MonthlyReport, Transaction, build_monthly_report};

use crate::kv::{KvStore, keys, read_list, write_list};

pub struct ReportService<'a> {
    store: &'a dyn KvStore,
}

impl<'a> ReportService<'a> {
    pub fn new(store: &'a dyn KvStore) -> Self {
        Self { store }
    }

    pub fn cached(&self, month: &str) -> Option<MonthlyReport> {
        read_list(self.store, keys::REPORTS)
            .into_iter()
            .find(|r: &MonthlyReport| r.month == month)
    }

    /// Build the report for a month and replace any cached copy
    pub fn generate(
        &self,
        txns: &[Transaction],
        year: i32,
        month: u32,
    ) -> Result<MonthlyReport> {
        let report = build_monthly_report(txns, year, month);
        let mut all: Vec<MonthlyReport> = read_list(self.store, keys::REPORTS);
        all.retain(|r| r.month != report.month);
        all.push(report.clone());
        write_list(self.store, keys::REPORTS, &all)?;
        Ok(report)
    }
}
