//! Monthly report assembly from the aggregation layer.

use serde::{Deserialize, Serialize};

use crate::aggregate::{Period, category_breakdown, period_totals};
use crate::insights::top_category;
use crate::txn::Transaction;

/// One category row in a monthly report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportRow {
    pub category: String,
    pub amount: f64,
    pub percentage: f64,
}

/// A month's summary, regenerated on demand and cached wholesale
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyReport {
    /// "YYYY-MM"
    pub month: String,
    pub total_income: f64,
    pub total_expense: f64,
    pub net: f64,
    pub top_category: Option<String>,
    pub rows: Vec<ReportRow>,
}

/// Build the report for one calendar month
pub fn build_monthly_report(txns: &[Transaction], year: i32, month: u32) -> MonthlyReport {
    let period = Period::month(year, month);
    let totals = period_totals(txns, period);

    let in_month: Vec<Transaction> = txns
        .iter()
        .filter(|t| period.contains(t.date))
        .cloned()
        .collect();

    let rows = category_breakdown(txns, period)
        .into_iter()
        .map(|s| ReportRow {
            category: s.category,
            amount: s.amount,
            percentage: s.percentage,
        })
        .collect();

    MonthlyReport {
        month: period.label(),
        total_income: totals.income,
        total_expense: totals.expense,
        net: totals.net(),
        top_category: top_category(&in_month).map(|(name, _)| name),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::txn::TxnKind;
    use chrono::NaiveDate;

    fn txn(date: &str, amount: f64, category: &str, kind: TxnKind) -> Transaction {
        Transaction::new(
            format!("t-{date}-{amount}"),
            category,
            amount,
            category,
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            kind,
        )
    }

    #[test]
    fn test_report_totals_and_rows() {
        let txns = vec![
            txn("2024-05-01", 2000.0, "Salary", TxnKind::Income),
            txn("2024-05-05", 600.0, "Food", TxnKind::Expense),
            txn("2024-05-09", 400.0, "Transport", TxnKind::Expense),
            txn("2024-06-01", 999.0, "Food", TxnKind::Expense),
        ];
        let report = build_monthly_report(&txns, 2024, 5);
        assert_eq!(report.month, "2024-05");
        assert_eq!(report.total_income, 2000.0);
        assert_eq!(report.total_expense, 1000.0);
        assert_eq!(report.net, 1000.0);
        assert_eq!(report.top_category.as_deref(), Some("Food"));
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].category, "Food");
        assert!((report.rows[0].percentage - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_month_report() {
        let report = build_monthly_report(&[], 2024, 5);
        assert_eq!(report.total_expense, 0.0);
        assert_eq!(report.top_category, None);
        assert!(report.rows.is_empty());
    }
}
