//! Chart-point shaping for the presentation layer.
//!
//! Pure reshaping of already-computed aggregates; no independent math.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::aggregate::{CategorySlice, Period, category_color, daily_expense_totals};
use crate::txn::Transaction;

/// One point in a chart series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
    pub color: String,
}

/// Category breakdown as pie/bar chart points, preserving slice order
pub fn breakdown_chart(slices: &[CategorySlice]) -> Vec<ChartPoint> {
    slices
        .iter()
        .map(|s| ChartPoint {
            label: s.category.clone(),
            value: s.amount,
            color: category_color(&s.category).to_string(),
        })
        .collect()
}

/// Daily expense totals for one month, ordered by date ascending
pub fn daily_series(txns: &[Transaction], year: i32, month: u32) -> Vec<ChartPoint> {
    let period = Period::month(year, month);
    let in_month: Vec<Transaction> = txns
        .iter()
        .filter(|t| period.contains(t.date))
        .cloned()
        .collect();

    daily_expense_totals(&in_month)
        .into_iter()
        .map(|(date, total)| ChartPoint {
            label: date.format("%Y-%m-%d").to_string(),
            value: total,
            color: category_color("expense").to_string(),
        })
        .collect()
}

/// Expense totals for the last `months` calendar months including the
/// current one, ordered by month label ascending
pub fn monthly_series(txns: &[Transaction], months: u32, today: NaiveDate) -> Vec<ChartPoint> {
    if months == 0 {
        return Vec::new();
    }

    let mut by_month: HashMap<String, f64> = HashMap::new();
    for t in txns.iter().filter(|t| t.is_expense()) {
        let key = format!("{:04}-{:02}", t.date.year(), t.date.month());
        *by_month.entry(key).or_insert(0.0) += t.amount;
    }

    let floor = {
        let total = today.year() * 12 + today.month() as i32 - 1 - (months as i32 - 1);
        format!(
            "{:04}-{:02}",
            total.div_euclid(12),
            total.rem_euclid(12) + 1
        )
    };

    let mut series: Vec<ChartPoint> = by_month
        .into_iter()
        .filter(|(label, _)| label.as_str() >= floor.as_str())
        .map(|(label, value)| ChartPoint {
            label,
            value,
            color: category_color("expense").to_string(),
        })
        .collect();
    series.sort_by(|a, b| a.label.cmp(&b.label));
    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::category_breakdown;
    use crate::txn::TxnKind;

    fn expense(date: &str, amount: f64, category: &str) -> Transaction {
        Transaction::new(
            format!("t-{date}-{amount}"),
            category,
            amount,
            category,
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            TxnKind::Expense,
        )
    }

    #[test]
    fn test_breakdown_chart_mirrors_slices() {
        let txns = vec![
            expense("2024-05-01", 300.0, "Food"),
            expense("2024-05-02", 100.0, "Transport"),
        ];
        let slices = category_breakdown(&txns, Period::month(2024, 5));
        let points = breakdown_chart(&slices);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].label, "Food");
        assert_eq!(points[0].value, 300.0);
        assert_eq!(points[0].color, category_color("Food"));
    }

    #[test]
    fn test_daily_series_sorted_ascending() {
        let txns = vec![
            expense("2024-05-20", 50.0, "Food"),
            expense("2024-05-01", 70.0, "Food"),
            expense("2024-06-01", 999.0, "Food"),
        ];
        let points = daily_series(&txns, 2024, 5);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].label, "2024-05-01");
        assert_eq!(points[1].label, "2024-05-20");
    }

    #[test]
    fn test_monthly_series_window() {
        let txns = vec![
            expense("2024-01-10", 100.0, "Food"),
            expense("2024-04-10", 200.0, "Food"),
            expense("2024-05-10", 300.0, "Food"),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        let points = monthly_series(&txns, 3, today);
        // January falls outside the 3-month window
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].label, "2024-04");
        assert_eq!(points[1].label, "2024-05");
    }
}
