//! Dashboard aggregations: period totals and category breakdowns.
//!
//! Everything here is a full linear scan over the in-memory transaction
//! list. Periods are matched on the ISO date string: a day is an exact
//! match, a month is a prefix match.

use anyhow::Result;
use chrono::NaiveDate;
use std::collections::HashMap;

use crate::txn::Transaction;

/// A calendar day or a calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Day(NaiveDate),
    Month { year: i32, month: u32 },
}

impl Period {
    pub fn day(date: NaiveDate) -> Self {
        Period::Day(date)
    }

    pub fn month(year: i32, month: u32) -> Self {
        Period::Month { year, month }
    }

    /// The month containing `date`
    pub fn month_of(date: NaiveDate) -> Self {
        use chrono::Datelike;
        Period::Month {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parse "YYYY-MM-DD" as a day or "YYYY-MM" as a month
    pub fn parse(s: &str) -> Result<Self> {
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Period::Day(date));
        }
        let mut it = s.splitn(2, '-');
        let year: i32 = it
            .next()
            .and_then(|y| y.parse().ok())
            .ok_or_else(|| anyhow::anyhow!("invalid period: {s}"))?;
        let month: u32 = it
            .next()
            .and_then(|m| m.parse().ok())
            .filter(|m| (1..=12).contains(m))
            .ok_or_else(|| anyhow::anyhow!("invalid period: {s}"))?;
        Ok(Period::Month { year, month })
    }

    /// String-match semantics: exact for days, prefix for months
    pub fn contains(&self, date: NaiveDate) -> bool {
        let iso = date.format("%Y-%m-%d").to_string();
        match self {
            Period::Day(d) => iso == d.format("%Y-%m-%d").to_string(),
            Period::Month { year, month } => iso.starts_with(&format!("{year:04}-{month:02}")),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Period::Day(d) => d.format("%Y-%m-%d").to_string(),
            Period::Month { year, month } => format!("{year:04}-{month:02}"),
        }
    }
}

/// Income/expense totals for one period
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PeriodTotals {
    pub income: f64,
    pub expense: f64,
}

impl PeriodTotals {
    pub fn net(&self) -> f64 {
        self.income - self.expense
    }
}

/// Sum income and expense for the period in one pass
pub fn period_totals(txns: &[Transaction], period: Period) -> PeriodTotals {
    txns.iter()
        .filter(|t| period.contains(t.date))
        .fold(PeriodTotals::default(), |mut acc, t| {
            if t.is_income() {
                acc.income += t.amount;
            } else {
                acc.expense += t.amount;
            }
            acc
        })
}

/// One category's share of a period's expenses
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    pub category: String,
    pub amount: f64,
    /// Percentage of the period expense total; 0 when the total is 0
    pub percentage: f64,
}

/// Group the period's expenses by category and compute each group's share.
/// Ordering is total: amount descending, then category name ascending.
pub fn category_breakdown(txns: &[Transaction], period: Period) -> Vec<CategorySlice> {
    let mut by_category: HashMap<String, f64> = HashMap::new();
    for t in txns
        .iter()
        .filter(|t| t.is_expense() && period.contains(t.date))
    {
        *by_category.entry(t.category.clone()).or_insert(0.0) += t.amount;
    }

    let total: f64 = by_category.values().sum();
    let mut slices: Vec<CategorySlice> = by_category
        .into_iter()
        .map(|(category, amount)| CategorySlice {
            category,
            amount,
            percentage: if total > 0.0 {
                amount / total * 100.0
            } else {
                0.0
            },
        })
        .collect();

    slices.sort_by(|a, b| {
        b.amount
            .partial_cmp(&a.amount)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });
    slices
}

/// Expense totals per day, ordered by date ascending
pub fn daily_expense_totals(txns: &[Transaction]) -> Vec<(NaiveDate, f64)> {
    let mut by_day: HashMap<NaiveDate, f64> = HashMap::new();
    for t in txns.iter().filter(|t| t.is_expense()) {
        *by_day.entry(t.date).or_insert(0.0) += t.amount;
    }
    let mut days: Vec<_> = by_day.into_iter().collect();
    days.sort_by_key(|(d, _)| *d);
    days
}

/// Fixed chart palette; category colors hash into this
const PALETTE: [&str; 10] = [
    "#e74c3c", "#3498db", "#9b59b6", "#f39c12", "#1abc9c", "#e67e22", "#2ecc71", "#34495e",
    "#fd79a8", "#00b894",
];

/// Deterministic color for a category name. Collisions are accepted:
/// two categories can hash to the same palette slot.
pub fn category_color(name: &str) -> &'static str {
    let mut h: u32 = 0;
    for b in name.bytes() {
        h = h.wrapping_mul(31).wrapping_add(b as u32);
    }
    PALETTE[(h % PALETTE.len() as u32) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::txn::TxnKind;

    fn txn(date: &str, amount: f64, category: &str, kind: TxnKind) -> Transaction {
        Transaction::new(
            format!("t-{date}-{category}-{amount}"),
            category,
            amount,
            category,
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            kind,
        )
    }

    #[test]
    fn test_period_contains_prefix_semantics() {
        let may = Period::month(2024, 5);
        assert!(may.contains(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()));
        assert!(may.contains(NaiveDate::from_ymd_opt(2024, 5, 31).unwrap()));
        assert!(!may.contains(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));

        let day = Period::day(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
        assert!(day.contains(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()));
        assert!(!day.contains(NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()));
    }

    #[test]
    fn test_period_parse() {
        assert_eq!(Period::parse("2024-05").unwrap(), Period::month(2024, 5));
        assert_eq!(
            Period::parse("2024-05-02").unwrap(),
            Period::day(NaiveDate::from_ymd_opt(2024, 5, 2).unwrap())
        );
        assert!(Period::parse("garbage").is_err());
        assert!(Period::parse("2024-13").is_err());
    }

    #[test]
    fn test_period_totals_split_by_kind() {
        let txns = vec![
            txn("2024-05-01", 1000.0, "Salary", TxnKind::Income),
            txn("2024-05-02", 300.0, "Food", TxnKind::Expense),
            txn("2024-05-03", 200.0, "Transport", TxnKind::Expense),
            txn("2024-06-01", 999.0, "Food", TxnKind::Expense),
        ];
        let totals = period_totals(&txns, Period::month(2024, 5));
        assert_eq!(totals.income, 1000.0);
        assert_eq!(totals.expense, 500.0);
        assert_eq!(totals.net(), 500.0);
    }

    #[test]
    fn test_breakdown_sums_to_total() {
        let txns = vec![
            txn("2024-05-01", 120.0, "Food", TxnKind::Expense),
            txn("2024-05-02", 80.0, "Food", TxnKind::Expense),
            txn("2024-05-03", 50.0, "Transport", TxnKind::Expense),
            txn("2024-05-04", 250.0, "Shopping", TxnKind::Expense),
        ];
        let slices = category_breakdown(&txns, Period::month(2024, 5));
        let total = period_totals(&txns, Period::month(2024, 5)).expense;

        let slice_sum: f64 = slices.iter().map(|s| s.amount).sum();
        assert!((slice_sum - total).abs() < 1e-9);

        let pct_sum: f64 = slices.iter().map(|s| s.percentage).sum();
        assert!((pct_sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_empty_period_is_all_zero() {
        let txns = vec![txn("2024-05-01", 120.0, "Food", TxnKind::Expense)];
        let slices = category_breakdown(&txns, Period::month(2024, 7));
        assert!(slices.is_empty());
    }

    #[test]
    fn test_breakdown_ordering_is_total() {
        let txns = vec![
            txn("2024-05-01", 100.0, "Transport", TxnKind::Expense),
            txn("2024-05-02", 100.0, "Food", TxnKind::Expense),
            txn("2024-05-03", 300.0, "Shopping", TxnKind::Expense),
        ];
        let slices = category_breakdown(&txns, Period::month(2024, 5));
        assert_eq!(slices[0].category, "Shopping");
        // Equal amounts break ties by name ascending
        assert_eq!(slices[1].category, "Food");
        assert_eq!(slices[2].category, "Transport");
    }

    #[test]
    fn test_category_color_is_stable() {
        assert_eq!(category_color("Food"), category_color("Food"));
        let color = category_color("anything at all");
        assert!(PALETTE.contains(&color));
    }
}
