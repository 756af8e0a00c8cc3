//! Spending insights derived from the aggregation layer.
//!
//! All thresholds are fixed constants, matching the product behavior.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::aggregate::daily_expense_totals;
use crate::txn::Transaction;

/// A day is flagged when its expense total strictly exceeds this multiple
/// of the mean daily expense.
const HIGH_SPEND_FACTOR: f64 = 1.5;
/// At most this many high-spending days are reported.
const MAX_HIGH_SPEND_DAYS: usize = 3;
/// Average monthly spend above this triggers the reduction nudge.
const MONTHLY_SPEND_NUDGE: f64 = 1000.0;
/// Suggested flat reduction rate for the nudge.
const REDUCTION_RATE: f64 = 0.10;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum InsightKind {
    #[serde(rename = "high-spending-day")]
    HighSpendingDay,
    #[serde(rename = "top-category")]
    TopCategory,
    #[serde(rename = "savings-status")]
    SavingsStatus,
    #[serde(rename = "reduction-target")]
    ReductionTarget,
}

/// A single user-facing insight message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Insight {
    pub kind: InsightKind,
    pub message: String,
}

/// Days whose expense total strictly exceeds 1.5x the mean daily expense.
/// The mean is taken over days that have at least one expense. Ordered by
/// amount descending then date ascending, capped at three.
pub fn high_spending_days(txns: &[Transaction]) -> Vec<(NaiveDate, f64)> {
    let days = daily_expense_totals(txns);
    if days.is_empty() {
        return Vec::new();
    }

    let mean: f64 = days.iter().map(|(_, v)| v).sum::<f64>() / days.len() as f64;
    let mut flagged: Vec<(NaiveDate, f64)> = days
        .into_iter()
        .filter(|(_, total)| *total > mean * HIGH_SPEND_FACTOR)
        .collect();

    flagged.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    flagged.truncate(MAX_HIGH_SPEND_DAYS);
    flagged
}

/// The single highest-total expense category, ties broken by name ascending
pub fn top_category(txns: &[Transaction]) -> Option<(String, f64)> {
    let mut by_category: HashMap<String, f64> = HashMap::new();
    for t in txns.iter().filter(|t| t.is_expense()) {
        *by_category.entry(t.category.clone()).or_insert(0.0) += t.amount;
    }

    by_category.into_iter().min_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    })
}

/// Average expense total across the calendar months present in the data
pub fn average_monthly_spend(txns: &[Transaction]) -> f64 {
    let mut by_month: HashMap<(i32, u32), f64> = HashMap::new();
    for t in txns.iter().filter(|t| t.is_expense()) {
        *by_month
            .entry((t.date.year(), t.date.month()))
            .or_insert(0.0) += t.amount;
    }
    if by_month.is_empty() {
        return 0.0;
    }
    by_month.values().sum::<f64>() / by_month.len() as f64
}

/// Assemble the full insight list for a transaction set
pub fn generate_insights(txns: &[Transaction]) -> Vec<Insight> {
    let mut out = Vec::new();

    for (date, total) in high_spending_days(txns) {
        out.push(Insight {
            kind: InsightKind::HighSpendingDay,
            message: format!("High spending on {date}: {total:.2} in a single day"),
        });
    }

    if let Some((category, total)) = top_category(txns) {
        out.push(Insight {
            kind: InsightKind::TopCategory,
            message: format!("Most of your spending goes to {category} ({total:.2})"),
        });
    }

    let income: f64 = txns.iter().filter(|t| t.is_income()).map(|t| t.amount).sum();
    let expense: f64 = txns.iter().filter(|t| t.is_expense()).map(|t| t.amount).sum();
    if income > 0.0 || expense > 0.0 {
        let message = if income >= expense {
            format!("You are saving: income {income:.2} vs expenses {expense:.2}")
        } else {
            format!("You are overspending: expenses {expense:.2} vs income {income:.2}")
        };
        out.push(Insight {
            kind: InsightKind::SavingsStatus,
            message,
        });
    }

    let monthly = average_monthly_spend(txns);
    if monthly > MONTHLY_SPEND_NUDGE {
        let target = monthly * (1.0 - REDUCTION_RATE);
        out.push(Insight {
            kind: InsightKind::ReductionTarget,
            message: format!(
                "Average monthly spend is {monthly:.2}; try to bring it under {target:.2}"
            ),
        });
    }

    out
}
