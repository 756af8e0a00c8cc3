//! Budget suggestion heuristic.
//!
//! For each category without a user budget, the suggestion starts from the
//! recent average (or the overall mean), then gets scaled by volatility,
//! trend, and a seasonal multiplier. The reasoning string names every
//! adjustment that fired.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::txn::Transaction;

const VOLATILITY_THRESHOLD: f64 = 0.5;
const VOLATILITY_MULTIPLIER: f64 = 1.2;
const TREND_THRESHOLD: f64 = 0.1;
const TREND_UP_MULTIPLIER: f64 = 1.1;
const TREND_DOWN_MULTIPLIER: f64 = 0.9;
/// Recent average looks at the last this-many calendar months.
const RECENT_MONTHS: u32 = 3;

/// A category-scoped monthly spending target set by the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserBudget {
    pub category: String,
    pub monthly_limit: f64,
}

/// A proposed budget, pending until accepted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetSuggestion {
    pub category: String,
    /// Rounded to 2 decimal places
    pub suggested_amount: f64,
    pub reasoning: String,
    pub accepted: bool,
}

impl BudgetSuggestion {
    /// Convert an accepted suggestion into a user budget
    pub fn into_budget(self) -> UserBudget {
        UserBudget {
            category: self.category,
            monthly_limit: self.suggested_amount,
        }
    }
}

/// Summary statistics over one category's expense amounts
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CategoryStats {
    pub mean: f64,
    pub median: f64,
    /// Mean over the last three calendar months; falls back to `mean`
    /// when that window is empty
    pub recent_avg: f64,
    /// Coefficient of variation (std dev / mean), 0 when the mean is 0
    pub volatility: f64,
    /// First-half vs second-half ratio of the date-ordered amounts
    pub trend: f64,
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

fn std_dev(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// First day of the month `months_back` months before `today`'s month
fn month_floor(today: NaiveDate, months_back: u32) -> NaiveDate {
    let total = today.year() * 12 + today.month() as i32 - 1 - months_back as i32;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(today)
}

/// Compute stats over a category's expenses, ordered by date
pub fn category_stats(category: &str, txns: &[Transaction], today: NaiveDate) -> CategoryStats {
    let mut dated: Vec<(NaiveDate, f64)> = txns
        .iter()
        .filter(|t| t.is_expense() && t.category.eq_ignore_ascii_case(category))
        .map(|t| (t.date, t.amount))
        .collect();
    dated.sort_by_key(|(d, _)| *d);

    let amounts: Vec<f64> = dated.iter().map(|(_, a)| *a).collect();
    if amounts.is_empty() {
        return CategoryStats::default();
    }

    let mean_all = mean(&amounts);

    let recent_floor = month_floor(today, RECENT_MONTHS - 1);
    let recent: Vec<f64> = dated
        .iter()
        .filter(|(d, _)| *d >= recent_floor)
        .map(|(_, a)| *a)
        .collect();
    let recent_avg = if recent.is_empty() { mean_all } else { mean(&recent) };

    let volatility = if mean_all > 0.0 {
        std_dev(&amounts, mean_all) / mean_all
    } else {
        0.0
    };

    let trend = if amounts.len() >= 2 {
        let half = amounts.len() / 2;
        let first = mean(&amounts[..half]);
        let second = mean(&amounts[half..]);
        if first > 0.0 { (second - first) / first } else { 0.0 }
    } else {
        0.0
    };

    CategoryStats {
        mean: mean_all,
        median: median(&amounts),
        recent_avg,
        volatility,
        trend,
    }
}

/// Seasonal multiplier for the category in the given month.
/// Rules are checked in order; the first match wins.
fn seasonal_multiplier(category: &str, month: u32) -> (f64, Option<&'static str>) {
    let c = category.to_lowercase();
    if (11..=12).contains(&month) && (c.contains("shop") || c.contains("gift")) {
        return (1.3, Some("festive season"));
    }
    if (6..=9).contains(&month) && (c.contains("travel") || c.contains("entertain")) {
        return (1.2, Some("holiday months"));
    }
    if (8..=9).contains(&month) && (c.contains("edu") || c.contains("shop")) {
        return (1.15, Some("back-to-school"));
    }
    (1.0, None)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Suggest a budget for one category, or None when it has no expenses
pub fn suggest_budget(
    category: &str,
    txns: &[Transaction],
    today: NaiveDate,
) -> Option<BudgetSuggestion> {
    let stats = category_stats(category, txns, today);
    if stats.mean == 0.0 {
        return None;
    }

    let base = if stats.recent_avg > 0.0 { stats.recent_avg } else { stats.mean };
    let mut amount = base;
    let mut reasons = vec![format!("recent average {:.2}", base)];

    if stats.volatility > VOLATILITY_THRESHOLD {
        amount *= VOLATILITY_MULTIPLIER;
        reasons.push("+20% buffer for volatile spending".to_string());
    }
    if stats.trend > TREND_THRESHOLD {
        amount *= TREND_UP_MULTIPLIER;
        reasons.push("+10% for a rising trend".to_string());
    } else if stats.trend < -TREND_THRESHOLD {
        amount *= TREND_DOWN_MULTIPLIER;
        reasons.push("-10% for a falling trend".to_string());
    }

    let (seasonal, season_note) = seasonal_multiplier(category, today.month());
    if let Some(note) = season_note {
        amount *= seasonal;
        reasons.push(format!("x{seasonal:.2} for {note}"));
    }

    Some(BudgetSuggestion {
        category: category.to_string(),
        suggested_amount: round2(amount),
        reasoning: reasons.join("; "),
        accepted: false,
    })
}

/// Suggestions for every expense category without an existing user budget,
/// ordered by suggested amount descending
pub fn suggest_budgets(
    txns: &[Transaction],
    existing: &[UserBudget],
    today: NaiveDate,
) -> Vec<BudgetSuggestion> {
    let covered: BTreeSet<String> = existing
        .iter()
        .map(|b| b.category.to_lowercase())
        .collect();

    let categories: BTreeSet<String> = txns
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.category.clone())
        .collect();

    let mut suggestions: Vec<BudgetSuggestion> = categories
        .into_iter()
        .filter(|c| !covered.contains(&c.to_lowercase()))
        .filter_map(|c| suggest_budget(&c, txns, today))
        .collect();

    suggestions.sort_by(|a, b| {
        b.suggested_amount
            .partial_cmp(&a.suggested_amount)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });
    suggestions
}
