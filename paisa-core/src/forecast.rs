//! Daily spending forecast against a monthly budget.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::aggregate::{Period, period_totals};
use crate::txn::Transaction;

const LOW_RISK_RATIO: f64 = 0.8;
const MEDIUM_RISK_RATIO: f64 = 1.2;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskLevel {
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "high")]
    High,
}

/// What is safe to spend today, given the month so far
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyForecast {
    pub spent_so_far: f64,
    pub remaining_budget: f64,
    /// Days left in the month, counting today
    pub days_left: u32,
    /// Remaining budget spread over the remaining days; never negative
    pub safe_to_spend: f64,
    pub risk: RiskLevel,
}

fn zeroed(risk: RiskLevel) -> DailyForecast {
    DailyForecast {
        spent_so_far: 0.0,
        remaining_budget: 0.0,
        days_left: 0,
        safe_to_spend: 0.0,
        risk,
    }
}

/// Number of days in the month containing `date`
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = (date.year(), date.month());
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next {
        Some(first_of_next) => first_of_next
            .signed_duration_since(NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date))
            .num_days() as u32,
        None => 30,
    }
}

/// Compute today's forecast from the full transaction list.
///
/// A non-finite or non-positive budget yields a zeroed forecast at high
/// risk rather than an error.
pub fn daily_forecast(
    txns: &[Transaction],
    monthly_budget: f64,
    today: NaiveDate,
) -> DailyForecast {
    if !monthly_budget.is_finite() || monthly_budget <= 0.0 {
        return zeroed(RiskLevel::High);
    }

    let spent = period_totals(txns, Period::month_of(today)).expense;
    let month_days = days_in_month(today);
    let days_left = month_days - today.day() + 1;

    let remaining = (monthly_budget - spent).max(0.0);
    let safe_to_spend = remaining / days_left as f64;

    // Compare actual spend against a linear proration of the budget
    let expected_so_far = monthly_budget * today.day() as f64 / month_days as f64;
    let ratio = spent / expected_so_far;
    let risk = if ratio < LOW_RISK_RATIO {
        RiskLevel::Low
    } else if ratio < MEDIUM_RISK_RATIO {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    };

    DailyForecast {
        spent_so_far: spent,
        remaining_budget: remaining,
        days_left,
        safe_to_spend,
        risk,
    }
}
