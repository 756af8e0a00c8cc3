//! Flat record types persisted one list per storage key.
//!
//! Cross-references between these lists are loose string tags checked
//! only at read time; nothing enforces referential integrity.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY: &str = "₹";

/// An income entry, separate from the transaction list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Income {
    pub id: String,
    pub source: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub recurring: bool,
}

/// A recurring subscription billed on a fixed day of the month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subscription {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub billing_day: u32,
    pub active: bool,
}

/// Monthly cost of all active subscriptions
pub fn subscriptions_monthly_total(subs: &[Subscription]) -> f64 {
    subs.iter().filter(|s| s.active).map(|s| s.amount).sum()
}

/// A transaction detected from a payment app export
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpiTransaction {
    pub id: String,
    pub counterparty: String,
    pub amount: f64,
    pub date: NaiveDate,
    /// Source app label (e.g. "gpay", "phonepe")
    pub app: String,
    /// Set once the entry has been imported into the transaction list
    #[serde(default)]
    pub imported: bool,
}

/// An expense that repeats on a fixed day of the month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecurringExpense {
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub day_of_month: u32,
    pub active: bool,
}

impl RecurringExpense {
    /// The date this expense falls due in the given month, clamping the
    /// configured day to the month's length
    pub fn due_in_month(&self, year: i32, month: u32) -> Option<NaiveDate> {
        let mut day = self.day_of_month.max(1);
        loop {
            match NaiveDate::from_ymd_opt(year, month, day) {
                Some(d) => return Some(d),
                None if day > 28 => day -= 1,
                None => return None,
            }
        }
    }
}

/// A user profile; transactions may carry a profile tag
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub currency_symbol: String,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            currency_symbol: DEFAULT_CURRENCY.to_string(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscriptions_total_skips_inactive() {
        let subs = vec![
            Subscription {
                id: "s-1".into(),
                name: "Music".into(),
                amount: 119.0,
                billing_day: 5,
                active: true,
            },
            Subscription {
                id: "s-2".into(),
                name: "Old gym".into(),
                amount: 999.0,
                billing_day: 1,
                active: false,
            },
        ];
        assert_eq!(subscriptions_monthly_total(&subs), 119.0);
    }

    #[test]
    fn test_recurring_due_date_clamps_to_month_end() {
        let rent = RecurringExpense {
            id: "r-1".into(),
            title: "Rent".into(),
            amount: 12000.0,
            category: "Bills".into(),
            day_of_month: 31,
            active: true,
        };
        assert_eq!(
            rent.due_in_month(2024, 4),
            NaiveDate::from_ymd_opt(2024, 4, 30)
        );
        assert_eq!(
            rent.due_in_month(2024, 2),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(
            rent.due_in_month(2024, 5),
            NaiveDate::from_ymd_opt(2024, 5, 31)
        );
    }
}
