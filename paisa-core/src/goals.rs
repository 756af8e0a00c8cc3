//! Savings goals with a derived weekly target.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A savings goal with a deadline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingsGoal {
    pub id: String,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: NaiveDate,
}

impl SavingsGoal {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        target_amount: f64,
        deadline: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            target_amount,
            current_amount: 0.0,
            deadline,
        }
    }

    /// Remaining amount divided across the weeks until the deadline.
    /// The week count is clamped to a minimum of one; a met goal gives 0.
    pub fn weekly_target(&self, today: NaiveDate) -> f64 {
        let remaining = (self.target_amount - self.current_amount).max(0.0);
        if remaining == 0.0 {
            return 0.0;
        }
        let days = self.deadline.signed_duration_since(today).num_days().max(0);
        let weeks = (days as f64 / 7.0).ceil().max(1.0);
        remaining / weeks
    }

    /// Fraction saved so far, clamped to [0, 1]
    pub fn progress(&self) -> f64 {
        if self.target_amount <= 0.0 {
            return 1.0;
        }
        (self.current_amount / self.target_amount).clamp(0.0, 1.0)
    }

    pub fn is_met(&self) -> bool {
        self.current_amount >= self.target_amount
    }
}
