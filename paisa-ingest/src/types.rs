use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Normalized output of statement parsers (source-agnostic)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementTransaction {
    pub date: NaiveDate,
    pub description: String,
    /// Positive number means charge/spend; negative means credit/refund.
    pub amount: f64,
    pub raw_category: Option<String>,
    /// Source label ("csv", or a payment app name)
    pub source: String,
}
