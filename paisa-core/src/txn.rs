//! Transaction and category records shared across the workspace.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Direction of a transaction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TxnKind {
    #[serde(rename = "expense")]
    Expense,
    #[serde(rename = "income")]
    Income,
}

/// A single recorded transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Unique identifier for this record
    pub id: String,
    /// Human-readable title
    pub title: String,
    /// Always positive; direction comes from `kind`
    pub amount: f64,
    /// Free-form category name, matched against the user's category list
    pub category: String,
    /// Calendar date (no time zone)
    pub date: NaiveDate,
    /// Optional free-text note
    #[serde(default)]
    pub note: Option<String>,
    pub kind: TxnKind,
    /// Need/want flag, either heuristic-assigned or user-set
    #[serde(default)]
    pub is_need: bool,
    /// Optional profile tag; unknown values read as the default profile
    #[serde(default)]
    pub profile_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new Transaction stamped with the current time
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        date: NaiveDate,
        kind: TxnKind,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            amount,
            category: category.into(),
            date,
            note: None,
            kind,
            is_need: false,
            profile_id: None,
            created_at: Utc::now(),
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TxnKind::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == TxnKind::Income
    }
}

/// A user-editable spending category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Hex color used by charts
    pub color: String,
    /// Icon name rendered by the presentation layer
    pub icon: String,
}

impl Category {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            icon: icon.into(),
        }
    }
}

/// The five starter categories seeded on first run
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("cat-food", "Food", "#e74c3c", "utensils"),
        Category::new("cat-transport", "Transport", "#3498db", "bus"),
        Category::new("cat-shopping", "Shopping", "#9b59b6", "bag"),
        Category::new("cat-bills", "Bills", "#f39c12", "receipt"),
        Category::new("cat-entertainment", "Entertainment", "#1abc9c", "film"),
    ]
}
