//! paisa-core: domain records and the analytics pipeline for the paisa
//! expense tracker. Pure functions over in-memory record lists; all I/O
//! lives in paisa-store.

pub mod aggregate;
pub mod budget;
pub mod charts;
pub mod classify;
pub mod forecast;
pub mod goals;
pub mod insights;
pub mod records;
pub mod report;
pub mod txn;

pub use aggregate::{
    CategorySlice, Period, PeriodTotals, category_breakdown, category_color,
    daily_expense_totals, period_totals,
};
pub use budget::{
    BudgetSuggestion, CategoryStats, UserBudget, category_stats, suggest_budget, suggest_budgets,
};
pub use charts::{ChartPoint, breakdown_chart, daily_series, monthly_series};
pub use classify::{
    Classification, ClassifiedTransaction, NeedWant, NullLookup, TransactionLookup, classify,
    classify_with_history,
};
pub use forecast::{DailyForecast, RiskLevel, daily_forecast, days_in_month};
pub use goals::SavingsGoal;
pub use insights::{Insight, InsightKind, generate_insights, high_spending_days, top_category};
pub use records::{
    DEFAULT_CURRENCY, Income, Profile, RecurringExpense, Subscription, UpiTransaction,
    subscriptions_monthly_total,
};
pub use report::{MonthlyReport, ReportRow, build_monthly_report};
pub use txn::{Category, Transaction, TxnKind, default_categories};
