//! User budgets and suggestion acceptance.

use anyhow::Result;
use chrono::NaiveDate;
use paisa_core::{BudgetSuggestion, Transaction, UserBudget, suggest_budgets};

use crate::kv::{KvStore, keys, read_list, write_list};

pub struct BudgetService<'a> {
    store: &'a dyn KvStore,
}

impl<'a> BudgetService<'a> {
    pub fn new(store: &'a dyn KvStore) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<UserBudget> {
        read_list(self.store, keys::BUDGETS)
    }

    /// Upsert the budget for a category (case-insensitive match)
    pub fn set(&self, category: &str, monthly_limit: f64) -> Result<UserBudget> {
        let mut all = self.list();
        if let Some(existing) = all
            .iter_mut()
            .find(|b| b.category.eq_ignore_ascii_case(category))
        {
            existing.monthly_limit = monthly_limit;
            let updated = existing.clone();
            write_list(self.store, keys::BUDGETS, &all)?;
            return Ok(updated);
        }

        let budget = UserBudget {
            category: category.to_string(),
            monthly_limit,
        };
        all.push(budget.clone());
        write_list(self.store, keys::BUDGETS, &all)?;
        Ok(budget)
    }

    pub fn remove(&self, category: &str) -> Result<bool> {
        let mut all = self.list();
        let before = all.len();
        all.retain(|b| !b.category.eq_ignore_ascii_case(category));
        if all.len() == before {
            return Ok(false);
        }
        write_list(self.store, keys::BUDGETS, &all)?;
        Ok(true)
    }

    /// Ephemeral suggestions for categories without a budget yet
    pub fn suggestions(&self, txns: &[Transaction], today: NaiveDate) -> Vec<BudgetSuggestion> {
        suggest_budgets(txns, &self.list(), today)
    }

    /// Accept a pending suggestion, converting it into a user budget
    pub fn accept(&self, suggestion: BudgetSuggestion) -> Result<UserBudget> {
        let budget = suggestion.into_budget();
        self.set(&budget.category, budget.monthly_limit)
    }
}
