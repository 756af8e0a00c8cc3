//! Savings goal storage.

use anyhow::Result;
use chrono::NaiveDate;
use paisa_core::SavingsGoal;
use uuid::Uuid;

use crate::kv::{KvStore, keys, read_list, write_list};

pub struct GoalService<'a> {
    store: &'a dyn KvStore,
}

impl<'a> GoalService<'a> {
    pub fn new(store: &'a dyn KvStore) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<SavingsGoal> {
        read_list(self.store, keys::GOALS)
    }

    pub fn add(&self, name: &str, target_amount: f64, deadline: NaiveDate) -> Result<SavingsGoal> {
        let goal = SavingsGoal::new(Uuid::new_v4().to_string(), name, target_amount, deadline);
        let mut all = self.list();
        all.push(goal.clone());
        write_list(self.store, keys::GOALS, &all)?;
        Ok(goal)
    }

    /// Add to a goal's running amount; returns the updated goal
    pub fn add_progress(&self, id: &str, amount: f64) -> Result<Option<SavingsGoal>> {
        let mut all = self.list();
        let Some(goal) = all.iter_mut().find(|g| g.id == id) else {
            return Ok(None);
        };
        goal.current_amount += amount;
        let updated = goal.clone();
        write_list(self.store, keys::GOALS, &all)?;
        Ok(Some(updated))
    }

    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut all = self.list();
        let before = all.len();
        all.retain(|g| g.id != id);
        if all.len() == before {
            return Ok(false);
        }
        write_list(self.store, keys::GOALS, &all)?;
        Ok(true)
    }
}
