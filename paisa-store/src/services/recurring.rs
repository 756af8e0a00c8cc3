//! Recurring expenses billed on a fixed day of the month.

use anyhow::Result;
use paisa_core::RecurringExpense;
use uuid::Uuid;

use crate::kv::{KvStore, keys, read_list, write_list};

pub struct RecurringService<'a> {
    store: &'a dyn KvStore,
}

impl<'a> RecurringService<'a> {
    pub fn new(store: &'a dyn KvStore) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<RecurringExpense> {
        read_list(self.store, keys::RECURRING)
    }

    pub fn add(
        &self,
        title: &str,
        amount: f64,
        category: &str,
        day_of_month: u32,
    ) -> Result<RecurringExpense> {
        let entry = RecurringExpense {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            amount,
            category: category.to_string(),
            day_of_month,
            active: true,
        };
        let mut all = self.list();
        all.push(entry.clone());
        write_list(self.store, keys::RECURRING, &all)?;
        Ok(entry)
    }

    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut all = self.list();
        let before = all.len();
        all.retain(|r| r.id != id);
        if all.len() == before {
            return Ok(false);
        }
        write_list(self.store, keys::RECURRING, &all)?;
        Ok(true)
    }

    /// Active entries due in the given month, with their due dates
    pub fn due_in_month(&self, year: i32, month: u32) -> Vec<(RecurringExpense, chrono::NaiveDate)> {
        self.list()
            .into_iter()
            .filter(|r| r.active)
            .filter_map(|r| r.due_in_month(year, month).map(|d| (r, d)))
            .collect()
    }
}
