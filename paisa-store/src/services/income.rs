//! Income entries, stored separately from the transaction list.

use anyhow::Result;
use chrono::NaiveDate;
use paisa_core::Income;
use uuid::Uuid;

use crate::kv::{KvStore, keys, read_list, write_list};

pub struct IncomeService<'a> {
    store: &'a dyn KvStore,
}

impl<'a> IncomeService<'a> {
    pub fn new(store: &'a dyn KvStore) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<Income> {
        read_list(self.store, keys::INCOME)
    }

    pub fn add(
        &self,
        source: &str,
        amount: f64,
        date: NaiveDate,
        recurring: bool,
    ) -> Result<Income> {
        let entry = Income {
            id: Uuid::new_v4().to_string(),
            source: source.to_string(),
            amount,
            date,
            recurring,
        };
        let mut all = self.list();
        all.push(entry.clone());
        write_list(self.store, keys::INCOME, &all)?;
        Ok(entry)
    }

    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut all = self.list();
        let before = all.len();
        all.retain(|i| i.id != id);
        if all.len() == before {
            return Ok(false);
        }
        write_list(self.store, keys::INCOME, &all)?;
        Ok(true)
    }

    pub fn total(&self) -> f64 {
        self.list().iter().map(|i| i.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    #[test]
    fn test_income_lifecycle() {
        let store = MemoryStore::new();
        let svc = IncomeService::new(&store);
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

        let salary = svc.add("Salary", 45000.0, date, true).unwrap();
        svc.add("Freelance", 8000.0, date, false).unwrap();
        assert_eq!(svc.total(), 53000.0);

        assert!(svc.delete(&salary.id).unwrap());
        assert_eq!(svc.total(), 8000.0);
    }
}
