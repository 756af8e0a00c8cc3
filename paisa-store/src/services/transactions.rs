//! Transaction CRUD over the record store.
//!
//! Every mutation is read-whole-list, transform, write-whole-list. Two
//! near-simultaneous writers on the same key can lose an update; nothing
//! guards against that.

use anyhow::Result;
use chrono::NaiveDate;
use paisa_core::{Transaction, TxnKind};
use uuid::Uuid;

use crate::kv::{KvStore, keys, read_list, write_list};

/// Fields supplied by the input form when recording a transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    pub note: Option<String>,
    pub kind: TxnKind,
    pub profile_id: Option<String>,
}

pub struct TransactionService<'a> {
    store: &'a dyn KvStore,
}

impl<'a> TransactionService<'a> {
    pub fn new(store: &'a dyn KvStore) -> Self {
        Self { store }
    }

    /// All stored transactions; missing or corrupt data reads as empty
    pub fn list(&self) -> Vec<Transaction> {
        read_list(self.store, keys::TRANSACTIONS)
    }

    /// Append a new record with a fresh id and creation timestamp
    pub fn add(&self, draft: NewTransaction) -> Result<Transaction> {
        let mut txn = Transaction::new(
            Uuid::new_v4().to_string(),
            draft.title,
            draft.amount,
            draft.category,
            draft.date,
            draft.kind,
        );
        txn.note = draft.note;
        txn.profile_id = draft.profile_id;

        let mut all = self.list();
        all.push(txn.clone());
        write_list(self.store, keys::TRANSACTIONS, &all)?;
        Ok(txn)
    }

    /// Replace the record with the same id; returns false when absent
    pub fn update(&self, updated: &Transaction) -> Result<bool> {
        let mut all = self.list();
        let Some(slot) = all.iter_mut().find(|t| t.id == updated.id) else {
            return Ok(false);
        };
        *slot = updated.clone();
        write_list(self.store, keys::TRANSACTIONS, &all)?;
        Ok(true)
    }

    /// Remove by id; returns false when no record matched
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut all = self.list();
        let before = all.len();
        all.retain(|t| t.id != id);
        if all.len() == before {
            return Ok(false);
        }
        write_list(self.store, keys::TRANSACTIONS, &all)?;
        Ok(true)
    }

    pub fn get(&self, id: &str) -> Option<Transaction> {
        self.list().into_iter().find(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    fn draft(title: &str, amount: f64) -> NewTransaction {
        NewTransaction {
            title: title.to_string(),
            amount,
            category: "Food".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            note: None,
            kind: TxnKind::Expense,
            profile_id: None,
        }
    }

    #[test]
    fn test_add_then_list_round_trip() {
        let store = MemoryStore::new();
        let svc = TransactionService::new(&store);
        assert!(svc.list().is_empty());

        let added = svc.add(draft("Lunch", 250.0)).unwrap();
        let listed = svc.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], added);
        assert!(!added.id.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let store = MemoryStore::new();
        let svc = TransactionService::new(&store);
        let a = svc.add(draft("One", 10.0)).unwrap();
        let b = svc.add(draft("Two", 10.0)).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(svc.list().len(), 2);
    }

    #[test]
    fn test_update_in_place() {
        let store = MemoryStore::new();
        let svc = TransactionService::new(&store);
        let mut txn = svc.add(draft("Lunch", 250.0)).unwrap();
        txn.amount = 300.0;
        assert!(svc.update(&txn).unwrap());
        assert_eq!(svc.get(&txn.id).unwrap().amount, 300.0);

        let mut ghost = txn.clone();
        ghost.id = "missing".to_string();
        assert!(!svc.update(&ghost).unwrap());
    }

    #[test]
    fn test_delete() {
        let store = MemoryStore::new();
        let svc = TransactionService::new(&store);
        let txn = svc.add(draft("Lunch", 250.0)).unwrap();
        assert!(svc.delete(&txn.id).unwrap());
        assert!(svc.list().is_empty());
        assert!(!svc.delete(&txn.id).unwrap());
    }
}
