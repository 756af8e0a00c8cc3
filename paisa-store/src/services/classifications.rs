//! Persisted need/want classifications.
//!
//! A classification is created lazily the first time a transaction is
//! shown, and overwritten wholesale on manual reclassification.

use anyhow::Result;
use chrono::Utc;
use paisa_core::{
    ClassifiedTransaction, NeedWant, NullLookup, Transaction, classify_with_history,
};

use crate::kv::{KvStore, keys, read_list, write_list};

pub struct ClassificationService<'a> {
    store: &'a dyn KvStore,
}

impl<'a> ClassificationService<'a> {
    pub fn new(store: &'a dyn KvStore) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<ClassifiedTransaction> {
        read_list(self.store, keys::CLASSIFICATIONS)
    }

    /// Return the stored classification for a transaction, computing and
    /// persisting one on first sight.
    ///
    /// The history pass runs behind `NullLookup`, so stored history never
    /// influences the result; see the classifier docs for why that seam
    /// is intentionally inert.
    pub fn classify_or_get(&self, txn: &Transaction) -> Result<ClassifiedTransaction> {
        let mut all = self.list();
        if let Some(existing) = all.iter().find(|c| c.transaction_id == txn.id) {
            return Ok(existing.clone());
        }

        let result = classify_with_history(txn, &all, &NullLookup);
        let entry = ClassifiedTransaction::assigned(&txn.id, result);
        all.push(entry.clone());
        write_list(self.store, keys::CLASSIFICATIONS, &all)?;
        Ok(entry)
    }

    /// User override: replaces any stored entry for the transaction
    pub fn override_label(&self, txn_id: &str, label: NeedWant) -> Result<ClassifiedTransaction> {
        let mut all = self.list();
        all.retain(|c| c.transaction_id != txn_id);
        let entry = ClassifiedTransaction {
            transaction_id: txn_id.to_string(),
            label,
            confidence: 1.0,
            ai_assigned: false,
            classified_at: Utc::now(),
        };
        all.push(entry.clone());
        write_list(self.store, keys::CLASSIFICATIONS, &all)?;
        Ok(entry)
    }
}
