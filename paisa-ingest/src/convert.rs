//! Convert normalized statement transactions into paisa records.

use paisa_core::{Transaction, TxnKind};

use crate::types::StatementTransaction;

/// Map statement entries to transactions. Positive amounts become
/// expenses, negative amounts become income; the raw category is kept
/// when present, else "Uncategorized".
pub fn to_transactions(stmts: &[StatementTransaction], profile_id: Option<&str>) -> Vec<Transaction> {
    stmts
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let kind = if s.amount < 0.0 {
                TxnKind::Income
            } else {
                TxnKind::Expense
            };
            let mut txn = Transaction::new(
                format!("import-{:04}", i),
                &s.description,
                s.amount.abs(),
                s.raw_category.clone().unwrap_or_else(|| "Uncategorized".to_string()),
                s.date,
                kind,
            );
            txn.note = Some(format!("imported from {}", s.source));
            txn.profile_id = profile_id.map(str::to_string);
            txn
        })
        .collect()
}
