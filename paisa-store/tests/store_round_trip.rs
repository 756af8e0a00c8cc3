//! Round-trip behavior of the record store through the services.

use chrono::NaiveDate;
use paisa_core::TxnKind;
use paisa_store::{
    BudgetService, ClassificationService, MemoryStore, NewTransaction, ProfileService,
    TransactionService,
};

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn saving_then_listing_includes_exactly_one_new_record() {
    let store = MemoryStore::new();
    let txns = TransactionService::new(&store);

    let draft = NewTransaction {
        title: "Vegetables".to_string(),
        amount: 240.0,
        category: "Food".to_string(),
        date: day("2024-05-03"),
        note: Some("weekly market run".to_string()),
        kind: TxnKind::Expense,
        profile_id: None,
    };
    let saved = txns.add(draft.clone()).unwrap();

    let listed = txns.list();
    assert_eq!(listed.len(), 1);

    let got = &listed[0];
    assert_eq!(got.title, draft.title);
    assert_eq!(got.amount, draft.amount);
    assert_eq!(got.category, draft.category);
    assert_eq!(got.date, draft.date);
    assert_eq!(got.note, draft.note);
    assert_eq!(got.kind, draft.kind);
    assert!(!got.id.is_empty());
    assert_eq!(got.id, saved.id);

    // A second save gets a distinct identifier
    let again = txns.add(draft).unwrap();
    assert_ne!(again.id, saved.id);
    assert_eq!(txns.list().len(), 2);
}

#[test]
fn classification_survives_across_service_instances() {
    let store = MemoryStore::new();
    let txns = TransactionService::new(&store);

    let t = txns
        .add(NewTransaction {
            title: "Pharmacy".to_string(),
            amount: 320.0,
            category: "Medical".to_string(),
            date: day("2024-05-04"),
            note: None,
            kind: TxnKind::Expense,
            profile_id: None,
        })
        .unwrap();

    let first = ClassificationService::new(&store).classify_or_get(&t).unwrap();
    // A fresh service over the same store sees the persisted entry
    let second = ClassificationService::new(&store).classify_or_get(&t).unwrap();
    assert_eq!(first, second);
}

#[test]
fn accepted_suggestion_becomes_a_budget() {
    let store = MemoryStore::new();
    let txn_svc = TransactionService::new(&store);
    let budgets = BudgetService::new(&store);

    for (date, amount) in [("2024-04-02", 300.0), ("2024-05-05", 380.0), ("2024-05-18", 340.0)] {
        txn_svc
            .add(NewTransaction {
                title: "Groceries".to_string(),
                amount,
                category: "Food".to_string(),
                date: day(date),
                note: None,
                kind: TxnKind::Expense,
                profile_id: None,
            })
            .unwrap();
    }

    let all = txn_svc.list();
    let today = day("2024-05-25");
    let suggestions = budgets.suggestions(&all, today);
    assert_eq!(suggestions.len(), 1);

    budgets.accept(suggestions[0].clone()).unwrap();
    assert_eq!(budgets.list().len(), 1);
    assert!(budgets.suggestions(&all, today).is_empty());
}

#[test]
fn unknown_profile_tags_read_as_default() {
    let store = MemoryStore::new();
    let txn_svc = TransactionService::new(&store);
    let profiles = ProfileService::new(&store);
    profiles.seed_default().unwrap();

    let t = txn_svc
        .add(NewTransaction {
            title: "Cab".to_string(),
            amount: 180.0,
            category: "Transport".to_string(),
            date: day("2024-05-03"),
            note: None,
            kind: TxnKind::Expense,
            profile_id: Some("profile-that-was-deleted".to_string()),
        })
        .unwrap();

    assert_eq!(
        profiles.resolve_id(t.profile_id.as_deref()),
        paisa_store::DEFAULT_PROFILE_ID
    );
}
