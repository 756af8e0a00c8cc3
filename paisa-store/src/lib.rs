//! paisa-store: the record store and feature services.
//!
//! Persistence is a key-value capability holding JSON lists, one key per
//! feature area. Services wrap the read-modify-write cycle the app uses
//! everywhere; the analytics in paisa-core stay I/O free.

pub mod kv;
pub mod services;
pub mod sources;

pub use kv::{JsonFileStore, KvStore, MemoryStore, keys, paisa_home, read_list, write_list};
pub use services::{
    BudgetService, CategoryService, ClassificationService, DEFAULT_PROFILE_ID, GoalService,
    IncomeService, NewTransaction, ProfileService, RecurringService, ReportService,
    SubscriptionService, TransactionService,
};
pub use sources::{
    MockPaymentSource, MockReceiptExtractor, PaymentTransactionSource, ReceiptData,
    ReceiptExtractor,
};
