//! paisa-ingest: statement import abstractions and app-specific parsers.

pub mod convert;
pub mod parsers;
pub mod types;

pub use convert::to_transactions;
pub use parsers::bank_csv::parse_bank_csv;
pub use parsers::upi_export::parse_upi_export;
pub use types::StatementTransaction;
