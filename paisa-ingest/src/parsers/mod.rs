pub mod bank_csv;
pub mod upi_export;
