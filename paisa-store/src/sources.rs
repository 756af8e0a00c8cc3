//! Pluggable seams for the simulated integrations.
//!
//! The "OCR" and "payment detection" features are deterministic demos,
//! not real integrations. Each seam is a trait so a real backend can be
//! dropped in later; the shipped implementations are the mocks.

use anyhow::Result;
use chrono::{Duration, NaiveDate};
use paisa_core::UpiTransaction;

/// Fields extracted from a receipt
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptData {
    pub title: String,
    pub amount: f64,
    pub category_hint: String,
    pub date: Option<NaiveDate>,
}

/// Turns raw receipt text into structured fields
pub trait ReceiptExtractor {
    fn extract(&self, receipt_text: &str) -> ReceiptData;
}

/// Supplies transactions detected from a payment app
pub trait PaymentTransactionSource {
    fn fetch(&self, today: NaiveDate) -> Result<Vec<UpiTransaction>>;
}

fn poly_hash(text: &str) -> u32 {
    let mut h: u32 = 0;
    for b in text.bytes() {
        h = h.wrapping_mul(31).wrapping_add(b as u32);
    }
    h
}

const MOCK_AMOUNTS: [f64; 8] = [49.0, 120.0, 235.5, 310.0, 499.0, 650.0, 899.0, 1240.0];

const CATEGORY_HINTS: [(&str, &str); 6] = [
    ("grocery", "Food"),
    ("restaurant", "Food"),
    ("cafe", "Food"),
    ("pharmacy", "Bills"),
    ("fuel", "Transport"),
    ("mart", "Shopping"),
];

/// Deterministic receipt "extraction": the first line becomes the title,
/// keyword scan picks the category hint, and the amount comes from a
/// fixed table indexed by a string hash of the text.
pub struct MockReceiptExtractor;

impl ReceiptExtractor for MockReceiptExtractor {
    fn extract(&self, receipt_text: &str) -> ReceiptData {
        let title = receipt_text
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .unwrap_or("Receipt")
            .to_string();

        let lower = receipt_text.to_lowercase();
        let category_hint = CATEGORY_HINTS
            .iter()
            .find(|(kw, _)| lower.contains(kw))
            .map(|(_, cat)| cat.to_string())
            .unwrap_or_else(|| "Shopping".to_string());

        let amount = MOCK_AMOUNTS[(poly_hash(receipt_text) % MOCK_AMOUNTS.len() as u32) as usize];

        ReceiptData {
            title,
            amount,
            category_hint,
            date: None,
        }
    }
}

const MOCK_COUNTERPARTIES: [&str; 6] = [
    "Sharma General Store",
    "Metro Card Recharge",
    "Cafe Blue Tokai",
    "Apna Kirana",
    "City Cab",
    "Book Depot",
];

const MOCK_APPS: [&str; 3] = ["gpay", "phonepe", "paytm"];

/// Deterministic payment feed: the seed string hashes into a small batch
/// of transactions dated backwards from `today`.
pub struct MockPaymentSource {
    seed: String,
}

impl MockPaymentSource {
    pub fn new(seed: impl Into<String>) -> Self {
        Self { seed: seed.into() }
    }
}

impl PaymentTransactionSource for MockPaymentSource {
    fn fetch(&self, today: NaiveDate) -> Result<Vec<UpiTransaction>> {
        let h = poly_hash(&self.seed);
        let count = (h % 3) + 2; // 2 to 4 entries

        let mut out = Vec::new();
        for i in 0..count {
            let k = h.wrapping_add(i.wrapping_mul(2654435761));
            out.push(UpiTransaction {
                id: format!("upi-{h:08x}-{i}"),
                counterparty: MOCK_COUNTERPARTIES
                    [(k % MOCK_COUNTERPARTIES.len() as u32) as usize]
                    .to_string(),
                amount: MOCK_AMOUNTS[(k % MOCK_AMOUNTS.len() as u32) as usize],
                date: today - Duration::days(i as i64),
                app: MOCK_APPS[(k % MOCK_APPS.len() as u32) as usize].to_string(),
                imported: false,
            });
        }
        Ok(out)
    }
}
