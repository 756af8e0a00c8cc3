//! Need/want classification heuristic.
//!
//! Scores a transaction against fixed category and keyword lists. No
//! learned model: a direct need-category match wins outright, keyword
//! majorities decide the rest, and amount thresholds break ties.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::txn::Transaction;

/// Confidence accumulator starting point. A direct need-category match
/// adds 0.3 on top, which guarantees the documented 0.8 floor for
/// need-category transactions.
const BASE_CONFIDENCE: f64 = 0.5;

/// Categories that always classify as need on a case-insensitive
/// substring match.
const NEED_CATEGORIES: &[&str] = &[
    "groceries", "rent", "utilities", "medical", "health", "insurance", "education", "transport",
    "bills", "fuel", "pharmacy", "emi",
];

const NEED_KEYWORDS: &[&str] = &[
    "grocery", "rent", "electricity", "water bill", "gas", "bus", "train", "metro", "medicine",
    "doctor", "hospital", "school", "fees", "recharge", "milk", "vegetables", "petrol",
];

const WANT_KEYWORDS: &[&str] = &[
    "movie", "restaurant", "cafe", "coffee", "game", "shopping", "travel", "trip", "party",
    "gift", "subscription", "netflix", "zomato", "swiggy", "fashion", "gadget",
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum NeedWant {
    #[serde(rename = "need")]
    Need,
    #[serde(rename = "want")]
    Want,
    #[serde(rename = "unclassified")]
    Unclassified,
}

/// Result of classifying one transaction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub label: NeedWant,
    /// Always within [0, 1]
    pub confidence: f64,
}

/// Persisted classification for a transaction, created lazily the first
/// time the transaction is displayed and overwritten on manual override.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassifiedTransaction {
    pub transaction_id: String,
    pub label: NeedWant,
    pub confidence: f64,
    /// false once the user has overridden the heuristic
    pub ai_assigned: bool,
    pub classified_at: DateTime<Utc>,
}

impl ClassifiedTransaction {
    pub fn assigned(transaction_id: impl Into<String>, result: Classification) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            label: result.label,
            confidence: result.confidence,
            ai_assigned: true,
            classified_at: Utc::now(),
        }
    }
}

/// Resolves a classified transaction id back to its transaction record.
///
/// The history pass in [`classify_with_history`] needs this join to read
/// the category/amount of previously classified transactions.
pub trait TransactionLookup {
    fn transaction(&self, id: &str) -> Option<Transaction>;
}

/// Lookup that never resolves anything.
///
/// This is the production wiring: the classification-id-to-transaction
/// join was never implemented, so the learn-from-history pass is inert.
/// Swap in a real lookup to enable the history vote.
pub struct NullLookup;

impl TransactionLookup for NullLookup {
    fn transaction(&self, _id: &str) -> Option<Transaction> {
        None
    }
}

/// Classify one transaction from its category, note, and amount
pub fn classify(category: &str, note: Option<&str>, amount: f64) -> Classification {
    // Malformed numeric input gets the best-effort default, not an error
    if !amount.is_finite() || amount < 0.0 {
        return Classification {
            label: NeedWant::Unclassified,
            confidence: 0.0,
        };
    }

    let cat_lower = category.to_lowercase();
    let note_text = note.unwrap_or("");
    let haystack = format!("{} {}", cat_lower, note_text.to_lowercase());

    let category_match = NEED_CATEGORIES.iter().any(|c| cat_lower.contains(c));
    let need_hits = NEED_KEYWORDS.iter().filter(|k| haystack.contains(*k)).count();
    let want_hits = WANT_KEYWORDS.iter().filter(|k| haystack.contains(*k)).count();

    let mut confidence = BASE_CONFIDENCE;
    if category_match {
        confidence += 0.3;
    }
    if need_hits > 0 {
        confidence += 0.2;
    }
    if want_hits > 0 {
        confidence += 0.2;
    }
    if amount > 200.0 {
        confidence += 0.1;
    }
    if amount < 50.0 {
        confidence += 0.1;
    }
    if note_text.len() > 10 {
        confidence += 0.1;
    }

    let label = if category_match {
        NeedWant::Need
    } else if need_hits > want_hits {
        NeedWant::Need
    } else if want_hits > need_hits {
        NeedWant::Want
    } else if amount > 100.0 {
        NeedWant::Want
    } else if amount < 20.0 {
        NeedWant::Need
    } else {
        NeedWant::Unclassified
    };

    Classification {
        label,
        confidence: confidence.min(1.0),
    }
}

/// Classify with a learn-from-history pass.
///
/// Prior classifications whose transactions share the category and land
/// within +/-50 of the amount cast confidence-weighted votes. A winning
/// vote that disagrees with the heuristic overrides the label and adds
/// 0.2 confidence. With [`NullLookup`] this reduces to [`classify`].
pub fn classify_with_history(
    txn: &Transaction,
    history: &[ClassifiedTransaction],
    lookup: &dyn TransactionLookup,
) -> Classification {
    let base = classify(&txn.category, txn.note.as_deref(), txn.amount);

    let mut need_vote = 0.0;
    let mut want_vote = 0.0;
    for entry in history {
        let Some(prior) = lookup.transaction(&entry.transaction_id) else {
            continue;
        };
        if prior.category.eq_ignore_ascii_case(&txn.category)
            && (prior.amount - txn.amount).abs() <= 50.0
        {
            match entry.label {
                NeedWant::Need => need_vote += entry.confidence,
                NeedWant::Want => want_vote += entry.confidence,
                NeedWant::Unclassified => {}
            }
        }
    }

    let voted = if need_vote > want_vote {
        NeedWant::Need
    } else if want_vote > need_vote {
        NeedWant::Want
    } else {
        return base;
    };

    if voted == base.label {
        return base;
    }

    Classification {
        label: voted,
        confidence: (base.confidence + 0.2).min(1.0),
    }
}
