//! Parse bank CSV statement exports into typed transactions.
//!
//! Expected columns after the header row:
//! Date,Description,Amount[,Category]
//!
//! Exports often carry preamble rows before the header; everything up to
//! the row whose first column is "Date" is skipped.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;

use crate::types::StatementTransaction;

fn parse_date(s: &str) -> Option<NaiveDate> {
    for fmt in ["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    None
}

/// Parse a CSV statement file, returning all valid transactions.
/// Rows with unparseable dates or amounts are skipped.
pub fn parse_bank_csv(path: impl AsRef<Path>) -> Result<Vec<StatementTransaction>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;

    let mut txns = Vec::new();
    let mut header_found = false;

    for result in rdr.records() {
        let record = result?;
        if !header_found {
            if record.get(0).map(|s| s.trim()) == Some("Date") {
                header_found = true;
            }
            continue;
        }

        let date_str = record.get(0).unwrap_or("").trim();
        if date_str.is_empty() {
            continue;
        }
        let Some(date) = parse_date(date_str) else {
            continue;
        };

        let amount: f64 = match record.get(2).unwrap_or("").trim().replace(',', "").parse() {
            Ok(a) => a,
            Err(_) => continue,
        };

        let raw_category = record
            .get(3)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        txns.push(StatementTransaction {
            date,
            description: record.get(1).unwrap_or("").trim().to_string(),
            amount,
            raw_category,
            source: "csv".to_string(),
        });
    }

    Ok(txns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn test_parse_with_preamble_and_header() {
        let f = write_csv(
            "Account Statement,,\nGenerated on 2024-06-01,,\nDate,Description,Amount,Category\n\
             2024-05-02,BIG BAZAAR MUMBAI,1240.00,Groceries\n\
             2024-05-03,SALARY CREDIT,-45000.00,\n",
        );
        let txns = parse_bank_csv(f.path()).unwrap();
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].description, "BIG BAZAAR MUMBAI");
        assert_eq!(txns[0].amount, 1240.0);
        assert_eq!(txns[0].raw_category.as_deref(), Some("Groceries"));
        assert_eq!(txns[1].amount, -45000.0);
        assert_eq!(txns[1].raw_category, None);
    }

    #[test]
    fn test_unparseable_rows_are_skipped() {
        let f = write_csv(
            "Date,Description,Amount\n\
             not-a-date,MYSTERY,10.00\n\
             2024-05-02,REAL ROW,20.00\n\
             2024-05-03,BAD AMOUNT,ten\n",
        );
        let txns = parse_bank_csv(f.path()).unwrap();
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].description, "REAL ROW");
    }

    #[test]
    fn test_day_first_dates_accepted() {
        let f = write_csv("Date,Description,Amount\n15/05/2024,KIRANA STORE,350.50\n");
        let txns = parse_bank_csv(f.path()).unwrap();
        assert_eq!(txns[0].date, NaiveDate::from_ymd_opt(2024, 5, 15).unwrap());
        assert_eq!(txns[0].amount, 350.5);
    }
}
