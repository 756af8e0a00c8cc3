//! UPI app text-export parser.
//!
//! Expected line format (one transaction per line):
//!   DD/MM/YYYY  <counterparty>  <amount>  <app>
//! where a negative amount is money received. Lines that do not match
//! are skipped.

use anyhow::Result;
use chrono::NaiveDate;
use regex::Regex;

use crate::types::StatementTransaction;

/// Parse exported UPI text into transactions
pub fn parse_upi_export(text: &str) -> Result<Vec<StatementTransaction>> {
    let line_re = Regex::new(concat!(
        r"^\s*(?P<date>\d{2}/\d{2}/\d{4})\s+",
        r"(?P<party>.+?)\s+",
        r"(?P<amount>-?[\d,]+(?:\.\d{1,2})?)\s+",
        r"(?P<app>\w+)\s*$"
    ))?;

    let mut out = Vec::new();
    for line in text.lines() {
        let Some(caps) = line_re.captures(line) else {
            continue;
        };
        let Some(date) = NaiveDate::parse_from_str(&caps["date"], "%d/%m/%Y").ok() else {
            continue;
        };
        let amount: f64 = match caps["amount"].replace(',', "").parse() {
            Ok(a) => a,
            Err(_) => continue,
        };

        out.push(StatementTransaction {
            date,
            description: caps["party"].trim().to_string(),
            amount,
            raw_category: None,
            source: caps["app"].to_lowercase(),
        });
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_export() {
        let text = "\
UPI Transaction History
01/05/2024  Sharma General Store  450.00  gpay
02/05/2024  Refund - City Cab  -120.00  phonepe
garbage line without structure
15/05/2024  Metro Recharge  1,000.00  paytm
";
        let txns = parse_upi_export(text).unwrap();
        assert_eq!(txns.len(), 3);

        assert_eq!(txns[0].date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(txns[0].description, "Sharma General Store");
        assert_eq!(txns[0].amount, 450.0);
        assert_eq!(txns[0].source, "gpay");

        assert_eq!(txns[1].amount, -120.0);
        assert_eq!(txns[2].amount, 1000.0);
    }

    #[test]
    fn test_invalid_calendar_dates_skipped() {
        let txns = parse_upi_export("31/02/2024  Ghost Shop  100.00  gpay").unwrap();
        assert!(txns.is_empty());
    }
}
