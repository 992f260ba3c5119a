//! Date helpers: ISO parsing and Korean long-form display.

use chrono::{Datelike, NaiveDate, Utc};

#[derive(Debug, thiserror::Error)]
#[error("invalid date {input:?}: expected YYYY-MM-DD")]
pub struct DateError {
    pub input: String,
    #[source]
    pub source: chrono::ParseError,
}

/// Today's UTC date as `YYYY-MM-DD`.
pub fn today_iso() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|source| DateError {
        input: input.to_string(),
        source,
    })
}

/// `2024-01-15` → `2024년 1월 15일`.
pub fn format_date(date: NaiveDate) -> String {
    format!("{}년 {}월 {}일", date.year(), date.month(), date.day())
}

/// `2024-01-15` → `2024년 1월`.
pub fn format_month(date: NaiveDate) -> String {
    format!("{}년 {}월", date.year(), date.month())
}
