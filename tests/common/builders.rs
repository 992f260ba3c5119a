//! Test builders — ergonomic constructors for `Transaction` fixtures.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use chrono::NaiveDate;
use ggoolmoney_core::{Tab, Transaction};

// ---------------------------------------------------------------------------
// TransactionBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Transaction`] test fixtures.
///
/// # Example
///
/// ```rust
/// let tx = TransactionBuilder::new("t1", "스타벅스")
///     .date("2024-01-15")
///     .amount(4500.0)
///     .memo("아이스 라떼")
///     .tab("food")
///     .build();
/// ```
pub struct TransactionBuilder {
    tx: Transaction,
}

impl TransactionBuilder {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            tx: Transaction {
                id: id.into(),
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                description: description.into(),
                amount: 1000.0,
                memo: None,
                tab_id: None,
                created_at: 0,
            },
        }
    }

    /// `YYYY-MM-DD`.
    pub fn date(mut self, date: &str) -> Self {
        self.tx.date = NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("test date must be YYYY-MM-DD");
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.tx.amount = amount;
        self
    }

    pub fn memo(mut self, memo: impl Into<String>) -> Self {
        self.tx.memo = Some(memo.into());
        self
    }

    pub fn tab(mut self, tab_id: impl Into<String>) -> Self {
        self.tx.tab_id = Some(tab_id.into());
        self
    }

    pub fn created_at(mut self, created_at: i64) -> Self {
        self.tx.created_at = created_at;
        self
    }

    pub fn build(self) -> Transaction {
        self.tx
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

pub fn tab(id: &str, name: &str) -> Tab {
    Tab::new(id, name, "📎", "bg-gray-500")
}

/// Ids of a filtered list, in order.
pub fn ids(list: &[&Transaction]) -> Vec<String> {
    list.iter().map(|t| t.id.clone()).collect()
}
