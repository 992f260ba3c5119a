//! Core types for ggoolmoney-core.
//!
//! This module defines the ledger records the search layer filters: the
//! [`Transaction`], the [`Tab`] (spending category) it may belong to, the
//! [`TransactionDraft`] a user submits, and the sort/filter selectors used by
//! the transaction list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One expense record.
///
/// Serialized with the browser app's camelCase keys (`tabId`, `createdAt`) so a
/// ledger exported from the browser app loads unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Epoch-millisecond string assigned at creation.
    pub id: String,
    /// Spending date (`YYYY-MM-DD`).
    pub date: NaiveDate,
    /// Where the money went (사용처).
    pub description: String,
    /// Positive amount in won.
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    /// Owning tab, `None` when unclassified (미분류).
    #[serde(default)]
    pub tab_id: Option<String>,
    /// Creation time in epoch milliseconds; secondary sort key.
    pub created_at: i64,
}

/// A spending category shown as a tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub name: String,
    /// Emoji shown next to the name.
    pub icon: String,
    /// Display color class, e.g. `bg-red-500`.
    pub color: String,
}

impl Tab {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
        }
    }
}

/// The tabs a fresh ledger starts with.
pub fn default_tabs() -> Vec<Tab> {
    vec![
        Tab::new("food", "식비", "🍔", "bg-red-500"),
        Tab::new("transport", "교통", "🚌", "bg-blue-500"),
        Tab::new("hobby", "취미", "🎮", "bg-green-500"),
        Tab::new("living", "생활", "🏠", "bg-yellow-500"),
        Tab::new("etc", "기타", "📎", "bg-gray-500"),
    ]
}

/// User input for creating or editing a transaction, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub memo: Option<String>,
    pub tab_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Column a transaction list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Date,
    Description,
    Amount,
    TabId,
    CreatedAt,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Date => write!(f, "date"),
            SortKey::Description => write!(f, "description"),
            SortKey::Amount => write!(f, "amount"),
            SortKey::TabId => write!(f, "tabId"),
            SortKey::CreatedAt => write!(f, "createdAt"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "ascending"),
            SortDirection::Descending => write!(f, "descending"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    /// Newest spending date first.
    fn default() -> Self {
        Self {
            key: SortKey::Date,
            direction: SortDirection::Descending,
        }
    }
}

/// Which tab the list is restricted to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TabFilter {
    #[default]
    All,
    Tab(String),
}

impl TabFilter {
    pub fn admits(&self, tx: &Transaction) -> bool {
        match self {
            TabFilter::All => true,
            TabFilter::Tab(id) => tx.tab_id.as_deref() == Some(id.as_str()),
        }
    }
}

// ---------------------------------------------------------------------------
// Amount rendering
// ---------------------------------------------------------------------------

/// Render an amount with thousands separators and at most three fraction
/// digits, the way `ko-KR` number formatting does: `12345.5` → `12,345.5`.
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = format!("{:.3}", amount.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let mut out = String::new();
    if negative && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}
