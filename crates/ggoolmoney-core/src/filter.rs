//! Transaction list filter — tab restriction, chosung search, and column sort.
//!
//! [`TransactionFilter::apply`] is what the list view re-runs on every
//! keystroke: it narrows to the selected tab, keeps records whose
//! description, memo, or tab name matches the search query (see
//! [`crate::chosung`]), and sorts the survivors.

use crate::chosung::Query;
use crate::types::{SortConfig, SortDirection, SortKey, Tab, TabFilter, Transaction};
use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionFilter {
    /// Search text as typed; empty means no search filter.
    pub search: String,
    pub tab: TabFilter,
    /// `None` keeps ledger order.
    pub sort: Option<SortConfig>,
}

impl Default for TransactionFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            tab: TabFilter::All,
            sort: Some(SortConfig::default()),
        }
    }
}

impl TransactionFilter {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..Self::default()
        }
    }

    pub fn with_tab(mut self, tab: TabFilter) -> Self {
        self.tab = tab;
        self
    }

    pub fn with_sort(mut self, sort: Option<SortConfig>) -> Self {
        self.sort = sort;
        self
    }

    /// Column-header click: the same key sorted ascending flips to
    /// descending, anything else sorts ascending by `key`.
    pub fn request_sort(&mut self, key: SortKey) {
        let direction = match self.sort {
            Some(current) if current.key == key && current.direction == SortDirection::Ascending => {
                SortDirection::Descending
            }
            _ => SortDirection::Ascending,
        };
        self.sort = Some(SortConfig { key, direction });
    }

    /// Filter and sort `transactions`, resolving tab names from `tabs`.
    pub fn apply<'a>(&self, transactions: &'a [Transaction], tabs: &[Tab]) -> Vec<&'a Transaction> {
        let query = Query::new(self.search.as_str());
        let tab_names: HashMap<&str, &str> = tabs
            .iter()
            .map(|t| (t.id.as_str(), t.name.as_str()))
            .collect();

        let mut visible: Vec<&Transaction> = transactions
            .iter()
            .filter(|tx| self.tab.admits(tx))
            .filter(|tx| query.is_empty() || record_matches(tx, &query, &tab_names))
            .collect();

        if let Some(sort) = self.sort {
            visible.sort_by(|a, b| compare(a, b, sort));
        }

        tracing::debug!(
            query = %query,
            total = transactions.len(),
            visible = visible.len(),
            "filter: applied"
        );
        visible
    }
}

/// A record is visible if any searchable field matches.
fn record_matches(tx: &Transaction, query: &Query, tab_names: &HashMap<&str, &str>) -> bool {
    if query.matches(&tx.description) {
        return true;
    }
    if let Some(memo) = tx.memo.as_deref().filter(|m| !m.is_empty()) {
        if query.matches(memo) {
            return true;
        }
    }
    tx.tab_id
        .as_deref()
        .and_then(|id| tab_names.get(id))
        .is_some_and(|name| !name.is_empty() && query.matches(name))
}

fn compare(a: &Transaction, b: &Transaction, sort: SortConfig) -> Ordering {
    let primary = match sort.key {
        SortKey::Date => a.date.cmp(&b.date),
        SortKey::Description => a.description.to_lowercase().cmp(&b.description.to_lowercase()),
        SortKey::Amount => a.amount.total_cmp(&b.amount),
        SortKey::TabId => a.tab_id.cmp(&b.tab_id),
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
    };
    let primary = match sort.direction {
        SortDirection::Ascending => primary,
        SortDirection::Descending => primary.reverse(),
    };
    // Ties: newest first, whatever the direction.
    primary.then_with(|| b.created_at.cmp(&a.created_at))
}
