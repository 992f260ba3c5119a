//! Store — the ledger of transactions and tabs, and its JSON persistence.
//!
//! [`Ledger`] is the single source of truth the list filter reads from. It is
//! persisted by [`LedgerStore`] as two JSON blobs in a data directory, one per
//! key (`ggoolmoney-transactions.json`, `ggoolmoney-tabs.json`). A missing
//! blob loads as its default: no transactions, [`default_tabs`] for tabs.

use crate::types::{default_tabs, Tab, Transaction, TransactionDraft};
use crate::validate::{validate_tab_name, ValidationError};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub const TRANSACTIONS_FILE: &str = "ggoolmoney-transactions.json";
pub const TABS_FILE: &str = "ggoolmoney-tabs.json";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed ledger file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no transaction with id {0}")]
    TransactionNotFound(String),
    #[error("no tab with id {0}")]
    TabNotFound(String),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

// ---------------------------------------------------------------------------
// Ledger
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    /// Newest `created_at` first.
    pub transactions: Vec<Transaction>,
    pub tabs: Vec<Tab>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            tabs: default_tabs(),
        }
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

impl Ledger {
    pub fn transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn tab(&self, id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    /// A fresh epoch-millisecond id, bumped past any id already in use.
    fn next_id(&self, now_ms: i64) -> String {
        let taken: HashSet<&str> = self
            .transactions
            .iter()
            .map(|t| t.id.as_str())
            .chain(self.tabs.iter().map(|t| t.id.as_str()))
            .collect();
        let mut candidate = now_ms;
        while taken.contains(candidate.to_string().as_str()) {
            candidate += 1;
        }
        candidate.to_string()
    }

    /// Replace the transaction with the same id, or insert it keeping the
    /// newest-created-first order.
    pub fn upsert(&mut self, tx: Transaction) {
        if let Some(slot) = self.transactions.iter_mut().find(|t| t.id == tx.id) {
            *slot = tx;
            return;
        }
        self.transactions.push(tx);
        self.transactions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    }

    fn check_tab(&self, tab_id: Option<&str>) -> Result<(), StoreError> {
        match tab_id {
            Some(id) if self.tab(id).is_none() => Err(StoreError::TabNotFound(id.to_string())),
            _ => Ok(()),
        }
    }

    /// Validate `draft` and record it as a new transaction.
    pub fn add_transaction(&mut self, draft: TransactionDraft) -> Result<Transaction, StoreError> {
        draft.validate()?;
        self.check_tab(draft.tab_id.as_deref())?;
        let now = now_millis();
        let tx = Transaction {
            id: self.next_id(now),
            date: draft.date,
            description: draft.description,
            amount: draft.amount,
            memo: draft.memo.filter(|m| !m.is_empty()),
            tab_id: draft.tab_id,
            created_at: now,
        };
        tracing::debug!(id = %tx.id, "ledger: transaction added");
        self.upsert(tx.clone());
        Ok(tx)
    }

    /// Overwrite the fields of transaction `id`, keeping its id and creation time.
    pub fn edit_transaction(&mut self, id: &str, draft: TransactionDraft) -> Result<Transaction, StoreError> {
        draft.validate()?;
        self.check_tab(draft.tab_id.as_deref())?;
        let existing = self
            .transaction(id)
            .ok_or_else(|| StoreError::TransactionNotFound(id.to_string()))?;
        let tx = Transaction {
            id: existing.id.clone(),
            created_at: existing.created_at,
            date: draft.date,
            description: draft.description,
            amount: draft.amount,
            memo: draft.memo.filter(|m| !m.is_empty()),
            tab_id: draft.tab_id,
        };
        tracing::debug!(id = %tx.id, "ledger: transaction edited");
        self.upsert(tx.clone());
        Ok(tx)
    }

    /// Remove transaction `id`; `false` if there was none.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        before != self.transactions.len()
    }

    /// Replace the tab list. Transactions filed under a tab that no longer
    /// exists become unclassified.
    pub fn update_tabs(&mut self, tabs: Vec<Tab>) {
        let removed: HashSet<String> = self
            .tabs
            .iter()
            .filter(|old| !tabs.iter().any(|t| t.id == old.id))
            .map(|old| old.id.clone())
            .collect();
        self.tabs = tabs;
        if removed.is_empty() {
            return;
        }
        let mut orphaned = 0usize;
        for tx in &mut self.transactions {
            if tx.tab_id.as_ref().is_some_and(|id| removed.contains(id)) {
                tx.tab_id = None;
                orphaned += 1;
            }
        }
        tracing::debug!(removed = removed.len(), orphaned, "ledger: tabs removed");
    }

    pub fn add_tab(&mut self, name: &str, icon: &str, color: &str) -> Result<Tab, StoreError> {
        let name = validate_tab_name(name, &self.tabs, None)?;
        let tab = Tab::new(self.next_id(now_millis()), name, icon, color);
        let mut tabs = self.tabs.clone();
        tabs.push(tab.clone());
        self.update_tabs(tabs);
        Ok(tab)
    }

    pub fn rename_tab(&mut self, id: &str, name: &str) -> Result<Tab, StoreError> {
        let name = validate_tab_name(name, &self.tabs, Some(id))?;
        let mut tabs = self.tabs.clone();
        let tab = tabs
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::TabNotFound(id.to_string()))?;
        tab.name = name;
        let renamed = tab.clone();
        self.update_tabs(tabs);
        Ok(renamed)
    }

    /// Remove tab `id`; `false` if there was none.
    pub fn remove_tab(&mut self, id: &str) -> bool {
        if self.tab(id).is_none() {
            return false;
        }
        let tabs = self.tabs.iter().filter(|t| t.id != id).cloned().collect();
        self.update_tabs(tabs);
        true
    }

    /// Restore [`default_tabs`]; transactions under custom tabs become unclassified.
    pub fn reset_tabs(&mut self) {
        self.update_tabs(default_tabs());
    }
}

// ---------------------------------------------------------------------------
// Persistence
// ---------------------------------------------------------------------------

/// JSON persistence of a [`Ledger`] in one data directory.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    dir: PathBuf,
}

impl LedgerStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn load(&self) -> Result<Ledger, StoreError> {
        let transactions: Vec<Transaction> = read_json(&self.dir.join(TRANSACTIONS_FILE))?.unwrap_or_default();
        let tabs: Vec<Tab> = read_json(&self.dir.join(TABS_FILE))?.unwrap_or_else(default_tabs);
        let ledger = Ledger { transactions, tabs };
        tracing::debug!(
            dir = %self.dir.display(),
            transactions = ledger.transactions.len(),
            tabs = ledger.tabs.len(),
            "store: loaded"
        );
        Ok(ledger)
    }

    pub fn save(&self, ledger: &Ledger) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;
        write_json(&self.dir.join(TRANSACTIONS_FILE), &ledger.transactions)?;
        write_json(&self.dir.join(TABS_FILE), &ledger.tabs)?;
        tracing::info!(dir = %self.dir.display(), "store: saved");
        Ok(())
    }
}

/// `Ok(None)` when the file does not exist.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })
}

/// Write via a sibling temp file and rename, so a crash never leaves a torn blob.
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StoreError> {
    let json = serde_json::to_vec_pretty(value).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    let tmp = path.with_extension("json.tmp");
    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    std::fs::write(&tmp, json).map_err(io_err)?;
    std::fs::rename(&tmp, path).map_err(io_err)
}
