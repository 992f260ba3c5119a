//! ggoolmoney — 꿀머니 expense ledger.
//!
//! Command-line front end over an expense ledger whose transaction list is
//! searched with chosung-aware matching: typing only the leading consonants
//! of a Korean word (`ㅅㅂ`) finds it (`식비`). The core layers live in
//! `ggoolmoney-core` and are re-exported here so that integration tests and
//! benches can import them from one place.

pub mod render;

pub use ggoolmoney_core::{
    chosung, config, dates, filter, store, types, validate, classify, matches, Ledger, LedgerStore,
    Query, SortConfig, SortDirection, SortKey, StoreError, Tab, TabFilter, Transaction,
    TransactionDraft, TransactionFilter,
};
