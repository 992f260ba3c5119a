//! ggoolmoney-core — 꿀머니 core library.
//!
//! This crate exposes the layers of the expense ledger as public modules,
//! plus the shared record types used across all of them.
//!
//! # Architecture
//!
//! ```text
//! chosung ──► filter ──► (list view)
//!                ▲
//!   store ───────┘
//! ```
//!
//! [`chosung`] is the pure search core: glyph classification and the
//! substring-or-initial-consonant matcher. [`filter`] applies it to ledger
//! records; [`store`] owns and persists the ledger.

pub mod chosung;
pub mod config;
pub mod dates;
pub mod filter;
pub mod store;
pub mod types;
pub mod validate;

pub use chosung::{classify, matches, Query};
pub use filter::TransactionFilter;
pub use store::{Ledger, LedgerStore, StoreError};
pub use types::{SortConfig, SortDirection, SortKey, Tab, TabFilter, Transaction, TransactionDraft};
