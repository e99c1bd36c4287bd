//! EventPay Ledger Core
//!
//! In-memory transaction ledger for closed-loop prepaid event cards.
//!
//! # Architecture
//!
//! - **Single Store**: One lock guards users, cards, transactions and the audit trail
//! - **Check-Then-Act**: Every mutation validates and applies inside one critical section
//! - **Pure Rules**: Transition rules are side-effect-free functions over snapshots
//! - **Append-Only Records**: Transactions and audit entries are never modified or deleted
//!
//! # Invariants
//!
//! - Balances never go negative
//! - Money conservation: balance == issued + Σ(recharges) - Σ(payments) for every card
//! - Failed operations mutate nothing: no balance change, no transaction, no audit entry
//! - TXN and LOG sequences are monotonic and gap-free

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod types;
pub mod store;
pub mod rules;
pub mod ledger;
pub mod audit;
pub mod error;
pub mod config;
pub mod metrics;

// Re-exports
pub use error::{Error, Result};
pub use types::{
    Card, CardId, CardStatus, LogId, PaymentReceipt, RechargeReceipt, Transaction,
    TransactionId, TransactionKind, User, UserId,
};
pub use ledger::Ledger;
pub use audit::{AuditEntry, AuditFilter, OperationKind};
pub use config::Config;
pub use metrics::Metrics;
pub use store::LedgerStore;
