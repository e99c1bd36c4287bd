//! Core types for the event card ledger
//!
//! All types are designed for:
//! - Exact arithmetic (Decimal for money, never float)
//! - Stable external naming (`TXN`/`LOG` sequence ids, SCREAMING_SNAKE_CASE kinds)
//! - Cheap snapshot cloning out of the store

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// User identifier chosen by the organizer at registration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Create new user ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Card identifier printed on the physical card
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(String);

impl CardId {
    /// Create new card ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transaction identifier assigned by the store
///
/// Formatted as `TXN` plus an 8-digit zero-padded sequence number, so the
/// lexicographic order of ids equals their generation order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TransactionId(String);

impl TransactionId {
    /// Build from a store sequence number
    pub fn from_sequence(seq: u64) -> Self {
        Self(format!("TXN{:08}", seq))
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Audit log identifier assigned by the store
///
/// Formatted as `LOG` plus an 8-digit zero-padded sequence number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LogId(String);

impl LogId {
    /// Build from a store sequence number
    pub fn from_sequence(seq: u64) -> Self {
        Self(format!("LOG{:08}", seq))
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Card lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardStatus {
    /// Card accepted at payment terminals
    Active,
    /// Card refused at payment terminals (lost, stolen, revoked)
    Blocked,
}

impl fmt::Display for CardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardStatus::Active => write!(f, "ACTIVE"),
            CardStatus::Blocked => write!(f, "BLOCKED"),
        }
    }
}

/// Event attendee registered by the organizer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID
    pub user_id: UserId,

    /// Display name
    pub name: String,

    /// Registration timestamp
    pub created_at: DateTime<Utc>,
}

/// Stored-value card owned by a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    /// Unique card ID
    pub card_id: CardId,

    /// Owning user (weak reference, lookup only)
    pub user_id: UserId,

    /// Current balance, never negative
    pub balance: Decimal,

    /// Lifecycle status
    pub status: CardStatus,

    /// Issuance timestamp
    pub issued_at: DateTime<Utc>,

    /// Last activation timestamp (cards are issued already activated)
    pub activated_at: Option<DateTime<Utc>>,

    /// Last block timestamp (cleared on re-activation)
    pub blocked_at: Option<DateTime<Utc>>,
}

impl Card {
    /// Whether payment terminals accept this card
    pub fn is_active(&self) -> bool {
        self.status == CardStatus::Active
    }
}

/// Balance movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    /// Balance debited at a payment terminal
    Payment,
    /// Balance credited by the organizer
    Recharge,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Payment => write!(f, "PAYMENT"),
            TransactionKind::Recharge => write!(f, "RECHARGE"),
        }
    }
}

/// Immutable record of a single balance movement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Store-assigned id, monotonic across the ledger
    pub transaction_id: TransactionId,

    /// Card whose balance moved
    pub card_id: CardId,

    /// Movement direction
    pub kind: TransactionKind,

    /// Amount moved, always positive
    pub amount: Decimal,

    /// Commit timestamp
    pub timestamp: DateTime<Utc>,

    /// Originating terminal (payments only)
    pub terminal_id: Option<String>,

    /// Originating organizer (recharges only)
    pub organizer_id: Option<String>,

    /// Human-readable summary
    pub description: String,
}

/// Transaction awaiting a store-assigned id
///
/// The constructors enforce that `terminal_id` is set iff the kind is
/// `Payment` and `organizer_id` iff `Recharge`.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    /// Card whose balance moved
    pub card_id: CardId,

    /// Movement direction
    pub kind: TransactionKind,

    /// Amount moved, always positive
    pub amount: Decimal,

    /// Commit timestamp
    pub timestamp: DateTime<Utc>,

    /// Originating terminal (payments only)
    pub terminal_id: Option<String>,

    /// Originating organizer (recharges only)
    pub organizer_id: Option<String>,

    /// Human-readable summary
    pub description: String,
}

impl NewTransaction {
    /// Debit record for a terminal payment
    pub fn payment(
        card_id: CardId,
        amount: Decimal,
        terminal_id: impl Into<String>,
        description: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            card_id,
            kind: TransactionKind::Payment,
            amount,
            timestamp,
            terminal_id: Some(terminal_id.into()),
            organizer_id: None,
            description: description.into(),
        }
    }

    /// Credit record for an organizer recharge
    pub fn recharge(
        card_id: CardId,
        amount: Decimal,
        organizer_id: impl Into<String>,
        description: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            card_id,
            kind: TransactionKind::Recharge,
            amount,
            timestamp,
            terminal_id: None,
            organizer_id: Some(organizer_id.into()),
            description: description.into(),
        }
    }

    /// Complete the record with the store-assigned id
    pub(crate) fn into_transaction(self, transaction_id: TransactionId) -> Transaction {
        Transaction {
            transaction_id,
            card_id: self.card_id,
            kind: self.kind,
            amount: self.amount,
            timestamp: self.timestamp,
            terminal_id: self.terminal_id,
            organizer_id: self.organizer_id,
            description: self.description,
        }
    }
}

/// Result of a committed recharge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RechargeReceipt {
    /// Id of the recorded RECHARGE transaction
    pub transaction_id: TransactionId,

    /// Card that was credited
    pub card_id: CardId,

    /// Amount credited
    pub amount: Decimal,

    /// Balance after the credit
    pub new_balance: Decimal,

    /// Commit timestamp
    pub timestamp: DateTime<Utc>,
}

/// Result of a committed payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    /// Id of the recorded PAYMENT transaction
    pub transaction_id: TransactionId,

    /// Card that was debited
    pub card_id: CardId,

    /// Amount debited
    pub amount: Decimal,

    /// Balance after the debit
    pub remaining_balance: Decimal,

    /// Terminal that took the payment
    pub terminal_id: String,

    /// Shop label of the terminal, may be empty
    pub shop_name: String,

    /// Commit timestamp
    pub timestamp: DateTime<Utc>,
}
