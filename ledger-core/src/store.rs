//! In-memory ledger store
//!
//! Sole mutable state holder. All access to users, cards, transactions and
//! the audit trail passes through [`LedgerStore`]; business rules live one
//! layer up in [`crate::rules`] and [`crate::ledger`]. The store enforces
//! only uniqueness and lookup.
//!
//! # Concurrency
//!
//! State sits behind a single `parking_lot::RwLock`. Public operations take
//! the lock for their own duration. The orchestration layer composes whole
//! check-then-act sequences through the crate-internal `read`/`write`
//! closures, so validation, mutation and id assignment share one critical
//! section and no interleaving can observe a partially-applied operation.

use crate::audit::{AuditEntry, NewAuditEntry};
use crate::error::{Error, Result};
use crate::types::{
    Card, CardId, LogId, NewTransaction, Transaction, TransactionId, User, UserId,
};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

/// Mutable ledger state, guarded by the store lock
#[derive(Debug, Default)]
pub(crate) struct LedgerState {
    users: HashMap<UserId, User>,
    cards: HashMap<CardId, Card>,
    transactions: Vec<Transaction>,
    audit_log: Vec<AuditEntry>,
    txn_seq: u64,
    log_seq: u64,
}

impl LedgerState {
    fn with_capacity(users: usize, cards: usize, transactions: usize) -> Self {
        Self {
            users: HashMap::with_capacity(users),
            cards: HashMap::with_capacity(cards),
            transactions: Vec::with_capacity(transactions),
            audit_log: Vec::with_capacity(transactions),
            txn_seq: 0,
            log_seq: 0,
        }
    }

    // User operations

    pub(crate) fn user(&self, id: &UserId) -> Option<&User> {
        self.users.get(id)
    }

    pub(crate) fn create_user(&mut self, user: User) -> Result<()> {
        if self.users.contains_key(&user.user_id) {
            return Err(Error::DuplicateKey(user.user_id.to_string()));
        }
        debug!(user_id = %user.user_id, "Created user");
        self.users.insert(user.user_id.clone(), user);
        Ok(())
    }

    // Card operations

    pub(crate) fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    pub(crate) fn create_card(&mut self, card: Card) -> Result<()> {
        if self.cards.contains_key(&card.card_id) {
            return Err(Error::DuplicateKey(card.card_id.to_string()));
        }
        debug!(card_id = %card.card_id, user_id = %card.user_id, "Created card");
        self.cards.insert(card.card_id.clone(), card);
        Ok(())
    }

    /// Full replace of card state; the validation layer guarantees the new
    /// state already satisfies the invariants.
    pub(crate) fn update_card(&mut self, card: Card) -> Result<()> {
        if !self.cards.contains_key(&card.card_id) {
            return Err(Error::CardNotRegistered(card.card_id));
        }
        self.cards.insert(card.card_id.clone(), card);
        Ok(())
    }

    pub(crate) fn cards(&self) -> Vec<Card> {
        self.cards.values().cloned().collect()
    }

    pub(crate) fn card_count(&self) -> usize {
        self.cards.len()
    }

    // Transaction operations

    /// Append-only; the id comes from the internal monotonic counter and is
    /// never reused. Must run inside the same critical section as the
    /// balance mutation it records.
    pub(crate) fn append_transaction(&mut self, draft: NewTransaction) -> Transaction {
        self.txn_seq += 1;
        let transaction = draft.into_transaction(TransactionId::from_sequence(self.txn_seq));
        debug!(
            transaction_id = %transaction.transaction_id,
            card_id = %transaction.card_id,
            kind = %transaction.kind,
            amount = %transaction.amount,
            "Appended transaction"
        );
        self.transactions.push(transaction.clone());
        transaction
    }

    /// Unordered by contract; sorting is a caller concern
    pub(crate) fn transactions_for_card(&self, card_id: &CardId) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|t| &t.card_id == card_id)
            .cloned()
            .collect()
    }

    pub(crate) fn transactions(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    pub(crate) fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    // Audit operations

    /// Append-only, ids monotonic like transactions
    pub(crate) fn append_audit(&mut self, draft: NewAuditEntry) -> LogId {
        self.log_seq += 1;
        let entry = draft.into_entry(LogId::from_sequence(self.log_seq));
        let log_id = entry.log_id.clone();
        debug!(
            log_id = %log_id,
            operation = %entry.operation,
            actor_id = %entry.actor_id,
            "Appended audit entry"
        );
        self.audit_log.push(entry);
        log_id
    }

    pub(crate) fn audit_entries(&self) -> Vec<AuditEntry> {
        self.audit_log.clone()
    }

    pub(crate) fn audit_count(&self) -> usize {
        self.audit_log.len()
    }
}

/// Thread-safe handle over the ledger state
///
/// All reads hand out cloned snapshots, never references into the guarded
/// state.
#[derive(Debug, Default)]
pub struct LedgerStore {
    inner: RwLock<LedgerState>,
}

impl LedgerStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty store with pre-sized tables
    pub fn with_capacity(users: usize, cards: usize, transactions: usize) -> Self {
        Self {
            inner: RwLock::new(LedgerState::with_capacity(users, cards, transactions)),
        }
    }

    // User operations

    /// Register a user; fails with `DuplicateKey` if the id exists
    pub fn create_user(&self, user: User) -> Result<()> {
        self.inner.write().create_user(user)
    }

    /// Look up a user snapshot
    pub fn user(&self, id: &UserId) -> Option<User> {
        self.inner.read().user(id).cloned()
    }

    // Card operations

    /// Register a card; fails with `DuplicateKey` if the id exists
    pub fn create_card(&self, card: Card) -> Result<()> {
        self.inner.write().create_card(card)
    }

    /// Look up a card snapshot
    pub fn card(&self, id: &CardId) -> Option<Card> {
        self.inner.read().card(id).cloned()
    }

    /// Replace a card's state; fails with `CardNotRegistered` if absent
    pub fn update_card(&self, card: Card) -> Result<()> {
        self.inner.write().update_card(card)
    }

    /// Snapshot of every card, unordered
    pub fn cards(&self) -> Vec<Card> {
        self.inner.read().cards()
    }

    /// Number of registered cards
    pub fn card_count(&self) -> usize {
        self.inner.read().card_count()
    }

    // Transaction operations

    /// Append a transaction, assigning the next `TXN` id
    pub fn append_transaction(&self, draft: NewTransaction) -> Transaction {
        self.inner.write().append_transaction(draft)
    }

    /// Every transaction for one card, unordered by contract
    pub fn transactions_for_card(&self, card_id: &CardId) -> Vec<Transaction> {
        self.inner.read().transactions_for_card(card_id)
    }

    /// Snapshot of the whole transaction log, in append order
    pub fn transactions(&self) -> Vec<Transaction> {
        self.inner.read().transactions()
    }

    /// Number of recorded transactions
    pub fn transaction_count(&self) -> usize {
        self.inner.read().transaction_count()
    }

    // Audit operations

    /// Append an audit entry, assigning the next `LOG` id
    pub fn append_audit(&self, draft: NewAuditEntry) -> LogId {
        self.inner.write().append_audit(draft)
    }

    /// Snapshot of the audit trail, in append order
    pub fn audit_entries(&self) -> Vec<AuditEntry> {
        self.inner.read().audit_entries()
    }

    /// Number of audit entries
    pub fn audit_count(&self) -> usize {
        self.inner.read().audit_count()
    }

    // Composite access for the orchestration layer

    /// Run a closure under the read lock
    pub(crate) fn read<R>(&self, f: impl FnOnce(&LedgerState) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run a closure under the write lock
    ///
    /// The whole check-then-act sequence of a business operation goes
    /// through a single call so it is atomic to concurrent callers.
    pub(crate) fn write<R>(&self, f: impl FnOnce(&mut LedgerState) -> R) -> R {
        f(&mut self.inner.write())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CardStatus;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn user(id: &str) -> User {
        User {
            user_id: UserId::new(id),
            name: format!("{} name", id),
            created_at: Utc::now(),
        }
    }

    fn card(id: &str, owner: &str) -> Card {
        let now = Utc::now();
        Card {
            card_id: CardId::new(id),
            user_id: UserId::new(owner),
            balance: dec!(0),
            status: CardStatus::Active,
            issued_at: now,
            activated_at: Some(now),
            blocked_at: None,
        }
    }

    #[test]
    fn test_duplicate_user_rejected() {
        let store = LedgerStore::new();
        store.create_user(user("USER001")).unwrap();

        let err = store.create_user(user("USER001")).unwrap_err();
        assert!(matches!(err, Error::DuplicateKey(ref key) if key == "USER001"));
    }

    #[test]
    fn test_duplicate_card_rejected() {
        let store = LedgerStore::new();
        store.create_card(card("CARD001", "USER001")).unwrap();

        let err = store.create_card(card("CARD001", "USER001")).unwrap_err();
        assert!(matches!(err, Error::DuplicateKey(ref key) if key == "CARD001"));
    }

    #[test]
    fn test_update_missing_card_rejected() {
        let store = LedgerStore::new();
        let err = store.update_card(card("CARD001", "USER001")).unwrap_err();
        assert!(matches!(err, Error::CardNotRegistered(_)));
    }

    #[test]
    fn test_transaction_ids_are_sequential_from_one() {
        let store = LedgerStore::new();
        let now = Utc::now();

        for expected in ["TXN00000001", "TXN00000002", "TXN00000003"] {
            let txn = store.append_transaction(NewTransaction::recharge(
                CardId::new("CARD001"),
                dec!(10),
                "ORG001",
                "Card recharged by organizer",
                now,
            ));
            assert_eq!(txn.transaction_id.as_str(), expected);
        }
        assert_eq!(store.transaction_count(), 3);
    }

    #[test]
    fn test_audit_ids_are_sequential_from_one() {
        use crate::audit::{NewAuditEntry, OperationKind};

        let store = LedgerStore::new();
        let log_id = store.append_audit(NewAuditEntry::new(
            OperationKind::UserCreated,
            "ORG001",
            None,
            serde_json::json!({}),
            Utc::now(),
        ));
        assert_eq!(log_id.as_str(), "LOG00000001");
        assert_eq!(store.audit_count(), 1);
    }

    #[test]
    fn test_transactions_for_card_filters_by_card() {
        let store = LedgerStore::new();
        let now = Utc::now();

        store.append_transaction(NewTransaction::recharge(
            CardId::new("CARD001"),
            dec!(10),
            "ORG001",
            "Card recharged by organizer",
            now,
        ));
        store.append_transaction(NewTransaction::recharge(
            CardId::new("CARD002"),
            dec!(20),
            "ORG001",
            "Card recharged by organizer",
            now,
        ));

        let txns = store.transactions_for_card(&CardId::new("CARD001"));
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].amount, dec!(10));
    }

    #[test]
    fn test_reads_hand_out_snapshots() {
        let store = LedgerStore::new();
        store.create_card(card("CARD001", "USER001")).unwrap();

        let mut snapshot = store.card(&CardId::new("CARD001")).unwrap();
        snapshot.balance = dec!(999);

        // Mutating the snapshot does not touch the store
        assert_eq!(store.card(&CardId::new("CARD001")).unwrap().balance, dec!(0));
    }
}
