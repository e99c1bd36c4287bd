//! Inquiry terminal service: read-only balance and history views

use chrono::{DateTime, Utc};
use eventpay_ledger::{Card, CardId, CardStatus, Error, Ledger, Result, Transaction, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Balance snapshot for one card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceInfo {
    /// Card being queried
    pub card_id: CardId,
    /// Card holder
    pub user_id: UserId,
    /// Balance at query time
    pub balance: Decimal,
    /// Card status at query time
    pub status: CardStatus,
    /// Query timestamp
    pub queried_at: DateTime<Utc>,
}

/// Full statement for one card, newest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionHistory {
    /// Card being queried
    pub card_id: CardId,
    /// Card holder
    pub user_id: UserId,
    /// Balance the statement adds up to
    pub current_balance: Decimal,
    /// Every transaction on the card, newest first
    pub transactions: Vec<Transaction>,
    /// Query timestamp
    pub queried_at: DateTime<Utc>,
}

/// InquiryTerminal answers balance and history questions
pub struct InquiryTerminal {
    terminal_id: String,
    ledger: Arc<Ledger>,
}

impl InquiryTerminal {
    pub fn new(terminal_id: impl Into<String>, ledger: Arc<Ledger>) -> Self {
        Self {
            terminal_id: terminal_id.into(),
            ledger,
        }
    }

    /// Terminal identifier
    pub fn terminal_id(&self) -> &str {
        &self.terminal_id
    }

    /// Balance and status for a registered card; works for blocked cards too
    pub fn check_balance(&self, card_id: &CardId) -> Result<BalanceInfo> {
        let card = self
            .ledger
            .card(card_id)
            .ok_or_else(|| Error::CardNotRegistered(card_id.clone()))?;

        Ok(BalanceInfo {
            card_id: card.card_id,
            user_id: card.user_id,
            balance: card.balance,
            status: card.status,
            queried_at: Utc::now(),
        })
    }

    /// Statement with every transaction on a card, newest first
    pub fn view_transaction_history(&self, card_id: &CardId) -> Result<TransactionHistory> {
        let (card, transactions) = self.ledger.card_statement(card_id)?;

        Ok(TransactionHistory {
            card_id: card.card_id,
            user_id: card.user_id,
            current_balance: card.balance,
            transactions,
            queried_at: Utc::now(),
        })
    }

    /// Every card registered for the event, sorted by card id; the status
    /// field tells blocked cards apart
    pub fn list_valid_cards(&self) -> Vec<Card> {
        self.ledger.card_directory()
    }

    /// Recharge records, optionally narrowed to one card, newest first
    pub fn list_recharges(&self, card_id: Option<&CardId>) -> Vec<Transaction> {
        self.ledger.recharges(card_id)
    }
}
