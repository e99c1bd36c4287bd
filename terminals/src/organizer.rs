//! Organizer service: attendee registration and the card lifecycle

use eventpay_ledger::{Card, CardId, Ledger, RechargeReceipt, Result, User, UserId};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Fallback block reason when the organizer gives none
const DEFAULT_BLOCK_REASON: &str = "user reported loss";

/// Organizer registers attendees and manages cards against the ledger
pub struct Organizer {
    organizer_id: String,
    ledger: Arc<Ledger>,
}

impl Organizer {
    pub fn new(organizer_id: impl Into<String>, ledger: Arc<Ledger>) -> Self {
        Self {
            organizer_id: organizer_id.into(),
            ledger,
        }
    }

    /// Organizer identifier recorded as the audit actor
    pub fn organizer_id(&self) -> &str {
        &self.organizer_id
    }

    /// Register a festival attendee
    pub fn create_user(&self, user_id: &UserId, name: &str) -> Result<User> {
        self.ledger.create_user(user_id, name, &self.organizer_id)
    }

    /// Issue a card to a registered attendee; active immediately
    pub fn issue_card(
        &self,
        card_id: &CardId,
        user_id: &UserId,
        initial_balance: Decimal,
    ) -> Result<Card> {
        self.ledger
            .issue_card(card_id, user_id, initial_balance, &self.organizer_id)
    }

    /// Re-activate a card; idempotent for cards already active
    pub fn activate_card(&self, card_id: &CardId) -> Result<Card> {
        self.ledger.activate_card(card_id, &self.organizer_id)
    }

    /// Block a card; the reason defaults to a reported loss
    pub fn block_card(&self, card_id: &CardId, reason: Option<&str>) -> Result<Card> {
        let reason = reason.unwrap_or(DEFAULT_BLOCK_REASON);
        self.ledger.block_card(card_id, reason, &self.organizer_id)
    }

    /// Credit a card at the recharge booth
    pub fn recharge_card(&self, card_id: &CardId, amount: Decimal) -> Result<RechargeReceipt> {
        self.ledger.recharge(card_id, amount, &self.organizer_id)
    }
}
