//! Validation and transition rules
//!
//! Stateless decision functions: each takes the current entity snapshot(s)
//! plus the requested operation parameters and returns either the approved
//! new card state or a typed failure. Nothing here touches the store; the
//! orchestration layer applies the returned delta inside the same critical
//! section that produced the snapshots.
//!
//! # Error precedence
//!
//! Payment-shaped operations check in a fixed order: amount validity, card
//! existence, card status, balance sufficiency. Terminal connectivity is a
//! terminal-local concern checked before any ledger access. Issue keeps its
//! own order: user existence, card uniqueness, amount validity.

use crate::error::{Error, Result};
use crate::types::{Card, CardId, CardStatus, User, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Approve issuing a new card
///
/// Cards are issued already activated, with `activated_at` set to the
/// issue instant.
pub fn issue_card(
    user: Option<&User>,
    existing: Option<&Card>,
    card_id: &CardId,
    user_id: &UserId,
    initial_balance: Decimal,
    now: DateTime<Utc>,
) -> Result<Card> {
    if user.is_none() {
        return Err(Error::UserNotFound(user_id.clone()));
    }
    if existing.is_some() {
        return Err(Error::CardAlreadyExists(card_id.clone()));
    }
    if initial_balance < Decimal::ZERO {
        return Err(Error::InvalidAmount(initial_balance));
    }

    Ok(Card {
        card_id: card_id.clone(),
        user_id: user_id.clone(),
        balance: initial_balance,
        status: CardStatus::Active,
        issued_at: now,
        activated_at: Some(now),
        blocked_at: None,
    })
}

/// Approve activating a card
///
/// Idempotent: activating an already-active card succeeds and just
/// refreshes `activated_at`.
pub fn activate_card(card: Option<&Card>, card_id: &CardId, now: DateTime<Utc>) -> Result<Card> {
    let card = card.ok_or_else(|| Error::CardNotRegistered(card_id.clone()))?;

    let mut updated = card.clone();
    updated.status = CardStatus::Active;
    updated.activated_at = Some(now);
    updated.blocked_at = None;
    Ok(updated)
}

/// Approve blocking a card
///
/// Idempotent: blocking an already-blocked card succeeds and just
/// refreshes `blocked_at`.
pub fn block_card(card: Option<&Card>, card_id: &CardId, now: DateTime<Utc>) -> Result<Card> {
    let card = card.ok_or_else(|| Error::CardNotRegistered(card_id.clone()))?;

    let mut updated = card.clone();
    updated.status = CardStatus::Blocked;
    updated.blocked_at = Some(now);
    Ok(updated)
}

/// Approve a recharge
///
/// Blocked cards may still be recharged; only payments require an active
/// card. No upper bound on the resulting balance.
pub fn recharge(card: Option<&Card>, card_id: &CardId, amount: Decimal) -> Result<Card> {
    if amount <= Decimal::ZERO {
        return Err(Error::InvalidAmount(amount));
    }
    let card = card.ok_or_else(|| Error::CardNotRegistered(card_id.clone()))?;

    let mut updated = card.clone();
    updated.balance += amount;
    Ok(updated)
}

/// Approve a payment
pub fn payment(card: Option<&Card>, card_id: &CardId, amount: Decimal) -> Result<Card> {
    if amount <= Decimal::ZERO {
        return Err(Error::InvalidAmount(amount));
    }
    let card = card.ok_or_else(|| Error::CardNotRegistered(card_id.clone()))?;
    if card.status == CardStatus::Blocked {
        return Err(Error::CardBlocked(card_id.clone()));
    }
    if card.balance < amount {
        return Err(Error::InsufficientBalance {
            card_id: card_id.clone(),
            balance: card.balance,
            amount,
        });
    }

    let mut updated = card.clone();
    updated.balance -= amount;
    Ok(updated)
}

/// Read-only verification: existence then status, no amount or balance check
pub fn verify_card(card: Option<&Card>, card_id: &CardId) -> Result<Card> {
    let card = card.ok_or_else(|| Error::CardNotRegistered(card_id.clone()))?;
    if card.status == CardStatus::Blocked {
        return Err(Error::CardBlocked(card_id.clone()));
    }
    Ok(card.clone())
}
