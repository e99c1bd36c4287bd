//! Error types for the event card ledger

use crate::types::{CardId, UserId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Result type for ledger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Ledger errors
///
/// Every business failure here is a normal, expected outcome of rule
/// evaluation; none aborts the process and none leaves partial state behind.
#[derive(Error, Debug)]
pub enum Error {
    /// Referenced user does not exist
    #[error("User {0} not found")]
    UserNotFound(UserId),

    /// Referenced card was never issued for this event
    #[error("Card {0} is not registered for this event")]
    CardNotRegistered(CardId),

    /// Card id already present at issue time
    #[error("Card {0} already exists")]
    CardAlreadyExists(CardId),

    /// Payment attempted against a blocked card
    #[error("Card {0} is blocked")]
    CardBlocked(CardId),

    /// Amount <= 0 for recharge/payment, or negative initial balance at issue
    #[error("Invalid amount {0}")]
    InvalidAmount(Decimal),

    /// Payment amount exceeds the current balance
    #[error("Insufficient balance on card {card_id}: balance {balance}, requested {amount}")]
    InsufficientBalance {
        /// Card that was charged
        card_id: CardId,
        /// Balance at the time of the attempt
        balance: Decimal,
        /// Amount the terminal requested
        amount: Decimal,
    },

    /// Terminal-local connectivity flag was false at call time
    #[error("Connection failure: terminal {0} is offline")]
    ConnectionFailure(String),

    /// Store-level uniqueness violation
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_insufficient_balance_reports_both_figures() {
        let err = Error::InsufficientBalance {
            card_id: CardId::new("CARD001"),
            balance: dec!(34.50),
            amount: dec!(100.00),
        };
        let msg = err.to_string();
        assert!(msg.contains("34.50"));
        assert!(msg.contains("100.00"));
        assert!(msg.contains("CARD001"));
    }

    #[test]
    fn test_card_not_registered_names_the_card() {
        let err = Error::CardNotRegistered(CardId::new("FAKE999"));
        assert_eq!(
            err.to_string(),
            "Card FAKE999 is not registered for this event"
        );
    }

    #[test]
    fn test_connection_failure_names_the_terminal() {
        let err = Error::ConnectionFailure("TERM001".to_string());
        assert_eq!(
            err.to_string(),
            "Connection failure: terminal TERM001 is offline"
        );
    }
}
