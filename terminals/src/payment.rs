//! Payment terminal service: connectivity-gated charging

use eventpay_ledger::{Card, CardId, Error, Ledger, PaymentReceipt, Result};
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

/// PaymentTerminal charges cards on behalf of one merchant stand
pub struct PaymentTerminal {
    terminal_id: String,
    shop_name: String,
    connected: AtomicBool,
    ledger: Arc<Ledger>,
}

impl PaymentTerminal {
    /// Terminals start connected
    pub fn new(
        terminal_id: impl Into<String>,
        shop_name: impl Into<String>,
        ledger: Arc<Ledger>,
    ) -> Self {
        Self {
            terminal_id: terminal_id.into(),
            shop_name: shop_name.into(),
            connected: AtomicBool::new(true),
            ledger,
        }
    }

    /// Terminal identifier recorded on every payment
    pub fn terminal_id(&self) -> &str {
        &self.terminal_id
    }

    /// Merchant label printed on receipts
    pub fn shop_name(&self) -> &str {
        &self.shop_name
    }

    /// Whether the terminal can currently reach the ledger
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Simulate the network link going up or down
    pub fn set_connection_status(&self, connected: bool) {
        self.connected.store(connected, Ordering::SeqCst);
        if connected {
            info!(terminal_id = %self.terminal_id, "Terminal back online");
        } else {
            warn!(terminal_id = %self.terminal_id, "Terminal went offline");
        }
    }

    /// Charge a card; connectivity is checked before anything else
    pub fn process_payment(&self, card_id: &CardId, amount: Decimal) -> Result<PaymentReceipt> {
        if !self.is_connected() {
            return Err(Error::ConnectionFailure(self.terminal_id.clone()));
        }
        self.ledger
            .pay(card_id, amount, &self.terminal_id, &self.shop_name)
    }

    /// Check a card could pay here without charging it
    pub fn verify_card(&self, card_id: &CardId) -> Result<Card> {
        if !self.is_connected() {
            return Err(Error::ConnectionFailure(self.terminal_id.clone()));
        }
        self.ledger.verify_card(card_id)
    }
}
