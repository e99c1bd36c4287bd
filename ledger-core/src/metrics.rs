//! Metrics collection for observability
//!
//! This module provides Prometheus metrics for monitoring the ledger.
//!
//! # Metrics
//!
//! - `eventpay_cards_issued_total` - Total number of cards issued
//! - `eventpay_recharges_total` - Total number of committed recharges
//! - `eventpay_payments_total` - Total number of committed payments
//! - `eventpay_payments_rejected_total` - Total number of rejected payments
//! - `eventpay_payment_amount` - Histogram of payment amounts

use prometheus::{Histogram, HistogramOpts, IntCounter, Opts, Registry};
use std::sync::Arc;

/// Metrics collector
///
/// All collectors register on an instance-scoped registry, never the
/// process-wide default, so independent ledgers (test fixtures included)
/// cannot collide on metric names.
#[derive(Clone)]
pub struct Metrics {
    /// Total cards issued
    pub cards_issued_total: IntCounter,

    /// Total committed recharges
    pub recharges_total: IntCounter,

    /// Total committed payments
    pub payments_total: IntCounter,

    /// Total rejected payments
    pub payments_rejected_total: IntCounter,

    /// Payment amount histogram
    pub payment_amount: Histogram,

    /// Prometheus registry
    pub registry: Arc<Registry>,
}

impl Metrics {
    /// Create new metrics collector
    pub fn new() -> prometheus::Result<Self> {
        let registry = Arc::new(Registry::new());

        let cards_issued_total = IntCounter::with_opts(Opts::new(
            "eventpay_cards_issued_total",
            "Total number of cards issued",
        ))?;
        registry.register(Box::new(cards_issued_total.clone()))?;

        let recharges_total = IntCounter::with_opts(Opts::new(
            "eventpay_recharges_total",
            "Total number of committed recharges",
        ))?;
        registry.register(Box::new(recharges_total.clone()))?;

        let payments_total = IntCounter::with_opts(Opts::new(
            "eventpay_payments_total",
            "Total number of committed payments",
        ))?;
        registry.register(Box::new(payments_total.clone()))?;

        let payments_rejected_total = IntCounter::with_opts(Opts::new(
            "eventpay_payments_rejected_total",
            "Total number of rejected payments",
        ))?;
        registry.register(Box::new(payments_rejected_total.clone()))?;

        let payment_amount = Histogram::with_opts(
            HistogramOpts::new("eventpay_payment_amount", "Histogram of payment amounts")
                .buckets(vec![1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0]),
        )?;
        registry.register(Box::new(payment_amount.clone()))?;

        Ok(Self {
            cards_issued_total,
            recharges_total,
            payments_total,
            payments_rejected_total,
            payment_amount,
            registry,
        })
    }

    /// Record card issuance
    pub fn record_card_issued(&self) {
        self.cards_issued_total.inc();
    }

    /// Record committed recharge
    pub fn record_recharge(&self) {
        self.recharges_total.inc();
    }

    /// Record committed payment
    pub fn record_payment(&self, amount: f64) {
        self.payments_total.inc();
        self.payment_amount.observe(amount);
    }

    /// Record rejected payment
    pub fn record_payment_rejected(&self) {
        self.payments_rejected_total.inc();
    }

    /// Get metrics registry
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new().expect("Failed to create metrics")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new().unwrap();
        assert_eq!(metrics.payments_total.get(), 0);
        assert_eq!(metrics.cards_issued_total.get(), 0);
    }

    #[test]
    fn test_independent_instances_do_not_collide() {
        // Two collectors in one process must both construct cleanly
        let a = Metrics::new().unwrap();
        let b = Metrics::new().unwrap();

        a.record_payment(15.50);
        assert_eq!(a.payments_total.get(), 1);
        assert_eq!(b.payments_total.get(), 0);
    }

    #[test]
    fn test_record_payment_rejected() {
        let metrics = Metrics::new().unwrap();
        metrics.record_payment_rejected();
        metrics.record_payment_rejected();
        assert_eq!(metrics.payments_rejected_total.get(), 2);
    }

    #[test]
    fn test_registry_gathers_all_collectors() {
        let metrics = Metrics::new().unwrap();
        metrics.record_card_issued();

        let families = metrics.registry().gather();
        assert_eq!(families.len(), 5);
    }
}
