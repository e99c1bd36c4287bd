//! Append-only audit trail
//!
//! One entry per state-changing operation, appended in the same critical
//! section as the mutation it describes. Entries are never modified or
//! removed. The `details` payload carries the business facts of the
//! operation (amounts, balances, reason) as structured JSON.

use crate::types::{CardId, LogId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operation recorded by an audit entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationKind {
    /// Organizer registered a user
    UserCreated,
    /// Organizer issued a card
    CardIssued,
    /// Organizer activated a card
    CardActivated,
    /// Organizer blocked a card
    CardBlocked,
    /// Organizer recharged a card
    CardRecharged,
    /// Terminal debited a card
    PaymentMade,
}

impl OperationKind {
    /// Wire name, as serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::UserCreated => "USER_CREATED",
            OperationKind::CardIssued => "CARD_ISSUED",
            OperationKind::CardActivated => "CARD_ACTIVATED",
            OperationKind::CardBlocked => "CARD_BLOCKED",
            OperationKind::CardRecharged => "CARD_RECHARGED",
            OperationKind::PaymentMade => "PAYMENT_MADE",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Single audit trail record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Store-assigned id, monotonic across the trail
    pub log_id: LogId,

    /// What happened
    pub operation: OperationKind,

    /// When it was committed
    pub timestamp: DateTime<Utc>,

    /// Who did it (organizer id or terminal id)
    pub actor_id: String,

    /// Card involved, absent for user registration
    pub card_id: Option<CardId>,

    /// Business facts of the operation
    pub details: serde_json::Value,
}

/// Audit entry awaiting a store-assigned id
#[derive(Debug, Clone)]
pub struct NewAuditEntry {
    /// What happened
    pub operation: OperationKind,

    /// When it was committed
    pub timestamp: DateTime<Utc>,

    /// Who did it (organizer id or terminal id)
    pub actor_id: String,

    /// Card involved, absent for user registration
    pub card_id: Option<CardId>,

    /// Business facts of the operation
    pub details: serde_json::Value,
}

impl NewAuditEntry {
    /// Build a draft entry
    pub fn new(
        operation: OperationKind,
        actor_id: impl Into<String>,
        card_id: Option<CardId>,
        details: serde_json::Value,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            operation,
            timestamp,
            actor_id: actor_id.into(),
            card_id,
            details,
        }
    }

    /// Complete the record with the store-assigned id
    pub(crate) fn into_entry(self, log_id: LogId) -> AuditEntry {
        AuditEntry {
            log_id,
            operation: self.operation,
            timestamp: self.timestamp,
            actor_id: self.actor_id,
            card_id: self.card_id,
            details: self.details,
        }
    }
}

/// Filter over the audit trail
///
/// Every field is optional; an unset field matches all entries. The default
/// filter matches the whole trail.
#[derive(Debug, Clone, Default)]
pub struct AuditFilter {
    /// Match a single operation kind
    pub operation: Option<OperationKind>,

    /// Match a single actor
    pub actor_id: Option<String>,

    /// Match entries touching a single card
    pub card_id: Option<CardId>,

    /// Match entries at or after this instant
    pub from: Option<DateTime<Utc>>,

    /// Match entries at or before this instant
    pub to: Option<DateTime<Utc>>,
}

impl AuditFilter {
    /// Whether the entry passes every set predicate
    pub fn matches(&self, entry: &AuditEntry) -> bool {
        if let Some(operation) = self.operation {
            if entry.operation != operation {
                return false;
            }
        }

        if let Some(ref actor_id) = self.actor_id {
            if &entry.actor_id != actor_id {
                return false;
            }
        }

        if let Some(ref card_id) = self.card_id {
            if entry.card_id.as_ref() != Some(card_id) {
                return false;
            }
        }

        if let Some(from) = self.from {
            if entry.timestamp < from {
                return false;
            }
        }

        if let Some(to) = self.to {
            if entry.timestamp > to {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(seq: u64, operation: OperationKind, actor: &str, card: Option<&str>) -> AuditEntry {
        NewAuditEntry::new(
            operation,
            actor,
            card.map(CardId::new),
            json!({}),
            Utc::now(),
        )
        .into_entry(LogId::from_sequence(seq))
    }

    #[test]
    fn test_operation_kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&OperationKind::CardRecharged).unwrap(),
            "\"CARD_RECHARGED\""
        );
        assert_eq!(
            serde_json::to_string(&OperationKind::PaymentMade).unwrap(),
            "\"PAYMENT_MADE\""
        );
        assert_eq!(OperationKind::UserCreated.as_str(), "USER_CREATED");
    }

    #[test]
    fn test_default_filter_matches_everything() {
        let filter = AuditFilter::default();
        assert!(filter.matches(&entry(1, OperationKind::CardIssued, "ORG001", Some("CARD001"))));
        assert!(filter.matches(&entry(2, OperationKind::UserCreated, "ORG001", None)));
    }

    #[test]
    fn test_filter_by_operation_and_actor() {
        let filter = AuditFilter {
            operation: Some(OperationKind::PaymentMade),
            actor_id: Some("TERM001".to_string()),
            ..Default::default()
        };

        assert!(filter.matches(&entry(1, OperationKind::PaymentMade, "TERM001", Some("CARD001"))));
        assert!(!filter.matches(&entry(2, OperationKind::PaymentMade, "TERM002", Some("CARD001"))));
        assert!(!filter.matches(&entry(3, OperationKind::CardRecharged, "TERM001", Some("CARD001"))));
    }

    #[test]
    fn test_filter_by_card() {
        let filter = AuditFilter {
            card_id: Some(CardId::new("CARD001")),
            ..Default::default()
        };

        assert!(filter.matches(&entry(1, OperationKind::CardBlocked, "ORG001", Some("CARD001"))));
        assert!(!filter.matches(&entry(2, OperationKind::CardBlocked, "ORG001", Some("CARD002"))));
        // User registration entries carry no card and never match a card filter
        assert!(!filter.matches(&entry(3, OperationKind::UserCreated, "ORG001", None)));
    }

    #[test]
    fn test_filter_by_time_range() {
        let old = entry(1, OperationKind::CardIssued, "ORG001", Some("CARD001"));
        let cutoff = old.timestamp + chrono::Duration::seconds(60);

        let filter = AuditFilter {
            from: Some(cutoff),
            ..Default::default()
        };
        assert!(!filter.matches(&old));

        let filter = AuditFilter {
            to: Some(cutoff),
            ..Default::default()
        };
        assert!(filter.matches(&old));
    }
}
