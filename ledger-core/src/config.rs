//! Configuration for the ledger

use serde::{Deserialize, Serialize};

/// Ledger configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service name
    pub service_name: String,

    /// Service version
    pub service_version: String,

    /// Audit trail configuration
    pub audit: AuditConfig,

    /// Capacity configuration
    pub capacity: CapacityConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "eventpay-ledger".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            audit: AuditConfig::default(),
            capacity: CapacityConfig::default(),
        }
    }
}

/// Audit trail configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Record an audit entry for every state-changing operation
    pub enabled: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Capacity configuration
///
/// Pre-sizes the in-memory tables; purely a performance hint, the ledger
/// grows past these freely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacityConfig {
    /// Expected number of registered users
    pub expected_users: usize,

    /// Expected number of issued cards
    pub expected_cards: usize,

    /// Expected number of transactions over the event lifetime
    pub expected_transactions: usize,
}

impl Default for CapacityConfig {
    fn default() -> Self {
        Self {
            expected_users: 1_000,
            expected_cards: 1_000,
            expected_transactions: 10_000,
        }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Config::default();

        if let Ok(name) = std::env::var("EVENTPAY_SERVICE_NAME") {
            config.service_name = name;
        }

        if let Ok(enabled) = std::env::var("EVENTPAY_AUDIT_ENABLED") {
            config.audit.enabled = enabled
                .parse()
                .map_err(|_| crate::Error::Config(format!("Invalid EVENTPAY_AUDIT_ENABLED: {}", enabled)))?;
        }

        if let Ok(cards) = std::env::var("EVENTPAY_EXPECTED_CARDS") {
            config.capacity.expected_cards = cards
                .parse()
                .map_err(|_| crate::Error::Config(format!("Invalid EVENTPAY_EXPECTED_CARDS: {}", cards)))?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.service_name, "eventpay-ledger");
        assert!(config.audit.enabled);
        assert_eq!(config.capacity.expected_cards, 1_000);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
service_name = "festival-ledger"
service_version = "0.1.0"

[audit]
enabled = false

[capacity]
expected_users = 50
expected_cards = 75
expected_transactions = 500
"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.service_name, "festival-ledger");
        assert!(!config.audit.enabled);
        assert_eq!(config.capacity.expected_cards, 75);
    }

    #[test]
    fn test_from_file_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "service_name = [not toml").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }
}
