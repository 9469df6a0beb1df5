//! Configuration for an issuance ledger instance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants;

/// Issuance policy configuration.
///
/// `max_supply` is fixed for the ledger's lifetime; `unit_price` and
/// `base_metadata_pointer` are owner-mutable at any time. Changing the
/// price never retroactively affects already-completed issuances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuanceConfig {
    /// Hard cap on the number of ids the ledger will ever issue. At least 1.
    pub max_supply: u64,
    /// Price of a single paid mint.
    pub unit_price: Decimal,
    /// Prefix for per-id metadata pointers (pointer = base + decimal id).
    pub base_metadata_pointer: String,
}

impl IssuanceConfig {
    /// Create a config with the default unit price.
    ///
    /// # Panics
    /// Panics if `max_supply` is zero.
    #[must_use]
    pub fn new(base_metadata_pointer: impl Into<String>, max_supply: u64) -> Self {
        assert!(max_supply >= 1, "IssuanceConfig max_supply must be >= 1");
        Self {
            max_supply,
            unit_price: Self::default_unit_price(),
            base_metadata_pointer: base_metadata_pointer.into(),
        }
    }

    /// The deploy-time default unit price (0.05).
    #[must_use]
    pub fn default_unit_price() -> Decimal {
        Decimal::new(
            constants::DEFAULT_UNIT_PRICE_MANTISSA,
            constants::DEFAULT_UNIT_PRICE_SCALE,
        )
    }

    /// Metadata pointer for an id, without checking whether it was issued.
    /// Issuance checks belong to the ledger, which knows the counter.
    #[must_use]
    pub fn metadata_pointer(&self, id: u64) -> String {
        format!("{}{id}", self.base_metadata_pointer)
    }
}
