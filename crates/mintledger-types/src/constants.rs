//! System-wide constants for the MintLedger issuance ledger.

/// Maximum tokens a single public batch mint may request.
pub const MAX_PUBLIC_BATCH: u64 = 20;

/// Maximum accounts a single allow-list batch update may carry.
pub const MAX_ALLOWLIST_UPDATE: usize = 100;

/// Default unit price as (mantissa, scale) for `Decimal::new`: 0.05.
pub const DEFAULT_UNIT_PRICE_MANTISSA: i64 = 5;

/// Scale companion to [`DEFAULT_UNIT_PRICE_MANTISSA`].
pub const DEFAULT_UNIT_PRICE_SCALE: u32 = 2;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Ledger name.
pub const LEDGER_NAME: &str = "MintLedger";
