//! Error types for the MintLedger issuance ledger.
//!
//! All errors use the `ML_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Access / pause errors
//! - 2xx: Payment errors
//! - 3xx: Supply counter errors
//! - 4xx: Allow-list errors
//! - 5xx: Treasury errors
//! - 6xx: Ownership registry errors
//!
//! Every error is synchronous and aborts the triggering call with no partial
//! effect. The only silent no-ops in the system are the documented allow-list
//! ones (listing an existing holder, removing a non-member).

use rust_decimal::Decimal;
use thiserror::Error;

use crate::TokenId;

/// Central error enum for all MintLedger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    // =================================================================
    // Access / Pause Errors (1xx)
    // =================================================================
    /// The caller lacks the role the operation requires.
    #[error("ML_ERR_100: Unauthorized: caller is not the owner")]
    Unauthorized,

    /// Issuance was attempted while the emergency stop is tripped.
    #[error("ML_ERR_101: Paused: issuance is suspended")]
    Paused,

    // =================================================================
    // Payment Errors (2xx)
    // =================================================================
    /// Single mint requires the exact unit price.
    #[error("ML_ERR_200: Incorrect payment: expected {expected}, paid {paid}")]
    IncorrectPayment { expected: Decimal, paid: Decimal },

    /// Batch mint requires at least price x count; overpayment is kept.
    #[error("ML_ERR_201: Insufficient payment: need {needed}, paid {paid}")]
    InsufficientPayment { needed: Decimal, paid: Decimal },

    // =================================================================
    // Supply Counter Errors (3xx)
    // =================================================================
    /// A requested quantity was less than one.
    #[error("ML_ERR_300: Invalid count: the minimum is one token")]
    InvalidCount,

    /// A public batch mint exceeded the per-call cap.
    #[error("ML_ERR_301: Batch too large: requested {requested}, max {max}")]
    BatchTooLarge { requested: u64, max: u64 },

    /// Issuing the requested quantity would exceed the maximum supply.
    /// The whole batch is rejected; nothing is partially issued.
    #[error("ML_ERR_302: Capacity exceeded: requested {requested}, remaining {remaining}")]
    CapacityExceeded { requested: u64, remaining: u64 },

    // =================================================================
    // Allow-list Errors (4xx)
    // =================================================================
    /// Free mint attempted by an account that is not on the allow-list.
    #[error("ML_ERR_400: Not listed: caller is not on the allow-list")]
    NotListed,

    /// An allow-list batch update exceeded its cap.
    #[error("ML_ERR_401: Too many accounts: requested {requested}, max {max}")]
    TooManyAccounts { requested: usize, max: usize },

    // =================================================================
    // Treasury Errors (5xx)
    // =================================================================
    /// The withdrawal's underlying value transfer failed. The held balance
    /// is left intact so the withdrawal can be retried.
    #[error("ML_ERR_500: Transfer failed: {reason}")]
    TransferFailed { reason: String },

    // =================================================================
    // Ownership Registry Errors (6xx)
    // =================================================================
    /// Lookup on an id that has never been issued.
    #[error("ML_ERR_600: No such asset: {0}")]
    NoSuchAsset(TokenId),

    /// The registry already records a holder for this id. Unreachable as
    /// long as the supply counter never hands out an id twice.
    #[error("ML_ERR_601: Asset already exists: {0}")]
    AlreadyExists(TokenId),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let err = LedgerError::NoSuchAsset(TokenId(9));
        let msg = format!("{err}");
        assert!(msg.starts_with("ML_ERR_600"), "Got: {msg}");
        assert!(msg.contains('9'));
    }

    #[test]
    fn incorrect_payment_display() {
        let err = LedgerError::IncorrectPayment {
            expected: Decimal::new(5, 2),
            paid: Decimal::ZERO,
        };
        let msg = format!("{err}");
        assert!(msg.contains("ML_ERR_200"));
        assert!(msg.contains("0.05"));
    }

    #[test]
    fn capacity_exceeded_display() {
        let err = LedgerError::CapacityExceeded {
            requested: 6,
            remaining: 2,
        };
        let msg = format!("{err}");
        assert!(msg.contains("ML_ERR_302"));
        assert!(msg.contains('6'));
        assert!(msg.contains('2'));
    }

    #[test]
    fn all_errors_have_ml_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(LedgerError::Unauthorized),
            Box::new(LedgerError::Paused),
            Box::new(LedgerError::InvalidCount),
            Box::new(LedgerError::NotListed),
            Box::new(LedgerError::TransferFailed {
                reason: "test".into(),
            }),
            Box::new(LedgerError::BatchTooLarge {
                requested: 21,
                max: 20,
            }),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("ML_ERR_"),
                "Error missing ML_ERR_ prefix: {msg}"
            );
        }
    }
}
