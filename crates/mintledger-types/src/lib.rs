//! # mintledger-types
//!
//! Shared types, errors, and configuration for the **MintLedger**
//! issuance ledger.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`AccountId`], [`TokenId`]
//! - **Configuration**: [`IssuanceConfig`]
//! - **Events**: [`LedgerEvent`]
//! - **Errors**: [`LedgerError`] with `ML_ERR_` prefix codes
//! - **Constants**: system-wide limits and defaults

pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod ids;

// Re-export all primary types at crate root for ergonomic imports:
//   use mintledger_types::{AccountId, TokenId, LedgerError, ...};

pub use config::*;
pub use error::*;
pub use event::*;
pub use ids::*;

// Constants are accessed via `mintledger_types::constants::FOO`
// (not re-exported to avoid name collisions).
