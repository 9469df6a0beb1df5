//! # mintledger-core
//!
//! **Issuance policy core**: the supply counter, access and pause gates,
//! allow-list admission, treasury, and the orchestration that composes them.
//!
//! ## Architecture
//!
//! The [`IssuanceLedger`] is the single policy surface. It exclusively owns
//! all mutable ledger state and composes four sub-responsibilities:
//! 1. **SupplyCounter**: hands out the next id and enforces the supply cap
//! 2. **AllowlistRegistry**: accounts pre-approved for one free issuance
//! 3. **Treasury**: accumulates paid-in value for owner withdrawal
//! 4. **Gates**: owner-only and pause checks wrapping every mutation
//!
//! ## Issuance Flow
//!
//! ```text
//! caller → access / allow-list check → pause check → payment validation
//!        → SupplyCounter.reserve() → OwnershipRegistry.mint()
//!        → allow-list consumption → Treasury.credit() → events
//! ```
//!
//! The ownership registry that records which account holds which id is an
//! external collaborator, consumed through the [`OwnershipRegistry`] trait
//! and passed into each issuance call. Every call is atomic: any check
//! failure aborts with no partial state.

pub mod allowlist;
pub mod ledger;
pub mod registry;
pub mod supply;
pub mod treasury;

pub use allowlist::AllowlistRegistry;
pub use ledger::IssuanceLedger;
pub use registry::{InMemoryRegistry, OwnershipRegistry};
pub use supply::SupplyCounter;
pub use treasury::{Treasury, TransferAgent};
