//! Ownership registry collaborator.
//!
//! The ledger never stores holder-of-id state itself; it delegates to a
//! registry behind this trait. The admission check for the allow-list only
//! needs the read side (`holds_any`), issuance needs the write side.

use std::collections::HashMap;

use mintledger_types::{AccountId, LedgerError, Result, TokenId};

/// Records which account holds which issued id.
pub trait OwnershipRegistry {
    /// Record `to` as the initial holder of `id`.
    ///
    /// # Errors
    /// Returns [`LedgerError::AlreadyExists`] if `id` already has a holder.
    /// Unreachable when driven by the supply counter, which never hands out
    /// an id twice.
    fn mint(&mut self, to: AccountId, id: TokenId) -> Result<()>;

    /// Current holder of `id`.
    ///
    /// # Errors
    /// Returns [`LedgerError::NoSuchAsset`] if `id` was never issued.
    fn owner_of(&self, id: TokenId) -> Result<AccountId>;

    /// Whether `account` holds at least one issued id.
    fn holds_any(&self, account: AccountId) -> bool;
}

/// HashMap-backed registry for tests and embedded single-process use.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    /// Holder per issued id.
    holders: HashMap<TokenId, AccountId>,
    /// Holding count per account, kept for O(1) `holds_any`.
    holdings: HashMap<AccountId, u64>,
}

impl InMemoryRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ids with a recorded holder.
    #[must_use]
    pub fn len(&self) -> usize {
        self.holders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holders.is_empty()
    }
}

impl OwnershipRegistry for InMemoryRegistry {
    fn mint(&mut self, to: AccountId, id: TokenId) -> Result<()> {
        if self.holders.contains_key(&id) {
            return Err(LedgerError::AlreadyExists(id));
        }
        self.holders.insert(id, to);
        *self.holdings.entry(to).or_insert(0) += 1;
        Ok(())
    }

    fn owner_of(&self, id: TokenId) -> Result<AccountId> {
        self.holders
            .get(&id)
            .copied()
            .ok_or(LedgerError::NoSuchAsset(id))
    }

    fn holds_any(&self, account: AccountId) -> bool {
        self.holdings.get(&account).copied().unwrap_or(0) > 0
    }
}
