//! Allow-list registry — accounts pre-approved for one free issuance.
//!
//! Membership is binary, not a counter. Admission skips accounts that
//! already hold an asset (checked through the ownership registry), so a
//! holder can never be listed for a free token. Entries are destroyed by
//! explicit revocation or by consumption when the listed account receives
//! a free issuance.

use std::collections::HashSet;

use mintledger_types::{constants::MAX_ALLOWLIST_UPDATE, AccountId, LedgerError, Result};

use crate::registry::OwnershipRegistry;

/// Set of accounts eligible for exactly one free issuance.
#[derive(Debug, Clone, Default)]
pub struct AllowlistRegistry {
    accounts: HashSet<AccountId>,
}

impl AllowlistRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit `account`, unless it already holds an issued id — in that case
    /// the call is a silent no-op, not an error. Returns whether the set
    /// changed.
    pub fn admit<R: OwnershipRegistry + ?Sized>(
        &mut self,
        registry: &R,
        account: AccountId,
    ) -> bool {
        if registry.holds_any(account) {
            return false;
        }
        self.accounts.insert(account)
    }

    /// Admit every member of `accounts` independently. Holders are skipped
    /// without aborting the rest; partial success across the batch is the
    /// expected behavior. Returns the number of accounts actually admitted.
    ///
    /// # Errors
    /// Returns [`LedgerError::TooManyAccounts`] when the batch exceeds
    /// [`MAX_ALLOWLIST_UPDATE`]; the set is unchanged.
    pub fn admit_many<R: OwnershipRegistry + ?Sized>(
        &mut self,
        registry: &R,
        accounts: &[AccountId],
    ) -> Result<usize> {
        Self::check_batch(accounts)?;
        Ok(accounts
            .iter()
            .filter(|account| self.admit(registry, **account))
            .count())
    }

    /// Remove `account`. Removing a non-member is a no-op. Returns whether
    /// the set changed.
    pub fn revoke(&mut self, account: AccountId) -> bool {
        self.accounts.remove(&account)
    }

    /// Remove every member of `accounts`. Returns the number removed.
    ///
    /// # Errors
    /// Returns [`LedgerError::TooManyAccounts`] when the batch exceeds
    /// [`MAX_ALLOWLIST_UPDATE`]; the set is unchanged.
    pub fn revoke_many(&mut self, accounts: &[AccountId]) -> Result<usize> {
        Self::check_batch(accounts)?;
        Ok(accounts
            .iter()
            .filter(|account| self.revoke(**account))
            .count())
    }

    /// Consume `account`'s entry on a successful free issuance. A no-op for
    /// non-members. Returns whether an entry was consumed.
    pub fn consume(&mut self, account: AccountId) -> bool {
        self.accounts.remove(&account)
    }

    /// Whether `account` is currently listed. Public read, never paused.
    #[must_use]
    pub fn contains(&self, account: AccountId) -> bool {
        self.accounts.contains(&account)
    }

    /// Number of listed accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn check_batch(accounts: &[AccountId]) -> Result<()> {
        if accounts.len() > MAX_ALLOWLIST_UPDATE {
            return Err(LedgerError::TooManyAccounts {
                requested: accounts.len(),
                max: MAX_ALLOWLIST_UPDATE,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::InMemoryRegistry;
    use mintledger_types::TokenId;

    #[test]
    fn admit_then_contains() {
        let registry = InMemoryRegistry::new();
        let mut allowlist = AllowlistRegistry::new();
        let account = AccountId::new();

        assert!(allowlist.admit(&registry, account));
        assert!(allowlist.contains(account));
        assert!(!allowlist.contains(AccountId::new()));
    }

    #[test]
    fn admitting_holder_is_noop() {
        let mut registry = InMemoryRegistry::new();
        let holder = AccountId::new();
        registry.mint(holder, TokenId(1)).unwrap();

        let mut allowlist = AllowlistRegistry::new();
        assert!(!allowlist.admit(&registry, holder));
        assert!(!allowlist.contains(holder));
    }

    #[test]
    fn admit_many_skips_holders_without_aborting() {
        let mut registry = InMemoryRegistry::new();
        let holder = AccountId::new();
        registry.mint(holder, TokenId(1)).unwrap();

        let clean_a = AccountId::new();
        let clean_b = AccountId::new();
        let mut allowlist = AllowlistRegistry::new();

        let admitted = allowlist
            .admit_many(&registry, &[clean_a, holder, clean_b])
            .unwrap();
        assert_eq!(admitted, 2);
        assert!(allowlist.contains(clean_a));
        assert!(!allowlist.contains(holder));
        assert!(allowlist.contains(clean_b));
    }

    #[test]
    fn admit_many_over_cap_fails() {
        let registry = InMemoryRegistry::new();
        let mut allowlist = AllowlistRegistry::new();
        let accounts: Vec<AccountId> = (0..101).map(|_| AccountId::new()).collect();

        let err = allowlist.admit_many(&registry, &accounts).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::TooManyAccounts {
                requested: 101,
                max: 100
            }
        ));
        assert!(allowlist.is_empty());
    }

    #[test]
    fn revoke_non_member_is_noop() {
        let mut allowlist = AllowlistRegistry::new();
        assert!(!allowlist.revoke(AccountId::new()));
    }

    #[test]
    fn revoke_many_over_cap_fails() {
        let registry = InMemoryRegistry::new();
        let mut allowlist = AllowlistRegistry::new();
        let kept = AccountId::new();
        allowlist.admit(&registry, kept);

        let accounts: Vec<AccountId> = (0..101).map(|_| AccountId::new()).collect();
        let err = allowlist.revoke_many(&accounts).unwrap_err();
        assert!(matches!(err, LedgerError::TooManyAccounts { .. }));
        assert!(allowlist.contains(kept));
    }

    #[test]
    fn revoke_many_removes_only_named() {
        let registry = InMemoryRegistry::new();
        let mut allowlist = AllowlistRegistry::new();
        let a = AccountId::new();
        let b = AccountId::new();
        let c = AccountId::new();
        allowlist.admit_many(&registry, &[a, b, c]).unwrap();

        let removed = allowlist.revoke_many(&[a, c]).unwrap();
        assert_eq!(removed, 2);
        assert!(!allowlist.contains(a));
        assert!(allowlist.contains(b));
        assert!(!allowlist.contains(c));
    }

    #[test]
    fn consume_removes_entry_once() {
        let registry = InMemoryRegistry::new();
        let mut allowlist = AllowlistRegistry::new();
        let account = AccountId::new();
        allowlist.admit(&registry, account);

        assert!(allowlist.consume(account));
        assert!(!allowlist.contains(account));
        assert!(!allowlist.consume(account));
    }
}
