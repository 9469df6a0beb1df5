//! The issuance ledger — the single policy surface.
//!
//! Every mutating operation takes the acting principal explicitly and runs
//! the same sequence: access / allow-list check, pause check where
//! applicable, payment validation, atomic counter reservation, holder
//! recording in the ownership registry, allow-list consumption, treasury
//! credit, event emission. Any failure aborts the call before it has
//! produced visible state.
//!
//! Execution is serialized run-to-completion: the ledger owns all mutable
//! state and every mutation goes through `&mut self`, so no operation can
//! observe a partially applied call.

use mintledger_types::{
    constants::MAX_PUBLIC_BATCH, AccountId, IssuanceConfig, LedgerError, LedgerEvent,
    LedgerEventKind, Result, TokenId,
};
use rust_decimal::Decimal;

use crate::allowlist::AllowlistRegistry;
use crate::registry::OwnershipRegistry;
use crate::supply::SupplyCounter;
use crate::treasury::{Treasury, TransferAgent};

/// Capped, pausable issuance ledger with allow-list admission and an
/// owner treasury.
///
/// The registry that records holders is an external collaborator passed
/// into each issuance call; the ledger never stores holder state itself.
#[derive(Debug)]
pub struct IssuanceLedger {
    config: IssuanceConfig,
    owner: AccountId,
    paused: bool,
    supply: SupplyCounter,
    allowlist: AllowlistRegistry,
    treasury: Treasury,
    /// Notifications pending drain by the embedding layer.
    events: Vec<LedgerEvent>,
}

impl IssuanceLedger {
    /// Create a ledger owned by `owner`.
    ///
    /// # Panics
    /// Panics if `config.max_supply` is zero.
    #[must_use]
    pub fn new(owner: AccountId, config: IssuanceConfig) -> Self {
        let supply = SupplyCounter::new(config.max_supply);
        Self {
            config,
            owner,
            paused: false,
            supply,
            allowlist: AllowlistRegistry::new(),
            treasury: Treasury::new(),
            events: Vec::new(),
        }
    }

    // =====================================================================
    // Gates
    // =====================================================================

    fn ensure_owner(&self, caller: AccountId) -> Result<()> {
        if caller == self.owner {
            Ok(())
        } else {
            Err(LedgerError::Unauthorized)
        }
    }

    fn ensure_not_paused(&self) -> Result<()> {
        if self.paused {
            Err(LedgerError::Paused)
        } else {
            Ok(())
        }
    }

    /// Trip the emergency stop. Owner-only; repeating the current state is
    /// allowed and does nothing.
    pub fn pause(&mut self, caller: AccountId) -> Result<()> {
        self.ensure_owner(caller)?;
        if !self.paused {
            self.paused = true;
            self.events
                .push(LedgerEvent::now(LedgerEventKind::Paused { by: caller }));
            tracing::info!(by = %caller, "Issuance paused");
        }
        Ok(())
    }

    /// Release the emergency stop. Owner-only, redundant calls allowed.
    pub fn unpause(&mut self, caller: AccountId) -> Result<()> {
        self.ensure_owner(caller)?;
        if self.paused {
            self.paused = false;
            self.events
                .push(LedgerEvent::now(LedgerEventKind::Unpaused { by: caller }));
            tracing::info!(by = %caller, "Issuance resumed");
        }
        Ok(())
    }

    /// Hand the owner role to `new_owner`. Only the current owner may call.
    pub fn transfer_ownership(&mut self, caller: AccountId, new_owner: AccountId) -> Result<()> {
        self.ensure_owner(caller)?;
        let previous = self.owner;
        self.owner = new_owner;
        self.events
            .push(LedgerEvent::now(LedgerEventKind::OwnershipTransferred {
                previous,
                new: new_owner,
            }));
        tracing::info!(previous = %previous, new = %new_owner, "Ownership transferred");
        Ok(())
    }

    // =====================================================================
    // Issuance paths
    // =====================================================================

    /// Paid public mint of a single token to the caller.
    ///
    /// Requires at least the unit price; excess is kept, not refunded.
    ///
    /// # Errors
    /// - [`LedgerError::Paused`] while the emergency stop is tripped
    /// - [`LedgerError::IncorrectPayment`] when `payment` is below the price
    /// - [`LedgerError::CapacityExceeded`] at the supply cap
    pub fn mint<R: OwnershipRegistry + ?Sized>(
        &mut self,
        registry: &mut R,
        caller: AccountId,
        payment: Decimal,
    ) -> Result<TokenId> {
        self.ensure_not_paused()?;
        if payment < self.config.unit_price {
            return Err(LedgerError::IncorrectPayment {
                expected: self.config.unit_price,
                paid: payment,
            });
        }

        let id = self.supply.reserve_next()?;
        registry.mint(caller, id)?;
        self.treasury.credit(payment);
        self.emit_issued(caller, &[id]);
        tracing::debug!(caller = %caller, id = %id, paid = %payment, "Public mint");
        Ok(id)
    }

    /// Paid public mint of `n` tokens to the caller.
    ///
    /// Batch-or-nothing: a cap failure rejects the whole batch with no
    /// partial issuance and no credited payment.
    ///
    /// # Errors
    /// - [`LedgerError::Paused`] while the emergency stop is tripped
    /// - [`LedgerError::InvalidCount`] when `n < 1`
    /// - [`LedgerError::BatchTooLarge`] when `n` exceeds the per-call cap
    /// - [`LedgerError::InsufficientPayment`] when `payment < price * n`
    /// - [`LedgerError::CapacityExceeded`] when the batch would pass the cap
    pub fn mint_multiple<R: OwnershipRegistry + ?Sized>(
        &mut self,
        registry: &mut R,
        caller: AccountId,
        n: u64,
        payment: Decimal,
    ) -> Result<Vec<TokenId>> {
        self.ensure_not_paused()?;
        if n < 1 {
            return Err(LedgerError::InvalidCount);
        }
        if n > MAX_PUBLIC_BATCH {
            return Err(LedgerError::BatchTooLarge {
                requested: n,
                max: MAX_PUBLIC_BATCH,
            });
        }
        let needed = self.config.unit_price * Decimal::from(n);
        if payment < needed {
            return Err(LedgerError::InsufficientPayment {
                needed,
                paid: payment,
            });
        }

        let ids = self.supply.reserve_batch(n)?;
        for id in &ids {
            registry.mint(caller, *id)?;
        }
        self.treasury.credit(payment);
        self.emit_issued(caller, &ids);
        tracing::debug!(caller = %caller, count = n, paid = %payment, "Public batch mint");
        Ok(ids)
    }

    /// Free mint for an allow-listed caller. Consumes the caller's entry.
    ///
    /// The free path is zero-value: a positive payment is rejected rather
    /// than kept.
    ///
    /// # Errors
    /// - [`LedgerError::NotListed`] when the caller is not on the allow-list
    /// - [`LedgerError::Paused`] while the emergency stop is tripped
    /// - [`LedgerError::IncorrectPayment`] on a non-zero payment
    /// - [`LedgerError::CapacityExceeded`] at the supply cap
    pub fn whitelisted_mint<R: OwnershipRegistry + ?Sized>(
        &mut self,
        registry: &mut R,
        caller: AccountId,
        payment: Decimal,
    ) -> Result<TokenId> {
        if !self.allowlist.contains(caller) {
            return Err(LedgerError::NotListed);
        }
        self.ensure_not_paused()?;
        if !payment.is_zero() {
            return Err(LedgerError::IncorrectPayment {
                expected: Decimal::ZERO,
                paid: payment,
            });
        }

        let id = self.supply.reserve_next()?;
        registry.mint(caller, id)?;
        self.allowlist.consume(caller);
        self.emit_issued(caller, &[id]);
        tracing::debug!(caller = %caller, id = %id, "Allow-list mint");
        Ok(id)
    }

    /// Owner claims a single token for themselves, free of charge.
    /// Deliberately exempt from the pause gate.
    ///
    /// # Errors
    /// - [`LedgerError::Unauthorized`] for non-owners
    /// - [`LedgerError::CapacityExceeded`] at the supply cap
    pub fn owner_claim<R: OwnershipRegistry + ?Sized>(
        &mut self,
        registry: &mut R,
        caller: AccountId,
    ) -> Result<TokenId> {
        self.ensure_owner(caller)?;
        let id = self.supply.reserve_next()?;
        registry.mint(caller, id)?;
        self.emit_issued(caller, &[id]);
        tracing::debug!(id = %id, "Owner claim");
        Ok(id)
    }

    /// Owner claims `n` tokens for themselves. Not pause-gated.
    ///
    /// # Errors
    /// - [`LedgerError::Unauthorized`] for non-owners
    /// - [`LedgerError::InvalidCount`] when `n < 1`
    /// - [`LedgerError::CapacityExceeded`] when the batch would pass the cap
    pub fn owner_claim_multiple<R: OwnershipRegistry + ?Sized>(
        &mut self,
        registry: &mut R,
        caller: AccountId,
        n: u64,
    ) -> Result<Vec<TokenId>> {
        self.ensure_owner(caller)?;
        let ids = self.supply.reserve_batch(n)?;
        for id in &ids {
            registry.mint(caller, *id)?;
        }
        self.emit_issued(caller, &ids);
        tracing::debug!(count = n, "Owner batch claim");
        Ok(ids)
    }

    /// Owner issues a single token to `recipient`, free of charge. Not
    /// pause-gated. As a free issuance it consumes the recipient's
    /// allow-list entry, if any.
    ///
    /// # Errors
    /// - [`LedgerError::Unauthorized`] for non-owners
    /// - [`LedgerError::CapacityExceeded`] at the supply cap
    pub fn mint_to<R: OwnershipRegistry + ?Sized>(
        &mut self,
        registry: &mut R,
        caller: AccountId,
        recipient: AccountId,
    ) -> Result<TokenId> {
        self.ensure_owner(caller)?;
        let id = self.supply.reserve_next()?;
        registry.mint(recipient, id)?;
        self.allowlist.consume(recipient);
        self.emit_issued(recipient, &[id]);
        tracing::debug!(recipient = %recipient, id = %id, "Owner mint to recipient");
        Ok(id)
    }

    // =====================================================================
    // Allow-list administration
    // =====================================================================

    /// Admit `account` for one free issuance. Owner-only. A silent no-op
    /// when the account already holds an issued id.
    pub fn allowlist_add<R: OwnershipRegistry + ?Sized>(
        &mut self,
        registry: &R,
        caller: AccountId,
        account: AccountId,
    ) -> Result<()> {
        self.ensure_owner(caller)?;
        self.allowlist.admit(registry, account);
        Ok(())
    }

    /// Admit up to 100 accounts; holders are skipped, the rest applied.
    ///
    /// # Errors
    /// - [`LedgerError::Unauthorized`] for non-owners
    /// - [`LedgerError::TooManyAccounts`] above the batch cap
    pub fn allowlist_add_many<R: OwnershipRegistry + ?Sized>(
        &mut self,
        registry: &R,
        caller: AccountId,
        accounts: &[AccountId],
    ) -> Result<()> {
        self.ensure_owner(caller)?;
        let admitted = self.allowlist.admit_many(registry, accounts)?;
        tracing::debug!(requested = accounts.len(), admitted, "Allow-list batch add");
        Ok(())
    }

    /// Remove `account` from the allow-list. Owner-only; removing a
    /// non-member is a no-op.
    pub fn allowlist_remove(&mut self, caller: AccountId, account: AccountId) -> Result<()> {
        self.ensure_owner(caller)?;
        self.allowlist.revoke(account);
        Ok(())
    }

    /// Remove up to 100 accounts from the allow-list.
    ///
    /// # Errors
    /// - [`LedgerError::Unauthorized`] for non-owners
    /// - [`LedgerError::TooManyAccounts`] above the batch cap
    pub fn allowlist_remove_many(
        &mut self,
        caller: AccountId,
        accounts: &[AccountId],
    ) -> Result<()> {
        self.ensure_owner(caller)?;
        self.allowlist.revoke_many(accounts)?;
        Ok(())
    }

    /// Whether `account` is allow-listed. Public read, never paused.
    #[must_use]
    pub fn is_listed(&self, account: AccountId) -> bool {
        self.allowlist.contains(account)
    }

    // =====================================================================
    // Treasury
    // =====================================================================

    /// Pay the entire treasury balance out to the owner through `agent`.
    ///
    /// # Errors
    /// - [`LedgerError::Unauthorized`] for non-owners
    /// - [`LedgerError::TransferFailed`] when the agent rejects; the balance
    ///   is preserved for retry
    pub fn withdraw<A: TransferAgent + ?Sized>(
        &mut self,
        agent: &mut A,
        caller: AccountId,
    ) -> Result<Decimal> {
        self.ensure_owner(caller)?;
        let amount = self.treasury.withdraw_all(agent, self.owner)?;
        self.events.push(LedgerEvent::now(LedgerEventKind::Withdrawn {
            to: self.owner,
            amount,
        }));
        tracing::info!(to = %self.owner, amount = %amount, "Treasury withdrawn");
        Ok(amount)
    }

    /// Currently held treasury balance.
    #[must_use]
    pub fn treasury_balance(&self) -> Decimal {
        self.treasury.balance()
    }

    // =====================================================================
    // Configuration setters
    // =====================================================================

    /// Set the unit price for future paid mints. Owner-only; completed
    /// issuances are unaffected.
    ///
    /// # Panics
    /// Panics if `price` is negative.
    pub fn set_unit_price(&mut self, caller: AccountId, price: Decimal) -> Result<()> {
        self.ensure_owner(caller)?;
        assert!(!price.is_sign_negative(), "unit price must be non-negative");
        self.config.unit_price = price;
        Ok(())
    }

    /// Set the base metadata pointer. Owner-only; applies to all ids,
    /// already issued or not.
    pub fn set_base_metadata_pointer(
        &mut self,
        caller: AccountId,
        pointer: impl Into<String>,
    ) -> Result<()> {
        self.ensure_owner(caller)?;
        self.config.base_metadata_pointer = pointer.into();
        Ok(())
    }

    // =====================================================================
    // Reads
    // =====================================================================

    /// The id the next successful issuance will receive.
    #[must_use]
    pub fn current_token_id(&self) -> TokenId {
        self.supply.current()
    }

    /// Number of ids issued so far.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.supply.issued()
    }

    /// Number of ids still issuable before the cap.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.supply.remaining()
    }

    #[must_use]
    pub fn max_supply(&self) -> u64 {
        self.supply.max_supply()
    }

    #[must_use]
    pub fn unit_price(&self) -> Decimal {
        self.config.unit_price
    }

    #[must_use]
    pub fn base_metadata_pointer(&self) -> &str {
        &self.config.base_metadata_pointer
    }

    #[must_use]
    pub fn owner(&self) -> AccountId {
        self.owner
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Metadata pointer for an issued id: base pointer + decimal id.
    ///
    /// # Errors
    /// Returns [`LedgerError::NoSuchAsset`] for unissued ids.
    pub fn token_uri(&self, id: TokenId) -> Result<String> {
        if !self.supply.is_issued(id) {
            return Err(LedgerError::NoSuchAsset(id));
        }
        Ok(self.config.metadata_pointer(id.0))
    }

    // =====================================================================
    // Events
    // =====================================================================

    /// Notifications recorded since the last drain, oldest first.
    #[must_use]
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    /// Take all pending notifications for transport.
    pub fn drain_events(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Per issued id, ascending: a holder change from the null holder,
    /// then the creation notification.
    fn emit_issued(&mut self, to: AccountId, ids: &[TokenId]) {
        for id in ids {
            self.events
                .push(LedgerEvent::now(LedgerEventKind::HolderChanged {
                    previous: None,
                    holder: to,
                    id: *id,
                }));
            self.events
                .push(LedgerEvent::now(LedgerEventKind::AssetCreated { id: *id }));
        }
    }
}
