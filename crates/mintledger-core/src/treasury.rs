//! Treasury — accumulated paid-in value, withdrawable by the owner.
//!
//! The balance is owned exclusively by the ledger until withdrawn. The
//! actual value transfer is an external collaborator behind
//! [`TransferAgent`]; when it fails, the balance is left intact so the
//! withdrawal can be retried.

use mintledger_types::{AccountId, LedgerError, Result};
use rust_decimal::Decimal;

/// Moves withdrawn value to its recipient. Out of core scope — a chain
/// adapter, bank rail, or test double.
pub trait TransferAgent {
    /// Transfer `amount` to `to`. The error string is surfaced verbatim in
    /// [`LedgerError::TransferFailed`].
    fn transfer(&mut self, to: AccountId, amount: Decimal) -> std::result::Result<(), String>;
}

/// Holds the cumulative value received by paid issuance paths.
#[derive(Debug, Clone, Default)]
pub struct Treasury {
    balance: Decimal,
}

impl Treasury {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate paid-in value. Invoked by the paid issuance paths.
    pub fn credit(&mut self, amount: Decimal) {
        self.balance += amount;
    }

    /// Currently held balance.
    #[must_use]
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Pay out the entire held balance to `to` and reset it to zero.
    /// Returns the amount transferred.
    ///
    /// # Errors
    /// Returns [`LedgerError::TransferFailed`] when the agent rejects the
    /// transfer; the balance is unchanged and the call is retry-safe.
    pub fn withdraw_all<A: TransferAgent + ?Sized>(
        &mut self,
        agent: &mut A,
        to: AccountId,
    ) -> Result<Decimal> {
        let amount = self.balance;
        agent
            .transfer(to, amount)
            .map_err(|reason| LedgerError::TransferFailed { reason })?;
        self.balance = Decimal::ZERO;
        Ok(amount)
    }
}
