//! Supply counter — id assignment under a hard cap.
//!
//! A single monotonically increasing counter serves every issuance path, so
//! ids strictly increase in order of successful reservation across paths.
//! Batch reservation is check-then-commit: the post-batch counter value is
//! validated against the cap before any mutation, never incrementally inside
//! a loop that could be left half-applied.

use mintledger_types::{LedgerError, Result, TokenId};

/// Assigns the next token id and enforces the maximum-supply invariant.
///
/// An id is "issued" iff `1 <= id < next_id`. The counter never decreases,
/// and stops reserving once `next_id - 1 == max_supply`.
#[derive(Debug, Clone)]
pub struct SupplyCounter {
    /// The next id to hand out. Starts at 1.
    next_id: u64,
    /// Hard cap on the number of ids ever issued.
    max_supply: u64,
}

impl SupplyCounter {
    /// Create a counter for a ledger capped at `max_supply` ids.
    ///
    /// # Panics
    /// Panics if `max_supply` is zero.
    #[must_use]
    pub fn new(max_supply: u64) -> Self {
        assert!(max_supply >= 1, "SupplyCounter max_supply must be >= 1");
        Self {
            next_id: TokenId::FIRST.0,
            max_supply,
        }
    }

    /// The id the next successful reservation will return.
    #[must_use]
    pub fn current(&self) -> TokenId {
        TokenId(self.next_id)
    }

    /// Number of ids issued so far.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.next_id - 1
    }

    /// Number of ids still reservable before the cap.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.max_supply - self.issued()
    }

    /// The immutable supply cap.
    #[must_use]
    pub fn max_supply(&self) -> u64 {
        self.max_supply
    }

    /// Whether `id` has been issued.
    #[must_use]
    pub fn is_issued(&self, id: TokenId) -> bool {
        id.0 >= TokenId::FIRST.0 && id.0 < self.next_id
    }

    /// Reserve the next id.
    ///
    /// # Errors
    /// Returns [`LedgerError::CapacityExceeded`] when the cap is reached,
    /// before any visible effect.
    pub fn reserve_next(&mut self) -> Result<TokenId> {
        if self.remaining() == 0 {
            return Err(LedgerError::CapacityExceeded {
                requested: 1,
                remaining: 0,
            });
        }
        let id = TokenId(self.next_id);
        self.next_id += 1;
        Ok(id)
    }

    /// Atomically reserve `n` consecutive ids.
    ///
    /// The whole batch is validated against the cap first; on failure the
    /// counter is unchanged and nothing is partially reserved. This layer
    /// imposes no upper bound on `n` — per-call batch caps are policy of
    /// the issuance paths.
    ///
    /// # Errors
    /// - [`LedgerError::InvalidCount`] when `n < 1`
    /// - [`LedgerError::CapacityExceeded`] when `n` exceeds the remaining
    ///   capacity
    pub fn reserve_batch(&mut self, n: u64) -> Result<Vec<TokenId>> {
        if n < 1 {
            return Err(LedgerError::InvalidCount);
        }
        let remaining = self.remaining();
        if n > remaining {
            return Err(LedgerError::CapacityExceeded {
                requested: n,
                remaining,
            });
        }
        let ids = (self.next_id..self.next_id + n).map(TokenId).collect();
        self.next_id += n;
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_one() {
        let counter = SupplyCounter::new(10);
        assert_eq!(counter.current(), TokenId::FIRST);
        assert_eq!(counter.issued(), 0);
        assert_eq!(counter.remaining(), 10);
    }

    #[test]
    #[should_panic(expected = "max_supply")]
    fn zero_cap_panics() {
        let _ = SupplyCounter::new(0);
    }

    #[test]
    fn reserve_next_increments() {
        let mut counter = SupplyCounter::new(3);
        assert_eq!(counter.reserve_next().unwrap(), TokenId(1));
        assert_eq!(counter.reserve_next().unwrap(), TokenId(2));
        assert_eq!(counter.current(), TokenId(3));
        assert_eq!(counter.issued(), 2);
    }

    #[test]
    fn reserve_next_at_cap_fails() {
        let mut counter = SupplyCounter::new(2);
        counter.reserve_next().unwrap();
        counter.reserve_next().unwrap();

        let err = counter.reserve_next().unwrap_err();
        assert!(matches!(
            err,
            LedgerError::CapacityExceeded {
                requested: 1,
                remaining: 0
            }
        ));
        // Counter unchanged: id 3 never exists.
        assert_eq!(counter.current(), TokenId(3));
    }

    #[test]
    fn reserve_batch_is_consecutive() {
        let mut counter = SupplyCounter::new(10);
        let ids = counter.reserve_batch(3).unwrap();
        assert_eq!(ids, vec![TokenId(1), TokenId(2), TokenId(3)]);
        assert_eq!(counter.current(), TokenId(4));
    }

    #[test]
    fn reserve_batch_zero_fails() {
        let mut counter = SupplyCounter::new(10);
        let err = counter.reserve_batch(0).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidCount));
        assert_eq!(counter.current(), TokenId(1));
    }

    #[test]
    fn reserve_batch_over_cap_rejects_whole_batch() {
        let mut counter = SupplyCounter::new(5);
        counter.reserve_batch(4).unwrap();

        let err = counter.reserve_batch(2).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::CapacityExceeded {
                requested: 2,
                remaining: 1
            }
        ));
        // Nothing partially reserved.
        assert_eq!(counter.issued(), 4);
        assert_eq!(counter.reserve_batch(1).unwrap(), vec![TokenId(5)]);
    }

    #[test]
    fn reserve_batch_exactly_to_cap() {
        let mut counter = SupplyCounter::new(5);
        let ids = counter.reserve_batch(5).unwrap();
        assert_eq!(ids.len(), 5);
        assert_eq!(counter.remaining(), 0);
        assert!(counter.reserve_next().is_err());
    }

    #[test]
    fn is_issued_tracks_reservations() {
        let mut counter = SupplyCounter::new(10);
        assert!(!counter.is_issued(TokenId(1)));
        counter.reserve_batch(2).unwrap();
        assert!(counter.is_issued(TokenId(1)));
        assert!(counter.is_issued(TokenId(2)));
        assert!(!counter.is_issued(TokenId(3)));
        assert!(!counter.is_issued(TokenId(0)));
    }

    #[test]
    fn mixed_paths_share_one_counter() {
        let mut counter = SupplyCounter::new(100);
        let a = counter.reserve_next().unwrap();
        let batch = counter.reserve_batch(3).unwrap();
        let b = counter.reserve_next().unwrap();
        assert_eq!(a, TokenId(1));
        assert_eq!(batch, vec![TokenId(2), TokenId(3), TokenId(4)]);
        assert_eq!(b, TokenId(5));
    }
}
