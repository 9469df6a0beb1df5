//! Identifiers used throughout MintLedger.
//!
//! Accounts use UUIDv7 for time-ordered lexicographic sorting. Token
//! identifiers are plain integers handed out by the supply counter,
//! starting at [`TokenId::FIRST`] and strictly increasing.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// AccountId
// ---------------------------------------------------------------------------

/// Unique identifier for an account / principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct AccountId(pub Uuid);

impl AccountId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    #[must_use]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// TokenId
// ---------------------------------------------------------------------------

/// Identifier assigned to an issued asset by the supply counter.
///
/// Ids are dense: after `n` successful issuances the issued set is exactly
/// `{1, ..., n}`, regardless of which issuance paths were used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct TokenId(pub u64);

impl TokenId {
    /// The first id the counter ever hands out.
    pub const FIRST: TokenId = TokenId(1);

    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_id_uniqueness() {
        let a = AccountId::new();
        let b = AccountId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn account_id_ordering() {
        let a = AccountId::new();
        let b = AccountId::new();
        assert!(a < b);
    }

    #[test]
    fn token_id_next() {
        let id = TokenId::FIRST;
        assert_eq!(id.next(), TokenId(2));
    }

    #[test]
    fn token_id_display_is_bare_number() {
        // The metadata pointer is formed by string concatenation, so the
        // Display form must be the undecorated decimal id.
        assert_eq!(TokenId(42).to_string(), "42");
    }

    #[test]
    fn serde_roundtrips() {
        let account = AccountId::new();
        let json = serde_json::to_string(&account).unwrap();
        let back: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(account, back);

        let id = TokenId(7);
        let json = serde_json::to_string(&id).unwrap();
        let back: TokenId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
