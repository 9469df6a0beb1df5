//! Notifications emitted by the issuance ledger.
//!
//! The ledger appends events to an internal queue as part of each
//! successful mutation; the embedding layer (API, CLI, chain adapter)
//! drains and transports them. Events for a single issuance are emitted
//! per id in ascending id order: a holder change from the null holder,
//! then the creation notification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AccountId, TokenId};

/// A single ledger notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEvent {
    pub kind: LedgerEventKind,
    /// When the ledger recorded the event.
    pub at: DateTime<Utc>,
}

impl LedgerEvent {
    #[must_use]
    pub fn now(kind: LedgerEventKind) -> Self {
        Self {
            kind,
            at: Utc::now(),
        }
    }
}

/// Event payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEventKind {
    /// A new id was issued. One per id, ascending.
    AssetCreated { id: TokenId },
    /// An id changed holder. Issuance carries `previous: None`.
    HolderChanged {
        previous: Option<AccountId>,
        holder: AccountId,
        id: TokenId,
    },
    /// The emergency stop was tripped.
    Paused { by: AccountId },
    /// The emergency stop was released.
    Unpaused { by: AccountId },
    /// The owner role moved to a new principal.
    OwnershipTransferred {
        previous: AccountId,
        new: AccountId,
    },
    /// The treasury balance was paid out to the owner.
    Withdrawn {
        to: AccountId,
        amount: rust_decimal::Decimal,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip() {
        let event = LedgerEvent::now(LedgerEventKind::HolderChanged {
            previous: None,
            holder: AccountId::new(),
            id: TokenId(3),
        });
        let json = serde_json::to_string(&event).unwrap();
        let back: LedgerEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn created_event_carries_id() {
        let event = LedgerEvent::now(LedgerEventKind::AssetCreated { id: TokenId(1) });
        match event.kind {
            LedgerEventKind::AssetCreated { id } => assert_eq!(id, TokenId(1)),
            other => panic!("unexpected kind: {other:?}"),
        }
    }
}
