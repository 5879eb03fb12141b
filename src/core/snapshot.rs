//! Snapshot encoding for the persisted cart.
//!
//! The stored value is a JSON array of cart lines with the fields
//! `id, title, image_url, price, quantity`.

use crate::core::Cart;
use crate::utils::error::{CartError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How much to trust a snapshot read back from storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotPolicy {
    /// Reject snapshots that break cart invariants.
    #[default]
    Strict,
    /// Accept anything that parses as an array of cart lines.
    Lenient,
}

/// Non-finite prices would be written as `null` and never parse back.
pub fn encode(cart: &Cart) -> Result<String> {
    if let Some(line) = cart.lines().iter().find(|line| !line.price.is_finite()) {
        return Err(CartError::InvalidSnapshotError {
            reason: format!("line '{}' has a non-finite price", line.id),
        });
    }

    Ok(serde_json::to_string(cart)?)
}

pub fn decode(raw: &str, policy: SnapshotPolicy) -> Result<Cart> {
    let cart: Cart = serde_json::from_str(raw)?;

    if policy == SnapshotPolicy::Strict {
        check_invariants(&cart)?;
    }

    Ok(cart)
}

fn check_invariants(cart: &Cart) -> Result<()> {
    let mut seen = HashSet::with_capacity(cart.len());

    for (index, line) in cart.lines().iter().enumerate() {
        if line.id.is_empty() {
            return Err(CartError::InvalidSnapshotError {
                reason: format!("line {} has an empty id", index),
            });
        }
        if line.quantity == 0 {
            return Err(CartError::InvalidSnapshotError {
                reason: format!("line '{}' has quantity 0", line.id),
            });
        }
        if !seen.insert(line.id.as_str()) {
            return Err(CartError::InvalidSnapshotError {
                reason: format!("duplicate line id '{}'", line.id),
            });
        }
    }

    Ok(())
}
