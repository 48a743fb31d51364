use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ResourceKind;

/// Depletable quantities held by a dock.
///
/// Quantities are unsigned, so a negative value can never be stored; every
/// subtraction saturates at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLedger {
    quantities: HashMap<ResourceKind, u64>,
}

impl Default for ResourceLedger {
    fn default() -> Self {
        Self {
            quantities: HashMap::from([(ResourceKind::Components, 0), (ResourceKind::Energy, 0)]),
        }
    }
}

impl ResourceLedger {
    pub fn get(&self, kind: ResourceKind) -> u64 {
        self.quantities.get(&kind).copied().unwrap_or(0)
    }

    pub fn set(&mut self, kind: ResourceKind, quantity: u64) {
        self.quantities.insert(kind, quantity);
    }

    /// Add a signed delta, clamping at zero. Returns the stored value.
    pub fn adjust(&mut self, kind: ResourceKind, delta: i64) -> u64 {
        let current = self.get(kind);
        let next = if delta >= 0 {
            current.saturating_add(delta.unsigned_abs())
        } else {
            current.saturating_sub(delta.unsigned_abs())
        };
        self.set(kind, next);
        next
    }

    /// Remove `amount`, clamping at zero. Returns the stored value.
    pub fn consume(&mut self, kind: ResourceKind, amount: u64) -> u64 {
        let next = self.get(kind).saturating_sub(amount);
        self.set(kind, next);
        next
    }
}
