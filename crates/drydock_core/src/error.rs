use crate::{Command, DockState};

/// Why the dock refused a command. Every variant is recoverable: the dock is
/// left in a valid, usable state after returning one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DockError {
    /// The command is not permitted in the current state.
    #[error("{command} is not permitted while {state}")]
    InvalidTransitionForState { state: DockState, command: Command },

    /// The selection code (or one of its halves) matches no catalog entry.
    #[error("selection code {code} does not resolve to a catalog entry")]
    InvalidSelectionCode { code: i64 },

    #[error("not enough energy: {required} required, {available} available")]
    InsufficientEnergy { required: u64, available: u64 },

    #[error("not enough components: {required} required, {available} available")]
    InsufficientComponents { required: u64, available: u64 },

    /// Undock (or launch) with no assembled ship.
    #[error("no ship assembled")]
    NoShipAssembled,

    #[error("energy transfer must be positive, got {amount}")]
    NonPositiveEnergyAmount { amount: i64 },
}
