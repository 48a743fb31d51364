//! Type definitions for `drydock_core`.
//!
//! Operating states, resource kinds, commands, and the event log types.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ID newtypes
// ---------------------------------------------------------------------------

macro_rules! string_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(EventId);

// ---------------------------------------------------------------------------
// Core enums
// ---------------------------------------------------------------------------

/// Operating state of the drydock. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DockState {
    /// No components on hand for ship assembly.
    OutOfComponents,
    /// Components on hand but no energy to assemble with.
    NoEnergy,
    /// Components and energy on hand; a selection can be made.
    HasEnergy,
    /// A ship has been assembled and is waiting to launch.
    LaunchingShip,
}

impl DockState {
    pub const ALL: [DockState; 4] = [
        DockState::OutOfComponents,
        DockState::NoEnergy,
        DockState::HasEnergy,
        DockState::LaunchingShip,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DockState::OutOfComponents => "out_of_components",
            DockState::NoEnergy => "no_energy",
            DockState::HasEnergy => "has_energy",
            DockState::LaunchingShip => "launching_ship",
        }
    }

    /// Inverse of [`DockState::label`].
    pub fn from_label(label: &str) -> Option<DockState> {
        Self::ALL.into_iter().find(|state| state.label() == label)
    }
}

impl std::fmt::Display for DockState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Components,
    Energy,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Components => f.write_str("components"),
            ResourceKind::Energy => f.write_str("energy"),
        }
    }
}

// ---------------------------------------------------------------------------
// Command types
// ---------------------------------------------------------------------------

/// The four external events every state must answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    TransferEnergy { amount: i64 },
    MakeSelection { code: i64 },
    SupplyComponents { amount: i64 },
    Launch,
}

impl Command {
    pub fn label(&self) -> &'static str {
        match self {
            Command::TransferEnergy { .. } => "transfer_energy",
            Command::MakeSelection { .. } => "make_selection",
            Command::SupplyComponents { .. } => "supply_components",
            Command::Launch => "launch",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::TransferEnergy { amount } | Command::SupplyComponents { amount } => {
                write!(f, "{}({amount})", self.label())
            }
            Command::MakeSelection { code } => write!(f, "{}({code})", self.label()),
            Command::Launch => f.write_str(self.label()),
        }
    }
}

// ---------------------------------------------------------------------------
// Event types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Counters {
    pub next_event_id: u64,
    /// Commands handled so far, accepted or not. Stamped on each event as `seq`.
    pub commands_handled: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub id: EventId,
    pub seq: u64,
    pub event: Event,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    ComponentsSupplied {
        amount: i64,
        stored: u64,
    },
    EnergyTransferred {
        amount: i64,
        total: u64,
    },
    ShipSelected {
        name: String,
        cost: u64,
        components_needed: u64,
    },
    /// A ship that was never undocked was replaced by a new selection.
    ShipDiscarded {
        name: String,
    },
    ShipLaunched {
        name: String,
        components_remaining: u64,
        energy_remaining: u64,
    },
    /// Components ran out during a launch; the remaining energy was spent
    /// shutting the dock down.
    OperationsShutDown {
        energy_used: u64,
    },
    ShipUndocked {
        name: String,
    },
    CommandRejected {
        command: Command,
        state: DockState,
        reason: String,
    },
    StateChanged {
        from: DockState,
        to: DockState,
    },
    /// Only emitted by `Drydock::override_state`.
    StateOverridden {
        from: DockState,
        to: DockState,
    },
    DockReset,
}

/// Point-in-time view of a dock, for display and serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockStatus {
    pub state: DockState,
    pub components: u64,
    pub energy: u64,
    pub ship: Option<String>,
    pub launching: bool,
    pub underway: bool,
}
