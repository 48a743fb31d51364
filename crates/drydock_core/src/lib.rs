//! `drydock_core`: resource-gated ship assembly state machine.
//!
//! No IO. A [`Drydock`] answers four commands (supply components, transfer
//! energy, make a selection, launch) according to its active [`DockState`],
//! keeps its resources in a [`ResourceLedger`], and hands finished ships out
//! through [`Drydock::undock_ship`].

mod catalog;
mod dock;
mod error;
mod ledger;
mod machine;
mod ship;
#[cfg(any(test, feature = "test-support"))]
pub mod test_fixtures;
mod types;

pub use catalog::{Catalog, Constants, PartCategory, PartDef, SelectionCode};
pub use dock::Drydock;
pub use error::DockError;
pub use ledger::ResourceLedger;
pub use ship::{Ship, Weapon};
pub use types::*;

pub(crate) fn emit(counters: &mut Counters, seq: u64, event: Event) -> EventEnvelope {
    let id = EventId(format!("evt_{:06}", counters.next_event_id));
    counters.next_event_id += 1;
    EventEnvelope { id, seq, event }
}

#[cfg(test)]
mod tests;
