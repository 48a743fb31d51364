use super::*;
use crate::test_fixtures::{base_catalog, base_dock, powered_dock};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

mod launch;
mod transitions;

// --- Shared test helpers ------------------------------------------------

fn make_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

fn components(dock: &Drydock) -> u64 {
    dock.resource(ResourceKind::Components)
}

fn energy(dock: &Drydock) -> u64 {
    dock.resource(ResourceKind::Energy)
}

/// A dock holding an assembled ship in `LaunchingShip`.
fn dock_with_selection(components: i64, energy: i64, code: i64) -> Drydock {
    let mut dock = powered_dock(components, energy);
    assert!(dock.make_selection(code), "selection {code} should succeed");
    dock
}

/// A dock whose ship has launched and is waiting to undock.
fn dock_with_launched_ship(components: i64, energy: i64, code: i64) -> Drydock {
    let mut dock = dock_with_selection(components, energy, code);
    assert!(dock.launch(), "launch should succeed");
    dock
}

/// Every command in every state, using amounts that pass validation.
fn all_commands() -> [Command; 4] {
    [
        Command::TransferEnergy { amount: 500 },
        Command::MakeSelection { code: 1 },
        Command::SupplyComponents { amount: 3 },
        Command::Launch,
    ]
}
