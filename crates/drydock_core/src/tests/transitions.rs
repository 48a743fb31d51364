use super::*;

#[test]
fn new_dock_starts_out_of_components() {
    let dock = base_dock();
    assert_eq!(dock.state(), DockState::OutOfComponents);
    assert_eq!(components(&dock), 0);
    assert_eq!(energy(&dock), 0);
    assert!(dock.ship().is_none());
}

#[test]
fn supply_from_out_of_components_moves_to_no_energy() {
    let mut dock = base_dock();
    assert!(dock.supply_components(5));
    assert_eq!(dock.state(), DockState::NoEnergy);
    assert_eq!(components(&dock), 5);
}

#[test]
fn only_supply_succeeds_from_out_of_components() {
    for command in all_commands() {
        let mut dock = base_dock();
        let result = dock.handle(command);
        if matches!(command, Command::SupplyComponents { .. }) {
            assert!(result.is_ok());
            assert_eq!(dock.state(), DockState::NoEnergy);
        } else {
            assert_eq!(
                result,
                Err(DockError::InvalidTransitionForState {
                    state: DockState::OutOfComponents,
                    command,
                })
            );
            assert_eq!(dock.state(), DockState::OutOfComponents);
        }
    }
}

#[test]
fn supply_accepts_non_positive_amounts_and_stores_zero() {
    for amount in [0, -1, i64::MIN] {
        let mut dock = base_dock();
        assert!(dock.supply_components(amount), "amount {amount} is accepted");
        assert_eq!(dock.state(), DockState::NoEnergy);
        assert_eq!(components(&dock), 0);
    }
}

#[test]
fn zero_energy_transfer_is_rejected_in_no_energy() {
    let mut dock = base_dock();
    dock.supply_components(5);
    assert_eq!(
        dock.handle(Command::TransferEnergy { amount: 0 }),
        Err(DockError::NonPositiveEnergyAmount { amount: 0 })
    );
    assert_eq!(dock.state(), DockState::NoEnergy);
    assert_eq!(energy(&dock), 0);

    assert!(dock.transfer_energy(1000));
    assert_eq!(dock.state(), DockState::HasEnergy);
    assert_eq!(energy(&dock), 1000);
}

#[test]
fn no_energy_rejects_everything_but_transfer() {
    let mut dock = base_dock();
    dock.supply_components(5);
    assert!(!dock.make_selection(1));
    assert!(!dock.supply_components(9));
    assert!(!dock.launch());
    assert_eq!(dock.state(), DockState::NoEnergy);
    assert_eq!(components(&dock), 5);
}

#[test]
fn energy_transfers_accumulate_in_has_energy() {
    let mut dock = powered_dock(5, 1000);
    assert!(dock.transfer_energy(250));
    assert_eq!(energy(&dock), 1250);
    assert_eq!(dock.state(), DockState::HasEnergy);

    assert!(!dock.transfer_energy(-5));
    assert_eq!(energy(&dock), 1250);
    assert_eq!(dock.state(), DockState::HasEnergy);
}

#[test]
fn supply_in_has_energy_replaces_stock() {
    let mut dock = powered_dock(5, 1000);
    assert!(dock.supply_components(2));
    assert_eq!(components(&dock), 2);
    assert_eq!(dock.state(), DockState::HasEnergy);
}

#[test]
fn launch_in_has_energy_rejects_and_drops_to_no_energy() {
    let mut dock = powered_dock(5, 1000);
    assert_eq!(
        dock.handle(Command::Launch),
        Err(DockError::InvalidTransitionForState {
            state: DockState::HasEnergy,
            command: Command::Launch,
        })
    );
    assert_eq!(dock.state(), DockState::NoEnergy);
    // Resources are untouched; a transfer brings the dock back.
    assert_eq!(energy(&dock), 1000);
    assert!(dock.transfer_energy(1));
    assert_eq!(dock.state(), DockState::HasEnergy);
}

#[test]
fn launching_ship_rejects_everything_but_launch() {
    let mut dock = dock_with_selection(5, 20_000, 1);
    for command in all_commands() {
        if command == Command::Launch {
            continue;
        }
        assert!(dock.handle(command).is_err(), "{command} should be rejected");
        assert_eq!(dock.state(), DockState::LaunchingShip);
    }
    assert_eq!(components(&dock), 5);
    assert_eq!(energy(&dock), 20_000);
}

#[test]
fn rejection_is_idempotent() {
    let mut dock = base_dock();
    dock.supply_components(4);
    let before = dock.status();
    for _ in 0..5 {
        assert!(!dock.launch());
        assert!(!dock.make_selection(2));
        assert_eq!(dock.status(), before);
    }
}
