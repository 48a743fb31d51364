use super::*;

#[test]
fn launch_consumes_resources_and_returns_to_has_energy() {
    let mut dock = dock_with_selection(5, 20_000, 1);
    assert!(dock.launch());
    assert_eq!(components(&dock), 4);
    assert_eq!(energy(&dock), 20_000 - 11_000);
    assert_eq!(dock.state(), DockState::HasEnergy);
    assert!(dock.is_launching());
}

#[test]
fn launch_with_weapon_uses_two_components() {
    let mut dock = dock_with_selection(5, 20_000, 2048 + 8);
    assert!(dock.launch());
    assert_eq!(components(&dock), 3);
    assert_eq!(energy(&dock), 20_000 - 11_750 - 800);
}

#[test]
fn launch_spending_all_energy_moves_to_no_energy() {
    let mut dock = dock_with_selection(3, 11_000, 1);
    assert!(dock.launch());
    assert_eq!(energy(&dock), 0);
    assert_eq!(components(&dock), 2);
    assert_eq!(dock.state(), DockState::NoEnergy);
}

#[test]
fn launch_using_last_components_shuts_down() {
    let mut dock = dock_with_selection(2, 30_000, 128 + 1);
    assert!(dock.launch());
    assert_eq!(dock.state(), DockState::OutOfComponents);
    assert_eq!(components(&dock), 0);
    // Leftover energy is spent on shutdown.
    assert_eq!(energy(&dock), 0);
    assert!(dock.events().iter().any(|e| matches!(
        e.event,
        Event::OperationsShutDown {
            energy_used
        } if energy_used == 30_000 - 11_500
    )));
}

#[test]
fn component_check_wins_over_energy_check() {
    // Both run out at once: components take precedence.
    let mut dock = dock_with_selection(1, 11_000, 1);
    assert!(dock.launch());
    assert_eq!(dock.state(), DockState::OutOfComponents);
}

#[test]
fn launched_event_reports_remaining_resources() {
    let mut dock = dock_with_selection(5, 20_000, 1);
    dock.drain_events();
    dock.launch();
    let launched = dock
        .events()
        .iter()
        .find_map(|e| match &e.event {
            Event::ShipLaunched {
                name,
                components_remaining,
                energy_remaining,
            } => Some((name.clone(), *components_remaining, *energy_remaining)),
            _ => None,
        })
        .expect("ShipLaunched should be emitted");
    assert_eq!(launched, ("Saber-class scout".to_string(), 4, 9000));
}

#[test]
fn launch_after_shutdown_restarts_from_supply() {
    let mut dock = dock_with_launched_ship(1, 20_000, 1);
    assert_eq!(dock.state(), DockState::OutOfComponents);
    assert!(dock.undock_ship().is_ok());
    assert!(!dock.launch());
    assert!(dock.supply_components(3));
    assert!(dock.transfer_energy(12_000));
    assert!(dock.make_selection(1));
    assert!(dock.launch());
    assert_eq!(components(&dock), 2);
    assert_eq!(energy(&dock), 1000);
}
