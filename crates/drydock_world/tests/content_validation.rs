//! Validation tests for the shipped `content/catalog.json`.
//!
//! These load the real content file and check that it deserializes, passes
//! validation, matches the test fixture, and yields a usable dock.

use drydock_core::test_fixtures::base_catalog;
use drydock_core::{Catalog, DockState, Drydock, PartCategory};
use drydock_world::load_catalog;
use std::sync::OnceLock;

/// Integration tests run from the crate directory, so go up two levels.
fn content_dir() -> String {
    let manifest = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    format!("{manifest}/../../content")
}

fn load_test_catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        load_catalog(&content_dir()).expect("load_catalog should succeed for shipped content")
    })
}

#[test]
fn catalog_loads_successfully() {
    let _catalog = load_test_catalog();
}

#[test]
fn shipped_parts_match_fixture() {
    let catalog = load_test_catalog();
    assert_eq!(catalog.constants, base_catalog().constants);
    assert_eq!(catalog.parts, base_catalog().parts);
}

#[test]
fn every_hull_weapon_pair_resolves() {
    let catalog = load_test_catalog();
    for hull in catalog.hulls() {
        for weapon in catalog.weapons() {
            let code = hull.code + weapon.code;
            let (h, w) = catalog
                .resolve_selection(code)
                .unwrap_or_else(|e| panic!("code {code} should resolve: {e}"));
            assert_eq!(h.code, hull.code);
            assert_eq!(w.map(|w| w.code), Some(weapon.code));
        }
    }
}

#[test]
fn weapon_stats_are_positive() {
    let catalog = load_test_catalog();
    for weapon in catalog.weapons() {
        assert!(weapon.power_against_hull > 0, "{} has no hull power", weapon.name);
        assert!(
            weapon.power_against_shields > 0,
            "{} has no shield power",
            weapon.name
        );
    }
}

#[test]
fn cheapest_hull_is_code_one() {
    let catalog = load_test_catalog();
    let cheapest = catalog
        .parts
        .iter()
        .filter(|p| p.category == PartCategory::Hull)
        .min_by_key(|p| p.cost)
        .unwrap();
    assert_eq!(cheapest.code, 1);
    assert_eq!(cheapest.cost, 11_000);
}

#[test]
fn shipped_catalog_drives_a_dock() {
    let mut dock = Drydock::new(load_test_catalog().clone());
    assert!(dock.supply_components(2));
    assert!(dock.transfer_energy(15_000));
    assert!(dock.make_selection(8192 + 1));
    assert!(dock.launch());
    assert_eq!(dock.state(), DockState::OutOfComponents);
    assert_eq!(
        dock.undock_ship().unwrap().name(),
        "Saber-class scout + Type XII Phaser Array"
    );
}
