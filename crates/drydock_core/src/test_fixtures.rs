//! Shared test fixtures for drydock_core and downstream crates.
//!
//! `base_catalog()` mirrors the shipped `content/catalog.json`: seven hulls on
//! codes 1..=64 and seven weapons on codes 128..=8192.

use crate::{Catalog, Constants, Drydock, PartCategory, PartDef, ResourceKind};

fn hull(code: i64, name: &str, cost: u64) -> PartDef {
    PartDef {
        code,
        name: name.to_string(),
        category: PartCategory::Hull,
        cost,
        power_against_hull: 0,
        power_against_shields: 0,
    }
}

fn weapon(code: i64, name: &str, cost: u64, against_hull: u32, against_shields: u32) -> PartDef {
    PartDef {
        code,
        name: name.to_string(),
        category: PartCategory::Weapon,
        cost,
        power_against_hull: against_hull,
        power_against_shields: against_shields,
    }
}

pub fn base_catalog() -> Catalog {
    Catalog {
        content_version: "test".to_string(),
        constants: Constants::default(),
        parts: vec![
            hull(1, "Saber-class scout", 11_000),
            hull(2, "Norway-class science vessel", 11_250),
            hull(4, "Steamrunner-class frigate", 11_500),
            hull(8, "Akira-class carrier", 11_750),
            hull(16, "Prometheus-class cruiser", 12_000),
            hull(32, "Sovereign-class heavy cruiser", 12_500),
            hull(64, "Excalibur-class battleship", 13_000),
            weapon(128, "Type VI Phaser Bank", 500, 10, 30),
            weapon(256, "Type VII Phaser Bank", 550, 20, 60),
            weapon(512, "Type VIII Phaser Array", 600, 40, 120),
            weapon(1024, "Type IX Phaser Array", 700, 80, 240),
            weapon(2048, "Type X Phaser Array", 800, 160, 480),
            weapon(4096, "Type XI Phaser Array", 900, 320, 960),
            weapon(8192, "Type XII Phaser Array", 1000, 640, 1920),
        ],
    }
}

pub fn base_dock() -> Drydock {
    Drydock::new(base_catalog())
}

/// A dock in `HasEnergy`, reached through the normal command path.
pub fn powered_dock(components: i64, energy: i64) -> Drydock {
    let mut dock = base_dock();
    assert!(dock.supply_components(components), "supply should succeed");
    assert!(dock.transfer_energy(energy), "energy transfer should succeed");
    assert_eq!(dock.resource(ResourceKind::Energy), energy.unsigned_abs());
    dock.drain_events();
    dock
}
