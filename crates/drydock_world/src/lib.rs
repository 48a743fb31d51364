//! Catalog loading shared between drydock_cli and tests.

use anyhow::{Context, Result};
use drydock_core::{Catalog, PartCategory};
use std::collections::HashSet;
use std::path::Path;

pub const CATALOG_FILE: &str = "catalog.json";

/// Validates code-space rules in a loaded catalog, panicking on any authoring error.
///
/// Catches mistakes like: two parts sharing a code, a hull code above the
/// primary limit, or a weapon code that would not survive selection decoding.
pub fn validate_catalog(catalog: &Catalog) {
    let limit = catalog.constants.primary_code_limit;
    assert!(
        limit > 0 && limit < i64::MAX,
        "primary_code_limit must be positive, got {limit}"
    );
    assert!(
        catalog.constants.components_per_hull > 0,
        "components_per_hull must be at least 1"
    );

    let mut seen = HashSet::new();
    for part in &catalog.parts {
        assert!(
            seen.insert(part.code),
            "part code {} is used more than once",
            part.code
        );
        assert!(!part.name.is_empty(), "part code {} has an empty name", part.code);

        match part.category {
            PartCategory::Hull => {
                assert!(
                    (1..=limit).contains(&part.code),
                    "hull '{}' code {} is outside the primary range 1..={limit}",
                    part.name,
                    part.code,
                );
                assert!(
                    part.power_against_hull == 0 && part.power_against_shields == 0,
                    "hull '{}' carries weapon stats",
                    part.name,
                );
            }
            PartCategory::Weapon => {
                assert!(
                    part.code > limit && part.code % (limit + 1) == 0,
                    "weapon '{}' code {} must be a multiple of {} above the primary range",
                    part.name,
                    part.code,
                    limit + 1,
                );
            }
        }
    }

    assert!(catalog.hulls().next().is_some(), "catalog has no hulls");
}

pub fn parse_catalog(json: &str) -> Result<Catalog> {
    let catalog: Catalog = serde_json::from_str(json).context("parsing catalog")?;
    validate_catalog(&catalog);
    Ok(catalog)
}

pub fn load_catalog(content_dir: &str) -> Result<Catalog> {
    let path = Path::new(content_dir).join(CATALOG_FILE);
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_catalog(&json).with_context(|| format!("loading {}", path.display()))
}
