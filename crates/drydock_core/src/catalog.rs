//! Data-driven part catalog and selection-code decoding.
//!
//! Selection codes pack a hull code into the low range (`0..=primary_code_limit`)
//! and an optional weapon code into the bits above it. A code above the
//! primary limit is split as `hull = code mod (limit + 1)`, `weapon = code - hull`.

use serde::{Deserialize, Serialize};

use crate::DockError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartCategory {
    /// A ship hull; the primary half of a selection.
    Hull,
    /// A weapon fitted to a hull; the optional secondary half.
    Weapon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartDef {
    pub code: i64,
    pub name: String,
    pub category: PartCategory,
    pub cost: u64,
    /// Weapons only. Zero for hulls.
    #[serde(default)]
    pub power_against_hull: u32,
    /// Weapons only. Zero for hulls.
    #[serde(default)]
    pub power_against_shields: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constants {
    /// Largest code that is a hull on its own. Codes above it carry a weapon.
    pub primary_code_limit: i64,
    pub components_per_hull: u64,
    pub components_per_weapon: u64,
}

impl Default for Constants {
    fn default() -> Self {
        Self {
            primary_code_limit: 127,
            components_per_hull: 1,
            components_per_weapon: 1,
        }
    }
}

/// A selection code split into its hull and weapon halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionCode {
    pub hull: i64,
    pub weapon: Option<i64>,
}

impl Constants {
    pub fn decode(&self, code: i64) -> SelectionCode {
        if code <= self.primary_code_limit {
            return SelectionCode {
                hull: code,
                weapon: None,
            };
        }
        let hull = code.rem_euclid(self.primary_code_limit.saturating_add(1));
        SelectionCode {
            hull,
            weapon: Some(code - hull),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub content_version: String,
    #[serde(default)]
    pub constants: Constants,
    pub parts: Vec<PartDef>,
}

impl Catalog {
    pub fn resolve(&self, code: i64) -> Option<&PartDef> {
        self.parts.iter().find(|part| part.code == code)
    }

    fn resolve_as(&self, code: i64, category: PartCategory) -> Option<&PartDef> {
        self.resolve(code).filter(|part| part.category == category)
    }

    /// Resolve both halves of a selection code.
    ///
    /// The weapon half is checked first, then the hull half; either failing
    /// reports the whole code as invalid.
    pub fn resolve_selection(&self, code: i64) -> Result<(&PartDef, Option<&PartDef>), DockError> {
        let decoded = self.constants.decode(code);
        let weapon = match decoded.weapon {
            Some(weapon_code) => Some(
                self.resolve_as(weapon_code, PartCategory::Weapon)
                    .ok_or(DockError::InvalidSelectionCode { code })?,
            ),
            None => None,
        };
        let hull = self
            .resolve_as(decoded.hull, PartCategory::Hull)
            .ok_or(DockError::InvalidSelectionCode { code })?;
        Ok((hull, weapon))
    }

    pub fn hulls(&self) -> impl Iterator<Item = &PartDef> {
        self.parts
            .iter()
            .filter(|part| part.category == PartCategory::Hull)
    }

    pub fn weapons(&self) -> impl Iterator<Item = &PartDef> {
        self.parts
            .iter()
            .filter(|part| part.category == PartCategory::Weapon)
    }
}
