use serde::{Deserialize, Serialize};

use crate::{Constants, PartDef};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub cost: u64,
    pub power_against_hull: u32,
    pub power_against_shields: u32,
}

impl From<&PartDef> for Weapon {
    fn from(def: &PartDef) -> Self {
        Self {
            name: def.name.clone(),
            cost: def.cost,
            power_against_hull: def.power_against_hull,
            power_against_shields: def.power_against_shields,
        }
    }
}

/// A hull with at most one fitted weapon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    hull_name: String,
    hull_cost: u64,
    weapon: Option<Weapon>,
}

impl Ship {
    pub fn new(hull_name: impl Into<String>, hull_cost: u64) -> Self {
        Self {
            hull_name: hull_name.into(),
            hull_cost,
            weapon: None,
        }
    }

    pub fn from_hull(def: &PartDef) -> Self {
        Self::new(def.name.clone(), def.cost)
    }

    /// Hull name, followed by `" + <weapon>"` when a weapon is fitted.
    pub fn name(&self) -> String {
        match &self.weapon {
            Some(weapon) => format!("{} + {}", self.hull_name, weapon.name),
            None => self.hull_name.clone(),
        }
    }

    pub fn hull_name(&self) -> &str {
        &self.hull_name
    }

    pub fn base_cost(&self) -> u64 {
        self.hull_cost
    }

    pub fn total_cost(&self) -> u64 {
        self.hull_cost
            .saturating_add(self.weapon.as_ref().map_or(0, |weapon| weapon.cost))
    }

    pub fn weapon(&self) -> Option<&Weapon> {
        self.weapon.as_ref()
    }

    /// Fit `weapon`, returning whatever was fitted before.
    pub fn fit_weapon(&mut self, weapon: Weapon) -> Option<Weapon> {
        self.weapon.replace(weapon)
    }

    pub fn remove_weapon(&mut self) -> Option<Weapon> {
        self.weapon.take()
    }

    /// Components consumed building this ship: one lot for the hull, one
    /// more if a weapon is fitted.
    pub fn components_required(&self, constants: &Constants) -> u64 {
        let weapon = if self.weapon.is_some() {
            constants.components_per_weapon
        } else {
            0
        };
        constants.components_per_hull.saturating_add(weapon)
    }
}
