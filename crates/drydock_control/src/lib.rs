use anyhow::{bail, Context, Result};
use drydock_core::{
    Catalog, Command, DockError, DockState, DockStatus, Drydock, PartDef, ResourceKind, Ship,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Anything a driver can ask of a dock: the four commands plus the
/// operator verbs that sit outside the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Dock(Command),
    Undock,
    Status,
    Override(DockState),
    Reset,
}

#[derive(Debug)]
pub enum ActionResult {
    Accepted,
    Rejected(DockError),
    Undocked(Ship),
    Status(DockStatus),
    Overridden(DockState),
    Reset,
}

pub trait CommandSource {
    fn next_action(&mut self, dock: &Drydock) -> Option<Action>;
}

pub fn execute(dock: &mut Drydock, action: Action) -> ActionResult {
    match action {
        Action::Dock(command) => match dock.handle(command) {
            Ok(()) => ActionResult::Accepted,
            Err(err) => ActionResult::Rejected(err),
        },
        Action::Undock => match dock.undock_ship() {
            Ok(ship) => ActionResult::Undocked(ship),
            Err(err) => ActionResult::Rejected(err),
        },
        Action::Status => ActionResult::Status(dock.status()),
        Action::Override(state) => {
            dock.override_state(state);
            ActionResult::Overridden(state)
        }
        Action::Reset => {
            dock.reset();
            ActionResult::Reset
        }
    }
}

// ---------------------------------------------------------------------------
// Script parsing
// ---------------------------------------------------------------------------

fn parse_int(verb: &str, arg: Option<&str>) -> Result<i64> {
    let Some(arg) = arg else {
        bail!("'{verb}' needs a whole-number argument");
    };
    arg.parse()
        .with_context(|| format!("'{verb}' argument '{arg}' is not a whole number"))
}

/// Parse one script line. Blank lines and `#` comments yield `None`.
///
/// Verbs: `supply N`, `energy N`, `select CODE`, `launch`, `undock`,
/// `status`, `override STATE`, `reset`.
pub fn parse_action(line: &str) -> Result<Option<Action>> {
    let line = line.split('#').next().unwrap_or("").trim();
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();

    let action = match verb.to_ascii_lowercase().as_str() {
        "supply" | "components" => Action::Dock(Command::SupplyComponents {
            amount: parse_int(verb, arg)?,
        }),
        "energy" | "transfer" => Action::Dock(Command::TransferEnergy {
            amount: parse_int(verb, arg)?,
        }),
        "select" => Action::Dock(Command::MakeSelection {
            code: parse_int(verb, arg)?,
        }),
        "launch" => Action::Dock(Command::Launch),
        "undock" => Action::Undock,
        "status" => Action::Status,
        "override" => {
            let Some(label) = arg else {
                bail!("'override' needs a state name");
            };
            let Some(state) = DockState::from_label(label) else {
                bail!("unknown state '{label}'");
            };
            Action::Override(state)
        }
        "reset" => Action::Reset,
        other => bail!("unknown verb '{other}'"),
    };

    if let Some(extra) = words.next() {
        bail!("unexpected trailing input '{extra}'");
    }
    Ok(Some(action))
}

pub fn parse_script(text: &str) -> Result<Vec<Action>> {
    let mut actions = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if let Some(action) = parse_action(line).with_context(|| format!("line {}", idx + 1))? {
            actions.push(action);
        }
    }
    Ok(actions)
}

/// Replays a parsed script in order.
pub struct ScriptSource {
    actions: VecDeque<Action>,
}

impl ScriptSource {
    pub fn new(actions: Vec<Action>) -> Self {
        Self {
            actions: actions.into(),
        }
    }
}

impl CommandSource for ScriptSource {
    fn next_action(&mut self, _dock: &Drydock) -> Option<Action> {
        self.actions.pop_front()
    }
}

// ---------------------------------------------------------------------------
// Autopilot
// ---------------------------------------------------------------------------

/// Drives a dock automatically:
/// 1. Undock a launched ship.
/// 2. Launch an assembled ship.
/// 3. Select the priciest affordable hull/weapon pair.
/// 4. Supply components or transfer energy when short.
///
/// With probability `wander` it issues a random command instead, so
/// rejection paths get exercised too.
pub struct AutopilotController {
    rng: ChaCha8Rng,
    steps_remaining: u64,
    wander: f64,
}

impl AutopilotController {
    pub fn new(seed: u64, steps: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            steps_remaining: steps,
            wander: 0.2,
        }
    }

    #[must_use]
    pub fn with_wander(mut self, wander: f64) -> Self {
        self.wander = wander.clamp(0.0, 1.0);
        self
    }

    fn random_action(&mut self, catalog: &Catalog) -> Action {
        let command = match self.rng.gen_range(0..4) {
            0 => Command::TransferEnergy {
                amount: self.rng.gen_range(-1_000..20_000),
            },
            1 => Command::SupplyComponents {
                amount: self.rng.gen_range(-2..8),
            },
            2 => {
                let codes: Vec<i64> = catalog.parts.iter().map(|p| p.code).collect();
                let code = if codes.is_empty() || self.rng.gen_bool(0.2) {
                    self.rng.gen_range(-10..10_000)
                } else {
                    codes[self.rng.gen_range(0..codes.len())]
                };
                Command::MakeSelection { code }
            }
            _ => Command::Launch,
        };
        Action::Dock(command)
    }

    fn planned_action(&mut self, dock: &Drydock) -> Action {
        if dock.is_launching() {
            return Action::Undock;
        }
        match dock.state() {
            DockState::OutOfComponents => Action::Dock(Command::SupplyComponents {
                amount: self.rng.gen_range(1..=6),
            }),
            DockState::NoEnergy => Action::Dock(Command::TransferEnergy {
                amount: self.rng.gen_range(5_000..=25_000),
            }),
            DockState::HasEnergy => self.select_or_restock(dock),
            DockState::LaunchingShip => Action::Dock(Command::Launch),
        }
    }

    fn select_or_restock(&mut self, dock: &Drydock) -> Action {
        if let Some(code) = best_affordable_code(dock) {
            return Action::Dock(Command::MakeSelection { code });
        }
        if dock.resource(ResourceKind::Components) < 2 {
            Action::Dock(Command::SupplyComponents {
                amount: self.rng.gen_range(2..=6),
            })
        } else {
            Action::Dock(Command::TransferEnergy {
                amount: self.rng.gen_range(5_000..=25_000),
            })
        }
    }
}

fn pair_cost(hull: &PartDef, weapon: Option<&PartDef>) -> u64 {
    hull.cost.saturating_add(weapon.map_or(0, |w| w.cost))
}

/// The selection code of the most expensive build the dock can afford right now.
fn best_affordable_code(dock: &Drydock) -> Option<i64> {
    let catalog = dock.catalog();
    let constants = &catalog.constants;
    let energy = dock.resource(ResourceKind::Energy);
    let components = dock.resource(ResourceKind::Components);

    let bare = catalog.hulls().map(|hull| (hull, None));
    let armed = catalog
        .hulls()
        .flat_map(move |hull| catalog.weapons().map(move |weapon| (hull, Some(weapon))));

    bare.chain(armed)
        .filter(|(hull, weapon)| {
            let needed = constants.components_per_hull
                + weapon.map_or(0, |_| constants.components_per_weapon);
            pair_cost(hull, *weapon) <= energy && needed <= components
        })
        .max_by_key(|(hull, weapon)| pair_cost(hull, *weapon))
        .map(|(hull, weapon)| hull.code + weapon.map_or(0, |w| w.code))
}

impl CommandSource for AutopilotController {
    fn next_action(&mut self, dock: &Drydock) -> Option<Action> {
        if self.steps_remaining == 0 {
            return None;
        }
        self.steps_remaining -= 1;
        if self.rng.gen_bool(self.wander) {
            Some(self.random_action(dock.catalog()))
        } else {
            Some(self.planned_action(dock))
        }
    }
}
