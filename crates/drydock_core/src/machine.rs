//! Per-state event handlers.
//!
//! Each handler matches on the active state and either accepts the command,
//! returning a [`Transition`] for the dock to commit, or rejects it with a
//! [`Rejection`] naming the state to (re-)enter. Ledger changes are made
//! through the borrowed [`HandlerContext`]; ship ownership changes are
//! returned as a [`ShipEffect`] so only the dock ever holds a ship.

use crate::{
    Catalog, Command, DockError, DockState, Event, ResourceKind, ResourceLedger, Ship, Weapon,
};

pub(crate) struct HandlerContext<'a> {
    pub ledger: &'a mut ResourceLedger,
    pub catalog: &'a Catalog,
    pub ship: Option<&'a Ship>,
}

pub(crate) enum ShipEffect {
    None,
    /// Move a freshly assembled ship into the dock.
    Install(Ship),
    /// Flag the docked ship as launched and ready to undock.
    MarkLaunched,
}

pub(crate) struct Transition {
    pub next: DockState,
    pub ship: ShipEffect,
    pub events: Vec<Event>,
}

impl Transition {
    fn to(next: DockState) -> Self {
        Self {
            next,
            ship: ShipEffect::None,
            events: Vec::new(),
        }
    }

    fn with_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }
}

#[derive(Debug)]
pub(crate) struct Rejection {
    pub error: DockError,
    pub next: DockState,
}

impl Rejection {
    fn stay(state: DockState, error: DockError) -> Self {
        Self { error, next: state }
    }

    fn not_permitted(state: DockState, command: Command) -> Self {
        Self::stay(state, DockError::InvalidTransitionForState { state, command })
    }
}

pub(crate) type Outcome = Result<Transition, Rejection>;

pub(crate) fn dispatch(state: DockState, command: Command, ctx: &mut HandlerContext<'_>) -> Outcome {
    match command {
        Command::TransferEnergy { amount } => transfer_energy(state, amount, ctx.ledger),
        Command::MakeSelection { code } => make_selection(state, code, ctx),
        Command::SupplyComponents { amount } => supply_components(state, amount, ctx.ledger),
        Command::Launch => launch(state, ctx),
    }
}

fn transfer_energy(state: DockState, amount: i64, ledger: &mut ResourceLedger) -> Outcome {
    match state {
        DockState::OutOfComponents | DockState::LaunchingShip => Err(Rejection::not_permitted(
            state,
            Command::TransferEnergy { amount },
        )),
        DockState::NoEnergy | DockState::HasEnergy => {
            if amount <= 0 {
                return Err(Rejection::stay(
                    state,
                    DockError::NonPositiveEnergyAmount { amount },
                ));
            }
            let total = ledger.adjust(ResourceKind::Energy, amount);
            Ok(Transition::to(DockState::HasEnergy)
                .with_event(Event::EnergyTransferred { amount, total }))
        }
    }
}

fn supply_components(state: DockState, amount: i64, ledger: &mut ResourceLedger) -> Outcome {
    let next = match state {
        DockState::OutOfComponents => DockState::NoEnergy,
        DockState::HasEnergy => DockState::HasEnergy,
        DockState::NoEnergy | DockState::LaunchingShip => {
            return Err(Rejection::not_permitted(
                state,
                Command::SupplyComponents { amount },
            ));
        }
    };
    // The supply replaces the stock outright. Non-positive amounts are
    // accepted and store zero.
    let stored = u64::try_from(amount).unwrap_or(0);
    ledger.set(ResourceKind::Components, stored);
    Ok(Transition::to(next).with_event(Event::ComponentsSupplied { amount, stored }))
}

fn make_selection(state: DockState, code: i64, ctx: &mut HandlerContext<'_>) -> Outcome {
    match state {
        DockState::HasEnergy => {
            assemble(code, ctx.catalog, ctx.ledger).map_err(|error| Rejection::stay(state, error))
        }
        DockState::OutOfComponents | DockState::NoEnergy | DockState::LaunchingShip => Err(
            Rejection::not_permitted(state, Command::MakeSelection { code }),
        ),
    }
}

/// Build a candidate ship and run it through the energy gate, then the
/// component gate. The candidate is dropped on any failure.
fn assemble(code: i64, catalog: &Catalog, ledger: &ResourceLedger) -> Result<Transition, DockError> {
    let (hull, weapon) = catalog.resolve_selection(code)?;

    let mut candidate = Ship::from_hull(hull);
    if let Some(weapon) = weapon {
        candidate.fit_weapon(Weapon::from(weapon));
    }
    let components_needed = candidate.components_required(&catalog.constants);

    let energy = ledger.get(ResourceKind::Energy);
    if candidate.total_cost() > energy {
        return Err(DockError::InsufficientEnergy {
            required: candidate.total_cost(),
            available: energy,
        });
    }

    let components = ledger.get(ResourceKind::Components);
    if components_needed > components {
        return Err(DockError::InsufficientComponents {
            required: components_needed,
            available: components,
        });
    }

    let event = Event::ShipSelected {
        name: candidate.name(),
        cost: candidate.total_cost(),
        components_needed,
    };
    Ok(Transition {
        next: DockState::LaunchingShip,
        ship: ShipEffect::Install(candidate),
        events: vec![event],
    })
}

fn launch(state: DockState, ctx: &mut HandlerContext<'_>) -> Outcome {
    match state {
        DockState::OutOfComponents | DockState::NoEnergy => {
            Err(Rejection::not_permitted(state, Command::Launch))
        }
        // Rejected, but drops back to NoEnergy rather than staying put.
        DockState::HasEnergy => Err(Rejection {
            error: DockError::InvalidTransitionForState {
                state,
                command: Command::Launch,
            },
            next: DockState::NoEnergy,
        }),
        DockState::LaunchingShip => {
            let Some(ship) = ctx.ship else {
                return Err(Rejection::stay(state, DockError::NoShipAssembled));
            };
            Ok(commit_launch(ship, ctx))
        }
    }
}

fn commit_launch(ship: &Ship, ctx: &mut HandlerContext<'_>) -> Transition {
    let ledger = &mut *ctx.ledger;
    let components_used = ship.components_required(&ctx.catalog.constants);
    let components = ledger.consume(ResourceKind::Components, components_used);
    let energy = ledger.consume(ResourceKind::Energy, ship.total_cost());

    let mut events = Vec::new();
    let next = if components == 0 {
        events.push(Event::OperationsShutDown { energy_used: energy });
        ledger.set(ResourceKind::Energy, 0);
        ledger.set(ResourceKind::Components, 0);
        DockState::OutOfComponents
    } else if energy == 0 {
        DockState::NoEnergy
    } else {
        DockState::HasEnergy
    };

    events.insert(
        0,
        Event::ShipLaunched {
            name: ship.name(),
            components_remaining: ledger.get(ResourceKind::Components),
            energy_remaining: ledger.get(ResourceKind::Energy),
        },
    );

    Transition {
        next,
        ship: ShipEffect::MarkLaunched,
        events,
    }
}
