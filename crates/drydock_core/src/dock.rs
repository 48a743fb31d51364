use tracing::{info, warn};

use crate::machine::{self, HandlerContext, ShipEffect, Transition};
use crate::{
    Catalog, Command, Counters, DockError, DockState, DockStatus, Event, EventEnvelope,
    ResourceKind, ResourceLedger, Ship,
};

/// The drydock state machine driver.
///
/// Owns the resource ledger, the active state, and the ship being assembled.
/// A ship leaves the dock only through [`Drydock::undock_ship`].
#[derive(Debug, Clone)]
pub struct Drydock {
    catalog: Catalog,
    ledger: ResourceLedger,
    state: DockState,
    ship: Option<Ship>,
    /// Set by a successful launch; cleared by undock or a new selection.
    launching: bool,
    /// Set once the last assembled ship has been undocked.
    underway: bool,
    counters: Counters,
    events: Vec<EventEnvelope>,
}

impl Drydock {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ledger: ResourceLedger::default(),
            state: DockState::OutOfComponents,
            ship: None,
            launching: false,
            underway: false,
            counters: Counters::default(),
            events: Vec::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Event API
    // -----------------------------------------------------------------------

    /// Run `command` through the active state's handler and commit the result.
    ///
    /// A rejection still commits the state the handler asked for, which is
    /// the current state in every case except `launch` while `HasEnergy`.
    pub fn handle(&mut self, command: Command) -> Result<(), DockError> {
        let from = self.state;
        self.counters.commands_handled += 1;

        let mut ctx = HandlerContext {
            ledger: &mut self.ledger,
            catalog: &self.catalog,
            ship: self.ship.as_ref(),
        };
        match machine::dispatch(from, command, &mut ctx) {
            Ok(transition) => {
                info!(%command, %from, to = %transition.next, "command accepted");
                self.apply(transition);
                Ok(())
            }
            Err(rejection) => {
                warn!(%command, state = %from, error = %rejection.error, "command rejected");
                self.push_event(Event::CommandRejected {
                    command,
                    state: from,
                    reason: rejection.error.to_string(),
                });
                self.commit_state(rejection.next);
                Err(rejection.error)
            }
        }
    }

    pub fn transfer_energy(&mut self, amount: i64) -> bool {
        self.handle(Command::TransferEnergy { amount }).is_ok()
    }

    pub fn make_selection(&mut self, code: i64) -> bool {
        self.handle(Command::MakeSelection { code }).is_ok()
    }

    pub fn supply_components(&mut self, amount: i64) -> bool {
        self.handle(Command::SupplyComponents { amount }).is_ok()
    }

    pub fn launch(&mut self) -> bool {
        self.handle(Command::Launch).is_ok()
    }

    /// Hand the launched ship to the caller. Succeeds once per launch.
    pub fn undock_ship(&mut self) -> Result<Ship, DockError> {
        let ship = if self.launching { self.ship.take() } else { None };
        let Some(ship) = ship else {
            warn!(state = %self.state, "undock refused: no ship assembled");
            return Err(DockError::NoShipAssembled);
        };
        self.launching = false;
        self.underway = true;
        info!(ship = %ship.name(), "ship undocked");
        self.push_event(Event::ShipUndocked { name: ship.name() });
        Ok(ship)
    }

    // -----------------------------------------------------------------------
    // Debug operations
    // -----------------------------------------------------------------------

    /// Force the active state without running any handler.
    ///
    /// # Consistency
    ///
    /// Nothing is checked: the ledger, the docked ship, and the new state can
    /// disagree afterwards (e.g. `LaunchingShip` with no ship, or `HasEnergy`
    /// with zero energy). Handlers stay total under such combinations, but
    /// the usual invariants between state and resources no longer hold.
    pub fn override_state(&mut self, state: DockState) {
        let from = self.state;
        warn!(%from, to = %state, "state overridden");
        self.state = state;
        self.push_event(Event::StateOverridden { from, to: state });
    }

    /// Discard resources, ship, state, and event log; keep the catalog.
    pub fn reset(&mut self) {
        info!("dock reset");
        let catalog = std::mem::take(&mut self.catalog);
        *self = Self::new(catalog);
        self.push_event(Event::DockReset);
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn state(&self) -> DockState {
        self.state
    }

    pub fn resource(&self, kind: ResourceKind) -> u64 {
        self.ledger.get(kind)
    }

    pub fn ledger(&self) -> &ResourceLedger {
        &self.ledger
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The ship currently held by the dock, launched or not.
    pub fn ship(&self) -> Option<&Ship> {
        self.ship.as_ref()
    }

    pub fn is_launching(&self) -> bool {
        self.launching
    }

    pub fn is_underway(&self) -> bool {
        self.underway
    }

    pub fn status(&self) -> DockStatus {
        DockStatus {
            state: self.state,
            components: self.ledger.get(ResourceKind::Components),
            energy: self.ledger.get(ResourceKind::Energy),
            ship: self.ship.as_ref().map(Ship::name),
            launching: self.launching,
            underway: self.underway,
        }
    }

    pub fn events(&self) -> &[EventEnvelope] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<EventEnvelope> {
        std::mem::take(&mut self.events)
    }

    // -----------------------------------------------------------------------
    // Commit
    // -----------------------------------------------------------------------

    fn apply(&mut self, transition: Transition) {
        match transition.ship {
            ShipEffect::None => {}
            ShipEffect::Install(ship) => {
                if let Some(previous) = self.ship.take() {
                    warn!(ship = %previous.name(), "discarding ship that was never undocked");
                    self.push_event(Event::ShipDiscarded {
                        name: previous.name(),
                    });
                }
                self.ship = Some(ship);
                self.launching = false;
                self.underway = false;
            }
            ShipEffect::MarkLaunched => self.launching = true,
        }
        for event in transition.events {
            self.push_event(event);
        }
        self.commit_state(transition.next);
    }

    fn commit_state(&mut self, next: DockState) {
        let from = self.state;
        self.state = next;
        if from != next {
            self.push_event(Event::StateChanged { from, to: next });
        }
    }

    fn push_event(&mut self, event: Event) {
        let seq = self.counters.commands_handled;
        let envelope = crate::emit(&mut self.counters, seq, event);
        self.events.push(envelope);
    }
}
