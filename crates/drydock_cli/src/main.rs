use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use drydock_control::{
    execute, parse_script, ActionResult, AutopilotController, CommandSource, ScriptSource,
};
use drydock_core::{DockStatus, Drydock, Event, EventEnvelope};
use drydock_world::load_catalog;
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(name = "drydock_cli", about = "Drydock ship assembly CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a command script against a fresh dock.
    Run {
        /// Script file; reads stdin when omitted.
        script: Option<String>,
        #[arg(long, default_value = "./content")]
        content_dir: String,
        /// Print events and results as JSON lines.
        #[arg(long)]
        json: bool,
    },
    /// Let the autopilot drive a dock for a fixed number of steps.
    Autopilot {
        #[arg(long, default_value_t = 50)]
        steps: u64,
        /// Seed for the autopilot's RNG; random when omitted.
        #[arg(long)]
        seed: Option<u64>,
        /// Chance (0.0..=1.0) of issuing a random command instead of the planned one.
        #[arg(long, default_value_t = 0.2)]
        wander: f64,
        #[arg(long, default_value = "./content")]
        content_dir: String,
        /// Print a status line every N steps (0 disables).
        #[arg(long, default_value_t = 10)]
        print_every: u64,
        #[arg(long)]
        json: bool,
    },
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

fn describe_event(event: &Event) -> String {
    match event {
        Event::ComponentsSupplied { amount, stored } => {
            format!("components supplied: {amount} (stored {stored})")
        }
        Event::EnergyTransferred { amount, total } => {
            format!("energy transferred: {amount} (total {total})")
        }
        Event::ShipSelected {
            name,
            cost,
            components_needed,
        } => format!("selected {name}: cost={cost} components={components_needed}"),
        Event::ShipDiscarded { name } => format!("discarded {name} (never undocked)"),
        Event::ShipLaunched {
            name,
            components_remaining,
            energy_remaining,
        } => format!(
            "*** LAUNCHED {name} *** components={components_remaining} energy={energy_remaining}"
        ),
        Event::OperationsShutDown { energy_used } => {
            format!("out of components, shutting down operations ({energy_used} energy used)")
        }
        Event::ShipUndocked { name } => format!("{name} undocked"),
        Event::CommandRejected {
            command,
            state,
            reason,
        } => format!("rejected {command} in {state}: {reason}"),
        Event::StateChanged { from, to } => format!("state {from} -> {to}"),
        Event::StateOverridden { from, to } => format!("state overridden {from} -> {to}"),
        Event::DockReset => "dock reset".to_string(),
    }
}

fn status_line(status: &DockStatus) -> String {
    let ship = status.ship.as_deref().unwrap_or("-");
    format!(
        "[{state}]  components={components}  energy={energy}  ship={ship}  launching={launching}",
        state = status.state,
        components = status.components,
        energy = status.energy,
        launching = status.launching,
    )
}

struct Printer {
    json: bool,
}

impl Printer {
    fn events(&self, events: &[EventEnvelope]) -> Result<()> {
        for envelope in events {
            if self.json {
                println!(
                    "{}",
                    serde_json::to_string(envelope).context("serializing event")?
                );
            } else {
                println!(
                    "{} #{:04}  {}",
                    envelope.id.0,
                    envelope.seq,
                    describe_event(&envelope.event)
                );
            }
        }
        Ok(())
    }

    fn status(&self, status: &DockStatus) -> Result<()> {
        if self.json {
            println!(
                "{}",
                serde_json::to_string(status).context("serializing status")?
            );
        } else {
            println!("{}", status_line(status));
        }
        Ok(())
    }

    /// Results the event log does not already cover.
    fn result(&self, result: &ActionResult) -> Result<()> {
        match result {
            ActionResult::Status(status) => self.status(status)?,
            ActionResult::Undocked(ship) if !self.json => {
                println!("  {} underway: cost={}", ship.name(), ship.total_cost());
            }
            ActionResult::Rejected(err) if !self.json => println!("  -> {err}"),
            _ => {}
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Drive loop
// ---------------------------------------------------------------------------

fn drive(
    dock: &mut Drydock,
    source: &mut dyn CommandSource,
    printer: &Printer,
    print_every: u64,
) -> Result<()> {
    let mut step = 0u64;
    while let Some(action) = source.next_action(dock) {
        step += 1;
        tracing::debug!(step, ?action, "executing");
        let result = execute(dock, action);
        printer.events(&dock.drain_events())?;
        printer.result(&result)?;
        if print_every > 0 && step % print_every == 0 {
            printer.status(&dock.status())?;
        }
    }
    Ok(())
}

fn run_script(script: Option<&str>, content_dir: &str, json: bool) -> Result<()> {
    let catalog = load_catalog(content_dir)?;
    let text = match script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading script: {path}"))?,
        None => std::io::read_to_string(std::io::stdin()).context("reading script from stdin")?,
    };
    let actions = parse_script(&text).context("parsing script")?;

    let mut dock = Drydock::new(catalog);
    let printer = Printer { json };
    drive(&mut dock, &mut ScriptSource::new(actions), &printer, 0)?;
    printer.status(&dock.status())
}

fn run_autopilot(
    steps: u64,
    seed: Option<u64>,
    wander: f64,
    content_dir: &str,
    print_every: u64,
    json: bool,
) -> Result<()> {
    let catalog = load_catalog(content_dir)?;
    let seed = seed.unwrap_or_else(rand::random);
    let printer = Printer { json };
    if !json {
        println!(
            "Starting autopilot: steps={steps} seed={seed} wander={wander} content_version={}",
            catalog.content_version
        );
        println!("{}", "-".repeat(80));
    }

    let mut dock = Drydock::new(catalog);
    let mut autopilot = AutopilotController::new(seed, steps).with_wander(wander);
    drive(&mut dock, &mut autopilot, &printer, print_every)?;

    if !json {
        println!("{}", "-".repeat(80));
        println!("Done.");
    }
    printer.status(&dock.status())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            script,
            content_dir,
            json,
        } => run_script(script.as_deref(), &content_dir, json)?,
        Commands::Autopilot {
            steps,
            seed,
            wander,
            content_dir,
            print_every,
            json,
        } => run_autopilot(steps, seed, wander, &content_dir, print_every, json)?,
    }
    Ok(())
}
