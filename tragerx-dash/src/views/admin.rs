//! Admin dashboard: fleet overview, store map and remote control.

use std::io::Write;
use std::path::Path;

use clap::Args;
use tracing::{info, warn};
use tragerx_map::{CellState, GridGenerator, MapRenderer, RandomSource, SimulatedMovement};

use super::{bar, heading, pause, save_logo, save_map};
use crate::config::DashConfig;
use crate::control::{self, AdminAction};
use crate::error::Result;
use crate::fleet::{FleetProvider, FleetSnapshot};

/// Width of the battery histogram bars in characters.
const BAR_WIDTH: usize = 30;

#[derive(Args, Debug, Default)]
pub struct AdminArgs {
    /// Write one jittered map frame per movement step
    #[arg(long)]
    pub simulate_movement: bool,

    /// Trolley to send an action to, e.g. TX-004
    #[arg(long, requires = "action")]
    pub trolley: Option<String>,

    /// Action to execute on --trolley
    #[arg(long, value_enum, requires = "trolley")]
    pub action: Option<AdminAction>,
}

/// Print the admin dashboard to `out` and write its map images.
pub fn run(
    config: &DashConfig,
    args: &AdminArgs,
    fleet: &mut impl FleetProvider,
    rng: &mut impl RandomSource,
    out: &mut impl Write,
) -> Result<()> {
    let snapshot = fleet.snapshot();
    let out_dir = Path::new(&config.output.dir);

    writeln!(out, "TragerX Admin Dashboard")?;
    save_logo(out_dir)?;
    print_metrics(&snapshot, out)?;
    print_battery(&snapshot, out)?;
    print_notifications(&snapshot, out)?;
    print_fleet(&snapshot, out)?;

    heading(out, "Store Map")?;
    let generator = GridGenerator::new(config.map.layout.clone());
    let renderer = MapRenderer::new(config.render.clone());
    let size = config.map.admin_size;

    let (grid, pose) = generator.generate(size)?;
    let counts = grid.count_by_state();
    let (png, svg) = save_map(out_dir, "admin_map", &renderer.render(&grid, pose))?;
    let breakdown: Vec<String> = CellState::ALL
        .iter()
        .map(|&state| format!("{} {}", counts.get(state), state.label().to_lowercase()))
        .collect();
    writeln!(
        out,
        "{}x{} grid, trolley at {} ({})",
        size,
        size,
        pose,
        breakdown.join(", ")
    )?;
    writeln!(out, "Map written to {} and {}", png.display(), svg.display())?;

    if args.simulate_movement {
        simulate(config, generator, &renderer, rng, out_dir, out)?;
    }

    if let (Some(id), Some(action)) = (&args.trolley, args.action) {
        heading(out, "Trolley Control")?;
        match control::execute(&snapshot, id, action) {
            Ok(msg) => writeln!(out, "{}", msg)?,
            Err(e) => {
                warn!("{}", e);
                writeln!(out, "{}", e)?;
            }
        }
    }

    Ok(())
}

fn print_metrics(snapshot: &FleetSnapshot, out: &mut impl Write) -> Result<()> {
    let m = &snapshot.metrics;
    heading(out, "Fleet Status")?;
    writeln!(
        out,
        "Active: {}  Idle: {}  Charging: {}  Maintenance: {}",
        m.active, m.idle, m.charging, m.maintenance
    )?;
    Ok(())
}

fn print_battery(snapshot: &FleetSnapshot, out: &mut impl Write) -> Result<()> {
    heading(out, "Battery Levels")?;
    let max = snapshot.battery.iter().map(|(_, c)| *c).max().unwrap_or(0);
    for (level, count) in &snapshot.battery {
        writeln!(
            out,
            "{:<16} {:>3} {}",
            level.label(),
            count,
            bar(*count, max, BAR_WIDTH)
        )?;
    }
    Ok(())
}

fn print_notifications(snapshot: &FleetSnapshot, out: &mut impl Write) -> Result<()> {
    heading(out, "Notifications")?;
    for note in &snapshot.notifications {
        writeln!(out, "[i] {}", note)?;
    }
    Ok(())
}

fn print_fleet(snapshot: &FleetSnapshot, out: &mut impl Write) -> Result<()> {
    heading(out, "Fleet Management")?;
    writeln!(
        out,
        "{:<8} {:<12} {:>7}  {:<14} {}",
        "ID", "Status", "Battery", "Location", "Last Active"
    )?;
    for t in &snapshot.trolleys {
        writeln!(
            out,
            "{:<8} {:<12} {:>6}%  {:<14} {}",
            t.id,
            t.status.to_string(),
            t.battery,
            t.location.to_string(),
            t.last_active
        )?;
    }
    Ok(())
}

fn simulate(
    config: &DashConfig,
    generator: GridGenerator,
    renderer: &MapRenderer,
    rng: &mut impl RandomSource,
    out_dir: &Path,
    out: &mut impl Write,
) -> Result<()> {
    heading(out, "Movement Simulation")?;
    let movement = SimulatedMovement::new(
        generator,
        config.map.admin_size,
        &config.movement,
        &mut *rng,
    )?;
    let total = movement.len();
    info!("Simulating {} movement frames", total);

    for frame in movement {
        let stem = format!("admin_map_step_{}", frame.step + 1);
        let (png, _) = save_map(out_dir, &stem, &renderer.render(&frame.grid, frame.pose))?;
        writeln!(
            out,
            "Step {}/{}: trolley at {} -> {}",
            frame.step + 1,
            total,
            frame.pose,
            png.display()
        )?;

        if frame.step + 1 < total {
            pause(config.movement.frame_interval_ms);
        }
    }
    Ok(())
}
