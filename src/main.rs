use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use nalgebra::Vector2;

use solar_sim::io::{self, BodyInfo, ScenarioConfig};
use solar_sim::physics::{AU, SECONDS_PER_DAY};
use solar_sim::sim::{self, EventKind, SimConfig, System, TimeControl, UpdateMode};
use solar_sim::presets;

#[derive(Parser, Debug)]
#[command(about = "Run a 2D solar system simulation and print an orbit report")]
struct Args {
    /// YAML scenario; the built-in inner solar system is used when omitted
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// Frames to simulate
    #[arg(short, long, default_value_t = 365)]
    frames: usize,

    /// Speed multiplier per frame (0, 0.5, 1, 2 or 5; nearest is used)
    #[arg(long, default_value_t = 1.0)]
    speed: f64,

    /// Use snapshot (simultaneous) updates instead of in-order updates
    #[arg(long)]
    simultaneous: bool,

    /// Write orbit trails to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the final body summary to this JSON file
    #[arg(long)]
    json: Option<PathBuf>,
}

fn load_system(args: &Args) -> Result<System> {
    let mut system = match &args.scenario {
        Some(path) => ScenarioConfig::from_file(path)
            .and_then(|cfg| cfg.build_system())
            .with_context(|| format!("failed to load scenario {}", path.display()))?,
        None => presets::solar_system(SimConfig::default())?,
    };

    if args.simultaneous {
        let config = SimConfig { update_mode: UpdateMode::Simultaneous, ..*system.config() };
        system.set_config(config)?;
    }
    Ok(system)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut system = load_system(&args)?;

    // -----------------------------------------------------------------------
    // Run simulation
    // -----------------------------------------------------------------------
    let clock = TimeControl::with_speed(args.speed);
    let steps = clock
        .steps_for_frames(args.frames)
        .with_context(|| format!("{} frames at {} is too many steps", args.frames, clock.label()))?;
    let events = sim::simulate(&mut system, steps);

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    let config = system.config();
    println!();
    println!("====================================================================");
    println!("  SOLAR SYSTEM SIMULATION");
    println!("====================================================================");
    println!();
    println!(
        "  Frames: {}   Speed: {}   Steps: {}   dt: {:.0} s   Mode: {:?}",
        args.frames,
        clock.label(),
        system.step_count(),
        config.dt,
        config.update_mode
    );
    println!("  Simulated time: {:.1} days", system.time() / SECONDS_PER_DAY);
    println!();

    println!("  Bodies");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:<9} {:>10} {:>10} {:>10} {:>11} {:>7}",
        "name", "x (AU)", "y (AU)", "r (AU)", "period (d)", "trail"
    );
    println!("  {}", "─".repeat(62));
    for body in system.bodies() {
        let d = body.derived().copied().unwrap_or_default();
        println!(
            "  {:<9} {:>10.4} {:>10.4} {:>10.4} {:>11.1} {:>7}",
            body.name(),
            body.position().x / AU,
            body.position().y / AU,
            d.semi_major_axis_au,
            d.orbital_period_days,
            body.trail().map_or(0, |t| t.len()),
        );
    }
    println!();

    println!("  Body Info");
    println!("  ──────────────────────────────────────────────────────────────────");
    for body in system.bodies().iter().filter(|b| !b.is_primary()) {
        let info = BodyInfo::from_body(body);
        for (label, value) in info.rows().iter().skip(1) {
            println!("  {:<9} {:<22} {}", info.name, label, value);
        }
        println!();
    }

    println!("  Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    let center = system.primary().map_or(Vector2::zeros(), |p| *p.position());
    if events.is_empty() {
        println!("  (none)");
    }
    for event in &events {
        let what = match &event.kind {
            EventKind::Perihelion => "PERIHELION".to_string(),
            EventKind::Aphelion => "APHELION".to_string(),
            EventKind::Revolution { count } => format!("REVOLUTION #{}", count),
            EventKind::Custom(text) => text.clone(),
        };
        let r = (event.snapshot.position - center).norm() / AU;
        println!(
            "  day {:>7.1}   {:<9} {:<15} r={:.4} AU   v={:.2} km/s",
            event.time / SECONDS_PER_DAY,
            event.body,
            what,
            r,
            event.snapshot.velocity.norm() / 1000.0
        );
    }
    println!();

    // -----------------------------------------------------------------------
    // Exports
    // -----------------------------------------------------------------------
    if let Some(path) = &args.csv {
        let path = path.to_string_lossy();
        io::csv::write_trails_file(&path, system.bodies())
            .with_context(|| format!("failed to write {}", path))?;
        println!("  Trails written to {}", path);
    }
    if let Some(path) = &args.json {
        let path = path.to_string_lossy();
        io::json::write_summary_file(&path, &system)
            .with_context(|| format!("failed to write {}", path))?;
        println!("  Summary written to {}", path);
    }
    println!("====================================================================");
    println!();

    Ok(())
}
