//! Prize Wheel CLI
//!
//! Usage:
//!   prize-wheel spin [--config wheel.yaml] [--count 3]   - Run spins headlessly
//!   prize-wheel simulate [--draws 100000]                - Check selection odds
//!   prize-wheel plan --sectors 8 --index 2               - Print a rotation plan

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use rf_prize_wheel::{
    HeadlessAnimator, RenderHandles, SpinSession, TargetId, WheelConfig, calculate_wheel_rotation,
    select_winning_sector, total_weight,
};

#[derive(Parser)]
#[command(name = "prize-wheel", about = "Prize wheel spin engine driver")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Spin the wheel through the headless animator
    Spin {
        /// Wheel config (.json, .yaml, .yml); demo wheel if omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Number of consecutive spins
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u32,
        /// Simulated frame rate
        #[arg(long, default_value_t = 60.0)]
        fps: f64,
    },
    /// Draw winners without animating and compare with the weights
    Simulate {
        /// Wheel config (.json, .yaml, .yml); demo wheel if omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Number of draws
        #[arg(short, long, default_value_t = 100_000)]
        draws: u32,
    },
    /// Plan one rotation and print it as JSON
    Plan {
        /// Sector count
        #[arg(short, long)]
        sectors: usize,
        /// Winning sector index
        #[arg(short, long)]
        index: usize,
        /// Current absolute rotation
        #[arg(short, long, default_value_t = 0.0)]
        rotation: f64,
        #[arg(long, default_value_t = 5)]
        min_spins: u32,
        #[arg(long, default_value_t = 8)]
        max_spins: u32,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Spin { config, count, fps } => run_spins(config.as_deref(), count, fps),
        Commands::Simulate { config, draws } => simulate(config.as_deref(), draws),
        Commands::Plan {
            sectors,
            index,
            rotation,
            min_spins,
            max_spins,
        } => plan(sectors, index, rotation, min_spins, max_spins),
    }
}

fn load_config(path: Option<&Path>) -> Result<WheelConfig> {
    let config = match path {
        Some(path) => WheelConfig::load(path)
            .with_context(|| format!("Failed to load wheel config {}", path.display()))?,
        None => WheelConfig::demo(8),
    };
    log::info!(
        "Wheel: {} sectors, {:.1}s, {}-{} spins",
        config.sectors.len(),
        config.duration_secs,
        config.min_spins,
        config.max_spins
    );
    Ok(config)
}

fn run_spins(path: Option<&Path>, count: u32, fps: f64) -> Result<()> {
    if !fps.is_finite() || fps <= 0.0 {
        bail!("fps must be positive, got {fps}");
    }
    let config = load_config(path)?;
    let frame = 1.0 / fps;
    let max_frames = (config.duration_secs * fps).ceil() as u64 + 2;

    let mut session = SpinSession::new(config, HeadlessAnimator::new())?;
    session.attach(RenderHandles {
        wheel: TargetId(0),
        indicator: TargetId(1),
    });

    for spin in 1..=count {
        if !session.spin()? {
            bail!("Spin {spin} was rejected");
        }

        let mut outcome = None;
        for _ in 0..max_frames {
            session.animator_mut().advance(frame);
            if let Some(done) = session.on_frame() {
                outcome = Some(done);
                break;
            }
        }
        let outcome = outcome.with_context(|| format!("Spin {spin} did not finish"))?;

        println!(
            "spin {spin}: {} (#{}) rotation {:.2}° ticks {}",
            outcome.winning_sector.label,
            outcome.winning_index,
            outcome.total_rotation,
            outcome.ticks
        );
    }
    Ok(())
}

fn simulate(path: Option<&Path>, draws: u32) -> Result<()> {
    if draws == 0 {
        bail!("draws must be positive");
    }
    let config = load_config(path)?;
    let mut counts = vec![0u32; config.sectors.len()];
    for _ in 0..draws {
        counts[select_winning_sector(&config.sectors)?] += 1;
    }

    let total = total_weight(&config.sectors);
    println!("{:<4} {:<20} {:>10} {:>10}", "#", "sector", "expected", "observed");
    for (i, sector) in config.sectors.iter().enumerate() {
        let expected = sector.effective_weight() / total * 100.0;
        let observed = f64::from(counts[i]) / f64::from(draws) * 100.0;
        println!(
            "{:<4} {:<20} {:>9.3}% {:>9.3}%",
            i, sector.label, expected, observed
        );
    }
    Ok(())
}

fn plan(sectors: usize, index: usize, rotation: f64, min_spins: u32, max_spins: u32) -> Result<()> {
    let plan = calculate_wheel_rotation(index, sectors, rotation, min_spins, max_spins)?;
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
