//! TragerX Dash - Fleet dashboard for the TragerX autonomous trolley demo
//!
//! Two text dashboards over a mock fleet:
//!
//! - **admin**: fleet metrics, battery histogram, notifications, the fleet
//!   table, the store map and per-trolley remote actions
//! - **user**: connect with a user id, request a trolley, follow its
//!   progress and control it
//!
//! Maps and the QR image are written as PNG (and SVG for maps) into the
//! output directory.

mod branding;
mod config;
mod control;
mod error;
mod fleet;
mod session;
mod views;

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use config::DashConfig;
use error::Result;
use fleet::MockFleet;
use tracing::info;
use tragerx_map::SeededRandom;
use views::admin::AdminArgs;
use views::user::UserArgs;

/// Config file picked up from the working directory when --config is absent.
const DEFAULT_CONFIG: &str = "tragerx.toml";

#[derive(Parser, Debug)]
#[command(name = "tragerx-dash", version)]
#[command(about = "Admin and user dashboard for the TragerX trolley fleet", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory for map and QR images
    #[arg(long, global = true)]
    output: Option<String>,

    /// Random seed, 0 for entropy
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fleet overview, store map and remote control
    Admin(AdminArgs),
    /// Connect, request and control a trolley
    User(UserArgs),
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout holds only the dashboard
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tragerx_dash=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    info!("TragerX Dash v{}", env!("CARGO_PKG_VERSION"));
    info!("Writing images to {}", config.output.dir);

    let seed = config.fleet.seed;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::Admin(args) => {
            let mut fleet = MockFleet::new(SeededRandom::new(seed), config.fleet.num_trolleys);
            let mut rng = SeededRandom::new(seed);
            views::admin::run(&config, args, &mut fleet, &mut rng, &mut out)?;
        }
        Command::User(args) => {
            let mut rng = SeededRandom::new(seed);
            let session = views::user::run(&config, args, &mut rng, &mut out)?;
            info!(
                "Session for {} ended in state {:?}",
                session.user_id().unwrap_or("<none>"),
                session.state()
            );
        }
    }

    out.flush()?;
    Ok(())
}

/// Explicit --config, else `tragerx.toml` if present, else defaults; then
/// command-line overrides.
fn load_config(cli: &Cli) -> Result<DashConfig> {
    let mut config = if let Some(path) = &cli.config {
        info!("Loading configuration from {:?}", path);
        DashConfig::load(path)?
    } else if Path::new(DEFAULT_CONFIG).exists() {
        info!("Loading configuration from {}", DEFAULT_CONFIG);
        DashConfig::load(Path::new(DEFAULT_CONFIG))?
    } else {
        info!("Using default configuration");
        DashConfig::default()
    };

    if let Some(dir) = &cli.output {
        config.output.dir = dir.clone();
    }
    if let Some(seed) = cli.seed {
        config.fleet.seed = seed;
    }
    Ok(config)
}
