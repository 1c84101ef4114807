//! User dashboard: connect, request a trolley and control it.
//!
//! Validation failures (blank user id, bad bag count, controls without a
//! trolley) are shown to the user as messages, not returned as errors.

use std::io::Write;
use std::path::Path;

use clap::Args;
use tracing::{info, warn};
use tragerx_map::{GridGenerator, MapRenderer, RandomSource};

use super::{heading, pause, save_image, save_logo, save_map};
use crate::branding::qr_code_image;
use crate::config::DashConfig;
use crate::error::Result;
use crate::fleet::Location;
use crate::session::{Session, Tab, TrolleyCommand};

const FAQ: &str = "\
Q: How does the autonomous trolley work?
A: TragerX uses advanced SLAM technology to navigate and follow you automatically.

Q: What if my trolley gets stuck?
A: Press the 'Help' button on the trolley or use the 'Request Assistance' button below.

Q: How long does the battery last?
A: The trolley battery lasts approximately 8 hours on a full charge.";

#[derive(Args, Debug)]
pub struct UserArgs {
    /// User account to connect
    #[arg(long, default_value = "")]
    pub user_id: String,

    /// Where the trolley should go
    #[arg(long, value_enum, default_value = "terminal-a")]
    pub location: Location,

    /// Number of bags (1-5)
    #[arg(long, default_value_t = 1)]
    pub bags: u32,

    /// Connect without requesting a trolley
    #[arg(long)]
    pub no_request: bool,

    /// Trolley commands to send after arrival, in order
    #[arg(long, value_enum)]
    pub control: Vec<TrolleyCommand>,

    /// Notify support staff
    #[arg(long)]
    pub assist: bool,
}

impl Default for UserArgs {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            location: Location::TerminalA,
            bags: 1,
            no_request: false,
            control: Vec::new(),
            assist: false,
        }
    }
}

/// Drive a user session through the requested steps, printing to `out`.
pub fn run(
    config: &DashConfig,
    args: &UserArgs,
    rng: &mut impl RandomSource,
    out: &mut impl Write,
) -> Result<Session> {
    let out_dir = Path::new(&config.output.dir);
    let mut session = Session::new();

    writeln!(out, "TragerX User Dashboard")?;
    save_logo(out_dir)?;
    heading(out, "Connect to TragerX")?;
    let qr = save_image(out_dir, "qr_code.png", &qr_code_image(rng))?;
    writeln!(
        out,
        "Scan the QR code ({}) with your phone camera or enter your user ID below to connect to a trolley.",
        qr.display()
    )?;

    match session.connect(&args.user_id) {
        Ok(msg) => writeln!(out, "{}", msg)?,
        Err(e) => {
            warn!("{}", e);
            writeln!(out, "{}", e)?;
            return Ok(session);
        }
    }

    let tabs: Vec<String> = session.visible_tabs().iter().map(Tab::to_string).collect();
    writeln!(out, "Tabs: {}", tabs.join(" | "))?;

    if !args.no_request {
        request(config, args, &mut session, out)?;
    }

    heading(out, "My Trolley")?;
    match session.my_trolley() {
        Ok(card) => {
            writeln!(out, "Trolley {}", card.id)?;
            writeln!(out, "Battery: {}%", card.battery)?;
            writeln!(out, "Status: {}", card.status)?;

            let generator = GridGenerator::new(config.map.layout.clone());
            let (grid, pose) = generator.generate(config.map.user_size)?;
            let map = MapRenderer::new(config.render.clone()).render(&grid, pose);
            let (png, _) = save_map(out_dir, "user_map", &map)?;
            writeln!(out, "Trolley location: {} ({})", pose, png.display())?;
        }
        Err(e) => writeln!(out, "{}", e)?,
    }

    for &command in &args.control {
        match session.control(command) {
            Ok(msg) => writeln!(out, "{}", msg)?,
            Err(e) => writeln!(out, "{}", e)?,
        }
    }

    if args.assist {
        heading(out, "Help & Support")?;
        writeln!(out, "{}", FAQ)?;
        writeln!(out)?;
        match session.request_assistance() {
            Ok(msg) => writeln!(out, "{}", msg)?,
            Err(e) => writeln!(out, "{}", e)?,
        }
    }

    Ok(session)
}

fn request(
    config: &DashConfig,
    args: &UserArgs,
    session: &mut Session,
    out: &mut impl Write,
) -> Result<()> {
    heading(out, "Request a Trolley")?;
    let mut dispatch = match session.request_trolley(args.location, args.bags) {
        Ok(d) => d,
        Err(e) => {
            warn!("{}", e);
            writeln!(out, "{}", e)?;
            return Ok(());
        }
    };

    let req = dispatch.request().clone();
    writeln!(out, "Location: {}  Bags: {}", req.location, req.bags)?;
    writeln!(out, "Trolley {} is on its way to your location!", req.trolley_id)?;
    writeln!(out, "Estimated arrival time: {} minutes", req.eta_minutes)?;

    for progress in dispatch.by_ref() {
        if progress % 10 == 0 {
            write!(out, "\rProgress: {:>3}%", progress)?;
            out.flush()?;
        }
        if progress < 100 {
            pause(config.dispatch.step_interval_ms);
        }
    }
    writeln!(out)?;

    session.arrive(&dispatch)?;
    info!("{} delivered to {}", req.trolley_id, req.location);
    writeln!(
        out,
        "Your trolley has arrived! You can now use the 'My Trolley' tab to control it."
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionState;
    use tragerx_map::SeededRandom;

    fn test_config(dir: &Path) -> DashConfig {
        let mut config = DashConfig::default();
        config.output.dir = dir.to_string_lossy().into_owned();
        config.dispatch.step_interval_ms = 0;
        config
    }

    fn run_to_string(config: &DashConfig, args: &UserArgs) -> (Session, String) {
        let mut rng = SeededRandom::new(11);
        let mut out = Vec::new();
        let session = run(config, args, &mut rng, &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_blank_user_id() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let (session, text) = run_to_string(&config, &UserArgs::default());

        assert_eq!(session.state(), SessionState::Disconnected);
        assert!(text.contains("Please enter a valid User ID"));
        assert!(!text.contains("Tabs:"));
        assert!(dir.path().join("qr_code.png").exists());
        assert!(dir.path().join("logo.png").exists());
    }

    #[test]
    fn test_full_flow() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let args = UserArgs {
            user_id: "U42".to_string(),
            location: Location::BaggageClaim,
            bags: 3,
            ..Default::default()
        };
        let (session, text) = run_to_string(&config, &args);

        assert_eq!(session.state(), SessionState::ConnectedWithTrolley);
        assert!(text.contains("Connected to user account: U42"));
        assert!(text.contains("Tabs: Request Trolley | My Trolley | Help"));
        assert!(text.contains("Trolley TX-007 is on its way to your location!"));
        assert!(text.contains("Estimated arrival time: 2 minutes"));
        assert!(text.contains("Progress: 100%"));
        assert!(text.contains("Battery: 87%"));
        assert!(text.contains("Status: Following"));
        assert!(text.contains("Trolley location: [15,15]"));
        assert!(dir.path().join("user_map.png").exists());
        assert!(dir.path().join("user_map.svg").exists());
    }

    #[test]
    fn test_controls_and_return() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let args = UserArgs {
            user_id: "U42".to_string(),
            control: vec![
                TrolleyCommand::Stop,
                TrolleyCommand::Return,
                TrolleyCommand::Follow,
            ],
            ..Default::default()
        };
        let (session, text) = run_to_string(&config, &args);

        assert_eq!(session.state(), SessionState::ConnectedNoTrolley);
        assert!(text.contains("Trolley has stopped"));
        assert!(text.contains("Trolley will return to the nearest collection point"));
        // Follow after return has no trolley to talk to
        assert!(text.contains("You don't have an active trolley."));
    }

    #[test]
    fn test_invalid_bags_shown() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let args = UserArgs {
            user_id: "U42".to_string(),
            bags: 9,
            ..Default::default()
        };
        let (session, text) = run_to_string(&config, &args);

        assert_eq!(session.state(), SessionState::ConnectedNoTrolley);
        assert!(text.contains("Number of bags must be between 1 and 5, got 9"));
        assert!(!dir.path().join("user_map.png").exists());
    }

    #[test]
    fn test_assistance() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let args = UserArgs {
            user_id: "U42".to_string(),
            no_request: true,
            assist: true,
            ..Default::default()
        };
        let (_, text) = run_to_string(&config, &args);

        assert!(text.contains("Q: How does the autonomous trolley work?"));
        assert!(text.contains("Support staff has been notified."));
    }
}
