//! Duck Shooter entry point
//!
//! Parses the command line, merges it over the optional settings file and
//! hands control to the desktop runner.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use duck_shooter::platform::desktop;
use duck_shooter::{Settings, Variant};

#[derive(Debug, Parser)]
#[command(author, version, about = "Shoot the ducks before they fly away", long_about = None)]
struct Cli {
    /// Game variant: classic, scenery, buffered or sunny (1-4 also accepted).
    #[arg(short, long, value_name = "NAME", value_parser = parse_variant)]
    variant: Option<Variant>,
    /// Seed for duck spawning. Random when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
    /// JSON settings file. Command-line flags take precedence over its values.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Initial window width in pixels.
    #[arg(long, value_name = "PIXELS", value_parser = clap::value_parser!(u32).range(1..))]
    width: Option<u32>,
    /// Initial window height in pixels.
    #[arg(long, value_name = "PIXELS", value_parser = clap::value_parser!(u32).range(1..))]
    height: Option<u32>,
    /// Simulation ticks per second.
    #[arg(long, value_name = "HZ", value_parser = clap::value_parser!(u32).range(1..=1000))]
    tick_hz: Option<u32>,
    /// Show a frames-per-second counter.
    #[arg(long)]
    show_fps: bool,
    /// Start in fullscreen (variants with the F toggle only).
    #[arg(long)]
    fullscreen: bool,
}

fn parse_variant(s: &str) -> Result<Variant, String> {
    Variant::from_str(s).ok_or_else(|| {
        let names: Vec<_> = Variant::ALL.iter().map(|v| v.as_str()).collect();
        format!("unknown variant '{s}', expected one of: {}", names.join(", "))
    })
}

impl Cli {
    /// Settings file (or defaults) with flags applied on top
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        if let Some(variant) = self.variant {
            settings.variant = variant;
        }
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(tick_hz) = self.tick_hz {
            settings.tick_hz = tick_hz;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        settings.show_fps |= self.show_fps;
        settings.start_fullscreen |= self.fullscreen;

        settings.validate()?;
        Ok(settings)
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings()?;
    let seed = settings.seed.unwrap_or_else(rand::random);

    log::info!("Duck Shooter starting...");
    desktop::run(settings, seed)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}
