#![allow(non_snake_case)]

mod app;
pub mod context;
mod theme;

use std::path::PathBuf;

use anyhow::Context as _;
use castboard_core::Roster;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Castboard - character cards for a conversation
#[derive(Parser, Debug)]
#[command(name = "castboard-desktop")]
#[command(about = "Castboard - show the cast of a conversation as character cards")]
struct Args {
    /// Roster JSON file (defaults to <config dir>/castboard/roster.json, then the demo cast)
    #[arg(short, long)]
    roster: Option<PathBuf>,

    /// Window title
    #[arg(short, long, default_value = "Castboard")]
    title: String,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 900.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 700.0)]
    height: f64,
}

/// Pick the roster: explicit path, then the default location, then the demo.
fn load_roster(explicit: Option<PathBuf>) -> anyhow::Result<Roster> {
    if let Some(path) = explicit {
        return Roster::load(&path)
            .with_context(|| format!("Failed to load roster from {:?}", path));
    }

    match context::default_roster_path() {
        Some(path) if path.exists() => Roster::load(&path)
            .with_context(|| format!("Failed to load roster from {:?}", path)),
        _ => {
            tracing::info!("No roster file found, using the demo cast");
            Ok(Roster::demo())
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let roster = match load_roster(args.roster) {
        Ok(roster) => roster,
        Err(e) => {
            tracing::error!("{:#}", e);
            return Err(e);
        }
    };

    tracing::info!(
        "Starting '{}' with {} characters",
        args.title,
        roster.len()
    );
    context::set_roster(roster);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&args.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
