#![allow(non_snake_case)]

mod app;
mod components;
mod content;
pub mod context;
mod shell;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Start route requested on the command line, resolved once the shell
/// has mounted (the desktop equivalent of loading a deep link).
static START_ROUTE: OnceLock<String> = OnceLock::new();

/// Get the start route (set from command line), if any.
pub fn start_route() -> Option<String> {
    START_ROUTE.get().cloned()
}

/// Folio - single-page portfolio shell
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - a portfolio page with deep-linkable overlay panels")]
struct Args {
    /// Panel or project to open on launch
    /// (`about`, `projects`, `contact`, `project/<id>`)
    #[arg(short, long)]
    open: Option<String>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 820.0)]
    height: f64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if let Some(open) = args.open {
        tracing::info!(route = %open, "launching with start route");
        let _ = START_ROUTE.set(open);
    }

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Mara Voss \u{2014} Folio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
