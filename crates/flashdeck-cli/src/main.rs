//! Flashdeck CLI - an interactive flashcard trainer for the terminal
//!
//! This is the command-line interface for Flashdeck. It runs the menu-driven
//! session on top of the core deck library.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod session;
mod transcript;
mod ui;

use std::io;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::errors::CliError;
use crate::helpers::{LinePrompter, TerminalPrompter};
use crate::session::{Console, Session};
use crate::ui::UiContext;

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let ctx = AppContext::new(&cli);
    if let Err(e) = run(&ctx) {
        if let Some(cli_err) = e.downcast_ref::<CliError>() {
            cli_err.exit();
        }
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr so they never mix with the session dialogue.
fn init_tracing() {
    let filter = std::env::var("FLASHDECK_LOG").unwrap_or_else(|_| "warn".into());
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(ctx: &AppContext) -> anyhow::Result<()> {
    if let Some(Commands::Completions(args)) = &ctx.cli().command {
        return commands::handle_completions(args.shell);
    }

    let import = ctx.import_path()?;
    let export = ctx.export_path()?;
    let ui = UiContext::from_env(ctx.ui_preferences()?);
    tracing::debug!(?import, ?export, mode = ?ui.mode, "starting session");

    let rng = StdRng::from_os_rng();
    if ui.is_interactive() {
        let console = Console::new(TerminalPrompter, io::stdout(), ui);
        start(Session::new(console, rng).export_on_exit(export), import)
    } else {
        let stdin = io::stdin();
        let console = Console::new(LinePrompter::new(stdin.lock()), io::stdout(), ui);
        start(Session::new(console, rng).export_on_exit(export), import)
    }
}

fn start<P, W>(
    mut session: Session<P, W, StdRng>,
    import: Option<std::path::PathBuf>,
) -> anyhow::Result<()>
where
    P: helpers::Prompter,
    W: io::Write,
{
    if let Some(path) = import {
        session.import(&path)?;
    }
    session.run()
}
