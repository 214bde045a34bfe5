use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use flashdeck_core::VERSION;

/// Flashdeck - a command-line flashcard trainer
#[derive(Parser)]
#[command(name = "flashdeck")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Card file to load before the session starts
    #[arg(short, long, value_name = "PATH", env = "FLASHDECK_IMPORT")]
    pub import: Option<String>,

    /// Card file to save to when the session ends
    #[arg(short, long, value_name = "PATH", env = "FLASHDECK_EXPORT")]
    pub export: Option<String>,

    /// Force plain output even on a terminal
    #[arg(long, global = true)]
    pub plain: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols instead of unicode
    #[arg(long, global = true)]
    pub ascii: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions(CompletionsArgs),
}
