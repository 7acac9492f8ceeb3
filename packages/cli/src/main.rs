mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{init, inspect, render, InitArgs, InspectArgs, RenderArgs};
use tracing_subscriber::EnvFilter;

/// Pagecraft CLI - drag-and-drop page builder
#[derive(Parser, Debug)]
#[command(name = "pagecraft")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log every applied mutation
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a pagecraft.config.json
    Init(InitArgs),

    /// Render the editor or preview screen to HTML
    Render(RenderArgs),

    /// Print the component tree and page settings
    Inspect(InspectArgs),
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| {
            let cwd = cwd.display().to_string();
            match cli.command {
                Command::Init(args) => init(args, &cwd),
                Command::Render(args) => render(args, &cwd),
                Command::Inspect(args) => inspect(args, &cwd),
            }
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
