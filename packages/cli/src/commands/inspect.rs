use super::{open_session, SessionSource};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagecraft_model::{tree, Component, RECOMMENDED_DESCRIPTION_LENGTH};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Components JSON to start from instead of the starter page
    #[arg(short, long)]
    pub page: Option<PathBuf>,

    /// JSON array of editor events to replay first
    #[arg(short, long)]
    pub events: Option<PathBuf>,

    /// Print the state as JSON instead of an outline
    #[arg(long)]
    pub json: bool,
}

pub fn inspect(args: InspectArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let shell = open_session(
        &config,
        SessionSource {
            page: args.page.as_deref(),
            events: args.events.as_deref(),
            device: None,
        },
    )?;
    let state = shell.state();

    if args.json {
        println!("{}", serde_json::to_string_pretty(state)?);
        return Ok(());
    }

    println!("{} {}", "Title:".bold(), state.page.title);
    let count = state.page.description_len();
    let counter = format!("{}/{}", count, RECOMMENDED_DESCRIPTION_LENGTH);
    let counter = counter.as_str();
    println!(
        "{} {} ({})",
        "Description:".bold(),
        state.page.description,
        if state.page.description_exceeds_recommendation() {
            counter.yellow()
        } else {
            counter.normal()
        }
    );
    println!(
        "{} {} ({})",
        "Device:".bold(),
        state.current_device,
        state.current_device.width().to_css()
    );
    println!(
        "{} {} (version {})",
        "Components:".bold(),
        tree::count(&state.components),
        shell.store().version()
    );
    println!();

    if state.components.is_empty() {
        println!("  {}", "(empty canvas)".dimmed());
    }
    for root in &state.components {
        print_outline(root, 1, state.selected_component_id.as_ref());
    }

    Ok(())
}

fn print_outline(
    component: &Arc<Component>,
    depth: usize,
    selected: Option<&pagecraft_model::ComponentId>,
) {
    let marker = if selected == Some(&component.id) {
        "▸".cyan().to_string()
    } else {
        " ".to_string()
    };
    let kind = component.type_tag();
    let kind = if component.kind().is_some() {
        kind.bright_blue()
    } else {
        kind.red()
    };

    println!(
        "{}{} {} {}",
        "  ".repeat(depth),
        marker,
        kind,
        component.id.as_str().dimmed()
    );

    for child in component.children() {
        print_outline(child, depth + 1, selected);
    }
}
