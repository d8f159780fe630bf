//! Wuyu CLI Application
//!
//! Command-line front end for Five Educations activity management.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{ActivityCommands, Cli, ListActivitiesArgs};
use log::info;
use renderer::TerminalRenderer;
use wuyu_core::StoreBuilder;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        ephemeral,
        semester,
        user,
        no_color,
        command,
    } = Args::parse();

    let builder = StoreBuilder::new().with_current_semester(semester);
    let builder = if ephemeral {
        builder.in_memory()
    } else {
        builder.with_database_path(database_file)
    };
    let store = builder.build().context("Failed to initialize store")?;

    let mut cli = Cli::new(store, TerminalRenderer::new(!no_color), user);

    info!("Wuyu started");

    match command {
        Some(Activity { command }) => cli.handle_activity_command(command),
        Some(Plan { command }) => cli.handle_plan_command(command),
        Some(Template { command }) => cli.handle_template_command(command),
        Some(Catalog { command }) => cli.handle_catalog_command(command),
        None => cli.handle_activity_command(ActivityCommands::List(ListActivitiesArgs::default())),
    }
}
