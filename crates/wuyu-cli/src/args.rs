use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ActivityCommands, CatalogCommands, PlanCommands, TemplateCommands};

/// Five Educations activity management from the terminal
///
/// Browse activities, organise them into semester plans, and author
/// activities and reusable templates. Demo activities and plans are loaded on
/// every start and kept in memory for the run; user templates are saved to a
/// SQLite file.
#[derive(Parser)]
#[command(version, about, name = "wuyu")]
pub struct Args {
    /// Path to the SQLite database file holding user templates. Defaults to
    /// $XDG_DATA_HOME/wuyu/wuyu.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Keep user templates in memory only; nothing is written to disk
    #[arg(long, global = true, conflicts_with = "database_file")]
    pub ephemeral: bool,

    /// Semester used for plan commands, e.g. 2024-2025-2
    #[arg(long, global = true)]
    pub semester: Option<String>,

    /// User id recorded as the owner of created activities and templates
    #[arg(long, global = true, default_value = "teacher-1")]
    pub user: String,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without a command, activities are listed.
#[derive(Subcommand)]
pub enum Commands {
    /// Browse and author activities
    #[command(alias = "a")]
    Activity {
        #[command(subcommand)]
        command: ActivityCommands,
    },
    /// Show and edit semester plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Browse and author templates
    #[command(alias = "t")]
    Template {
        #[command(subcommand)]
        command: TemplateCommands,
    },
    /// Show the category and observation point catalogs
    #[command(alias = "c")]
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
}
