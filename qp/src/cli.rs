//! CLI command definitions and subcommands

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// QuickPrep - project skeleton generator
#[derive(Parser, Debug)]
#[command(
    name = "qp",
    author,
    version,
    about = "Create a project folder layout from a template",
    after_help = "Logs are written to: ~/.local/share/quickprep/logs/quickprep.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute (interactive wizard when omitted)
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project (asks questions when no name is given)
    New(NewArgs),

    /// Inspect or bootstrap template files
    Templates {
        #[command(subcommand)]
        command: TemplatesCommand,
    },
}

#[derive(Args, Debug)]
pub struct NewArgs {
    /// Project name; omit to run the interactive wizard
    pub name: Option<String>,

    /// Template to start from, by name
    #[arg(short, long, requires = "name", conflicts_with = "manual")]
    pub template: Option<String>,

    /// Start without a template
    #[arg(short, long, requires = "name")]
    pub manual: bool,

    /// Directory to create the project in (default: current directory)
    #[arg(short, long, requires = "name", conflicts_with = "desktop")]
    pub root: Option<PathBuf>,

    /// Create the project on the desktop
    #[arg(short, long, requires = "name")]
    pub desktop: bool,

    /// Extra folder, brace groups expand (repeatable)
    #[arg(short, long = "extra", value_name = "EXPR", requires = "name")]
    pub extras: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum TemplatesCommand {
    /// List available templates
    List,

    /// Write the builtin templates to a JSON file for editing
    Init {
        /// Target file (default: ~/.config/quickprep/templates.json)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
