//! QuickPrep - project skeleton generator
//!
//! CLI entry point: interactive wizard, one-shot creation, template tools.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use tracing::info;

use quickprep::cli::{Cli, Command, NewArgs, TemplatesCommand};
use quickprep::config::Config;
use quickprep::output::{self, ConsoleSink};
use quickprep::template::user_templates_path;
use quickprep::{Materializer, ProjectPlan, ReadlineSource, RootLocation, TemplateStore, Wizard, create_project};

fn setup_logging(verbose: bool) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("quickprep")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Log to a file so prompts on stdout stay readable
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(log_dir.join("quickprep.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    info!(sources = ?config.templates.paths, "quickprep starting");

    match cli.command {
        None => cmd_wizard(&config),
        Some(Command::New(args)) if args.name.is_none() => cmd_wizard(&config),
        Some(Command::New(args)) => cmd_new(&config, args),
        Some(Command::Templates { command }) => match command {
            TemplatesCommand::List => cmd_templates_list(&config),
            TemplatesCommand::Init { path, force } => cmd_templates_init(path, force),
        },
    }
}

fn load_store(config: &Config) -> TemplateStore {
    TemplateStore::load(&config.templates.expanded_paths())
}

/// Ask the user everything, then create the project
fn cmd_wizard(config: &Config) -> Result<()> {
    output::print_banner();
    let store = load_store(config);

    let Some(answers) = Wizard::new(ReadlineSource::new()?, &store).run()? else {
        println!();
        println!("{}", "Cancelled, nothing was created".yellow());
        return Ok(());
    };

    let root = answers.location.project_root(&answers.name)?;
    let template = answers.template.and_then(|i| store.by_index(i));
    let plan = ProjectPlan::new(root, template, &answers.extras);

    run_plan(config, &plan)
}

/// Create a project from command line arguments only
fn cmd_new(config: &Config, args: NewArgs) -> Result<()> {
    let name = args.name.as_deref().unwrap_or_default();
    let location = if args.desktop {
        RootLocation::Desktop
    } else if let Some(root) = args.root {
        RootLocation::Explicit(root)
    } else {
        RootLocation::Current
    };
    let root = location.project_root(name)?;

    let store = load_store(config);
    output::print_skipped(&store);

    let template = match args.template.as_deref() {
        Some(name) if !args.manual => Some(store.get(name).ok_or_else(|| eyre!("Unknown template: {}", name))?),
        _ => None,
    };

    let plan = ProjectPlan::new(root, template, &args.extras);
    run_plan(config, &plan)
}

fn run_plan(config: &Config, plan: &ProjectPlan) -> Result<()> {
    output::print_section(&format!("Creating {}", plan.root.display()));

    let materializer = Materializer::new(config.marker_file.clone());
    let mut sink = ConsoleSink::new();
    let outcome = create_project(plan, &materializer, &mut sink).context("Failed to create project")?;

    output::print_summary(&outcome);
    Ok(())
}

fn cmd_templates_list(config: &Config) -> Result<()> {
    let store = load_store(config);
    output::print_templates(&store);
    Ok(())
}

fn cmd_templates_init(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = path
        .or_else(user_templates_path)
        .ok_or_else(|| eyre!("Could not determine a config directory; pass --path"))?;

    if quickprep::write_builtin_templates(&path, force)? {
        println!("{} Wrote templates to {}", "✓".green(), path.display().to_string().cyan());
    } else {
        println!(
            "{} {} already exists (use --force to overwrite)",
            "!".yellow(),
            path.display()
        );
    }
    Ok(())
}
