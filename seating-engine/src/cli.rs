use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::Config;
use crate::seating::ordering::{group_guests, sorted};
use crate::seating::{
    ArrangementRepository, ArrangementStorage, ExportOptions, ManagerError, SeatingManager,
};
use shared::seating::{CommandResponse, CommandStatus, SeatingCommand};

#[derive(Debug, Parser)]
#[command(name = "seating", about = "Wedding seating chart engine", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Import a guest list file (first name, last name, group).
    Import(ImportArgs),

    /// Apply a JSON array of seating commands and save the result.
    Apply(ApplyArgs),

    /// Print the pool and every table.
    Show(ShowArgs),

    /// Write the export document as JSON.
    Export(ExportArgs),

    /// List weddings with a saved arrangement.
    List,

    /// Delete a wedding's saved arrangement.
    Delete(WeddingArg),
}

#[derive(Debug, Args)]
pub struct WeddingArg {
    /// Wedding identifier
    #[arg(long, short)]
    pub wedding: String,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    #[command(flatten)]
    pub target: WeddingArg,
    /// CSV or plain text guest list
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct ApplyArgs {
    #[command(flatten)]
    pub target: WeddingArg,
    /// JSON file holding an array of commands
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub target: WeddingArg,
    /// Bucket the pool by group
    #[arg(long)]
    pub grouped: bool,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub target: WeddingArg,
    /// Display name written into the export (defaults to the wedding id)
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub grouped: bool,
    /// Output path; stdout when omitted
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(cli: Cli, config: &Config) -> anyhow::Result<()> {
    let storage = ArrangementStorage::open(config.database_path())
        .with_context(|| format!("opening {}", config.database_path().display()))?;

    match cli.command {
        Commands::Import(args) => run_import(args, &storage, config),
        Commands::Apply(args) => run_apply(args, &storage, config),
        Commands::Show(args) => run_show(args, &storage, config),
        Commands::Export(args) => run_export(args, &storage, config),
        Commands::List => {
            for wedding in storage.list()? {
                println!("{}", wedding);
            }
            Ok(())
        }
        Commands::Delete(args) => {
            if storage.delete(&args.wedding)? {
                println!("Deleted {}", args.wedding);
            } else {
                println!("Nothing saved for {}", args.wedding);
            }
            Ok(())
        }
    }
}

fn load(
    storage: &ArrangementStorage,
    wedding: &str,
    config: &Config,
) -> Result<SeatingManager, ManagerError> {
    SeatingManager::load_from(storage, wedding, config.seating())
}

fn report(resp: &CommandResponse) {
    match resp.status {
        CommandStatus::Applied => {
            println!("applied: {}", resp.description.as_deref().unwrap_or_default())
        }
        CommandStatus::Skipped => println!(
            "skipped: {}",
            resp.skip_reason.map(|r| r.to_string()).unwrap_or_default()
        ),
        CommandStatus::Failed => println!(
            "failed: {}",
            resp.error.as_ref().map(|e| e.message.as_str()).unwrap_or_default()
        ),
    }
}

fn run_import(
    args: ImportArgs,
    storage: &ArrangementStorage,
    config: &Config,
) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let mut manager = load(storage, &args.target.wedding, config)?;

    let resp = manager.import_bytes(&bytes);
    report(&resp);
    if resp.is_failed() {
        anyhow::bail!("import of {} failed", args.file.display());
    }
    manager.save_to(storage)?;
    Ok(())
}

fn run_apply(
    args: ApplyArgs,
    storage: &ArrangementStorage,
    config: &Config,
) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let commands: Vec<SeatingCommand> =
        serde_json::from_str(&text).context("parsing command list")?;
    let mut manager = load(storage, &args.target.wedding, config)?;

    for cmd in commands {
        let resp = manager.execute_command(cmd);
        report(&resp);
    }
    if manager.has_unsaved_changes() {
        manager.save_to(storage)?;
    }
    Ok(())
}

fn run_show(
    args: ShowArgs,
    storage: &ArrangementStorage,
    config: &Config,
) -> anyhow::Result<()> {
    let manager = load(storage, &args.target.wedding, config)?;
    let arrangement = manager.arrangement();

    println!("Unassigned ({})", arrangement.pool.len());
    if args.grouped {
        for (group, members) in group_guests(&arrangement.pool) {
            println!("  [{}]", group);
            for guest in members {
                println!("    {:<40} {}", guest.full_name(), guest.id);
            }
        }
    } else {
        for guest in sorted(&arrangement.pool) {
            println!("  {:<40} {}", guest.full_name(), guest.id);
        }
    }

    for summary in manager.table_summaries() {
        let flag = if summary.oversized { " (over capacity)" } else { "" };
        println!(
            "{} #{} {}/{}{}",
            summary.alias, summary.number, summary.seated, summary.capacity, flag
        );
        for guest in sorted(&arrangement.tables[summary.index]) {
            println!("  {:<40} {}", guest.full_name(), guest.id);
        }
    }
    Ok(())
}

fn run_export(
    args: ExportArgs,
    storage: &ArrangementStorage,
    config: &Config,
) -> anyhow::Result<()> {
    let manager = load(storage, &args.target.wedding, config)?;
    let name = args.name.as_deref().unwrap_or(&args.target.wedding);
    let options = ExportOptions {
        view_mode: if args.grouped { "groups" } else { "tables" }.to_string(),
        is_grouped: args.grouped,
    };
    let json = serde_json::to_string_pretty(&manager.export(name, &options))?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), "Export written");
        }
        None => println!("{}", json),
    }
    Ok(())
}
