//! CLI for speiseplan.
//!
//! Proposes a weekly menu from the item catalog, asks for confirmation,
//! records the accepted menu in the history and prints the shopping list.
//! Rejected proposals are simply regenerated; nothing carries over between
//! two proposals except the catalog and the history.

mod logging;
mod store;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use speiseplan_core::history::parse_record_date;
use speiseplan_core::WeeklyRecord;
use speiseplan_select::{recall, MenuPlanner, PlannerConfig};
use speiseplan_shopping::{render_menu, ShoppingList};
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use time::{Date, OffsetDateTime};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing `options/` and `history/`
    #[arg(long, global = true, default_value = ".")]
    data_dir: PathBuf,

    /// Planner configuration (JSON); built-in defaults when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Defaults to `suggest`
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Propose a menu for this week, record it once accepted
    Suggest(SuggestArgs),
    /// Show the most recently recorded menu and its shopping list
    Show,
    /// Print the effective planner configuration as JSON
    Config,
}

#[derive(Args, Default)]
struct SuggestArgs {
    /// Seed for reproducible proposals
    #[arg(long)]
    seed: Option<u64>,

    /// Date to plan for (YYYY-MM-DD); defaults to today (UTC)
    #[arg(long, value_parser = parse_date)]
    today: Option<Date>,

    /// Accept the first proposal without asking
    #[arg(long)]
    yes: bool,

    /// Do not write the accepted menu to the history
    #[arg(long)]
    dry_run: bool,

    /// Commit and push the recorded menu with git
    #[arg(long, conflicts_with = "dry_run")]
    commit: bool,
}

fn parse_date(s: &str) -> std::result::Result<Date, String> {
    parse_record_date(s).map_err(|e| e.to_string())
}

fn load_config(path: Option<&Path>) -> Result<PlannerConfig> {
    let Some(path) = path else {
        return Ok(PlannerConfig::default());
    };
    let file = File::open(path).with_context(|| format!("Failed to open config {path:?}"))?;
    let value: serde_json::Value =
        serde_json::from_reader(file).with_context(|| format!("Config {path:?} is not JSON"))?;
    PlannerConfig::load(value).with_context(|| format!("Invalid planner config {path:?}"))
}

fn suggest(data_dir: &Path, planner: &MenuPlanner, args: &SuggestArgs) -> Result<()> {
    let catalog = store::load_catalog(&data_dir.join(store::OPTIONS_DIR))?;
    let history_dir = data_dir.join(store::HISTORY_DIR);
    let history = store::load_history(&history_dir)?;
    let today = args
        .today
        .unwrap_or_else(|| OffsetDateTime::now_utc().date());

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdin = io::stdin();
    let mut answers = stdin.lock().lines();
    let mut attempt = 0u32;

    loop {
        attempt += 1;
        let menu = planner
            .propose(&catalog, &history, today, &mut rng)
            .context("Failed to propose a menu")?;
        tracing::debug!(attempt, "menu proposed");
        print!("{}", render_menu(&menu));

        let accepted = if args.yes {
            true
        } else {
            print!("\nRecord menu for this week? ");
            io::stdout().flush()?;
            let answer = answers
                .next()
                .context("Input closed before a menu was accepted")??;
            answer.trim().to_lowercase().starts_with('y')
        };

        if !accepted {
            tracing::info!(attempt, "menu rejected, proposing a new one");
            println!();
            continue;
        }

        println!();
        print!("{}", ShoppingList::from_menu(&menu).render());

        if args.dry_run {
            tracing::info!("dry run, menu not recorded");
            return Ok(());
        }

        let record = WeeklyRecord::from_menu(today, &menu);
        let path = store::record(&history_dir, &record)?;
        if args.commit {
            store::commit(&history_dir, &path, &record.key())?;
        }
        return Ok(());
    }
}

fn show(data_dir: &Path) -> Result<()> {
    let catalog = store::load_catalog(&data_dir.join(store::OPTIONS_DIR))?;
    let history_dir = data_dir.join(store::HISTORY_DIR);
    let history = store::load_history(&history_dir)?;
    let latest = history
        .latest()
        .with_context(|| format!("No recorded menus in {history_dir:?}"))?;

    let recalled = recall(&catalog, latest);

    print!("{}", render_menu(&recalled.menu));
    println!();
    print!("{}", ShoppingList::from_menu(&recalled.menu).render());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let planner = MenuPlanner::new(config).context("Invalid planner configuration")?;

    match cli.command {
        None => suggest(&cli.data_dir, &planner, &SuggestArgs::default()),
        Some(Commands::Suggest(args)) => suggest(&cli.data_dir, &planner, &args),
        Some(Commands::Show) => show(&cli.data_dir),
        Some(Commands::Config) => {
            let json = serde_json::to_string_pretty(&planner.config().snapshot())?;
            println!("{json}");
            Ok(())
        }
    }
}
