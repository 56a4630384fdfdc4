//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - opens the store and loads configuration
//! - runs the sync pipeline / projections
//! - prints reports and charts

use chrono::{Datelike, Local};
use clap::Parser;

use crate::cli::{Command, DecodeArgs, InitArgs, ListArgs, ShowArgs, SyncArgs};
use crate::config::Config;
use crate::data::catalog::{builtin_milestones, builtin_sources};
use crate::domain::{GoalSpec, Milestone};
use crate::error::AppError;
use crate::px::{ParsedSeries, parse_px};
use crate::store::Store;

pub mod pipeline;

/// Entry point for the `etapp` binary.
pub fn run() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // We want `etapp` and `etapp -c Waste` to behave like `etapp list ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing. This preserves a clean clap structure while
    // retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Init(args) => handle_init(args),
        Command::Sync(args) => handle_sync(args),
        Command::List(args) => handle_list(args),
        Command::Show(args) => handle_show(args),
        Command::Decode(args) => handle_decode(args),
    }
}

fn handle_init(args: InitArgs) -> Result<(), AppError> {
    let config = Config::from_env()?;
    let store = Store::open(&config.store_dir);

    if store.is_seeded() && !args.force {
        return Err(AppError::new(
            2,
            format!(
                "Store at '{}' is already seeded. Pass --force to overwrite it.",
                store.dir().display()
            ),
        ));
    }

    let milestones = builtin_milestones();
    let sources = builtin_sources();
    store.seed(&milestones, &sources)?;
    println!(
        "Seeded {} milestones and {} sources at '{}'.",
        milestones.len(),
        sources.len(),
        store.dir().display()
    );
    Ok(())
}

fn handle_sync(args: SyncArgs) -> Result<(), AppError> {
    let config = Config::from_env()?;
    let report = pipeline::run_sync(&config, args.source_id)?;
    print!("{}", crate::report::format_sync_report(&report));
    Ok(())
}

fn handle_list(args: ListArgs) -> Result<(), AppError> {
    let config = Config::from_env()?;
    let store = Store::open(&config.store_dir);
    let mut milestones = store.load_milestones()?;

    if let Some(filter) = &args.category {
        let needle = filter.to_lowercase();
        milestones.retain(|m| {
            m.category
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(&needle))
        });
    }

    let stats = crate::report::overview_stats(&milestones);
    println!("{}", crate::report::format_overview(&stats));
    print!(
        "{}",
        crate::report::format_milestone_list(&milestones, Local::now().year())
    );
    Ok(())
}

fn handle_show(args: ShowArgs) -> Result<(), AppError> {
    let config = Config::from_env()?;
    let store = Store::open(&config.store_dir);
    let milestones = store.load_milestones()?;
    let milestone = milestones
        .iter()
        .find(|m| m.id == args.id)
        .ok_or_else(|| AppError::new(3, format!("Unknown milestone id {}", args.id)))?;

    let observed = observed_series(&store, milestone)?;
    print!(
        "{}",
        crate::report::format_milestone_detail(milestone, &observed.values, Local::now().year())
    );

    if args.plot && !args.no_plot {
        let goal = milestone.goal.as_ref().and_then(GoalSpec::from_value);
        let rows = crate::projection::chart_rows(goal.as_ref(), &observed);
        println!();
        print!("{}", crate::plot::render_chart(&rows, args.width, args.height));
    }
    Ok(())
}

/// Pull the decoded series for a milestone out of its source's cache row.
fn observed_series(store: &Store, milestone: &Milestone) -> Result<ParsedSeries, AppError> {
    let sources = store.load_sources()?;
    let Some(source) = sources.iter().find(|s| s.milestone_id == Some(milestone.id)) else {
        return Ok(ParsedSeries::default());
    };
    let Some(row) = store.cache_row(source.id)? else {
        return Ok(ParsedSeries::default());
    };
    Ok(match row.transformed {
        Some(t) => ParsedSeries {
            values: t.series,
            categories: t.categories,
            ..ParsedSeries::default()
        },
        None => ParsedSeries::default(),
    })
}

fn handle_decode(args: DecodeArgs) -> Result<(), AppError> {
    let text = std::fs::read_to_string(&args.file)
        .map_err(|e| AppError::new(2, format!("Failed to read PX file '{}': {e}", args.file.display())))?;
    let parsed = parse_px(&text);

    println!("Values ({}): {}", parsed.values.len(), fmt_values(&parsed.values));
    println!(
        "Categories ({}): {}",
        parsed.categories.len(),
        parsed.categories.join(", ")
    );
    if !parsed.is_aligned() {
        println!("note: value/category counts differ; chart years match by position");
    }
    Ok(())
}

fn fmt_values(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    parts.join(", ")
}

/// Rewrite argv so `etapp` defaults to `etapp list`.
///
/// Rules:
/// - `etapp`                      -> `etapp list`
/// - `etapp -c Waste ...`         -> `etapp list -c Waste ...`
/// - `etapp --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("list".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "init" | "sync" | "list" | "show" | "decode");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "list flags".
    if arg1.starts_with('-') {
        argv.insert(1, "list".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
