use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use clap::Parser;

use modtrack::cli::{Cli, Commands, InitArgs, ScanArgs};
use modtrack::config::{Config, STARTER_CONFIG};
use modtrack::track::{ScanOptions, Snapshot, scan_directories};
use modtrack::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, state};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Scan(args) => run_scan(args, &cli),
        Commands::Status => run_status(&cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

fn run_scan(args: &ScanArgs, cli: &Cli) -> i32 {
    match run_scan_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_scan_impl(args: &ScanArgs, cli: &Cli) -> modtrack::Result<()> {
    let project_root = state::discover_project_root(Path::new("."));
    let config = if cli.no_config {
        Config::default()
    } else {
        Config::load_or_default(&project_root)?
    };

    let dirs = scan_dirs(args, &config, &project_root);
    let mut exclude = config.exclude.clone();
    exclude.extend(args.exclude.clone());
    let options = ScanOptions {
        platform: args.platform.unwrap_or(config.platform),
        force_all: args.force,
        exclude,
    };

    let snapshot_file = state::snapshot_path(&project_root);
    let snapshot = if args.no_state {
        Snapshot::default()
    } else {
        state::load_snapshot(&snapshot_file)?
    };

    let before = snapshot.tracked_files.clone();
    let next = scan_directories(&snapshot, &dirs, &options)?;

    if !cli.quiet {
        report_scan(&before, &next);
    }

    if !args.no_state {
        state::save_snapshot(&snapshot_file, &next)?;
    }
    Ok(())
}

/// Explicit directories win; then config `dirs` (relative to the project
/// root); an empty result lets the scan fall back to `$MODTRACK_PATH`.
fn scan_dirs(args: &ScanArgs, config: &Config, project_root: &Path) -> Vec<PathBuf> {
    if !args.dirs.is_empty() {
        return args.dirs.clone();
    }
    config.dirs.iter().map(|d| project_root.join(d)).collect()
}

fn report_scan(before: &BTreeSet<PathBuf>, next: &Snapshot) {
    let added = next.tracked_files.difference(before).count();
    let removed = before.difference(&next.tracked_files).count();
    println!(
        "Tracking {} files (+{added} added, -{removed} removed)",
        next.tracked_files.len()
    );

    if !next.graph.load_order().is_empty() {
        println!("Pending load order: {}", next.graph.load_order().join(" "));
    }
    for dir in &next.mismatched_dirs {
        println!("Ignored directory: {}", dir.display());
    }
}

fn run_status(cli: &Cli) -> i32 {
    match run_status_impl(cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_status_impl(cli: &Cli) -> modtrack::Result<()> {
    let project_root = state::discover_project_root(Path::new("."));
    let snapshot = state::load_snapshot(&state::snapshot_path(&project_root))?;

    println!("Tracked files: {}", snapshot.tracked_files.len());
    println!("Last scan: {}", snapshot.last_scan_time);
    if !cli.quiet {
        for file in &snapshot.tracked_files {
            println!("  {}", file.display());
        }
    }

    if !snapshot.graph.load_order().is_empty() {
        println!(
            "Pending load order: {}",
            snapshot.graph.load_order().join(" ")
        );
    }
    if !snapshot.graph.unload_order().is_empty() {
        println!(
            "Pending unload order: {}",
            snapshot.graph.unload_order().join(" ")
        );
    }
    for dir in &snapshot.mismatched_dirs {
        println!("Ignored directory: {}", dir.display());
    }
    Ok(())
}

fn run_init(args: &InitArgs) -> i32 {
    if args.output.exists() && !args.force {
        eprintln!(
            "Error: {} already exists (use --force to overwrite)",
            args.output.display()
        );
        return EXIT_CONFIG_ERROR;
    }
    match std::fs::write(&args.output, STARTER_CONFIG) {
        Ok(()) => {
            println!("Wrote {}", args.output.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}
