//! App Inventor project materializer.

use aia_cli::commands::{run_generate, run_inspect, run_package};
use aia_cli::logging::init_logging;
use aia_cli::summary::{print_archive, print_outcome};
use aia_package::{MaterializeOptions, PackageError, ProjectLayout};
use anyhow::{Context, Result};
use clap::Parser;

mod cli;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            report_error(&error);
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    let repo_root = match &cli.repo_root {
        Some(path) => path.clone(),
        None => std::env::current_dir().context("resolve current directory")?,
    };
    let layout = ProjectLayout::new(repo_root);
    let options = MaterializeOptions {
        check_conflicts: !cli.no_conflict_check,
    };
    match cli.command.clone().unwrap_or(Command::Generate) {
        Command::Generate => {
            let outcome = run_generate(&layout, options)?;
            print_outcome(&layout, &outcome);
        }
        Command::Package => {
            let outcome = run_package(&layout, options)?;
            print_outcome(&layout, &outcome);
        }
        Command::Inspect(args) => {
            let archive = args.archive.unwrap_or_else(|| layout.aia_path());
            let report = run_inspect(&archive)?;
            print_archive(&report);
        }
    }
    Ok(())
}

/// Gate failures carry their own remediation text; everything else prints its cause chain.
fn report_error(error: &anyhow::Error) {
    match error.downcast_ref::<PackageError>() {
        Some(package_error) if package_error.is_user_recoverable() => {
            eprintln!("error: {}", package_error.user_message());
        }
        _ => eprintln!("error: {error:#}"),
    }
}
