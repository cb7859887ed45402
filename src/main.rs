//! Confplan CLI entrypoint.
//!
//! This is the main entrypoint for the confplan command-line tool.

use std::path::Path;
use std::process::ExitCode;

use confplan::cli::{Cli, Commands, OutputFormatter};
use confplan::config::{ChangeSpec, ConfigTree, SpecValidator};
use confplan::error::{ConfigError, ConfplanError, Result};
use confplan::planner::Planner;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Main entrypoint.
fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the logging system.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Dispatches the selected subcommand.
fn run(cli: Cli) -> Result<()> {
    let formatter = OutputFormatter::new(cli.output);

    match cli.command {
        Commands::Validate { spec, warnings } => cmd_validate(&spec, warnings, &formatter),
        Commands::Plan {
            spec,
            running,
            detailed,
        } => cmd_plan(&spec, &running, detailed, &formatter),
    }
}

/// Validate a change spec.
fn cmd_validate(spec_path: &Path, show_warnings: bool, formatter: &OutputFormatter) -> Result<()> {
    info!("Validating change spec: {}", spec_path.display());

    let spec = ChangeSpec::load_file(spec_path)?;
    let result = SpecValidator::new().check(&spec);

    println!("{}", formatter.format_validation(&result, show_warnings));

    if result.is_valid() {
        Ok(())
    } else {
        Err(ConfplanError::Config(ConfigError::validation_general(
            "Change spec failed validation",
        )))
    }
}

/// Compute and display the command plan.
fn cmd_plan(
    spec_path: &Path,
    running_path: &Path,
    detailed: bool,
    formatter: &OutputFormatter,
) -> Result<()> {
    let spec = ChangeSpec::load_file(spec_path)?;

    info!("Loading running configuration: {}", running_path.display());
    if !running_path.exists() {
        return Err(ConfplanError::Config(ConfigError::FileNotFound {
            path: running_path.to_path_buf(),
        }));
    }
    let running = ConfigTree::load_file(running_path)?;

    let plan = Planner::new().plan(&spec, &running)?;

    println!("{}", formatter.format_plan(&plan));

    if detailed && plan.changed {
        eprintln!("Blocks:");
        for block in &plan.blocks {
            eprintln!("  parents={:?}", block.parents);
            for line in &block.lines {
                eprintln!("    {line}");
            }
        }
    }

    Ok(())
}
